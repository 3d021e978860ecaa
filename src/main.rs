fn main() {
    convtab::cli::run();
}
