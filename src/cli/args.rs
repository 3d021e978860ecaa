//! Defines the command-line arguments for the convtab CLI.
//!
//! The tool reads stdin and writes stdout, so there are no functional options. The
//! `clap` derive still provides `--help`, `--version` and usage errors.

use clap::Parser;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "convtab",
    version,
    about = "Convert result-conversion expectation lines into C++ test table entries.",
    long_about = "Reads lines like `'true' (boolean) as SQL_C_SBIGINT: 1` from stdin and \
                  writes `{ std::make_tuple(\"true\", \"boolean\", \"SQL_C_SBIGINT\"), \"1\" },` \
                  to stdout. Lines that do not match are reported on stderr and skipped."
)]
pub struct ConvtabArgs {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definition_is_valid() {
        ConvtabArgs::command().debug_assert();
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(ConvtabArgs::try_parse_from(["convtab", "input.txt"]).is_err());
        assert!(ConvtabArgs::try_parse_from(["convtab"]).is_ok());
    }
}
