//! The convtab command-line interface.
//!
//! Wires stdin, stdout and stderr into a [`LineConverter`] and turns fatal errors into
//! an exit status.

use std::io;
use std::process;

use clap::Parser;
use miette::Report;

use crate::cli::args::ConvtabArgs;
use crate::convert::LineConverter;
use crate::errors::Result;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let _args = ConvtabArgs::parse();

    if let Err(e) = convert_stdio() {
        eprintln!("{:?}", Report::new(e));
        process::exit(1);
    }
}

/// Converts stdin to stdout, reporting unmatched lines on stderr.
fn convert_stdio() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut converter = LineConverter::new(stdout.lock(), output::diagnostic_stream());
    converter.convert(stdin.lock())?;
    Ok(())
}
