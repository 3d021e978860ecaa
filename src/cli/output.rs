//! Handles all user-facing output for the CLI.
//!
//! Table entries go to stdout untouched. Diagnostics for lines that did not match go
//! through a [`DiagnosticSink`], which colors the prefix when writing to a terminal.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prefix of the diagnostic written for a line that does not match.
pub const UNMATCHED_PREFIX: &str = "Did not match line:";

// ============================================================================
// DIAGNOSTIC SINKS
// ============================================================================

/// Receives one report per input line that did not match.
pub trait DiagnosticSink {
    /// Reports `line` (without its terminator) as unmatched.
    fn unmatched(&mut self, line: &str) -> io::Result<()>;

    /// Flushes anything buffered.
    fn finish(&mut self) -> io::Result<()>;
}

impl<W: WriteColor> DiagnosticSink for W {
    fn unmatched(&mut self, line: &str) -> io::Result<()> {
        self.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(self, "{UNMATCHED_PREFIX}")?;
        self.reset()?;
        writeln!(self, " {line}")
    }

    fn finish(&mut self) -> io::Result<()> {
        Write::flush(self)
    }
}

// ============================================================================
// STREAM CONSTRUCTION
// ============================================================================

/// Color choice for stderr: colored only when it is a terminal.
pub fn stderr_color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// The diagnostic stream used by the binary.
pub fn diagnostic_stream() -> StandardStream {
    StandardStream::stderr(stderr_color_choice())
}
