//! Line-by-line conversion of expectation input into table entries.

use std::io::{BufRead, Write};

use crate::cli::output::DiagnosticSink;
use crate::errors::{ConvertError, Result};
use crate::syntax::{parse_line, trim_line_ending};

/// Counts collected over one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of input lines read.
    pub lines: usize,
    /// Number of table entries written.
    pub matched: usize,
    /// Number of lines reported as unmatched.
    pub unmatched: usize,
}

/// Outcome for a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Converted,
    Unmatched,
}

/// Writes one table entry per matching line to `out` and one diagnostic per
/// non-matching line to `diagnostics`. Lines are handled strictly in order.
pub struct LineConverter<W, D> {
    out: W,
    diagnostics: D,
    summary: ConversionSummary,
}

impl<W: Write, D: DiagnosticSink> LineConverter<W, D> {
    pub fn new(out: W, diagnostics: D) -> Self {
        Self {
            out,
            diagnostics,
            summary: ConversionSummary::default(),
        }
    }

    /// Converts a single line. The line may still carry its terminator.
    pub fn convert_line(&mut self, line: &str) -> Result<LineOutcome> {
        self.summary.lines += 1;
        match parse_line(line) {
            Some(parsed) => {
                writeln!(self.out, "{parsed}").map_err(ConvertError::stdout)?;
                self.summary.matched += 1;
                Ok(LineOutcome::Converted)
            }
            None => {
                self.diagnostics
                    .unmatched(trim_line_ending(line))
                    .map_err(ConvertError::stderr)?;
                self.summary.unmatched += 1;
                Ok(LineOutcome::Unmatched)
            }
        }
    }

    /// Converts every line of `input` until end of input, then flushes both sinks.
    pub fn convert<R: BufRead>(&mut self, mut input: R) -> Result<&ConversionSummary> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|e| ConvertError::read(self.summary.lines + 1, e))?;
            if read == 0 {
                break;
            }
            self.convert_line(&line)?;
        }
        self.out.flush().map_err(ConvertError::stdout)?;
        self.diagnostics.finish().map_err(ConvertError::stderr)?;
        Ok(&self.summary)
    }

    pub fn summary(&self) -> &ConversionSummary {
        &self.summary
    }

    /// Consumes the converter, returning both sinks and the summary.
    pub fn into_parts(self) -> (W, D, ConversionSummary) {
        (self.out, self.diagnostics, self.summary)
    }
}
