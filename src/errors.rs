//! Convtab error handling.
//!
//! A line that does not match the expectation pattern is not an error: it is reported
//! through the diagnostic sink and conversion continues. Everything in this module is
//! fatal and ends the run with a non-zero exit status.

use miette::Diagnostic;
use std::fmt;
use std::io;
use thiserror::Error;

/// Which output stream a write failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => write!(f, "stdout"),
            Stream::Stderr => write!(f, "stderr"),
        }
    }
}

/// Unrecoverable failures of a conversion run.
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error("I/O error: failed to read input line {line}")]
    #[diagnostic(code(convtab::io::read))]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: input line {line} is not valid UTF-8")]
    #[diagnostic(
        code(convtab::io::encoding),
        help("expectation files must be UTF-8 encoded text")
    )]
    InvalidUtf8 { line: usize },

    #[error("I/O error: failed to write to {stream}")]
    #[diagnostic(code(convtab::io::write))]
    Write {
        stream: Stream,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Builds the read error for `line`, splitting out decoding failures.
    pub fn read(line: usize, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            ConvertError::InvalidUtf8 { line }
        } else {
            ConvertError::Read { line, source }
        }
    }

    pub fn stdout(source: io::Error) -> Self {
        ConvertError::Write {
            stream: Stream::Stdout,
            source,
        }
    }

    pub fn stderr(source: io::Error) -> Self {
        ConvertError::Write {
            stream: Stream::Stderr,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
