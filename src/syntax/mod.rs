//! Parsing of expectation lines into table fields.

pub mod parser;

pub use parser::{parse_line, trim_line_ending, ParsedLine};
