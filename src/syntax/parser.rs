//! Expectation line parser.
//!
//! An expectation line reads `'value' (type) as SQLTYPE: correct`, for example
//! `'true' (boolean) as SQL_C_SBIGINT: 1`. The whole line must match; there is no
//! partial parse.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Anchored expectation pattern. The colon after the SQL type is mandatory; the
/// ` correct` clause after it is optional and may be empty.
static EXPECTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^'(?P<value>.*)' \((?P<type>\w+)\) as (?P<sqltype>[A-Z_]+):(?: (?P<correct>.*))?$")
        .expect("expectation pattern is valid")
});

/// The four fields captured from one expectation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub value: &'a str,
    pub type_name: &'a str,
    pub sqltype: &'a str,
    /// `None` for `SQLTYPE:`, `Some("")` for `SQLTYPE: `.
    pub correct: Option<&'a str>,
}

impl<'a> ParsedLine<'a> {
    /// The expected result as it appears in the table. An absent result is the empty string.
    pub fn correct_or_empty(&self) -> &'a str {
        self.correct.unwrap_or("")
    }
}

/// Renders the C++ table entry, without a trailing newline.
impl fmt::Display for ParsedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ std::make_tuple(\"{}\", \"{}\", \"{}\"), \"{}\" }},",
            self.value,
            self.type_name,
            self.sqltype,
            self.correct_or_empty()
        )
    }
}

/// Strips one trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Matches `line` against the expectation pattern. A trailing line terminator is ignored.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let caps = EXPECTATION.captures(trim_line_ending(line))?;
    Some(ParsedLine {
        value: caps.name("value")?.as_str(),
        type_name: caps.name("type")?.as_str(),
        sqltype: caps.name("sqltype")?.as_str(),
        correct: caps.name("correct").map(|m| m.as_str()),
    })
}
