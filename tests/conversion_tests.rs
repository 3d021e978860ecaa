// tests/conversion_tests.rs

use std::io::Cursor;

use convtab::convert::{ConversionSummary, LineConverter};
use convtab::syntax::parse_line;
use termcolor::NoColor;

// A helper to run a whole input through the converter.
fn convert(input: &str) -> (Vec<String>, Vec<String>, ConversionSummary) {
    let mut converter = LineConverter::new(Vec::new(), NoColor::new(Vec::new()));
    converter.convert(Cursor::new(input)).unwrap();
    let (out, diag, summary) = converter.into_parts();
    let lines = |bytes: Vec<u8>| {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };
    (lines(out), lines(diag.into_inner()), summary)
}

#[test]
fn test_every_output_line_has_four_quoted_fields() {
    let input = "'true' (boolean) as SQL_C_CHAR: 1\n\
                 'true' (boolean) as SQL_C_TYPE_TIME: h: 0 m: 0 s: 0\n\
                 'true' (boolean) as SQL_C_GUID: SQLGetData failed\n\
                 'x' (int) as SQL_C_LONG:\n";
    let (out, diag, summary) = convert(input);
    assert!(diag.is_empty());
    assert_eq!(out.len(), summary.matched);
    for line in &out {
        assert!(line.starts_with("{ std::make_tuple(\""));
        assert!(line.ends_with("\" },"));
        assert_eq!(line.matches('"').count(), 8, "{line}");
    }
}

#[test]
fn test_output_count_matches_matched_lines() {
    let input = "bad\n'a' (b) as C: 1\n'a' (b) as c: 1\n'a' (b) as C: 2\n";
    let (out, diag, summary) = convert(input);
    assert_eq!(out.len(), 2);
    assert_eq!(diag.len(), 2);
    assert_eq!(summary.lines, 4);
    assert_eq!(summary.unmatched, 2);
    assert_eq!(diag[1], "Did not match line: 'a' (b) as c: 1");
}

#[test]
fn test_formatting_is_deterministic() {
    let line = "'hello world' (varchar) as SQL_C_CHAR: hello world";
    let first = parse_line(line).unwrap().to_string();
    let second = parse_line(line).unwrap().to_string();
    assert_eq!(first, second);
    let (out, _, _) = convert(&format!("{line}\n{line}\n"));
    assert_eq!(out, vec![first.clone(), first]);
}

#[test]
fn test_empty_payload_differs_from_missing_clause() {
    let (out, diag, _) = convert("'x' (int) as SQL_C_LONG:\n'x' (int) as SQL_C_LONG\n");
    assert_eq!(out, vec!["{ std::make_tuple(\"x\", \"int\", \"SQL_C_LONG\"), \"\" },"]);
    assert_eq!(diag, vec!["Did not match line: 'x' (int) as SQL_C_LONG"]);
}

#[test]
fn test_no_escaping_is_applied() {
    let (out, _, _) = convert("'a\"b' (varchar) as SQL_C_CHAR: a\\b\n");
    assert_eq!(
        out,
        vec![r#"{ std::make_tuple("a"b", "varchar", "SQL_C_CHAR"), "a\b" },"#]
    );
}
