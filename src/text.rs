//! Whitespace collapsing for literal JSX text.
//!
//! Source text inside an element keeps the author's indentation and line
//! breaks; the rendered string should not. Lines are trimmed individually
//! and rejoined with single spaces, except that nothing is appended after
//! the last line that still carries visible characters.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAK_RE: Regex = Regex::new(r"\r\n|\n|\r").unwrap();
}

/// Collapse a raw JSX text value. Returns the empty string when nothing
/// visible survives, in which case the child is dropped entirely.
pub fn normalize_jsx_text(value: &str) -> String {
    let lines: Vec<&str> = LINE_BREAK_RE.split(value).collect();
    let line_count = lines.len();

    // Last line below which only blank lines follow. Line 0 never counts,
    // matching the single-line case where no separator is wanted.
    let mut last_significant = 0;
    for i in (1..line_count).rev() {
        if lines[i].chars().any(|c| c != ' ' && c != '\t') {
            last_significant = i;
            break;
        }
    }

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let mut fragment = line.replace('\t', " ");
        if i != 0 {
            fragment = fragment.trim_start_matches(' ').to_string();
        }
        if i != line_count - 1 {
            fragment = fragment.trim_end_matches(' ').to_string();
        }
        if fragment.is_empty() {
            continue;
        }
        out.push_str(&fragment);
        if i != last_significant {
            out.push(' ');
        }
    }
    out
}
