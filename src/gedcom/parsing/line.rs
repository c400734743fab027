//! Line grammar
//!
//!     Every GEDCOM line has the shape:
//!
//!         level SP [identifier SP] tag [SP value]
//!
//!     - level: `0` or digits without a leading zero
//!     - identifier: optional, flanked by `@` on both sides (`@I1@`), kept with its delimiters
//!     - tag: letters, digits and underscore
//!     - value: the rest of the line, leading whitespace trimmed, may be empty
//!
//!     Leading whitespace before the level is tolerated. A line that does not match is
//!     rejected as a whole; there is no partial recovery.

use crate::gedcom::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled regex for a single record line (terminators already stripped).
static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(0|[1-9][0-9]*) (?:(@[^@]+@) )?([A-Za-z0-9_]+)(?:[ \t]+(.*))?$").unwrap()
});

/// The parts of one record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub level: usize,
    pub identifier: Option<String>,
    pub tag: String,
    pub value: String,
}

/// Decompose `raw` into its parts, or fail with [`ParseError::MalformedLine`].
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line_number: usize, raw: &str) -> ParseResult<ParsedLine> {
    let malformed = || ParseError::MalformedLine {
        line: line_number,
        content: raw.to_string(),
    };

    let line = raw.trim_end_matches(['\r', '\n']);
    let captures = LINE_REGEX.captures(line).ok_or_else(malformed)?;

    // The level group only holds digits, so the parse can only fail on overflow
    let level = captures[1].parse::<usize>().map_err(|_| malformed())?;
    let identifier = captures
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .filter(|identifier| !identifier.is_empty());
    let tag = captures[3].to_string();
    let value = captures
        .get(4)
        .map(|m| m.as_str().trim_start().to_string())
        .unwrap_or_default();

    Ok(ParsedLine {
        level,
        identifier,
        tag,
        value,
    })
}
