//! Parsing module for GEDCOM documents
//!
//!     Parsing turns source text into a [`Document`] in two stages:
//!         1. Line grammar: each line is decomposed into level, identifier, tag and value.
//!            See the [line](line) module.
//!         2. Tree building: records are attached to the nearest preceding record one level
//!            up, walking back along the current path. See the [builder](builder) module.
//!
//!     Both stages are strict. A malformed line or a level that jumps more than one step
//!     deeper aborts the whole parse and no partial tree is returned.
//!
//! Line Splitting
//!
//!     The source is split on `\n`. A trailing `\r` on each line is dropped, and so is the
//!     empty remainder after a final line terminator. Line numbers are 1-based and count
//!     every physical line, including skipped blank ones.

pub mod builder;
pub mod line;

pub use builder::TreeBuilder;
pub use line::{parse_line, ParsedLine};

use super::config::ParsingConfig;
use super::document::Document;
use super::error::ParseResult;
use log::{debug, trace};
use serde::Deserialize;

/// What to do when two records declare the same identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Keep the most recent declaration in the registry and record a diagnostic
    #[default]
    LastWriterWins,
    /// Fail the parse on the second declaration
    Reject,
}

/// Split source text into numbered lines.
pub fn source_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    let body = source.strip_suffix('\n').unwrap_or(source);
    let lines = if source.is_empty() {
        None
    } else {
        Some(body.split('\n'))
    };
    lines
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, line)| (index + 1, line.strip_suffix('\r').unwrap_or(line)))
}

/// Parse a full document from source text.
pub fn parse_document(source: &str, config: &ParsingConfig) -> ParseResult<Document> {
    build(source_lines(source), config)
}

/// Parse a document from lines that were already split.
///
/// Lines must not contain their terminators; a trailing `\r` is tolerated.
pub fn parse_lines<I, S>(lines: I, config: &ParsingConfig) -> ParseResult<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build(
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| (index + 1, line)),
        config,
    )
}

fn build<S: AsRef<str>>(
    lines: impl Iterator<Item = (usize, S)>,
    config: &ParsingConfig,
) -> ParseResult<Document> {
    let mut builder = TreeBuilder::new(config.duplicate_identifiers);
    for (number, line) in lines {
        push(&mut builder, number, line.as_ref(), config)?;
    }
    Ok(finish(builder))
}

fn push(
    builder: &mut TreeBuilder,
    number: usize,
    line: &str,
    config: &ParsingConfig,
) -> ParseResult<()> {
    if config.skip_blank_lines && line.trim().is_empty() {
        trace!("Skipping blank line {}", number);
        return Ok(());
    }
    builder.push_line(number, line)?;
    Ok(())
}

fn finish(builder: TreeBuilder) -> Document {
    let document = builder.finish();
    debug!(
        "Parsed {} records, {} identifiers, {} duplicates",
        document.len(),
        document.registry().len(),
        document.duplicates().len()
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::error::ParseError;

    #[test]
    fn splits_and_drops_final_terminator() {
        let lines: Vec<_> = source_lines("0 HEAD\r\n1 SOUR FTW\r\n").collect();
        assert_eq!(lines, vec![(1, "0 HEAD"), (2, "1 SOUR FTW")]);
    }

    #[test]
    fn keeps_last_line_without_terminator() {
        let lines: Vec<_> = source_lines("0 HEAD\r\n1 SOUR FTW\r").collect();
        assert_eq!(lines, vec![(1, "0 HEAD"), (2, "1 SOUR FTW")]);
    }

    #[test]
    fn empty_source_has_no_lines() {
        assert_eq!(source_lines("").count(), 0);
        let doc = parse_document("", &ParsingConfig::default()).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn blank_lines_are_malformed_by_default() {
        let err = parse_document("0 HEAD\n\n0 TRLR\n", &ParsingConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: 2,
                content: String::new()
            }
        );
    }

    #[test]
    fn blank_lines_can_be_skipped() {
        let config = ParsingConfig {
            skip_blank_lines: true,
            ..ParsingConfig::default()
        };
        let doc = parse_document("0 HEAD\n   \n0 TRLR\n", &config).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.records().nth(1).unwrap().line(), 3);
    }

    #[test]
    fn parse_lines_accepts_pre_split_input() {
        let doc = parse_lines(["0 HEAD", "1 CHAR UTF-8"], &ParsingConfig::default()).unwrap();
        assert_eq!(doc.len(), 2);
    }
}
