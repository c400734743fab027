//! Output formats for parsed documents
//!
//!     - lines: one tag line per record, `level [identifier] tag [value]`, in document order.
//!       Re-parsing the output yields the same records, modulo whitespace normalization.
//!     - treeviz: one line per record, nesting drawn with box characters, labels truncated.
//!     - json / yaml: the record tree as nested [`RecordSnapshot`]s, via serde.
//!
//! Treeviz example:
//!
//!     ├─ HEAD
//!     │  └─ SOUR FTW
//!     │     └─ VERS 3.40
//!     └─ @I1@ INDI
//!        └─ NAME John /Smith/

use super::config::OutputFormat;
use super::document::Document;
use super::record::RecordRef;
use serde::Serialize;
use thiserror::Error;

const LABEL_WIDTH: usize = 30;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serializable view of a record and its subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSnapshot {
    pub line: usize,
    pub level: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RecordSnapshot>,
}

impl RecordSnapshot {
    pub fn from_record(record: RecordRef<'_>) -> Self {
        Self {
            line: record.line(),
            level: record.level(),
            identifier: record.identifier().map(str::to_string),
            tag: record.tag().to_string(),
            value: record.value().to_string(),
            children: record.children().map(Self::from_record).collect(),
        }
    }
}

/// Snapshots of every top-level record
pub fn snapshot_from_document(document: &Document) -> Vec<RecordSnapshot> {
    document.top_level().map(RecordSnapshot::from_record).collect()
}

/// Every record as its tag line, `\n` terminated
pub fn to_tag_lines(document: &Document) -> String {
    document
        .records()
        .map(|record| format!("{}\n", record))
        .collect()
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(record: RecordRef<'_>) -> String {
    let mut label = String::new();
    if let Some(identifier) = record.identifier() {
        label.push_str(identifier);
        label.push(' ');
    }
    label.push_str(record.tag());
    if !record.value().is_empty() {
        label.push(' ');
        label.push_str(record.value());
    }
    label
}

fn format_record(
    record: RecordRef<'_>,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let linum_prefix = if show_linum {
        format!("{:02} ", record.line())
    } else {
        String::new()
    };

    output.push_str(&format!(
        "{}{}{} {}\n",
        linum_prefix,
        prefix,
        connector,
        truncate(&label(record), LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let count = record.record().children().len();
    for (index, child) in record.children().enumerate() {
        format_record(child, &child_prefix, index + 1 == count, show_linum, output);
    }
}

/// Tree view of the document, optionally prefixed with source line numbers
pub fn to_treeviz_str_with(document: &Document, show_linum: bool) -> String {
    let mut output = String::new();
    let count = document.top_level().count();
    for (index, record) in document.top_level().enumerate() {
        format_record(record, "", index + 1 == count, show_linum, &mut output);
    }
    output
}

pub fn to_treeviz_str(document: &Document) -> String {
    to_treeviz_str_with(document, false)
}

pub fn to_json(document: &Document) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(&snapshot_from_document(document))?)
}

pub fn to_yaml(document: &Document) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(&snapshot_from_document(document))?)
}

/// Render the whole document in the requested format
pub fn render(document: &Document, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Lines => Ok(to_tag_lines(document)),
        OutputFormat::Treeviz => Ok(to_treeviz_str(document)),
        OutputFormat::Json => to_json(document),
        OutputFormat::Yaml => to_yaml(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "0 HEAD\n1 SOUR FTW\n2 VERS 3.40\n0 @I1@ INDI\n1 NAME John /Smith/\n";

    #[test]
    fn tag_lines_reproduce_the_source() {
        let doc = Document::parse(SMALL).unwrap();
        assert_eq!(to_tag_lines(&doc), SMALL);
    }

    #[test]
    fn treeviz_draws_nesting() {
        let doc = Document::parse(SMALL).unwrap();
        let expected = [
            "├─ HEAD",
            "│  └─ SOUR FTW",
            "│     └─ VERS 3.40",
            "└─ @I1@ INDI",
            "   └─ NAME John /Smith/",
        ]
        .join("\n")
            + "\n";
        assert_eq!(to_treeviz_str(&doc), expected);
    }

    #[test]
    fn treeviz_truncates_long_labels() {
        let doc = Document::parse("0 NOTE This note is far too long to show in one tree row\n")
            .unwrap();
        assert_eq!(to_treeviz_str(&doc), "└─ NOTE This note is far too long...\n");
    }

    #[test]
    fn treeviz_line_numbers() {
        let doc = Document::parse("0 HEAD\n1 CHAR ANSI\n").unwrap();
        assert_eq!(
            to_treeviz_str_with(&doc, true),
            "01 └─ HEAD\n02    └─ CHAR ANSI\n"
        );
    }

    #[test]
    fn json_nests_children() {
        let doc = Document::parse(SMALL).unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();
        assert_eq!(value[0]["tag"], "HEAD");
        assert_eq!(value[0]["children"][0]["children"][0]["value"], "3.40");
        assert_eq!(value[1]["identifier"], "@I1@");
        assert!(value[1].get("value").is_none());
    }

    #[test]
    fn yaml_renders() {
        let doc = Document::parse("0 HEAD\n").unwrap();
        let yaml = render(&doc, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("tag: HEAD"));
    }
}
