//! Error types for parsing, loading and querying

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the construction of a [`Document`](crate::gedcom::Document).
///
/// No partially built tree is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line does not follow `level [@ID@] TAG [value]`
    #[error("line {line}: malformed record line {content:?}")]
    MalformedLine { line: usize, content: String },

    /// The line is nested more than one level deeper than the line before it
    #[error("line {line}: level {level} is deeper than the allowed level {max_allowed}")]
    Structural {
        line: usize,
        level: usize,
        max_allowed: usize,
    },

    /// An identifier was declared twice while duplicates are rejected
    #[error("line {line}: identifier {identifier} was already declared on line {first_line}")]
    DuplicateIdentifier {
        line: usize,
        identifier: String,
        first_line: usize,
    },
}

impl ParseError {
    /// 1-based source line the error refers to
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedLine { line, .. }
            | ParseError::Structural { line, .. }
            | ParseError::DuplicateIdentifier { line, .. } => *line,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Record categories the query engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Individual,
    Family,
}

impl Category {
    pub fn tag(self) -> &'static str {
        match self {
            Category::Individual => crate::gedcom::tags::INDIVIDUAL,
            Category::Family => crate::gedcom::tags::FAMILY,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Individual => write!(f, "individual ({})", self.tag()),
            Category::Family => write!(f, "family ({})", self.tag()),
        }
    }
}

/// Errors reported by the query engine.
///
/// Unresolved references and unparsable dates are not errors; queries skip them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A record of the wrong category was handed to a query
    #[error("line {line}: expected {expected} record, found {found}")]
    Category {
        expected: Category,
        found: String,
        line: usize,
    },

    /// No record declares the identifier
    #[error("no record declares identifier {0}")]
    UnknownIdentifier(String),

    /// The family graph loops back onto an individual already on the walk
    #[error("individual {identifier} is its own ancestor")]
    Cycle { identifier: String },

    /// A search criteria string could not be understood
    #[error("invalid criteria {criteria:?}: {reason}")]
    Criteria { criteria: String, reason: String },
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_report_their_line() {
        let err = ParseError::Structural {
            line: 2,
            level: 2,
            max_allowed: 1,
        };
        assert_eq!(err.line(), 2);
        assert_eq!(
            err.to_string(),
            "line 2: level 2 is deeper than the allowed level 1"
        );
    }

    #[test]
    fn category_error_names_the_expected_tag() {
        let err = QueryError::Category {
            expected: Category::Family,
            found: "INDI".to_string(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "line 7: expected family (FAM) record, found INDI"
        );
    }
}
