//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading GEDCOM source text from files
//! or strings and parsing it. This is used by both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use gedcom::gedcom::loader::DocumentLoader;
//!
//! // From file
//! let doc = DocumentLoader::from_path("family.ged")?.parse()?;
//!
//! // From string
//! let doc = DocumentLoader::from_string("0 HEAD\n0 TRLR\n").parse()?;
//! ```
//!
//! Only UTF-8 input is supported. A leading byte order mark is dropped.

use super::config::ParsingConfig;
use super::document::Document;
use super::error::LoaderError;
use log::debug;
use std::fs;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Source text waiting to be parsed
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} bytes from {}", source.len(), path.display());
        Ok(Self::from_string(source))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        let mut source = source.into();
        if source.starts_with(BYTE_ORDER_MARK) {
            source.drain(..BYTE_ORDER_MARK.len_utf8());
        }
        DocumentLoader { source }
    }

    /// The loaded source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse with the default options
    pub fn parse(&self) -> Result<Document, LoaderError> {
        self.parse_with(&ParsingConfig::default())
    }

    pub fn parse_with(&self, config: &ParsingConfig) -> Result<Document, LoaderError> {
        Ok(Document::parse_with(&self.source, config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::error::ParseError;
    use std::io::Write;

    #[test]
    fn strips_byte_order_mark() {
        let loader = DocumentLoader::from_string("\u{feff}0 HEAD\n");
        assert_eq!(loader.source(), "0 HEAD\n");
        assert_eq!(loader.parse().unwrap().len(), 1);
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0 HEAD\r\n1 CHAR UTF-8\r\n0 TRLR\r\n").unwrap();
        let doc = DocumentLoader::from_path(file.path()).unwrap().parse().unwrap();
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn missing_files_are_io_errors() {
        let err = DocumentLoader::from_path("/no/such/file.ged").unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
        assert!(err.to_string().contains("/no/such/file.ged"));
    }

    #[test]
    fn parse_errors_pass_through() {
        let err = DocumentLoader::from_string("0 HEAD\n2 VERS 1\n").parse().unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Parse(ParseError::Structural { line: 2, .. })
        ));
    }
}
