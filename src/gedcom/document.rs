//! Document
//!
//!     The document is the result of a successful parse: the record arena in document
//!     order, the list of top-level records, and the pointer registry. It is built once
//!     and never mutated afterwards, so a `&Document` can be shared freely between readers,
//!     across threads included. New input means a new document.

use super::config::ParsingConfig;
use super::error::{ParseResult, QueryError, QueryResult};
use super::parsing;
use super::query::{Family, Individual, Query};
use super::record::{Record, RecordId, RecordRef};
use super::registry::{DuplicateIdentifier, PointerRegistry};

#[derive(Debug, Clone, Default)]
pub struct Document {
    records: Vec<Record>,
    top_level: Vec<RecordId>,
    registry: PointerRegistry,
    duplicates: Vec<DuplicateIdentifier>,
}

impl Document {
    pub(crate) fn from_parts(
        records: Vec<Record>,
        top_level: Vec<RecordId>,
        registry: PointerRegistry,
        duplicates: Vec<DuplicateIdentifier>,
    ) -> Self {
        Self {
            records,
            top_level,
            registry,
            duplicates,
        }
    }

    /// Parse source text with the default parsing options.
    pub fn parse(source: &str) -> ParseResult<Self> {
        Self::parse_with(source, &ParsingConfig::default())
    }

    pub fn parse_with(source: &str, config: &ParsingConfig) -> ParseResult<Self> {
        parsing::parse_document(source, config)
    }

    /// Parse lines that were already split, without their terminators.
    pub fn from_lines<I, S>(lines: I) -> ParseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parsing::parse_lines(lines, &ParsingConfig::default())
    }

    /// Number of records, which is the number of lines parsed
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn record(&self, id: RecordId) -> &Record {
        &self.records[id.0]
    }

    /// Look up a record by id. Ids from another document may be out of range.
    pub fn get(&self, id: RecordId) -> Option<RecordRef<'_>> {
        (id.0 < self.records.len()).then(|| RecordRef::new(self, id))
    }

    /// All records, flat, in document order
    pub fn records(&self) -> impl Iterator<Item = RecordRef<'_>> + '_ {
        (0..self.records.len()).map(move |index| RecordRef::new(self, RecordId(index)))
    }

    /// Children of the synthetic root, in document order
    pub fn top_level(&self) -> impl Iterator<Item = RecordRef<'_>> + '_ {
        self.top_level.iter().map(move |&id| RecordRef::new(self, id))
    }

    pub fn registry(&self) -> &PointerRegistry {
        &self.registry
    }

    /// Identifiers that were declared more than once while parsing
    pub fn duplicates(&self) -> &[DuplicateIdentifier] {
        &self.duplicates
    }

    /// The record declaring `identifier`, e.g. `@I1@`
    pub fn lookup(&self, identifier: &str) -> Option<RecordRef<'_>> {
        self.registry
            .get(identifier)
            .map(|id| RecordRef::new(self, id))
    }

    /// The individual declaring `identifier`.
    pub fn individual(&self, identifier: &str) -> QueryResult<Individual<'_>> {
        let record = self
            .lookup(identifier)
            .ok_or_else(|| QueryError::UnknownIdentifier(identifier.to_string()))?;
        Individual::try_from(record)
    }

    /// The family declaring `identifier`.
    pub fn family(&self, identifier: &str) -> QueryResult<Family<'_>> {
        let record = self
            .lookup(identifier)
            .ok_or_else(|| QueryError::UnknownIdentifier(identifier.to_string()))?;
        Family::try_from(record)
    }

    /// Top-level individual records in document order
    pub fn individuals(&self) -> impl Iterator<Item = Individual<'_>> + '_ {
        self.top_level()
            .filter_map(|record| Individual::try_from(record).ok())
    }

    /// Top-level family records in document order
    pub fn families(&self) -> impl Iterator<Item = Family<'_>> + '_ {
        self.top_level().filter_map(|record| Family::try_from(record).ok())
    }

    /// A query engine over this document with the default cycle policy
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::testing::fixtures;

    #[test]
    fn flat_list_matches_line_count() {
        let doc = Document::parse(fixtures::HEADER).unwrap();
        assert_eq!(doc.len(), fixtures::HEADER.lines().count());
    }

    #[test]
    fn registry_points_at_declaring_records() {
        let doc = Document::parse(fixtures::THREE_GENERATIONS).unwrap();
        for record in doc.records() {
            if let Some(identifier) = record.identifier() {
                assert_eq!(doc.lookup(identifier), Some(record));
            }
        }
        assert_eq!(
            doc.registry().len(),
            doc.records().filter(|r| r.identifier().is_some()).count()
        );
    }

    #[test]
    fn individual_lookup_checks_category() {
        let doc = Document::parse(fixtures::THREE_GENERATIONS).unwrap();
        assert!(doc.individual("@I1@").is_ok());
        assert!(matches!(
            doc.individual("@F1@"),
            Err(QueryError::Category { .. })
        ));
        assert_eq!(
            doc.family("@F9@").unwrap_err(),
            QueryError::UnknownIdentifier("@F9@".to_string())
        );
    }

    #[test]
    fn get_rejects_out_of_range_ids() {
        let doc = Document::parse("0 HEAD\n").unwrap();
        assert!(doc.get(RecordId(0)).is_some());
        assert!(doc.get(RecordId(1)).is_none());
    }

    #[test]
    fn documents_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Document>();
    }
}
