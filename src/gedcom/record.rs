//! Record element
//!
//!     A record is one line of a GEDCOM document once it has been placed in the tree. Every
//!     line carries a level, an optional cross-reference identifier, a tag and an optional
//!     value:
//!
//!         0 @I1@ INDI
//!         1 NAME John /Smith/
//!         1 FAMC @F1@
//!
//!     Records live in an arena owned by the [`Document`]. Children are stored as ordered
//!     [`RecordId`]s and the parent link is a plain index, so the tree never holds shared
//!     ownership between a record and its parent.
//!
//!     Top-level records (level 0) have no parent: they hang off the synthetic document
//!     root, which sits at level -1 and is not stored as a record.

use super::document::Document;
use super::tags;
use std::fmt;

/// Index of a record inside its document's arena.
///
/// Ids are assigned in document order, so comparing two ids compares source positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single parsed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub(crate) level: usize,
    pub(crate) identifier: Option<String>,
    pub(crate) tag: String,
    pub(crate) value: String,
    pub(crate) children: Vec<RecordId>,
    pub(crate) parent: Option<RecordId>,
    pub(crate) line: usize,
}

impl Record {
    pub fn level(&self) -> usize {
        self.level
    }

    /// Cross-reference identifier including its `@` delimiters, e.g. `@I1@`
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Free text after the tag; empty when the line has none
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[RecordId] {
        &self.children
    }

    /// `None` for top-level records
    pub fn parent(&self) -> Option<RecordId> {
        self.parent
    }

    /// 1-based source line this record was parsed from
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Formats the record as its original tag line: `level [identifier] tag [value]`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(identifier) = &self.identifier {
            write!(f, " {}", identifier)?;
        }
        write!(f, " {}", self.tag)?;
        if !self.value.is_empty() {
            write!(f, " {}", self.value)?;
        }
        Ok(())
    }
}

/// A borrowed view of a record together with the document that owns it.
///
/// Views are cheap to copy and give access to the record's neighbours (parent, children)
/// and to cross-reference resolution through the document's registry.
#[derive(Clone, Copy)]
pub struct RecordRef<'doc> {
    document: &'doc Document,
    id: RecordId,
}

impl<'doc> RecordRef<'doc> {
    pub(crate) fn new(document: &'doc Document, id: RecordId) -> Self {
        Self { document, id }
    }

    pub fn id(self) -> RecordId {
        self.id
    }

    pub fn document(self) -> &'doc Document {
        self.document
    }

    /// The underlying arena record
    pub fn record(self) -> &'doc Record {
        self.document.record(self.id)
    }

    pub fn level(self) -> usize {
        self.record().level
    }

    pub fn identifier(self) -> Option<&'doc str> {
        self.record().identifier()
    }

    pub fn tag(self) -> &'doc str {
        self.record().tag()
    }

    pub fn value(self) -> &'doc str {
        self.record().value()
    }

    pub fn line(self) -> usize {
        self.record().line
    }

    pub fn is_individual(self) -> bool {
        self.tag() == tags::INDIVIDUAL
    }

    pub fn is_family(self) -> bool {
        self.tag() == tags::FAMILY
    }

    pub fn parent(self) -> Option<RecordRef<'doc>> {
        self.record()
            .parent
            .map(|id| RecordRef::new(self.document, id))
    }

    /// Direct children in document order
    pub fn children(self) -> impl Iterator<Item = RecordRef<'doc>> + 'doc {
        let document = self.document;
        self.record()
            .children
            .iter()
            .map(move |&id| RecordRef::new(document, id))
    }

    /// Direct children carrying `tag`, in document order
    pub fn children_with_tag<'t>(self, tag: &'t str) -> impl Iterator<Item = RecordRef<'doc>> + 't
    where
        'doc: 't,
    {
        self.children().filter(move |child| child.tag() == tag)
    }

    pub fn first_child_with_tag(self, tag: &str) -> Option<RecordRef<'doc>> {
        self.children().find(|child| child.tag() == tag)
    }

    /// Value of the first child carrying `tag`
    pub fn child_value(self, tag: &str) -> Option<&'doc str> {
        self.first_child_with_tag(tag).map(RecordRef::value)
    }

    /// Follows this record's value as a cross-reference.
    ///
    /// Returns the record declaring the identifier, or `None` when the value is not a
    /// known identifier.
    pub fn resolve(self) -> Option<RecordRef<'doc>> {
        self.document.lookup(self.value())
    }
}

impl PartialEq for RecordRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl Eq for RecordRef<'_> {}

impl fmt::Debug for RecordRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRef")
            .field("id", &self.id.0)
            .field("line", &self.line())
            .field("text", &self.record().to_string())
            .finish()
    }
}

impl fmt::Display for RecordRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.record(), f)
    }
}
