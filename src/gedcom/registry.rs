//! Pointer registry
//!
//!     Maps a cross-reference identifier (`@I1@`, `@F3@`, ...) to the record that declares
//!     it. The registry is filled while the tree is built and is read-only afterwards. It
//!     belongs to a single document; two parsed documents never share one.
//!
//!     Identifiers are meant to be unique. When a document repeats one, the last record to
//!     declare it wins, and the displaced record is kept as a [`DuplicateIdentifier`]
//!     diagnostic so the ambiguity is visible to callers.

use super::record::RecordId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PointerRegistry {
    entries: HashMap<String, RecordId>,
}

impl PointerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` under `identifier`, returning the record it replaced, if any.
    pub(crate) fn insert(&mut self, identifier: &str, id: RecordId) -> Option<RecordId> {
        self.entries.insert(identifier.to_string(), id)
    }

    pub fn get(&self, identifier: &str) -> Option<RecordId> {
        self.entries.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An identifier declared by more than one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdentifier {
    pub identifier: String,
    /// The earlier declaration, no longer reachable through the registry
    pub replaced: RecordId,
    /// The declaration the registry now points to
    pub kept: RecordId,
}
