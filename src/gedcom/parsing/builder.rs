//! Tree builder
//!
//!     The builder consumes parsed lines in document order and hangs each new record under
//!     the right parent. It keeps a single piece of state, the last record it created. The
//!     chain of parents from that record up to the root is the "current path", and it is
//!     the only place a new record's parent can come from:
//!
//!         0 @F1@ FAM          <- path: FAM
//!         1 CHIL @I3@         <- path: FAM > CHIL
//!         2 _FREL Natural     <- path: FAM > CHIL > _FREL
//!         1 HUSB @I1@         <- walk back to FAM, path: FAM > HUSB
//!
//!     A line may go at most one level deeper than the previous line, and may come back up
//!     any number of levels. Finding the parent is a walk back up the current path, which
//!     costs O(depth) per line.

use crate::gedcom::document::Document;
use crate::gedcom::error::{ParseError, ParseResult};
use crate::gedcom::parsing::line::parse_line;
use crate::gedcom::parsing::DuplicatePolicy;
use crate::gedcom::record::{Record, RecordId};
use crate::gedcom::registry::{DuplicateIdentifier, PointerRegistry};
use log::warn;

/// Incremental builder for a [`Document`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    records: Vec<Record>,
    top_level: Vec<RecordId>,
    registry: PointerRegistry,
    duplicates: Vec<DuplicateIdentifier>,
    last: Option<RecordId>,
    policy: DuplicatePolicy,
}

impl TreeBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Parse one line and attach it to the tree.
    ///
    /// `line_number` is 1-based. On error the builder should be discarded; the caller is
    /// expected to abort the whole parse.
    pub fn push_line(&mut self, line_number: usize, raw: &str) -> ParseResult<RecordId> {
        let parsed = parse_line(line_number, raw)?;

        // The synthetic root sits at level -1, so the first line must be level 0
        let max_allowed = self.last.map_or(0, |id| self.records[id.0].level + 1);
        if parsed.level > max_allowed {
            return Err(ParseError::Structural {
                line: line_number,
                level: parsed.level,
                max_allowed,
            });
        }

        let id = RecordId(self.records.len());
        if let Some(identifier) = &parsed.identifier {
            self.register(identifier, id, line_number)?;
        }

        let parent = self.parent_for(parsed.level);
        self.records.push(Record {
            level: parsed.level,
            identifier: parsed.identifier,
            tag: parsed.tag,
            value: parsed.value,
            children: Vec::new(),
            parent,
            line: line_number,
        });
        match parent {
            Some(parent) => self.records[parent.0].children.push(id),
            None => self.top_level.push(id),
        }
        self.last = Some(id);

        Ok(id)
    }

    /// Walk back along the current path to the nearest record one level up.
    ///
    /// `None` means the new record belongs to the synthetic root.
    fn parent_for(&self, level: usize) -> Option<RecordId> {
        let mut candidate = self.last;
        while let Some(id) = candidate {
            let record = &self.records[id.0];
            if record.level < level {
                break;
            }
            candidate = record.parent;
        }
        candidate
    }

    fn register(&mut self, identifier: &str, id: RecordId, line_number: usize) -> ParseResult<()> {
        if self.policy == DuplicatePolicy::Reject {
            if let Some(existing) = self.registry.get(identifier) {
                return Err(ParseError::DuplicateIdentifier {
                    line: line_number,
                    identifier: identifier.to_string(),
                    first_line: self.records[existing.0].line,
                });
            }
        }

        if let Some(replaced) = self.registry.insert(identifier, id) {
            warn!(
                "Identifier {} on line {} repeats line {}, keeping the later record",
                identifier,
                line_number,
                self.records[replaced.0].line
            );
            self.duplicates.push(DuplicateIdentifier {
                identifier: identifier.to_string(),
                replaced,
                kept: id,
            });
        }
        Ok(())
    }

    pub fn finish(self) -> Document {
        Document::from_parts(self.records, self.top_level, self.registry, self.duplicates)
    }
}
