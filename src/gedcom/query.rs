//! Traversal and query engine
//!
//!     Queries run on a finished [`Document`]: the record tree plus its pointer registry.
//!     Relationships are not stored as edges anywhere, they are recovered from
//!     cross-references every time:
//!
//!         individual --FAMS/FAMC--> family --HUSB/WIFE/CHIL--> individual
//!
//!     A family's CHIL entry may carry relation annotations (`_FREL` for the father,
//!     `_MREL` for the mother). A value of `Natural` marks a biological link, which is what
//!     the biological parent mode and the ancestor path search follow.
//!
//! Categories
//!
//!     Queries only make sense on individual (`INDI`) or family (`FAM`) records. Rather
//!     than re-checking the tag in every operation, the checks happen once when a record
//!     is turned into an [`Individual`] or a [`Family`]; see the [category](category)
//!     module.
//!
//! Soft failures
//!
//!     A reference that resolves to nothing, or to a record of the wrong category, is
//!     skipped. So is a date fragment that does not parse. Broken metadata in one corner
//!     of a document never blocks queries over the rest of it.
//!
//! Cycles
//!
//!     The family graph is assumed to be acyclic, but nothing in the format enforces that.
//!     Ancestor and path queries track the individuals on the current walk, and react to
//!     a loop according to the [`CyclePolicy`].

pub mod ancestry;
pub mod category;
pub mod marriage;
pub mod relations;

pub use category::{Family, Individual};
pub use marriage::Marriage;

use super::document::Document;
use super::tags;
use serde::Deserialize;

/// Which membership references of an individual to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyLink {
    /// `FAMS`: families where the individual is a spouse
    Spouse,
    /// `FAMC`: families where the individual is a child
    Child,
}

impl FamilyLink {
    pub fn tag(self) -> &'static str {
        match self {
            FamilyLink::Spouse => tags::SPOUSE_IN_FAMILY,
            FamilyLink::Child => tags::CHILD_IN_FAMILY,
        }
    }
}

/// Which members of a family to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberRole {
    /// Husband, wife and children
    #[default]
    All,
    /// Husband and wife
    Parents,
    Husband,
    Wife,
    Children,
}

impl MemberRole {
    pub fn selects(self, tag: &str) -> bool {
        match self {
            MemberRole::All => matches!(tag, tags::HUSBAND | tags::WIFE | tags::CHILD),
            MemberRole::Parents => matches!(tag, tags::HUSBAND | tags::WIFE),
            MemberRole::Husband => tag == tags::HUSBAND,
            MemberRole::Wife => tag == tags::WIFE,
            MemberRole::Children => tag == tags::CHILD,
        }
    }
}

/// Which parent links count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentMode {
    /// Every husband and wife of every family the individual is a child of
    #[default]
    All,
    /// Only parents whose relation annotation says `Natural`
    Biological,
}

/// How ancestor and path queries react to an individual that is its own ancestor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CyclePolicy {
    /// Stop with [`QueryError::Cycle`](crate::gedcom::QueryError::Cycle)
    #[default]
    Error,
    /// Drop the edge that closes the loop and keep walking
    Truncate,
}

/// Read-only query engine bound to one document.
#[derive(Debug, Clone, Copy)]
pub struct Query<'doc> {
    document: &'doc Document,
    cycles: CyclePolicy,
}

impl<'doc> Query<'doc> {
    pub fn new(document: &'doc Document) -> Self {
        Self {
            document,
            cycles: CyclePolicy::default(),
        }
    }

    pub fn with_cycle_policy(mut self, cycles: CyclePolicy) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn document(&self) -> &'doc Document {
        self.document
    }

    pub fn cycle_policy(&self) -> CyclePolicy {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_roles_select_tags() {
        assert!(MemberRole::All.selects("CHIL"));
        assert!(!MemberRole::All.selects("MARR"));
        assert!(MemberRole::Parents.selects("WIFE"));
        assert!(!MemberRole::Parents.selects("CHIL"));
        assert!(MemberRole::Husband.selects("HUSB"));
        assert!(!MemberRole::Wife.selects("HUSB"));
    }

    #[test]
    fn family_links_map_to_tags() {
        assert_eq!(FamilyLink::Spouse.tag(), "FAMS");
        assert_eq!(FamilyLink::Child.tag(), "FAMC");
    }
}
