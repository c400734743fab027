//! # gedcom
//!
//! A parser and relationship query engine for GEDCOM genealogical records.
//!
//! File Layout
//!
//!     The crate is organized as a small pipeline. Source text goes in, an immutable
//!     [`Document`] comes out, and queries run against that document:
//!
//!     src/gedcom
//!       ├── parsing      Line grammar and the level-stack tree builder
//!       ├── record       Arena records and borrowed record views
//!       ├── registry     Identifier to record lookup, built while parsing
//!       ├── document     The parsed, read-only tree
//!       ├── query        Families, parents, ancestors and paths
//!       ├── facts        Flat per-individual fields (names, events, years)
//!       ├── formats      Tag lines, tree views and serde snapshots
//!       ├── loader       Reading documents from files or strings
//!       └── config       Layered configuration with embedded defaults
//!
//! For fixture documents used across the test suite, see the [testing module](gedcom::testing).

pub mod gedcom;

pub use gedcom::{
    Category, Document, DocumentLoader, Family, FamilyLink, Individual, MemberRole, ParentMode,
    ParseError, Query, QueryError, Record, RecordId, RecordRef,
};
