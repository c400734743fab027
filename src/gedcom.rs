//! Main module for gedcom library functionality

pub mod config;
pub mod document;
pub mod error;
pub mod facts;
pub mod formats;
pub mod loader;
pub mod parsing;
pub mod query;
pub mod record;
pub mod registry;
pub mod tags;
pub mod testing;

pub use document::Document;
pub use error::{Category, LoaderError, ParseError, QueryError};
pub use loader::DocumentLoader;
pub use query::{CyclePolicy, Family, FamilyLink, Individual, MemberRole, ParentMode, Query};
pub use record::{Record, RecordId, RecordRef};
