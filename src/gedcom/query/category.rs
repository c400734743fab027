//! Checked record categories
//!
//!     [`Individual`] and [`Family`] wrap a [`RecordRef`] whose tag has been verified.
//!     Converting is the only place a category error can happen:
//!
//!         let person = Individual::try_from(record)?;   // INDI or CategoryError
//!         let parents = query.parents(person, ParentMode::All);
//!
//!     Query operations take the wrapped types, so they never need to check again.

use crate::gedcom::error::{Category, QueryError};
use crate::gedcom::record::{RecordId, RecordRef};
use std::fmt;

fn check(record: RecordRef<'_>, expected: Category) -> Result<(), QueryError> {
    if record.tag() == expected.tag() {
        Ok(())
    } else {
        Err(QueryError::Category {
            expected,
            found: record.tag().to_string(),
            line: record.line(),
        })
    }
}

/// A record known to be tagged `INDI`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Individual<'doc>(RecordRef<'doc>);

/// A record known to be tagged `FAM`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Family<'doc>(RecordRef<'doc>);

impl<'doc> TryFrom<RecordRef<'doc>> for Individual<'doc> {
    type Error = QueryError;

    fn try_from(record: RecordRef<'doc>) -> Result<Self, Self::Error> {
        check(record, Category::Individual)?;
        Ok(Self(record))
    }
}

impl<'doc> TryFrom<RecordRef<'doc>> for Family<'doc> {
    type Error = QueryError;

    fn try_from(record: RecordRef<'doc>) -> Result<Self, Self::Error> {
        check(record, Category::Family)?;
        Ok(Self(record))
    }
}

macro_rules! category_view {
    ($name:ident) => {
        impl<'doc> $name<'doc> {
            pub fn record(self) -> RecordRef<'doc> {
                self.0
            }

            pub fn id(self) -> RecordId {
                self.0.id()
            }

            pub fn identifier(self) -> Option<&'doc str> {
                self.0.identifier()
            }

            /// Same record, or a record declaring the same identifier
            pub fn is(self, other: Self) -> bool {
                self.0 == other.0
                    || matches!(
                        (self.identifier(), other.identifier()),
                        (Some(a), Some(b)) if a == b
                    )
            }
        }

        impl<'doc> From<$name<'doc>> for RecordRef<'doc> {
            fn from(view: $name<'doc>) -> Self {
                view.0
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.identifier().unwrap_or("<anonymous>"))
                    .finish()
            }
        }
    };
}

category_view!(Individual);
category_view!(Family);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::testing::{fixtures, parse_fixture};

    #[test]
    fn accepts_matching_tags() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let record = doc.lookup("@I1@").unwrap();
        let person = Individual::try_from(record).unwrap();
        assert_eq!(person.identifier(), Some("@I1@"));
        assert_eq!(RecordRef::from(person), record);
    }

    #[test]
    fn rejects_other_categories() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let err = Family::try_from(doc.lookup("@I1@").unwrap()).unwrap_err();
        assert_eq!(
            err,
            QueryError::Category {
                expected: Category::Family,
                found: "INDI".to_string(),
                line: 4,
            }
        );
        let head = doc.top_level().next().unwrap();
        assert!(Individual::try_from(head).is_err());
    }

    #[test]
    fn debug_shows_identifier() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let family = doc.family("@F2@").unwrap();
        assert_eq!(format!("{:?}", family), "Family(\"@F2@\")");
    }
}
