//! Tags the parser and query engine give meaning to.
//!
//! Tags are open-ended in GEDCOM. Anything not listed here is still parsed and kept
//! on the record, it just has no special behavior.

pub const INDIVIDUAL: &str = "INDI";
pub const FAMILY: &str = "FAM";

// Membership references on an individual
pub const SPOUSE_IN_FAMILY: &str = "FAMS";
pub const CHILD_IN_FAMILY: &str = "FAMC";

// Members on a family
pub const HUSBAND: &str = "HUSB";
pub const WIFE: &str = "WIFE";
pub const CHILD: &str = "CHIL";

// Relation annotations nested under a family's CHIL entry
pub const FATHER_RELATION: &str = "_FREL";
pub const MOTHER_RELATION: &str = "_MREL";
pub const NATURAL: &str = "Natural";

// Events and their details
pub const MARRIAGE: &str = "MARR";
pub const BIRTH: &str = "BIRT";
pub const DEATH: &str = "DEAT";
pub const BURIAL: &str = "BURI";
pub const CENSUS: &str = "CENS";
pub const CHANGE: &str = "CHAN";
pub const DATE: &str = "DATE";
pub const PLACE: &str = "PLAC";
pub const SOURCE: &str = "SOUR";

// Individual attributes
pub const NAME: &str = "NAME";
pub const GIVEN_NAME: &str = "GIVN";
pub const SURNAME: &str = "SURN";
pub const SEX: &str = "SEX";
pub const PRIVATE: &str = "PRIV";
pub const OCCUPATION: &str = "OCCU";
