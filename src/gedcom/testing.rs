//! Testing support
//!
//!     Fixture documents shared by the unit tests, the integration tests under `tests/` and
//!     anyone writing tests against this crate. Fixtures are small on purpose: each one sets
//!     up a single family shape, so a failing assertion points straight at the relationship
//!     that broke.
//!
//!     The three-generation fixture, in pedigree form:
//!
//!         @I1@ Abraham ─┬─ @I2@ Sarah            (@F1@, married 1875)
//!                       │
//!         @I3@ Isaac ───┴─┬─ @I4@ Rebecca        (@F2@, married 1905)
//!                         │
//!         @I5@ Jacob (natural)   @I6@ Esau (adopted by father, mother unspecified)

use super::document::Document;

pub mod fixtures {
    /// Header-only document, as written by Family Tree Maker
    pub const HEADER: &str = "0 HEAD
1 SOUR FTW
2 VERS 3.40
2 NAME Family Tree Maker for Windows
2 CORP Broderbund Software, Banner Blue Division
3 ADDR 39500 Stevenson Pl.  #204
4 CONT Fremont, CA 95439
4 PHON (510) 794-6850
1 DEST FTW
1 DATE 28 Feb 2002
1 CHAR ANSI
1 SUBM @SUBM@
1 FILE E:\\Fam\\Wolf1130.GED
1 GEDC
";

    pub const THREE_GENERATIONS: &str = "0 HEAD
1 SOUR FTW
1 CHAR UTF-8
0 @I1@ INDI
1 NAME Abraham /Stone/
1 SEX M
1 BIRT
2 DATE 12 MAR 1850
2 PLAC Boston
1 FAMS @F1@
0 @I2@ INDI
1 NAME Sarah /Hill/
1 SEX F
1 FAMS @F1@
0 @I3@ INDI
1 NAME Isaac /Stone/
1 SEX M
1 BIRT
2 DATE 1880
1 DEAT
2 DATE 3 JAN 1950
2 PLAC Salem
2 SOUR @S1@
1 OCCU Carpenter
1 CHAN
2 DATE 28 Feb 2002
1 FAMC @F1@
1 FAMS @F2@
0 @I4@ INDI
1 NAME
2 GIVN Rebecca
2 SURN Lane
1 SEX F
1 PRIV Y
1 FAMS @F2@
0 @I5@ INDI
1 NAME Jacob /Stone/
1 SEX M
1 BIRT
2 DATE ABT 1910
1 CENS
2 DATE 1920
2 PLAC Salem
1 FAMC @F2@
0 @I6@ INDI
1 NAME Esau /Stone/
1 SEX M
1 FAMC @F2@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@
2 _FREL Natural
2 _MREL Natural
1 MARR
2 DATE 5 JUN 1875
2 PLAC Boston
0 @F2@ FAM
1 HUSB @I3@
1 WIFE @I4@
1 CHIL @I5@
2 _FREL Natural
2 _MREL Natural
1 CHIL @I6@
2 _FREL Adopted
1 MARR
2 DATE 1905
2 PLAC Salem
1 MARR
2 DATE unknown
0 @S1@ SOUR
1 TITL Salem death records
0 TRLR
";

    /// Two children of one family: X is the natural child of the husband, Y carries no
    /// relation annotations at all
    pub const BIOLOGICAL_SPLIT: &str = "0 @H@ INDI
1 FAMS @F@
0 @W@ INDI
1 FAMS @F@
0 @X@ INDI
1 FAMC @F@
0 @Y@ INDI
1 FAMC @F@
0 @F@ FAM
1 HUSB @H@
1 WIFE @W@
1 CHIL @X@
2 _FREL Natural
1 CHIL @Y@
";

    /// Two individuals recorded as each other's father
    pub const CYCLE: &str = "0 @A@ INDI
1 FAMC @F1@
1 FAMS @F2@
0 @B@ INDI
1 FAMC @F2@
1 FAMS @F1@
0 @F1@ FAM
1 HUSB @B@
1 CHIL @A@
2 _FREL Natural
0 @F2@ FAM
1 HUSB @A@
1 CHIL @B@
2 _FREL Natural
";

    /// Both parents of @K@ loop back onto each other: @B@ is @A@'s father and @A@ is @B@'s
    pub const PARENT_LOOP: &str = "0 @K@ INDI
1 FAMC @F0@
0 @A@ INDI
1 FAMC @F1@
1 FAMS @F0@
1 FAMS @F2@
0 @B@ INDI
1 FAMC @F2@
1 FAMS @F0@
1 FAMS @F1@
0 @F0@ FAM
1 HUSB @A@
1 WIFE @B@
1 CHIL @K@
0 @F1@ FAM
1 HUSB @B@
1 CHIL @A@
0 @F2@ FAM
1 HUSB @A@
1 CHIL @B@
";

    /// Second cousins who married: their child reaches @G1@ along two lines
    pub const PEDIGREE_COLLAPSE: &str = "0 @G1@ INDI
1 FAMS @F0@
0 @P1@ INDI
1 FAMC @F0@
1 FAMS @F1@
0 @P2@ INDI
1 FAMC @F0@
1 FAMS @F2@
0 @C1@ INDI
1 FAMC @F1@
1 FAMS @F3@
0 @C2@ INDI
1 FAMC @F2@
1 FAMS @F3@
0 @K@ INDI
1 FAMC @F3@
0 @F0@ FAM
1 HUSB @G1@
1 CHIL @P1@
1 CHIL @P2@
0 @F1@ FAM
1 HUSB @P1@
1 CHIL @C1@
0 @F2@ FAM
1 HUSB @P2@
1 CHIL @C2@
0 @F3@ FAM
1 HUSB @C1@
1 WIFE @C2@
1 CHIL @K@
";
}

/// Parse a fixture, panicking with the parse error if it is not valid.
pub fn parse_fixture(source: &str) -> Document {
    Document::parse(source).unwrap_or_else(|err| panic!("fixture failed to parse: {}", err))
}
