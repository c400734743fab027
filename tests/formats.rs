//! Rendering parsed documents

use gedcom::gedcom::config::OutputFormat;
use gedcom::gedcom::formats::{self, render, to_tag_lines, to_treeviz_str};
use gedcom::gedcom::testing::{fixtures, parse_fixture};
use gedcom::Document;

#[test]
fn treeviz_of_a_family() {
    let doc = parse_fixture(fixtures::BIOLOGICAL_SPLIT);
    insta::assert_snapshot!(to_treeviz_str(&doc), @r"
├─ @H@ INDI
│  └─ FAMS @F@
├─ @W@ INDI
│  └─ FAMS @F@
├─ @X@ INDI
│  └─ FAMC @F@
├─ @Y@ INDI
│  └─ FAMC @F@
└─ @F@ FAM
   ├─ HUSB @H@
   ├─ WIFE @W@
   ├─ CHIL @X@
   │  └─ _FREL Natural
   └─ CHIL @Y@
");
}

#[test]
fn tag_lines_reparse_to_the_same_tree() {
    let doc = parse_fixture(fixtures::THREE_GENERATIONS);
    let rendered = to_tag_lines(&doc);
    assert_eq!(rendered, fixtures::THREE_GENERATIONS);

    let reparsed = Document::parse(&rendered).unwrap();
    assert_eq!(
        formats::snapshot_from_document(&reparsed),
        formats::snapshot_from_document(&doc)
    );
}

#[test]
fn json_and_yaml_carry_the_same_tree() {
    let doc = parse_fixture(fixtures::HEADER);
    let json: serde_json::Value =
        serde_json::from_str(&render(&doc, OutputFormat::Json).unwrap()).unwrap();
    let yaml: serde_json::Value =
        serde_yaml::from_str(&render(&doc, OutputFormat::Yaml).unwrap()).unwrap();

    assert_eq!(json, yaml);
    assert_eq!(json[0]["tag"], "HEAD");
    let corporation = &json[0]["children"][0]["children"][2];
    assert_eq!(corporation["value"], "Broderbund Software, Banner Blue Division");
    assert_eq!(corporation["children"][0]["line"], 6);
}
