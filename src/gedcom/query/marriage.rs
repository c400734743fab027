//! Marriage facts of an individual

use super::category::Individual;
use super::{FamilyLink, Query};
use crate::gedcom::tags;
use serde::Serialize;

/// One `MARR` event of a family the individual is a spouse in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marriage {
    pub date: Option<String>,
    pub place: Option<String>,
}

/// Final whitespace-separated token of a date value, as a year.
fn trailing_year(date: &str) -> Option<i32> {
    date.split_whitespace().last()?.parse().ok()
}

impl<'doc> Query<'doc> {
    /// Date and place of every marriage event in the individual's spouse families.
    pub fn marriages(&self, individual: Individual<'doc>) -> Vec<Marriage> {
        self.families(individual, FamilyLink::Spouse)
            .into_iter()
            .flat_map(|family| family.record().children_with_tag(tags::MARRIAGE))
            .map(|event| Marriage {
                date: event.child_value(tags::DATE).map(str::to_string),
                place: event.child_value(tags::PLACE).map(str::to_string),
            })
            .collect()
    }

    /// Years of every marriage event, read from the last token of each `DATE`.
    ///
    /// Dates whose last token is not a number are left out.
    pub fn marriage_years(&self, individual: Individual<'doc>) -> Vec<i32> {
        self.families(individual, FamilyLink::Spouse)
            .into_iter()
            .flat_map(|family| family.record().children_with_tag(tags::MARRIAGE))
            .flat_map(|event| event.children_with_tag(tags::DATE))
            .filter_map(|date| trailing_year(date.value()))
            .collect()
    }

    pub fn marriage_year_match(&self, individual: Individual<'doc>, year: i32) -> bool {
        self.marriage_years(individual).contains(&year)
    }

    /// Whether any marriage year falls in `from..=to`
    pub fn marriage_range_match(&self, individual: Individual<'doc>, from: i32, to: i32) -> bool {
        self.marriage_years(individual)
            .into_iter()
            .any(|year| (from..=to).contains(&year))
    }
}
