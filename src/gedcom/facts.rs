//! Individual facts
//!
//!     Flat lookups over an individual's direct children and grandchildren: names, sex,
//!     life events and their years. None of these walk cross-references; they read fixed
//!     paths such as `INDI > BIRT > DATE`.
//!
//! Years
//!
//!     Birth and death years are the first run of four digits in the event's date. Years
//!     above 3000 are taken to be Hebrew calendar years and shifted by 3760 onto the
//!     Gregorian calendar.
//!
//! Criteria
//!
//!     [`Criteria`] is a colon-separated list of `key=value` pairs, all of which must match:
//!
//!         surname=Stone:birthrange=1800-1900
//!
//!     Supported keys: `surname`, `name` (given name), `birth`, `birthrange`, `death`,
//!     `deathrange`. Names match as substrings; ranges are inclusive.

use super::error::QueryError;
use super::query::Individual;
use super::record::RecordRef;
use super::tags;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;

static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

/// Offset between Hebrew and Gregorian calendar years
const HEBREW_CALENDAR_OFFSET: i32 = 3760;

/// Date, place and sources of a life event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    pub date: Option<String>,
    pub place: Option<String>,
    pub sources: Vec<String>,
}

impl Event {
    fn from_record(record: RecordRef<'_>) -> Self {
        let mut event = Event::default();
        for detail in record.children() {
            match detail.tag() {
                tags::DATE => event.date = Some(detail.value().to_string()),
                tags::PLACE => event.place = Some(detail.value().to_string()),
                tags::SOURCE => event.sources.push(detail.value().to_string()),
                _ => {}
            }
        }
        event
    }
}

fn year_of(date: &str) -> Option<i32> {
    let year: i32 = YEAR_REGEX.find(date)?.as_str().parse().ok()?;
    if year > 3000 {
        Some(year - HEBREW_CALENDAR_OFFSET)
    } else {
        Some(year)
    }
}

impl<'doc> Individual<'doc> {
    fn child_value(self, tag: &str) -> Option<&'doc str> {
        self.record().child_value(tag)
    }

    fn event(self, tag: &str) -> Option<Event> {
        self.record().first_child_with_tag(tag).map(Event::from_record)
    }

    /// Given name and surname.
    ///
    /// Reads `NAME Given /Surname/` when the name line has a value, otherwise the `GIVN`
    /// and `SURN` lines nested under it. Missing parts are empty strings.
    pub fn name(self) -> (String, String) {
        let Some(name) = self.record().first_child_with_tag(tags::NAME) else {
            return (String::new(), String::new());
        };

        if name.value().is_empty() {
            let given = name.child_value(tags::GIVEN_NAME).unwrap_or_default();
            let surname = name.child_value(tags::SURNAME).unwrap_or_default();
            return (given.to_string(), surname.to_string());
        }

        let mut parts = name.value().split('/');
        let given = parts.next().unwrap_or_default().trim().to_string();
        let surname = parts.next().unwrap_or_default().trim().to_string();
        (given, surname)
    }

    /// Value of the `SEX` line, usually `M` or `F`
    pub fn sex(self) -> Option<&'doc str> {
        self.child_value(tags::SEX)
    }

    /// Marked private with `PRIV Y`
    pub fn is_private(self) -> bool {
        self.child_value(tags::PRIVATE) == Some("Y")
    }

    pub fn birth(self) -> Option<Event> {
        self.event(tags::BIRTH)
    }

    pub fn death(self) -> Option<Event> {
        self.event(tags::DEATH)
    }

    pub fn burial(self) -> Option<Event> {
        self.event(tags::BURIAL)
    }

    /// Every census the individual appears in, in document order
    pub fn census(self) -> Vec<Event> {
        self.record()
            .children_with_tag(tags::CENSUS)
            .map(Event::from_record)
            .collect()
    }

    pub fn birth_year(self) -> Option<i32> {
        self.birth()?.date.as_deref().and_then(year_of)
    }

    pub fn death_year(self) -> Option<i32> {
        self.death()?.date.as_deref().and_then(year_of)
    }

    /// Date of the last change (`CHAN > DATE`)
    pub fn last_updated(self) -> Option<&'doc str> {
        self.record()
            .first_child_with_tag(tags::CHANGE)?
            .child_value(tags::DATE)
    }

    pub fn occupation(self) -> Option<&'doc str> {
        self.child_value(tags::OCCUPATION)
    }

    /// Has a death event, dated or not
    pub fn is_deceased(self) -> bool {
        self.record().first_child_with_tag(tags::DEATH).is_some()
    }

    pub fn matches(self, criteria: &Criteria) -> bool {
        criteria.matches(self)
    }
}

/// A single search condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Surname(String),
    GivenName(String),
    Birth(i32),
    BirthRange(i32, i32),
    Death(i32),
    DeathRange(i32, i32),
}

impl Criterion {
    pub fn matches(&self, individual: Individual<'_>) -> bool {
        let within = |year: Option<i32>, from: i32, to: i32| {
            year.is_some_and(|year| (from..=to).contains(&year))
        };
        match self {
            Criterion::Surname(part) => individual.name().1.contains(part.as_str()),
            Criterion::GivenName(part) => individual.name().0.contains(part.as_str()),
            Criterion::Birth(year) => individual.birth_year() == Some(*year),
            Criterion::BirthRange(from, to) => within(individual.birth_year(), *from, *to),
            Criterion::Death(year) => individual.death_year() == Some(*year),
            Criterion::DeathRange(from, to) => within(individual.death_year(), *from, *to),
        }
    }
}

/// All-of list of [`Criterion`]s, parsed from `key=value[:key=value...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn criteria(&self) -> &[Criterion] {
        &self.0
    }

    pub fn matches(&self, individual: Individual<'_>) -> bool {
        self.0.iter().all(|criterion| criterion.matches(individual))
    }
}

impl FromStr for Criteria {
    type Err = QueryError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| QueryError::Criteria {
            criteria: source.to_string(),
            reason,
        };
        let year = |value: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid(format!("{:?} is not a year", value)))
        };
        let range = |value: &str| {
            let (from, to) = value
                .split_once('-')
                .ok_or_else(|| invalid(format!("{:?} is not a year range", value)))?;
            Ok::<_, QueryError>((year(from)?, year(to)?))
        };

        let mut criteria = Vec::new();
        for item in source.split(':') {
            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| invalid(format!("{:?} is not a key=value pair", item)))?;
            let criterion = match key.trim() {
                "surname" => Criterion::Surname(value.to_string()),
                "name" => Criterion::GivenName(value.to_string()),
                "birth" => Criterion::Birth(year(value)?),
                "birthrange" => {
                    let (from, to) = range(value)?;
                    Criterion::BirthRange(from, to)
                }
                "death" => Criterion::Death(year(value)?),
                "deathrange" => {
                    let (from, to) = range(value)?;
                    Criterion::DeathRange(from, to)
                }
                other => return Err(invalid(format!("unknown key {:?}", other))),
            };
            criteria.push(criterion);
        }
        Ok(Criteria(criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::testing::{fixtures, parse_fixture};

    #[test]
    fn names_from_value_or_parts() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let isaac = doc.individual("@I3@").unwrap();
        let rebecca = doc.individual("@I4@").unwrap();
        assert_eq!(isaac.name(), ("Isaac".to_string(), "Stone".to_string()));
        assert_eq!(rebecca.name(), ("Rebecca".to_string(), "Lane".to_string()));

        let unnamed = parse_fixture("0 @I1@ INDI\n");
        let person = unnamed.individual("@I1@").unwrap();
        assert_eq!(person.name(), (String::new(), String::new()));
    }

    #[test]
    fn simple_attributes() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let isaac = doc.individual("@I3@").unwrap();
        let rebecca = doc.individual("@I4@").unwrap();

        assert_eq!(isaac.sex(), Some("M"));
        assert_eq!(isaac.occupation(), Some("Carpenter"));
        assert_eq!(isaac.last_updated(), Some("28 Feb 2002"));
        assert!(isaac.is_deceased());
        assert!(!isaac.is_private());
        assert!(rebecca.is_private());
        assert!(!rebecca.is_deceased());
        assert_eq!(rebecca.occupation(), None);
    }

    #[test]
    fn events_and_years() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let isaac = doc.individual("@I3@").unwrap();
        let jacob = doc.individual("@I5@").unwrap();

        assert_eq!(
            isaac.death(),
            Some(Event {
                date: Some("3 JAN 1950".to_string()),
                place: Some("Salem".to_string()),
                sources: vec!["@S1@".to_string()],
            })
        );
        assert_eq!(isaac.birth_year(), Some(1880));
        assert_eq!(isaac.death_year(), Some(1950));
        assert_eq!(jacob.birth_year(), Some(1910));
        assert_eq!(jacob.death_year(), None);
        assert_eq!(jacob.burial(), None);
        assert_eq!(jacob.census().len(), 1);
        assert_eq!(jacob.census()[0].place.as_deref(), Some("Salem"));
    }

    #[test]
    fn hebrew_years_are_shifted() {
        assert_eq!(year_of("15 Nisan 5680"), Some(1920));
        assert_eq!(year_of("ABT 1910"), Some(1910));
        assert_eq!(year_of("spring"), None);
    }

    #[test]
    fn criteria_parse_and_match() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let isaac = doc.individual("@I3@").unwrap();
        let abraham = doc.individual("@I1@").unwrap();

        let criteria: Criteria = "surname=Stone:birthrange=1870-1890".parse().unwrap();
        assert_eq!(criteria.criteria().len(), 2);
        assert!(isaac.matches(&criteria));
        assert!(!abraham.matches(&criteria));

        let died: Criteria = "death=1950".parse().unwrap();
        assert!(isaac.matches(&died));
        assert!(!abraham.matches(&died));

        let named: Criteria = "name=Abra".parse().unwrap();
        assert!(abraham.matches(&named));
    }

    #[test]
    fn criteria_errors() {
        assert!(matches!(
            "colour=blue".parse::<Criteria>(),
            Err(QueryError::Criteria { .. })
        ));
        assert!("birth".parse::<Criteria>().is_err());
        assert!("birth=soon".parse::<Criteria>().is_err());
        assert!("deathrange=1900".parse::<Criteria>().is_err());
    }
}
