//! Families, family members and parents

use super::category::{Family, Individual};
use super::{FamilyLink, MemberRole, ParentMode, Query};
use crate::gedcom::record::{RecordId, RecordRef};
use crate::gedcom::tags;
use log::trace;
use std::collections::HashSet;

/// Follow a membership reference, dropping misses.
fn resolve(reference: RecordRef<'_>) -> Option<RecordRef<'_>> {
    let target = reference.resolve();
    if target.is_none() {
        trace!(
            "Unresolved {} reference {:?} on line {}",
            reference.tag(),
            reference.value(),
            reference.line()
        );
    }
    target
}

/// Appends `items` not yet in `seen`, keeping first-seen order.
fn extend_unique<'doc>(
    out: &mut Vec<Individual<'doc>>,
    seen: &mut HashSet<RecordId>,
    items: impl IntoIterator<Item = Individual<'doc>>,
) {
    for item in items {
        if seen.insert(item.id()) {
            out.push(item);
        }
    }
}

impl<'doc> Query<'doc> {
    /// Families the individual belongs to, through `FAMS` or `FAMC` references.
    ///
    /// References are followed in the individual's child order. A reference that does
    /// not resolve, or resolves to something other than a family, is skipped.
    pub fn families(&self, individual: Individual<'doc>, link: FamilyLink) -> Vec<Family<'doc>> {
        individual
            .record()
            .children_with_tag(link.tag())
            .filter_map(resolve)
            .filter_map(|record| Family::try_from(record).ok())
            .collect()
    }

    /// Members of a family with the requested role, in the family's child order.
    ///
    /// Each individual appears once, at its first position. A member reference that resolves
    /// to a record other than an individual (a `SOUR`, another `FAM`) is skipped like an
    /// unresolved one.
    pub fn family_members(
        &self,
        family: Family<'doc>,
        role: MemberRole,
    ) -> Vec<Individual<'doc>> {
        let mut members = Vec::new();
        let mut seen = HashSet::new();
        let selected = family
            .record()
            .children()
            .filter(|child| role.selects(child.tag()))
            .filter_map(resolve)
            .filter_map(|record| Individual::try_from(record).ok());
        extend_unique(&mut members, &mut seen, selected);
        members
    }

    /// Parents of an individual.
    ///
    /// With [`ParentMode::All`] every husband and wife of every family the individual is
    /// a child of counts. With [`ParentMode::Biological`] only the CHIL entries naming this
    /// individual are considered, and only their `_FREL Natural` (father: the family's
    /// husband) and `_MREL Natural` (mother: the family's wife) annotations contribute.
    pub fn parents(
        &self,
        individual: Individual<'doc>,
        mode: ParentMode,
    ) -> Vec<Individual<'doc>> {
        let mut parents = Vec::new();
        let mut seen = HashSet::new();

        for family in self.families(individual, FamilyLink::Child) {
            match mode {
                ParentMode::All => {
                    let members = self.family_members(family, MemberRole::Parents);
                    extend_unique(&mut parents, &mut seen, members);
                }
                ParentMode::Biological => {
                    for role in self.natural_parent_roles(individual, family) {
                        let members = self.family_members(family, role);
                        extend_unique(&mut parents, &mut seen, members);
                    }
                }
            }
        }

        parents
    }

    /// Roles of `family` that are natural parents of `individual`, in annotation order.
    fn natural_parent_roles(
        &self,
        individual: Individual<'doc>,
        family: Family<'doc>,
    ) -> Vec<MemberRole> {
        let Some(identifier) = individual.identifier() else {
            return Vec::new();
        };

        family
            .record()
            .children_with_tag(tags::CHILD)
            .filter(|entry| entry.value() == identifier)
            .flat_map(|entry| entry.children())
            .filter(|annotation| annotation.value().eq_ignore_ascii_case(tags::NATURAL))
            .filter_map(|annotation| match annotation.tag() {
                tags::FATHER_RELATION => Some(MemberRole::Husband),
                tags::MOTHER_RELATION => Some(MemberRole::Wife),
                _ => None,
            })
            .collect()
    }
}
