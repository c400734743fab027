//! Ancestor closure and descendant-to-ancestor paths
//!
//!     Both walks recurse through parents and keep track of record ids:
//!         - on_path: individuals between the start and the current position. Meeting one
//!           of these again means the family graph loops, which is handled according to the
//!           query's [`CyclePolicy`].
//!         - listed: ancestors already in the output, so each is reported once.
//!         - expanded / exhausted: individuals whose own parents have been fully walked.
//!           Pedigree collapse (the same ancestor reached along two lines) is normal in real
//!           trees; only these are skipped when reached again.
//!
//!     Listing and expanding are separate steps. An ancestor that is listed but not yet
//!     expanded is still walked when reached from another line, so a loop through it is
//!     detected whichever side the walk enters from.

use super::category::Individual;
use super::{CyclePolicy, ParentMode, Query};
use crate::gedcom::error::{QueryError, QueryResult};
use crate::gedcom::record::RecordId;
use log::warn;
use std::collections::HashSet;

/// Bookkeeping for one ancestor walk
struct AncestorWalk<'doc> {
    mode: ParentMode,
    on_path: HashSet<RecordId>,
    listed: HashSet<RecordId>,
    expanded: HashSet<RecordId>,
    ancestors: Vec<Individual<'doc>>,
}

impl<'doc> Query<'doc> {
    /// Transitive closure of [`parents`](Query::parents), using `mode` at every generation.
    ///
    /// Order: the individual's parents first, then the ancestors of each parent in turn,
    /// depth first. Every ancestor is listed once.
    pub fn ancestors(
        &self,
        individual: Individual<'doc>,
        mode: ParentMode,
    ) -> QueryResult<Vec<Individual<'doc>>> {
        let mut walk = AncestorWalk {
            mode,
            on_path: HashSet::from([individual.id()]),
            listed: HashSet::from([individual.id()]),
            expanded: HashSet::new(),
            ancestors: Vec::new(),
        };
        self.collect_ancestors(individual, &mut walk)?;
        Ok(walk.ancestors)
    }

    fn collect_ancestors(
        &self,
        individual: Individual<'doc>,
        walk: &mut AncestorWalk<'doc>,
    ) -> QueryResult<()> {
        let mut pending = Vec::new();
        for parent in self.parents(individual, walk.mode) {
            if walk.on_path.contains(&parent.id()) {
                self.cycle(individual, parent)?;
                continue;
            }
            if walk.listed.insert(parent.id()) {
                walk.ancestors.push(parent);
            }
            pending.push(parent);
        }

        for parent in pending {
            if walk.expanded.contains(&parent.id()) {
                continue;
            }
            walk.on_path.insert(parent.id());
            self.collect_ancestors(parent, walk)?;
            walk.on_path.remove(&parent.id());
            walk.expanded.insert(parent.id());
        }
        Ok(())
    }

    /// Path from `descendant` up to `ancestor` along biological parent links.
    ///
    /// The search is depth first and returns the first path found, starting with the
    /// descendant and ending with the ancestor. `Ok(None)` means no biological line leads
    /// to the ancestor.
    pub fn find_path_to_ancestor(
        &self,
        descendant: Individual<'doc>,
        ancestor: Individual<'doc>,
    ) -> QueryResult<Option<Vec<Individual<'doc>>>> {
        let mut path = vec![descendant];
        let mut on_path = HashSet::from([descendant.id()]);
        let mut exhausted = HashSet::new();
        if self.search_path(ancestor, &mut path, &mut on_path, &mut exhausted)? {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    fn search_path(
        &self,
        ancestor: Individual<'doc>,
        path: &mut Vec<Individual<'doc>>,
        on_path: &mut HashSet<RecordId>,
        exhausted: &mut HashSet<RecordId>,
    ) -> QueryResult<bool> {
        let Some(&current) = path.last() else {
            return Ok(false);
        };
        if current.is(ancestor) {
            return Ok(true);
        }

        for parent in self.parents(current, ParentMode::Biological) {
            if on_path.contains(&parent.id()) {
                self.cycle(current, parent)?;
                continue;
            }
            if exhausted.contains(&parent.id()) {
                continue;
            }

            path.push(parent);
            on_path.insert(parent.id());
            if self.search_path(ancestor, path, on_path, exhausted)? {
                return Ok(true);
            }
            path.pop();
            on_path.remove(&parent.id());
            exhausted.insert(parent.id());
        }
        Ok(false)
    }

    /// `parent` is already on the walk that reached `child`.
    fn cycle(&self, child: Individual<'doc>, parent: Individual<'doc>) -> QueryResult<()> {
        let identifier = parent.identifier().unwrap_or_default().to_string();
        match self.cycle_policy() {
            CyclePolicy::Error => Err(QueryError::Cycle { identifier }),
            CyclePolicy::Truncate => {
                warn!(
                    "Family graph loops back to {} from {}, dropping the parent link",
                    identifier,
                    child.identifier().unwrap_or_default()
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::testing::{fixtures, parse_fixture};

    fn ids<'a>(people: &[Individual<'a>]) -> Vec<&'a str> {
        people.iter().filter_map(|p| p.identifier()).collect()
    }

    #[test]
    fn ancestors_list_parents_then_their_ancestors() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let jacob = doc.individual("@I5@").unwrap();
        let ancestors = doc.query().ancestors(jacob, ParentMode::All).unwrap();
        assert_eq!(ids(&ancestors), vec!["@I3@", "@I4@", "@I1@", "@I2@"]);
    }

    #[test]
    fn biological_ancestors_stop_at_adoption() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let query = doc.query();
        let esau = doc.individual("@I6@").unwrap();
        assert!(query.ancestors(esau, ParentMode::Biological).unwrap().is_empty());
        assert_eq!(
            ids(&query.ancestors(esau, ParentMode::All).unwrap()),
            vec!["@I3@", "@I4@", "@I1@", "@I2@"]
        );
    }

    #[test]
    fn collapsed_pedigrees_list_each_ancestor_once() {
        let doc = parse_fixture(fixtures::PEDIGREE_COLLAPSE);
        let k = doc.individual("@K@").unwrap();
        let ancestors = doc.query().ancestors(k, ParentMode::All).unwrap();
        assert_eq!(ids(&ancestors), vec!["@C1@", "@C2@", "@P1@", "@G1@", "@P2@"]);
    }

    #[test]
    fn cycles_are_reported() {
        let doc = parse_fixture(fixtures::CYCLE);
        let a = doc.individual("@A@").unwrap();
        let err = doc.query().ancestors(a, ParentMode::All).unwrap_err();
        assert_eq!(
            err,
            QueryError::Cycle {
                identifier: "@A@".to_string()
            }
        );
    }

    #[test]
    fn loops_between_listed_parents_are_reported() {
        let doc = parse_fixture(fixtures::PARENT_LOOP);
        let query = doc.query();
        for identifier in ["@K@", "@A@", "@B@"] {
            let start = doc.individual(identifier).unwrap();
            assert!(
                matches!(
                    query.ancestors(start, ParentMode::All),
                    Err(QueryError::Cycle { .. })
                ),
                "no cycle reported from {}",
                identifier
            );
        }

        let truncating = query.with_cycle_policy(CyclePolicy::Truncate);
        let k = doc.individual("@K@").unwrap();
        assert_eq!(ids(&truncating.ancestors(k, ParentMode::All).unwrap()), vec!["@A@", "@B@"]);
    }

    #[test]
    fn cycles_can_be_truncated() {
        let doc = parse_fixture(fixtures::CYCLE);
        let query = doc.query().with_cycle_policy(CyclePolicy::Truncate);
        let a = doc.individual("@A@").unwrap();
        assert_eq!(ids(&query.ancestors(a, ParentMode::All).unwrap()), vec!["@B@"]);
    }

    #[test]
    fn path_through_three_generations() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let jacob = doc.individual("@I5@").unwrap();
        let abraham = doc.individual("@I1@").unwrap();
        let path = doc.query().find_path_to_ancestor(jacob, abraham).unwrap().unwrap();
        assert_eq!(ids(&path), vec!["@I5@", "@I3@", "@I1@"]);
    }

    #[test]
    fn path_to_self_is_just_self() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let jacob = doc.individual("@I5@").unwrap();
        let path = doc.query().find_path_to_ancestor(jacob, jacob).unwrap().unwrap();
        assert_eq!(ids(&path), vec!["@I5@"]);
    }

    #[test]
    fn no_path_without_biological_links() {
        let doc = parse_fixture(fixtures::THREE_GENERATIONS);
        let esau = doc.individual("@I6@").unwrap();
        let abraham = doc.individual("@I1@").unwrap();
        assert_eq!(doc.query().find_path_to_ancestor(esau, abraham).unwrap(), None);

        let jacob = doc.individual("@I5@").unwrap();
        assert_eq!(doc.query().find_path_to_ancestor(abraham, jacob).unwrap(), None);
    }

    #[test]
    fn path_search_detects_cycles() {
        let doc = parse_fixture(fixtures::CYCLE);
        let a = doc.individual("@A@").unwrap();
        let b = doc.individual("@B@").unwrap();
        // B is reachable, so the search succeeds before looping
        assert!(doc.query().find_path_to_ancestor(a, b).unwrap().is_some());

        // An individual from another document never matches, so the walk runs into the loop
        let lonely = parse_fixture("0 @Z@ INDI\n");
        let z = lonely.individual("@Z@").unwrap();
        assert!(doc.query().find_path_to_ancestor(a, z).is_err());
        assert_eq!(
            doc.query()
                .with_cycle_policy(CyclePolicy::Truncate)
                .find_path_to_ancestor(a, z)
                .unwrap(),
            None
        );
    }
}
