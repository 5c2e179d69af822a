//! Predicate-indexed fact store for efficient rule joins
//!
//! During saturation we repeatedly ask: which known facts could match this
//! body atom? Most body atoms carry a bound predicate, so facts are indexed
//! by predicate term, with a flat insertion-ordered list backing iteration
//! and delta tracking.

use crate::rule::{Atom, Slot};
use ethos_graph_ir::{ClaimGraph, Term, Triple};
use hashbrown::{HashMap, HashSet};

/// Fact store with a predicate index
///
/// Facts keep insertion order (positions double as delta markers for
/// semi-naive rounds) and deduplicate on insert.
#[derive(Debug, Default)]
pub struct FactIndex {
    /// All facts in insertion order
    facts: Vec<Triple>,
    /// Membership set
    seen: HashSet<Triple>,
    /// Index by predicate term -> fact positions
    by_p: HashMap<Term, Vec<usize>>,
}

impl FactIndex {
    /// Create an empty fact store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fact
    ///
    /// Returns `true` if the fact was not already known.
    pub fn insert(&mut self, fact: Triple) -> bool {
        if !self.seen.insert(fact.clone()) {
            return false;
        }

        let idx = self.facts.len();
        self.by_p.entry(fact.p.clone()).or_default().push(idx);
        self.facts.push(fact);
        true
    }

    /// Check membership
    pub fn contains(&self, fact: &Triple) -> bool {
        self.seen.contains(fact)
    }

    /// Number of known facts
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Check if no facts are known
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate over all facts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.facts.iter()
    }

    /// Facts that could match `atom`, restricted to positions `>= from`
    ///
    /// A bound predicate slot narrows the scan through the predicate index;
    /// an unbound predicate falls back to every fact. Subject/object
    /// filtering happens during unification.
    pub fn candidates_from<'a>(
        &'a self,
        atom: &Atom,
        from: usize,
    ) -> Box<dyn Iterator<Item = &'a Triple> + 'a> {
        match &atom.p {
            Slot::Bound(p) => Box::new(
                self.by_p
                    .get(p)
                    .into_iter()
                    .flatten()
                    .copied()
                    .filter(move |&i| i >= from)
                    .map(|i| &self.facts[i]),
            ),
            Slot::Unbound(_) => Box::new(self.facts[from.min(self.facts.len())..].iter()),
        }
    }

    /// Facts that could match `atom`, over the whole store
    pub fn candidates<'a>(&'a self, atom: &Atom) -> Box<dyn Iterator<Item = &'a Triple> + 'a> {
        self.candidates_from(atom, 0)
    }
}

impl From<&ClaimGraph> for FactIndex {
    fn from(graph: &ClaimGraph) -> Self {
        let mut index = FactIndex::new();
        for triple in graph.iter() {
            index.insert(triple.clone());
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(Term::iri(s), Term::iri(p), Term::iri(o))
    }

    #[test]
    fn test_insert_dedupes() {
        let mut index = FactIndex::new();
        let t = fact("http://e/s", "http://e/p", "http://e/o");

        assert!(index.insert(t.clone()));
        assert!(!index.insert(t.clone()));
        assert_eq!(index.len(), 1);
        assert!(index.contains(&t));
    }

    #[test]
    fn test_candidates_narrowed_by_predicate() {
        let mut index = FactIndex::new();
        index.insert(fact("http://e/a", "http://e/p", "http://e/x"));
        index.insert(fact("http://e/b", "http://e/q", "http://e/y"));
        index.insert(fact("http://e/c", "http://e/p", "http://e/z"));

        let atom = Atom::new(
            Slot::var("s"),
            Slot::Bound(Term::iri("http://e/p")),
            Slot::var("o"),
        );

        let hits: Vec<&Triple> = index.candidates(&atom).collect();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|t| t.p == Term::iri("http://e/p")));
    }

    #[test]
    fn test_candidates_unbound_predicate_scans_all() {
        let mut index = FactIndex::new();
        index.insert(fact("http://e/a", "http://e/p", "http://e/x"));
        index.insert(fact("http://e/b", "http://e/q", "http://e/y"));

        let atom = Atom::new(Slot::var("s"), Slot::var("p"), Slot::var("o"));
        assert_eq!(index.candidates(&atom).count(), 2);
    }

    #[test]
    fn test_candidates_from_restricts_to_delta() {
        let mut index = FactIndex::new();
        index.insert(fact("http://e/a", "http://e/p", "http://e/x"));
        index.insert(fact("http://e/b", "http://e/p", "http://e/y"));

        let atom = Atom::new(
            Slot::var("s"),
            Slot::Bound(Term::iri("http://e/p")),
            Slot::var("o"),
        );

        let delta: Vec<&Triple> = index.candidates_from(&atom, 1).collect();
        assert_eq!(delta.len(), 1);
        assert_eq!(delta[0].s, Term::iri("http://e/b"));
    }
}
