//! Claim graph - a set of triples with locally scoped blank nodes
//!
//! A [`ClaimGraph`] owns a disjoint blank-node namespace: labels are
//! meaningful only within the graph that holds them. Merging another graph
//! in renames the incoming blanks to fresh labels, so two independently
//! translated credentials can never accidentally identify their anonymous
//! entities.

use crate::{BlankId, Term, Triple};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// A set of RDF triples with a disjoint blank-node namespace
///
/// # Design Decisions
///
/// - **Set semantics**: duplicate insertions collapse; iteration order is
///   deterministic (SPO lexicographic via `BTreeSet`).
/// - **Fresh blanks on demand**: [`fresh_blank`](ClaimGraph::fresh_blank)
///   allocates a label guaranteed not to collide with any label already in
///   the graph, including labels that arrived through [`merge`](ClaimGraph::merge).
/// - **Rename on merge**: the incoming graph's blanks are renamed before
///   union; triples built from this graph's own terms are inserted as-is.
///
/// # Example
///
/// ```
/// use ethos_graph_ir::{ClaimGraph, Term, Triple};
///
/// let mut a = ClaimGraph::new();
/// a.insert(Triple::new(
///     Term::blank("b0"),
///     Term::iri("http://example.org/p"),
///     Term::string("left"),
/// ));
///
/// let mut b = ClaimGraph::new();
/// b.insert(Triple::new(
///     Term::blank("b0"),
///     Term::iri("http://example.org/p"),
///     Term::string("right"),
/// ));
///
/// a.merge(&b);
///
/// // Both triples survive: the incoming _:b0 was renamed
/// assert_eq!(a.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClaimGraph {
    /// The triples in this graph
    triples: BTreeSet<Triple>,
    /// Every blank label known to this graph (present in a triple or
    /// handed out by `fresh_blank`)
    blank_labels: BTreeSet<Arc<str>>,
    /// Counter feeding the fresh-label allocator
    next_blank: u64,
}

impl ClaimGraph {
    /// Create an empty claim graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the graph
    ///
    /// Returns `true` if the triple was not already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.note_blanks(&triple);
        self.triples.insert(triple)
    }

    /// Check whether the graph contains a triple
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples in SPO order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// The set of blank labels appearing in this graph
    pub fn blank_labels(&self) -> impl Iterator<Item = &str> {
        self.blank_labels.iter().map(|l| l.as_ref())
    }

    /// Allocate a blank node guaranteed to be fresh for this graph
    ///
    /// The label is recorded immediately, so consecutive calls return
    /// distinct blanks even before any triple uses them.
    pub fn fresh_blank(&mut self) -> Term {
        loop {
            let label: Arc<str> = Arc::from(format!("b{}", self.next_blank).as_str());
            self.next_blank += 1;
            if self.blank_labels.insert(label.clone()) {
                return Term::Blank(BlankId::new(label.as_ref()));
            }
        }
    }

    /// Merge another graph into this one, renaming its blanks
    ///
    /// Every blank label of `other` is mapped to a fresh label of this graph
    /// before insertion, keeping the two blank-node namespaces disjoint.
    pub fn merge(&mut self, other: &ClaimGraph) {
        let mut rename: BTreeMap<&str, Term> = BTreeMap::new();
        for label in &other.blank_labels {
            let fresh = self.fresh_blank();
            rename.insert(label.as_ref(), fresh);
        }

        for triple in other.iter() {
            let renamed = Triple::new(
                rename_term(&triple.s, &rename),
                rename_term(&triple.p, &rename),
                rename_term(&triple.o, &rename),
            );
            self.triples.insert(renamed);
        }
    }

    /// Union of two graphs, renaming blanks of `b` (consuming convenience
    /// over [`merge`](ClaimGraph::merge))
    pub fn union(mut a: ClaimGraph, b: &ClaimGraph) -> ClaimGraph {
        a.merge(b);
        a
    }

    /// Get all triples (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples.into_iter().collect()
    }

    fn note_blanks(&mut self, triple: &Triple) {
        for term in [&triple.s, &triple.p, &triple.o] {
            if let Term::Blank(id) = term {
                self.blank_labels.insert(Arc::from(id.as_str()));
            }
        }
    }
}

/// Graph equality is triple-set equality; allocator state is not observable
impl PartialEq for ClaimGraph {
    fn eq(&self, other: &Self) -> bool {
        self.triples == other.triples
    }
}

impl Eq for ClaimGraph {}

fn rename_term(term: &Term, rename: &BTreeMap<&str, Term>) -> Term {
    match term {
        Term::Blank(id) => rename
            .get(id.as_str())
            .cloned()
            .unwrap_or_else(|| term.clone()),
        _ => term.clone(),
    }
}

impl IntoIterator for ClaimGraph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClaimGraph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for ClaimGraph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = ClaimGraph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Triple> for ClaimGraph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.insert(triple);
        }
    }
}
