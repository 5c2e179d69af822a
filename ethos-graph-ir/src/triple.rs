//! RDF triple (statement)
//!
//! A triple represents a single RDF statement: subject-predicate-object.

use crate::Term;
use serde::{Deserialize, Serialize};

/// An RDF triple (subject-predicate-object)
///
/// # Invariants
///
/// - Subject is an IRI or blank node in well-formed data
/// - Predicate is an IRI in well-formed data
/// - Object can be IRI, blank node, or literal
///
/// These invariants are not enforced at construction time: rule heads are
/// allowed to place any term in any slot, and the engine stays permissive
/// toward rule authors.
///
/// Triples serialize as a 3-element JSON array `[s, p, o]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(Term, Term, Term)", into = "(Term, Term, Term)")]
pub struct Triple {
    /// Subject
    pub s: Term,
    /// Predicate
    pub p: Term,
    /// Object
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Get the subject
    pub fn subject(&self) -> &Term {
        &self.s
    }

    /// Get the predicate
    pub fn predicate(&self) -> &Term {
        &self.p
    }

    /// Get the object
    pub fn object(&self) -> &Term {
        &self.o
    }
}

impl From<(Term, Term, Term)> for Triple {
    fn from((s, p, o): (Term, Term, Term)) -> Self {
        Self { s, p, o }
    }
}

impl From<Triple> for (Term, Term, Term) {
    fn from(t: Triple) -> Self {
        (t.s, t.p, t.o)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
