//! RDF claim-graph intermediate representation
//!
//! This crate provides the canonical types a presentation is translated into
//! and the rule engine operates over: terms, triples, and claim graphs.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form; no
//!    prefix handling happens at this layer.
//!
//! 2. **Opaque datatypes** - Literal datatypes are raw IRI strings carried
//!    verbatim from JSON-LD expansion. They are compared byte-for-byte and
//!    never normalized.
//!
//! 3. **Set semantics** - A [`ClaimGraph`] is a set of triples; duplicate
//!    insertions collapse and iteration order is deterministic (SPO
//!    lexicographic).
//!
//! 4. **Locally scoped blanks** - Blank-node labels mean nothing outside the
//!    graph that holds them. Merging two claim graphs renames the incoming
//!    side's blanks to fresh labels so unrelated anonymous entities can
//!    never collide.
//!
//! # Example
//!
//! ```
//! use ethos_graph_ir::{ClaimGraph, Term, Triple};
//!
//! let mut graph = ClaimGraph::new();
//!
//! graph.insert(Triple::new(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! ));
//!
//! assert_eq!(graph.len(), 1);
//! ```

mod claim_graph;
mod term;
mod triple;

pub use claim_graph::ClaimGraph;
pub use term::{BlankId, Term};
pub use triple::Triple;
