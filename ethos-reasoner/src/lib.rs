//! Horn-rule forward chaining and proof validation over claim graphs
//!
//! This crate is the logical core of the Ethos composite-claim checker:
//! a small, deliberately restricted theorem prover. Rules are Horn clauses
//! over triple patterns (no negation, no disjunction, no head-only
//! existentials); proofs are positional rule-application logs.
//!
//! ## Module Organization
//!
//! - `rule` - slots, atoms, rules, substitution, and unification
//! - `proof` - the wire representation of rule applications
//! - `index` - predicate-indexed fact store backing the saturation loop
//! - `prove` - semi-naive forward chaining producing a proof
//! - `validate` - proof replay computing assumed and implied facts
//! - `error` - rule, proof, and prover error types
//!
//! ## Prover / validator contract
//!
//! [`prove`] and [`validate`] agree on a canonical per-rule variable order
//! (first occurrence across body then head), so proofs carry bare term
//! lists instead of named substitutions. For any premise set `F`, goals
//! reachable by saturation, and rules `R`:
//!
//! `validate(R, prove(F, goals, R))` succeeds with `assumed ⊆ F` and
//! `goals ⊆ implied`.

mod error;
mod index;
mod proof;
mod prove;
mod rule;
mod validate;

pub use error::{CannotProve, InvalidProof, RuleError};
pub use index::FactIndex;
pub use proof::ProofStep;
pub use prove::prove;
pub use rule::{Atom, Bindings, Rule, Slot};
pub use validate::{validate, ProofConclusions};
