//! Horn rules over triple patterns
//!
//! A rule is a body (`if_all`) and a head (`then`) of [`Atom`]s. Each atom
//! slot is either a concrete term or a rule-local variable. Head variables
//! must occur in the body, so a fully matched body grounds the entire rule.

use crate::error::RuleError;
use ethos_graph_ir::{Term, Triple};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A binding from variable names to terms
pub type Bindings = HashMap<Arc<str>, Term>;

/// One slot of a triple pattern (subject, predicate, or object position)
///
/// Wire encoding: `{"Bound": <Term>}` or `{"Unbound": "<var-name>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// A concrete term that must match exactly
    Bound(Term),
    /// A rule-local variable
    Unbound(Arc<str>),
}

impl Slot {
    /// Create a variable slot
    pub fn var(name: &str) -> Self {
        Slot::Unbound(Arc::from(name))
    }

    /// Check if this slot is a variable
    pub fn is_var(&self) -> bool {
        matches!(self, Slot::Unbound(_))
    }

    /// Get the variable name if this is a variable
    pub fn var_name(&self) -> Option<&Arc<str>> {
        match self {
            Slot::Unbound(name) => Some(name),
            Slot::Bound(_) => None,
        }
    }

    fn apply(&self, bindings: &Bindings) -> Option<Term> {
        match self {
            Slot::Bound(term) => Some(term.clone()),
            Slot::Unbound(name) => bindings.get(name).cloned(),
        }
    }

    fn unify(&self, term: &Term, bindings: &mut Bindings) -> bool {
        match self {
            Slot::Bound(bound) => bound == term,
            Slot::Unbound(name) => match bindings.get(name) {
                Some(existing) => existing == term,
                None => {
                    bindings.insert(name.clone(), term.clone());
                    true
                }
            },
        }
    }
}

/// A triple pattern: three slots, each bound or unbound
///
/// Wire encoding: a 3-element array `[Slot, Slot, Slot]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Slot, Slot, Slot)", into = "(Slot, Slot, Slot)")]
pub struct Atom {
    /// Subject slot
    pub s: Slot,
    /// Predicate slot
    pub p: Slot,
    /// Object slot
    pub o: Slot,
}

impl Atom {
    /// Create a new atom
    pub fn new(s: Slot, p: Slot, o: Slot) -> Self {
        Self { s, p, o }
    }

    /// The three slots in subject, predicate, object order
    pub fn slots(&self) -> [&Slot; 3] {
        [&self.s, &self.p, &self.o]
    }

    /// Variables of this atom in slot order
    pub fn variables(&self) -> impl Iterator<Item = &Arc<str>> {
        self.slots().into_iter().filter_map(Slot::var_name)
    }

    /// Substitute bindings into this atom
    ///
    /// Returns `None` while any variable of the atom is unbound.
    pub fn apply(&self, bindings: &Bindings) -> Option<Triple> {
        Some(Triple::new(
            self.s.apply(bindings)?,
            self.p.apply(bindings)?,
            self.o.apply(bindings)?,
        ))
    }

    /// Unify this atom against a concrete triple
    ///
    /// Bound slots must equal the triple's term; unbound slots either extend
    /// the bindings or must agree with an existing binding. Returns the
    /// extended bindings on success, `None` on mismatch.
    pub fn unify(&self, triple: &Triple, bindings: &Bindings) -> Option<Bindings> {
        let mut extended = bindings.clone();
        let ok = self.s.unify(&triple.s, &mut extended)
            && self.p.unify(&triple.p, &mut extended)
            && self.o.unify(&triple.o, &mut extended);
        ok.then_some(extended)
    }
}

impl From<(Slot, Slot, Slot)> for Atom {
    fn from((s, p, o): (Slot, Slot, Slot)) -> Self {
        Self { s, p, o }
    }
}

impl From<Atom> for (Slot, Slot, Slot) {
    fn from(atom: Atom) -> Self {
        (atom.s, atom.p, atom.o)
    }
}

/// A Horn rule: body patterns and head patterns
///
/// # Invariants
///
/// - Every variable appearing in `then` also appears in `if_all`, so a
///   complete body match grounds the head. [`Rule::new`] enforces this, and
///   deserialization goes through the same check.
/// - An empty `if_all` encodes an axiom: its head holds unconditionally
///   (and must therefore be fully bound).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub struct Rule {
    if_all: Vec<Atom>,
    then: Vec<Atom>,
}

/// Unchecked wire form of [`Rule`]
#[derive(Clone, Serialize, Deserialize)]
struct RawRule {
    if_all: Vec<Atom>,
    then: Vec<Atom>,
}

impl Rule {
    /// Create a rule, checking that head variables are body-bound
    pub fn new(if_all: Vec<Atom>, then: Vec<Atom>) -> Result<Self, RuleError> {
        for var in then.iter().flat_map(Atom::variables) {
            if !if_all.iter().flat_map(Atom::variables).any(|v| v == var) {
                return Err(RuleError::UnboundHeadVariable(var.to_string()));
            }
        }
        Ok(Self { if_all, then })
    }

    /// Body patterns
    pub fn if_all(&self) -> &[Atom] {
        &self.if_all
    }

    /// Head patterns
    pub fn then(&self) -> &[Atom] {
        &self.then
    }

    /// Variables of this rule in canonical order
    ///
    /// The canonical order is first occurrence across `if_all` then `then`.
    /// Positional proof instantiations are resolved against this order, so
    /// prover and validator agree without variable names on the wire.
    pub fn variables(&self) -> Vec<Arc<str>> {
        let mut vars: Vec<Arc<str>> = Vec::new();

        for atom in self.if_all.iter().chain(self.then.iter()) {
            for var in atom.variables() {
                if !vars.contains(var) {
                    vars.push(var.clone());
                }
            }
        }

        vars
    }
}

impl TryFrom<RawRule> for Rule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        Rule::new(raw.if_all, raw.then)
    }
}

impl From<Rule> for RawRule {
    fn from(rule: Rule) -> Self {
        RawRule {
            if_all: rule.if_all,
            then: rule.then,
        }
    }
}
