//! Proof validator
//!
//! Replays a proof against the shared rule list without seeing any premise
//! set. The output partitions every triple the proof touches into what it
//! *assumed* (body facts not derived by an earlier step) and what it
//! *implied* (head facts). The caller decides whether the assumptions are
//! acceptable; see the soundness driver in `ethos-credential`.
//!
//! The validator is pure: it introduces no blank nodes, mutates nothing,
//! and the same inputs always produce the same conclusions.

use crate::error::InvalidProof;
use crate::proof::ProofStep;
use crate::rule::{Atom, Bindings, Rule};
use ethos_graph_ir::Triple;
use hashbrown::HashSet;

/// What a replayed proof assumed and implied
///
/// Both lists are duplicate-free and keep first-occurrence order (step
/// order, then body/head atom order within a step), so callers can report
/// the first offending assumption deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProofConclusions {
    /// Facts the proof requires as premises
    pub assumed: Vec<Triple>,
    /// Facts the proof derives
    pub implied: Vec<Triple>,
}

/// Replay `proof` against `rules`
///
/// Soundness contract: if this returns `{assumed, implied}` and every
/// assumed triple is present in some fact set `F`, then every implied
/// triple is a logical consequence of `F` under `rules`.
pub fn validate(rules: &[Rule], proof: &[ProofStep]) -> Result<ProofConclusions, InvalidProof> {
    let mut assumed: Vec<Triple> = Vec::new();
    let mut implied: Vec<Triple> = Vec::new();
    let mut assumed_set: HashSet<Triple> = HashSet::new();
    let mut implied_set: HashSet<Triple> = HashSet::new();

    for step in proof {
        let rule = rules
            .get(step.rule_index as usize)
            .ok_or(InvalidProof::BadRuleIndex)?;

        let vars = rule.variables();
        if step.instantiations.len() != vars.len() {
            return Err(InvalidProof::BadRuleApplication);
        }

        let bindings: Bindings = vars
            .into_iter()
            .zip(step.instantiations.iter().cloned())
            .collect();

        let body = ground(rule.if_all(), &bindings)?;
        let head = ground(rule.then(), &bindings)?;

        for fact in body {
            if !implied_set.contains(&fact) && assumed_set.insert(fact.clone()) {
                assumed.push(fact);
            }
        }

        for fact in head {
            if implied_set.insert(fact.clone()) {
                implied.push(fact);
            }
        }
    }

    Ok(ProofConclusions { assumed, implied })
}

/// Ground a list of atoms under a complete substitution
fn ground(atoms: &[Atom], bindings: &Bindings) -> Result<Vec<Triple>, InvalidProof> {
    atoms
        .iter()
        .map(|atom| atom.apply(bindings).ok_or(InvalidProof::BadRuleApplication))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Atom, Slot};
    use ethos_graph_ir::Term;

    fn iri(s: &str) -> Term {
        Term::iri(s)
    }

    fn fact(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(iri(s), iri(p), iri(o))
    }

    fn flight_rule() -> Rule {
        // (?pig ability flight), (?pig type Pig) -> (bddap firstName "Gorgadon")
        Rule::new(
            vec![
                Atom::new(
                    Slot::var("pig"),
                    Slot::Bound(iri("http://e/Ability")),
                    Slot::Bound(iri("http://e/Flight")),
                ),
                Atom::new(
                    Slot::var("pig"),
                    Slot::Bound(iri(ethos_vocab::rdf::TYPE)),
                    Slot::Bound(iri("http://e/Pig")),
                ),
            ],
            vec![Atom::new(
                Slot::Bound(iri("did:dock:bddap")),
                Slot::Bound(iri("http://xmlns.com/foaf/0.1/firstName")),
                Slot::Bound(Term::typed("Gorgadon", ethos_vocab::rdf::PLAIN_LITERAL)),
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_proof() {
        let conclusions = validate(&[flight_rule()], &[]).unwrap();
        assert!(conclusions.assumed.is_empty());
        assert!(conclusions.implied.is_empty());

        // No rules at all behaves the same
        assert_eq!(validate(&[], &[]).unwrap(), ProofConclusions::default());
    }

    #[test]
    fn test_bad_rule_index() {
        let result = validate(&[], &[ProofStep::new(0, vec![])]);
        assert_eq!(result, Err(InvalidProof::BadRuleIndex));
    }

    #[test]
    fn test_arity_mismatch() {
        // Zero-variable rule applied with one instantiation
        let axiom = Rule::new(
            vec![],
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/p")),
                Slot::Bound(iri("http://e/b")),
            )],
        )
        .unwrap();

        let result = validate(
            &[axiom],
            &[ProofStep::new(0, vec![iri("http://example.com")])],
        );
        assert_eq!(result, Err(InvalidProof::BadRuleApplication));
    }

    #[test]
    fn test_assumed_in_body_order() {
        let step = ProofStep::new(0, vec![iri("http://e/joeThePig")]);
        let conclusions = validate(&[flight_rule()], &[step]).unwrap();

        assert_eq!(
            conclusions.assumed,
            vec![
                fact("http://e/joeThePig", "http://e/Ability", "http://e/Flight"),
                Triple::new(
                    iri("http://e/joeThePig"),
                    iri(ethos_vocab::rdf::TYPE),
                    iri("http://e/Pig"),
                ),
            ]
        );
        assert_eq!(
            conclusions.implied,
            vec![Triple::new(
                iri("did:dock:bddap"),
                iri("http://xmlns.com/foaf/0.1/firstName"),
                Term::typed("Gorgadon", ethos_vocab::rdf::PLAIN_LITERAL),
            )]
        );
    }

    #[test]
    fn test_implied_fact_not_assumed_by_later_step() {
        // Rule 0: axiom deriving (a p b); rule 1: (a p b) in the body
        let axiom = Rule::new(
            vec![],
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/p")),
                Slot::Bound(iri("http://e/b")),
            )],
        )
        .unwrap();
        let follow = Rule::new(
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/p")),
                Slot::Bound(iri("http://e/b")),
            )],
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/q")),
                Slot::Bound(iri("http://e/b")),
            )],
        )
        .unwrap();

        let conclusions = validate(
            &[axiom, follow],
            &[ProofStep::new(0, vec![]), ProofStep::new(1, vec![])],
        )
        .unwrap();

        assert!(conclusions.assumed.is_empty());
        assert_eq!(
            conclusions.implied,
            vec![
                fact("http://e/a", "http://e/p", "http://e/b"),
                fact("http://e/a", "http://e/q", "http://e/b"),
            ]
        );
    }

    #[test]
    fn test_order_matters_for_assumptions() {
        // Same two steps, derivation-first vs use-first
        let axiom = Rule::new(
            vec![],
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/p")),
                Slot::Bound(iri("http://e/b")),
            )],
        )
        .unwrap();
        let follow = Rule::new(
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/p")),
                Slot::Bound(iri("http://e/b")),
            )],
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/q")),
                Slot::Bound(iri("http://e/b")),
            )],
        )
        .unwrap();
        let rules = [axiom, follow];

        // Use-first: the body fact is an assumption
        let conclusions = validate(
            &rules,
            &[ProofStep::new(1, vec![]), ProofStep::new(0, vec![])],
        )
        .unwrap();
        assert_eq!(
            conclusions.assumed,
            vec![fact("http://e/a", "http://e/p", "http://e/b")]
        );
    }

    #[test]
    fn test_validator_is_pure() {
        let rules = [flight_rule()];
        let proof = [ProofStep::new(0, vec![iri("http://e/joeThePig")])];

        let first = validate(&rules, &proof).unwrap();
        let second = validate(&rules, &proof).unwrap();
        assert_eq!(first, second);
    }
}
