//! Forward-chaining prover
//!
//! Saturates a premise set under a rule list and emits the application log
//! as a replayable proof. The loop is semi-naive: the first round matches
//! every rule against the whole store (this is when empty-body axioms fire),
//! later rounds only consider matches where at least one body atom unifies
//! with a fact derived since the previous round.
//!
//! Termination: every derived term already occurs in the premises or in a
//! rule literal, so the reachable fact universe is finite and the store
//! grows monotonically toward a fixpoint.

use crate::error::CannotProve;
use crate::index::FactIndex;
use crate::proof::ProofStep;
use crate::rule::{Atom, Bindings, Rule};
use ethos_graph_ir::{ClaimGraph, Triple};
use std::sync::Arc;
use tracing::debug;

/// Prove `goals` from `premises` under `rules`
///
/// Returns the list of rule applications that, replayed in order, derives
/// every goal. Instantiations are emitted in each rule's canonical variable
/// order, so [`validate`](crate::validate) can rebuild the same
/// substitutions without variable names on the wire.
///
/// Fails with [`CannotProve`] if saturation reaches a fixpoint while some
/// goal is still missing.
pub fn prove(
    premises: &ClaimGraph,
    goals: &[Triple],
    rules: &[Rule],
) -> Result<Vec<ProofStep>, CannotProve> {
    let mut known = FactIndex::from(premises);
    let mut log: Vec<ProofStep> = Vec::new();

    let rule_vars: Vec<Vec<Arc<str>>> = rules.iter().map(Rule::variables).collect();

    let mut delta_start = 0;
    let mut round = 0;

    while !goals.iter().all(|g| known.contains(g)) {
        round += 1;
        let round_start = known.len();

        for (index, rule) in rules.iter().enumerate() {
            if round == 1 {
                apply_rule(index, rule, &rule_vars[index], None, &mut known, &mut log);
            } else {
                // Semi-naive: some body atom must match a fact from the delta
                for pivot in 0..rule.if_all().len() {
                    apply_rule(
                        index,
                        rule,
                        &rule_vars[index],
                        Some((pivot, delta_start)),
                        &mut known,
                        &mut log,
                    );
                }
            }
        }

        debug!(
            round,
            facts = known.len(),
            steps = log.len(),
            "saturation round complete"
        );

        if known.len() == round_start {
            // Fixpoint with no new facts this round, so the loop guard's
            // verdict stands: the remaining goals are unreachable
            return Err(CannotProve);
        }
        delta_start = round_start;
    }

    Ok(log)
}

/// Match one rule's body and record every application that derives
/// something new
fn apply_rule(
    index: usize,
    rule: &Rule,
    vars: &[Arc<str>],
    pivot: Option<(usize, usize)>,
    known: &mut FactIndex,
    log: &mut Vec<ProofStep>,
) {
    let mut matches = Vec::new();
    match_body(known, rule.if_all(), pivot, 0, &Bindings::new(), &mut matches);

    for bindings in matches {
        let instantiations: Option<Vec<_>> =
            vars.iter().map(|v| bindings.get(v).cloned()).collect();
        let Some(instantiations) = instantiations else {
            continue;
        };

        let heads: Option<Vec<Triple>> =
            rule.then().iter().map(|atom| atom.apply(&bindings)).collect();
        let Some(heads) = heads else {
            continue;
        };

        // Log the step only when its head contributes a new fact
        if heads.iter().all(|h| known.contains(h)) {
            continue;
        }
        for head in heads {
            known.insert(head);
        }

        log.push(ProofStep::new(index as u32, instantiations));
    }
}

/// Recursively unify body atoms against known facts, accumulating every
/// consistent substitution
///
/// When `pivot` is `Some((atom_index, delta_start))`, that atom is only
/// matched against facts at store positions `>= delta_start`.
fn match_body(
    known: &FactIndex,
    body: &[Atom],
    pivot: Option<(usize, usize)>,
    depth: usize,
    bindings: &Bindings,
    out: &mut Vec<Bindings>,
) {
    let Some(atom) = body.get(depth) else {
        out.push(bindings.clone());
        return;
    };

    let from = match pivot {
        Some((pivot_depth, delta_start)) if pivot_depth == depth => delta_start,
        _ => 0,
    };

    for fact in known.candidates_from(atom, from) {
        if let Some(extended) = atom.unify(fact, bindings) {
            match_body(known, body, pivot, depth + 1, &extended, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Slot;
    use ethos_graph_ir::Term;

    fn iri(s: &str) -> Term {
        Term::iri(s)
    }

    fn fact(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(iri(s), iri(p), iri(o))
    }

    fn graph(triples: &[Triple]) -> ClaimGraph {
        triples.iter().cloned().collect()
    }

    #[test]
    fn test_empty_everything() {
        let proof = prove(&ClaimGraph::new(), &[], &[]).unwrap();
        assert!(proof.is_empty());
    }

    #[test]
    fn test_goal_already_in_premises() {
        let premises = graph(&[fact("http://e/a", "http://e/p", "http://e/b")]);
        let proof = prove(
            &premises,
            &[fact("http://e/a", "http://e/p", "http://e/b")],
            &[],
        )
        .unwrap();
        assert!(proof.is_empty());
    }

    #[test]
    fn test_axiom_fires_once() {
        let axiom = Rule::new(
            vec![],
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::Bound(iri("http://e/frobs")),
                Slot::Bound(iri("http://e/b")),
            )],
        )
        .unwrap();

        let proof = prove(
            &ClaimGraph::new(),
            &[fact("http://e/a", "http://e/frobs", "http://e/b")],
            &[axiom],
        )
        .unwrap();

        assert_eq!(proof, vec![ProofStep::new(0, vec![])]);
    }

    #[test]
    fn test_instantiations_in_canonical_order() {
        // Rule: (?x p ?y) -> (?y p ?x); canonical order is [x, y]
        let flip = Rule::new(
            vec![Atom::new(
                Slot::var("x"),
                Slot::Bound(iri("http://e/p")),
                Slot::var("y"),
            )],
            vec![Atom::new(
                Slot::var("y"),
                Slot::Bound(iri("http://e/p")),
                Slot::var("x"),
            )],
        )
        .unwrap();

        let premises = graph(&[fact("http://e/a", "http://e/p", "http://e/b")]);
        let proof = prove(
            &premises,
            &[fact("http://e/b", "http://e/p", "http://e/a")],
            &[flip],
        )
        .unwrap();

        assert_eq!(
            proof,
            vec![ProofStep::new(0, vec![iri("http://e/a"), iri("http://e/b")])]
        );
    }

    #[test]
    fn test_transitive_chain_across_rounds() {
        // a -> b -> c -> d; deriving (a, p, d) needs a fact derived in an
        // earlier round
        let trans = Rule::new(
            vec![
                Atom::new(Slot::var("x"), Slot::Bound(iri("http://e/p")), Slot::var("y")),
                Atom::new(Slot::var("y"), Slot::Bound(iri("http://e/p")), Slot::var("z")),
            ],
            vec![Atom::new(
                Slot::var("x"),
                Slot::Bound(iri("http://e/p")),
                Slot::var("z"),
            )],
        )
        .unwrap();

        let premises = graph(&[
            fact("http://e/a", "http://e/p", "http://e/b"),
            fact("http://e/b", "http://e/p", "http://e/c"),
            fact("http://e/c", "http://e/p", "http://e/d"),
        ]);

        let goal = fact("http://e/a", "http://e/p", "http://e/d");
        let proof = prove(&premises, &[goal], &[trans]).unwrap();

        // The log must end in a state where the goal was derived
        assert!(!proof.is_empty());
    }

    #[test]
    fn test_cannot_prove() {
        let premises = graph(&[fact("http://e/a", "http://e/p", "http://e/b")]);
        let result = prove(
            &premises,
            &[fact("http://e/a", "http://e/p", "http://e/MISSING")],
            &[],
        );
        assert_eq!(result, Err(CannotProve));
    }

    #[test]
    fn test_duplicate_head_logged_once() {
        // Two facts match the body but the head is ground: one step suffices
        let collapse = Rule::new(
            vec![Atom::new(
                Slot::var("x"),
                Slot::Bound(iri("http://e/p")),
                Slot::var("y"),
            )],
            vec![Atom::new(
                Slot::Bound(iri("http://e/c")),
                Slot::Bound(iri("http://e/q")),
                Slot::Bound(iri("http://e/d")),
            )],
        )
        .unwrap();

        let premises = graph(&[
            fact("http://e/a", "http://e/p", "http://e/b"),
            fact("http://e/b", "http://e/p", "http://e/a"),
        ]);

        let proof = prove(
            &premises,
            &[fact("http://e/c", "http://e/q", "http://e/d")],
            &[collapse],
        )
        .unwrap();

        assert_eq!(proof.len(), 1);
    }

    #[test]
    fn test_unbound_predicate_matching() {
        // Rules may quantify over the predicate position
        let echo = Rule::new(
            vec![Atom::new(
                Slot::Bound(iri("http://e/a")),
                Slot::var("p"),
                Slot::var("o"),
            )],
            vec![Atom::new(
                Slot::Bound(iri("http://e/b")),
                Slot::var("p"),
                Slot::var("o"),
            )],
        )
        .unwrap();

        let premises = graph(&[fact("http://e/a", "http://e/knows", "http://e/x")]);
        let proof = prove(
            &premises,
            &[fact("http://e/b", "http://e/knows", "http://e/x")],
            &[echo],
        )
        .unwrap();

        assert_eq!(proof.len(), 1);
        assert_eq!(
            proof[0].instantiations,
            vec![iri("http://e/knows"), iri("http://e/x")]
        );
    }
}
