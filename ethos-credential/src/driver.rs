//! Soundness driver
//!
//! Glue between the external oracles and the synchronous core: verify the
//! presentation cryptographically, expand it, translate it into a claim
//! graph, replay the attached proof, and admit its conclusions only when
//! every assumption is backed by a credential claim.

use crate::error::{CredentialError, Result};
use crate::oracle::{JsonLdExpander, PresentationVerifier};
use crate::translate::{top_nodes, translate};
use ethos_graph_ir::{ClaimGraph, Triple};
use ethos_reasoner::{prove, validate, ProofStep, Rule};
use ethos_vocab::claims;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Check a presentation's composite claims and return everything it proves
///
/// On success the returned graph is the union of the translated credential
/// claims and the implications of the attached proof. A malformed or
/// overreaching proof can never produce a false positive: every failure
/// short-circuits with an error.
///
/// The attached proof is optional; a presentation without one yields
/// exactly its translated claims.
pub async fn check_soundness(
    verifier: &impl PresentationVerifier,
    expander: &impl JsonLdExpander,
    presentation: &JsonValue,
    rules: &[Rule],
) -> Result<ClaimGraph> {
    let report = verifier.verify(presentation).await;
    if !report.verified {
        return Err(CredentialError::VerificationFailed(
            report
                .error
                .unwrap_or_else(|| "presentation did not verify".to_string()),
        ));
    }

    let expanded = expander.expand(presentation).await?;

    let mut facts = translate(&expanded)?;
    let proof = attached_proof(&expanded)?;
    let conclusions = validate(rules, &proof)?;

    for assumption in &conclusions.assumed {
        if !facts.contains(assumption) {
            return Err(CredentialError::UnverifiedAssumption(assumption.clone()));
        }
    }

    debug!(
        claims = facts.len(),
        steps = proof.len(),
        implied = conclusions.implied.len(),
        "presentation is sound"
    );

    // The validator introduces no blank nodes, so implied facts refer to
    // the translated graph's own terms and are inserted without renaming
    facts.extend(conclusions.implied);
    Ok(facts)
}

/// Holder-side mirror of [`check_soundness`]: derive a proof of `goals`
/// from an expanded presentation's claims
///
/// The returned steps serialize to the JSON carried under the
/// `claims:logicV1` property.
pub fn prove_composite(
    expanded_presentation: &JsonValue,
    goals: &[Triple],
    rules: &[Rule],
) -> Result<Vec<ProofStep>> {
    let facts = translate(expanded_presentation)?;
    Ok(prove(&facts, goals, rules)?)
}

/// Decode the proof attached to an expanded presentation
///
/// The proof travels as a JSON literal under `claims:logicV1`. Expansion
/// may surface the literal's `@value` either as embedded JSON or as a JSON
/// string; both are accepted. An absent property means an empty proof.
fn attached_proof(expanded: &JsonValue) -> Result<Vec<ProofStep>> {
    for node in top_nodes(expanded)? {
        let Some(values) = node.get(claims::LOGIC_V1) else {
            continue;
        };

        let literal = values
            .as_array()
            .and_then(|v| v.first())
            .and_then(JsonValue::as_object)
            .and_then(|v| v.get("@value"))
            .ok_or_else(|| {
                CredentialError::MalformedProof(
                    "logic property must carry a JSON literal".to_string(),
                )
            })?;

        let steps = match literal {
            JsonValue::String(text) => serde_json::from_str(text),
            embedded => serde_json::from_value(embedded.clone()),
        }
        .map_err(|e| CredentialError::MalformedProof(e.to_string()))?;

        return Ok(steps);
    }

    Ok(Vec::new())
}
