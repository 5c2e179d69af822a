//! Expanded-presentation to claim-graph translation
//!
//! Credentials do not contribute their triples directly: every content
//! triple `(s, p, o)` of a credential issued by `I` enters the claim graph
//! in reified form under a fresh blank node `b`:
//!
//! ```text
//! (I, claims:claimsV1, b)
//! (b, rdf:subject,   s)
//! (b, rdf:predicate, p)
//! (b, rdf:object,    o)
//! ```
//!
//! so rules can only build on "I asserts (s, p, o)", never on bare facts,
//! and may quantify over the attesting issuer. The credential's signature
//! block (`sec:proof`) is not part of the asserted content and is skipped.
//!
//! Input is the *expanded* JSON-LD form of a presentation: context
//! processing and document loading already happened in the external
//! expander; this module only walks expanded node objects.

use crate::error::{CredentialError, Result};
use ethos_graph_ir::{ClaimGraph, Term, Triple};
use ethos_vocab::{claims, cred, rdf, sec, xsd};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

/// Translate an expanded presentation into its explicit-ethos claim graph
///
/// Each credential's blank nodes are renamed through the output graph's
/// allocator, so blanks of distinct credentials never collide (and the
/// reification blanks are fresh by construction).
pub fn translate(expanded: &JsonValue) -> Result<ClaimGraph> {
    let mut graph = ClaimGraph::new();

    for node in top_nodes(expanded)? {
        for credential in credential_nodes(node)? {
            translate_credential(credential, &mut graph)?;
        }
    }

    Ok(graph)
}

/// The top-level node objects of an expanded document
pub(crate) fn top_nodes(expanded: &JsonValue) -> Result<Vec<&Map<String, JsonValue>>> {
    match expanded {
        JsonValue::Object(map) => Ok(vec![map]),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| {
                item.as_object().ok_or_else(|| {
                    CredentialError::MalformedPresentation(
                        "expanded presentation entries must be node objects".to_string(),
                    )
                })
            })
            .collect(),
        _ => Err(CredentialError::MalformedPresentation(
            "expanded presentation must be a node object or array of node objects".to_string(),
        )),
    }
}

/// Credential nodes attached to a presentation node, unwrapping `@graph`
fn credential_nodes(node: &Map<String, JsonValue>) -> Result<Vec<&Map<String, JsonValue>>> {
    let mut credentials = Vec::new();

    for value in property_values(node, cred::VERIFIABLE_CREDENTIAL_PROP) {
        let object = value.as_object().ok_or_else(|| {
            CredentialError::MalformedPresentation(
                "verifiableCredential entries must be node objects".to_string(),
            )
        })?;

        match object.get("@graph") {
            Some(JsonValue::Array(nodes)) => {
                for inner in nodes {
                    credentials.push(inner.as_object().ok_or_else(|| {
                        CredentialError::MalformedPresentation(
                            "credential @graph entries must be node objects".to_string(),
                        )
                    })?);
                }
            }
            Some(_) => {
                return Err(CredentialError::MalformedPresentation(
                    "credential @graph must be an array".to_string(),
                ))
            }
            None => credentials.push(object),
        }
    }

    Ok(credentials)
}

/// Values of `key` on a node, normalized to a slice
fn property_values<'a>(node: &'a Map<String, JsonValue>, key: &str) -> &'a [JsonValue] {
    match node.get(key) {
        Some(JsonValue::Array(items)) => items,
        Some(other) => std::slice::from_ref(other),
        None => &[],
    }
}

/// Reify one credential's content into the claim graph
fn translate_credential(
    credential: &Map<String, JsonValue>,
    graph: &mut ClaimGraph,
) -> Result<()> {
    let issuer = issuer_of(credential)?;

    let mut walker = CredentialWalker {
        graph,
        blanks: HashMap::new(),
        content: Vec::new(),
    };
    walker.walk_node(credential, true)?;
    let content = walker.content;

    for Triple { s, p, o } in content {
        let reification = graph.fresh_blank();
        graph.insert(Triple::new(
            issuer.clone(),
            Term::iri(claims::CLAIMS_V1),
            reification.clone(),
        ));
        graph.insert(Triple::new(reification.clone(), Term::iri(rdf::SUBJECT), s));
        graph.insert(Triple::new(reification.clone(), Term::iri(rdf::PREDICATE), p));
        graph.insert(Triple::new(reification, Term::iri(rdf::OBJECT), o));
    }

    Ok(())
}

/// Extract a credential's issuer as an IRI term
fn issuer_of(credential: &Map<String, JsonValue>) -> Result<Term> {
    let issuer = property_values(credential, cred::ISSUER)
        .first()
        .ok_or_else(|| {
            CredentialError::MalformedPresentation("credential is missing an issuer".to_string())
        })?;

    let id = issuer
        .as_object()
        .and_then(|node| node.get("@id"))
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            CredentialError::MalformedPresentation(
                "credential issuer must be an id reference".to_string(),
            )
        })?;

    if id.starts_with("_:") {
        return Err(CredentialError::MalformedPresentation(
            "credential issuer must be an IRI, not a blank node".to_string(),
        ));
    }

    Ok(Term::iri(id))
}

/// Walks one credential's expanded node objects into content triples
///
/// Blank labels are renamed through the target graph's allocator, one map
/// per credential, so labels stay consistent inside a credential and
/// disjoint across credentials.
struct CredentialWalker<'g> {
    graph: &'g mut ClaimGraph,
    blanks: HashMap<String, Term>,
    content: Vec<Triple>,
}

impl CredentialWalker<'_> {
    fn blank_for(&mut self, label: &str) -> Term {
        if let Some(term) = self.blanks.get(label) {
            return term.clone();
        }
        let fresh = self.graph.fresh_blank();
        self.blanks.insert(label.to_string(), fresh.clone());
        fresh
    }

    /// Emit a node's triples; returns the term standing for the node
    ///
    /// `top_level` is true only for the credential node itself, where the
    /// `sec:proof` block is skipped.
    fn walk_node(&mut self, node: &Map<String, JsonValue>, top_level: bool) -> Result<Term> {
        let subject = match node.get("@id") {
            Some(JsonValue::String(id)) => {
                if let Some(label) = id.strip_prefix("_:") {
                    self.blank_for(label)
                } else {
                    Term::iri(id)
                }
            }
            Some(_) => {
                return Err(CredentialError::MalformedPresentation(
                    "@id must be a string".to_string(),
                ))
            }
            None => self.graph.fresh_blank(),
        };

        for class in property_values(node, "@type") {
            let class = class.as_str().ok_or_else(|| {
                CredentialError::MalformedPresentation("@type entries must be strings".to_string())
            })?;
            self.content.push(Triple::new(
                subject.clone(),
                Term::iri(rdf::TYPE),
                Term::iri(class),
            ));
        }

        for (key, values) in node {
            if key.starts_with('@') || (top_level && key.as_str() == sec::PROOF) {
                continue;
            }
            let values = match values {
                JsonValue::Array(items) => items.as_slice(),
                other => std::slice::from_ref(other),
            };
            for value in values {
                let object = self.walk_value(value)?;
                self.content
                    .push(Triple::new(subject.clone(), Term::iri(key), object));
            }
        }

        Ok(subject)
    }

    /// Convert one expanded value object into a term, emitting any triples
    /// the value implies (nested nodes, list cells)
    fn walk_value(&mut self, value: &JsonValue) -> Result<Term> {
        let object = value.as_object().ok_or_else(|| {
            CredentialError::MalformedPresentation(
                "expanded property values must be objects".to_string(),
            )
        })?;

        if let Some(literal) = object.get("@value") {
            return literal_term(object, literal);
        }

        if let Some(list) = object.get("@list") {
            let items = list.as_array().ok_or_else(|| {
                CredentialError::MalformedPresentation("@list must be an array".to_string())
            })?;
            return self.walk_list(items);
        }

        self.walk_node(object, false)
    }

    /// Encode a JSON-LD `@list` as an rdf:first / rdf:rest chain
    fn walk_list(&mut self, items: &[JsonValue]) -> Result<Term> {
        let mut cells = Vec::with_capacity(items.len());
        for item in items {
            let term = self.walk_value(item)?;
            cells.push((self.graph.fresh_blank(), term));
        }

        let mut tail = Term::iri(rdf::NIL);
        for (cell, item) in cells.into_iter().rev() {
            self.content
                .push(Triple::new(cell.clone(), Term::iri(rdf::FIRST), item));
            self.content
                .push(Triple::new(cell.clone(), Term::iri(rdf::REST), tail));
            tail = cell;
        }

        Ok(tail)
    }
}

/// Build a literal term from an expanded `@value` object
///
/// The datatype produced by expansion is preserved verbatim; defaults are
/// only applied when expansion supplied no `@type` at all, mirroring what
/// JSON-LD deserialization of native values produces.
fn literal_term(object: &Map<String, JsonValue>, literal: &JsonValue) -> Result<Term> {
    if let Some(language) = object.get("@language") {
        let language = language.as_str().ok_or_else(|| {
            CredentialError::MalformedPresentation("@language must be a string".to_string())
        })?;
        let value = literal.as_str().ok_or_else(|| {
            CredentialError::MalformedPresentation(
                "language-tagged values must be strings".to_string(),
            )
        })?;
        return Ok(Term::lang_string(value, language));
    }

    if let Some(datatype) = object.get("@type") {
        let datatype = datatype.as_str().ok_or_else(|| {
            CredentialError::MalformedPresentation("@type of a value must be a string".to_string())
        })?;
        if datatype == "@json" {
            let canonical = serde_json::to_string(literal)
                .map_err(|e| CredentialError::MalformedPresentation(e.to_string()))?;
            return Ok(Term::typed(canonical, rdf::JSON));
        }
        return Ok(Term::typed(lexical_form(literal)?, datatype));
    }

    match literal {
        JsonValue::String(s) => Ok(Term::string(s)),
        JsonValue::Bool(b) => Ok(Term::typed(b.to_string(), xsd::BOOLEAN)),
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => {
            Ok(Term::typed(n.to_string(), xsd::INTEGER))
        }
        JsonValue::Number(n) => Ok(Term::typed(n.to_string(), xsd::DOUBLE)),
        _ => Err(CredentialError::MalformedPresentation(
            "unsupported @value".to_string(),
        )),
    }
}

/// Lexical form of a scalar `@value`
fn lexical_form(literal: &JsonValue) -> Result<String> {
    match literal {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Number(n) => Ok(n.to_string()),
        _ => Err(CredentialError::MalformedPresentation(
            "typed @value must be a scalar".to_string(),
        )),
    }
}
