//! RDF term types: IRI, blank node, and literal
//!
//! Terms are the building blocks of triples. A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A blank node (with a graph-local identifier)
//! - A literal (lexical value + datatype IRI + optional language tag)

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node labels are stable within a claim graph but have no global
/// meaning. Two graphs may use the same label for unrelated entities, which
/// is why [`ClaimGraph::merge`](crate::ClaimGraph::merge) renames labels on
/// the incoming side.
///
/// The label never includes the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF term (subject, predicate, or object position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an expanded IRI, never a prefixed form.
/// - Blank-node labels are opaque identifiers with byte-equality semantics;
///   they are never interpreted as IRIs.
/// - A literal's datatype is a raw IRI string carried verbatim from the
///   source; two literals are equal only if value, datatype, and language
///   tag are all byte-equal.
///
/// The wire encoding is the tagged form used by rules and proofs:
/// `{"Iri": "..."}`, `{"Blank": "..."}`, or
/// `{"Literal": {"value": "...", "datatype": "...", "language": "..."?}}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    Iri(Arc<str>),

    /// Blank node with graph-local identifier
    Blank(BlankId),

    /// Literal value with explicit datatype
    Literal {
        /// Lexical value
        value: Arc<str>,
        /// Datatype IRI (always present; plain strings use xsd:string)
        datatype: Arc<str>,
        /// Language tag (only meaningful for language-tagged strings)
        #[serde(skip_serializing_if = "Option::is_none", default)]
        language: Option<Arc<str>>,
    },
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::Blank(BlankId::new(label))
    }

    /// Create a plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::typed(value, ethos_vocab::xsd::STRING)
    }

    /// Create a language-tagged string literal (rdf:langString)
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype: Arc::from(ethos_vocab::rdf::LANG_STRING),
            language: Some(Arc::from(lang.as_ref())),
        }
    }

    /// Create a typed literal with an explicit datatype IRI
    pub fn typed(value: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype: Arc::from(datatype.as_ref()),
            language: None,
        }
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::Blank(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get literal components
    pub fn as_literal(&self) -> Option<(&str, &str, Option<&str>)> {
        match self {
            Term::Literal {
                value,
                datatype,
                language,
            } => Some((value, datatype, language.as_deref())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Blank(id) => write!(f, "{}", id),
            Term::Literal {
                value,
                datatype,
                language,
            } => {
                write!(f, "\"{}\"", value)?;
                if let Some(lang) = language {
                    write!(f, "@{}", lang)
                } else if datatype.as_ref() != ethos_vocab::xsd::STRING {
                    write!(f, "^^<{}>", datatype)
                } else {
                    Ok(())
                }
            }
        }
    }
}
