//! External oracles: signature verification and JSON-LD expansion
//!
//! Signature suites, DID resolution, and document loading live outside this
//! workspace. The soundness driver consumes them through these two traits
//! and never inspects proof blocks or contexts itself. Both oracles run
//! before any claim enters the core, which stays purely synchronous.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Outcome of cryptographic presentation verification
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Whether every signature in the presentation checked out
    pub verified: bool,
    /// Suite-level error when verification failed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl VerificationReport {
    /// A passing report
    pub fn ok() -> Self {
        Self {
            verified: true,
            error: None,
        }
    }

    /// A failing report carrying the suite-level error
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            verified: false,
            error: Some(error.into()),
        }
    }
}

/// Verifies the signatures of a presentation and its credentials
#[async_trait]
pub trait PresentationVerifier: Send + Sync {
    /// Verify `presentation` (in its compacted, as-received form)
    async fn verify(&self, presentation: &JsonValue) -> VerificationReport;
}

/// Expands a JSON-LD document to its expanded form
#[async_trait]
pub trait JsonLdExpander: Send + Sync {
    /// Expand `document`, resolving contexts through the implementation's
    /// document loader
    ///
    /// Failures surface as [`CredentialError::Expansion`](crate::CredentialError::Expansion).
    async fn expand(&self, document: &JsonValue) -> Result<JsonValue>;
}
