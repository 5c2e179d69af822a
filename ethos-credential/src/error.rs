//! Error types for presentation checking

use ethos_graph_ir::Triple;
use ethos_reasoner::{CannotProve, InvalidProof};
use thiserror::Error;

/// Error type for presentation translation and soundness checking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Cryptographic verification of the presentation failed
    ///
    /// Wraps the suite-level error string for diagnosis.
    #[error("presentation verification failed: {0}")]
    VerificationFailed(String),

    /// The external JSON-LD expander reported a failure
    #[error("JSON-LD expansion failed: {0}")]
    Expansion(String),

    /// The expanded presentation does not have the expected structure
    #[error("malformed presentation: {0}")]
    MalformedPresentation(String),

    /// The attached logic proof could not be decoded
    #[error("attached proof is not decodable: {0}")]
    MalformedProof(String),

    /// Replaying the attached proof failed
    #[error(transparent)]
    InvalidProof(#[from] InvalidProof),

    /// The proof assumes a claim no credential attests
    #[error("assumed claim is not attested by any credential: {0}")]
    UnverifiedAssumption(Triple),

    /// The requested composite claims are not derivable
    #[error(transparent)]
    CannotProve(#[from] CannotProve),
}

/// Result type alias for presentation-checking operations
pub type Result<T> = std::result::Result<T, CredentialError>;
