//! Rule-engine error types

use thiserror::Error;

/// Error raised when constructing a malformed rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A head variable has no binding occurrence in the body
    #[error("variable '{0}' appears in `then` but not in `if_all`")]
    UnboundHeadVariable(String),
}

/// Error raised while replaying a proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidProof {
    /// A step references a rule index that does not exist
    #[error("proof step references a rule index that does not exist")]
    BadRuleIndex,

    /// A step's instantiation list does not ground its rule
    #[error("proof step does not ground its rule (arity mismatch or unbound variable)")]
    BadRuleApplication,
}

/// Error returned by [`prove`](crate::prove) when saturation reaches a
/// fixpoint without deriving every goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("saturation reached a fixpoint without deriving every goal")]
pub struct CannotProve;
