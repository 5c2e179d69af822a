//! Composite-claim soundness checking for verifiable presentations
//!
//! A holder presents signed credentials plus a logic proof deriving new
//! (composite) claims from the credentials' atomic claims under a shared
//! rule list. This crate verifies the bundle end to end:
//!
//! 1. Signatures are checked through the external [`PresentationVerifier`]
//!    oracle; contexts are resolved through the external [`JsonLdExpander`].
//! 2. The expanded presentation is translated into an *explicit-ethos*
//!    claim graph: every credential triple is reified under
//!    `claims:claimsV1` and attributed to its issuer ([`translate`]).
//! 3. The proof attached under `claims:logicV1` is replayed; the
//!    presentation is accepted only if each assumption the proof makes is
//!    attested by a credential ([`check_soundness`]).
//!
//! The holder-side mirror, [`prove_composite`], derives the proof to
//! attach in the first place.
//!
//! # Example
//!
//! ```no_run
//! use ethos_credential::{check_soundness, JsonLdExpander, PresentationVerifier};
//!
//! # async fn example(
//! #     verifier: &impl PresentationVerifier,
//! #     expander: &impl JsonLdExpander,
//! #     presentation: &serde_json::Value,
//! #     rules: &[ethos_reasoner::Rule],
//! # ) -> ethos_credential::Result<()> {
//! let claims = check_soundness(verifier, expander, presentation, rules).await?;
//! for claim in claims.iter() {
//!     println!("{}", claim);
//! }
//! # Ok(())
//! # }
//! ```

mod driver;
mod error;
mod oracle;
mod translate;

pub use driver::{check_soundness, prove_composite};
pub use error::{CredentialError, Result};
pub use oracle::{JsonLdExpander, PresentationVerifier, VerificationReport};
pub use translate::translate;

// The rule and proof types callers hand to the driver
pub use ethos_reasoner::{ProofStep, Rule};
