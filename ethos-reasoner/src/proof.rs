//! Proof wire representation
//!
//! A proof is an ordered list of rule applications. Each step names a rule
//! by index and supplies the terms bound to that rule's variables, in the
//! rule's canonical variable order (see [`Rule::variables`](crate::Rule::variables)).

use ethos_graph_ir::Term;
use serde::{Deserialize, Serialize};

/// One rule application inside a proof
///
/// Wire encoding:
/// `{"rule_index": <u32>, "instantiations": [<Term>, ...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Index of the applied rule in the shared rule list
    pub rule_index: u32,
    /// Terms bound to the rule's variables, positionally
    pub instantiations: Vec<Term>,
}

impl ProofStep {
    /// Create a proof step
    pub fn new(rule_index: u32, instantiations: Vec<Term>) -> Self {
        Self {
            rule_index,
            instantiations,
        }
    }
}
