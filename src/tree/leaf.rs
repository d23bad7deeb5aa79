//! Leaf condition contract

use crate::error::{ConditionError, Result};
use crate::provider::EvalContext;

/// Contract every leaf condition plugs into the tree engine with
///
/// The engine treats leaves as opaque: it evaluates, inverts and clones a
/// tree purely through this trait. Implementations are immutable value
/// objects; `deep_clone` must never alias per-evaluation state between the
/// original and the clone (see [`ValueProvider::deep_clone`]).
///
/// [`ValueProvider::deep_clone`]: crate::provider::ValueProvider::deep_clone
pub trait Condition: Sized {
    /// Subject type the condition tests
    type Subject: ?Sized;

    /// Test `value` under `context`
    fn evaluate(&self, value: &Self::Subject, context: Option<&EvalContext>) -> Result<bool>;

    /// Condition whose result is the logical negation of this one
    ///
    /// The engine cannot invert an opaque leaf; a leaf that does not
    /// override this inherits a typed error instead.
    fn invert(&self) -> Result<Self> {
        Err(ConditionError::InvalidOperation(
            "condition does not support inversion".to_string(),
        ))
    }

    /// Structural clone honoring the provider sharing contract
    fn deep_clone(&self) -> Self;
}
