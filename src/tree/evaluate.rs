//! Generalized fold over condition trees

use crate::error::{ConditionError, Result};
use crate::operator::Joiner;
use crate::provider::EvalContext;
use crate::tree::{Condition, ConditionTree};

impl<C: Condition> ConditionTree<C> {
    /// Evaluate the tree against `value` and `context`, short-circuiting
    /// as soon as a node's result is decided
    pub fn evaluate(&self, value: &C::Subject, context: Option<&EvalContext>) -> Result<bool> {
        self.evaluate_with(value, context, true)
    }

    /// Boolean evaluation with explicit short-circuiting control
    ///
    /// The combiners are bitwise, so with short-circuiting disabled every
    /// child is visited (and every leaf error surfaced) even after the
    /// result is decided.
    pub fn evaluate_with(
        &self,
        value: &C::Subject,
        context: Option<&EvalContext>,
        short_circuit: bool,
    ) -> Result<bool> {
        let stop: &dyn Fn(Joiner, &bool) -> bool =
            &|joiner, result| (joiner == Joiner::And) ^ *result;
        self.fold(
            &mut |condition| condition.evaluate(value, context),
            &|a, b| a & b,
            &|a, b| a | b,
            short_circuit.then_some(stop),
        )
    }

    /// Fold the tree into an arbitrary result type
    ///
    /// Leaves evaluate through `evaluator`. An internal node folds its
    /// children left to right: the accumulator is seeded with the first
    /// child's result and combined with each following child through
    /// `and_combine` or `or_combine` according to the node's joiner. When
    /// a `short_circuit` predicate is supplied it is consulted after every
    /// accumulator update, including the seed, and a true result stops the
    /// fold at that node. Errors abort the whole fold atomically.
    pub fn fold<R>(
        &self,
        evaluator: &mut dyn FnMut(&C) -> Result<R>,
        and_combine: &dyn Fn(R, R) -> R,
        or_combine: &dyn Fn(R, R) -> R,
        short_circuit: Option<&dyn Fn(Joiner, &R) -> bool>,
    ) -> Result<R> {
        match self {
            ConditionTree::Leaf(condition) => evaluator(condition),
            ConditionTree::Joined(joined) => {
                let mut children = joined.conditions().iter();
                let first = children.next().ok_or_else(|| {
                    ConditionError::InvalidOperation(
                        "joined condition has no children".to_string(),
                    )
                })?;
                let mut accumulator =
                    first.fold(evaluator, and_combine, or_combine, short_circuit)?;
                for child in children {
                    if let Some(stop) = short_circuit {
                        if stop(joined.joiner(), &accumulator) {
                            return Ok(accumulator);
                        }
                    }
                    let next = child.fold(evaluator, and_combine, or_combine, short_circuit)?;
                    accumulator = match joined.joiner() {
                        Joiner::And => and_combine(accumulator, next),
                        Joiner::Or => or_combine(accumulator, next),
                    };
                }
                Ok(accumulator)
            }
        }
    }
}
