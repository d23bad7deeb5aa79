//! Conditional - a serializable predicate-composition engine
//!
//! Build boolean expression trees out of leaf conditions joined with
//! AND/OR, evaluate them against a subject value plus an optional opaque
//! context, invert them structurally (De Morgan), and clone them safely
//! for reuse across trees.
//!
//! Leaves are pluggable through the [`Condition`] trait; operands come
//! from [`ValueProvider`]s that are either constants or values computed
//! lazily from the evaluation context. Operator tables allocate codes in
//! complement pairs, so inverting any operator is index arithmetic and
//! `evaluate(invert(op), a, b) == !evaluate(op, a, b)` holds structurally.
//!
//! ```
//! use conditional::{ConditionTree, NumericCondition, NumericOperator};
//!
//! let adult = ConditionTree::leaf(NumericCondition::new(
//!     NumericOperator::GreaterThanOrEqual,
//!     18,
//! ));
//! let senior = ConditionTree::leaf(NumericCondition::new(
//!     NumericOperator::GreaterThanOrEqual,
//!     65,
//! ));
//! let adult_not_senior = adult.and(&senior.invert()?);
//!
//! assert!(adult_not_senior.evaluate(&30, None)?);
//! assert!(!adult_not_senior.evaluate(&70, None)?);
//! # Ok::<(), conditional::ConditionError>(())
//! ```

pub mod condition;
pub mod error;
pub mod operator;
pub mod provider;
pub mod tree;

pub use crate::condition::{
    NumericCondition, NumericQuantifiedCondition, NumericRangeCondition, StringCondition,
    StringQuantifiedCondition,
};
pub use crate::error::{ConditionError, Result};
pub use crate::operator::{CollectionOperator, Joiner, NumericOperator, StringOperator};
pub use crate::provider::{DerivedValue, EvalContext, MultiValueProvider, ValueProvider};
pub use crate::tree::{Condition, ConditionTree, Joined, LeafRegistry};
