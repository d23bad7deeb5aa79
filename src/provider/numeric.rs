//! Numeric operation providers
//!
//! Composite providers applying pure arithmetic to nested providers'
//! values. All of them are stateless in themselves: their `deep_clone`
//! only allocates when a nested provider produced a fresh instance.

use crate::provider::{DerivedValue, EvalContext, ValueProvider};
use num_traits::{Num, Signed};
use std::marker::PhantomData;
use std::sync::Arc;

/// Binary arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericBinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Min,
    Max,
}

/// Applies a [`NumericBinaryOp`] to two nested providers
///
/// Division and remainder follow ordinary Rust semantics for the numeric
/// kind in use, including integer division by zero.
pub struct NumericBinaryOperation<T> {
    op: NumericBinaryOp,
    left: ValueProvider<T>,
    right: ValueProvider<T>,
}

impl<T> NumericBinaryOperation<T> {
    pub fn new(
        op: NumericBinaryOp,
        left: impl Into<ValueProvider<T>>,
        right: impl Into<ValueProvider<T>>,
    ) -> Self {
        Self {
            op,
            left: left.into(),
            right: right.into(),
        }
    }
}

impl<T> DerivedValue<T> for NumericBinaryOperation<T>
where
    T: Clone + Num + PartialOrd + Send + Sync + 'static,
{
    fn value(&self, context: Option<&EvalContext>) -> T {
        let left = self.left.get(context);
        let right = self.right.get(context);
        match self.op {
            NumericBinaryOp::Add => left + right,
            NumericBinaryOp::Subtract => left - right,
            NumericBinaryOp::Multiply => left * right,
            NumericBinaryOp::Divide => left / right,
            NumericBinaryOp::Remainder => left % right,
            NumericBinaryOp::Min => {
                if right < left {
                    right
                } else {
                    left
                }
            }
            NumericBinaryOp::Max => {
                if right > left {
                    right
                } else {
                    left
                }
            }
        }
    }

    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<T>>> {
        let left = self.left.deep_clone();
        let right = self.right.deep_clone();
        if left.ptr_eq(&self.left) && right.ptr_eq(&self.right) {
            None
        } else {
            Some(Arc::new(Self {
                op: self.op,
                left,
                right,
            }))
        }
    }
}

/// Unary arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericUnaryOp {
    Negate,
    Abs,
}

/// Applies a [`NumericUnaryOp`] to a nested provider
pub struct NumericUnaryOperation<T> {
    op: NumericUnaryOp,
    value: ValueProvider<T>,
}

impl<T> NumericUnaryOperation<T> {
    pub fn new(op: NumericUnaryOp, value: impl Into<ValueProvider<T>>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }
}

impl<T> DerivedValue<T> for NumericUnaryOperation<T>
where
    T: Clone + Signed + Send + Sync + 'static,
{
    fn value(&self, context: Option<&EvalContext>) -> T {
        let value = self.value.get(context);
        match self.op {
            NumericUnaryOp::Negate => -value,
            NumericUnaryOp::Abs => value.abs(),
        }
    }

    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<T>>> {
        let value = self.value.deep_clone();
        if value.ptr_eq(&self.value) {
            None
        } else {
            Some(Arc::new(Self {
                op: self.op,
                value,
            }))
        }
    }
}

/// Clamps a nested provider's value into `[min, max]`
pub struct NumericClampOperation<T> {
    value: ValueProvider<T>,
    min: ValueProvider<T>,
    max: ValueProvider<T>,
}

impl<T> NumericClampOperation<T> {
    pub fn new(
        value: impl Into<ValueProvider<T>>,
        min: impl Into<ValueProvider<T>>,
        max: impl Into<ValueProvider<T>>,
    ) -> Self {
        Self {
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl<T> DerivedValue<T> for NumericClampOperation<T>
where
    T: Clone + PartialOrd + Send + Sync + 'static,
{
    fn value(&self, context: Option<&EvalContext>) -> T {
        let value = self.value.get(context);
        let min = self.min.get(context);
        let max = self.max.get(context);
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<T>>> {
        let value = self.value.deep_clone();
        let min = self.min.deep_clone();
        let max = self.max.deep_clone();
        if value.ptr_eq(&self.value) && min.ptr_eq(&self.min) && max.ptr_eq(&self.max) {
            None
        } else {
            Some(Arc::new(Self { value, min, max }))
        }
    }
}

/// Converts a nested provider's value into another type via [`From`]
pub struct ConvertOperation<S, T> {
    value: ValueProvider<S>,
    _target: PhantomData<fn() -> T>,
}

impl<S, T> ConvertOperation<S, T> {
    pub fn new(value: impl Into<ValueProvider<S>>) -> Self {
        Self {
            value: value.into(),
            _target: PhantomData,
        }
    }
}

impl<S, T> DerivedValue<T> for ConvertOperation<S, T>
where
    S: Clone + Send + Sync + 'static,
    T: From<S> + 'static,
{
    fn value(&self, context: Option<&EvalContext>) -> T {
        T::from(self.value.get(context))
    }

    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<T>>> {
        let value = self.value.deep_clone();
        if value.ptr_eq(&self.value) {
            None
        } else {
            Some(Arc::new(Self {
                value,
                _target: PhantomData,
            }))
        }
    }
}
