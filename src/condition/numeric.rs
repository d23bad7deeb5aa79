//! Numeric leaf conditions

use crate::error::Result;
use crate::operator::{CollectionOperator, NumericOperator};
use crate::provider::{EvalContext, MultiValueProvider, ValueProvider};
use crate::tree::Condition;
use serde::{Deserialize, Serialize};

/// Compares the subject against a provided value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericCondition<T> {
    operator: NumericOperator,
    value: ValueProvider<T>,
}

impl<T> NumericCondition<T> {
    pub fn new(operator: NumericOperator, value: impl Into<ValueProvider<T>>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }

    pub fn operator(&self) -> NumericOperator {
        self.operator
    }

    pub fn value(&self) -> &ValueProvider<T> {
        &self.value
    }
}

impl<T> Condition for NumericCondition<T>
where
    T: Clone + PartialOrd + Send + Sync + 'static,
{
    type Subject = T;

    fn evaluate(&self, value: &T, context: Option<&EvalContext>) -> Result<bool> {
        self.operator.evaluate(value, &self.value.get(context))
    }

    fn invert(&self) -> Result<Self> {
        Ok(Self {
            operator: self.operator.invert(),
            value: self.value.deep_clone(),
        })
    }

    fn deep_clone(&self) -> Self {
        Self {
            operator: self.operator,
            value: self.value.deep_clone(),
        }
    }
}

/// Tests the subject against a `[min, max]` range
///
/// With `inclusive` set the bounds belong to the range; cleared, the
/// condition holds only strictly outside the bounds. Range conditions do
/// not support inversion: inverting a tree containing one surfaces the
/// engine's fallback error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRangeCondition<T> {
    min: ValueProvider<T>,
    max: ValueProvider<T>,
    inclusive: bool,
}

impl<T> NumericRangeCondition<T> {
    pub fn new(
        min: impl Into<ValueProvider<T>>,
        max: impl Into<ValueProvider<T>>,
        inclusive: bool,
    ) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            inclusive,
        }
    }

    /// Range including its bounds
    pub fn inclusive(min: impl Into<ValueProvider<T>>, max: impl Into<ValueProvider<T>>) -> Self {
        Self::new(min, max, true)
    }

    pub fn min(&self) -> &ValueProvider<T> {
        &self.min
    }

    pub fn max(&self) -> &ValueProvider<T> {
        &self.max
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

impl<T> Condition for NumericRangeCondition<T>
where
    T: Clone + PartialOrd + Send + Sync + 'static,
{
    type Subject = T;

    fn evaluate(&self, value: &T, context: Option<&EvalContext>) -> Result<bool> {
        let min = self.min.get(context);
        let max = self.max.get(context);
        Ok((*value < min || *value > max) ^ self.inclusive)
    }

    fn deep_clone(&self) -> Self {
        Self {
            min: self.min.deep_clone(),
            max: self.max.deep_clone(),
            inclusive: self.inclusive,
        }
    }
}

/// Quantifies a scalar comparison over a sequence of provided values
///
/// The comparison runs the subject against each value the multi-value
/// provider yields, under the collection operator's quantification; the
/// sequence is consumed lazily, so a deciding result stops element
/// evaluation early.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericQuantifiedCondition<T> {
    operator: NumericOperator,
    quantifier: CollectionOperator,
    values: MultiValueProvider<T>,
}

impl<T> NumericQuantifiedCondition<T> {
    pub fn new(
        operator: NumericOperator,
        quantifier: CollectionOperator,
        values: MultiValueProvider<T>,
    ) -> Self {
        Self {
            operator,
            quantifier,
            values,
        }
    }

    pub fn operator(&self) -> NumericOperator {
        self.operator
    }

    pub fn quantifier(&self) -> CollectionOperator {
        self.quantifier
    }

    pub fn values(&self) -> &MultiValueProvider<T> {
        &self.values
    }
}

impl<T> Condition for NumericQuantifiedCondition<T>
where
    T: Clone + PartialOrd + Send + Sync + 'static,
{
    type Subject = T;

    fn evaluate(&self, value: &T, context: Option<&EvalContext>) -> Result<bool> {
        self.quantifier.evaluate(self.values.iter(context), |comparison| {
            self.operator.evaluate(value, &comparison)
        })
    }

    fn invert(&self) -> Result<Self> {
        Ok(Self {
            operator: self.operator,
            quantifier: self.quantifier.invert(),
            values: self.values.deep_clone(),
        })
    }

    fn deep_clone(&self) -> Self {
        Self {
            operator: self.operator,
            quantifier: self.quantifier,
            values: self.values.deep_clone(),
        }
    }
}
