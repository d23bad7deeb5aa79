//! String leaf conditions

use crate::error::Result;
use crate::operator::{CollectionOperator, StringOperator};
use crate::provider::{EvalContext, MultiValueProvider, ValueProvider};
use crate::tree::Condition;
use serde::{Deserialize, Serialize};

/// Compares an optional string subject against an optional pattern
///
/// The subject type is `Option<String>`: absent subjects are first-class
/// and follow the operator table's absent-operand semantics. An absent
/// comparison provider stands for an absent pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringCondition {
    operator: StringOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<ValueProvider<String>>,
}

impl StringCondition {
    pub fn new(operator: StringOperator, value: impl Into<ValueProvider<String>>) -> Self {
        Self {
            operator,
            value: Some(value.into()),
        }
    }

    /// Condition comparing against an absent pattern
    pub fn absent(operator: StringOperator) -> Self {
        Self {
            operator,
            value: None,
        }
    }

    pub fn operator(&self) -> StringOperator {
        self.operator
    }

    pub fn value(&self) -> Option<&ValueProvider<String>> {
        self.value.as_ref()
    }
}

impl Condition for StringCondition {
    type Subject = Option<String>;

    fn evaluate(&self, value: &Option<String>, context: Option<&EvalContext>) -> Result<bool> {
        let comparison = self.value.as_ref().map(|provider| provider.get(context));
        self.operator.evaluate(value.as_deref(), comparison.as_deref())
    }

    fn invert(&self) -> Result<Self> {
        Ok(Self {
            operator: self.operator.invert(),
            value: self.value.as_ref().map(ValueProvider::deep_clone),
        })
    }

    fn deep_clone(&self) -> Self {
        Self {
            operator: self.operator,
            value: self.value.as_ref().map(ValueProvider::deep_clone),
        }
    }
}

/// Quantifies a string comparison over a sequence of provided patterns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringQuantifiedCondition {
    operator: StringOperator,
    quantifier: CollectionOperator,
    values: MultiValueProvider<String>,
}

impl StringQuantifiedCondition {
    pub fn new(
        operator: StringOperator,
        quantifier: CollectionOperator,
        values: MultiValueProvider<String>,
    ) -> Self {
        Self {
            operator,
            quantifier,
            values,
        }
    }

    /// Convenience constructor over plain pattern strings
    pub fn from_patterns(
        operator: StringOperator,
        quantifier: CollectionOperator,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            operator,
            quantifier,
            MultiValueProvider::from_values(patterns.into_iter().map(Into::into)),
        )
    }

    pub fn operator(&self) -> StringOperator {
        self.operator
    }

    pub fn quantifier(&self) -> CollectionOperator {
        self.quantifier
    }

    pub fn values(&self) -> &MultiValueProvider<String> {
        &self.values
    }
}

impl Condition for StringQuantifiedCondition {
    type Subject = Option<String>;

    fn evaluate(&self, value: &Option<String>, context: Option<&EvalContext>) -> Result<bool> {
        self.quantifier.evaluate(self.values.iter(context), |pattern| {
            self.operator.evaluate(value.as_deref(), Some(pattern.as_str()))
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
