//! Numeric comparison operators

use crate::error::{ConditionError, Result};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators over ordered values
///
/// Codes are allocated in complement pairs: each even code is a canonical
/// comparison and the following odd code is its logical negation, so
/// inversion is a flip of the low bit. The evaluation table only implements
/// the even codes; odd codes evaluate their pair and negate the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NumericOperator {
    Equals = 0,
    NotEquals = 1,
    LessThan = 2,
    GreaterThanOrEqual = 3,
    GreaterThan = 4,
    LessThanOrEqual = 5,
}

impl NumericOperator {
    /// Every operator, in code order
    pub const ALL: [NumericOperator; 6] = [
        NumericOperator::Equals,
        NumericOperator::NotEquals,
        NumericOperator::LessThan,
        NumericOperator::GreaterThanOrEqual,
        NumericOperator::GreaterThan,
        NumericOperator::LessThanOrEqual,
    ];

    /// Numeric code backing this operator
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Operator for a raw code, if the code is in range
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => NumericOperator::Equals,
            1 => NumericOperator::NotEquals,
            2 => NumericOperator::LessThan,
            3 => NumericOperator::GreaterThanOrEqual,
            4 => NumericOperator::GreaterThan,
            5 => NumericOperator::LessThanOrEqual,
            _ => return None,
        })
    }

    /// Operator evaluating to the logical complement on every input
    #[inline]
    pub const fn invert(self) -> Self {
        match Self::from_code(self.code() ^ 1) {
            Some(operator) => operator,
            // codes are allocated in complete complement pairs
            None => unreachable!(),
        }
    }

    /// Evaluate `value <operator> comparison`
    ///
    /// `PartialOrd` gives value-domain semantics for each numeric kind:
    /// integers compare exactly, floats follow IEEE (comparisons against
    /// NaN are false on every canonical code).
    pub fn evaluate<T: PartialOrd>(self, value: &T, comparison: &T) -> Result<bool> {
        let negated = self.code() & 1 == 1;
        let result = match self.code() & !1 {
            0 => value == comparison,
            2 => value < comparison,
            4 => value > comparison,
            code => {
                return Err(ConditionError::UnsupportedOperator(format!(
                    "no evaluation entry for numeric operator code {}",
                    code
                )))
            }
        };
        Ok(result ^ negated)
    }

    /// Stable textual name, matching the serialized form
    pub const fn name(self) -> &'static str {
        match self {
            NumericOperator::Equals => "equals",
            NumericOperator::NotEquals => "not_equals",
            NumericOperator::LessThan => "less_than",
            NumericOperator::GreaterThanOrEqual => "greater_than_or_equal",
            NumericOperator::GreaterThan => "greater_than",
            NumericOperator::LessThanOrEqual => "less_than_or_equal",
        }
    }
}

/// Name lookup table, built once
static NAMES: Lazy<AHashMap<&'static str, NumericOperator>> = Lazy::new(|| {
    NumericOperator::ALL
        .iter()
        .map(|operator| (operator.name(), *operator))
        .collect()
});

impl fmt::Display for NumericOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericOperator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self> {
        NAMES.get(s).copied().ok_or_else(|| {
            ConditionError::InvalidArgument(format!("unknown numeric operator: {}", s))
        })
    }
}
