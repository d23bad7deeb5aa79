//! Collection quantifier operators

use crate::error::{ConditionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quantifiers over a sequence of predicate results
///
/// `Any`/`None` and `All`/`NotAll` form complement pairs on adjacent
/// codes; only `Any` and `All` are evaluated directly, the odd codes
/// evaluate their pair and negate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CollectionOperator {
    Any = 0,
    None = 1,
    All = 2,
    NotAll = 3,
}

impl CollectionOperator {
    /// Every operator, in code order
    pub const ALL: [CollectionOperator; 4] = [
        CollectionOperator::Any,
        CollectionOperator::None,
        CollectionOperator::All,
        CollectionOperator::NotAll,
    ];

    /// Numeric code backing this operator
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Operator for a raw code, if the code is in range
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => CollectionOperator::Any,
            1 => CollectionOperator::None,
            2 => CollectionOperator::All,
            3 => CollectionOperator::NotAll,
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

    /// Quantify `predicate` over `collection`
    ///
    /// `Any` stops at the first true result and `All` at the first false
    /// one; the odd codes inherit the same short-circuiting through their
    /// canonical pair. Predicate errors propagate and stop iteration.
    pub fn evaluate<T, I, P>(self, collection: I, mut predicate: P) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
        P: FnMut(T) -> Result<bool>,
    {
        let negated = self.code() & 1 == 1;
        let effective = if negated { self.invert() } else { self };
        let result = match effective {
            CollectionOperator::Any => {
                let mut found = false;
                for item in collection {
                    if predicate(item)? {
                        found = true;
                        break;
                    }
                }
                found
            }
            CollectionOperator::All => {
                let mut holds = true;
                for item in collection {
                    if !predicate(item)? {
                        holds = false;
                        break;
                    }
                }
                holds
            }
            other => {
                return Err(ConditionError::UnsupportedOperator(format!(
                    "no evaluation entry for collection operator {}",
                    other
                )))
            }
        };
        Ok(result ^ negated)
    }

    /// Stable textual name, matching the serialized form
    pub const fn name(self) -> &'static str {
        match self {
            CollectionOperator::Any => "any",
            CollectionOperator::None => "none",
            CollectionOperator::All => "all",
            CollectionOperator::NotAll => "not_all",
        }
    }
}

impl fmt::Display for CollectionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CollectionOperator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "any" => Ok(CollectionOperator::Any),
            "none" => Ok(CollectionOperator::None),
            "all" => Ok(CollectionOperator::All),
            "not_all" => Ok(CollectionOperator::NotAll),
            _ => Err(ConditionError::InvalidArgument(format!(
                "unknown collection operator: {}",
                s
            ))),
        }
    }
}
