//! String comparison operators

use crate::error::{ConditionError, Result};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators over optional strings
///
/// Codes are allocated in complement pairs like [`NumericOperator`]; only
/// the even codes carry evaluation table entries. Default equality is
/// case-insensitive; `EqualsExact` compares case-sensitively. Length
/// operators compare character counts, an absent string counting as
/// length zero.
///
/// Containment, prefix and suffix checks treat an absent pattern as
/// trivially matched: an absent subject matches only an absent or empty
/// pattern, while a present subject matches any absent pattern.
///
/// [`NumericOperator`]: crate::operator::NumericOperator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum StringOperator {
    Equals = 0,
    NotEquals = 1,
    EqualsExact = 2,
    NotEqualsExact = 3,
    Contains = 4,
    NotContains = 5,
    StartsWith = 6,
    NotStartsWith = 7,
    EndsWith = 8,
    NotEndsWith = 9,
    EqualInLength = 10,
    NotEqualInLength = 11,
    ShorterThan = 12,
    NotShorterThan = 13,
    LongerThan = 14,
    NotLongerThan = 15,
}

impl StringOperator {
    /// Every operator, in code order
    pub const ALL: [StringOperator; 16] = [
        StringOperator::Equals,
        StringOperator::NotEquals,
        StringOperator::EqualsExact,
        StringOperator::NotEqualsExact,
        StringOperator::Contains,
        StringOperator::NotContains,
        StringOperator::StartsWith,
        StringOperator::NotStartsWith,
        StringOperator::EndsWith,
        StringOperator::NotEndsWith,
        StringOperator::EqualInLength,
        StringOperator::NotEqualInLength,
        StringOperator::ShorterThan,
        StringOperator::NotShorterThan,
        StringOperator::LongerThan,
        StringOperator::NotLongerThan,
    ];

    /// Numeric code backing this operator
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Operator for a raw code, if the code is in range
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < Self::ALL.len() {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
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

    /// Evaluate `value <operator> comparison` over optional strings
    pub fn evaluate(self, value: Option<&str>, comparison: Option<&str>) -> Result<bool> {
        let negated = self.code() & 1 == 1;
        let result = match self.code() & !1 {
            0 => eq_ignore_case(value, comparison),
            2 => value == comparison,
            4 => matches_pattern(value, comparison, |v, c| {
                v.to_lowercase().contains(&c.to_lowercase())
            }),
            6 => matches_pattern(value, comparison, |v, c| {
                v.to_lowercase().starts_with(&c.to_lowercase())
            }),
            8 => matches_pattern(value, comparison, |v, c| {
                v.to_lowercase().ends_with(&c.to_lowercase())
            }),
            10 => char_len(value) == char_len(comparison),
            12 => char_len(value) < char_len(comparison),
            14 => char_len(value) > char_len(comparison),
            code => {
                return Err(ConditionError::UnsupportedOperator(format!(
                    "no evaluation entry for string operator code {}",
                    code
                )))
            }
        };
        Ok(result ^ negated)
    }

    /// Stable textual name, matching the serialized form
    pub const fn name(self) -> &'static str {
        match self {
            StringOperator::Equals => "equals",
            StringOperator::NotEquals => "not_equals",
            StringOperator::EqualsExact => "equals_exact",
            StringOperator::NotEqualsExact => "not_equals_exact",
            StringOperator::Contains => "contains",
            StringOperator::NotContains => "not_contains",
            StringOperator::StartsWith => "starts_with",
            StringOperator::NotStartsWith => "not_starts_with",
            StringOperator::EndsWith => "ends_with",
            StringOperator::NotEndsWith => "not_ends_with",
            StringOperator::EqualInLength => "equal_in_length",
            StringOperator::NotEqualInLength => "not_equal_in_length",
            StringOperator::ShorterThan => "shorter_than",
            StringOperator::NotShorterThan => "not_shorter_than",
            StringOperator::LongerThan => "longer_than",
            StringOperator::NotLongerThan => "not_longer_than",
        }
    }
}

/// Case-insensitive equality; two absent strings are equal
fn eq_ignore_case(value: Option<&str>, comparison: Option<&str>) -> bool {
    match (value, comparison) {
        (None, None) => true,
        (Some(v), Some(c)) => v.to_lowercase() == c.to_lowercase(),
        _ => false,
    }
}

/// Absent patterns match trivially; an absent subject only matches an
/// absent or empty pattern
fn matches_pattern<F>(value: Option<&str>, comparison: Option<&str>, check: F) -> bool
where
    F: Fn(&str, &str) -> bool,
{
    match comparison {
        None => true,
        Some(c) => match value {
            None => c.is_empty(),
            Some(v) => check(v, c),
        },
    }
}

/// Character count of an optional string, absent counting as zero
fn char_len(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}

/// Name lookup table, built once
static NAMES: Lazy<AHashMap<&'static str, StringOperator>> = Lazy::new(|| {
    StringOperator::ALL
        .iter()
        .map(|operator| (operator.name(), *operator))
        .collect()
});

impl fmt::Display for StringOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StringOperator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self> {
        NAMES.get(s).copied().ok_or_else(|| {
            ConditionError::InvalidArgument(format!("unknown string operator: {}", s))
        })
    }
}
