//! AND/OR joiner for compound conditions

use crate::error::{ConditionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How sibling conditions are combined inside a joined node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joiner {
    And,
    Or,
}

impl Joiner {
    /// The complementary joiner, per De Morgan's law
    #[inline]
    pub const fn invert(self) -> Self {
        match self {
            Joiner::And => Joiner::Or,
            Joiner::Or => Joiner::And,
        }
    }

    /// Stable textual name, matching the serialized form
    pub const fn name(self) -> &'static str {
        match self {
            Joiner::And => "and",
            Joiner::Or => "or",
        }
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Joiner {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "and" => Ok(Joiner::And),
            "or" => Ok(Joiner::Or),
            _ => Err(ConditionError::InvalidArgument(format!(
                "unknown joiner: {}",
                s
            ))),
        }
    }
}
