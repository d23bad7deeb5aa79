//! Condition tree structure

use crate::error::{ConditionError, Result};
use crate::operator::Joiner;
use crate::tree::Condition;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::Serialize;

/// A condition tree: a single leaf, or subtrees joined with AND/OR
///
/// The serialized form distinguishes the two shapes by the presence of the
/// `joiner`/`conditions` pair; a leaf serializes to whatever its own type
/// serializes to.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ConditionTree<C> {
    /// Internal node joining one or more subtrees
    Joined(Joined<C>),
    /// Atomic condition evaluated by the leaf itself
    Leaf(C),
}

/// A joiner with its non-empty, ordered children
///
/// A joiner always travels with children and children always travel with a
/// joiner; the pairing is enforced at construction and deserialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Joined<C> {
    joiner: Joiner,
    conditions: Vec<ConditionTree<C>>,
}

impl<C> Joined<C> {
    /// Build an internal node from a joiner and its children
    pub fn new(joiner: Joiner, conditions: Vec<ConditionTree<C>>) -> Result<Self> {
        if conditions.is_empty() {
            return Err(ConditionError::InvalidArgument(
                "a joined condition requires at least one child".to_string(),
            ));
        }
        Ok(Self { joiner, conditions })
    }

    pub fn joiner(&self) -> Joiner {
        self.joiner
    }

    /// The children, in evaluation order
    pub fn conditions(&self) -> &[ConditionTree<C>] {
        &self.conditions
    }
}

#[derive(serde::Deserialize)]
struct RawJoined<C> {
    joiner: Joiner,
    conditions: Vec<ConditionTree<C>>,
}

impl<'de, C: serde::Deserialize<'de>> Deserialize<'de> for Joined<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawJoined::deserialize(deserializer)?;
        Joined::new(raw.joiner, raw.conditions).map_err(D::Error::custom)
    }
}

impl<C> ConditionTree<C> {
    /// Wrap a leaf condition as a tree
    pub fn leaf(condition: C) -> Self {
        ConditionTree::Leaf(condition)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ConditionTree::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&C> {
        match self {
            ConditionTree::Leaf(condition) => Some(condition),
            ConditionTree::Joined(_) => None,
        }
    }

    pub fn as_joined(&self) -> Option<&Joined<C>> {
        match self {
            ConditionTree::Joined(joined) => Some(joined),
            ConditionTree::Leaf(_) => None,
        }
    }
}

impl<C: Condition> ConditionTree<C> {
    /// New tree evaluating `self AND other`
    pub fn and(&self, other: &Self) -> Self {
        self.join(Joiner::And, other)
    }

    /// New tree evaluating `self OR other`
    pub fn or(&self, other: &Self) -> Self {
        self.join(Joiner::Or, other)
    }

    fn join(&self, joiner: Joiner, other: &Self) -> Self {
        let mut conditions = Vec::new();
        self.splice_into(joiner, &mut conditions);
        other.splice_into(joiner, &mut conditions);
        ConditionTree::Joined(Joined { joiner, conditions })
    }

    /// A same-joiner operand contributes its children directly instead of
    /// nesting a redundant wrapper; every child lands in the new node
    /// through its own clone contract.
    fn splice_into(&self, joiner: Joiner, out: &mut Vec<Self>) {
        match self {
            ConditionTree::Joined(joined) if joined.joiner == joiner => {
                out.extend(joined.conditions.iter().map(Self::deep_clone));
            }
            _ => out.push(self.deep_clone()),
        }
    }

    /// New tree implementing logical negation
    ///
    /// Joined nodes invert structurally per De Morgan's law: the joiner
    /// flips and every child is inverted. Leaves must supply their own
    /// inversion; a leaf that does not surfaces its typed error.
    pub fn invert(&self) -> Result<Self> {
        match self {
            ConditionTree::Leaf(condition) => Ok(ConditionTree::Leaf(condition.invert()?)),
            ConditionTree::Joined(joined) => {
                let mut conditions = Vec::with_capacity(joined.conditions.len());
                for child in &joined.conditions {
                    conditions.push(child.invert()?);
                }
                Ok(ConditionTree::Joined(Joined {
                    joiner: joined.joiner.invert(),
                    conditions,
                }))
            }
        }
    }

    /// Rebuild an equivalent tree through each leaf's clone contract
    pub fn deep_clone(&self) -> Self {
        match self {
            ConditionTree::Leaf(condition) => ConditionTree::Leaf(condition.deep_clone()),
            ConditionTree::Joined(joined) => ConditionTree::Joined(Joined {
                joiner: joined.joiner,
                conditions: joined.conditions.iter().map(Self::deep_clone).collect(),
            }),
        }
    }
}

impl<C> From<C> for ConditionTree<C> {
    fn from(condition: C) -> Self {
        ConditionTree::Leaf(condition)
    }
}
