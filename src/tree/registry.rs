//! Runtime leaf-kind registry for polymorphic reconstruction
//!
//! A serialized tree distinguishes joined nodes from leaves by the
//! presence of the `joiner`/`conditions` pair; a leaf then needs a `kind`
//! discriminator to resolve its concrete type. Closed leaf families are
//! better served by an internally tagged enum resolved at compile time;
//! the registry covers genuinely open-ended extension, where the decoding
//! crate does not know every leaf kind.

use crate::error::{ConditionError, Result};
use crate::operator::Joiner;
use crate::tree::{ConditionTree, Joined};
use ahash::AHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

type DecodeFn<C> = Arc<dyn Fn(&Value) -> Result<C> + Send + Sync>;

/// Resolves serialized leaf conditions by their `kind` discriminator
pub struct LeafRegistry<C> {
    decoders: RwLock<AHashMap<String, DecodeFn<C>>>,
}

impl<C> LeafRegistry<C> {
    pub fn new() -> Self {
        Self {
            decoders: RwLock::new(AHashMap::new()),
        }
    }

    /// Register a decoder for a leaf kind, replacing any previous one
    pub fn register<F>(&self, kind: &str, decoder: F)
    where
        F: Fn(&Value) -> Result<C> + Send + Sync + 'static,
    {
        let mut decoders = self.decoders.write();
        decoders.insert(kind.to_string(), Arc::new(decoder));
    }

    /// Number of registered leaf kinds
    pub fn len(&self) -> usize {
        self.decoders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.read().is_empty()
    }

    /// Decode a leaf payload through the decoder registered for `kind`
    pub fn decode_leaf(&self, kind: &str, payload: &Value) -> Result<C> {
        let decoder = {
            let decoders = self.decoders.read();
            decoders.get(kind).cloned()
        };
        match decoder {
            Some(decode) => decode(payload),
            None => Err(ConditionError::InvalidArgument(format!(
                "unknown leaf condition kind: {}",
                kind
            ))),
        }
    }

    /// Decode a whole condition tree
    ///
    /// Joined nodes are recognized by the `joiner`/`conditions` pair; one
    /// without the other is rejected. Everything else is a leaf and must
    /// carry a `kind` discriminator.
    pub fn decode_tree(&self, value: &Value) -> Result<ConditionTree<C>> {
        let object = value.as_object().ok_or_else(|| {
            ConditionError::InvalidArgument("condition node must be an object".to_string())
        })?;
        match (object.get("joiner"), object.get("conditions")) {
            (Some(joiner), Some(conditions)) => {
                let joiner: Joiner = serde_json::from_value(joiner.clone()).map_err(|e| {
                    ConditionError::InvalidArgument(format!("invalid joiner: {}", e))
                })?;
                let items = conditions.as_array().ok_or_else(|| {
                    ConditionError::InvalidArgument(
                        "conditions must be an array of condition nodes".to_string(),
                    )
                })?;
                let mut children = Vec::with_capacity(items.len());
                for item in items {
                    children.push(self.decode_tree(item)?);
                }
                Ok(ConditionTree::Joined(Joined::new(joiner, children)?))
            }
            (None, None) => {
                let kind = object.get("kind").and_then(Value::as_str).ok_or_else(|| {
                    ConditionError::InvalidArgument(
                        "leaf condition requires a 'kind' discriminator".to_string(),
                    )
                })?;
                Ok(ConditionTree::Leaf(self.decode_leaf(kind, value)?))
            }
            _ => Err(ConditionError::InvalidArgument(
                "joiner and conditions must both be present or both be absent".to_string(),
            )),
        }
    }
}

impl<C> Default for LeafRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
