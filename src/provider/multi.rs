//! Multi-value provider

use crate::provider::{DerivedValue, EvalContext, ValueProvider};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use smallvec::SmallVec;
use std::sync::Arc;

type Elements<T> = SmallVec<[ValueProvider<T>; 4]>;

/// An ordered sequence of element providers
///
/// [`iter`](Self::iter) is the lazy, read-once path: it produces one value
/// per element provider as it is advanced, evaluating every element against
/// the same context and never materializing the sequence. Used as a
/// [`DerivedValue<Vec<T>>`], the provider instead materializes the whole
/// sequence, giving the stable read-many semantics a collection-valued
/// operand needs.
pub struct MultiValueProvider<T> {
    values: Elements<T>,
}

impl<T> MultiValueProvider<T> {
    pub fn new(values: impl IntoIterator<Item = ValueProvider<T>>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Convenience constructor wrapping plain values as constants
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(values.into_iter().map(ValueProvider::constant))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The element providers, in order
    pub fn providers(&self) -> &[ValueProvider<T>] {
        &self.values
    }

    /// Lazily yield one value per element provider against `context`
    pub fn iter<'a>(&'a self, context: Option<&'a EvalContext>) -> impl Iterator<Item = T> + 'a
    where
        T: Clone,
    {
        self.values.iter().map(move |provider| provider.get(context))
    }

    /// Clone every element through its own sharing contract
    pub fn deep_clone(&self) -> Self {
        Self {
            values: self.values.iter().map(ValueProvider::deep_clone).collect(),
        }
    }
}

impl<T> DerivedValue<Vec<T>> for MultiValueProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn value(&self, context: Option<&EvalContext>) -> Vec<T> {
        self.iter(context).collect()
    }

    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<Vec<T>>>> {
        let clones: Elements<T> = self.values.iter().map(ValueProvider::deep_clone).collect();
        // allocate a new composite only if some element came back fresh
        if clones
            .iter()
            .zip(&self.values)
            .all(|(clone, original)| clone.ptr_eq(original))
        {
            None
        } else {
            Some(Arc::new(Self { values: clones }))
        }
    }
}

impl<T> Clone for MultiValueProvider<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MultiValueProvider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for MultiValueProvider<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Serialize> Serialize for MultiValueProvider<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MultiValueProvider<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<ValueProvider<T>>::deserialize(deserializer)?;
        Ok(Self::new(values))
    }
}
