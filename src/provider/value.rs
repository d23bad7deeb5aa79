//! Value provider indirection
//!
//! Every operand of a condition is a [`ValueProvider`]: either a fixed
//! constant or a computation over the opaque evaluation context. Providers
//! are immutable value objects; the [`deep_clone`](ValueProvider::deep_clone)
//! contract shares stateless providers and only reallocates when a nested
//! provider reports per-evaluation state.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque, caller-supplied evaluation context
///
/// Derived providers downcast it to whatever concrete type the host
/// application threads through evaluation.
pub type EvalContext = dyn Any;

/// Extension trait for computed providers
///
/// Implementations must be deterministic for a fixed context.
pub trait DerivedValue<T>: Send + Sync {
    /// Produce the value for `context`
    fn value(&self, context: Option<&EvalContext>) -> T;

    /// Return a fresh instance when this provider (or anything nested in
    /// it) carries per-evaluation state, or `None` to share `self`.
    ///
    /// Composite providers should clone their nested providers and only
    /// allocate when at least one nested clone produced a new instance.
    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<T>>> {
        None
    }
}

/// A typed source of values: a fixed constant or a computation over the
/// evaluation context
pub struct ValueProvider<T> {
    repr: Repr<T>,
}

enum Repr<T> {
    Constant(Arc<T>),
    Derived(Arc<dyn DerivedValue<T>>),
}

impl<T> ValueProvider<T> {
    /// Provider that always yields `value`, ignoring the context
    pub fn constant(value: T) -> Self {
        Self {
            repr: Repr::Constant(Arc::new(value)),
        }
    }

    /// Provider backed by a computed implementation
    pub fn derived(provider: impl DerivedValue<T> + 'static) -> Self {
        Self {
            repr: Repr::Derived(Arc::new(provider)),
        }
    }

    /// Provider backed by an already-shared computed implementation
    pub fn from_arc(provider: Arc<dyn DerivedValue<T>>) -> Self {
        Self {
            repr: Repr::Derived(provider),
        }
    }

    /// Provider computing its value from the evaluation context
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&EvalContext>) -> T + Send + Sync + 'static,
        T: 'static,
    {
        struct FnProvider<F>(F);

        impl<T, F> DerivedValue<T> for FnProvider<F>
        where
            F: Fn(Option<&EvalContext>) -> T + Send + Sync,
        {
            fn value(&self, context: Option<&EvalContext>) -> T {
                (self.0)(context)
            }
        }

        Self::derived(FnProvider(f))
    }

    /// Whether this provider is a constant
    pub fn is_constant(&self) -> bool {
        matches!(self.repr, Repr::Constant(_))
    }

    /// Yield the value for `context`
    pub fn get(&self, context: Option<&EvalContext>) -> T
    where
        T: Clone,
    {
        match &self.repr {
            Repr::Constant(value) => T::clone(value),
            Repr::Derived(provider) => provider.value(context),
        }
    }

    /// Clone honoring the sharing contract
    ///
    /// Constants and stateless derived providers come back as the same
    /// shared instance; a derived provider that reports state is replaced
    /// by the fresh instance it returns.
    pub fn deep_clone(&self) -> Self {
        match &self.repr {
            Repr::Constant(value) => Self {
                repr: Repr::Constant(Arc::clone(value)),
            },
            Repr::Derived(provider) => match provider.deep_clone() {
                Some(fresh) => Self {
                    repr: Repr::Derived(fresh),
                },
                None => Self {
                    repr: Repr::Derived(Arc::clone(provider)),
                },
            },
        }
    }

    /// Whether two providers are backed by the same instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Constant(a), Repr::Constant(b)) => Arc::ptr_eq(a, b),
            (Repr::Derived(a), Repr::Derived(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Alias-preserving clone; use [`ValueProvider::deep_clone`] when joining
/// a provider into another tree
impl<T> Clone for ValueProvider<T> {
    fn clone(&self) -> Self {
        match &self.repr {
            Repr::Constant(value) => Self {
                repr: Repr::Constant(Arc::clone(value)),
            },
            Repr::Derived(provider) => Self {
                repr: Repr::Derived(Arc::clone(provider)),
            },
        }
    }
}

impl<T> From<T> for ValueProvider<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Repr::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Constants compare by value, derived providers by instance identity
impl<T: PartialEq> PartialEq for ValueProvider<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Constant(a), Repr::Constant(b)) => a == b,
            (Repr::Derived(a), Repr::Derived(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Constant providers serialize to their bare value; derived providers
/// belong to the host serialization layer and refuse to serialize here
impl<T: Serialize> Serialize for ValueProvider<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.repr {
            Repr::Constant(value) => value.serialize(serializer),
            Repr::Derived(_) => Err(S::Error::custom(
                "derived value providers are reconstructed by the host serialization layer",
            )),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValueProvider<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::constant)
    }
}
