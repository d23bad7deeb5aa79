//! String operation providers

use crate::provider::{DerivedValue, EvalContext, ValueProvider};
use std::str::FromStr;
use std::sync::Arc;

/// Yields a nested string provider's value with surrounding whitespace
/// removed
pub struct TrimOperation {
    value: ValueProvider<String>,
}

impl TrimOperation {
    pub fn new(value: impl Into<ValueProvider<String>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl DerivedValue<String> for TrimOperation {
    fn value(&self, context: Option<&EvalContext>) -> String {
        self.value.get(context).trim().to_string()
    }

    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<String>>> {
        let value = self.value.deep_clone();
        if value.ptr_eq(&self.value) {
            None
        } else {
            Some(Arc::new(Self { value }))
        }
    }
}

/// Parses a nested string provider's value, falling back to a default
/// provider when parsing fails
pub struct ParseOrDefaultOperation<T> {
    value: ValueProvider<String>,
    default: ValueProvider<T>,
}

impl<T> ParseOrDefaultOperation<T> {
    pub fn new(
        value: impl Into<ValueProvider<String>>,
        default: impl Into<ValueProvider<T>>,
    ) -> Self {
        Self {
            value: value.into(),
            default: default.into(),
        }
    }
}

impl<T> DerivedValue<T> for ParseOrDefaultOperation<T>
where
    T: Clone + FromStr + Send + Sync + 'static,
{
    fn value(&self, context: Option<&EvalContext>) -> T {
        self.value
            .get(context)
            .trim()
            .parse()
            .unwrap_or_else(|_| self.default.get(context))
    }

    fn deep_clone(&self) -> Option<Arc<dyn DerivedValue<T>>> {
        let value = self.value.deep_clone();
        let default = self.default.deep_clone();
        if value.ptr_eq(&self.value) && default.ptr_eq(&self.default) {
            None
        } else {
            Some(Arc::new(Self { value, default }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        let trimmed = ValueProvider::derived(TrimOperation::new("  padded  ".to_string()));
        assert_eq!(trimmed.get(None), "padded");
    }

    #[test]
    fn test_trim_composes() {
        let inner = ValueProvider::from_fn(|_| " nested ".to_string());
        let trimmed = ValueProvider::derived(TrimOperation::new(inner));
        assert_eq!(trimmed.get(None), "nested");
    }

    #[test]
    fn test_parse_or_default_parses() {
        let parsed: ValueProvider<i64> =
            ValueProvider::derived(ParseOrDefaultOperation::new("42".to_string(), -1i64));
        assert_eq!(parsed.get(None), 42);
    }

    #[test]
    fn test_parse_or_default_falls_back() {
        let parsed: ValueProvider<i64> =
            ValueProvider::derived(ParseOrDefaultOperation::new("forty-two".to_string(), -1i64));
        assert_eq!(parsed.get(None), -1);
    }

    #[test]
    fn test_parse_or_default_tolerates_padding() {
        let parsed: ValueProvider<i64> =
            ValueProvider::derived(ParseOrDefaultOperation::new(" 7 ".to_string(), -1i64));
        assert_eq!(parsed.get(None), 7);
    }
}
