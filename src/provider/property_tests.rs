//! Property tests for value providers

use proptest::prelude::*;

use crate::provider::{
    MultiValueProvider, NumericBinaryOp, NumericBinaryOperation, NumericClampOperation,
    NumericUnaryOp, NumericUnaryOperation, ParseOrDefaultOperation, TrimOperation, ValueProvider,
};

proptest! {
    #[test]
    fn prop_constant_returns_its_value(value in any::<i64>()) {
        let provider = ValueProvider::constant(value);
        prop_assert_eq!(provider.get(None), value);
        prop_assert!(provider.deep_clone().ptr_eq(&provider));
    }

    #[test]
    fn prop_binary_operations_match_native_arithmetic(
        a in -10_000..=10_000i64,
        b in -10_000..=10_000i64,
    ) {
        let apply = |op: NumericBinaryOp| {
            ValueProvider::derived(NumericBinaryOperation::new(op, a, b)).get(None)
        };
        prop_assert_eq!(apply(NumericBinaryOp::Add), a + b);
        prop_assert_eq!(apply(NumericBinaryOp::Subtract), a - b);
        prop_assert_eq!(apply(NumericBinaryOp::Multiply), a * b);
        prop_assert_eq!(apply(NumericBinaryOp::Min), a.min(b));
        prop_assert_eq!(apply(NumericBinaryOp::Max), a.max(b));
        if b != 0 {
            prop_assert_eq!(apply(NumericBinaryOp::Divide), a / b);
            prop_assert_eq!(apply(NumericBinaryOp::Remainder), a % b);
        }
    }

    #[test]
    fn prop_unary_operations_match_native_arithmetic(a in -10_000..=10_000i64) {
        let negate = ValueProvider::derived(NumericUnaryOperation::new(NumericUnaryOp::Negate, a));
        prop_assert_eq!(negate.get(None), -a);
        let abs = ValueProvider::derived(NumericUnaryOperation::new(NumericUnaryOp::Abs, a));
        prop_assert_eq!(abs.get(None), a.abs());
    }

    #[test]
    fn prop_clamp_stays_in_range(
        value in any::<i32>(),
        bounds in (-100..=100i32).prop_flat_map(|min| (Just(min), min..=100i32)),
    ) {
        let (min, max) = bounds;
        let clamped =
            ValueProvider::derived(NumericClampOperation::new(value, min, max)).get(None);
        prop_assert!(clamped >= min && clamped <= max);
        prop_assert_eq!(clamped, value.clamp(min, max));
    }

    #[test]
    fn prop_trim_matches_str_trim(text in "[ a-z]{0,16}") {
        let trimmed = ValueProvider::derived(TrimOperation::new(text.clone())).get(None);
        prop_assert_eq!(trimmed, text.trim());
    }

    #[test]
    fn prop_parse_or_default_never_fails(text in "\\PC{0,8}", default in any::<i64>()) {
        let parsed: i64 = ValueProvider::derived(
            ParseOrDefaultOperation::new(text.clone(), default),
        )
        .get(None);
        match text.trim().parse::<i64>() {
            Ok(value) => prop_assert_eq!(parsed, value),
            Err(_) => prop_assert_eq!(parsed, default),
        }
    }

    #[test]
    fn prop_multi_value_iter_matches_materialized(values in prop::collection::vec(any::<i64>(), 0..=8)) {
        let provider = MultiValueProvider::from_values(values.clone());
        prop_assert_eq!(provider.iter(None).collect::<Vec<_>>(), values.clone());
        let collection: ValueProvider<Vec<i64>> = ValueProvider::derived(provider);
        prop_assert_eq!(collection.get(None), values);
    }

    #[test]
    fn prop_deep_clone_evaluates_identically(values in prop::collection::vec(any::<i64>(), 1..=6)) {
        let provider = MultiValueProvider::from_values(values);
        let clone = provider.deep_clone();
        prop_assert_eq!(
            provider.iter(None).collect::<Vec<_>>(),
            clone.iter(None).collect::<Vec<_>>()
        );
    }
}
