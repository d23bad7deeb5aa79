//! Property tests for operator tables
//!
//! The complement law `evaluate(invert(op), a, b) == !evaluate(op, a, b)`
//! and the involution `invert(invert(op)) == op` must hold for every
//! operator family on arbitrary operands.

use proptest::prelude::*;

use crate::operator::{CollectionOperator, Joiner, NumericOperator, StringOperator};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

fn numeric_operator_strategy() -> impl Strategy<Value = NumericOperator> {
    prop::sample::select(NumericOperator::ALL.to_vec())
}

fn string_operator_strategy() -> impl Strategy<Value = StringOperator> {
    prop::sample::select(StringOperator::ALL.to_vec())
}

fn collection_operator_strategy() -> impl Strategy<Value = CollectionOperator> {
    prop::sample::select(CollectionOperator::ALL.to_vec())
}

fn optional_string_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z]{0,8}".prop_map(Some),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// Property tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_numeric_complement_law(
        operator in numeric_operator_strategy(),
        a in -1000..=1000i64,
        b in -1000..=1000i64,
    ) {
        prop_assert_eq!(
            operator.invert().evaluate(&a, &b).unwrap(),
            !operator.evaluate(&a, &b).unwrap()
        );
    }

    #[test]
    fn prop_numeric_complement_law_floats(
        operator in numeric_operator_strategy(),
        a in -100.0..=100.0f64,
        b in -100.0..=100.0f64,
    ) {
        prop_assert_eq!(
            operator.invert().evaluate(&a, &b).unwrap(),
            !operator.evaluate(&a, &b).unwrap()
        );
    }

    #[test]
    fn prop_numeric_invert_involution(operator in numeric_operator_strategy()) {
        prop_assert_eq!(operator.invert().invert(), operator);
    }

    #[test]
    fn prop_numeric_matches_native_comparison(
        a in -1000..=1000i64,
        b in -1000..=1000i64,
    ) {
        prop_assert_eq!(NumericOperator::Equals.evaluate(&a, &b).unwrap(), a == b);
        prop_assert_eq!(NumericOperator::NotEquals.evaluate(&a, &b).unwrap(), a != b);
        prop_assert_eq!(NumericOperator::LessThan.evaluate(&a, &b).unwrap(), a < b);
        prop_assert_eq!(NumericOperator::GreaterThanOrEqual.evaluate(&a, &b).unwrap(), a >= b);
        prop_assert_eq!(NumericOperator::GreaterThan.evaluate(&a, &b).unwrap(), a > b);
        prop_assert_eq!(NumericOperator::LessThanOrEqual.evaluate(&a, &b).unwrap(), a <= b);
    }

    #[test]
    fn prop_string_complement_law(
        operator in string_operator_strategy(),
        value in optional_string_strategy(),
        comparison in optional_string_strategy(),
    ) {
        prop_assert_eq!(
            operator.invert().evaluate(value.as_deref(), comparison.as_deref()).unwrap(),
            !operator.evaluate(value.as_deref(), comparison.as_deref()).unwrap()
        );
    }

    #[test]
    fn prop_string_invert_involution(operator in string_operator_strategy()) {
        prop_assert_eq!(operator.invert().invert(), operator);
    }

    #[test]
    fn prop_collection_complement_law(
        operator in collection_operator_strategy(),
        values in prop::collection::vec(-50..=50i32, 0..=8),
    ) {
        let is_even = |n: i32| Ok(n % 2 == 0);
        prop_assert_eq!(
            operator.invert().evaluate(values.iter().copied(), is_even).unwrap(),
            !operator.evaluate(values.iter().copied(), is_even).unwrap()
        );
    }

    #[test]
    fn prop_collection_matches_iterator_adapters(
        values in prop::collection::vec(-50..=50i32, 0..=8),
    ) {
        let is_even = |n: &i32| n % 2 == 0;
        let any = values.iter().any(is_even);
        let all = values.iter().all(is_even);
        let check = |op: CollectionOperator| {
            op.evaluate(values.iter().copied(), |n| Ok(n % 2 == 0)).unwrap()
        };
        prop_assert_eq!(check(CollectionOperator::Any), any);
        prop_assert_eq!(check(CollectionOperator::None), !any);
        prop_assert_eq!(check(CollectionOperator::All), all);
        prop_assert_eq!(check(CollectionOperator::NotAll), !all);
    }

    #[test]
    fn prop_operator_names_round_trip_through_serde(
        numeric in numeric_operator_strategy(),
        string in string_operator_strategy(),
        collection in collection_operator_strategy(),
    ) {
        let encoded = serde_json::to_string(&numeric).unwrap();
        prop_assert_eq!(serde_json::from_str::<NumericOperator>(&encoded).unwrap(), numeric);
        let encoded = serde_json::to_string(&string).unwrap();
        prop_assert_eq!(serde_json::from_str::<StringOperator>(&encoded).unwrap(), string);
        let encoded = serde_json::to_string(&collection).unwrap();
        prop_assert_eq!(serde_json::from_str::<CollectionOperator>(&encoded).unwrap(), collection);
        for joiner in [Joiner::And, Joiner::Or] {
            let encoded = serde_json::to_string(&joiner).unwrap();
            prop_assert_eq!(serde_json::from_str::<Joiner>(&encoded).unwrap(), joiner);
        }
    }
}
