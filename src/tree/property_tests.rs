//! Property tests for the condition tree engine
//!
//! Random small trees of numeric comparisons are checked against a
//! directly computed boolean model: joins must behave like `&&`/`||`,
//! inversion must negate every evaluation, and clones must evaluate
//! identically.

use proptest::prelude::*;

use crate::condition::NumericCondition;
use crate::operator::{Joiner, NumericOperator};
use crate::tree::ConditionTree;

type Tree = ConditionTree<NumericCondition<i64>>;

fn operator_strategy() -> impl Strategy<Value = NumericOperator> {
    prop::sample::select(NumericOperator::ALL.to_vec())
}

fn leaf_strategy() -> impl Strategy<Value = Tree> {
    (operator_strategy(), -20..=20i64)
        .prop_map(|(operator, comparison)| {
            ConditionTree::leaf(NumericCondition::new(operator, comparison))
        })
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    leaf_strategy().prop_recursive(3, 12, 3, |inner| {
        (
            prop::sample::select(vec![Joiner::And, Joiner::Or]),
            prop::collection::vec(inner, 2..=3),
        )
            .prop_map(|(joiner, children)| {
                let mut trees = children.into_iter();
                let first = trees.next().expect("at least two children");
                trees.fold(first, |acc, child| match joiner {
                    Joiner::And => acc.and(&child),
                    Joiner::Or => acc.or(&child),
                })
            })
    })
}

/// Reference model: evaluate without any engine machinery
fn model(tree: &Tree, subject: i64) -> bool {
    match tree {
        ConditionTree::Leaf(condition) => condition
            .operator()
            .evaluate(&subject, &condition.value().get(None))
            .unwrap(),
        ConditionTree::Joined(joined) => {
            let results = joined.conditions().iter().map(|child| model(child, subject));
            match joined.joiner() {
                Joiner::And => results.fold(true, |a, b| a && b),
                Joiner::Or => results.fold(false, |a, b| a || b),
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_join_matches_boolean_operators(
        x in tree_strategy(),
        y in tree_strategy(),
        subject in -25..=25i64,
    ) {
        let expected_and = x.evaluate(&subject, None).unwrap() && y.evaluate(&subject, None).unwrap();
        prop_assert_eq!(x.and(&y).evaluate(&subject, None).unwrap(), expected_and);
        let expected_or = x.evaluate(&subject, None).unwrap() || y.evaluate(&subject, None).unwrap();
        prop_assert_eq!(x.or(&y).evaluate(&subject, None).unwrap(), expected_or);
    }

    #[test]
    fn prop_evaluate_matches_model(tree in tree_strategy(), subject in -25..=25i64) {
        prop_assert_eq!(tree.evaluate(&subject, None).unwrap(), model(&tree, subject));
        prop_assert_eq!(
            tree.evaluate_with(&subject, None, false).unwrap(),
            model(&tree, subject)
        );
    }

    #[test]
    fn prop_invert_negates_every_evaluation(tree in tree_strategy(), subject in -25..=25i64) {
        let inverted = tree.invert().unwrap();
        prop_assert_eq!(
            inverted.evaluate(&subject, None).unwrap(),
            !tree.evaluate(&subject, None).unwrap()
        );
    }

    #[test]
    fn prop_double_invert_is_semantically_identity(tree in tree_strategy(), subject in -25..=25i64) {
        let restored = tree.invert().unwrap().invert().unwrap();
        prop_assert_eq!(
            restored.evaluate(&subject, None).unwrap(),
            tree.evaluate(&subject, None).unwrap()
        );
    }

    #[test]
    fn prop_clone_evaluates_identically(tree in tree_strategy(), subject in -25..=25i64) {
        prop_assert_eq!(
            tree.deep_clone().evaluate(&subject, None).unwrap(),
            tree.evaluate(&subject, None).unwrap()
        );
    }

    #[test]
    fn prop_joins_never_nest_same_joiner(x in tree_strategy(), y in tree_strategy()) {
        let joined = x.and(&y);
        if let ConditionTree::Joined(node) = &joined {
            for child in node.conditions() {
                if let ConditionTree::Joined(nested) = child {
                    prop_assert_ne!(nested.joiner(), node.joiner());
                }
            }
        }
    }

    #[test]
    fn prop_serde_round_trip_preserves_evaluation(
        tree in tree_strategy(),
        subject in -25..=25i64,
    ) {
        let encoded = serde_json::to_string(&tree).unwrap();
        let decoded: Tree = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(&decoded, &tree);
        prop_assert_eq!(
            decoded.evaluate(&subject, None).unwrap(),
            tree.evaluate(&subject, None).unwrap()
        );
    }
}
