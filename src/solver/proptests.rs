//! Property-based tests for the search engine

use proptest::prelude::*;

use crate::expression::{Expression, Shape};
use crate::operator::Operator;
use crate::solver::search;
use crate::store::best_of;

// Small enough that a full search stays fast
fn sources() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..=12, 1..=4)
}

// Zero and negative numbers included
fn signed_sources() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-12i64..=12, 1..=4)
}

/// Check ordering and guards on every node of `expr`
fn guards_hold(expr: &Expression) -> Result<(), String> {
    let mut stack = vec![expr];
    while let Some(current) = stack.pop() {
        let Shape::Node { left, op, right } = current.shape() else {
            continue;
        };
        let (l, r) = (left.value(), right.value());
        let ok = l >= r
            && match op {
                Operator::Add => true,
                Operator::Mul => r > 1,
                Operator::Sub => l != r,
                Operator::Div => r > 1 && l % r == 0,
            };
        if !ok {
            return Err(format!("guard violated at {} inside {}", current, expr));
        }
        stack.push(left);
        stack.push(right);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn stored_key_matches_evaluation(sources in signed_sources()) {
        let solutions = search(&sources);
        for (value, set) in solutions.iter() {
            for expr in set {
                prop_assert_eq!(expr.evaluate(), Ok(value));
            }
        }
    }

    #[test]
    fn guards_hold_for_every_node(sources in signed_sources()) {
        let solutions = search(&sources);
        for (_, set) in solutions.iter() {
            for expr in set {
                prop_assert_eq!(guards_hold(expr), Ok(()));
            }
        }
    }

    #[test]
    fn counts_independent_of_input_order(sources in sources()) {
        let mut reversed = sources.clone();
        reversed.reverse();
        prop_assert_eq!(search(&sources).counts(), search(&reversed).counts());
    }

    #[test]
    fn best_has_minimal_steps(sources in sources()) {
        let solutions = search(&sources);
        for value in solutions.values() {
            let best = best_of(solutions.solutions(value));
            prop_assert!(best.is_some());
            if let Some(best) = best {
                prop_assert_eq!(best.value(), value);
                prop_assert!(solutions.solutions(value).all(|e| e.steps() >= best.steps()));
            }
        }
    }

    #[test]
    fn solutions_only_use_sources(sources in sources()) {
        let solutions = search(&sources);
        for (_, set) in solutions.iter() {
            for expr in set {
                let used = expr.used_numbers();
                prop_assert_eq!(used.len(), expr.steps() + 1);
                prop_assert_eq!(expr.unused_numbers(&sources).len(), sources.len() - used.len());
            }
        }
    }
}
