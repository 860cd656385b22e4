use std::sync::Arc;

use crate::expression::Expression;
use crate::operator::Operator;
use crate::store::{SolutionStore, best_of};

fn leaf(n: i64) -> Arc<Expression> {
    Arc::new(Expression::leaf(n))
}

fn node(left: Arc<Expression>, op: Operator, right: Arc<Expression>) -> Arc<Expression> {
    Arc::new(Expression::node(left, op, right))
}

#[test]
fn test_insert_is_idempotent() {
    let mut store = SolutionStore::new();
    assert!(store.insert(node(leaf(4), Operator::Add, leaf(2))));
    assert!(!store.insert(node(leaf(4), Operator::Add, leaf(2))));
    assert_eq!(store.count(6), 1);
    assert_eq!(store.total_solutions(), 1);
}

#[test]
fn test_same_value_different_trees_are_kept() {
    let mut store = SolutionStore::new();
    store.insert(node(leaf(4), Operator::Add, leaf(2)));
    store.insert(node(leaf(3), Operator::Mul, leaf(2)));
    assert_eq!(store.count(6), 2);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_query_missing_value() {
    let store = SolutionStore::new();
    assert!(store.is_empty());
    assert!(!store.contains(42));
    assert!(store.get(42).is_none());
    assert_eq!(store.solutions(42).count(), 0);
    assert_eq!(store.count(42), 0);
    assert!(store.best(42).is_none());
}

#[test]
fn test_values_are_sorted() {
    let mut store = SolutionStore::new();
    store.insert(node(leaf(5), Operator::Mul, leaf(2)));
    store.insert(node(leaf(5), Operator::Sub, leaf(2)));
    store.insert(node(leaf(5), Operator::Add, leaf(2)));
    let values: Vec<i64> = store.values().collect();
    assert_eq!(values, vec![3, 7, 10]);

    let counts = store.counts();
    assert_eq!(counts.get(&7), Some(&1));
    assert_eq!(store.iter().count(), 3);
}

#[test]
fn test_best_prefers_fewest_steps() {
    let mut store = SolutionStore::new();
    let long = node(node(leaf(3), Operator::Add, leaf(2)), Operator::Add, leaf(1));
    let short = node(leaf(5), Operator::Add, leaf(1));
    store.insert(long);
    store.insert(short.clone());

    let best = store.best(6);
    assert!(best.is_some());
    if let Some(best) = best {
        assert_eq!(best, &short);
        assert_eq!(best.steps(), 1);
    }
}

#[test]
fn test_best_of_first_minimum_wins() {
    let first = node(leaf(4), Operator::Add, leaf(2));
    let second = node(leaf(3), Operator::Mul, leaf(2));
    let candidates = vec![first.clone(), second];
    assert_eq!(best_of(&candidates), Some(&first));
}

#[test]
fn test_best_of_empty() {
    let candidates: Vec<Arc<Expression>> = Vec::new();
    assert!(best_of(&candidates).is_none());
}
