use std::collections::{BTreeMap, HashSet};
use std::hash::{BuildHasherDefault, DefaultHasher};
use std::sync::Arc;

use crate::expression::Expression;
use crate::store::selector::best_of;

/// Distinct solutions for a single value
///
/// A fixed hasher keeps iteration order stable for a given insertion order,
/// so ties in [`best_of`] resolve the same way on every run.
pub type ExpressionSet = HashSet<Arc<Expression>, BuildHasherDefault<DefaultHasher>>;

/// Every value reached by a search, with all structurally distinct ways of reaching it
#[derive(Debug, Clone, Default)]
pub struct SolutionStore {
    buckets: BTreeMap<i64, ExpressionSet>,
}

impl SolutionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `expr` under its value
    ///
    /// Returns `false` if a structurally equal expression was already stored.
    pub fn insert(&mut self, expr: Arc<Expression>) -> bool {
        self.buckets.entry(expr.value()).or_default().insert(expr)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.buckets.contains_key(&value)
    }

    pub fn get(&self, value: i64) -> Option<&ExpressionSet> {
        self.buckets.get(&value)
    }

    /// All solutions for `value`; empty when the value was never reached
    pub fn solutions(&self, value: i64) -> impl Iterator<Item = &Arc<Expression>> {
        self.buckets.get(&value).into_iter().flatten()
    }

    pub fn count(&self, value: i64) -> usize {
        self.buckets.get(&value).map_or(0, HashSet::len)
    }

    /// The solution for `value` with the fewest steps
    pub fn best(&self, value: i64) -> Option<&Arc<Expression>> {
        best_of(self.solutions(value))
    }

    /// Number of distinct values reached
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of solutions across all values
    pub fn total_solutions(&self) -> usize {
        self.buckets.values().map(HashSet::len).sum()
    }

    /// Reached values in ascending order
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &ExpressionSet)> {
        self.buckets.iter().map(|(value, set)| (*value, set))
    }

    /// Solution count per value
    pub fn counts(&self) -> BTreeMap<i64, usize> {
        self.buckets
            .iter()
            .map(|(value, set)| (*value, set.len()))
            .collect()
    }
}
