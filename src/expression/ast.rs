use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use crate::operator::Operator;
use crate::utils::unused_numbers;

/// How an expression was built: a source number or a combination of two sub-expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Leaf,
    Node {
        left: Arc<Expression>,
        op: Operator,
        right: Arc<Expression>,
    },
}

/// An immutable expression tree together with the value it evaluates to
///
/// The value, step count and structural fingerprint are computed once at
/// construction. Sub-expressions are shared through [`Arc`], so building a
/// node never copies its children.
#[derive(Debug, Clone)]
pub struct Expression {
    value: i64,
    steps: usize,
    fingerprint: u64,
    shape: Shape,
}

impl Expression {
    pub fn leaf(value: i64) -> Self {
        let mut hasher = DefaultHasher::new();
        0u8.hash(&mut hasher);
        value.hash(&mut hasher);

        Self {
            value,
            steps: 0,
            fingerprint: hasher.finish(),
            shape: Shape::Leaf,
        }
    }

    /// Combine two expressions with `op`
    ///
    /// The guard `op.applies(left.value(), right.value())` must already hold;
    /// it is not checked again here.
    pub fn node(left: Arc<Expression>, op: Operator, right: Arc<Expression>) -> Self {
        let value = op.apply(left.value, right.value);
        let steps = 1 + left.steps + right.steps;

        let mut hasher = DefaultHasher::new();
        1u8.hash(&mut hasher);
        value.hash(&mut hasher);
        left.fingerprint.hash(&mut hasher);
        op.hash(&mut hasher);
        right.fingerprint.hash(&mut hasher);

        Self {
            value,
            steps,
            fingerprint: hasher.finish(),
            shape: Shape::Node { left, op, right },
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of operator applications in the tree
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.shape, Shape::Leaf)
    }

    /// Source numbers used by this expression, in left-to-right order
    pub fn used_numbers(&self) -> Vec<i64> {
        let mut numbers = Vec::with_capacity(self.steps + 1);
        self.collect_leaves(&mut numbers);
        numbers
    }

    /// The numbers from `sources` this expression leaves untouched
    ///
    /// Duplicates are handled as a multiset: `[2, 2]` minus one used `2`
    /// leaves a single `2`.
    pub fn unused_numbers(&self, sources: &[i64]) -> Vec<i64> {
        unused_numbers(sources, &self.used_numbers())
    }

    fn collect_leaves(&self, out: &mut Vec<i64>) {
        match &self.shape {
            Shape::Leaf => out.push(self.value),
            Shape::Node { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.fingerprint == other.fingerprint
            && self.value == other.value
            && self.steps == other.steps
            && self.shape == other.shape
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint);
    }
}
