//! The fixed catalog of binary operators and their applicability guards

use std::fmt;

/// A binary arithmetic operator usable in a solution
///
/// Every guard and `apply` assumes the operands were ordered so that
/// `left >= right` beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Mul,
    Sub,
    Div,
}

/// All operators, in the order the search engine tries them
pub const OPERATORS: [Operator; 4] = [Operator::Add, Operator::Mul, Operator::Sub, Operator::Div];

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Mul => '*',
            Operator::Sub => '-',
            Operator::Div => '/',
        }
    }

    /// Whether applying the operator to `(left, right)` is allowed
    ///
    /// Guards prune applications that are either invalid (inexact division,
    /// `i64` overflow) or redundant with a simpler solution (multiplying or
    /// dividing by 1, subtracting a number from itself).
    pub fn applies(self, left: i64, right: i64) -> bool {
        match self {
            Operator::Add => left.checked_add(right).is_some(),
            Operator::Mul => right > 1 && left.checked_mul(right).is_some(),
            Operator::Sub => left != right && left.checked_sub(right).is_some(),
            Operator::Div => right > 1 && left % right == 0,
        }
    }

    /// Apply the operator
    ///
    /// Callers must check [`Operator::applies`] first; the result of an
    /// unguarded application is unspecified and division by zero panics.
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Add => left.wrapping_add(right),
            Operator::Mul => left.wrapping_mul(right),
            Operator::Sub => left.wrapping_sub(right),
            Operator::Div => left / right,
        }
    }

    /// Binding strength used when rendering with minimal parentheses
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
