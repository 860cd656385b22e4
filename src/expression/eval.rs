use log::debug;

use crate::expression::ast::{Expression, Shape};
use crate::expression::errors::ExpressionError;
use crate::operator::Operator;

impl Expression {
    /// Recompute the value of the tree from its leaves
    ///
    /// The value cached at construction is not consulted, which makes this
    /// usable as an independent check of a stored solution.
    ///
    /// # Errors
    ///
    /// Returns an error when a node divides by zero, divides inexactly,
    /// or overflows `i64`.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        match self.shape() {
            Shape::Leaf => Ok(self.value()),
            Shape::Node { left, op, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                let result = evaluate_op(*op, left, right);
                if let Err(e) = &result {
                    debug!("Expression evaluation failed: {}", e);
                }
                result
            }
        }
    }
}

fn evaluate_op(op: Operator, left: i64, right: i64) -> Result<i64, ExpressionError> {
    let overflow = ExpressionError::Overflow { left, op, right };
    match op {
        Operator::Add => left.checked_add(right).ok_or(overflow),
        Operator::Sub => left.checked_sub(right).ok_or(overflow),
        Operator::Mul => left.checked_mul(right).ok_or(overflow),
        Operator::Div => {
            if right == 0 {
                Err(ExpressionError::DivisionByZero)
            } else if left % right != 0 {
                Err(ExpressionError::InexactDivision { left, right })
            } else {
                left.checked_div(right).ok_or(overflow)
            }
        }
    }
}
