use thiserror::Error;

use crate::operator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Inexact division: {left} / {right}")]
    InexactDivision { left: i64, right: i64 },
    #[error("Integer overflow: {left} {op} {right}")]
    Overflow { left: i64, op: Operator, right: i64 },
}
