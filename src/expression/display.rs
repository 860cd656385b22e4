use std::fmt;

use crate::expression::ast::{Expression, Shape};

/// Canonical rendering: every node parenthesised, leaves bare
///
/// `(((3 * 2) + 1) * 4)` is the rendering of a three-step tree. Unlike
/// [`Expression::to_infix`], this form is injective over trees.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.shape() {
            Shape::Leaf => write!(f, "{}", self.value()),
            Shape::Node { left, op, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

impl Expression {
    /// Render with the fewest parentheses that keep the evaluation order
    ///
    /// A right operand of the same precedence is always parenthesised, so
    /// `4 + (3 + 1)` and `4 + 3 + 1` stay distinct.
    pub fn to_infix(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr.shape() {
                Shape::Leaf => 3,
                Shape::Node { op, .. } => op.precedence(),
            }
        }

        fn write_with_parens(out: &mut String, expr: &Expression, need_parens: bool) {
            if need_parens {
                out.push('(');
                write_infix(out, expr);
                out.push(')');
            } else {
                write_infix(out, expr);
            }
        }

        fn write_infix(out: &mut String, expr: &Expression) {
            match expr.shape() {
                Shape::Leaf => out.push_str(&expr.value().to_string()),
                Shape::Node { left, op, right } => {
                    let p = op.precedence();
                    let lp = precedence(left);
                    let rp = precedence(right);
                    let need_l = lp < p;
                    let need_r = rp <= p;
                    write_with_parens(out, left, need_l);
                    out.push(' ');
                    out.push(op.symbol());
                    out.push(' ');
                    write_with_parens(out, right, need_r);
                }
            }
        }

        let mut out = String::new();
        write_infix(&mut out, self);
        out
    }
}
