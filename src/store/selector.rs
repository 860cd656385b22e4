use std::sync::Arc;

use crate::expression::Expression;

/// Pick the expression with the fewest steps
///
/// Ties go to the first minimum in iteration order. Returns `None` for an
/// empty input.
pub fn best_of<'a, I>(solutions: I) -> Option<&'a Arc<Expression>>
where
    I: IntoIterator<Item = &'a Arc<Expression>>,
{
    solutions.into_iter().min_by_key(|expr| expr.steps())
}
