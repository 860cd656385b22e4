//! Summle - enumerate every integer reachable from a set of numbers
//!
//! Numbers are combined pairwise with `+`, `-`, `*` and exact `/`, each source
//! number used at most once. Every reachable value is stored together with all
//! structurally distinct expression trees reaching it.

pub mod expression;
pub mod operator;
pub mod solver;
pub mod store;
pub mod utils;

// Re-export the main public API
pub use expression::{Explain, Expression, ExpressionError, Shape};
pub use operator::{OPERATORS, Operator};
pub use solver::{Solver, SolverConfig, SolverError, search};
pub use store::{ExpressionSet, SolutionStore, best_of};
pub use utils::{UtilsError, prime_factors, validate_sources};

/// Find every value reachable from the given source numbers
///
/// This is a convenience function that validates the input with a default
/// solver before running [`search`].
///
/// # Errors
///
/// This function will return an error if:
/// * No source numbers are given
/// * More source numbers are given than the default solver accepts
///
/// # Examples
///
/// ```
/// use summle::solve;
///
/// match solve(&[1, 2, 3, 4]) {
///     Ok(solutions) => match solutions.best(28) {
///         Some(best) => println!("Found: {}", best.to_infix()),
///         None => println!("No solution found"),
///     },
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(sources: &[i64]) -> Result<SolutionStore, SolverError> {
    Solver::default().solve(sources)
}
