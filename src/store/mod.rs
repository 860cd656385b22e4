//! Deduplicated storage of solutions, keyed by value

mod solutions;
mod selector;

pub use solutions::{ExpressionSet, SolutionStore};
pub use selector::best_of;

#[cfg(test)]
mod tests;
