//! Expression trees and their textual derivations

mod ast;
mod display;
mod errors;
mod eval;
mod explain;

pub use ast::{Expression, Shape};
pub use errors::ExpressionError;
pub use explain::Explain;
