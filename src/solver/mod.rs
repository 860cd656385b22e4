pub mod constants;
mod engine;
mod errors;

pub use engine::{Solver, SolverConfig, search};
pub use errors::SolverError;

#[cfg(test)]
mod proptests;
