//! Utils module split into submodules

mod errors;
mod factors;
mod multiset;
mod validation;

pub use errors::UtilsError;
pub use factors::prime_factors;
pub use multiset::unused_numbers;
pub use validation::validate_sources;
