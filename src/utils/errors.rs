use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one source number is required")]
    EmptySources,
    #[error("Too many source numbers: {count} (maximum {max})")]
    TooManySources { count: usize, max: usize },
}
