use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid source numbers: {0}")]
    InvalidSources(#[from] UtilsError),
}
