use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `sources` is empty or holds more than `max_sources` numbers.
pub fn validate_sources(sources: &[i64], max_sources: usize) -> Result<(), UtilsError> {
    debug!("Validating source numbers: {:?}", sources);

    if sources.is_empty() {
        warn!("No source numbers given");
        return Err(UtilsError::EmptySources);
    }

    if sources.len() > max_sources {
        warn!(
            "Refusing to search {} source numbers (maximum {})",
            sources.len(),
            max_sources
        );
        return Err(UtilsError::TooManySources {
            count: sources.len(),
            max: max_sources,
        });
    }

    debug!("Source validation successful");
    Ok(())
}
