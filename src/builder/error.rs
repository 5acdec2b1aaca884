//! Build errors for tracker construction.

use thiserror::Error;

/// Errors that can occur when building a tracker.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Visibility signal not specified. Call .visible(signal) before .build()")]
    MissingVisibilitySignal,
}
