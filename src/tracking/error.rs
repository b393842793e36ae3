//! Typed failures of the location capability.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error(
        "Location services are not available. Set `location_source` in the config or pass --source <FILE|->."
    )]
    UnsupportedCapability,

    #[error(
        "Location access requires a secure origin (https or localhost), but the configured origin is '{0}'. Update `origin` in the config."
    )]
    InsecureContext(String),

    #[error(
        "Location permission denied. Allow location access (`location_permission: granted`) and try again."
    )]
    PermissionDenied,

    #[error("Position unavailable: {0}. Check the position source and try again.")]
    PositionUnavailable(String),

    #[error("Timed out after {0} ms waiting for a position fix. Try again.")]
    Timeout(u64),
}

impl LocationError {
    /// Transient failures the user may simply retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LocationError::PositionUnavailable(_) | LocationError::Timeout(_)
        )
    }
}
