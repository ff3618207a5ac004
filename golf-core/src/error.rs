//! Error types for the golf engine.
//!
//! Every failure is a caller-input problem detected before any flight state
//! exists, so nothing here is retryable.

use thiserror::Error;

/// Result alias for engine operations.
pub type GolfResult<T> = Result<T, GolfError>;

/// Errors surfaced by the impact model and flight simulator.
#[derive(Debug, Error)]
pub enum GolfError {
    /// A required swing field was absent.
    #[error("Missing required swing parameter: {0}")]
    MissingParameter(&'static str),

    /// A club preset identifier did not resolve.
    #[error("Unknown club type: {0}")]
    UnknownClub(String),

    /// A club configuration breaks a physical invariant.
    #[error("Invalid club configuration: {0}")]
    InvalidClub(String),

    /// Ball properties break a physical invariant.
    #[error("Invalid ball properties: {0}")]
    InvalidBall(String),

    /// Equipment file could not be loaded.
    #[error(transparent)]
    Equipment(#[from] EquipmentError),
}

/// Errors from loading equipment definitions off disk.
#[derive(Debug, Error)]
pub enum EquipmentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Equipment not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        assert_eq!(
            GolfError::MissingParameter("clubSpeed").to_string(),
            "Missing required swing parameter: clubSpeed"
        );
        assert_eq!(
            GolfError::UnknownClub("DRIVER_XL".into()).to_string(),
            "Unknown club type: DRIVER_XL"
        );
        assert_eq!(
            GolfError::InvalidClub("sweetSpotSize must be positive, got 0".into()).to_string(),
            "Invalid club configuration: sweetSpotSize must be positive, got 0"
        );
    }

    #[test]
    fn test_equipment_error_converts() {
        let err: GolfError = EquipmentError::NotFound("putter".into()).into();
        assert!(matches!(err, GolfError::Equipment(EquipmentError::NotFound(_))));
        assert_eq!(err.to_string(), "Equipment not found: putter");
    }
}
