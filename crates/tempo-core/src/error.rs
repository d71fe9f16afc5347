//! Error types for Tempo

use thiserror::Error;

/// Main error type for Tempo core operations
#[derive(Error, Debug)]
pub enum TempoError {
    /// A system record was not found in the store
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// An expiry timestamp string could not be parsed as ISO-8601
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type alias using TempoError
pub type TempoResult<T> = Result<T, TempoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TempoError::RecordNotFound("lastTeamId".to_string());
        assert_eq!(format!("{}", err), "Record not found: lastTeamId");

        let err = TempoError::InvalidTimestamp("tomorrowish".to_string());
        assert_eq!(format!("{}", err), "Invalid timestamp: tomorrowish");
    }
}
