use thiserror::Error;

/// Errors raised at the boundary of the matching engine
///
/// Scoring itself never fails: every record that makes it past
/// deserialization and validation can be scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid coordinates: lat={lat}, lng={lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("Scoring weights must sum to 100, got {sum}")]
    InvalidWeights { sum: u32 },
}
