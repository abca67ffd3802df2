use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("Invalid record count: expected a positive integer, got {count}")]
    InvalidRecordCount { count: i64 },

    #[error("Weight table '{table}' is invalid: weights sum to {sum}, expected 1.0")]
    InvalidWeights { table: &'static str, sum: f64 },

    #[error("Invalid {distribution} parameter: {reason}")]
    InvalidDistribution {
        distribution: &'static str,
        reason: String,
    },

    #[error("Arrival window of {days} days is empty or runs past the last representable date")]
    InvalidWindow { days: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConciergeError {
    /// True for the fail-fast class raised before any record is generated.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecordCount { .. }
                | Self::InvalidWeights { .. }
                | Self::InvalidDistribution { .. }
                | Self::InvalidWindow { .. }
        )
    }
}

pub type ConciergeResult<T> = Result<T, ConciergeError>;
