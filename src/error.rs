//! Error type shared by all sequence operations.
//!
//! Missing data is never an error: lookups, pops and slicing degrade to `None`, `false` or an
//! empty result. `SeqError` is reserved for calls that are misconfigured and must be surfaced.

use thiserror::Error;

/// Explicit failures of sequence operations.
#[derive(Error, Debug)]
pub enum SeqError {
    /// Index based write outside of the accepted range.
    #[error("index {index} out of array range {len}")]
    IndexOutOfRange {
        /// The rejected index, as passed by the caller.
        index: isize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// Range generation with a step that can never reach the end.
    #[error("invalid step value: {step}")]
    InvalidStep {
        /// Display form of the rejected step.
        step: String,
    },

    /// Malformed encoded input.
    #[cfg(feature = "serde")]
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SeqError {
    /// Create an out of range error.
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid step error.
    pub fn invalid_step<S: ToString>(step: S) -> Self {
        Self::InvalidStep {
            step: step.to_string(),
        }
    }

    /// Configuration errors are programming mistakes at the call site, as opposed to bad input
    /// data.
    pub fn is_config_error(&self) -> bool {
        match self {
            Self::IndexOutOfRange { .. } => true,
            Self::InvalidStep { .. } => true,
            #[cfg(feature = "serde")]
            Self::Decode(_) => false,
        }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "bounds",
            Self::InvalidStep { .. } => "config",
            #[cfg(feature = "serde")]
            Self::Decode(_) => "decode",
        }
    }
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Checks `0 <= index < len` and returns the index as `usize`.
#[inline]
pub fn check_index(index: isize, len: usize) -> Result<usize> {
    if index < 0 || index as usize >= len {
        Err(SeqError::index_out_of_range(index, len))
    } else {
        Ok(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_bounds() {
        assert_eq!(check_index(0, 1).unwrap(), 0);
        assert_eq!(check_index(4, 5).unwrap(), 4);
        assert!(check_index(5, 5).is_err());
        assert!(check_index(-1, 5).is_err());
        assert!(check_index(0, 0).is_err());
        assert!(check_index(isize::MIN, usize::MAX).is_err());
    }

    #[test]
    fn display() {
        let err = SeqError::index_out_of_range(-3, 7);
        assert_eq!(err.to_string(), "index -3 out of array range 7");

        let err = SeqError::invalid_step(0);
        assert_eq!(err.to_string(), "invalid step value: 0");
    }

    #[test]
    fn categories() {
        let err = SeqError::index_out_of_range(9, 2);
        assert_eq!(err.category(), "bounds");
        assert!(err.is_config_error());

        let err = SeqError::invalid_step(0);
        assert_eq!(err.category(), "config");
        assert!(err.is_config_error());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decode_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i32>>("[1, 2").unwrap_err();
        let err: SeqError = json_err.into();

        assert_eq!(err.category(), "decode");
        assert!(!err.is_config_error());
        assert!(err.to_string().starts_with("decode error"));
    }
}
