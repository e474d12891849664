//! Rejection reasons and configuration errors.
//!
//! A rejected card record is not a fault: every failure path in the validation
//! pipeline ends in a [`RejectionReason`] carried inside a verdict. The `Display`
//! text of each reason is the message shown to whoever submitted the record.

use thiserror::Error;

use crate::cvv::CvvError;
use crate::expiry::ExpiryError;

/// Why a card record was rejected.
///
/// Variants are listed in the order the checks run; when a record has several
/// defects, only the first one in this order is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// The number field was empty.
    #[error("Missing card number")]
    MissingNumber,

    /// The normalized number has fewer than 12 or more than 19 digits.
    #[error("Invalid card length")]
    InvalidLength {
        /// Number of digits after normalization.
        length: usize,
    },

    /// The number is a repeated digit or a tiled two-digit block.
    #[error("Invalid card structure")]
    ImplausibleStructure,

    /// The Luhn checksum failed.
    #[error("Failed Luhn check")]
    FailedLuhn,

    /// The prefix is outside every BIN range of the detected network.
    #[error("Invalid BIN/IIN")]
    InvalidBin {
        /// Key of the detected network.
        network: &'static str,
    },

    /// The expiration date was missing, malformed, expired or too far out.
    #[error(transparent)]
    Expiry(#[from] ExpiryError),

    /// The CVV was missing, had the wrong length, or was not all digits.
    #[error("Invalid CVV")]
    InvalidCvv(#[from] CvvError),
}

#[cfg(feature = "serde")]
impl serde::Serialize for RejectionReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors raised while building or loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The LIVE probability must lie within `[0, 1]`.
    #[error("live probability {0} is outside [0, 1]")]
    LiveProbabilityOutOfRange(f64),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(String),
}
