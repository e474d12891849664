//! CVV/CVC/CID validation.
//!
//! The expected length depends on the network: American Express prints a
//! four-digit CID on the front, everyone else a three-digit code on the back.
//! Numbers of unknown network are held to three digits.
//!
//! # Example
//!
//! ```
//! use card_checker::cvv::{validate_cvv, CvvError};
//! use card_checker::card::{AMEX, VISA};
//!
//! assert!(validate_cvv("123", &VISA).is_ok());
//! assert!(validate_cvv("1234", &AMEX).is_ok());
//! assert!(matches!(
//!     validate_cvv("1234", &VISA),
//!     Err(CvvError::WrongLength { length: 4, .. })
//! ));
//! ```

use thiserror::Error;

use crate::card::CardNetworkProfile;

/// Why a CVV was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvvError {
    /// The CVV field is empty.
    #[error("CVV is empty")]
    Empty,

    /// The CVV length is not one the network issues.
    #[error("{network} cards require a CVV of {expected:?} digits, got {length}")]
    WrongLength {
        /// Network display name.
        network: &'static str,
        /// Actual length provided.
        length: usize,
        /// Lengths the network issues.
        expected: &'static [u8],
    },

    /// The CVV contains a non-digit.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Position of the character.
        position: usize,
    },
}

/// Validates a CVV against the detected network.
///
/// Checks run in order: empty, length, digits only.
pub fn validate_cvv(cvv: &str, profile: &CardNetworkProfile) -> Result<(), CvvError> {
    if cvv.is_empty() {
        return Err(CvvError::Empty);
    }

    let length = cvv.chars().count();
    if !profile.accepts_cvv_length(length) {
        return Err(CvvError::WrongLength {
            network: profile.name(),
            length,
            expected: profile.cvv_lengths(),
        });
    }

    if let Some((position, character)) = cvv.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(CvvError::InvalidCharacter { character, position });
    }

    Ok(())
}
