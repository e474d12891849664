//! Card number normalization.
//!
//! Users paste numbers with spaces, dashes, dots and whatever else their
//! clipboard picked up. Normalization keeps the ASCII digits and drops
//! everything else; length is judged later by the orchestrator.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A digit-only card number.
///
/// Holds digit values (0-9), not ASCII. The buffer is zeroed on drop and
/// `Debug` output is masked.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NormalizedNumber {
    digits: Vec<u8>,
}

impl NormalizedNumber {
    /// The digit values.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if no digits survived normalization.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the number as a digit string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Use [`masked`](Self::masked) for display.
    pub fn as_string(&self) -> String {
        self.digits.iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// Returns the number with all but the last four digits masked.
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(&self.digits)
    }
}

impl fmt::Debug for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedNumber")
            .field("number", &self.masked())
            .field("length", &self.digits.len())
            .finish()
    }
}

/// Removes every character that is not an ASCII digit.
///
/// # Example
///
/// ```
/// use card_checker::normalize::normalize;
///
/// let number = normalize("4111-1111 1111.1111");
/// assert_eq!(number.len(), 16);
/// assert_eq!(number.as_string(), "4111111111111111");
/// ```
pub fn normalize(input: &str) -> NormalizedNumber {
    let digits = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    NormalizedNumber { digits }
}

/// Strips formatting and returns the digit string directly.
///
/// ```
/// use card_checker::normalize::strip_formatting;
///
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
