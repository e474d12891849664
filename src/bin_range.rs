//! BIN/IIN range cross-checks.
//!
//! Detection shapes in the registry are coarse prefix matches. Each network
//! also declares the exact issuer ranges it owns, and a detected number must
//! start inside one of them.
//!
//! A range is compared at the decimal width of its lower bound: `(51, 55)`
//! looks at the first two digits, `(2221, 2720)` at the first four.

use crate::card::CardNetworkProfile;

/// An inclusive range of issuer prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinRange {
    low: u32,
    high: u32,
}

impl BinRange {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`. In a `static` initializer this is a compile error.
    pub const fn new(low: u32, high: u32) -> Self {
        assert!(low <= high, "BIN range bounds are inverted");
        Self { low, high }
    }

    /// Lower bound.
    #[inline]
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Number of leading digits compared against this range.
    #[inline]
    pub const fn width(&self) -> usize {
        let mut width = 1;
        let mut rest = self.low / 10;
        while rest > 0 {
            width += 1;
            rest /= 10;
        }
        width
    }

    /// Returns true if the leading digits of `digits` fall inside the range.
    ///
    /// Numbers shorter than the range width never match.
    pub fn contains_prefix(&self, digits: &[u8]) -> bool {
        match prefix_value(digits, self.width()) {
            Some(prefix) => self.low <= prefix && prefix <= self.high,
            None => false,
        }
    }
}

/// Parses the first `width` digits as an integer.
fn prefix_value(digits: &[u8], width: usize) -> Option<u32> {
    let head = digits.get(..width)?;
    Some(head.iter().fold(0u32, |acc, &d| acc * 10 + d as u32))
}

/// Checks a number against the BIN ranges of its detected network.
///
/// Networks without declared ranges (including the unknown sentinel) pass
/// unconditionally.
///
/// # Example
///
/// ```
/// use card_checker::bin_range::matches_bin_ranges;
/// use card_checker::card::MASTERCARD;
///
/// // 2221 sits inside 2221-2720
/// assert!(matches_bin_ranges(&[2, 2, 2, 1, 0, 0], &MASTERCARD));
/// // 2721 is one past the 2-series allocation
/// assert!(!matches_bin_ranges(&[2, 7, 2, 1, 0, 0], &MASTERCARD));
/// ```
pub fn matches_bin_ranges(digits: &[u8], profile: &CardNetworkProfile) -> bool {
    let ranges = profile.bin_ranges();
    ranges.is_empty() || ranges.iter().any(|range| range.contains_prefix(digits))
}
