//! Card network detection using BIN/IIN prefix matching.
//!
//! The Bank Identification Number (BIN), also known as Issuer Identification
//! Number (IIN), is the leading digits of a card number. Detection walks the
//! registry in order and returns the first profile whose prefix shape and
//! length both match.

use crate::card::{CardNetworkProfile, NETWORKS, UNKNOWN};

/// Detects the card network from a sequence of digits.
///
/// Never fails: numbers matching no profile get the [`UNKNOWN`] sentinel.
///
/// # Example
///
/// ```
/// use card_checker::detect::detect_network;
///
/// let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(detect_network(&visa).key(), "visa");
///
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(detect_network(&amex).key(), "amex");
///
/// let nobody = [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8];
/// assert!(detect_network(&nobody).is_unknown());
/// ```
#[inline]
pub fn detect_network(digits: &[u8]) -> &'static CardNetworkProfile {
    NETWORKS
        .iter()
        .copied()
        .find(|profile| profile.matches(digits))
        .unwrap_or(&UNKNOWN)
}
