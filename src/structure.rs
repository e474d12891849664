//! Structural plausibility checks.
//!
//! Some placeholder numbers pass the Luhn checksum by construction, e.g.
//! `4242424242424242`. These checks reject digit strings that are a single
//! repeated digit or a two-digit block tiled across the whole number.

/// Minimum number of repeats of a two-digit block before it counts as tiled.
pub const MIN_TILE_REPEATS: usize = 7;

/// Returns true if the digits do not look like a synthetic placeholder.
///
/// # Example
///
/// ```
/// use card_checker::structure::is_structurally_plausible;
///
/// assert!(is_structurally_plausible(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!is_structurally_plausible(&[1; 16]));
/// assert!(!is_structurally_plausible(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2]));
/// ```
#[inline]
pub fn is_structurally_plausible(digits: &[u8]) -> bool {
    !is_repeated_digit(digits) && !is_tiled_pair(digits)
}

/// Whole string is one digit repeated. Empty input is not.
pub fn is_repeated_digit(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

/// Whole string is a two-digit block repeated at least [`MIN_TILE_REPEATS`] times.
pub fn is_tiled_pair(digits: &[u8]) -> bool {
    if digits.len() % 2 != 0 || digits.len() / 2 < MIN_TILE_REPEATS {
        return false;
    }
    let block = &digits[..2];
    digits.chunks_exact(2).all(|chunk| chunk == block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_digit() {
        assert!(is_repeated_digit(&[1; 16]));
        assert!(is_repeated_digit(&[0; 12]));
        assert!(is_repeated_digit(&[7]));
        assert!(!is_repeated_digit(&[]));
        assert!(!is_repeated_digit(&[1, 1, 1, 2]));
    }

    #[test]
    fn test_tiled_pair() {
        let tiled: Vec<u8> = [4, 2].repeat(8);
        assert!(is_tiled_pair(&tiled));

        // Exactly seven repeats
        let seven: Vec<u8> = [3, 5].repeat(7);
        assert!(is_tiled_pair(&seven));

        // Six repeats is too short to count
        let six: Vec<u8> = [3, 5].repeat(6);
        assert!(!is_tiled_pair(&six));
    }

    #[test]
    fn test_tiled_with_remainder_is_not_tiled() {
        let mut digits: Vec<u8> = [4, 2].repeat(8);
        digits.push(4);
        assert!(!is_tiled_pair(&digits));
    }

    #[test]
    fn test_broken_tile() {
        let mut digits: Vec<u8> = [4, 2].repeat(8);
        digits[15] = 3;
        assert!(!is_tiled_pair(&digits));
    }

    #[test]
    fn test_real_test_numbers_are_plausible() {
        let visa = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 7];
        assert!(is_structurally_plausible(&visa));
        let mc = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4];
        assert!(is_structurally_plausible(&mc));
    }
}
