//! Card network registry.
//!
//! Every supported network is one immutable [`CardNetworkProfile`] value, and
//! [`NETWORKS`] lists them in detection order. Shapes are mutually exclusive, so
//! the first match is the only match.
//!
//! | Key | Shape | BIN ranges | Length | CVV |
//! |-----|-------|------------|--------|-----|
//! | visa | 4 | 4 | 13, 16, 19 | 3 |
//! | mastercard | 51-55, 222-229, 23-27 | 51-55, 2221-2720 | 16 | 3 |
//! | amex | 34, 37 | 34, 37 | 15 | 4 |
//! | discover | 6011, 644-649, 65 | 6011, 644-649, 65 | 16-19 | 3 |
//! | diners | 30, 36, 38, 39 | 300-305, 309, 36, 38-39 | 14-19 | 3 |
//! | jcb | 35 | 3528-3589 | 16-19 | 3 |
//! | unionpay | 62 | 62 | 16-19 | 3 |
//! | maestro | 50, 56-58, 6304, 67 | 50, 56-58, 6304, 6759, 6761-6763 | 12-19 | 3 |
//! | mir | 220 | 2200-2204 | 16-19 | 3 |
//! | rupay | 81, 82 | 81-82 | 16 | 3 |
//! | troy | 9792 | 9792 | 16 | 3 |

use std::fmt;

use crate::bin_range::BinRange;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 12;

/// Key reported for numbers that match no known network.
pub const UNKNOWN_KEY: &str = "unknown";

/// Static description of one card network.
///
/// A profile carries no behavior beyond its data: a prefix shape, the issuer
/// ranges it owns, and the number and CVV lengths it issues.
#[derive(Clone, Copy)]
pub struct CardNetworkProfile {
    key: &'static str,
    name: &'static str,
    shape: fn(&[u8]) -> bool,
    bin_ranges: &'static [BinRange],
    lengths: &'static [u8],
    cvv_lengths: &'static [u8],
}

impl CardNetworkProfile {
    /// Stable lowercase identifier, e.g. `"visa"`.
    #[inline]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Human-readable name, e.g. `"American Express"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared issuer ranges. Empty for the unknown sentinel.
    #[inline]
    pub const fn bin_ranges(&self) -> &'static [BinRange] {
        self.bin_ranges
    }

    /// Total card number lengths this network issues.
    #[inline]
    pub const fn accepted_lengths(&self) -> &'static [u8] {
        self.lengths
    }

    /// CVV lengths this network issues.
    #[inline]
    pub const fn cvv_lengths(&self) -> &'static [u8] {
        self.cvv_lengths
    }

    /// Returns true for the sentinel used when no network matches.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.key == UNKNOWN_KEY
    }

    /// Returns true if the given length is valid for this network.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.lengths.iter().any(|&l| l as usize == length)
    }

    /// Returns true if the given CVV length is valid for this network.
    #[inline]
    pub fn accepts_cvv_length(&self, length: usize) -> bool {
        self.cvv_lengths.iter().any(|&l| l as usize == length)
    }

    /// Returns true if the digits have this network's prefix shape and length.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        self.is_valid_length(digits.len()) && (self.shape)(digits)
    }
}

impl PartialEq for CardNetworkProfile {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CardNetworkProfile {}

impl fmt::Debug for CardNetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNetworkProfile")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("bin_ranges", &self.bin_ranges)
            .field("lengths", &self.lengths)
            .field("cvv_lengths", &self.cvv_lengths)
            .finish()
    }
}

impl fmt::Display for CardNetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const SIXTEEN_TO_NINETEEN: &[u8] = &[16, 17, 18, 19];

/// Visa.
pub static VISA: CardNetworkProfile = CardNetworkProfile {
    key: "visa",
    name: "Visa",
    shape: |d| matches!(d, [4, ..]),
    bin_ranges: &[BinRange::new(4, 4)],
    lengths: &[13, 16, 19],
    cvv_lengths: &[3],
};

/// Mastercard, including the 2-series.
pub static MASTERCARD: CardNetworkProfile = CardNetworkProfile {
    key: "mastercard",
    name: "Mastercard",
    shape: |d| matches!(d, [5, 1..=5, ..] | [2, 2, 2..=9, ..] | [2, 3..=7, ..]),
    bin_ranges: &[BinRange::new(51, 55), BinRange::new(2221, 2720)],
    lengths: &[16],
    cvv_lengths: &[3],
};

/// American Express.
pub static AMEX: CardNetworkProfile = CardNetworkProfile {
    key: "amex",
    name: "American Express",
    shape: |d| matches!(d, [3, 4 | 7, ..]),
    bin_ranges: &[BinRange::new(34, 34), BinRange::new(37, 37)],
    lengths: &[15],
    cvv_lengths: &[4],
};

/// Discover.
pub static DISCOVER: CardNetworkProfile = CardNetworkProfile {
    key: "discover",
    name: "Discover",
    shape: |d| matches!(d, [6, 0, 1, 1, ..] | [6, 4, 4..=9, ..] | [6, 5, ..]),
    bin_ranges: &[
        BinRange::new(6011, 6011),
        BinRange::new(644, 649),
        BinRange::new(65, 65),
    ],
    lengths: SIXTEEN_TO_NINETEEN,
    cvv_lengths: &[3],
};

/// Diners Club.
pub static DINERS_CLUB: CardNetworkProfile = CardNetworkProfile {
    key: "diners",
    name: "Diners Club",
    shape: |d| matches!(d, [3, 0 | 6 | 8 | 9, ..]),
    bin_ranges: &[
        BinRange::new(300, 305),
        BinRange::new(309, 309),
        BinRange::new(36, 36),
        BinRange::new(38, 39),
    ],
    lengths: &[14, 15, 16, 17, 18, 19],
    cvv_lengths: &[3],
};

/// JCB.
pub static JCB: CardNetworkProfile = CardNetworkProfile {
    key: "jcb",
    name: "JCB",
    shape: |d| matches!(d, [3, 5, ..]),
    bin_ranges: &[BinRange::new(3528, 3589)],
    lengths: SIXTEEN_TO_NINETEEN,
    cvv_lengths: &[3],
};

/// UnionPay.
pub static UNIONPAY: CardNetworkProfile = CardNetworkProfile {
    key: "unionpay",
    name: "UnionPay",
    shape: |d| matches!(d, [6, 2, ..]),
    bin_ranges: &[BinRange::new(62, 62)],
    lengths: SIXTEEN_TO_NINETEEN,
    cvv_lengths: &[3],
};

/// Maestro.
pub static MAESTRO: CardNetworkProfile = CardNetworkProfile {
    key: "maestro",
    name: "Maestro",
    shape: |d| matches!(d, [5, 0 | 6..=8, ..] | [6, 3, 0, 4, ..] | [6, 7, ..]),
    bin_ranges: &[
        BinRange::new(50, 50),
        BinRange::new(56, 58),
        BinRange::new(6304, 6304),
        BinRange::new(6759, 6759),
        BinRange::new(6761, 6763),
    ],
    lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
    cvv_lengths: &[3],
};

/// Mir (Russia).
pub static MIR: CardNetworkProfile = CardNetworkProfile {
    key: "mir",
    name: "Mir",
    shape: |d| matches!(d, [2, 2, 0, ..]),
    bin_ranges: &[BinRange::new(2200, 2204)],
    lengths: SIXTEEN_TO_NINETEEN,
    cvv_lengths: &[3],
};

/// RuPay (India).
pub static RUPAY: CardNetworkProfile = CardNetworkProfile {
    key: "rupay",
    name: "RuPay",
    shape: |d| matches!(d, [8, 1 | 2, ..]),
    bin_ranges: &[BinRange::new(81, 82)],
    lengths: &[16],
    cvv_lengths: &[3],
};

/// Troy (Turkey).
pub static TROY: CardNetworkProfile = CardNetworkProfile {
    key: "troy",
    name: "Troy",
    shape: |d| matches!(d, [9, 7, 9, 2, ..]),
    bin_ranges: &[BinRange::new(9792, 9792)],
    lengths: &[16],
    cvv_lengths: &[3],
};

/// Sentinel returned when no network matches.
pub static UNKNOWN: CardNetworkProfile = CardNetworkProfile {
    key: UNKNOWN_KEY,
    name: "Unknown",
    shape: |_| false,
    bin_ranges: &[],
    lengths: &[],
    cvv_lengths: &[3],
};

/// All known networks, in detection order.
pub static NETWORKS: &[&CardNetworkProfile] = &[
    &VISA,
    &MASTERCARD,
    &AMEX,
    &DISCOVER,
    &DINERS_CLUB,
    &JCB,
    &UNIONPAY,
    &MAESTRO,
    &MIR,
    &RUPAY,
    &TROY,
];

/// Looks up a network by key. `"unknown"` resolves to the sentinel.
pub fn find(key: &str) -> Option<&'static CardNetworkProfile> {
    if key == UNKNOWN_KEY {
        return Some(&UNKNOWN);
    }
    NETWORKS.iter().copied().find(|profile| profile.key == key)
}
