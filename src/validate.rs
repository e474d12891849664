//! Record validation orchestration.
//!
//! [`Validator::validate`] runs eight checks in a fixed order and stops at the
//! first failure:
//!
//! 1. number field present
//! 2. normalized length within 12-19 digits
//! 3. network detection (never fails)
//! 4. structural plausibility
//! 5. Luhn checksum
//! 6. BIN range, unless the network is unknown
//! 7. expiration date
//! 8. CVV
//!
//! The order decides which single reason is reported when a record has
//! several defects.

use std::sync::Arc;

use crate::bin_range::matches_bin_ranges;
use crate::card::{CardNetworkProfile, MAX_CARD_DIGITS, MIN_CARD_DIGITS, UNKNOWN};
use crate::config::ValidatorConfig;
use crate::cvv::validate_cvv;
use crate::detect::detect_network;
use crate::error::RejectionReason;
use crate::expiry::{validate_expiry, Clock, SystemClock};
use crate::luhn;
use crate::normalize::normalize;
use crate::record::CardRecord;
use crate::structure::is_structurally_plausible;

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationVerdict {
    valid: bool,
    network_key: &'static str,
    network_name: &'static str,
    rejection: Option<RejectionReason>,
    exp_month: Option<u8>,
    exp_year: Option<u16>,
}

impl ValidationVerdict {
    fn rejected(network: &CardNetworkProfile, reason: RejectionReason) -> Self {
        Self {
            valid: false,
            network_key: network.key(),
            network_name: network.name(),
            rejection: Some(reason),
            exp_month: None,
            exp_year: None,
        }
    }

    /// Returns true if every check passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Detected network key, `"unknown"` if undetected.
    #[inline]
    pub fn network_key(&self) -> &'static str {
        self.network_key
    }

    /// Detected network display name.
    #[inline]
    pub fn network_name(&self) -> &'static str {
        self.network_name
    }

    /// The detected network profile.
    pub fn network(&self) -> &'static CardNetworkProfile {
        crate::card::find(self.network_key).unwrap_or(&UNKNOWN)
    }

    /// Why the record was rejected, if it was.
    #[inline]
    pub fn rejection(&self) -> Option<&RejectionReason> {
        self.rejection.as_ref()
    }

    /// Expiry month, once the expiry check has passed.
    #[inline]
    pub fn exp_month(&self) -> Option<u8> {
        self.exp_month
    }

    /// Four-digit expiry year, once the expiry check has passed.
    #[inline]
    pub fn exp_year(&self) -> Option<u16> {
        self.exp_year
    }
}

/// Validates card records against a clock and configuration.
///
/// Cheap to clone; the clock is shared.
#[derive(Clone)]
pub struct Validator {
    config: ValidatorConfig,
    clock: Arc<dyn Clock>,
}

impl Validator {
    /// Creates a validator reading the system clock.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used for expiry checks.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Parses and validates one `NUMBER|MONTH|YEAR|CVV` line.
    ///
    /// # Example
    ///
    /// ```
    /// use card_checker::validate::Validator;
    /// use card_checker::expiry::{FixedClock, YearMonth};
    /// use card_checker::ValidatorConfig;
    ///
    /// let validator = Validator::new(ValidatorConfig::default())
    ///     .with_clock(FixedClock(YearMonth::new(2026, 10)));
    ///
    /// let verdict = validator.validate("4111111111111111|12|2030|123");
    /// assert!(verdict.is_valid());
    /// assert_eq!(verdict.network_key(), "visa");
    ///
    /// let verdict = validator.validate("4111111111111111|01|2020|123");
    /// assert_eq!(verdict.rejection().unwrap().to_string(), "Card expired");
    /// ```
    pub fn validate(&self, line: &str) -> ValidationVerdict {
        self.validate_record(&CardRecord::parse(line))
    }

    /// Validates an already parsed record.
    pub fn validate_record(&self, record: &CardRecord) -> ValidationVerdict {
        if record.number().is_empty() {
            return ValidationVerdict::rejected(&UNKNOWN, RejectionReason::MissingNumber);
        }

        let number = normalize(record.number());
        let digits = number.digits();

        if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
            return ValidationVerdict::rejected(
                &UNKNOWN,
                RejectionReason::InvalidLength {
                    length: digits.len(),
                },
            );
        }

        let network = detect_network(digits);

        if !is_structurally_plausible(digits) {
            return ValidationVerdict::rejected(network, RejectionReason::ImplausibleStructure);
        }

        if !luhn::validate(digits) {
            return ValidationVerdict::rejected(network, RejectionReason::FailedLuhn);
        }

        if !network.is_unknown() && !matches_bin_ranges(digits, network) {
            return ValidationVerdict::rejected(
                network,
                RejectionReason::InvalidBin {
                    network: network.key(),
                },
            );
        }

        let expiry = match validate_expiry(
            record.month(),
            record.year(),
            self.clock.today(),
            self.config.max_years_ahead,
        ) {
            Ok(expiry) => expiry,
            Err(e) => return ValidationVerdict::rejected(network, e.into()),
        };

        let mut verdict = match validate_cvv(record.cvv(), network) {
            Ok(()) => ValidationVerdict {
                valid: true,
                network_key: network.key(),
                network_name: network.name(),
                rejection: None,
                exp_month: None,
                exp_year: None,
            },
            Err(e) => ValidationVerdict::rejected(network, e.into()),
        };
        verdict.exp_month = Some(expiry.month());
        verdict.exp_year = Some(expiry.year());
        verdict
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .field("today", &self.clock.today())
            .finish()
    }
}

/// Validates one record line against the system clock and default settings.
///
/// # Example
///
/// ```
/// use card_checker::validate;
///
/// let verdict = validate("1111111111111111|12|2030|123");
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.rejection().unwrap().to_string(), "Invalid card structure");
/// ```
pub fn validate(line: &str) -> ValidationVerdict {
    Validator::default().validate(line)
}

/// Quick boolean form of [`validate`].
#[inline]
pub fn is_valid(line: &str) -> bool {
    validate(line).is_valid()
}

/// Checks only the Luhn checksum of a possibly formatted number.
///
/// ```
/// use card_checker::passes_luhn;
///
/// assert!(passes_luhn("4539 1488 0343 6467"));
/// assert!(!passes_luhn("4539 1488 0343 6468"));
/// ```
#[inline]
pub fn passes_luhn(number: &str) -> bool {
    luhn::validate(normalize(number).digits())
}
