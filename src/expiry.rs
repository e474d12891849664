//! Card expiration date validation.
//!
//! Records carry month and year as separate fields. The year may be two or
//! four digits; two-digit years are taken as `20YY`. A card is good through
//! the last day of its expiry month.
//!
//! The current date comes from a [`Clock`], so tests can pin "today".
//!
//! # Example
//!
//! ```
//! use card_checker::expiry::{validate_expiry, ExpiryError, YearMonth};
//!
//! let today = YearMonth::new(2026, 10);
//!
//! let expiry = validate_expiry("12", "30", today, 10).unwrap();
//! assert_eq!(expiry.month(), 12);
//! assert_eq!(expiry.year(), 2030);
//!
//! assert_eq!(
//!     validate_expiry("09", "2026", today, 10),
//!     Err(ExpiryError::Expired { month: 9, year: 2026 })
//! );
//! ```

use chrono::Datelike;
use std::fmt;
use thiserror::Error;

/// Default cap on how many years ahead an expiry may be.
pub const DEFAULT_MAX_YEARS_AHEAD: u16 = 10;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair. `month` is expected to be 1-12.
    pub const fn new(year: u16, month: u8) -> Self {
        Self { year, month }
    }

    /// Four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }
}

/// Source of the current calendar month.
pub trait Clock: Send + Sync {
    /// Returns the current year and month.
    fn today(&self) -> YearMonth;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> YearMonth {
        let now = chrono::Local::now();
        YearMonth::new(now.year().clamp(0, u16::MAX as i32) as u16, now.month() as u8)
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub YearMonth);

impl Clock for FixedClock {
    fn today(&self) -> YearMonth {
        self.0
    }
}

/// A parsed, in-range expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpiryDate {
    month: u8,
    year: u16,
}

impl ExpiryDate {
    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the number of months from `today` until expiry.
    ///
    /// Returns 0 if already in or past the expiry month.
    pub fn months_until(&self, today: YearMonth) -> u32 {
        let expiry_months = (self.year as u32) * 12 + (self.month as u32);
        let current_months = (today.year as u32) * 12 + (today.month as u32);
        expiry_months.saturating_sub(current_months)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// Why an expiry date was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpiryError {
    /// Month or year field is empty.
    #[error("Missing expiration date")]
    Missing,

    /// Month is not an integer in 1-12.
    #[error("Invalid month")]
    InvalidMonth,

    /// Year is not an integer.
    #[error("Invalid year")]
    InvalidYear,

    /// Year is neither two nor four digits long.
    #[error("Invalid year format")]
    InvalidYearFormat,

    /// The expiry month is already behind us.
    #[error("Card expired")]
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },

    /// The expiry year is beyond the allowed horizon.
    #[error("Expiry too far in future")]
    TooFarFuture {
        /// The expiry year.
        year: u16,
        /// Latest accepted year.
        max_year: u16,
    },
}

/// Validates month and year fields against `today`.
///
/// Checks run in a fixed order: presence, month, year, year width, expired,
/// horizon. A year more than `max_years_ahead` past the current year is
/// rejected.
pub fn validate_expiry(
    month: &str,
    year: &str,
    today: YearMonth,
    max_years_ahead: u16,
) -> Result<ExpiryDate, ExpiryError> {
    let month = month.trim();
    let year = year.trim();

    if month.is_empty() || year.is_empty() {
        return Err(ExpiryError::Missing);
    }

    let month: u8 = match month.parse() {
        Ok(m @ 1..=12) => m,
        _ => return Err(ExpiryError::InvalidMonth),
    };

    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExpiryError::InvalidYear);
    }
    let value: u16 = match year.len() {
        2 | 4 => year.parse().map_err(|_| ExpiryError::InvalidYear)?,
        _ => return Err(ExpiryError::InvalidYearFormat),
    };
    let year = if year.len() == 2 { 2000 + value } else { value };

    if year < today.year || (year == today.year && month < today.month) {
        return Err(ExpiryError::Expired { month, year });
    }

    let max_year = today.year.saturating_add(max_years_ahead);
    if year > max_year {
        return Err(ExpiryError::TooFarFuture { year, max_year });
    }

    Ok(ExpiryDate { month, year })
}
