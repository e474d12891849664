//! Pipe-delimited card record parsing.
//!
//! One record per line: `NUMBER|MONTH|YEAR|CVV`. Fields are trimmed, missing
//! trailing fields become empty strings, and anything past the fourth field
//! is ignored. Parsing never fails; downstream checks decide what is missing.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::mask::mask_string;

/// Field separator.
pub const FIELD_SEPARATOR: char = '|';

/// One raw card record.
///
/// The number and CVV are zeroed on drop and never shown in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CardRecord {
    raw_line: String,
    number: String,
    month: String,
    year: String,
    cvv: String,
}

impl CardRecord {
    /// Parses a `NUMBER|MONTH|YEAR|CVV` line.
    ///
    /// # Example
    ///
    /// ```
    /// use card_checker::record::CardRecord;
    ///
    /// let record = CardRecord::parse(" 4111 1111 1111 1111 | 12 | 2030 ");
    /// assert_eq!(record.month(), "12");
    /// assert_eq!(record.year(), "2030");
    /// assert_eq!(record.cvv(), "");
    /// ```
    pub fn parse(line: &str) -> Self {
        let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
        let mut next = || fields.next().unwrap_or_default().to_string();

        let number = next();
        let month = next();
        let year = next();
        let cvv = next();

        Self {
            raw_line: line.to_string(),
            number,
            month,
            year,
            cvv,
        }
    }

    /// The line as given.
    ///
    /// # Security Warning
    ///
    /// Contains the full card number and CVV.
    #[inline]
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// The number field, trimmed but not normalized.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The month field.
    #[inline]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// The year field.
    #[inline]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The CVV field.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Number with all but the last four digits masked.
    pub fn masked_number(&self) -> String {
        mask_string(&self.number)
    }
}

impl fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRecord")
            .field("number", &self.masked_number())
            .field("month", &self.month)
            .field("year", &self.year)
            .field("cvv", &"***")
            .finish()
    }
}

/// Returns true if the line holds nothing but whitespace.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
