//! Iterator adapters for validating record lines as they arrive.
//!
//! Useful for large files or piped input where the whole batch should not be
//! held in memory. Unlike [`BatchProcessor`](crate::batch::BatchProcessor),
//! these adapters are synchronous and draw no simulated outcomes.
//!
//! Blank lines are skipped by every adapter.
//!
//! # Example
//!
//! ```
//! use card_checker::expiry::{FixedClock, YearMonth};
//! use card_checker::stream::ValidateExt;
//! use card_checker::Validator;
//!
//! let validator = Validator::default().with_clock(FixedClock(YearMonth::new(2026, 10)));
//! let lines = ["4111111111111111|12|2030|123", "", "4111111111111112|12|2030|123"];
//! let valid_count = lines
//!     .iter()
//!     .validate_records_with(&validator)
//!     .filter(|(_, verdict)| verdict.is_valid())
//!     .count();
//!
//! assert_eq!(valid_count, 1);
//! ```

use crate::record::{is_blank, CardRecord};
use crate::validate::{ValidationVerdict, Validator};

/// Yields each non-blank line parsed and validated.
///
/// Created by [`ValidateExt::validate_records`].
#[derive(Debug, Clone)]
pub struct ValidateStream<I> {
    inner: I,
    validator: Validator,
}

impl<I> ValidateStream<I> {
    /// Wraps `inner`, validating with `validator`.
    #[inline]
    pub fn new(inner: I, validator: Validator) -> Self {
        Self { inner, validator }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for ValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (CardRecord, ValidationVerdict);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find(|line| !is_blank(line.as_ref()))
            .map(|line| {
                let record = CardRecord::parse(line.as_ref());
                let verdict = self.validator.validate_record(&record);
                (record, verdict)
            })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Yields only records that pass validation.
///
/// Created by [`ValidateExt::validate_valid_only_with`].
#[derive(Debug, Clone)]
pub struct ValidOnlyStream<I> {
    inner: ValidateStream<I>,
}

impl<I, S> Iterator for ValidOnlyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (CardRecord, ValidationVerdict);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|(_, verdict)| verdict.is_valid())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Yields the zero-based input line index with each validated record.
///
/// Blank lines are skipped but still advance the index.
#[derive(Debug, Clone)]
pub struct IndexedValidateStream<I> {
    inner: I,
    validator: Validator,
    index: usize,
}

impl<I, S> Iterator for IndexedValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, CardRecord, ValidationVerdict);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.inner.next()?;
            let index = self.index;
            self.index += 1;

            let line = line.as_ref();
            if is_blank(line) {
                continue;
            }
            let record = CardRecord::parse(line);
            let verdict = self.validator.validate_record(&record);
            return Some((index, record, verdict));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Adds record validation to any iterator over string-like lines.
pub trait ValidateExt: Iterator + Sized {
    /// Validates each non-blank line with a default [`Validator`].
    fn validate_records(self) -> ValidateStream<Self> {
        self.validate_records_with(&Validator::default())
    }

    /// Validates each non-blank line with the given validator.
    ///
    /// ```
    /// use card_checker::stream::ValidateExt;
    /// use card_checker::expiry::{FixedClock, YearMonth};
    /// use card_checker::Validator;
    ///
    /// let validator = Validator::default().with_clock(FixedClock(YearMonth::new(2031, 1)));
    /// let (_, verdict) = ["4111111111111111|12|2030|123"]
    ///     .iter()
    ///     .validate_records_with(&validator)
    ///     .next()
    ///     .unwrap();
    /// assert_eq!(verdict.rejection().unwrap().to_string(), "Card expired");
    /// ```
    fn validate_records_with(self, validator: &Validator) -> ValidateStream<Self>;

    /// Validates and yields only the records that pass, using a default
    /// [`Validator`].
    fn validate_valid_only(self) -> ValidOnlyStream<Self> {
        self.validate_valid_only_with(&Validator::default())
    }

    /// Yields only the records that pass the given validator.
    fn validate_valid_only_with(self, validator: &Validator) -> ValidOnlyStream<Self> {
        ValidOnlyStream {
            inner: self.validate_records_with(validator),
        }
    }

    /// Validates with input line tracking, using a default [`Validator`].
    fn validate_indexed(self) -> IndexedValidateStream<Self> {
        self.validate_indexed_with(&Validator::default())
    }

    /// Validates with the given validator and input line tracking.
    ///
    /// ```
    /// use card_checker::expiry::{FixedClock, YearMonth};
    /// use card_checker::stream::ValidateExt;
    /// use card_checker::Validator;
    ///
    /// let validator = Validator::default().with_clock(FixedClock(YearMonth::new(2026, 10)));
    /// let lines = ["", "4111111111111111|12|2030|123"];
    /// let (index, _, verdict) = lines.iter().validate_indexed_with(&validator).next().unwrap();
    /// assert_eq!(index, 1);
    /// assert!(verdict.is_valid());
    /// ```
    fn validate_indexed_with(self, validator: &Validator) -> IndexedValidateStream<Self> {
        IndexedValidateStream {
            inner: self,
            validator: validator.clone(),
            index: 0,
        }
    }
}

impl<I: Iterator + Sized> ValidateExt for I {
    #[inline]
    fn validate_records_with(self, validator: &Validator) -> ValidateStream<Self> {
        ValidateStream::new(self, validator.clone())
    }
}
