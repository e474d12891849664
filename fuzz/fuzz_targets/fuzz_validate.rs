//! Fuzz target for record validation.
//!
//! Tests that validate() never panics and always explains a rejection.

#![no_main]

use card_checker::expiry::{FixedClock, YearMonth};
use card_checker::{is_valid, passes_luhn, validate, CardRecord, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let verdict = validate(data);
    assert_eq!(verdict.is_valid(), verdict.rejection().is_none());
    let _ = is_valid(data);
    let _ = passes_luhn(data);

    let validator = Validator::default().with_clock(FixedClock(YearMonth::new(2026, 10)));
    let record = CardRecord::parse(data);
    let verdict = validator.validate_record(&record);
    if verdict.is_valid() {
        assert!(verdict.exp_month().is_some());
        assert!(verdict.exp_year().is_some());
    }

    // Debug output must never carry the raw number
    let number = card_checker::normalize(record.number()).as_string();
    if number.len() > 4 {
        assert!(!format!("{:?}", record).contains(&number));
    }
});
