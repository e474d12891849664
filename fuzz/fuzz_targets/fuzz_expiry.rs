//! Fuzz target for expiry validation.
//!
//! Tests that expiry checks never panic on arbitrary month and year fields.

#![no_main]

use card_checker::expiry::{validate_expiry, YearMonth};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str, u16, u8, u16)| {
    let (month, year, today_year, today_month, max_years_ahead) = input;
    let today = YearMonth::new(today_year, today_month % 12 + 1);

    if let Ok(expiry) = validate_expiry(month, year, today, max_years_ahead) {
        assert!((1..=12).contains(&expiry.month()));
        assert!(expiry.year() >= today.year());
        let _ = expiry.months_until(today);
        let _ = expiry.to_string();
    }
});
