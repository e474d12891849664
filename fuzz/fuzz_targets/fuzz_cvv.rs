//! Fuzz target for CVV validation.
//!
//! Tests that CVV checks never panic and agree with the network rules.

#![no_main]

use card_checker::cvv::validate_cvv;
use card_checker::{card, NETWORKS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for network in NETWORKS.iter().copied().chain([&card::UNKNOWN]) {
        if validate_cvv(data, network).is_ok() {
            assert!(data.bytes().all(|b| b.is_ascii_digit()));
            assert!(network.accepts_cvv_length(data.len()));
        }
    }
});
