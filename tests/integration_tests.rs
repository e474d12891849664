//! Integration tests for card_checker.
//!
//! These cover real-world test numbers, check ordering, and the safety of
//! everything that might end up in logs.

use card_checker::expiry::{ExpiryError, FixedClock, YearMonth};
use card_checker::{
    card, detect_network, mask, normalize, passes_luhn, stream::ValidateExt, CardRecord,
    RejectionReason, ValidationVerdict, Validator, ValidatorConfig,
};

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Official test numbers from payment processors. They pass Luhn validation
// but are not real cards.

mod test_cards {
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4012888888881881";
    pub const VISA_3: &str = "4222222222222"; // 13 digits
    pub const VISA_4: &str = "4000056655665556";
    pub const VISA_5: &str = "4539148803436467";

    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_2SERIES_1: &str = "2223000048400011";
    pub const MC_2SERIES_2: &str = "2223520043560014";

    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const AMEX_3: &str = "340000000000009";

    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";
    pub const DISCOVER_3: &str = "6445644564456445";

    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "38520000023237";
    pub const DINERS_3: &str = "36700102000000";

    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";
}

use test_cards::*;

fn validator() -> Validator {
    Validator::new(ValidatorConfig::default()).with_clock(FixedClock(YearMonth::new(2026, 10)))
}

fn check(number: &str, cvv: &str) -> ValidationVerdict {
    validator().validate(&format!("{}|12|2030|{}", number, cvv))
}

fn reason(line: &str) -> String {
    validator()
        .validate(line)
        .rejection()
        .map(ToString::to_string)
        .unwrap_or_default()
}

// =============================================================================
// VALID RECORDS
// =============================================================================

#[test]
fn test_all_visa_test_cards() {
    for number in [VISA_1, VISA_2, VISA_3, VISA_4, VISA_5] {
        let verdict = check(number, "123");
        assert!(verdict.is_valid(), "{} should be valid: {:?}", number, verdict);
        assert_eq!(verdict.network_key(), "visa");
    }
}

#[test]
fn test_all_mastercard_test_cards() {
    for number in [MC_1, MC_2, MC_2SERIES_1, MC_2SERIES_2] {
        let verdict = check(number, "123");
        assert!(verdict.is_valid(), "{} should be valid: {:?}", number, verdict);
        assert_eq!(verdict.network_key(), "mastercard");
    }
}

#[test]
fn test_all_amex_test_cards() {
    for number in [AMEX_1, AMEX_2, AMEX_3] {
        let verdict = check(number, "1234");
        assert!(verdict.is_valid(), "{} should be valid: {:?}", number, verdict);
        assert_eq!(verdict.network_name(), "American Express");
    }
}

#[test]
fn test_all_discover_diners_jcb_test_cards() {
    for (number, key) in [
        (DISCOVER_1, "discover"),
        (DISCOVER_2, "discover"),
        (DISCOVER_3, "discover"),
        (DINERS_1, "diners"),
        (DINERS_2, "diners"),
        (DINERS_3, "diners"),
        (JCB_1, "jcb"),
        (JCB_2, "jcb"),
    ] {
        let verdict = check(number, "123");
        assert!(verdict.is_valid(), "{} should be valid: {:?}", number, verdict);
        assert_eq!(verdict.network_key(), key);
    }
}

#[test]
fn test_regional_networks() {
    for (number, key) in [
        ("6200000000000005", "unionpay"),
        ("2200000000000004", "mir"),
        ("2200000000000000004", "mir"),
        ("8100000000000002", "rupay"),
        ("9792000000000003", "troy"),
        ("5000000000000009", "maestro"),
        ("580000000001", "maestro"),
        ("6759000000000000", "maestro"),
        ("6304000000000000", "maestro"),
    ] {
        let verdict = check(number, "123");
        assert!(verdict.is_valid(), "{} should be valid: {:?}", number, verdict);
        assert_eq!(verdict.network_key(), key);
    }
}

#[test]
fn test_unknown_network_is_accepted() {
    for number in ["9000000000000001", "1000000000000008", "7000000000000005"] {
        let verdict = check(number, "123");
        assert!(verdict.is_valid(), "{}: {:?}", number, verdict);
        assert_eq!(verdict.network_key(), card::UNKNOWN_KEY);
        assert_eq!(verdict.network_name(), "Unknown");
    }
}

#[test]
fn test_visa_prefix_with_wrong_length_is_unknown() {
    let verdict = check("40000000000002", "123");
    assert!(verdict.is_valid());
    assert_eq!(verdict.network_key(), "unknown");
}

// =============================================================================
// FORMATTING
// =============================================================================

#[test]
fn test_separators_are_ignored() {
    for number in [
        "4111-1111-1111-1111",
        "4111 1111 1111 1111",
        "4111.1111.1111.1111",
        " 4111  1111-1111 1111 ",
    ] {
        assert!(check(number, "123").is_valid(), "{}", number);
    }
}

#[test]
fn test_letters_are_stripped() {
    // Normalization keeps digits only, so stray letters do not reject on their own
    assert!(check("4111x1111y1111z1111", "123").is_valid());
}

#[test]
fn test_field_whitespace() {
    let verdict = validator().validate("  4111111111111111  |  12 |  2030 | 123  ");
    assert!(verdict.is_valid());
}

// =============================================================================
// REJECTION ORDER
// =============================================================================

#[test]
fn test_rejection_messages() {
    assert_eq!(reason(""), "Missing card number");
    assert_eq!(reason("|12|2030|123"), "Missing card number");
    assert_eq!(reason("12345|12|2030|123"), "Invalid card length");
    assert_eq!(reason("0000000000000000|12|2030|123"), "Invalid card structure");
    assert_eq!(reason("4747474747474747|12|2030|123"), "Invalid card structure");
    assert_eq!(reason("1234567890123456|12|2030|123"), "Failed Luhn check");
    assert_eq!(reason("2205000000000009|12|2030|123"), "Invalid BIN/IIN");
    assert_eq!(reason("4111111111111111||2030|123"), "Missing expiration date");
    assert_eq!(reason("4111111111111111|00|2030|123"), "Invalid month");
    assert_eq!(reason("4111111111111111|12|20x0|123"), "Invalid year");
    assert_eq!(reason("4111111111111111|12|203|123"), "Invalid year format");
    assert_eq!(reason("4111111111111111|09|2026|123"), "Card expired");
    assert_eq!(reason("4111111111111111|12|2037|123"), "Expiry too far in future");
    assert_eq!(reason("4111111111111111|12|2030|12a"), "Invalid CVV");
}

#[test]
fn test_bin_failures_per_network() {
    for (number, key) in [
        ("2205000000000009", "mir"),
        ("6700000000000000", "maestro"),
        ("2721000000000004", "mastercard"),
        ("3500000000000009", "jcb"),
        ("30600000000001", "diners"),
    ] {
        let verdict = check(number, "123");
        assert_eq!(
            verdict.rejection(),
            Some(&RejectionReason::InvalidBin { network: key }),
            "{}",
            number
        );
        assert_eq!(verdict.network_key(), key);
    }
}

#[test]
fn test_first_failure_wins() {
    // Bad Luhn and expired and bad CVV: Luhn is reported
    assert_eq!(reason("4111111111111112|01|2020|"), "Failed Luhn check");
    // Expired and bad CVV: expiry is reported
    assert_eq!(reason("4111111111111111|01|2020|"), "Card expired");
}

#[test]
fn test_expiry_boundaries() {
    let v = validator();
    assert!(v.validate("4111111111111111|10|2026|123").is_valid());
    assert!(v.validate("4111111111111111|12|2036|123").is_valid());
    assert_eq!(
        v.validate("4111111111111111|01|36|123").exp_year(),
        Some(2036)
    );
    assert!(matches!(
        v.validate("4111111111111111|01|2037|123").rejection(),
        Some(RejectionReason::Expiry(ExpiryError::TooFarFuture {
            year: 2037,
            max_year: 2036
        }))
    ));
}

#[test]
fn test_cvv_length_follows_network() {
    assert!(check(AMEX_1, "1234").is_valid());
    assert!(!check(AMEX_1, "123").is_valid());
    assert!(!check(VISA_1, "1234").is_valid());
    assert!(check("1000000000000008", "123").is_valid());
    assert!(!check("1000000000000008", "1234").is_valid());
}

#[test]
fn test_extra_fields_ignored() {
    assert!(validator()
        .validate("4111111111111111|12|2030|123|John Doe|extra")
        .is_valid());
}

// =============================================================================
// PRIMITIVES
// =============================================================================

#[test]
fn test_passes_luhn_ignores_other_checks() {
    // Tiled and unknown-length numbers still pass the bare checksum
    assert!(passes_luhn("4242424242424242"));
    assert!(passes_luhn("378282246310005"));
    assert!(!passes_luhn("378282246310006"));
}

#[test]
fn test_detect_network_on_partial_input() {
    assert_eq!(detect_network(normalize("4111").digits()).key(), "unknown");
    assert_eq!(detect_network(normalize(VISA_1).digits()).key(), "visa");
    assert_eq!(detect_network(normalize(AMEX_1).digits()).key(), "amex");
}

#[test]
fn test_network_lookup() {
    let visa = card::find("visa").unwrap();
    assert_eq!(visa.name(), "Visa");
    assert!(card::find("unknown").unwrap().is_unknown());
    assert!(card::find("nope").is_none());
}

// =============================================================================
// STREAMING
// =============================================================================

#[test]
fn test_stream_over_file_contents() {
    let contents = "4111111111111111|12|2030|123\n\n378282246310005|12|2030|123\n  \n";
    let results: Vec<_> = contents
        .lines()
        .validate_records_with(&validator())
        .map(|(_, verdict)| verdict.is_valid())
        .collect();
    assert_eq!(results, vec![true, false]);
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_debug_never_exposes_number_or_cvv() {
    let record = CardRecord::parse("4111111111111111|12|2030|987");
    let debug = format!("{:?}", record);
    assert!(!debug.contains("4111111111111111"));
    assert!(!debug.contains("987"));

    let number = normalize("4111111111111111");
    assert!(!format!("{:?}", number).contains("4111111111111111"));
}

#[test]
fn test_verdict_carries_no_number() {
    let verdict = check(VISA_1, "123");
    let debug = format!("{:?}", verdict);
    assert!(!debug.contains(VISA_1));
}

#[test]
fn test_masking() {
    assert_eq!(mask::mask_string(VISA_1), "****-****-****-1111");
    assert_eq!(mask::mask_with_bin(VISA_1), "411111******1111");
    assert_eq!(mask::last_four(AMEX_1), "0005");
}

#[test]
fn test_adversarial_input_never_panics() {
    let v = validator();
    for line in [
        "|||||||",
        "\u{0}\u{0}|\u{0}|\u{0}|\u{0}",
        "🙂🙂🙂|🙂|🙂|🙂",
        "4111111111111111|255|65535|123",
        "4111111111111111|99999999999999999999|2030|123",
        "4111111111111111|12|99999999999999999999|123",
        "٤١١١١١١١١١١١١١١١|12|2030|123",
    ] {
        let verdict = v.validate(line);
        assert!(!verdict.is_valid(), "{:?}", line);
        assert!(verdict.rejection().is_some());
    }
}
