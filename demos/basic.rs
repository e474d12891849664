//! Basic card record validation example.
//!
//! Run with: `cargo run --example basic`

use card_checker::{is_valid, mask, validate};

fn main() {
    println!("=== Basic Card Record Validation ===\n");

    // Example 1: Validate one record
    let line = "4111-1111-1111-1111|12|2030|123";
    println!("Validating: {}", mask::mask_string(line.split('|').next().unwrap_or_default()));

    let verdict = validate(line);
    println!("  Valid: {}", if verdict.is_valid() { "yes" } else { "no" });
    println!("  Network: {}", verdict.network_name());
    if let (Some(month), Some(year)) = (verdict.exp_month(), verdict.exp_year()) {
        println!("  Expiry: {:02}/{}", month, year);
    }
    println!();

    // Example 2: Quick boolean checks
    let records = [
        ("4111111111111111|12|2030|123", "Visa"),
        ("5500000000000004|06|29|456", "Mastercard"),
        ("378282246310005|12|2030|1234", "Amex"),
        ("6011111111111117|01|31|789", "Discover"),
        ("4111111111111112|12|2030|123", "Invalid (bad checksum)"),
    ];

    println!("Quick validation checks:");
    for (line, label) in records {
        println!("  {:<25} {}", label, if is_valid(line) { "valid" } else { "invalid" });
    }
    println!();

    // Example 3: Rejection reasons, in check order
    let rejected = [
        "|12|2030|123",
        "4111|12|2030|123",
        "4242424242424242|12|2030|123",
        "4111111111111112|12|2030|123",
        "2205000000000009|12|2030|123",
        "4111111111111111|13|2030|123",
        "4111111111111111|01|2020|123",
        "4111111111111111|12|2099|123",
        "378282246310005|12|2030|123",
    ];

    println!("Rejection reasons:");
    for line in rejected {
        let verdict = validate(line);
        let reason = verdict.rejection().map(ToString::to_string).unwrap_or_default();
        println!("  {:<20} {}", verdict.network_name(), reason);
    }
}
