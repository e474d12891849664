//! Batch processing example.
//!
//! Run with: `cargo run --example batch`

use card_checker::{stream::ValidateExt, BatchConfig, BatchProcessor};

#[tokio::main]
async fn main() {
    println!("=== Batch Card Record Validation ===\n");

    // Sample records (mix of valid and invalid)
    let lines = vec![
        "4111111111111111|12|2030|123", // Valid Visa
        "5500000000000004|06|29|456",   // Valid Mastercard
        "378282246310005|12|2030|1234", // Valid Amex
        "",                             // Blank, skipped
        "6011111111111117|01|31|789",   // Valid Discover
        "4111111111111112|12|2030|123", // Invalid (bad checksum)
        "invalid",                      // Invalid (not a number)
        "30569309025904|03|30|321",     // Valid Diners Club
        "3530111333300000|08|2029|654", // Valid JCB
    ];

    // Method 1: streaming, no simulated outcomes
    println!("Using ValidateExt:");
    for (record, verdict) in lines.iter().validate_records() {
        let status = match verdict.rejection() {
            None => "valid".to_string(),
            Some(reason) => reason.to_string(),
        };
        println!("  {:<22} {}", record.masked_number(), status);
    }
    println!();

    // Method 2: BatchProcessor with progress and simulated outcomes
    println!("Using BatchProcessor:");
    let processor = match BatchProcessor::new(BatchConfig {
        record_delay_ms: 50,
        ..BatchConfig::default()
    }) {
        Ok(processor) => processor,
        Err(e) => {
            eprintln!("bad config: {}", e);
            return;
        }
    };

    let state = processor
        .start(
            &lines,
            |state| println!("  progress {:>3}%", state.percent()),
            |result| {
                println!(
                    "  {} {} ({})",
                    result.outcome,
                    result.record.masked_number(),
                    result.verdict.network_name()
                )
            },
        )
        .await;

    if let Some(state) = state {
        println!();
        println!("  Total: {}", state.total);
        println!("  Valid: {}", state.valid_count);
        println!("  LIVE: {}", state.live_count);
        println!("  DEAD: {}", state.dead_count);
    }
}
