//! # card_checker
//!
//! Structural validation of pipe-delimited payment-card records, with a
//! simulated LIVE/DEAD label for demonstration batches.
//!
//! A record is one line of the form `NUMBER|MONTH|YEAR|CVV`. Nothing here
//! contacts a payment processor: a "valid" verdict means the record is well
//! formed, and the LIVE/DEAD label is a weighted coin flip.
//!
//! ## Features
//!
//! - Number normalization and structural plausibility checks
//! - Network detection over 11 networks, with BIN range checks
//! - Luhn checksum validation
//! - Expiry and network-aware CVV validation
//! - Async batch processing with progress callbacks and cooperative stop
//! - Iterator adapters for streaming input
//! - Masking for display and logging
//!
//! ## Quick Start
//!
//! ```rust
//! use card_checker::{is_valid, Validator};
//! use card_checker::expiry::{FixedClock, YearMonth};
//!
//! let validator = Validator::default().with_clock(FixedClock(YearMonth::new(2026, 10)));
//! let verdict = validator.validate("4111 1111 1111 1111|12|2030|123");
//! assert!(verdict.is_valid());
//! assert_eq!(verdict.network_name(), "Visa");
//! assert_eq!(verdict.exp_year(), Some(2030));
//!
//! // Rejections carry a reason
//! let verdict = validator.validate("4111111111111112|12|2030|123");
//! assert_eq!(verdict.rejection().unwrap().to_string(), "Failed Luhn check");
//!
//! // The free functions use the system clock
//! assert!(!is_valid("|12|2030|123"));
//! ```
//!
//! ## Deterministic Dates
//!
//! ```rust
//! use card_checker::{Validator, ValidatorConfig};
//! use card_checker::expiry::{FixedClock, YearMonth};
//!
//! let validator = Validator::new(ValidatorConfig::default())
//!     .with_clock(FixedClock(YearMonth::new(2026, 10)));
//!
//! assert!(validator.validate("5500000000000004|10|26|123").is_valid());
//! assert!(!validator.validate("5500000000000004|09|26|123").is_valid());
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use card_checker::{BatchConfig, BatchProcessor, Validator};
//! use card_checker::expiry::{FixedClock, YearMonth};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let validator = Validator::default().with_clock(FixedClock(YearMonth::new(2026, 10)));
//! let config = BatchConfig { seed: Some(1), ..BatchConfig::default() };
//! let processor = BatchProcessor::with_validator(validator, config).unwrap();
//! let lines = ["4111111111111111|12|2030|123", "378282246310005|12|2030|1234"];
//!
//! let state = processor
//!     .start(
//!         &lines,
//!         |state| println!("{}%", state.percent()),
//!         |result| println!("{} {}", result.record.masked_number(), result.outcome),
//!     )
//!     .await
//!     .unwrap();
//!
//! assert_eq!(state.valid_count, 2);
//! # });
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for verdicts, states and config |
//! | `json` | JSON configuration loading |
//! | `cli` | The `cardchecker` command-line tool |
//!
//! ## Security
//!
//! - Numbers and records are zeroized on drop
//! - `Debug` output shows masked numbers only and never the CVV
//! - Logs carry masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod bin_range;
pub mod card;
pub mod config;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod outcome;
pub mod record;
pub mod stream;
pub mod structure;
pub mod validate;

// Re-export main types at crate root
pub use batch::{BatchHandle, BatchProcessor, BatchResult, BatchState};
pub use card::{CardNetworkProfile, MAX_CARD_DIGITS, MIN_CARD_DIGITS, NETWORKS};
pub use config::{BatchConfig, CheckerConfig, ValidatorConfig};
pub use detect::detect_network;
pub use error::{ConfigError, RejectionReason};
pub use normalize::normalize;
pub use outcome::{simulate_status, SimulatedOutcome};
pub use record::CardRecord;
pub use validate::{is_valid, passes_luhn, validate, ValidationVerdict, Validator};

pub use mask::mask_string;
