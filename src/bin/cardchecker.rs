//! CLI tool for card record checking.
//!
//! # Usage
//!
//! ```bash
//! # Validate one record
//! cardchecker validate "4111111111111111|12|2030|123"
//!
//! # Run a batch from a file (or `-` for stdin), one record per line
//! cardchecker batch cards.txt --delay-ms 100 --seed 42
//!
//! # Detect the network of a number
//! cardchecker detect 4111111111111111
//!
//! # Check only the Luhn checksum
//! cardchecker luhn 4111111111111111
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use card_checker::{
    detect_network, mask, normalize, passes_luhn, BatchProcessor, BatchResult, BatchState,
    CheckerConfig, Validator,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardchecker")]
#[command(author, version, about = "Payment card record checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one NUMBER|MONTH|YEAR|CVV record
    Validate {
        /// Record line to validate
        line: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a file of records and label valid ones LIVE or DEAD
    Batch {
        /// Input file, or `-` for stdin
        input: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pause after each record, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for repeatable LIVE/DEAD labels
        #[arg(long)]
        seed: Option<u64>,

        /// Probability of a LIVE label
        #[arg(long)]
        live_probability: Option<f64>,
    },

    /// Detect the network of a card number
    Detect {
        /// Card number (spaces and dashes allowed)
        card_number: String,
    },

    /// Check if a card number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Mask a card number
    Mask {
        /// Card number to mask
        card_number: String,

        /// Include BIN (first 6 digits)
        #[arg(short, long)]
        with_bin: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            line,
            output,
            config,
        } => cmd_validate(&line, output, config.as_deref()),
        Commands::Batch {
            input,
            output,
            config,
            delay_ms,
            seed,
            live_probability,
        } => {
            let overrides = BatchOverrides {
                delay_ms,
                seed,
                live_probability,
            };
            cmd_batch(&input, output, config.as_deref(), overrides).await
        }
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Mask {
            card_number,
            with_bin,
        } => cmd_mask(&card_number, with_bin),
    }
}

fn load_config(path: Option<&Path>) -> Result<CheckerConfig, String> {
    let Some(path) = path else {
        return Ok(CheckerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    CheckerConfig::from_json_str(&text).map_err(|e| e.to_string())
}

fn cmd_validate(line: &str, output: OutputFormat, config: Option<&Path>) -> ExitCode {
    let config = match load_config(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let verdict = Validator::new(config.validator).validate(line);

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if verdict.is_valid() { "yes" } else { "no" });
            println!("Network: {}", verdict.network_name());
            if let (Some(month), Some(year)) = (verdict.exp_month(), verdict.exp_year()) {
                println!("Expiry: {:02}/{}", month, year);
            }
            if let Some(reason) = verdict.rejection() {
                println!("Reason: {}", reason);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&verdict) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
    }

    if verdict.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

struct BatchOverrides {
    delay_ms: Option<u64>,
    seed: Option<u64>,
    live_probability: Option<f64>,
}

fn read_lines(input: &str) -> std::io::Result<Vec<String>> {
    let mut text = String::new();
    if input == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = std::fs::read_to_string(input)?;
    }
    Ok(text.lines().map(str::to_owned).collect())
}

async fn cmd_batch(
    input: &str,
    output: OutputFormat,
    config: Option<&Path>,
    overrides: BatchOverrides,
) -> ExitCode {
    let mut config = match load_config(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Some(delay_ms) = overrides.delay_ms {
        config.batch.record_delay_ms = delay_ms;
    }
    if let Some(seed) = overrides.seed {
        config.batch.seed = Some(seed);
    }
    if let Some(p) = overrides.live_probability {
        config.batch.live_probability = p;
    }

    let processor =
        match BatchProcessor::with_validator(Validator::new(config.validator), config.batch) {
            Ok(processor) => processor,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        };

    let lines = match read_lines(input) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", input, e);
            return ExitCode::from(2);
        }
    };

    let handle = processor.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.stop();
        }
    });

    let on_progress = |state: &BatchState| {
        if matches!(output, OutputFormat::Text) {
            eprint!("\r{}/{} ({}%)", state.processed, state.total, state.percent());
        }
    };
    let on_result = |result: BatchResult<'_>| print_result(&result, output);

    let Some(state) = processor.start(&lines, on_progress, on_result).await else {
        eprintln!("Error: a batch is already running");
        return ExitCode::from(2);
    };

    match output {
        OutputFormat::Text => {
            eprintln!();
            if state.was_cancelled() {
                println!("Stopped after {} of {} lines", state.processed, state.total);
            }
            println!(
                "Total: {}  Valid: {}  Invalid: {}  LIVE: {}  DEAD: {}",
                state.total,
                state.valid_count,
                state.invalid_count(),
                state.live_count,
                state.dead_count
            );
        }
        OutputFormat::Json => match serde_json::to_string(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
    }

    ExitCode::SUCCESS
}

fn print_result(result: &BatchResult<'_>, output: OutputFormat) {
    let expiry = match (result.verdict.exp_month(), result.verdict.exp_year()) {
        (Some(month), Some(year)) => format!("{:02}/{}", month, year),
        _ => String::new(),
    };

    match output {
        OutputFormat::Text => {
            println!(
                "\r{} | {} | {} | {}",
                result.outcome,
                result.record.masked_number(),
                result.verdict.network_name(),
                expiry
            );
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "status": result.outcome,
                "card": result.record.masked_number(),
                "network": result.verdict.network_key(),
                "expiry": expiry,
                "progress": result.progress,
            });
            println!("{}", value);
        }
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    let number = normalize(card_number);
    let network = detect_network(number.digits());

    println!("Network: {}", network.name());
    println!("Key: {}", network.key());
    if !network.is_unknown() {
        println!("Valid lengths: {:?}", network.accepted_lengths());
        println!("CVV lengths: {:?}", network.cvv_lengths());
    }

    if network.is_unknown() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_mask(card_number: &str, with_bin: bool) -> ExitCode {
    let masked = if with_bin {
        mask::mask_with_bin(card_number)
    } else {
        mask::mask_string(card_number)
    };
    println!("{}", masked);
    ExitCode::SUCCESS
}
