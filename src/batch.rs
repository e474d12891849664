//! Batch processing with progress reporting and cooperative cancellation.
//!
//! A [`BatchProcessor`] walks a list of record lines in order, validates each
//! one, and labels every valid record with a simulated LIVE/DEAD outcome.
//! Between records it suspends once, either a bare yield or the configured
//! delay, so a caller sharing the runtime can observe progress and request a
//! stop.
//!
//! One processor runs at most one batch at a time. A second `start` while a
//! batch is running is rejected and leaves the running batch untouched.
//! Separate processors never interfere with each other.
//!
//! # Example
//!
//! ```
//! use card_checker::batch::BatchProcessor;
//! use card_checker::expiry::{FixedClock, YearMonth};
//! use card_checker::{BatchConfig, Validator};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let validator = Validator::default().with_clock(FixedClock(YearMonth::new(2026, 10)));
//! let processor = BatchProcessor::with_validator(validator, BatchConfig::default()).unwrap();
//! let lines = ["4111111111111111|12|2030|123", "", "4111111111111112|12|2030|123"];
//!
//! let state = processor
//!     .start(&lines, |_progress| {}, |result| println!("{}", result.outcome))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(state.processed, 3);
//! assert_eq!(state.valid_count, 1);
//! assert_eq!(state.live_count + state.dead_count, 1);
//! # });
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::BatchConfig;
use crate::error::ConfigError;
use crate::outcome::SimulatedOutcome;
use crate::record::{is_blank, CardRecord};
use crate::validate::{ValidationVerdict, Validator};

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchState {
    /// Number of input lines, blanks included.
    pub total: usize,
    /// Lines handled so far, blanks included.
    pub processed: usize,
    /// Records that passed validation.
    pub valid_count: usize,
    /// Valid records labelled LIVE.
    pub live_count: usize,
    /// Valid records labelled DEAD.
    pub dead_count: usize,
    /// True until the run completes or is cancelled.
    pub running: bool,
}

impl BatchState {
    fn started(total: usize) -> Self {
        Self {
            total,
            running: true,
            ..Self::default()
        }
    }

    /// Lines handled that did not pass validation, blanks included.
    #[inline]
    pub fn invalid_count(&self) -> usize {
        self.processed - self.valid_count
    }

    /// Completion percentage, rounded down. An empty batch is 100% done.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (self.processed * 100 / self.total) as u8
    }

    /// True if the run stopped before every line was handled.
    #[inline]
    pub fn was_cancelled(&self) -> bool {
        !self.running && self.processed < self.total
    }
}

/// A valid record together with its simulated outcome.
#[derive(Debug, Clone, Copy)]
pub struct BatchResult<'a> {
    /// The parsed record.
    pub record: &'a CardRecord,
    /// Its verdict, always valid.
    pub verdict: &'a ValidationVerdict,
    /// Simulated status.
    pub outcome: SimulatedOutcome,
    /// Completion percentage including this record.
    pub progress: u8,
}

#[derive(Debug, Default)]
struct BatchControl {
    running: AtomicBool,
    cancel: AtomicBool,
}

/// Clears the run flags when a run ends, however it ends.
struct RunGuard<'a>(&'a BatchControl);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.cancel.store(false, Ordering::SeqCst);
        self.0.running.store(false, Ordering::SeqCst);
    }
}

/// A cloneable handle for stopping a batch from elsewhere.
#[derive(Debug, Clone)]
pub struct BatchHandle {
    control: Arc<BatchControl>,
}

impl BatchHandle {
    /// Requests cancellation. Takes effect before the next record; does
    /// nothing when no batch is running.
    pub fn stop(&self) {
        if self.control.running.load(Ordering::SeqCst) {
            self.control.cancel.store(true, Ordering::SeqCst);
        }
    }

    /// Returns true while a batch is running.
    pub fn is_running(&self) -> bool {
        self.control.running.load(Ordering::SeqCst)
    }
}

/// Runs batches of record lines.
#[derive(Debug)]
pub struct BatchProcessor {
    validator: Validator,
    config: BatchConfig,
    rng: Mutex<StdRng>,
    control: Arc<BatchControl>,
}

impl BatchProcessor {
    /// Creates a processor with a default [`Validator`].
    pub fn new(config: BatchConfig) -> Result<Self, ConfigError> {
        Self::with_validator(Validator::default(), config)
    }

    /// Creates a processor around the given validator.
    pub fn with_validator(validator: Validator, config: BatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            validator,
            config,
            rng: Mutex::new(rng),
            control: Arc::default(),
        })
    }

    /// The batch configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// The validator applied to each record.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// A handle that can stop the running batch.
    pub fn handle(&self) -> BatchHandle {
        BatchHandle {
            control: Arc::clone(&self.control),
        }
    }

    /// Requests cancellation of the running batch.
    pub fn stop(&self) {
        self.handle().stop();
    }

    /// Returns true while a batch is running.
    pub fn is_running(&self) -> bool {
        self.control.running.load(Ordering::SeqCst)
    }

    /// Processes `lines` in order and returns the final state.
    ///
    /// `on_progress` is called after every non-blank line with the current
    /// counters. `on_result` is called once per valid record, before the
    /// matching progress call. Blank lines count as processed but trigger
    /// neither callback.
    ///
    /// Returns `None` without touching anything if a batch is already running
    /// on this processor.
    pub async fn start<S, P, R>(
        &self,
        lines: &[S],
        mut on_progress: P,
        mut on_result: R,
    ) -> Option<BatchState>
    where
        S: AsRef<str>,
        P: FnMut(&BatchState),
        R: FnMut(BatchResult<'_>),
    {
        if self
            .control
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("batch already running, start request ignored");
            return None;
        }
        self.control.cancel.store(false, Ordering::SeqCst);
        let _guard = RunGuard(&self.control);

        let mut state = BatchState::started(lines.len());
        info!(total = state.total, "batch started");

        for line in lines {
            if self.control.cancel.load(Ordering::SeqCst) {
                state.running = false;
                info!(
                    processed = state.processed,
                    total = state.total,
                    "batch cancelled"
                );
                return Some(state);
            }

            let line = line.as_ref();
            if is_blank(line) {
                state.processed += 1;
                continue;
            }

            let record = CardRecord::parse(line);
            let verdict = self.validator.validate_record(&record);
            state.processed += 1;

            if verdict.is_valid() {
                state.valid_count += 1;
                let outcome = self.draw_outcome();
                match outcome {
                    SimulatedOutcome::Live => state.live_count += 1,
                    SimulatedOutcome::Dead => state.dead_count += 1,
                }
                debug!(
                    card = %record.masked_number(),
                    network = verdict.network_key(),
                    %outcome,
                    "record valid"
                );
                on_result(BatchResult {
                    record: &record,
                    verdict: &verdict,
                    outcome,
                    progress: state.percent(),
                });
            } else {
                debug!(
                    card = %record.masked_number(),
                    reason = %verdict.rejection().map(ToString::to_string).unwrap_or_default(),
                    "record rejected"
                );
            }

            on_progress(&state);
            self.pause().await;
        }

        state.running = false;
        info!(
            total = state.total,
            valid = state.valid_count,
            live = state.live_count,
            dead = state.dead_count,
            "batch finished"
        );
        Some(state)
    }

    fn draw_outcome(&self) -> SimulatedOutcome {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        SimulatedOutcome::draw(&mut *rng, self.config.live_probability)
    }

    async fn pause(&self) {
        let delay = self.config.record_delay();
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}
