//! Simulated LIVE/DEAD outcomes.
//!
//! The label is a coin flip for demonstration. It carries no information about
//! the card and no authorization is attempted.

use rand::Rng;
use std::fmt;

/// Default probability that a valid record is labelled LIVE.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.2;

/// Simulated status of a structurally valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SimulatedOutcome {
    /// Labelled live.
    Live,
    /// Labelled dead.
    Dead,
}

impl SimulatedOutcome {
    /// Draws an outcome, LIVE with probability `live_probability`.
    ///
    /// # Panics
    ///
    /// Panics if `live_probability` is outside `[0, 1]`; `BatchConfig::validate`
    /// rejects such values up front.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, live_probability: f64) -> Self {
        if rng.gen_bool(live_probability) {
            Self::Live
        } else {
            Self::Dead
        }
    }

    /// Upper-case label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Dead => "DEAD",
        }
    }
}

impl fmt::Display for SimulatedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draws an outcome from the thread RNG at the default rate.
///
/// ```
/// use card_checker::outcome::{simulate_status, SimulatedOutcome};
///
/// let status = simulate_status();
/// assert!(matches!(status, SimulatedOutcome::Live | SimulatedOutcome::Dead));
/// ```
pub fn simulate_status() -> SimulatedOutcome {
    SimulatedOutcome::draw(&mut rand::thread_rng(), DEFAULT_LIVE_PROBABILITY)
}
