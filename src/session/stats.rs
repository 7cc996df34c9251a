//! End-of-session statistics
//!
//! Reports elapsed time, the share of correct answers and, when any answer
//! was missed, an adjusted time that adds a fixed penalty per miss.

use std::time::Duration;

/// Seconds added to the adjusted time for every incorrect answer
pub const PENALTY_SECS_PER_MISS: f64 = 5.0;

/// Summary of a counted drill session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStats {
    /// Wall-clock time from session start to the last round
    pub elapsed: Duration,
    pub correct: u32,
    /// Configured number of rounds, even if the session ended early
    pub total: u32,
}

impl SessionStats {
    pub fn new(elapsed: Duration, correct: u32, total: u32) -> Self {
        SessionStats {
            elapsed,
            correct,
            total,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Percentage of correct answers (0.0-100.0)
    pub fn percent_correct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.correct as f64 / self.total as f64
    }

    pub fn misses(&self) -> u32 {
        self.total.saturating_sub(self.correct)
    }

    /// Elapsed seconds plus the miss penalty, or `None` for a perfect score
    pub fn adjusted_secs(&self) -> Option<f64> {
        if self.correct >= self.total {
            return None;
        }
        Some(self.elapsed_secs() + PENALTY_SECS_PER_MISS * self.misses() as f64)
    }
}
