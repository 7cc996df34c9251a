//! Session state tracking
//!
//! Maintains:
//! - Runner options (round limit, repeat, color, centering, exit word)
//! - The entry currently being asked and whether the last guess was right
//! - Round and correct-answer counters
//! - Session start time

use super::stats::SessionStats;
use rand::Rng;
use std::time::{Duration, Instant};

/// Rounds in a counted session unless configured otherwise
pub const DEFAULT_ROUNDS: u32 = 10;

/// Word that ends a session early unless configured otherwise
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// Options for one drill session
#[derive(Clone, Debug, PartialEq)]
pub struct DrillConfig {
    /// Stop after this many rounds and print statistics; `None` runs until
    /// the exit word or end of input
    pub round_limit: Option<u32>,
    /// Keep asking the same entry until it is answered correctly
    pub repeat_on_incorrect: bool,
    pub color: bool,
    pub centering: bool,
    pub exit_word: Option<String>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            round_limit: Some(DEFAULT_ROUNDS),
            repeat_on_incorrect: true,
            color: true,
            centering: true,
            exit_word: Some(DEFAULT_EXIT_WORD.to_string()),
        }
    }
}

/// Result of a single prompt-guess-feedback cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    Incorrect,
    /// The exit word was typed; scored neither way
    Exit,
    /// Input closed before a guess was read
    EndOfInput,
}

/// Why a session stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The round limit was reached
    Completed,
    ExitWord,
    EndOfInput,
}

/// Complete session state
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Deck index of the entry being asked
    pub current: Option<usize>,
    /// Whether the previous guess was correct (true before the first round)
    pub last_correct: bool,
    /// Rounds played, including incorrect repeats
    pub rounds_played: u32,
    pub correct: u32,
    /// Session start time
    pub start_time: Option<Instant>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            current: None,
            last_correct: true,
            rounds_played: 0,
            correct: 0,
            start_time: None,
        }
    }

    /// Start the session timer
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn duration(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Whether the next round needs a freshly drawn entry
    pub fn needs_new_entry(&self, repeat_on_incorrect: bool) -> bool {
        self.current.is_none() || self.last_correct || !repeat_on_incorrect
    }

    /// Pick the entry for the next round, drawing uniformly from `deck_len`
    /// entries when a new one is needed. `deck_len` must be non-zero.
    pub fn select_entry<G: Rng>(
        &mut self,
        deck_len: usize,
        rng: &mut G,
        repeat_on_incorrect: bool,
    ) -> usize {
        match self.current {
            Some(idx) if !self.needs_new_entry(repeat_on_incorrect) => idx,
            _ => {
                let idx = rng.gen_range(0..deck_len);
                self.current = Some(idx);
                idx
            }
        }
    }

    /// Record a scored answer
    pub fn record_answer(&mut self, correct: bool) {
        self.rounds_played += 1;
        self.last_correct = correct;
        if correct {
            self.correct += 1;
        }
    }

    /// Check if the round limit has been reached
    pub fn is_finished(&self, round_limit: Option<u32>) -> bool {
        round_limit.is_some_and(|limit| self.rounds_played >= limit)
    }

    /// Statistics against a total of `total` rounds
    pub fn stats(&self, total: u32) -> SessionStats {
        SessionStats::new(self.duration(), self.correct, total)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
