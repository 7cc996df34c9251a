//! Quiz runner: the prompt-guess-feedback loop
//!
//! Each round shows a name, reads one guess and scores it against the
//! entry's subject pronoun. Wrong answers get a banner with the expected
//! pronouns and wait for an acknowledgment before the screen is reset.

use super::state::{DrillConfig, RoundOutcome, SessionEnd, SessionState};
use super::stats::SessionStats;
use crate::cli::{Display, InputHandler, SizeProbe};
use crate::deck::PronounEntry;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// How a session went
#[derive(Clone, Debug, PartialEq)]
pub struct SessionReport {
    pub end: SessionEnd,
    pub rounds_played: u32,
    pub correct: u32,
    /// Printed statistics; only counted sessions have them
    pub stats: Option<SessionStats>,
}

/// Drives one drill session over a deck
pub struct Drill<'a, R: BufRead, W: Write, P: SizeProbe, G: Rng> {
    deck: &'a [PronounEntry],
    config: &'a DrillConfig,
    input: InputHandler<R>,
    display: Display<W>,
    probe: P,
    rng: G,
    /// Lowercased copy of the configured exit word
    exit_word: Option<String>,
}

impl<'a, R: BufRead, W: Write, P: SizeProbe, G: Rng> Drill<'a, R, W, P, G> {
    /// `deck` must not be empty; the loader guarantees this.
    pub fn new(
        deck: &'a [PronounEntry],
        config: &'a DrillConfig,
        input: R,
        output: W,
        probe: P,
        rng: G,
    ) -> Self {
        Drill {
            deck,
            config,
            input: InputHandler::new(input),
            display: Display::new(output, config.color, config.centering),
            probe,
            rng,
            exit_word: config.exit_word.as_deref().map(str::to_lowercase),
        }
    }

    /// Run rounds until the limit, the exit word or end of input. Counted
    /// sessions print their statistics before returning.
    pub fn run(&mut self) -> io::Result<SessionReport> {
        let size = self.probe.window_size();
        if self.config.centering && size.is_none() {
            debug!("window size unavailable, output will not be centered");
        }

        self.display.reset_to_middle(size)?;

        let mut state = SessionState::new();
        state.start();

        let end = loop {
            if state.is_finished(self.config.round_limit) {
                break SessionEnd::Completed;
            }

            let idx = state.select_entry(
                self.deck.len(),
                &mut self.rng,
                self.config.repeat_on_incorrect,
            );
            let deck = self.deck;
            let outcome = self.play_round(&deck[idx])?;
            self.display.reset_to_middle(self.probe.window_size())?;
            debug!(
                round = state.rounds_played + 1,
                entry = idx,
                ?outcome,
                "round finished"
            );

            match outcome {
                RoundOutcome::Correct => state.record_answer(true),
                RoundOutcome::Incorrect => state.record_answer(false),
                RoundOutcome::Exit => break SessionEnd::ExitWord,
                RoundOutcome::EndOfInput => break SessionEnd::EndOfInput,
            }
        };

        let stats = self.config.round_limit.map(|total| state.stats(total));
        if let Some(stats) = &stats {
            self.display.show_stats(stats)?;
        }

        Ok(SessionReport {
            end,
            rounds_played: state.rounds_played,
            correct: state.correct,
            stats,
        })
    }

    /// Ask for one entry and score the answer
    fn play_round(&mut self, entry: &PronounEntry) -> io::Result<RoundOutcome> {
        self.display.show_prompt(&entry.name)?;

        let guess = match self.input.read_guess()? {
            Some(guess) => guess,
            None => return Ok(RoundOutcome::EndOfInput),
        };

        if self.exit_word.as_deref() == Some(guess.as_str()) {
            return Ok(RoundOutcome::Exit);
        }

        if entry.is_correct(&guess) {
            return Ok(RoundOutcome::Correct);
        }

        self.display.show_incorrect(entry, self.probe.window_size())?;
        self.input.wait_for_ack()?;
        Ok(RoundOutcome::Incorrect)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.display.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::terminal::{FixedProbe, WindowSize};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::io::Cursor;

    /// Counts how often the window size is asked for
    struct CountingProbe<'c>(&'c Cell<u32>);

    impl SizeProbe for CountingProbe<'_> {
        fn window_size(&self) -> Option<WindowSize> {
            self.0.set(self.0.get() + 1);
            None
        }
    }

    fn plain_config() -> DrillConfig {
        DrillConfig {
            color: false,
            ..DrillConfig::default()
        }
    }

    fn run_drill(
        deck: &[PronounEntry],
        config: &DrillConfig,
        input: &str,
    ) -> (SessionReport, String) {
        let mut drill = Drill::new(
            deck,
            config,
            Cursor::new(input.to_string()),
            Vec::new(),
            FixedProbe(None),
            StdRng::seed_from_u64(1),
        );
        let report = drill.run().unwrap();
        let output = String::from_utf8(drill.into_output()).unwrap();
        (report, output)
    }

    fn sam() -> Vec<PronounEntry> {
        vec![PronounEntry::new("Sam", "they", "them")]
    }

    #[test]
    fn test_all_correct_plays_exactly_ten_rounds() {
        let input = "they\n".repeat(15);
        let (report, output) = run_drill(&sam(), &plain_config(), &input);

        assert_eq!(report.end, SessionEnd::Completed);
        assert_eq!(report.rounds_played, 10);
        assert_eq!(report.correct, 10);
        assert!(output.contains("With 10/10 (100.00%) correct"));
        assert!(!output.contains("Adjusted Time"));
        assert!(!output.contains("Incorrect"));
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let input = "They\nTHEY\n".repeat(5);
        let (report, _) = run_drill(&sam(), &plain_config(), &input);
        assert_eq!(report.correct, 10);
    }

    #[test]
    fn test_incorrect_guess_shows_expected_pronouns() {
        // wrong answer, acknowledgment, then nine right answers
        let input = format!("he\n\n{}", "they\n".repeat(9));
        let (report, output) = run_drill(&sam(), &plain_config(), &input);

        assert_eq!(report.rounds_played, 10);
        assert_eq!(report.correct, 9);
        assert!(output.contains("\nIncorrect\n"));
        assert!(output.contains("Sam's correct pronouns are they and them"));
        assert!(output.contains("Press any key to continue"));
        assert!(output.contains("With 9/10 (90.00%) correct"));
        assert!(output.contains("Adjusted Time:"));
    }

    #[test]
    fn test_ack_line_is_not_scored() {
        // the acknowledgment "they" must not count as an answer
        let input = "he\nthey\nhe\n\n";
        let config = DrillConfig {
            round_limit: Some(2),
            ..plain_config()
        };
        let (report, _) = run_drill(&sam(), &config, input);
        assert_eq!(report.rounds_played, 2);
        assert_eq!(report.correct, 0);
    }

    #[test]
    fn test_exit_word_stops_early_without_scoring() {
        let input = "they\nEXIT\nthey\n";
        let (report, output) = run_drill(&sam(), &plain_config(), input);

        assert_eq!(report.end, SessionEnd::ExitWord);
        assert_eq!(report.rounds_played, 1);
        assert_eq!(report.correct, 1);
        assert!(output.contains("With 1/10 (10.00%) correct"));
        assert!(output.contains("Adjusted Time:"));
    }

    #[test]
    fn test_exit_word_disabled_counts_as_guess() {
        let config = DrillConfig {
            round_limit: Some(1),
            exit_word: None,
            ..plain_config()
        };
        let (report, _) = run_drill(&sam(), &config, "exit\n\n");
        assert_eq!(report.end, SessionEnd::Completed);
        assert_eq!(report.correct, 0);
    }

    #[test]
    fn test_end_of_input_stops_session() {
        let (report, output) = run_drill(&sam(), &plain_config(), "they\nthey\n");
        assert_eq!(report.end, SessionEnd::EndOfInput);
        assert_eq!(report.rounds_played, 2);
        assert!(output.contains("With 2/10 (20.00%) correct"));
    }

    #[test]
    fn test_endless_session_has_no_stats() {
        let config = DrillConfig {
            round_limit: None,
            ..plain_config()
        };
        let input = "they\n".repeat(25);
        let (report, output) = run_drill(&sam(), &config, &input);

        assert_eq!(report.end, SessionEnd::EndOfInput);
        assert_eq!(report.rounds_played, 25);
        assert!(report.stats.is_none());
        assert!(!output.contains("Time:"));
    }

    #[test]
    fn test_repeat_on_incorrect_keeps_same_name() {
        let deck = vec![
            PronounEntry::new("Sam", "they", "them"),
            PronounEntry::new("Mark", "he", "him"),
            PronounEntry::new("Ana", "she", "her"),
        ];
        let config = DrillConfig {
            round_limit: Some(4),
            ..plain_config()
        };
        // "xyz" is wrong for every entry
        let input = "xyz\n\n".repeat(4);
        let (report, output) = run_drill(&deck, &config, &input);

        assert_eq!(report.correct, 0);
        let names: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("'s correct pronouns are"))
            .map(|line| line.split('\'').next().unwrap())
            .collect();
        assert_eq!(names.len(), 4);
        assert!(names.iter().all(|name| *name == names[0]));
    }

    #[test]
    fn test_screen_reset_without_terminal_homes_cursor() {
        let config = DrillConfig {
            round_limit: Some(1),
            ..plain_config()
        };
        let (_, output) = run_drill(&sam(), &config, "they\n");
        assert!(output.starts_with("\x1b[2J\x1b[1;1HSam\n\n"));
    }

    #[test]
    fn test_invalid_utf8_guess_is_scored_incorrect() {
        let deck = sam();
        let mut input = b"\xe9\n\n".to_vec();
        input.extend("they\n".repeat(9).as_bytes());
        let config = plain_config();
        let mut drill = Drill::new(
            &deck,
            &config,
            Cursor::new(input),
            Vec::new(),
            FixedProbe(None),
            StdRng::seed_from_u64(1),
        );
        let report = drill.run().unwrap();
        let output = String::from_utf8(drill.into_output()).unwrap();

        assert_eq!(report.end, SessionEnd::Completed);
        assert_eq!(report.rounds_played, 10);
        assert_eq!(report.correct, 9);
        assert!(output.contains("Sam's correct pronouns are they and them"));
    }

    #[test]
    fn test_window_size_queried_once_per_screen_reset() {
        let deck = sam();
        let config = DrillConfig {
            round_limit: Some(2),
            ..plain_config()
        };
        let calls = Cell::new(0);
        let mut drill = Drill::new(
            &deck,
            &config,
            Cursor::new("they\nthey\n".to_string()),
            Vec::new(),
            CountingProbe(&calls),
            StdRng::seed_from_u64(1),
        );
        drill.run().unwrap();

        // session start plus one reset after each round
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_centered_banner_with_known_width() {
        let deck = sam();
        let config = DrillConfig {
            round_limit: Some(1),
            ..plain_config()
        };
        let size = WindowSize { rows: 30, cols: 29 };
        let mut drill = Drill::new(
            &deck,
            &config,
            Cursor::new("he\n\n".to_string()),
            Vec::new(),
            FixedProbe(Some(size)),
            StdRng::seed_from_u64(1),
        );
        drill.run().unwrap();
        let output = String::from_utf8(drill.into_output()).unwrap();

        let banner = format!("{}Incorrect{}", " ".repeat(10), " ".repeat(10));
        assert!(output.contains(&banner));
        assert!(output.starts_with("\x1b[2J\x1b[10;1H"));
    }
}
