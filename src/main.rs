//! Pronoun Drill - terminal flashcards for people's pronouns
//!
//! Single-session, stateless, self-contained CLI application.
//! Reads `name,subject,object` rows from a CSV file and quizzes on the
//! subject pronoun for a random name each round.

mod cli;
mod deck;
mod session;

use anyhow::Context;
use clap::Parser;
use cli::TerminalProbe;
use deck::load_deck;
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::state::{DEFAULT_EXIT_WORD, DEFAULT_ROUNDS};
use session::{Drill, DrillConfig};
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "pronoun-drill", version)]
#[command(about = "Practice people's pronouns with terminal flashcards")]
struct Args {
    /// Pronoun file, one `name,subject,object` row per line
    /// (see data/pronouns.example)
    #[arg(short, long, default_value = ".pronouns")]
    file: PathBuf,

    /// Rounds before statistics are shown
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    /// Keep drilling until the exit word or end of input (no statistics)
    #[arg(long)]
    endless: bool,

    /// Draw a new name every round, even after a wrong answer
    #[arg(long)]
    no_repeat: bool,

    /// Disable colored feedback
    #[arg(long)]
    no_color: bool,

    /// Disable centering on the terminal
    #[arg(long)]
    no_center: bool,

    /// Word that ends the session early
    #[arg(long, default_value = DEFAULT_EXIT_WORD)]
    exit_word: String,

    /// Disable the exit word
    #[arg(long, conflicts_with = "exit_word")]
    no_exit_word: bool,

    /// Seed for picking names (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

impl From<&Args> for DrillConfig {
    fn from(args: &Args) -> Self {
        DrillConfig {
            round_limit: (!args.endless).then_some(args.rounds),
            repeat_on_incorrect: !args.no_repeat,
            color: !args.no_color,
            centering: !args.no_center,
            exit_word: (!args.no_exit_word).then(|| args.exit_word.clone()),
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "pronoun_drill=debug"
    } else {
        "pronoun_drill=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run(args: &Args) -> anyhow::Result<()> {
    let deck = load_deck(&args.file)?;
    let config = DrillConfig::from(args);

    let seed = args.seed.unwrap_or_else(time_seed);
    debug!(seed, ?config, "starting drill");

    let mut drill = Drill::new(
        &deck,
        &config,
        io::stdin().lock(),
        io::stdout().lock(),
        TerminalProbe,
        StdRng::seed_from_u64(seed),
    );
    let report = drill.run().context("terminal i/o failed")?;

    info!(
        end = ?report.end,
        rounds = report.rounds_played,
        correct = report.correct,
        percent = ?report.stats.map(|s| s.percent_correct()),
        "session finished"
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        debug!("fatal: {:?}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
