//! Session Management: State tracking, the quiz loop, and statistics
//!
//! # Components
//! - `state.rs`: DrillConfig and SessionState for tracking session progress
//! - `runner.rs`: Drill, the prompt-guess-feedback loop
//! - `stats.rs`: Percentage and adjusted time at session end

pub mod runner;
pub mod state;
pub mod stats;

pub use runner::Drill;
pub use state::DrillConfig;
pub use stats::SessionStats;
