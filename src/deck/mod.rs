//! Pronoun deck: the rows the drill quizzes on
//!
//! # Components
//! - `entry.rs`: PronounEntry record and scoring of a single guess
//! - `loader.rs`: Headerless CSV loading
//! - `error.rs`: Fatal load errors

pub mod entry;
pub mod error;
pub mod loader;

pub use entry::PronounEntry;
pub use loader::load_deck;
