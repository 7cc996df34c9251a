//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Line-based guess reading
//! - `display.rs`: Terminal rendering and feedback
//! - `terminal.rs`: Window-size query and centering

pub mod display;
pub mod input;
pub mod terminal;

pub use display::Display;
pub use input::InputHandler;
pub use terminal::{SizeProbe, TerminalProbe};
