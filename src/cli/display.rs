//! Terminal display and UI rendering
//!
//! Features:
//! - Clear and cursor positioning via crossterm commands
//! - Vertically centered drill area, horizontally centered banners
//! - Optional color highlighting of feedback
//! - Session summary

use super::terminal::{center_padding, middle_row, WindowSize};
use crate::deck::PronounEntry;
use crate::session::SessionStats;
use crossterm::{
    cursor, queue,
    style::{style, Color, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const INCORRECT_BANNER: &str = "Incorrect";

/// Terminal display manager
pub struct Display<W: Write> {
    out: W,
    /// Emit SGR color codes
    color: bool,
    /// Center the drill area and banners when the window size is known
    centering: bool,
}

impl<W: Write> Display<W> {
    pub fn new(out: W, color: bool, centering: bool) -> Self {
        Display {
            out,
            color,
            centering,
        }
    }

    /// Clear the whole screen without moving the cursor
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    /// Move the cursor to a 1-based row and column
    pub fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1))
        )
    }

    /// Wrap `text` in color codes, or return it unchanged with color off
    pub fn highlight(&self, text: &str, fg: Option<Color>, bg: Option<Color>) -> String {
        if !self.color {
            return text.to_string();
        }

        let mut styled = style(text);
        if let Some(fg) = fg {
            styled = styled.with(fg);
        }
        if let Some(bg) = bg {
            styled = styled.on(bg);
        }
        styled.to_string()
    }

    /// Clear the screen and park the cursor so the next round sits in the
    /// middle of the terminal. Without a known size (or with centering off)
    /// this is a plain clear-and-home.
    pub fn reset_to_middle(&mut self, size: Option<WindowSize>) -> io::Result<()> {
        self.clear()?;
        match size.filter(|_| self.centering) {
            Some(size) => {
                if let Some(row) = middle_row(size.rows) {
                    self.move_cursor(row, 1)?;
                }
            }
            None => self.move_cursor(1, 1)?,
        }
        self.out.flush()
    }

    /// Pad `text` to the full terminal width so it sits centered. Padding is
    /// kept on both sides so a background color covers the whole row.
    pub fn centered(&self, text: &str, size: Option<WindowSize>) -> String {
        match size.filter(|_| self.centering) {
            Some(size) => {
                let (left, right) = center_padding(text.chars().count(), size.cols as usize);
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
            }
            None => text.to_string(),
        }
    }

    /// Show the name to guess pronouns for
    pub fn show_prompt(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}", name)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Show the "Incorrect" banner and the expected pronouns
    pub fn show_incorrect(
        &mut self,
        entry: &PronounEntry,
        size: Option<WindowSize>,
    ) -> io::Result<()> {
        let banner = self.centered(INCORRECT_BANNER, size);
        let banner = self.highlight(&banner, Some(Color::Yellow), Some(Color::DarkRed));
        let subject = self.highlight(&entry.subject, Some(Color::DarkCyan), None);
        let object = self.highlight(&entry.object, Some(Color::DarkCyan), None);

        writeln!(self.out)?;
        writeln!(self.out, "{}", banner)?;
        writeln!(
            self.out,
            "{}'s correct pronouns are {} and {}",
            entry.name, subject, object
        )?;
        write!(self.out, "\nPress any key to continue")?;
        self.out.flush()
    }

    /// Print the end-of-session summary
    pub fn show_stats(&mut self, stats: &SessionStats) -> io::Result<()> {
        writeln!(self.out, "Time: {:.2}s", stats.elapsed_secs())?;
        writeln!(
            self.out,
            "With {}/{} ({:.2}%) correct",
            stats.correct,
            stats.total,
            stats.percent_correct()
        )?;
        if let Some(adjusted) = stats.adjusted_secs() {
            writeln!(self.out, "Adjusted Time: {:.2}s", adjusted)?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
