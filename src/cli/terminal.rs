//! Terminal geometry: window-size query and centering arithmetic

use std::io::{stdout, IsTerminal};

/// Rows and columns of the output terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

/// Source of the current window size. `None` means there is no usable
/// terminal and output falls back to plain, non-centered text.
pub trait SizeProbe {
    fn window_size(&self) -> Option<WindowSize>;
}

/// Queries the terminal attached to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalProbe;

impl SizeProbe for TerminalProbe {
    fn window_size(&self) -> Option<WindowSize> {
        // crossterm also looks at /dev/tty, which would report a size even
        // when stdout is redirected
        if !stdout().is_terminal() {
            return None;
        }

        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Some(WindowSize { rows, cols }),
            _ => None,
        }
    }
}

/// Probe that always reports the same answer
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub struct FixedProbe(pub Option<WindowSize>);

#[cfg(test)]
impl SizeProbe for FixedProbe {
    fn window_size(&self) -> Option<WindowSize> {
        self.0
    }
}

/// Left and right padding that centers `text_len` chars in `width` columns.
/// Text as wide as or wider than the terminal gets no padding.
pub fn center_padding(text_len: usize, width: usize) -> (usize, usize) {
    if width <= text_len {
        return (0, 0);
    }
    let left = (width - text_len) / 2;
    let right = width - left - text_len;
    (left, right)
}

/// Row to place the cursor on so the drill sits mid-screen, or `None` when
/// the terminal is too short (10 rows or fewer) to bother.
pub fn middle_row(rows: u16) -> Option<u16> {
    if rows > 10 {
        Some(((rows - 10) / 2).max(1))
    } else {
        None
    }
}
