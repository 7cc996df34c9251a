//! Line-based input handling
//!
//! Features:
//! - One guess per line, normalized for comparison
//! - "Press any key" acknowledgment (consumes one line)
//! - End of input reported as `None` rather than an empty guess
//! - Bytes that are not valid UTF-8 are replaced, never an error

use std::io::{self, BufRead};

/// Reads guesses from a line-oriented source, normally locked stdin
pub struct InputHandler<R: BufRead> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> InputHandler<R> {
    pub fn new(reader: R) -> Self {
        InputHandler {
            reader,
            line: Vec::new(),
        }
    }

    /// Read the next guess, normalized. Returns `None` at end of input.
    pub fn read_guess(&mut self) -> io::Result<Option<String>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(normalize(&String::from_utf8_lossy(&self.line))))
    }

    /// Block until the user presses enter; the line itself is discarded
    pub fn wait_for_ack(&mut self) -> io::Result<()> {
        self.line.clear();
        self.reader.read_until(b'\n', &mut self.line)?;
        Ok(())
    }
}

/// Strip the line terminator and lowercase
pub fn normalize(line: &str) -> String {
    line.trim_end_matches(['\n', '\r']).to_lowercase()
}
