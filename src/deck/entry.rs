//! A single (name, subject pronoun, object pronoun) row

use serde::Deserialize;

/// One flashcard: a person and the pronouns to recall for them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PronounEntry {
    pub name: String,
    /// Expected answer, e.g. "they"
    pub subject: String,
    pub object: String,
}

impl PronounEntry {
    #[cfg(test)]
    pub fn new(name: &str, subject: &str, object: &str) -> Self {
        PronounEntry {
            name: name.to_string(),
            subject: subject.to_string(),
            object: object.to_string(),
        }
    }

    /// Score an already-normalized guess against the subject pronoun.
    /// Comparison is case-insensitive.
    pub fn is_correct(&self, guess: &str) -> bool {
        self.subject.to_lowercase() == guess.to_lowercase()
    }
}
