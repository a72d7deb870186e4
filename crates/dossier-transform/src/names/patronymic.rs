//! Relocation of a stray leading patronymic.

use crate::text_utils::word_spans;
use crate::vocabulary::{PATRONYMIC_STOP_WORDS, PATRONYMIC_SUFFIXES, patronymic_suffix};

/// A patronymic lifted off the front of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatronymicMove {
    pub patronymic: String,
    /// Text after the patronymic, leading whitespace removed.
    pub residual: String,
}

/// Detects a patronymic-shaped first word followed by a locator stop-word.
#[derive(Debug, Clone)]
pub struct PatronymicRelocator {
    suffixes: Vec<String>,
    stop_words: Vec<String>,
}

impl Default for PatronymicRelocator {
    fn default() -> Self {
        Self::new(PATRONYMIC_SUFFIXES, PATRONYMIC_STOP_WORDS)
    }
}

impl PatronymicRelocator {
    pub fn new(suffixes: &[&str], stop_words: &[&str]) -> Self {
        Self {
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            stop_words: stop_words.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn relocate(&self, text: &str) -> Option<PatronymicMove> {
        let words = word_spans(text);
        let (first, second) = match words.as_slice() {
            [first, second, ..] => (first, second),
            _ => return None,
        };
        let suffixes: Vec<&str> = self.suffixes.iter().map(String::as_str).collect();
        patronymic_suffix(first.word, &suffixes)?;
        if !self.stop_words.iter().any(|stop| stop == second.word) {
            return None;
        }
        Some(PatronymicMove {
            patronymic: first.word.to_string(),
            residual: text[first.end..].trim_start().to_string(),
        })
    }
}
