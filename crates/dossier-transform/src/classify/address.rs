//! Leading-address extraction bounded by locator stop-words.

use crate::text_utils::word_spans;
use crate::vocabulary::ADDRESS_STOP_WORDS;

const MAX_ADDRESS_WORDS: usize = 3;

/// A claimed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMatch {
    /// Claimed words re-joined with single spaces.
    pub formatted: String,
    /// The matched substring exactly as it appears in the source.
    pub original: String,
    pub start: usize,
    pub end: usize,
}

/// Extracts an address made of leading words that precede a locator marker.
///
/// At most three leading words are claimed, stopping early at the first
/// stop-word. A text whose first word is a stop-word, or that contains no
/// stop-word at all, yields nothing.
#[derive(Debug, Clone)]
pub struct AddressExtractor {
    stop_words: Vec<String>,
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new(ADDRESS_STOP_WORDS)
    }
}

impl AddressExtractor {
    pub fn new(stop_words: &[&str]) -> Self {
        Self {
            stop_words: stop_words.iter().map(|word| word.to_string()).collect(),
        }
    }

    fn is_stop(&self, word: &str) -> bool {
        self.stop_words.iter().any(|stop| stop == word)
    }

    pub fn extract(&self, text: &str) -> Option<AddressMatch> {
        let words = word_spans(text);
        let first = words.first()?;
        if self.is_stop(first.word) || !words.iter().any(|w| self.is_stop(w.word)) {
            return None;
        }
        let claimed: Vec<_> = words
            .iter()
            .take(MAX_ADDRESS_WORDS)
            .take_while(|w| !self.is_stop(w.word))
            .collect();
        let last = claimed.last()?;
        let (start, end) = (first.start, last.end);
        Some(AddressMatch {
            formatted: claimed
                .iter()
                .map(|w| w.word)
                .collect::<Vec<_>>()
                .join(" "),
            original: text[start..end].to_string(),
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_before_marker() {
        let found = AddressExtractor::default()
            .extract("Невский  проспект г. СПб")
            .unwrap();
        assert_eq!(found.formatted, "Невский проспект");
        assert_eq!(found.original, "Невский  проспект");
    }

    #[test]
    fn test_three_word_cap() {
        let found = AddressExtractor::default()
            .extract("Ленинский район поселок Шушары ул. Школьная")
            .unwrap();
        assert_eq!(found.formatted, "Ленинский район поселок");
    }

    #[test]
    fn test_leading_marker_claims_nothing() {
        assert!(AddressExtractor::default().extract("ул. Ленина д. 5").is_none());
    }

    #[test]
    fn test_no_marker_claims_nothing() {
        assert!(AddressExtractor::default().extract("Иванов Иван Иванович").is_none());
        assert!(AddressExtractor::default().extract("").is_none());
    }
}
