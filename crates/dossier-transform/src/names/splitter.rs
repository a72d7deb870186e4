//! Splitting of glued capitalized name words.

use crate::vocabulary::CITY_MARKERS;

const MAX_CANDIDATE_WORDS: usize = 3;

/// Output of [`NameSplitter::split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSplit {
    pub text: String,
    /// Candidate words that were cut into parts.
    pub words_split: usize,
}

/// Cuts words such as `ЖумановИсабекМаратбекович` at every uppercase letter.
///
/// Only the first three words are candidates. The output is re-joined with
/// single spaces. A text containing a city marker is returned untouched.
#[derive(Debug, Clone)]
pub struct NameSplitter {
    city_markers: Vec<String>,
}

impl Default for NameSplitter {
    fn default() -> Self {
        Self::new(CITY_MARKERS)
    }
}

impl NameSplitter {
    pub fn new(city_markers: &[&str]) -> Self {
        Self {
            city_markers: city_markers.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn split(&self, text: &str) -> NameSplit {
        if self.city_markers.iter().any(|marker| text.contains(marker.as_str())) {
            return NameSplit {
                text: text.to_string(),
                words_split: 0,
            };
        }
        let mut words_split = 0;
        let mut out: Vec<String> = Vec::new();
        for (index, word) in text.split_whitespace().enumerate() {
            if index >= MAX_CANDIDATE_WORDS {
                out.push(word.to_string());
                continue;
            }
            let parts = split_word(word);
            if parts.len() > 1 {
                words_split += 1;
            }
            out.extend(parts);
        }
        NameSplit {
            text: out.join(" "),
            words_split,
        }
    }
}

/// Cut a word at every uppercase character after the first.
fn split_word(word: &str) -> Vec<String> {
    let mut cuts: Vec<usize> = vec![0];
    cuts.extend(
        word.char_indices()
            .skip(1)
            .filter(|(_, ch)| ch.is_uppercase())
            .map(|(index, _)| index),
    );
    if cuts.len() == 1 {
        return vec![word.to_string()];
    }
    cuts.push(word.len());
    cuts.windows(2)
        .map(|pair| word[pair[0]..pair[1]].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_word_positions() {
        assert_eq!(split_word("ИвановИван"), vec!["Иванов", "Иван"]);
        assert_eq!(split_word("Иванов"), vec!["Иванов"]);
        assert_eq!(split_word("ИП"), vec!["И", "П"]);
    }

    #[test]
    fn test_whitespace_rejoined() {
        let split = NameSplitter::default().split("  Иванов   Иван ");
        assert_eq!(split.text, "Иванов Иван");
        assert_eq!(split.words_split, 0);
    }

    #[test]
    fn test_city_marker_disables_split() {
        let split = NameSplitter::default().split("ПетровПетр г.СПб");
        assert_eq!(split.text, "ПетровПетр г.СПб");
        assert_eq!(split.words_split, 0);
    }
}
