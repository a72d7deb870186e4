//! Judicial-history recognition.

use regex::{Regex, RegexBuilder};

use crate::vocabulary::COURT_PATTERNS;

/// Recognizes judicial-history text by keyword and pattern.
///
/// Classification is whole-text: one hit anywhere marks the entire text as
/// judicial history. Patterns match case-insensitively and across line
/// breaks.
#[derive(Debug, Clone)]
pub struct CourtInfoClassifier {
    patterns: Vec<Regex>,
}

impl Default for CourtInfoClassifier {
    fn default() -> Self {
        Self::new(COURT_PATTERNS).expect("Invalid court regex")
    }
}

impl CourtInfoClassifier {
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .dot_matches_new_line(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Index of the first matching pattern.
    pub fn matching_pattern(&self, text: &str) -> Option<usize> {
        if text.trim().is_empty() {
            return None;
        }
        self.patterns.iter().position(|regex| regex.is_match(text))
    }

    pub fn is_court_info(&self, text: &str) -> bool {
        self.matching_pattern(text).is_some()
    }
}
