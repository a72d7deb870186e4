//! Phone number extraction.

use regex::Regex;

use crate::vocabulary::PHONE_PATTERNS;

/// A claimed phone literal and its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Phones found in a block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneExtraction {
    /// Literal matches, ordered by position.
    pub matches: Vec<PhoneMatch>,
}

impl PhoneExtraction {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The literals joined with a single space, nothing else added.
    pub fn joined(&self) -> Option<String> {
        if self.matches.is_empty() {
            return None;
        }
        let literals: Vec<&str> = self.matches.iter().map(|m| m.text.as_str()).collect();
        Some(literals.join(" "))
    }

    pub fn spans(&self) -> Vec<(usize, usize)> {
        self.matches.iter().map(|m| (m.start, m.end)).collect()
    }
}

/// Finds phone-number literals.
///
/// The literal text is kept as typed so callers can cut exactly those bytes
/// out of the source.
#[derive(Debug, Clone)]
pub struct PhoneExtractor {
    patterns: Vec<Regex>,
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        let patterns = PHONE_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("Invalid phone regex"))
            .collect();
        Self { patterns }
    }
}

impl PhoneExtractor {
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn extract(&self, text: &str) -> PhoneExtraction {
        let mut matches: Vec<PhoneMatch> = Vec::new();
        for regex in &self.patterns {
            for found in regex.find_iter(text) {
                let (start, end) = (found.start(), found.end());
                let glued = text[..start].chars().next_back().is_some_and(|c| c.is_ascii_digit())
                    || text[end..].chars().next().is_some_and(|c| c.is_ascii_digit());
                let overlapping = matches.iter().any(|m| start < m.end && m.start < end);
                if glued || overlapping {
                    continue;
                }
                matches.push(PhoneMatch {
                    start,
                    end,
                    text: found.as_str().to_string(),
                });
            }
        }
        matches.sort_by_key(|m| m.start);
        PhoneExtraction { matches }
    }
}
