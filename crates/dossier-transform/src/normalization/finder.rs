//! Searching free text for date-shaped substrings.

use std::sync::LazyLock;

use regex::Regex;

use super::date::DateNormalizer;

/// Search patterns in priority order. An earlier pattern wins any overlap.
const SEARCH_PATTERNS: &[&str] = &[
    r"\d{1,2}\s*\.\s*\d{1,2}\s*\.\s*\d{2,4}",
    r"\d{1,2}\s*/\s*\d{1,2}\s*/\s*\d{2,4}",
    r"\d{1,2}\s*-\s*\d{1,2}\s*-\s*\d{2,4}",
    r"\d{4}\s*\.\s*\d{2}",
    r"\d{8}",
];

static SEARCH: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SEARCH_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid date search regex"))
        .collect()
});

static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = SEARCH_PATTERNS.join("|");
    Regex::new(&format!(r"^\s*(?:{alternation})")).expect("Invalid date prefix regex")
});

/// Whether the text starts with a date-shaped token.
///
/// Used to tell a data row from a header row by its first cell.
pub fn looks_like_date(text: &str) -> bool {
    PREFIX.is_match(text)
}

/// A date-shaped substring and its byte range in the searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl DateSpan {
    pub fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Result of rewriting every date in a block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRewrite {
    pub text: String,
    /// Dates whose text actually changed.
    pub rewritten: usize,
}

fn digit_adjacent(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_some_and(|c| c.is_ascii_digit()) || after.is_some_and(|c| c.is_ascii_digit())
}

fn overlaps(spans: &[DateSpan], start: usize, end: usize) -> bool {
    spans.iter().any(|span| start < span.end && span.start < end)
}

/// Every date-shaped substring, ordered by position.
///
/// Matches glued to further digits (`123.05.2024`) are rejected.
pub fn find_date_spans(text: &str) -> Vec<DateSpan> {
    let mut spans: Vec<DateSpan> = Vec::new();
    for regex in SEARCH.iter() {
        for found in regex.find_iter(text) {
            let (start, end) = (found.start(), found.end());
            if digit_adjacent(text, start, end) || overlaps(&spans, start, end) {
                continue;
            }
            spans.push(DateSpan {
                start,
                end,
                text: found.as_str().to_string(),
            });
        }
    }
    spans.sort_by_key(|span| span.start);
    spans
}

/// Distinct date-shaped substrings in first-seen order.
pub fn find_dates(text: &str) -> Vec<String> {
    let mut dates: Vec<String> = Vec::new();
    for span in find_date_spans(text) {
        if !dates.contains(&span.text) {
            dates.push(span.text);
        }
    }
    dates
}

/// Scans free text for dates and rewrites them in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFinder {
    normalizer: DateNormalizer,
}

impl DateFinder {
    pub fn new(normalizer: DateNormalizer) -> Self {
        Self { normalizer }
    }

    /// Replace every found date with its canonical form.
    ///
    /// Tokens the normalizer rejects (`1.5.202`) stay verbatim. Already
    /// canonical dates are not counted, so a second pass reports zero.
    pub fn rewrite(&self, text: &str) -> DateRewrite {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut rewritten = 0;
        for span in find_date_spans(text) {
            out.push_str(&text[cursor..span.start]);
            match self.normalizer.normalize(&span.text) {
                Some(canonical) if canonical != span.text => {
                    out.push_str(&canonical);
                    rewritten += 1;
                }
                _ => out.push_str(&span.text),
            }
            cursor = span.end;
        }
        out.push_str(&text[cursor..]);
        DateRewrite {
            text: out,
            rewritten,
        }
    }
}
