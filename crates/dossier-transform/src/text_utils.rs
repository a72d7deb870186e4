//! Whitespace and span helpers shared by the classifiers.
//!
//! Spans are byte ranges into the text they were computed from. Removing a
//! span replaces it with a single space so the words on either side never
//! fuse; [`collapse_whitespace`] cleans up afterwards.

/// Trim and collapse every whitespace run to a single space.
///
/// # Example
/// ```
/// use dossier_transform::text_utils::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Иванов \n Иван  "), "Иванов Иван");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Append `addition` to existing cell content with a single separating space.
///
/// Blank input on either side is ignored. Returns `None` only when both are
/// blank.
pub fn merge_text(existing: Option<&str>, addition: &str) -> Option<String> {
    let existing = existing.map(str::trim).filter(|value| !value.is_empty());
    let addition = addition.trim();
    match (existing, addition.is_empty()) {
        (None, true) => None,
        (None, false) => Some(addition.to_string()),
        (Some(current), true) => Some(current.to_string()),
        (Some(current), false) => Some(format!("{current} {addition}")),
    }
}

/// Replace each byte range with a single space.
///
/// Ranges may be given in any order but must not overlap and must fall on
/// character boundaries.
pub fn remove_spans(text: &str, spans: &[(usize, usize)]) -> String {
    let mut sorted = spans.to_vec();
    sorted.sort_unstable();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in sorted {
        if start < cursor || end > text.len() {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push(' ');
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// A whitespace-delimited word and its byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub word: &'a str,
}

/// Whitespace-delimited words with their byte ranges.
pub fn word_spans(text: &str) -> Vec<WordSpan<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    for (index, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                words.push(WordSpan {
                    start: begin,
                    end: index,
                    word: &text[begin..index],
                });
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(begin) = start {
        words.push(WordSpan {
            start: begin,
            end: text.len(),
            word: &text[begin..],
        });
    }
    words
}

/// Whether the first character is an uppercase letter.
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
