//! Personal name handling.

pub mod patronymic;
pub mod splitter;

pub use patronymic::{PatronymicMove, PatronymicRelocator};
pub use splitter::{NameSplit, NameSplitter};

use crate::text_utils::{starts_uppercase, word_spans};
use crate::vocabulary::ADDRESS_STOP_WORDS;

const MAX_NAME_WORDS: usize = 3;

/// Leading name words claimed from a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameClaim {
    /// Claimed words joined with single spaces.
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// Claim up to three leading capitalized words that are not stop-words.
///
/// A word with an uppercase letter past its first character is not a name
/// word; the splitter leaves such words only when a city marker disabled it.
///
/// # Example
/// ```
/// use dossier_transform::names::claim_leading_name;
///
/// let claim = claim_leading_name("Иванов Иван без определенного места").unwrap();
/// assert_eq!(claim.name, "Иванов Иван");
/// assert!(claim_leading_name("г. Пушкин").is_none());
/// ```
pub fn claim_leading_name(text: &str) -> Option<NameClaim> {
    let words = word_spans(text);
    let claimed: Vec<_> = words
        .iter()
        .take(MAX_NAME_WORDS)
        .take_while(|w| {
            starts_uppercase(w.word)
                && !w.word.chars().skip(1).any(char::is_uppercase)
                && !ADDRESS_STOP_WORDS.contains(&w.word)
        })
        .collect();
    let (first, last) = (claimed.first()?, claimed.last()?);
    Some(NameClaim {
        name: claimed.iter().map(|w| w.word).collect::<Vec<_>>().join(" "),
        start: first.start,
        end: last.end,
    })
}
