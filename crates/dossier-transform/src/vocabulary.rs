//! Classification vocabulary.
//!
//! Every keyword list and pattern the classifiers use lives here as plain
//! data, so the vocabulary can be reviewed and extended without touching
//! control flow. Regex entries are compiled by the classifier that owns them.

/// Locator markers that end a leading address or name.
pub const ADDRESS_STOP_WORDS: &[&str] = &[
    "СПб", "г.", "г.СПб", "пр.", "ул.", "д.", "р-н", "обл.", "респ.",
];

/// Markers that, following a patronymic-shaped word, show it was left
/// behind by the name.
pub const PATRONYMIC_STOP_WORDS: &[&str] = &["СПб", "г.", "г.СПб", "пр.", "ул.", "д."];

/// Lowercase endings of patronymics.
pub const PATRONYMIC_SUFFIXES: &[&str] = &["вич", "вна", "ич", "ична", "овна", "евна", "ович", "евич"];

/// Capitalized-mid-word markers that disable name splitting for the whole text.
pub const CITY_MARKERS: &[&str] = &["СПб"];

/// Judicial-history patterns, matched case-insensitively.
///
/// A statute or probation number needs at least one whitespace character
/// before it. Gaps inside word phrases accept none, so a glued phrase the
/// name splitter would later separate is claimed on the first pass.
pub const COURT_PATTERNS: &[&str] = &[
    r"\d{2}\.\d{2}\.\d{4}.*?суд",
    r"суд.*?по\s*ст",
    r"р/с",
    r"г/с",
    r"судом",
    r"осужденный",
    r"постановлением",
    r"УК\s*РФ",
    r"л/св",
    r"ст\.\s+\d{1,3}",
    r"ИС\s+\d+\s+(?:год|г|лет)",
    r"Мировым\s*судьей",
    r"МССУ",
];

/// Phone number patterns, in priority order.
pub const PHONE_PATTERNS: &[&str] = &[
    // +7 (999) 123-45-67, 8 999 123 45 67, 89991234567
    r"(?:\+7|8|7)[\s-]*\(?\d{3}\)?[\s-]*\d{3}[\s-]*\d{2}[\s-]*\d{2}",
    // 123-45-67
    r"\d{3}-\d{2}-\d{2}",
];

/// Whether `word` is exactly one of `vocabulary`.
pub fn is_stop_word(word: &str, vocabulary: &[&str]) -> bool {
    vocabulary.contains(&word)
}

/// Patronymic suffix carried by `word`, if any.
///
/// The word must be longer than the suffix by more than one character.
pub fn patronymic_suffix<'a>(word: &str, suffixes: &[&'a str]) -> Option<&'a str> {
    let lowered = word.to_lowercase();
    let length = lowered.chars().count();
    suffixes
        .iter()
        .copied()
        .find(|suffix| lowered.ends_with(suffix) && length > suffix.chars().count() + 1)
}
