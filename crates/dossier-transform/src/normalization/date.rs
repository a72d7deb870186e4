//! Date token parsing and canonical `DD.MM.YYYY` formatting.
//!
//! Tokens come from word-processing tables typed by hand, so separators are
//! often padded with spaces (`13. 05. 2024`) or dropped entirely
//! (`1305.24`, `13052024`). The recognized shapes are tried in a fixed
//! priority order; anything else is "no match", never an error.
//!
//! Day and month are not validated: `41.13.2020` becomes `41.13.2020`.

use std::sync::LazyLock;

use chrono::{Datelike, Local};
use regex::Regex;

/// Date shapes in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `D.M.YY`
    DotShortYear,
    /// `D.M.YYYY`
    DotFullYear,
    /// `DDMM.YY` (separator between day and month missing)
    PackedDayMonth,
    /// `DDMMYYYY`
    Packed,
    /// `D/M/YY`
    SlashShortYear,
    /// `D/M/YYYY`
    SlashFullYear,
    /// `D-M-YY`
    HyphenShortYear,
    /// `D-M-YYYY`
    HyphenFullYear,
}

impl DateShape {
    fn has_short_year(self) -> bool {
        matches!(
            self,
            DateShape::DotShortYear
                | DateShape::PackedDayMonth
                | DateShape::SlashShortYear
                | DateShape::HyphenShortYear
        )
    }
}

const SHAPE_PATTERNS: &[(DateShape, &str)] = &[
    (DateShape::DotShortYear, r"^(\d{1,2})\s*\.\s*(\d{1,2})\s*\.\s*(\d{2})$"),
    (DateShape::DotFullYear, r"^(\d{1,2})\s*\.\s*(\d{1,2})\s*\.\s*(\d{4})$"),
    (DateShape::PackedDayMonth, r"^(\d{2})(\d{2})\s*\.\s*(\d{2})$"),
    (DateShape::Packed, r"^(\d{2})(\d{2})(\d{4})$"),
    (DateShape::SlashShortYear, r"^(\d{1,2})\s*/\s*(\d{1,2})\s*/\s*(\d{2})$"),
    (DateShape::SlashFullYear, r"^(\d{1,2})\s*/\s*(\d{1,2})\s*/\s*(\d{4})$"),
    (DateShape::HyphenShortYear, r"^(\d{1,2})\s*-\s*(\d{1,2})\s*-\s*(\d{2})$"),
    (DateShape::HyphenFullYear, r"^(\d{1,2})\s*-\s*(\d{1,2})\s*-\s*(\d{4})$"),
];

static SHAPES: LazyLock<Vec<(DateShape, Regex)>> = LazyLock::new(|| {
    SHAPE_PATTERNS
        .iter()
        .map(|(shape, pattern)| (*shape, Regex::new(pattern).expect("Invalid date shape regex")))
        .collect()
});

/// A date token split into its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub shape: DateShape,
}

impl ParsedDate {
    /// Zero-padded `DD.MM.YYYY`.
    pub fn canonical(&self) -> String {
        format!("{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// Expand a two-digit year relative to a reference calendar year.
///
/// Years up to and including the reference year's last two digits belong to
/// the 2000s, later ones to the 1900s.
pub fn expand_two_digit_year(year: u32, reference_year: i32) -> i32 {
    let pivot = reference_year.rem_euclid(100) as u32;
    if year <= pivot {
        2000 + year as i32
    } else {
        1900 + year as i32
    }
}

/// Parses single date tokens into canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    reference_year: i32,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::current()
    }
}

impl DateNormalizer {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Normalizer pivoting on the current local calendar year.
    pub fn current() -> Self {
        Self::new(Local::now().year())
    }

    /// Use the given reference year, falling back to the current year.
    pub fn with_reference(reference_year: Option<i32>) -> Self {
        reference_year.map_or_else(Self::current, Self::new)
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Parse a token that is expected to be a date in its entirety.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(&self, token: &str) -> Option<ParsedDate> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return None;
        }
        for (shape, regex) in SHAPES.iter() {
            let Some(caps) = regex.captures(trimmed) else {
                continue;
            };
            let day = caps[1].parse::<u32>().ok()?;
            let month = caps[2].parse::<u32>().ok()?;
            let year = if shape.has_short_year() {
                expand_two_digit_year(caps[3].parse::<u32>().ok()?, self.reference_year)
            } else {
                caps[3].parse::<i32>().ok()?
            };
            return Some(ParsedDate {
                day,
                month,
                year,
                shape: *shape,
            });
        }
        None
    }

    /// Canonical `DD.MM.YYYY` form of a token, `None` when it is not a date.
    pub fn normalize(&self, token: &str) -> Option<String> {
        self.parse(token).map(|date| date.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> DateNormalizer {
        DateNormalizer::new(2024)
    }

    #[test]
    fn test_short_year_dot() {
        assert_eq!(normalizer().normalize("1.5.24").as_deref(), Some("01.05.2024"));
        assert_eq!(normalizer().normalize("12.09.95").as_deref(), Some("12.09.1995"));
    }

    #[test]
    fn test_packed_shapes() {
        let parsed = normalizer().parse("1305.24").unwrap();
        assert_eq!(parsed.shape, DateShape::PackedDayMonth);
        assert_eq!(parsed.canonical(), "13.05.2024");
        let parsed = normalizer().parse("13052024").unwrap();
        assert_eq!(parsed.shape, DateShape::Packed);
        assert_eq!(parsed.canonical(), "13.05.2024");
    }

    #[test]
    fn test_priority_prefers_short_year() {
        // Four digits could never be a short year, so the full-year rule wins.
        assert_eq!(normalizer().parse("1.1.2001").unwrap().shape, DateShape::DotFullYear);
        assert_eq!(normalizer().parse("1.1.01").unwrap().shape, DateShape::DotShortYear);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        assert_eq!(normalizer().normalize("41.13.2020").as_deref(), Some("41.13.2020"));
    }

    #[test]
    fn test_three_digit_year_rejected() {
        assert!(normalizer().normalize("1.5.202").is_none());
    }

    #[test]
    fn test_expand_year_pivot() {
        assert_eq!(expand_two_digit_year(24, 2024), 2024);
        assert_eq!(expand_two_digit_year(25, 2024), 1925);
        assert_eq!(expand_two_digit_year(0, 2024), 2000);
        assert_eq!(expand_two_digit_year(99, 2099), 2099);
    }
}
