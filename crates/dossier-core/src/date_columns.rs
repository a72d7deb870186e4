//! Stages for the dedicated date columns.

use dossier_model::{Row, redact_value};
use dossier_transform::normalization::{DateFinder, DateNormalizer, find_date_spans, find_dates};
use dossier_transform::text_utils::{collapse_whitespace, merge_text, remove_spans};
use tracing::debug;

/// What happened to an end-date cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndDateOutcome {
    pub date_normalized: bool,
    pub text_relocated: bool,
}

/// Date normalization for the primary, birth and end-date columns.
#[derive(Debug, Clone, Copy)]
pub struct DateColumnStages {
    normalizer: DateNormalizer,
}

impl DateColumnStages {
    pub fn new(normalizer: DateNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn finder(&self) -> DateFinder {
        DateFinder::new(self.normalizer)
    }

    /// Rewrite a cell that holds a single date. Anything else is left alone.
    pub fn normalize_primary(&self, row: &mut Row, column: usize) -> bool {
        let Some(value) = row.get(column) else {
            return false;
        };
        match self.normalizer.normalize(value) {
            Some(canonical) if canonical != value => {
                row.set(column, Some(canonical));
                true
            }
            _ => false,
        }
    }

    /// Keep only the first date of a birth-date cell, normalized.
    ///
    /// Markers such as `г.р.` are dropped with the rest of the text.
    pub fn normalize_birth(&self, row: &mut Row, column: usize) -> bool {
        let Some(value) = row.get(column) else {
            return false;
        };
        let Some(first) = find_date_spans(value).into_iter().next() else {
            return false;
        };
        match self.normalizer.normalize(&first.text) {
            Some(canonical) if canonical != value => {
                row.set(column, Some(canonical));
                true
            }
            _ => false,
        }
    }

    /// Apply the end-date policy, relocating stray text to `note_column`.
    ///
    /// One distinct date is kept, two keep the second; either way the text
    /// around the dates moves to the note. No date or three and more means the
    /// whole cell is a note and the date cell is cleared.
    pub fn process_end_date(&self, row: &mut Row, column: usize, note_column: usize) -> EndDateOutcome {
        let mut outcome = EndDateOutcome::default();
        let Some(value) = row.get(column).map(str::trim).map(str::to_string) else {
            return outcome;
        };
        let dates = find_dates(&value);
        let chosen = match dates.len() {
            1 => &dates[0],
            2 => &dates[1],
            count => {
                debug!(dates = count, text = redact_value(&value), "end date cell is a note");
                let merged = merge_text(row.get(note_column), &value);
                row.set(note_column, merged);
                row.set(column, None);
                outcome.text_relocated = true;
                return outcome;
            }
        };
        let Some(canonical) = self.normalizer.normalize(chosen) else {
            return outcome;
        };
        let spans: Vec<(usize, usize)> = find_date_spans(&value).iter().map(|span| span.range()).collect();
        let note = collapse_whitespace(&remove_spans(&value, &spans));
        if !note.is_empty() {
            let merged = merge_text(row.get(note_column), &note);
            row.set(note_column, merged);
            outcome.text_relocated = true;
        }
        if canonical != value {
            outcome.date_normalized = canonical != *chosen || dates.len() == 2;
            row.set(column, Some(canonical));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages() -> DateColumnStages {
        DateColumnStages::new(DateNormalizer::new(2024))
    }

    fn row_with(column: usize, value: &str) -> Row {
        let mut row = Row::new();
        row.set(column, Some(value.to_string()));
        row
    }

    #[test]
    fn test_primary_only_whole_cell() {
        let mut row = row_with(1, "13. 05. 2024");
        assert!(stages().normalize_primary(&mut row, 1));
        assert_eq!(row.get(1), Some("13.05.2024"));

        let mut row = row_with(1, "13.05.2024 и далее");
        assert!(!stages().normalize_primary(&mut row, 1));
        assert_eq!(row.get(1), Some("13.05.2024 и далее"));
    }

    #[test]
    fn test_birth_keeps_first_date() {
        let mut row = row_with(3, "1.2.90 г.р.");
        assert!(stages().normalize_birth(&mut row, 3));
        assert_eq!(row.get(3), Some("01.02.1990"));
        assert!(!stages().normalize_birth(&mut row, 3));
    }

    #[test]
    fn test_end_date_two_dates_keeps_second() {
        let mut row = row_with(6, "14.07.25 14.08.25");
        let outcome = stages().process_end_date(&mut row, 6, 8);
        assert!(outcome.date_normalized);
        assert!(!outcome.text_relocated);
        assert_eq!(row.get(6), Some("14.08.1925"));
        assert_eq!(row.get(8), None);
    }

    #[test]
    fn test_end_date_second_by_position() {
        // The compact date is found by a later pattern but sits first.
        let mut row = row_with(6, "13052024 1.2.23");
        let outcome = stages().process_end_date(&mut row, 6, 8);
        assert!(outcome.date_normalized);
        assert!(!outcome.text_relocated);
        assert_eq!(row.get(6), Some("01.02.2023"));
        assert_eq!(row.get(8), None);
    }

    #[test]
    fn test_end_date_with_text() {
        let mut row = row_with(6, "01.03.2025 УДО");
        row.set(8, Some("ранее".to_string()));
        let outcome = stages().process_end_date(&mut row, 6, 8);
        assert!(!outcome.date_normalized);
        assert!(outcome.text_relocated);
        assert_eq!(row.get(6), Some("01.03.2025"));
        assert_eq!(row.get(8), Some("ранее УДО"));
    }

    #[test]
    fn test_end_date_text_only() {
        let mut row = row_with(6, "условно");
        let outcome = stages().process_end_date(&mut row, 6, 8);
        assert!(outcome.text_relocated);
        assert_eq!(row.get(6), None);
        assert_eq!(row.get(8), Some("условно"));
    }

    #[test]
    fn test_end_date_three_dates_relocated_whole() {
        let mut row = row_with(6, "1.1.20 2.2.21 3.3.22");
        let outcome = stages().process_end_date(&mut row, 6, 8);
        assert!(outcome.text_relocated);
        assert_eq!(row.get(6), None);
        assert_eq!(row.get(8), Some("1.1.20 2.2.21 3.3.22"));
    }
}
