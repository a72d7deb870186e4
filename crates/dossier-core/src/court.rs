//! Judicial-history relocation and date fixup.

use dossier_model::{Grid, Row, redact_value};
use dossier_transform::classify::CourtInfoClassifier;
use dossier_transform::normalization::DateFinder;
use dossier_transform::text_utils::merge_text;
use tracing::debug;

/// Totals of the court date fixup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourtFixup {
    pub cells_reformatted: usize,
    pub dates_normalized: usize,
}

/// Move judicial-history cells from the source columns into `target`.
///
/// Each matching source cell is merged into the target and cleared. Returns
/// the number of cells moved.
pub fn relocate_court_sources(
    row: &mut Row,
    sources: &[usize],
    target: usize,
    classifier: &CourtInfoClassifier,
) -> usize {
    let mut moved = 0;
    for &column in sources {
        let Some(value) = row.get(column).map(|text| text.trim().to_string()) else {
            continue;
        };
        if !classifier.is_court_info(&value) {
            continue;
        }
        let merged = merge_text(row.get(target), &value);
        row.set(target, merged);
        row.set(column, None);
        moved += 1;
        debug!(column, target, text = redact_value(&value), "relocated court info");
    }
    moved
}

/// Rewrite the dates embedded in every cell of the judicial-history column.
pub fn fixup_court_dates(grid: &mut Grid, column: usize, finder: &DateFinder) -> CourtFixup {
    let mut fixup = CourtFixup::default();
    for row in grid.rows_mut() {
        let Some(value) = row.get(column) else {
            continue;
        };
        let rewrite = finder.rewrite(value);
        if rewrite.rewritten == 0 {
            continue;
        }
        row.set(column, Some(rewrite.text));
        fixup.cells_reformatted += 1;
        fixup.dates_normalized += rewrite.rewritten;
    }
    fixup
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_transform::normalization::DateNormalizer;

    #[test]
    fn test_relocate_merges_and_clears() {
        let mut row = Row::new();
        row.set(4, Some("осужденный 1.2.21".to_string()));
        row.set(5, Some("без замечаний".to_string()));
        row.set(9, Some("ранее".to_string()));
        let moved = relocate_court_sources(&mut row, &[4, 5], 9, &CourtInfoClassifier::default());
        assert_eq!(moved, 1);
        assert_eq!(row.get(4), None);
        assert_eq!(row.get(5), Some("без замечаний"));
        assert_eq!(row.get(9), Some("ранее осужденный 1.2.21"));
    }

    #[test]
    fn test_fixup_rewrites_padded_dates() {
        let mut grid = Grid::from_text_rows(vec![
            vec!["Приговор от 10 . 12 . 2023 суд"],
            vec!["12.03.2021 Кировский суд"],
        ]);
        let finder = DateFinder::new(DateNormalizer::new(2024));
        let fixup = fixup_court_dates(&mut grid, 1, &finder);
        assert_eq!(fixup.cells_reformatted, 1);
        assert_eq!(fixup.dates_normalized, 1);
        assert_eq!(grid.cell(1, 1), Some("Приговор от 10.12.2023 суд"));
        assert_eq!(fixup_court_dates(&mut grid, 1, &finder), CourtFixup::default());
    }
}
