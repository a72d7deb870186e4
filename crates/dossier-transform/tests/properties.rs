//! Property-based tests for date handling and name splitting.

use dossier_transform::names::NameSplitter;
use dossier_transform::normalization::{DateFinder, DateNormalizer, expand_two_digit_year};
use proptest::prelude::*;

/// Whitespace allowed around separators.
fn padding_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just(" ".to_string()), Just("  ".to_string())]
}

fn separator_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('.'), Just('/'), Just('-')]
}

proptest! {
    #[test]
    fn short_year_follows_pivot(year in 0u32..100, reference in 1950i32..2100) {
        let expanded = expand_two_digit_year(year, reference);
        if year <= (reference % 100) as u32 {
            prop_assert_eq!(expanded, 2000 + year as i32);
        } else {
            prop_assert_eq!(expanded, 1900 + year as i32);
        }
    }

    #[test]
    fn canonical_dates_are_fixed_points(day in 1u32..32, month in 1u32..13, year in 1900i32..2100) {
        let normalizer = DateNormalizer::new(2024);
        let canonical = format!("{day:02}.{month:02}.{year:04}");
        prop_assert_eq!(normalizer.normalize(&canonical), Some(canonical.clone()));
        let rewrite = DateFinder::new(normalizer).rewrite(&canonical);
        prop_assert_eq!(rewrite.rewritten, 0);
    }

    #[test]
    fn padded_separators_normalize_like_tight_ones(
        day in 1u32..32,
        month in 1u32..13,
        year in 1950i32..2030,
        separator in separator_strategy(),
        left in padding_strategy(),
        right in padding_strategy(),
    ) {
        let normalizer = DateNormalizer::new(2024);
        let padded = format!("{day}{left}{separator}{right}{month}{left}{separator}{right}{year}");
        let tight = format!("{day}{separator}{month}{separator}{year}");
        prop_assert_eq!(normalizer.normalize(&padded), normalizer.normalize(&tight));
        prop_assert_eq!(
            normalizer.normalize(&padded),
            Some(format!("{day:02}.{month:02}.{year:04}"))
        );
    }

    #[test]
    fn rewrite_is_idempotent(text in "[а-я ]{0,10}[0-9]{1,2} ?[./-] ?[0-9]{1,2} ?[./-] ?[0-9]{2,4}[а-я ]{0,10}") {
        let finder = DateFinder::new(DateNormalizer::new(2024));
        let once = finder.rewrite(&text);
        let twice = finder.rewrite(&once.text);
        prop_assert_eq!(twice.text, once.text);
        prop_assert_eq!(twice.rewritten, 0);
    }

    #[test]
    fn splitting_is_idempotent(text in "[А-Яа-я]{1,12}( [А-Яа-я]{1,12}){0,4}") {
        let splitter = NameSplitter::default();
        let once = splitter.split(&text);
        let twice = splitter.split(&once.text);
        prop_assert_eq!(twice.text, once.text);
    }
}
