//! Tests for date normalization and search.

use dossier_transform::normalization::{DateFinder, DateNormalizer, find_dates};

fn normalizer() -> DateNormalizer {
    DateNormalizer::new(2024)
}

#[test]
fn normalize_tolerates_padded_separators() {
    let n = normalizer();
    assert_eq!(n.normalize("13. 05. 2024").as_deref(), Some("13.05.2024"));
    assert_eq!(n.normalize("10 . 12 . 2023").as_deref(), Some("10.12.2023"));
    assert_eq!(n.normalize("13.05.2024").as_deref(), Some("13.05.2024"));
}

#[test]
fn normalize_expands_short_years_around_pivot() {
    let n = normalizer();
    assert_eq!(n.normalize("1. 5. 24").as_deref(), Some("01.05.2024"));
    assert_eq!(n.normalize("12. 09. 95").as_deref(), Some("12.09.1995"));
}

#[test]
fn normalize_slash_and_hyphen() {
    let n = normalizer();
    assert_eq!(n.normalize("14 / 07 / 2023").as_deref(), Some("14.07.2023"));
    assert_eq!(n.normalize("19 - 11 - 2022").as_deref(), Some("19.11.2022"));
    assert_eq!(n.normalize("3/4/21").as_deref(), Some("03.04.2021"));
}

#[test]
fn normalize_rejects_non_dates() {
    let n = normalizer();
    assert!(n.normalize("Не дата").is_none());
    assert!(n.normalize("").is_none());
    assert!(n.normalize("14,07,2023").is_none());
    assert!(n.normalize("13.05.2024 задержан").is_none());
}

#[test]
fn find_multiple_dates_in_sentence() {
    let text = "Задержан 10. 01. 2023, освобожден 15. 02. 2023";
    assert_eq!(find_dates(text), vec!["10. 01. 2023", "15. 02. 2023"]);

    let rewrite = DateFinder::new(normalizer()).rewrite(text);
    assert_eq!(rewrite.text, "Задержан 10.01.2023, освобожден 15.02.2023");
    assert_eq!(rewrite.rewritten, 2);
}

#[test]
fn find_ignores_comma_separated() {
    assert!(find_dates("14,07,2023").is_empty());
}

#[test]
fn rewrite_keeps_unparseable_tokens() {
    let rewrite = DateFinder::new(normalizer()).rewrite("срок до 1.5.202 года");
    assert_eq!(rewrite.text, "срок до 1.5.202 года");
    assert_eq!(rewrite.rewritten, 0);
}
