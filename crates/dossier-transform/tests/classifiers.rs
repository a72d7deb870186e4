//! Tests for phone, address and judicial-history classifiers.

use dossier_transform::classify::{AddressPhoneClassifier, CourtInfoClassifier};
use dossier_transform::text_utils::{collapse_whitespace, remove_spans};

#[test]
fn phone_then_address_leaves_residual() {
    let classifier = AddressPhoneClassifier::default();
    let text = "Купчино 8 (921) 123-45-67 г. СПб без работы";
    let phones = classifier.extract_phone(text);
    assert_eq!(phones.joined().as_deref(), Some("8 (921) 123-45-67"));
    let rest = remove_spans(text, &phones.spans());
    let address = classifier.extract_address(&rest).expect("address");
    assert_eq!(address.formatted, "Купчино");
    let residual = remove_spans(&rest, &[(address.start, address.end)]);
    assert_eq!(collapse_whitespace(&residual), "г. СПб без работы");
}

#[test]
fn only_phone_when_no_locator() {
    let classifier = AddressPhoneClassifier::default();
    let text = "Иванов 123-45-67";
    let phones = classifier.extract_phone(text);
    assert_eq!(phones.joined().as_deref(), Some("123-45-67"));
    let rest = remove_spans(text, &phones.spans());
    assert!(classifier.extract_address(&rest).is_none());
    assert_eq!(collapse_whitespace(&rest), "Иванов");
}

#[test]
fn several_phones_joined_with_space() {
    let phones = AddressPhoneClassifier::default().extract_phone("89211234567, 555-66-77");
    assert_eq!(phones.joined().as_deref(), Some("89211234567 555-66-77"));
}

#[test]
fn court_patterns_cover_vocabulary() {
    let classifier = CourtInfoClassifier::default();
    for text in [
        "05.06.2019 Приморский суд",
        "Осужден судом по ст. 228",
        "Кировский р/с",
        "г/с Санкт-Петербурга",
        "постановлением от 1 мая",
        "ч. 1 УК РФ",
        "3 года л/св",
        "ИС 1 год",
        "Мировым судьей участка 5",
        "МССУ № 12",
    ] {
        assert!(classifier.is_court_info(text), "expected court info: {text}");
    }
}

#[test]
fn court_rejects_unrelated_text() {
    let classifier = CourtInfoClassifier::default();
    assert!(!classifier.is_court_info("Иванов Иван Иванович"));
    assert!(!classifier.is_court_info("ул. Садовая д. 5"));
}
