//! Text-level transformations for tabular person records.
//!
//! This crate holds the stateless pieces of record normalization:
//!
//! - **normalization**: single-token date parsing and free-text date search/rewrite
//! - **classify**: phone, address and judicial-history classifiers
//! - **names**: glued-name splitting, stray patronymic relocation, leading name claim
//! - **vocabulary**: keyword lists and patterns driving the classifiers
//! - **text_utils**: whitespace and byte-span helpers

pub mod classify;
pub mod names;
pub mod normalization;
pub mod text_utils;
pub mod vocabulary;

// Re-export common types for external use
pub use classify::{AddressExtractor, AddressPhoneClassifier, CourtInfoClassifier, PhoneExtractor};
pub use names::{NameClaim, NameSplit, NameSplitter, PatronymicMove, PatronymicRelocator, claim_leading_name};
pub use normalization::{DateFinder, DateNormalizer, DateRewrite, DateSpan, find_dates, looks_like_date};
pub use text_utils::{collapse_whitespace, merge_text};
