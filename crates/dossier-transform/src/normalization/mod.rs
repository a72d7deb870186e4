//! Date recognition and normalization.
//!
//! [`DateNormalizer`] handles a single isolated token, [`DateFinder`] scans
//! free text and rewrites every date it contains.

pub mod date;
pub mod finder;

pub use date::{DateNormalizer, DateShape, ParsedDate, expand_two_digit_year};
pub use finder::{DateFinder, DateRewrite, DateSpan, find_date_spans, find_dates, looks_like_date};
