//! Free-text field classifiers.
//!
//! Each classifier reports "nothing found" as an empty result. Callers
//! decide whether to relocate, and remove exactly the matched bytes.

pub mod address;
pub mod court;
pub mod phone;

pub use address::{AddressExtractor, AddressMatch};
pub use court::CourtInfoClassifier;
pub use phone::{PhoneExtraction, PhoneExtractor, PhoneMatch};

/// Phone and address extractors shared by the row stages.
///
/// Callers extract phones first and run address extraction on what the
/// phones left.
#[derive(Debug, Clone, Default)]
pub struct AddressPhoneClassifier {
    phones: PhoneExtractor,
    addresses: AddressExtractor,
}

impl AddressPhoneClassifier {
    pub fn new(phones: PhoneExtractor, addresses: AddressExtractor) -> Self {
        Self { phones, addresses }
    }

    pub fn extract_phone(&self, text: &str) -> PhoneExtraction {
        self.phones.extract(text)
    }

    pub fn extract_address(&self, text: &str) -> Option<AddressMatch> {
        self.addresses.extract(text)
    }
}
