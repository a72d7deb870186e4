//! Configuration options for sheet processing.

use serde::{Deserialize, Serialize};

/// What to do with the first row of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderPolicy {
    /// Drop the first row unless its primary-date cell starts with a date.
    #[default]
    DropUndated,
    /// Never drop rows.
    Keep,
}

/// Options controlling sheet processing behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Header row detection.
    pub header_policy: HeaderPolicy,

    /// Calendar year used as the pivot for two-digit years.
    ///
    /// `None` uses the current local year at run time, so the same recorded
    /// two-digit year may expand differently in different years.
    pub reference_year: Option<i32>,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Options for re-running over already processed output.
    pub fn settled(&self) -> Self {
        Self {
            header_policy: HeaderPolicy::Keep,
            ..self.clone()
        }
    }
}
