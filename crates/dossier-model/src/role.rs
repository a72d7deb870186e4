//! Logical field roles.
//!
//! A role names the purpose of a column independently of where that column
//! physically sits in a table. Roles are resolved to physical indices once per
//! sheet by the schema mapper.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Field purpose of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalRole {
    /// Record date (first data column of a table).
    PrimaryDate,
    /// Date of birth, possibly followed by markers like "г.р.".
    BirthDate,
    /// Sentence end date, possibly with trailing free text.
    EndDate,
    /// Receives free text found next to the end date.
    EndDateNote,
    /// Personal name; also the source cell of the row field pipeline.
    Name,
    /// Receives patronymics detached from the name text.
    Patronymic,
    /// Receives the claimed postal address.
    Address,
    /// Receives the claimed phone numbers.
    Phone,
    /// Judicial-history text.
    CourtInfo,
    /// Residual text nobody else claimed.
    Other,
}

impl LogicalRole {
    /// Every role in declaration order.
    pub const ALL: [LogicalRole; 10] = [
        LogicalRole::PrimaryDate,
        LogicalRole::BirthDate,
        LogicalRole::EndDate,
        LogicalRole::EndDateNote,
        LogicalRole::Name,
        LogicalRole::Patronymic,
        LogicalRole::Address,
        LogicalRole::Phone,
        LogicalRole::CourtInfo,
        LogicalRole::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalRole::PrimaryDate => "primary_date",
            LogicalRole::BirthDate => "birth_date",
            LogicalRole::EndDate => "end_date",
            LogicalRole::EndDateNote => "end_date_note",
            LogicalRole::Name => "name",
            LogicalRole::Patronymic => "patronymic",
            LogicalRole::Address => "address",
            LogicalRole::Phone => "phone",
            LogicalRole::CourtInfo => "court_info",
            LogicalRole::Other => "other",
        }
    }
}

impl fmt::Display for LogicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
