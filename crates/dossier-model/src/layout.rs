//! Column layout configuration.
//!
//! The layout is expressed in *source* coordinates: the column positions of
//! the table as extracted, before any column is deleted. Post-deletion
//! positions are derived by the schema mapper and never stored here.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{DossierError, Result};
use crate::role::LogicalRole;

/// Role placement, court-source columns and columns slated for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Role -> 1-based source column.
    pub roles: BTreeMap<LogicalRole, usize>,
    /// Source columns scanned for judicial-history text.
    #[serde(default)]
    pub court_sources: Vec<usize>,
    /// Source columns removed before any row is processed.
    #[serde(default)]
    pub deleted_columns: Vec<usize>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        let roles = BTreeMap::from([
            (LogicalRole::PrimaryDate, 2),
            (LogicalRole::Name, 4),
            (LogicalRole::BirthDate, 5),
            (LogicalRole::EndDate, 8),
            (LogicalRole::EndDateNote, 10),
            (LogicalRole::CourtInfo, 11),
            (LogicalRole::Patronymic, 16),
            (LogicalRole::Address, 17),
            (LogicalRole::Phone, 18),
            (LogicalRole::Other, 19),
        ]);
        Self {
            roles,
            court_sources: vec![6, 7],
            deleted_columns: vec![1, 3],
        }
    }
}

impl ColumnLayout {
    /// Source column of a role.
    pub fn source_column(&self, role: LogicalRole) -> Option<usize> {
        self.roles.get(&role).copied()
    }

    pub fn with_role(mut self, role: LogicalRole, column: usize) -> Self {
        self.roles.insert(role, column);
        self
    }

    pub fn with_court_sources(mut self, columns: Vec<usize>) -> Self {
        self.court_sources = columns;
        self
    }

    pub fn with_deleted_columns(mut self, columns: Vec<usize>) -> Self {
        self.deleted_columns = columns;
        self
    }

    /// Deleted columns, highest first, without duplicates.
    ///
    /// Deleting in this order never shifts a column still waiting to be
    /// deleted.
    pub fn deletion_order(&self) -> Vec<usize> {
        let unique: BTreeSet<usize> = self.deleted_columns.iter().copied().collect();
        unique.into_iter().rev().collect()
    }

    /// The equivalent layout for a table whose columns are already deleted.
    ///
    /// Running with the settled layout over processed output deletes nothing
    /// and addresses the same cells.
    pub fn settled(&self) -> ColumnLayout {
        let order = self.deletion_order();
        let shift = |column: usize| -> usize {
            order
                .iter()
                .fold(column, |current, deleted| if *deleted < current { current - 1 } else { current })
        };
        ColumnLayout {
            roles: self
                .roles
                .iter()
                .map(|(role, column)| (*role, shift(*column)))
                .collect(),
            court_sources: self.court_sources.iter().map(|column| shift(*column)).collect(),
            deleted_columns: Vec::new(),
        }
    }

    /// Check the layout for structural mistakes.
    ///
    /// # Errors
    ///
    /// Returns [`DossierError::UnmappedRole`] when a role has no column and
    /// [`DossierError::InvalidLayout`] for zero indices, shared columns, or a
    /// role/court source placed on a deleted column.
    pub fn validate(&self) -> Result<()> {
        for role in LogicalRole::ALL {
            if !self.roles.contains_key(&role) {
                return Err(DossierError::UnmappedRole(role));
            }
        }
        let deleted: BTreeSet<usize> = self.deleted_columns.iter().copied().collect();
        let mut used: BTreeMap<usize, String> = BTreeMap::new();
        let placements = self
            .roles
            .iter()
            .map(|(role, column)| (role.to_string(), *column))
            .chain(
                self.court_sources
                    .iter()
                    .map(|column| ("court source".to_string(), *column)),
            );
        for (owner, column) in placements {
            if column == 0 {
                return Err(DossierError::InvalidLayout(format!(
                    "{owner} uses column 0; columns are 1-based"
                )));
            }
            if deleted.contains(&column) {
                return Err(DossierError::InvalidLayout(format!(
                    "{owner} is placed on deleted column {column}"
                )));
            }
            if let Some(previous) = used.insert(column, owner.clone()) {
                return Err(DossierError::InvalidLayout(format!(
                    "column {column} is shared by {previous} and {owner}"
                )));
            }
        }
        if deleted.contains(&0) {
            return Err(DossierError::InvalidLayout(
                "column 0 cannot be deleted; columns are 1-based".to_string(),
            ));
        }
        Ok(())
    }
}
