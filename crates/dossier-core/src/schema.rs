//! Role to physical column mapping across column deletion.
//!
//! A [`SchemaMap`] is derived once per sheet from a [`ColumnLayout`]. It
//! applies the layout's deletions to a grid highest column first and answers
//! "where does this role live now". Callers never see deletion offsets.

use dossier_model::{ColumnLayout, DossierError, Grid, LogicalRole, Result};
use tracing::debug;

/// Post-deletion column of every role, resolved before the row pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColumns {
    pub primary_date: usize,
    pub birth_date: usize,
    pub end_date: usize,
    pub end_date_note: usize,
    pub name: usize,
    pub patronymic: usize,
    pub address: usize,
    pub phone: usize,
    pub court_info: usize,
    pub other: usize,
}

impl RoleColumns {
    pub fn column(&self, role: LogicalRole) -> usize {
        match role {
            LogicalRole::PrimaryDate => self.primary_date,
            LogicalRole::BirthDate => self.birth_date,
            LogicalRole::EndDate => self.end_date,
            LogicalRole::EndDateNote => self.end_date_note,
            LogicalRole::Name => self.name,
            LogicalRole::Patronymic => self.patronymic,
            LogicalRole::Address => self.address,
            LogicalRole::Phone => self.phone,
            LogicalRole::CourtInfo => self.court_info,
            LogicalRole::Other => self.other,
        }
    }
}

/// Column schema for one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMap {
    source: ColumnLayout,
    settled: ColumnLayout,
    columns: RoleColumns,
    deletion_order: Vec<usize>,
}

impl SchemaMap {
    /// Validate a layout and compute post-deletion positions.
    ///
    /// # Errors
    ///
    /// Returns the layout's validation error.
    pub fn derive(layout: &ColumnLayout) -> Result<Self> {
        layout.validate()?;
        let settled = layout.settled();
        let index = |role: LogicalRole| -> Result<usize> {
            settled
                .source_column(role)
                .ok_or(DossierError::UnmappedRole(role))
        };
        let columns = RoleColumns {
            primary_date: index(LogicalRole::PrimaryDate)?,
            birth_date: index(LogicalRole::BirthDate)?,
            end_date: index(LogicalRole::EndDate)?,
            end_date_note: index(LogicalRole::EndDateNote)?,
            name: index(LogicalRole::Name)?,
            patronymic: index(LogicalRole::Patronymic)?,
            address: index(LogicalRole::Address)?,
            phone: index(LogicalRole::Phone)?,
            court_info: index(LogicalRole::CourtInfo)?,
            other: index(LogicalRole::Other)?,
        };
        Ok(Self {
            source: layout.clone(),
            deletion_order: layout.deletion_order(),
            settled,
            columns,
        })
    }

    /// Current column of a role.
    pub fn index(&self, role: LogicalRole) -> usize {
        self.columns.column(role)
    }

    pub fn columns(&self) -> RoleColumns {
        self.columns
    }

    /// Current columns scanned for judicial-history text.
    pub fn court_sources(&self) -> &[usize] {
        &self.settled.court_sources
    }

    /// Column of a role before deletion, for inspecting the raw table.
    pub fn source_index(&self, role: LogicalRole) -> Option<usize> {
        self.source.source_column(role)
    }

    /// Layout to use when re-running over this schema's output.
    pub fn settled_layout(&self) -> &ColumnLayout {
        &self.settled
    }

    pub fn deletion_count(&self) -> usize {
        self.deletion_order.len()
    }

    /// Delete the layout's columns from the grid, highest first.
    ///
    /// Returns the number of columns deleted.
    pub fn apply_deletions(&self, grid: &mut Grid) -> Result<usize> {
        for column in &self.deletion_order {
            grid.delete_column(*column)?;
            debug!(column, "deleted column");
        }
        Ok(self.deletion_order.len())
    }
}
