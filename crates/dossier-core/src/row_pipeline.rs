//! Per-row residual text pipeline.
//!
//! The Name cell's text is threaded through an ordered list of stages. Each
//! stage sees the residual left by the previous one, claims values for target
//! roles, and hands on the residual with exactly its matched bytes removed.
//!
//! # Standard Stage Order
//!
//! 1. **PhoneStage** - phone literals
//! 2. **AddressStage** - leading words before a locator marker
//! 3. **CourtStage** - judicial-history text, claimed whole
//! 4. **NameStage** - glued-name split, stray patronymic, leading name
//! 5. **OtherStage** - whatever is left, trimmed and collapsed

use std::sync::Arc;

use dossier_model::{LogicalRole, Row, RowStats, redact_value};
use dossier_transform::classify::{AddressPhoneClassifier, CourtInfoClassifier};
use dossier_transform::names::{NameSplitter, PatronymicRelocator, claim_leading_name};
use dossier_transform::text_utils::{collapse_whitespace, merge_text, remove_spans};
use tracing::{debug, trace};

use crate::schema::RoleColumns;

/// A value claimed for a target role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub role: LogicalRole,
    pub value: String,
}

impl Claim {
    pub fn new(role: LogicalRole, value: impl Into<String>) -> Self {
        Self {
            role,
            value: value.into(),
        }
    }
}

/// Result of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub residual: String,
    pub claims: Vec<Claim>,
    pub words_split: usize,
}

impl StageOutput {
    /// Nothing claimed; the residual passes through.
    pub fn pass(residual: &str) -> Self {
        Self {
            residual: residual.to_string(),
            claims: Vec::new(),
            words_split: 0,
        }
    }
}

/// A single stage of the row pipeline.
pub trait FieldStage: Send + Sync {
    /// Claim values from the residual text.
    fn apply(&self, residual: &str) -> StageOutput;

    /// Human-readable name for this stage (for logging/debugging).
    fn step_name(&self) -> &str;
}

// ============================================================================
// Standard Stages
// ============================================================================

/// Stage 1: phone literals, joined with a single space.
#[derive(Debug, Clone, Default)]
pub struct PhoneStage {
    classifier: Arc<AddressPhoneClassifier>,
}

impl PhoneStage {
    pub fn new(classifier: Arc<AddressPhoneClassifier>) -> Self {
        Self { classifier }
    }
}

impl FieldStage for PhoneStage {
    fn apply(&self, residual: &str) -> StageOutput {
        let phones = self.classifier.extract_phone(residual);
        let Some(joined) = phones.joined() else {
            return StageOutput::pass(residual);
        };
        StageOutput {
            residual: remove_spans(residual, &phones.spans()),
            claims: vec![Claim::new(LogicalRole::Phone, joined)],
            words_split: 0,
        }
    }

    fn step_name(&self) -> &str {
        "phone"
    }
}

/// Stage 2: leading address words, looked up after phones are removed.
#[derive(Debug, Clone, Default)]
pub struct AddressStage {
    classifier: Arc<AddressPhoneClassifier>,
}

impl AddressStage {
    pub fn new(classifier: Arc<AddressPhoneClassifier>) -> Self {
        Self { classifier }
    }
}

impl FieldStage for AddressStage {
    fn apply(&self, residual: &str) -> StageOutput {
        let Some(found) = self.classifier.extract_address(residual) else {
            return StageOutput::pass(residual);
        };
        StageOutput {
            residual: remove_spans(residual, &[(found.start, found.end)]),
            claims: vec![Claim::new(LogicalRole::Address, found.formatted)],
            words_split: 0,
        }
    }

    fn step_name(&self) -> &str {
        "address"
    }
}

/// Stage 3: judicial history claims the whole residual.
#[derive(Debug, Clone, Default)]
pub struct CourtStage {
    classifier: CourtInfoClassifier,
}

impl FieldStage for CourtStage {
    fn apply(&self, residual: &str) -> StageOutput {
        if !self.classifier.is_court_info(residual) {
            return StageOutput::pass(residual);
        }
        StageOutput {
            residual: String::new(),
            claims: vec![Claim::new(LogicalRole::CourtInfo, collapse_whitespace(residual))],
            words_split: 0,
        }
    }

    fn step_name(&self) -> &str {
        "court"
    }
}

/// Stage 4: split glued names, lift a stray patronymic, claim the name.
#[derive(Debug, Clone, Default)]
pub struct NameStage {
    splitter: NameSplitter,
    relocator: PatronymicRelocator,
}

impl FieldStage for NameStage {
    fn apply(&self, residual: &str) -> StageOutput {
        let split = self.splitter.split(residual);
        let mut claims = Vec::new();
        let mut text = split.text;
        // A patronymic only moves when it leads the residual and the next
        // word is a stop word such as a city marker ("Петрович г. СПб").
        // That happens after the address stage took the name words in front.
        if let Some(moved) = self.relocator.relocate(&text) {
            claims.push(Claim::new(LogicalRole::Patronymic, moved.patronymic));
            text = moved.residual;
        }
        if let Some(name) = claim_leading_name(&text) {
            text = remove_spans(&text, &[(name.start, name.end)]);
            claims.push(Claim::new(LogicalRole::Name, name.name));
        }
        StageOutput {
            residual: text,
            claims,
            words_split: split.words_split,
        }
    }

    fn step_name(&self) -> &str {
        "name"
    }
}

/// Stage 5: commit the remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtherStage;

impl FieldStage for OtherStage {
    fn apply(&self, residual: &str) -> StageOutput {
        let other = collapse_whitespace(residual);
        if other.is_empty() {
            return StageOutput::pass("");
        }
        StageOutput {
            residual: String::new(),
            claims: vec![Claim::new(LogicalRole::Other, other)],
            words_split: 0,
        }
    }

    fn step_name(&self) -> &str {
        "other"
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Everything the stages claimed from one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub claims: Vec<Claim>,
    pub words_split: usize,
    /// Residual after the last stage; empty when the pipeline ends with
    /// [`OtherStage`].
    pub residual: String,
}

impl PipelineOutcome {
    /// First value claimed for a role.
    pub fn claimed(&self, role: LogicalRole) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.role == role)
            .map(|claim| claim.value.as_str())
    }
}

/// An ordered list of field stages.
pub struct RowFieldPipeline {
    stages: Vec<Box<dyn FieldStage>>,
}

impl Default for RowFieldPipeline {
    fn default() -> Self {
        let classifier = Arc::new(AddressPhoneClassifier::default());
        Self::new()
            .add_stage(Box::new(PhoneStage::new(Arc::clone(&classifier))))
            .add_stage(Box::new(AddressStage::new(classifier)))
            .add_stage(Box::new(CourtStage::default()))
            .add_stage(Box::new(NameStage::default()))
            .add_stage(Box::new(OtherStage))
    }
}

impl RowFieldPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage(mut self, stage: Box<dyn FieldStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// List stage names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.step_name()).collect()
    }

    /// Thread a text through every stage.
    pub fn run(&self, text: &str) -> PipelineOutcome {
        let mut outcome = PipelineOutcome {
            residual: text.to_string(),
            ..PipelineOutcome::default()
        };
        for stage in &self.stages {
            let output = stage.apply(&outcome.residual);
            for claim in &output.claims {
                trace!(
                    stage = stage.step_name(),
                    role = %claim.role,
                    value = redact_value(&claim.value),
                    "claimed"
                );
            }
            outcome.claims.extend(output.claims);
            outcome.words_split += output.words_split;
            outcome.residual = output.residual;
        }
        outcome
    }

    /// Run over a row's Name cell and write the claims into the row.
    ///
    /// The Name cell is rewritten with the claimed name, or cleared when no
    /// name was claimed. Every other claim is merged into its target cell.
    pub fn apply_to_row(&self, row: &mut Row, columns: &RoleColumns) -> RowStats {
        let mut stats = RowStats::default();
        let Some(source) = row.get(columns.name).map(str::to_string) else {
            return stats;
        };
        let outcome = self.run(&source);
        stats.name_splits += outcome.words_split;

        let name = outcome.claimed(LogicalRole::Name).map(str::to_string);
        if name.as_deref() != Some(source.as_str()) {
            debug!(
                from = redact_value(&source),
                to = redact_value(name.as_deref().unwrap_or_default()),
                "rewrote name cell"
            );
            if name.is_some() {
                stats.relocations.name += 1;
            }
            row.set(columns.name, name);
        }

        for claim in outcome.claims.iter().filter(|c| c.role != LogicalRole::Name) {
            let column = columns.column(claim.role);
            let merged = merge_text(row.get(column), &claim.value);
            row.set(column, merged);
            let counter = match claim.role {
                LogicalRole::Phone => &mut stats.relocations.phone,
                LogicalRole::Address => &mut stats.relocations.address,
                LogicalRole::CourtInfo => &mut stats.relocations.court_info,
                LogicalRole::Patronymic => &mut stats.relocations.patronymic,
                LogicalRole::EndDateNote => &mut stats.relocations.end_date_note,
                _ => &mut stats.relocations.other,
            };
            *counter += 1;
            debug!(role = %claim.role, column, "relocated value");
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> RoleColumns {
        RoleColumns {
            primary_date: 1,
            birth_date: 2,
            end_date: 3,
            end_date_note: 4,
            name: 5,
            patronymic: 6,
            address: 7,
            phone: 8,
            court_info: 9,
            other: 10,
        }
    }

    #[test]
    fn test_standard_stage_order() {
        let pipeline = RowFieldPipeline::default();
        assert_eq!(
            pipeline.step_names(),
            vec!["phone", "address", "court", "name", "other"]
        );
    }

    #[test]
    fn test_name_only() {
        let outcome = RowFieldPipeline::default().run("ПетровПетрПетрович");
        assert_eq!(outcome.claimed(LogicalRole::Name), Some("Петров Петр Петрович"));
        assert_eq!(outcome.words_split, 1);
        assert_eq!(outcome.claimed(LogicalRole::Other), None);
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn test_court_claims_whole_residual() {
        let outcome = RowFieldPipeline::default().run("Осужден Кировским р/с  ст. 158");
        assert_eq!(
            outcome.claimed(LogicalRole::CourtInfo),
            Some("Осужден Кировским р/с ст. 158")
        );
        assert_eq!(outcome.claimed(LogicalRole::Name), None);
    }

    #[test]
    fn test_row_claims_merge_into_targets() {
        let mut row = Row::new();
        row.set(5, Some("Сидоров Сидор без работы 123-45-67".to_string()));
        row.set(10, Some("ранее".to_string()));
        let stats = RowFieldPipeline::default().apply_to_row(&mut row, &columns());
        assert_eq!(row.get(5), Some("Сидоров Сидор"));
        assert_eq!(row.get(8), Some("123-45-67"));
        assert_eq!(row.get(10), Some("ранее без работы"));
        assert_eq!(stats.relocations.phone, 1);
        assert_eq!(stats.relocations.other, 1);
        assert_eq!(stats.relocations.name, 1);
    }

    #[test]
    fn test_address_and_stray_patronymic_relocated() {
        let mut row = Row::new();
        row.set(5, Some("Иванов Иван Сергеевич Петрович г. СПб".to_string()));
        let stats = RowFieldPipeline::default().apply_to_row(&mut row, &columns());
        assert_eq!(row.get(7), Some("Иванов Иван Сергеевич"));
        assert_eq!(row.get(6), Some("Петрович"));
        assert_eq!(row.get(10), Some("г. СПб"));
        assert_eq!(row.get(5), None);
        assert_eq!(stats.relocations.address, 1);
        assert_eq!(stats.relocations.patronymic, 1);
        assert_eq!(stats.relocations.name, 0);
    }

    #[test]
    fn test_address_merges_into_occupied_cell() {
        let mut row = Row::new();
        row.set(5, Some("Садовая 12 ул. Гороховая".to_string()));
        row.set(7, Some("кв. 3".to_string()));
        let stats = RowFieldPipeline::default().apply_to_row(&mut row, &columns());
        assert_eq!(row.get(7), Some("кв. 3 Садовая 12"));
        assert_eq!(row.get(10), Some("ул. Гороховая"));
        assert_eq!(row.get(5), None);
        assert_eq!(stats.relocations.address, 1);
        assert_eq!(stats.relocations.other, 1);
    }

    #[test]
    fn test_glued_court_phrase_claimed_on_first_pass() {
        let pipeline = RowFieldPipeline::default();
        let mut row = Row::new();
        row.set(5, Some("МировымСудьей участка 5".to_string()));
        pipeline.apply_to_row(&mut row, &columns());
        assert_eq!(row.get(9), Some("МировымСудьей участка 5"));
        assert_eq!(row.get(5), None);
        let settled = row.clone();
        let stats = pipeline.apply_to_row(&mut row, &columns());
        assert_eq!(row, settled);
        assert_eq!(stats, RowStats::default());
    }

    #[test]
    fn test_settled_name_is_untouched() {
        let mut row = Row::new();
        row.set(5, Some("Сидоров Сидор".to_string()));
        let before = row.clone();
        let stats = RowFieldPipeline::default().apply_to_row(&mut row, &columns());
        assert_eq!(row, before);
        assert_eq!(stats, RowStats::default());
    }
}
