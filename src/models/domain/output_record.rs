use crate::models::domain::{
    dataset_record::DatasetRecord,
    enrichment::EnrichmentProjection,
    score_row::{ScoreRow, ValidationResult},
};

/// Prefix written in place of the raw completion when the call itself failed.
pub const COMPLETION_ERROR_PREFIX: &str = "Error: ";

/// One output row, produced exactly once per input row.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputRecord {
    pub record: DatasetRecord,
    pub raw_output: String,
    pub enrichment: Option<EnrichmentProjection>,
    pub scores: ScoreRow,
    pub validation: ValidationResult,
    pub fair_percentage: Option<f64>,
    pub completion_failed: bool,
}

impl OutputRecord {
    pub fn completion_failure(
        record: DatasetRecord,
        enrichment: Option<EnrichmentProjection>,
        error: impl std::fmt::Display,
    ) -> Self {
        OutputRecord {
            record,
            raw_output: format!("{}{}", COMPLETION_ERROR_PREFIX, error),
            enrichment,
            scores: ScoreRow::unparsed(),
            validation: ValidationResult::invalid(),
            fair_percentage: None,
            completion_failed: true,
        }
    }

    /// Row that failed input validation and was never sent for scoring.
    pub fn invalid_input(record: DatasetRecord, reason: impl std::fmt::Display) -> Self {
        OutputRecord {
            record,
            raw_output: format!("{}invalid input row: {}", COMPLETION_ERROR_PREFIX, reason),
            enrichment: None,
            scores: ScoreRow::unparsed(),
            validation: ValidationResult::invalid(),
            fair_percentage: None,
            completion_failed: false,
        }
    }
}
