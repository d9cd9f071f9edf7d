use std::{fmt, sync::Arc, time::Duration};

use validator::Validate;

use crate::{
    errors::AppResult,
    models::domain::{DatasetRecord, EnrichmentProjection, EnrichmentSummary, OutputRecord},
    repositories::{DatasetRepository, ResultRepository},
    services::{
        enrichment_service::PageEnricher, model_service::CompletionClient,
        prompt_builder::PromptBuilder, response_parser, score_validator,
    },
};

/// Sequential per-row pipeline: enrich, prompt, complete, parse, validate.
pub struct EvaluationService {
    completion: Arc<dyn CompletionClient>,
    enricher: Arc<dyn PageEnricher>,
    prompt_builder: PromptBuilder,
    pacing: Duration,
}

impl EvaluationService {
    pub fn new(
        completion: Arc<dyn CompletionClient>,
        enricher: Arc<dyn PageEnricher>,
        prompt_builder: PromptBuilder,
        pacing: Duration,
    ) -> Self {
        Self {
            completion,
            enricher,
            prompt_builder,
            pacing,
        }
    }

    /// One output per input, same order. Row failures are recorded, never raised.
    pub async fn run(&self, records: &[DatasetRecord]) -> Vec<OutputRecord> {
        let total = records.len();
        let mut results = Vec::with_capacity(total);

        for (idx, record) in records.iter().enumerate() {
            log::info!("[{}/{}] Evaluating FAIR for: {}", idx + 1, total, record.name);
            results.push(self.evaluate(record).await);

            // Not adaptive: the delay is the same after successes and failures.
            tokio::time::sleep(self.pacing).await;
        }

        results
    }

    pub async fn evaluate(&self, record: &DatasetRecord) -> OutputRecord {
        if let Err(err) = record.validate() {
            log::warn!("Skipping input row {:?}: {}", record.name, err);
            return OutputRecord::invalid_input(record.clone(), err);
        }

        let enrichment = if self.prompt_builder.strategy().enrich {
            Some(self.enrich(record).await)
        } else {
            None
        };
        let projection = enrichment.as_ref().map(EnrichmentProjection::from);

        let payload = self.prompt_builder.build(record, enrichment.as_ref());
        let raw_output = match self.completion.complete(&payload).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Error with {}: {}", record.name, err);
                return OutputRecord::completion_failure(record.clone(), projection, err);
            }
        };
        log::debug!("Completion for {}:\n{}", record.name, raw_output);

        let scores = response_parser::parse(&raw_output);
        if !scores.parse_succeeded {
            log::warn!("No score table found in completion for {}", record.name);
        }
        let validation = score_validator::validate(&scores);
        if scores.parse_succeeded && !validation.all_valid {
            log::warn!("Out-of-range scores for {}: {:?}", record.name, scores);
        }

        OutputRecord {
            record: record.clone(),
            raw_output,
            enrichment: projection,
            fair_percentage: score_validator::fair_percentage(&scores),
            scores,
            validation,
            completion_failed: false,
        }
    }

    async fn enrich(&self, record: &DatasetRecord) -> EnrichmentSummary {
        log::info!("Scraping website: {}", record.url);
        match self.enricher.enrich(&record.url).await {
            Ok(summary) => summary,
            Err(err) => {
                log::warn!("Could not scrape {} for {}: {}", record.url, record.name, err);
                EnrichmentSummary::from_failure(&err)
            }
        }
    }
}

/// Counts reported to the operator at the end of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub all_valid: usize,
    pub failed_calls: usize,
    pub destination: String,
}

impl BatchSummary {
    pub fn from_records(records: &[OutputRecord], destination: impl Into<String>) -> Self {
        Self {
            total: records.len(),
            parsed: records.iter().filter(|r| r.scores.parse_succeeded).count(),
            all_valid: records.iter().filter(|r| r.validation.all_valid).count(),
            failed_calls: records.iter().filter(|r| r.completion_failed).count(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FAIR evaluation complete: {} rows, {} parsed, {} with all scores valid, {} failed calls. Results saved to: {}",
            self.total, self.parsed, self.all_valid, self.failed_calls, self.destination
        )
    }
}

/// Loads every input row, evaluates them in order and persists the results once.
///
/// Input problems abort before the first completion call. Nothing is written
/// until every row has been evaluated.
pub async fn run_batch(
    datasets: &dyn DatasetRepository,
    results: &dyn ResultRepository,
    service: &EvaluationService,
) -> AppResult<BatchSummary> {
    let records = datasets.load_all()?;
    let outputs = service.run(&records).await;
    results.save_all(&outputs)?;

    let summary = BatchSummary::from_records(&outputs, results.destination());
    log::info!("{}", summary);
    Ok(summary)
}
