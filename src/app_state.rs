use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{CsvDatasetRepository, CsvResultRepository, DatasetRepository, ResultRepository},
    services::{
        enrichment_service::HttpPageEnricher,
        evaluation_service::{run_batch, BatchSummary, EvaluationService},
        model_service::AzureOpenAiClient,
        prompt_builder::PromptBuilder,
    },
};

/// Wires the configured collaborators together for one batch run.
#[derive(Clone)]
pub struct AppState {
    pub evaluation_service: Arc<EvaluationService>,
    pub dataset_repository: Arc<dyn DatasetRepository>,
    pub result_repository: Arc<dyn ResultRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let completion = Arc::new(AzureOpenAiClient::new(&config));
        let enricher = Arc::new(HttpPageEnricher::new(
            config.scrape_timeout,
            config.snippet_chars,
        )?);
        let prompt_builder = PromptBuilder::new(
            config.azure_deployment.clone(),
            config.strategy,
            config.sampling,
        );
        let evaluation_service = Arc::new(EvaluationService::new(
            completion,
            enricher,
            prompt_builder,
            config.pacing,
        ));

        let dataset_repository = Arc::new(CsvDatasetRepository::new(config.input_csv.clone()));
        let result_repository = Arc::new(CsvResultRepository::new(
            config.output_csv.clone(),
            config.strategy.enrich,
        ));

        Ok(Self {
            evaluation_service,
            dataset_repository,
            result_repository,
            config: Arc::new(config),
        })
    }

    pub async fn run(&self) -> AppResult<BatchSummary> {
        log::info!(
            "Starting {} FAIR evaluation of {} (scraping {})",
            self.config.strategy.technique,
            self.config.input_csv.display(),
            if self.config.strategy.enrich { "on" } else { "off" }
        );
        run_batch(
            self.dataset_repository.as_ref(),
            self.result_repository.as_ref(),
            &self.evaluation_service,
        )
        .await
    }
}
