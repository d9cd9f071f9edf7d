pub mod dataset_record;
pub mod enrichment;
pub mod fair;
pub mod output_record;
pub mod prompt;
pub mod score_row;
pub use dataset_record::DatasetRecord;
pub use enrichment::{EnrichmentProjection, EnrichmentSummary};
pub use fair::FairDimension;
pub use output_record::OutputRecord;
pub use prompt::{PromptPayload, PromptStrategy, PromptTechnique, SamplingConfig, WorkedExample};
pub use score_row::{ScoreRow, ValidationResult};
