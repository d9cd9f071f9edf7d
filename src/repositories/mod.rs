pub mod dataset_repository;
pub mod result_repository;

pub use dataset_repository::{CsvDatasetRepository, DatasetRepository};
pub use result_repository::{CsvResultRepository, ResultRepository};
