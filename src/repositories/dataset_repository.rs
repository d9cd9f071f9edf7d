use std::{io::Read, path::PathBuf};

use csv::{ReaderBuilder, StringRecord};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        dataset_record::{DATASET_NAME_COLUMN, WEBSITE_LINK_COLUMN},
        DatasetRecord,
    },
};

pub trait DatasetRepository: Send + Sync {
    /// All input rows, in file order.
    fn load_all(&self) -> AppResult<Vec<DatasetRecord>>;
}

pub struct CsvDatasetRepository {
    path: PathBuf,
}

impl CsvDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetRepository for CsvDatasetRepository {
    fn load_all(&self) -> AppResult<Vec<DatasetRecord>> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            AppError::Configuration(format!(
                "Cannot open input table {}: {}",
                self.path.display(),
                e
            ))
        })?;
        read_records(file)
    }
}

/// Reads `Dataset Name` / `Website Link` rows; other columns are ignored.
///
/// A missing required column stops the run before any row is processed. Rows
/// with an empty dataset name are kept and rejected later, row by row.
pub fn read_records<R: Read>(reader: R) -> AppResult<Vec<DatasetRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim())
        .collect();

    for required in [DATASET_NAME_COLUMN, WEBSITE_LINK_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(AppError::Configuration(format!(
                "Input table must contain '{}' and '{}' columns; '{}' is missing",
                DATASET_NAME_COLUMN, WEBSITE_LINK_COLUMN, required
            )));
        }
    }

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let mut record: DatasetRecord = row.deserialize(Some(&headers))?;
        record.name = record.name.trim().to_string();
        record.url = record.url.trim().to_string();
        if let Err(e) = record.validate() {
            // +2: one for the header line, one for 1-based numbering.
            log::warn!("Input row {}: {}", idx + 2, e);
        }
        records.push(record);
    }

    log::info!("Loaded {} dataset rows", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_file_order_and_ignores_extra_columns() {
        let csv = "Id,Dataset Name,Website Link,Notes\n\
                   1,Foo,https://foo.example,first\n\
                   2,Bar,https://bar.example,second\n";

        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                DatasetRecord::new("Foo", "https://foo.example"),
                DatasetRecord::new("Bar", "https://bar.example"),
            ]
        );
    }

    #[test]
    fn tolerates_bom_and_padded_values() {
        let csv = "\u{feff}Dataset Name,Website Link\n  Foo  , https://foo.example \n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records, vec![DatasetRecord::new("Foo", "https://foo.example")]);
    }

    #[test]
    fn missing_required_column_is_configuration_error() {
        let err = read_records("Dataset Name,URL\nFoo,https://foo.example\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("'Website Link' is missing"));

        let err = read_records("Name,Website Link\nFoo,https://foo.example\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("'Dataset Name' is missing"));
    }

    #[test]
    fn empty_dataset_name_row_is_kept_in_place() {
        let csv = "Dataset Name,Website Link\nFoo,https://foo.example\n  ,https://bar.example\nBaz,\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                DatasetRecord::new("Foo", "https://foo.example"),
                DatasetRecord::new("", "https://bar.example"),
                DatasetRecord::new("Baz", ""),
            ]
        );
    }

    #[test]
    fn empty_url_is_passed_through() {
        let csv = "Dataset Name,Website Link\nFoo,\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records, vec![DatasetRecord::new("Foo", "")]);
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let repo = CsvDatasetRepository::new("/nonexistent/SelectData.csv");
        let err = repo.load_all().unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
