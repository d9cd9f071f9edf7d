#[cfg(test)]
pub mod fixtures {
    use std::collections::BTreeSet;

    use crate::errors::CompletionError;
    use crate::models::domain::{
        enrichment::NOT_FOUND, fair::table_row, DatasetRecord, EnrichmentSummary, OutputRecord,
        SamplingConfig, ScoreRow,
    };
    use crate::services::score_validator;

    pub fn sampling() -> SamplingConfig {
        SamplingConfig {
            temperature: 0.2,
            top_p: 1.0,
            max_tokens: 800,
        }
    }

    pub fn sample_record() -> DatasetRecord {
        DatasetRecord::new(
            "USGS PFAS in Groundwater",
            "https://www.usgs.gov/data/pfas-groundwater",
        )
    }

    pub fn sample_enrichment() -> EnrichmentSummary {
        EnrichmentSummary {
            title: "Groundwater PFAS Monitoring".to_string(),
            description: NOT_FOUND.to_string(),
            license_terms: vec!["license".to_string(), "CC-BY".to_string()],
            file_formats: BTreeSet::from(["csv".to_string(), "json".to_string()]),
            download_links: vec!["https://example.org/data/pfas.csv".to_string()],
            text_snippet: "PFAS sampling results for public wells.".to_string(),
        }
    }

    /// A completion consisting of a single well-formed score row.
    pub fn score_table(name: &str, scores: [u32; 4]) -> String {
        table_row(name, scores)
    }

    pub fn parsed_output(name: &str) -> OutputRecord {
        let scores = ScoreRow::parsed(name, [9, 8, 7, 4]);
        OutputRecord {
            record: DatasetRecord::new(name, &format!("https://{}.example", name.to_lowercase())),
            raw_output: score_table(name, [9, 8, 7, 4]),
            enrichment: None,
            validation: score_validator::validate(&scores),
            fair_percentage: score_validator::fair_percentage(&scores),
            scores,
            completion_failed: false,
        }
    }

    pub fn failed_output(name: &str) -> OutputRecord {
        OutputRecord::completion_failure(
            DatasetRecord::new(name, &format!("https://{}.example", name.to_lowercase())),
            None,
            CompletionError::Transport("timed out".to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::response_parser;

    #[test]
    fn test_fixtures_score_table_parses() {
        let row = response_parser::parse(&score_table("Foo", [9, 8, 7, 4]));
        assert!(row.parse_succeeded);
        assert_eq!(row.dataset_name_echo.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_fixtures_outputs() {
        assert!(parsed_output("Foo").validation.all_valid);
        assert!(failed_output("Bar").completion_failed);
        assert_eq!(parsed_output("Foo").record.url, "https://foo.example");
    }
}
