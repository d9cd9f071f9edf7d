use std::collections::BTreeSet;

use crate::errors::EnrichmentError;

pub const NOT_FOUND: &str = "Not found";
pub const NOT_DETECTED: &str = "Not detected";
pub const NONE_DETECTED: &str = "None detected";
pub const NOT_AVAILABLE: &str = "N/A";
pub const SCRAPE_ERROR_TITLE: &str = "Error scraping website";

/// Best-effort metadata scraped from a dataset's web page.
///
/// Missing values are carried as explicit sentinel strings rather than empty
/// collections, so the prompt always shows the model what was looked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub title: String,
    pub description: String,
    pub license_terms: Vec<String>,
    pub file_formats: BTreeSet<String>,
    pub download_links: Vec<String>,
    pub text_snippet: String,
}

impl EnrichmentSummary {
    /// Placeholder summary recorded when the page could not be fetched.
    pub fn from_failure(err: &EnrichmentError) -> Self {
        EnrichmentSummary {
            title: SCRAPE_ERROR_TITLE.to_string(),
            description: err.to_string(),
            license_terms: vec![NOT_AVAILABLE.to_string()],
            file_formats: BTreeSet::from([NOT_AVAILABLE.to_string()]),
            download_links: vec![NOT_AVAILABLE.to_string()],
            text_snippet: String::new(),
        }
    }

    pub fn license_display(&self) -> String {
        self.license_terms.join(", ")
    }

    pub fn file_formats_display(&self) -> String {
        self.file_formats
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn download_links_display(&self) -> String {
        self.download_links.join(", ")
    }
}

/// The enrichment columns kept in the output table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichmentProjection {
    pub title: String,
    pub license: String,
    pub file_formats: String,
}

impl From<&EnrichmentSummary> for EnrichmentProjection {
    fn from(summary: &EnrichmentSummary) -> Self {
        EnrichmentProjection {
            title: summary.title.clone(),
            license: summary.license_display(),
            file_formats: summary.file_formats_display(),
        }
    }
}
