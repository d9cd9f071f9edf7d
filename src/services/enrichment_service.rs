use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppResult, EnrichmentError},
    models::domain::{
        enrichment::{NONE_DETECTED, NOT_DETECTED, NOT_FOUND},
        EnrichmentSummary,
    },
};

pub const DEFAULT_SNIPPET_CHARS: usize = 2000;

const LICENSE_KEYWORDS: [&str; 5] = [
    "license",
    "creativecommons",
    "CC-BY",
    "public domain",
    "creative commons",
];

const DOWNLOAD_EXTENSIONS: [&str; 5] = [".csv", ".json", ".zip", ".xlsx", ".xml"];

static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("TITLE_REGEX is a valid regex pattern")
});

static META_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<meta\b[^>]*>").expect("META_TAG_REGEX is a valid regex pattern")
});

static META_DESCRIPTION_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\sname\s*=\s*["']?description["'\s/>]"#)
        .expect("META_DESCRIPTION_NAME_REGEX is a valid regex pattern")
});

static META_CONTENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("META_CONTENT_REGEX is a valid regex pattern")
});

static NON_TEXT_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>|<noscript\b.*?</noscript\s*>")
        .expect("NON_TEXT_BLOCK_REGEX is a valid regex pattern")
});

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("TAG_REGEX is a valid regex pattern"));

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_REGEX is a valid regex pattern"));

static FILE_FORMAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(csv|xlsx?|json|xml|zip|shp|kml|txt|pdf)")
        .expect("FILE_FORMAT_REGEX is a valid regex pattern")
});

static ANCHOR_HREF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("ANCHOR_HREF_REGEX is a valid regex pattern")
});

/// Scrapes a dataset page into an [`EnrichmentSummary`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageEnricher: Send + Sync {
    async fn enrich(&self, url: &str) -> Result<EnrichmentSummary, EnrichmentError>;
}

pub struct HttpPageEnricher {
    client: reqwest::Client,
    snippet_chars: usize,
}

impl HttpPageEnricher {
    /// `timeout` bounds both connecting and the whole request.
    pub fn new(timeout: Duration, snippet_chars: usize) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            snippet_chars,
        })
    }
}

#[async_trait]
impl PageEnricher for HttpPageEnricher {
    async fn enrich(&self, url: &str) -> Result<EnrichmentSummary, EnrichmentError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response
            .text()
            .await
            .map_err(|e| EnrichmentError::Body(e.to_string()))?;

        log::debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(summarize_html(&html, self.snippet_chars))
    }
}

/// Pulls title, description, license cues, file formats, data links and a
/// text snippet out of raw HTML.
pub fn summarize_html(html: &str, snippet_chars: usize) -> EnrichmentSummary {
    let title = TITLE_REGEX
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| clean_text(m.as_str()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NOT_FOUND.to_string());

    let description = meta_description(html).unwrap_or_else(|| NOT_FOUND.to_string());

    let text = page_text(html);
    let lowered = text.to_lowercase();
    let mut license_terms: Vec<String> = LICENSE_KEYWORDS
        .iter()
        .filter(|kw| lowered.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .collect();
    if license_terms.is_empty() {
        license_terms.push(NOT_DETECTED.to_string());
    }

    let mut file_formats: BTreeSet<String> = FILE_FORMAT_REGEX
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect();
    if file_formats.is_empty() {
        file_formats.insert(NONE_DETECTED.to_string());
    }

    let mut download_links: Vec<String> = ANCHOR_HREF_REGEX
        .captures_iter(html)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|href| {
            let href = href.to_lowercase();
            DOWNLOAD_EXTENSIONS.iter().any(|ext| href.contains(ext))
        })
        .collect();
    if download_links.is_empty() {
        download_links.push(NONE_DETECTED.to_string());
    }

    EnrichmentSummary {
        title,
        description,
        license_terms,
        file_formats,
        download_links,
        text_snippet: text.chars().take(snippet_chars).collect(),
    }
}

fn meta_description(html: &str) -> Option<String> {
    META_TAG_REGEX
        .find_iter(html)
        .map(|m| m.as_str())
        .filter(|tag| META_DESCRIPTION_NAME_REGEX.is_match(tag))
        .find_map(|tag| {
            let captures = META_CONTENT_REGEX.captures(tag)?;
            let content = captures.get(1).or_else(|| captures.get(2))?;
            Some(clean_text(content.as_str()))
        })
}

fn page_text(html: &str) -> String {
    let without_blocks = NON_TEXT_BLOCK_REGEX.replace_all(html, " ");
    let without_tags = TAG_REGEX.replace_all(&without_blocks, " ");
    clean_text(&without_tags)
}

fn clean_text(raw: &str) -> String {
    let decoded = raw
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    WHITESPACE_REGEX.replace_all(decoded.trim(), " ").into_owned()
}
