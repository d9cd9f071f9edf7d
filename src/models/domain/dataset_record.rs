use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DATASET_NAME_COLUMN: &str = "Dataset Name";
pub const WEBSITE_LINK_COLUMN: &str = "Website Link";

/// One input row: a dataset and the page describing it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct DatasetRecord {
    #[serde(rename = "Dataset Name")]
    #[validate(length(min = 1, message = "Dataset name cannot be empty"))]
    pub name: String,
    // Passed through unvalidated; the first consumer to choke on it is the HTTP layer.
    #[serde(rename = "Website Link", default)]
    pub url: String,
}

impl DatasetRecord {
    pub fn new(name: &str, url: &str) -> Self {
        DatasetRecord {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}
