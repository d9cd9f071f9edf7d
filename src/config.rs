use std::{env, path::PathBuf, str::FromStr, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{PromptStrategy, PromptTechnique, SamplingConfig},
};

const PLACEHOLDER_API_KEY: &str = "xxx";

/// Everything a batch run needs, read once at startup and passed down.
#[derive(Clone, Debug)]
pub struct Config {
    pub input_csv: PathBuf,
    pub output_csv: PathBuf,
    pub azure_api_base: String,
    pub azure_api_key: SecretString,
    pub azure_deployment: String,
    pub azure_api_version: String,
    pub strategy: PromptStrategy,
    pub sampling: SamplingConfig,
    /// Fixed delay after every row, whatever its outcome.
    pub pacing: Duration,
    pub scrape_timeout: Duration,
    pub snippet_chars: usize,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let technique: PromptTechnique = match get("FAIR_PROMPT_STRATEGY") {
            Some(raw) => raw.parse()?,
            None => PromptTechnique::FewShotChainOfThought,
        };
        let mut strategy = PromptStrategy::preset(technique);
        if let Some(raw) = get("FAIR_SCRAPE") {
            strategy = strategy.with_enrichment(parse_bool("FAIR_SCRAPE", &raw)?);
        }

        let sampling = SamplingConfig {
            temperature: parse_or("FAIR_TEMPERATURE", get("FAIR_TEMPERATURE"), 0.2)?,
            top_p: parse_or("FAIR_TOP_P", get("FAIR_TOP_P"), 1.0)?,
            max_tokens: parse_or(
                "FAIR_MAX_TOKENS",
                get("FAIR_MAX_TOKENS"),
                technique.default_max_tokens(),
            )?,
        };

        Ok(Self {
            input_csv: get("FAIR_INPUT_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("SelectData.csv")),
            output_csv: get("FAIR_OUTPUT_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(format!("SelectData_{}_fair_scores.csv", technique))),
            azure_api_base: get("AZURE_OPENAI_ENDPOINT")
                .unwrap_or_else(|| "https://azureapi.zotgpt.uci.edu".to_string()),
            azure_api_key: SecretString::from(get("AZURE_OPENAI_API_KEY").unwrap_or_default()),
            azure_deployment: get("AZURE_DEPLOYMENT_NAME").unwrap_or_else(|| "gpt-4o".to_string()),
            azure_api_version: get("AZURE_API_VERSION")
                .unwrap_or_else(|| "2024-02-01".to_string()),
            strategy,
            sampling,
            pacing: Duration::from_secs(parse_or("FAIR_PACING_SECS", get("FAIR_PACING_SECS"), 3)?),
            scrape_timeout: Duration::from_secs(parse_or(
                "FAIR_SCRAPE_TIMEOUT_SECS",
                get("FAIR_SCRAPE_TIMEOUT_SECS"),
                10,
            )?),
            snippet_chars: parse_or("FAIR_SNIPPET_CHARS", get("FAIR_SNIPPET_CHARS"), 2000)?,
        })
    }

    /// Rejects settings that would make every completion call fail.
    pub fn validate(&self) -> AppResult<()> {
        let key = self.azure_api_key.expose_secret();
        if key.trim().is_empty() || key == PLACEHOLDER_API_KEY {
            return Err(AppError::Configuration(
                "AZURE_OPENAI_API_KEY is not set. Set it in the environment or a .env file."
                    .to_string(),
            ));
        }
        if self.sampling.max_tokens == 0 {
            return Err(AppError::Configuration(
                "FAIR_MAX_TOKENS must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.sampling.temperature) {
            return Err(AppError::Configuration(format!(
                "FAIR_TEMPERATURE must be between 0 and 2, got {}",
                self.sampling.temperature
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            input_csv: PathBuf::from("input.csv"),
            output_csv: PathBuf::from("output.csv"),
            azure_api_base: "https://azure.example.test".to_string(),
            azure_api_key: SecretString::from("test_api_key".to_string()),
            azure_deployment: "gpt-4o".to_string(),
            azure_api_version: "2024-02-01".to_string(),
            strategy: PromptStrategy::default(),
            sampling: SamplingConfig {
                temperature: 0.2,
                top_p: 1.0,
                max_tokens: 800,
            },
            pacing: Duration::ZERO,
            scrape_timeout: Duration::from_secs(10),
            snippet_chars: 2000,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> AppResult<T> {
    match raw {
        Some(value) => value.trim().parse().map_err(|_| {
            AppError::Configuration(format!("{} has an invalid value: '{}'", key, value))
        }),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Configuration(format!(
            "{} has an invalid value: '{}'",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppResult<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.input_csv, PathBuf::from("SelectData.csv"));
        assert_eq!(
            config.output_csv,
            PathBuf::from("SelectData_few-shot-cot_fair_scores.csv")
        );
        assert_eq!(config.azure_deployment, "gpt-4o");
        assert_eq!(config.azure_api_version, "2024-02-01");
        assert_eq!(config.strategy, PromptStrategy::default());
        assert_eq!(config.sampling.temperature, 0.2);
        assert_eq!(config.sampling.max_tokens, 800);
        assert_eq!(config.pacing, Duration::from_secs(3));
        assert_eq!(config.scrape_timeout, Duration::from_secs(10));
        assert_eq!(config.snippet_chars, 2000);
    }

    #[test]
    fn test_config_overrides() {
        let config = config_from(&[
            ("FAIR_INPUT_CSV", "datasets.csv"),
            ("FAIR_PROMPT_STRATEGY", "zero-shot"),
            ("FAIR_SCRAPE", "true"),
            ("FAIR_MAX_TOKENS", "256"),
            ("FAIR_PACING_SECS", "0"),
            ("AZURE_OPENAI_API_KEY", "real-key"),
        ])
        .unwrap();

        assert_eq!(config.input_csv, PathBuf::from("datasets.csv"));
        assert_eq!(config.strategy.technique, PromptTechnique::ZeroShot);
        assert!(config.strategy.enrich);
        assert_eq!(config.sampling.max_tokens, 256);
        assert_eq!(config.pacing, Duration::ZERO);
        assert_eq!(config.azure_api_key.expose_secret(), "real-key");
    }

    #[test]
    fn test_strategy_sets_token_default() {
        let config = config_from(&[("FAIR_PROMPT_STRATEGY", "zero-shot-cot")]).unwrap();
        assert_eq!(config.sampling.max_tokens, 700);
        assert!(config.strategy.enrich);
    }

    #[test]
    fn test_invalid_values_are_configuration_errors() {
        for pairs in [
            [("FAIR_PACING_SECS", "three")],
            [("FAIR_SCRAPE", "maybe")],
            [("FAIR_PROMPT_STRATEGY", "many-shot")],
            [("FAIR_TEMPERATURE", "warm")],
        ] {
            let err = config_from(&pairs).unwrap_err();
            assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        }
    }

    #[test]
    fn test_validate_rejects_missing_or_placeholder_key() {
        assert!(config_from(&[]).unwrap().validate().is_err());
        assert!(config_from(&[("AZURE_OPENAI_API_KEY", "xxx")])
            .unwrap()
            .validate()
            .is_err());
        assert!(Config::test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::test_config();
        config.sampling.temperature = 3.5;
        assert!(config.validate().is_err());
    }
}
