use std::{fmt, str::FromStr};

use crate::constants::prompts::{
    EPA_UCMR3_EXAMPLE, EVALUATION_EXPERT_SYSTEM_PROMPT, FAIR_EXPERT_SYSTEM_PROMPT, NEID_EXAMPLE,
};
use crate::errors::AppError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

/// Everything the completion service needs for one row.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptPayload {
    pub model: String,
    pub system_message: String,
    pub user_message: String,
    pub sampling: SamplingConfig,
}

/// A fully solved evaluation embedded in a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkedExample {
    pub dataset_name: &'static str,
    pub url: &'static str,
    /// One line per dimension, in F/A/I/R order.
    pub rationale: &'static [&'static str],
    pub scores: [u32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptTechnique {
    ZeroShot,
    ZeroShotChainOfThought,
    OneShotChainOfThought,
    FewShotChainOfThought,
}

impl PromptTechnique {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptTechnique::ZeroShot => "zero-shot",
            PromptTechnique::ZeroShotChainOfThought => "zero-shot-cot",
            PromptTechnique::OneShotChainOfThought => "one-shot-cot",
            PromptTechnique::FewShotChainOfThought => "few-shot-cot",
        }
    }

    pub fn worked_examples(self) -> &'static [WorkedExample] {
        match self {
            PromptTechnique::ZeroShot | PromptTechnique::ZeroShotChainOfThought => &[],
            PromptTechnique::OneShotChainOfThought => &[EPA_UCMR3_EXAMPLE],
            PromptTechnique::FewShotChainOfThought => &[EPA_UCMR3_EXAMPLE, NEID_EXAMPLE],
        }
    }

    pub fn chain_of_thought(self) -> bool {
        !matches!(self, PromptTechnique::ZeroShot)
    }

    pub fn system_message(self) -> &'static str {
        match self {
            PromptTechnique::ZeroShotChainOfThought => FAIR_EXPERT_SYSTEM_PROMPT,
            _ => EVALUATION_EXPERT_SYSTEM_PROMPT,
        }
    }

    pub fn default_max_tokens(self) -> u32 {
        match self {
            PromptTechnique::ZeroShot => 512,
            PromptTechnique::ZeroShotChainOfThought => 700,
            PromptTechnique::OneShotChainOfThought | PromptTechnique::FewShotChainOfThought => 800,
        }
    }

    pub fn scrapes_by_default(self) -> bool {
        matches!(
            self,
            PromptTechnique::ZeroShotChainOfThought | PromptTechnique::FewShotChainOfThought
        )
    }
}

impl fmt::Display for PromptTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptTechnique {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero-shot" => Ok(PromptTechnique::ZeroShot),
            "zero-shot-cot" => Ok(PromptTechnique::ZeroShotChainOfThought),
            "one-shot-cot" => Ok(PromptTechnique::OneShotChainOfThought),
            "few-shot-cot" => Ok(PromptTechnique::FewShotChainOfThought),
            other => Err(AppError::Configuration(format!(
                "Unknown prompt strategy '{}' (expected zero-shot, zero-shot-cot, one-shot-cot or few-shot-cot)",
                other
            ))),
        }
    }
}

/// Which worked examples go into the prompt and whether pages are scraped first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptStrategy {
    pub technique: PromptTechnique,
    pub enrich: bool,
}

impl PromptStrategy {
    pub fn preset(technique: PromptTechnique) -> Self {
        PromptStrategy {
            technique,
            enrich: technique.scrapes_by_default(),
        }
    }

    pub fn with_enrichment(mut self, enrich: bool) -> Self {
        self.enrich = enrich;
        self
    }
}

impl Default for PromptStrategy {
    fn default() -> Self {
        PromptStrategy::preset(PromptTechnique::FewShotChainOfThought)
    }
}
