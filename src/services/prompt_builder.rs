use crate::{
    constants::prompts::{
        CHAIN_OF_THOUGHT_INSTRUCTION, DIRECT_TABLE_INSTRUCTION, ENRICHMENT_GROUNDING_INSTRUCTION,
        ENRICHMENT_HEADING, EXAMPLES_HANDOFF, FAIR_SCORING_RUBRIC, NO_COMMENTARY_INSTRUCTION,
        TABLE_ONLY_INSTRUCTION,
    },
    models::domain::{
        fair::table_row, DatasetRecord, EnrichmentSummary, PromptPayload, PromptStrategy,
        SamplingConfig, WorkedExample,
    },
};

/// Composes the chat payload for one dataset.
///
/// Building is a pure function of the builder's settings and its inputs: the
/// same record and summary always give byte-identical messages.
#[derive(Clone, Debug)]
pub struct PromptBuilder {
    model: String,
    strategy: PromptStrategy,
    sampling: SamplingConfig,
}

impl PromptBuilder {
    pub fn new(model: impl Into<String>, strategy: PromptStrategy, sampling: SamplingConfig) -> Self {
        Self {
            model: model.into(),
            strategy,
            sampling,
        }
    }

    pub fn strategy(&self) -> PromptStrategy {
        self.strategy
    }

    pub fn build(
        &self,
        record: &DatasetRecord,
        enrichment: Option<&EnrichmentSummary>,
    ) -> PromptPayload {
        let technique = self.strategy.technique;
        PromptPayload {
            model: self.model.clone(),
            system_message: technique.system_message().to_string(),
            user_message: render_user_message(
                record,
                enrichment,
                FAIR_SCORING_RUBRIC,
                technique.worked_examples(),
                technique.chain_of_thought(),
            ),
            sampling: self.sampling,
        }
    }
}

/// Rubric, examples, enrichment, target, then the output-format instruction last.
pub fn render_user_message(
    record: &DatasetRecord,
    enrichment: Option<&EnrichmentSummary>,
    rubric: &str,
    examples: &[WorkedExample],
    chain_of_thought: bool,
) -> String {
    let mut message = String::from(rubric);
    if !message.ends_with('\n') {
        message.push('\n');
    }

    if !examples.is_empty() {
        for example in examples {
            message.push_str(&render_example(example));
        }
        message.push('\n');
        message.push_str(EXAMPLES_HANDOFF);
        message.push('\n');
    }

    if let Some(summary) = enrichment {
        message.push_str(&render_enrichment(summary));
    }

    message.push_str(&format!(
        "\nDataset: \"{}\"\nURL: {}\n\n",
        record.name, record.url
    ));

    if enrichment.is_some() {
        message.push_str(ENRICHMENT_GROUNDING_INSTRUCTION);
        message.push('\n');
    }
    message.push_str(&output_format_instruction(chain_of_thought));
    message
}

/// The closing instruction pinning the response to one five-cell table row.
pub fn output_format_instruction(chain_of_thought: bool) -> String {
    let lead = if chain_of_thought {
        format!("{}\n{}", CHAIN_OF_THOUGHT_INSTRUCTION, TABLE_ONLY_INSTRUCTION)
    } else {
        DIRECT_TABLE_INSTRUCTION.to_string()
    };
    format!(
        "{}\n\n{}\n\n{}\n",
        lead,
        table_row("Dataset Name", ["X"; 4]),
        NO_COMMENTARY_INSTRUCTION
    )
}

fn render_example(example: &WorkedExample) -> String {
    let mut block = format!(
        "\nExample:\n\nDataset: \"{}\"\nLink: {}\n\nStep-by-step evaluation:\n",
        example.dataset_name, example.url
    );
    for line in example.rationale {
        block.push_str("- ");
        block.push_str(line);
        block.push('\n');
    }
    block.push_str("\nFinal score:\n");
    block.push_str(&table_row("Dataset Name", example.scores));
    block.push_str("\n\n---\n");
    block
}

fn render_enrichment(summary: &EnrichmentSummary) -> String {
    format!(
        "\n{}\n- Title: {}\n- Description: {}\n- License Detected: {}\n- File Formats: {}\n- Downloadable Links: {}\n- Raw Page Text Snippet:\n{}\n",
        ENRICHMENT_HEADING,
        summary.title,
        summary.description,
        summary.license_display(),
        summary.file_formats_display(),
        summary.download_links_display(),
        summary.text_snippet
    )
}
