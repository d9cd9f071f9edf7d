use async_openai::{config::AzureConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::CompletionError,
    models::{
        domain::PromptPayload,
        dto::{ChatCompletionRequestDto, ChatCompletionResponseDto},
    },
};

const CONTENT_FILTER_MARKERS: [&str; 3] = [
    "content_filter",
    "content management policy",
    "ResponsibleAIPolicyViolation",
];

/// Opaque chat-completion service: payload in, assistant text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, payload: &PromptPayload) -> Result<String, CompletionError>;
}

/// Azure OpenAI deployment reached through `async-openai`.
pub struct AzureOpenAiClient {
    client: Client<AzureConfig>,
}

impl AzureOpenAiClient {
    pub fn new(config: &Config) -> Self {
        let azure = AzureConfig::new()
            .with_api_base(config.azure_api_base.as_str())
            .with_api_version(config.azure_api_version.as_str())
            .with_deployment_id(config.azure_deployment.as_str())
            .with_api_key(config.azure_api_key.expose_secret());

        Self {
            client: Client::with_config(azure),
        }
    }
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    async fn complete(&self, payload: &PromptPayload) -> Result<String, CompletionError> {
        let request = ChatCompletionRequestDto::from(payload);
        let response: ChatCompletionResponseDto = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(map_openai_error)?;

        extract_content(response)
    }
}

fn map_openai_error(err: OpenAIError) -> CompletionError {
    classify_error_message(err.to_string())
}

pub fn classify_error_message(message: String) -> CompletionError {
    if CONTENT_FILTER_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
    {
        CompletionError::ContentPolicy(message)
    } else {
        CompletionError::Transport(message)
    }
}

/// Content of the first choice; a filtered or empty choice is an error.
pub fn extract_content(response: ChatCompletionResponseDto) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyResponse)?;

    if choice.finish_reason.as_deref() == Some("content_filter") {
        return Err(CompletionError::ContentPolicy(
            "completion was filtered by the service".to_string(),
        ));
    }

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(CompletionError::EmptyResponse),
    }
}
