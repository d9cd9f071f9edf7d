use serde::{Deserialize, Serialize};

use crate::models::domain::PromptPayload;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub role: String,
    pub content: String,
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequestDto {
    pub model: String,
    pub messages: Vec<ChatMessageDto>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl From<&PromptPayload> for ChatCompletionRequestDto {
    fn from(payload: &PromptPayload) -> Self {
        ChatCompletionRequestDto {
            model: payload.model.clone(),
            messages: vec![
                ChatMessageDto {
                    role: "system".to_string(),
                    content: payload.system_message.clone(),
                },
                ChatMessageDto {
                    role: "user".to_string(),
                    content: payload.user_message.clone(),
                },
            ],
            temperature: payload.sampling.temperature,
            top_p: payload.sampling.top_p,
            max_tokens: payload.sampling.max_tokens,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponseMessageDto {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceDto {
    #[serde(default)]
    pub message: ChatResponseMessageDto,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Only the fields this crate reads; everything else in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponseDto {
    #[serde(default)]
    pub choices: Vec<ChatChoiceDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::SamplingConfig;

    #[test]
    fn request_serializes_system_then_user_message() {
        let payload = PromptPayload {
            model: "gpt-4o".to_string(),
            system_message: "sys".to_string(),
            user_message: "user".to_string(),
            sampling: SamplingConfig {
                temperature: 0.2,
                top_p: 1.0,
                max_tokens: 800,
            },
        };

        let json = serde_json::to_value(ChatCompletionRequestDto::from(&payload)).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "sys");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["top_p"], 1.0);
    }

    #[test]
    fn response_tolerates_missing_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant"}, "finish_reason": "content_filter"}
            ]
        }"#;

        let response: ChatCompletionResponseDto = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.is_none());
        assert_eq!(
            response.choices[0].finish_reason.as_deref(),
            Some("content_filter")
        );
    }
}
