// --- File: crates/brandforge_ai/src/client.rs ---
use brandforge_common::HTTP_CLIENT;
use brandforge_config::OpenAiConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GenerationError;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

// --- Chat Completion Wire Types ---

/// A single message in the conversation sent to the completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author (`"system"`, `"user"`, `"assistant"`).
    pub role: String,
    /// The content of the message.
    pub content: String,
}

/// Forces the reply to be a single JSON object rather than prose.
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

// --- Core Client Function ---

/// Issues exactly one chat-completion call and returns the raw reply text.
///
/// The request pins the given model and asks for a strict JSON object reply
/// (`response_format: json_object`). No retries; a hung call is bounded by
/// the shared client's default timeout and surfaces as a `RequestError`.
pub async fn complete_json(
    config: &OpenAiConfig,
    model: &str,
    system_instruction: &str,
    user_instruction: &str,
) -> Result<String, GenerationError> {
    let request = ChatCompletionRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_instruction.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_instruction.to_string(),
            },
        ],
        response_format: ResponseFormat {
            format_type: "json_object",
        },
    };

    let api_url = format!("{}/chat/completions", OPENAI_API_BASE);
    debug!("[OpenAI Client] Sending completion request for model: {model}");

    let response = HTTP_CLIENT
        .post(&api_url)
        .bearer_auth(&config.api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        let error_message = match serde_json::from_str::<serde_json::Value>(&body_text) {
            Ok(json_body) => json_body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(&body_text)
                .to_string(),
            Err(_) => body_text,
        };
        info!(
            "[OpenAI Client] API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        return Err(GenerationError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        });
    }

    let completion: ChatCompletionResponse = serde_json::from_str(&body_text)?;
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(GenerationError::EmptyCompletion)
}
