//! Outbound chat-completions client. One request at a time, fired from a
//! worker thread so the UI loop stays responsive; the outcome comes back
//! through the app event channel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 220;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Failures that produce the canned fallback reply. A malformed success
/// payload is NOT an error; it degrades to "no new message".
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat backend is not configured")]
    MissingConfig,
    #[error("chat request failed: {0}")]
    Request(String),
    #[error("chat backend returned status {0}")]
    Status(u16),
}

/// The outcome delivered back to the UI: `Ok(Some(text))` appends an
/// assistant message, `Ok(None)` appends nothing, `Err(_)` appends the
/// fallback.
pub type ChatOutcome = Result<Option<String>, ChatError>;

/// Build the request body messages: the system prompt followed by the
/// visible transcript.
pub fn request_messages(system_prompt: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.iter().cloned());
    messages
}

/// Pull the reply text out of a decoded response, trimming and dropping
/// empty strings.
fn extract_reply(response: CompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(feature = "network")]
pub fn send_chat(
    api_base: &str,
    model: &str,
    system_prompt: &str,
    history: &[ChatMessage],
) -> ChatOutcome {
    if api_base.is_empty() {
        return Err(ChatError::MissingConfig);
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| ChatError::Request(e.to_string()))?;

    let body = CompletionRequest {
        model,
        messages: request_messages(system_prompt, history),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let url = format!("{api_base}/chat/completions");
    let response = client
        .post(url)
        .json(&body)
        .send()
        .map_err(|e| ChatError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChatError::Status(status.as_u16()));
    }

    // A payload we cannot decode means no new message, not a failure.
    match response.json::<CompletionResponse>() {
        Ok(decoded) => Ok(extract_reply(decoded)),
        Err(_) => Ok(None),
    }
}

#[cfg(not(feature = "network"))]
pub fn send_chat(
    api_base: &str,
    _model: &str,
    _system_prompt: &str,
    _history: &[ChatMessage],
) -> ChatOutcome {
    if api_base.is_empty() {
        return Err(ChatError::MissingConfig);
    }
    Err(ChatError::Request("built without network support".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape_matches_wire_format() {
        let body = CompletionRequest {
            model: "meta-llama/Llama-3.2-3B-Instruct",
            messages: request_messages("You are a tutor.", &[ChatMessage::user("Hallo!")]),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "meta-llama/Llama-3.2-3B-Instruct");
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["max_tokens"], 220);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Hallo!");
    }

    #[test]
    fn reply_is_read_from_first_choice() {
        let decoded: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"  Guten Tag!  "}},{"message":{"content":"ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(decoded), Some("Guten Tag!".to_string()));
    }

    #[test]
    fn absent_or_empty_content_yields_no_message() {
        let no_choices: CompletionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_reply(no_choices), None);

        let null_content: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(extract_reply(null_content), None);

        let blank: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert_eq!(extract_reply(blank), None);
    }

    #[test]
    fn missing_base_is_a_config_error() {
        let outcome = send_chat("", "model", "prompt", &[]);
        assert!(matches!(outcome, Err(ChatError::MissingConfig)));
    }
}
