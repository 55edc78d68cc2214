use std::borrow::Cow;
use std::fmt;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::language::Direction;
use super::prompt::build_system_prompt;

/// A single translation to perform.
///
/// Validated at construction: empty input never reaches the network.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    source_text: String,
    direction: Direction,
    model: String,
}

impl TranslationRequest {
    /// Builds a request, rejecting input with no translatable content.
    pub fn new(
        source_text: impl Into<String>,
        direction: Direction,
        model: impl Into<String>,
    ) -> Result<Self> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() {
            anyhow::bail!("Nothing to translate: input is empty");
        }
        Ok(Self {
            source_text,
            direction,
            model: model.into(),
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// The translated text plus whatever usage metadata the endpoint reported.
#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub translated_text: String,
    pub tokens_used: Option<u32>,
}

/// Failures surfaced by a translation call. No retries, no partial results.
#[derive(Debug)]
pub enum TranslationError {
    /// The endpoint rejected the API key (HTTP 401/403).
    AuthFailed(StatusCode),
    /// The request never completed, or came back with a non-2xx status.
    RequestFailed(String),
    /// The response body did not contain a completion.
    UnexpectedResponse(String),
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthFailed(status) => {
                write!(f, "Authentication failed ({status}): check your API key")
            }
            Self::RequestFailed(msg) => write!(f, "Translation request failed: {msg}"),
            Self::UnexpectedResponse(msg) => {
                write!(f, "Translation failed: unexpected response: {msg}")
            }
        }
    }
}

impl std::error::Error for TranslationError {}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

/// Chat endpoints put the completion under `message.content`; plain
/// completion endpoints use `text`. Accept both.
#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
    #[serde(default)]
    text: Option<String>,
}

impl Choice {
    fn into_text(self) -> Option<String> {
        match self.message {
            Some(message) => Some(message.content),
            None => self.text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Performs one request/response exchange and extracts the first
    /// completion's text.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let system_prompt = build_system_prompt(request.direction());

        let chat_request = ChatCompletionRequest {
            model: request.model(),
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(request.source_text()),
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(format!("failed to reach {url}: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TranslationError::AuthFailed(status));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::RequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::UnexpectedResponse(e.to_string()))?;

        let tokens_used = completion.usage.map(|usage| usage.total_tokens);

        let translated_text = completion
            .choices
            .into_iter()
            .next()
            .and_then(Choice::into_text)
            .ok_or_else(|| {
                TranslationError::UnexpectedResponse("no completion text in response".to_string())
            })?;

        Ok(TranslationResult {
            translated_text,
            tokens_used,
        })
    }
}
