use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

pub const FALLBACK_ANSWER: &str = "I couldn't find an answer based on the member messages.";

const SYSTEM_PROMPT: &str = "You are a precise question-answering assistant.\n\
You must answer ONLY using the member messages provided.\n\
If the answer is not found, respond exactly with:\n\
\"I couldn't find an answer based on the member messages.\"\n\
Never guess, never hallucinate, never create fake facts.";

/// Failure modes of a single completion call. These are never shown to
/// the caller verbatim; the handler maps them to a generic detail and
/// logs the cause server-side.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion API key is missing: set FIREWORKS_API_KEY")]
    MissingApiKey,
    #[error("request to completion API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion API response could not be decoded: {0}")]
    Decode(String),
    #[error("completion API returned no choices")]
    EmptyChoices,
    #[error("failed to serialize message context: {0}")]
    Context(#[source] serde_json::Error),
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the hosted chat-completion API, constructed once at
/// startup and shared across requests. No sampling parameters are sent;
/// the provider's defaults apply.
pub struct AnswerGenerator {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
    max_tokens: u32,
}

impl AnswerGenerator {
    pub fn new(
        url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        max_tokens: u32,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
            model: model.into(),
            api_key: api_key.into(),
            max_tokens,
        })
    }

    /// Answers `question` using only the given member messages. Sends a
    /// system turn restricting the model to the provided context and a
    /// user turn carrying the messages plus the question, then returns
    /// the first choice's text with surrounding whitespace trimmed.
    pub async fn answer(
        &self,
        question: &str,
        messages: &[Value],
    ) -> Result<String, GenerationError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let user_prompt = build_user_prompt(question, messages)?;
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, prompt_len = user_prompt.len(), "POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "completion API returned non-success status");
            return Err(GenerationError::Status { status, body });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Decode(err.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyChoices)?;

        Ok(choice.message.content.trim().to_string())
    }
}

fn build_user_prompt(question: &str, messages: &[Value]) -> Result<String, GenerationError> {
    let context = serde_json::to_string_pretty(messages).map_err(GenerationError::Context)?;
    Ok(format!(
        "Here are the member messages as JSON:\n\n{context}\n\nQUESTION: {question}\n\nGive a short, direct answer."
    ))
}
