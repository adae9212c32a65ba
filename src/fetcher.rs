use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Failure modes of a single fetch from the Messages API. The display
/// text ends up in the `/ask` error body, so each variant carries enough
/// context to diagnose the upstream problem.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to messages API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("messages API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("messages API response is malformed: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Deserialize)]
struct MessagesPage {
    items: Vec<Value>,
}

/// Client for the external Messages API, constructed once at startup and
/// shared across requests. Redirects (302/307 included) are followed by
/// the underlying client; the timeout applies to the whole fetch.
pub struct MessageFetcher {
    client: reqwest::Client,
    url: String,
}

impl MessageFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetches the current member messages. Returns the raw `items`
    /// values without interpreting their shape.
    pub async fn fetch_messages(&self) -> Result<Vec<Value>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status,
                body: snippet(&body),
            });
        }

        let body = response.text().await?;
        let page: MessagesPage = serde_json::from_str(&body)
            .map_err(|err| FetchError::MalformedResponse(err.to_string()))?;

        debug!(count = page.items.len(), "fetched member messages");
        Ok(page.items)
    }
}

fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}
