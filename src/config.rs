use std::env;

pub const DEFAULT_MESSAGES_URL: &str =
    "https://november7-730026606190.europe-west1.run.app/messages/";
pub const DEFAULT_COMPLETION_URL: &str =
    "https://api.fireworks.ai/inference/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str =
    "accounts/fireworks/models/llama-v3p1-70b-instruct";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub fireworks_api_key: String,
    pub messages_url: String,
    pub completion_url: String,
    pub completion_model: String,
    pub fetch_timeout_secs: u64,
    pub max_tokens: u32,
}

impl AppConfig {
    /// Reads the full configuration from the process environment once, at
    /// startup. Everything except the API key has a usable default.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let fireworks_api_key = env::var("FIREWORKS_API_KEY").unwrap_or_default();

        let messages_url =
            env::var("MESSAGES_URL").unwrap_or_else(|_| DEFAULT_MESSAGES_URL.to_string());

        let completion_url =
            env::var("COMPLETION_URL").unwrap_or_else(|_| DEFAULT_COMPLETION_URL.to_string());

        let completion_model =
            env::var("COMPLETION_MODEL").unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string());

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(20);

        let max_tokens = env::var("MAX_TOKENS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(200);

        Self {
            port,
            fireworks_api_key,
            messages_url,
            completion_url,
            completion_model,
            fetch_timeout_secs,
            max_tokens,
        }
    }
}
