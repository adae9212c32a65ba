pub mod api;
pub mod config;
pub mod fetcher;
pub mod generator;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use config::AppConfig;
use fetcher::MessageFetcher;
use generator::AnswerGenerator;

/// Shared per-process state: one fetcher and one generator, each with a
/// long-lived HTTP client, constructed once at startup and handed to
/// every request handler.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<MessageFetcher>,
    pub generator: Arc<AnswerGenerator>,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> Result<Self, reqwest::Error> {
        let fetcher = MessageFetcher::new(
            &cfg.messages_url,
            Duration::from_secs(cfg.fetch_timeout_secs),
        )?;
        let generator = AnswerGenerator::new(
            &cfg.completion_url,
            &cfg.completion_model,
            &cfg.fireworks_api_key,
            cfg.max_tokens,
        )?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            generator: Arc::new(generator),
        })
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server failed");
}
