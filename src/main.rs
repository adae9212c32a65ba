use member_qa_service::{build_app, config::AppConfig, run_server, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::from_env();
    if cfg.fireworks_api_key.trim().is_empty() {
        error!("FIREWORKS_API_KEY is not set; /ask will fail until it is provided");
    }

    let state = match AppState::from_config(&cfg) {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "failed to build HTTP clients");
            std::process::exit(1);
        }
    };

    info!(port = cfg.port, model = %cfg.completion_model, "starting member-qa-service");

    run_server(build_app(state), cfg.port).await;
}
