pub mod api;
pub mod config;
pub mod error;
pub mod prompt;
pub mod upstream;

use std::sync::Arc;

use axum::Router;

pub use config::AppConfig;
pub use error::RelayError;

#[derive(Clone)]
pub struct AppState {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            http: reqwest::Client::new(),
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
