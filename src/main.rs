use std::{error::Error, sync::Arc};

use copy_relay::{build_app, run_server, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("ANTHROPIC_API_KEY is not set; generation requests will fail");
    }

    let app = build_app(Arc::new(AppState::new(&config)));
    run_server(app, config.port).await?;

    Ok(())
}
