//! Swara Games server entry point

use anyhow::Result;
use tracing::info;

use swara_games::{run_server, telemetry, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    telemetry::init_tracing()?;

    let config = ServerConfig::from_env()?;
    info!(
        "Config: bind={} static_dir={} session_ttl={:?}",
        config.bind_addr(),
        config.static_dir.display(),
        config.session_ttl
    );

    run_server(config).await
}
