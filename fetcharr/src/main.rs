mod http;
mod server;

use anyhow::Result;
use tracing::info;

use fetcharr_core::{logging, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (file via FETCHARR_CONFIG, env overrides)
    let config_file = std::env::var("FETCHARR_CONFIG").ok();
    let config = Config::load(config_file.as_deref())?;

    // 2. Validate configuration (fail fast on misconfigurations)
    if let Err(errors) = config.validate() {
        for e in &errors {
            eprintln!("Config validation error: missing {e}");
        }
        return Err(anyhow::anyhow!(
            "Configuration validation failed with {} error(s)",
            errors.len()
        ));
    }

    // 3. Initialize logging
    logging::init_logging(&config.logging)?;
    info!("Fetcharr request broker starting...");
    info!("HTTP address: {}", config.http_address());

    // 4. Start the HTTP server
    server::serve(config).await
}
