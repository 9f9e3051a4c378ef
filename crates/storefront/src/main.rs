use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use storefront::{handler::AppRouter, state::AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = match &config.log.otel_endpoint {
        Some(endpoint) => Some(
            Telemetry::new("storefront", endpoint.clone())
                .init()
                .context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    init_logger(
        telemetry.as_ref().map(|providers| &providers.logger),
        "storefront",
        config.log.dev_mode,
        config.log.enable_file_log,
    );

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("Storefront started, page size {}", config.page_size);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    if let Some(providers) = telemetry {
        if let Err(e) = providers.shutdown() {
            error!("Failed to flush telemetry: {e:#}");
        }
    }

    Ok(())
}
