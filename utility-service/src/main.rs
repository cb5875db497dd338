use service_core::observability::init_tracing;
use utility_service::config::UtilityConfig;
use utility_service::handlers::app::SERVICE_NAME;
use utility_service::services::init_metrics;
use utility_service::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = UtilityConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.telemetry.log_level,
        config.telemetry.otlp_endpoint.as_deref(),
    );

    init_metrics();

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    tracing::info!("Utility service stopped");
    Ok(())
}
