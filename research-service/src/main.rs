use anyhow::Context;
use research_service::config::ResearchConfig;
use research_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ResearchConfig::load().context("Failed to load configuration")?;

    init_tracing(
        "research-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );
    init_metrics().context("Failed to install Prometheus recorder")?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
