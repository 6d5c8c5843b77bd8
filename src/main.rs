use anyhow::Result;
use nws_weather_mcp::{Weather, WeatherConfig};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nws_weather_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = WeatherConfig::from_env();
    tracing::info!(api_base = %config.api_base, "Starting MCP weather server");

    if let Err(e) = run(&config).await {
        tracing::error!("Server error: {:#}", e);
        return Err(e);
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn run(config: &WeatherConfig) -> Result<()> {
    let weather = Weather::new(config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;
    Ok(())
}
