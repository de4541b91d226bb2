pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::parse();

    telemetry::init_telemetry()?;
    tracing::debug!("{:?}", config);

    if let Err(e) = api::server::start_server(&config).await {
        tracing::error!("Server failed: {e:#}");
        return Err(e);
    }

    Ok(())
}
