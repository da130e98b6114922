//! pulseboard - mock-backed admin dashboard service.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// pulseboard admin dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via PULSE_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    pulse_telemetry::init_logging()?;

    info!("Starting pulseboard v{}", env!("CARGO_PKG_VERSION"));

    let config = match args.config {
        Some(path) => {
            info!(config_path = %path, "Loading configuration");
            pulse_app::AppConfig::from_file(&path)?
        }
        None => pulse_app::AppConfig::load()?,
    };

    let app = pulse_app::Application::new(config);
    app.run().await?;

    Ok(())
}
