use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::domain::error::GatewayError;
use crate::infrastructure::config::GatewayConfig;
use crate::interfaces::http;

pub async fn run() -> std::io::Result<()> {
    let config = GatewayConfig::load();

    let filter = match &config {
        Ok(config) => config.log_filter.clone(),
        Err(_) => GatewayConfig::default().log_filter,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .try_init();

    let config = config.map_err(|err: GatewayError| {
        error!(error = %err, "Failed to load gateway config");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    http::serve(config).await
}
