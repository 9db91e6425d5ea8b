//! Entry point for the payroll engine binary.
//!
//! Loads the payroll configuration and serves the HTTP API. The
//! configuration file is taken from `PAYROLL_CONFIG` (default
//! `config/payroll.yaml`; built-in defaults are used when it is absent) and
//! the bind address from `PAYROLL_ADDR` (default `0.0.0.0:5000`). Rate and
//! threshold overrides are read from `RATE_REGULAR`, `RATE_125`, `RATE_150`,
//! `REGULAR_LIMIT` and `LIMIT_125`.

use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path =
        std::env::var("PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let addr = std::env::var("PAYROLL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let loader = ConfigLoader::from_env(&config_path)?;
    let rates = &loader.config().rates;
    info!(
        config = %config_path,
        regular_rate = %rates.regular,
        overtime_125_rate = %rates.overtime_125_rate(),
        overtime_150_rate = %rates.overtime_150_rate(),
        "Configuration ready"
    );

    let router = create_router(AppState::new(loader));
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
