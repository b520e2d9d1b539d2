mod app;
mod application;
mod domain;
mod infrastructure;
mod interfaces;

pub use app::run;
pub use domain::error::{GatewayError, Result};
pub use infrastructure::config::GatewayConfig;
