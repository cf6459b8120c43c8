//! Hubstaff Tools - Hubstaff API v2 endpoints as callable tools
//!
//! Every endpoint is a static descriptor; one executor turns a descriptor,
//! an argument object and a bearer token into a single GET and a
//! normalized result.

pub mod config;
pub mod core;
pub mod endpoints;
pub mod tools;
pub mod utils;

pub mod api;
pub mod cli;

pub use api::*;
pub use self::config::{Credentials, Settings, TOKEN_ENV_VAR};

pub use self::core::{Args, CallError, CallRequest, CallResult, HubstaffClient};
pub use endpoints::{catalog, EndpointDescriptor};
pub use tools::registry::ToolRegistry;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load configuration, start logging, read credentials and build a client
pub fn init() -> anyhow::Result<(Settings, HubstaffClient)> {
    let settings = Settings::new()?;
    init_logging(&settings);

    let credentials = Credentials::from_env();
    let client = HubstaffClient::from_settings(&settings, credentials)?;

    tracing::info!("Hubstaff client ready for {}", client.base_url());
    Ok((settings, client))
}
