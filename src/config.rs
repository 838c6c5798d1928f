use std::env;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default; the analyzer itself needs no configuration, these values
/// only parameterize the web server.
pub struct Config {
    /// Address the web server binds to (GRAPHITE_BIND, default 0.0.0.0)
    pub bind: String,
    /// Port the web server listens on (GRAPHITE_PORT, default 3000)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let bind = env::var("GRAPHITE_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("GRAPHITE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("GRAPHITE_PORT is not a valid port: {raw:?}"))?,
            Err(_) => 3000,
        };

        Ok(Self { bind, port })
    }
}
