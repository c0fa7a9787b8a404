//! Listen configuration from environment variables

use std::net::SocketAddr;

/// Port used when `PORT` is unset or malformed
const DEFAULT_PORT: u16 = 5000;

/// Listen configuration, read once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Read the listen configuration from the environment
    ///
    /// A malformed `PORT` value falls back to the default with a warning
    /// rather than refusing to start.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT value {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self { port }
    }

    /// Socket address to bind (all interfaces)
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
