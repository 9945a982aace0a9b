//! Server configuration.

use std::net::{AddrParseError, SocketAddr};

use quote_store::QuoteStore;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Start with the seed quotes (false = empty store)
    pub seed: bool,
}

impl ApiConfig {
    /// Resolves `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Builds the initial store for this configuration.
    pub fn build_store(&self) -> QuoteStore {
        if self.seed {
            QuoteStore::new()
        } else {
            QuoteStore::empty()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed: true,
        }
    }
}
