//! Configuration types for the Axum HTTP server.
//!
//! This module provides configuration options for the REST API server,
//! including network binding, pagination and pool settings.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use sf_axum::config::AxumConfig;
///
/// // Use default configuration
/// let config = AxumConfig::default();
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     page_limit: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// The largest page size a client may ask for; larger requests are capped
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,

    /// The page size used when a client does not ask for one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// How many products to pull from the repository for each listing
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Whether to answer cross-origin requests from any origin
    #[serde(default)]
    pub cors: bool,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_page_limit() -> usize {
    100
}

fn default_page_size() -> usize {
    20
}

fn default_pool_size() -> usize {
    500
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            page_limit: default_page_limit(),
            default_page_size: default_page_size(),
            pool_size: default_pool_size(),
            cors: false,
        }
    }
}
