//! API Configuration
//!
//! Read from the process environment (after `.env` has been loaded).

use anyhow::Context;
use axum::http::HeaderValue;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `API_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `FRONTEND_ORIGINS`, comma-separated; entries that are not valid
    /// header values are dropped
    pub frontend_origins: Vec<HeaderValue>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("API_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("API_BIND_ADDR is not a socket address: {bind_addr}"))?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| origin.parse().ok())
            .collect();

        Ok(Self {
            bind_addr,
            frontend_origins,
        })
    }
}
