use anyhow::{Context, Result};
use std::net::SocketAddr;

pub(crate) const BIND_ADDR_ENV: &str = "DEFISIGHT_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub(crate) struct ServiceConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServiceConfig {
    /// Explicit value first, then `DEFISIGHT_BIND_ADDR`, then `0.0.0.0:8080`.
    pub(crate) fn from_env(bind_addr: Option<String>) -> Result<Self> {
        let raw = bind_addr
            .or_else(|| std::env::var(BIND_ADDR_ENV).ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());

        let bind_addr = raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid {BIND_ADDR_ENV}: {raw}"))?;

        Ok(Self { bind_addr })
    }
}
