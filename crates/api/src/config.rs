//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_NODE_NAME: &str = "localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog definition. Unset means an empty catalog is served.
    pub catalog_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
    pub default_translations_path: Option<PathBuf>,
    pub node_name: String,
}

impl ApiConfig {
    /// Read `PLANBOOK_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in
    /// production, a map in tests). Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("PLANBOOK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("PLANBOOK_BIND_ADDR is not a socket address: {bind_addr}"))?;

        Ok(Self {
            bind_addr,
            catalog_path: get("PLANBOOK_CATALOG_PATH").map(PathBuf::from),
            translations_path: get("PLANBOOK_TRANSLATIONS_PATH").map(PathBuf::from),
            default_translations_path: get("PLANBOOK_DEFAULT_TRANSLATIONS_PATH").map(PathBuf::from),
            node_name: get("PLANBOOK_NODE_NAME").unwrap_or_else(|| DEFAULT_NODE_NAME.to_string()),
        })
    }
}
