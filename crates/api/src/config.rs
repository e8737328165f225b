//! Process configuration (environment variables).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};

use rationboard_inventory::{InventoryStore, SeedItem, SharedInventory, default_seed};

pub const ADDR_ENV: &str = "RATIONBOARD_ADDR";
pub const SEED_FILE_ENV: &str = "RATIONBOARD_SEED_FILE";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    /// JSON array of seed items; the built-in seed set is used when absent.
    pub seed_file: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the real environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup(ADDR_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .trim()
            .parse()
            .with_context(|| format!("{ADDR_ENV} is not a socket address: {addr}"))?;

        let seed_file = lookup(SEED_FILE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, seed_file })
    }

    pub fn load_seed(&self) -> anyhow::Result<Vec<SeedItem>> {
        let Some(path) = &self.seed_file else {
            tracing::info!("{SEED_FILE_ENV} not set; using built-in seed set");
            return Ok(default_seed());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let seed: Vec<SeedItem> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))?;
        tracing::info!(path = %path.display(), items = seed.len(), "loaded seed file");
        Ok(seed)
    }

    /// Construct the process-wide store once, stamping items as replenished at `now`.
    pub fn build_inventory(&self, now: DateTime<Utc>) -> anyhow::Result<SharedInventory> {
        let store = InventoryStore::from_seed(self.load_seed()?, now).context("invalid seed set")?;
        if store.is_empty() {
            tracing::warn!("inventory seed set is empty");
        }
        Ok(SharedInventory::new(store))
    }
}
