//! Deployment address registry
//!
//! Maps string keys (`pool:<token0>:<token1>:<fee>`, contract names, ...) to
//! deployed addresses. The bootstrap workflow receives a registry explicitly;
//! nothing reads a global.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use poolkit_core::{sort_addresses, FeeTier, TokenAddress};
use tracing::debug;

use crate::error::{SdkError, SdkResult};

/// Key-value store of deployed addresses
pub trait AddressRegistry: Send + Sync {
    fn get(&self, key: &str) -> SdkResult<Option<String>>;

    fn set(&self, key: &str, address: &str) -> SdkResult<()>;

    /// All entries, sorted by key
    fn entries(&self) -> SdkResult<BTreeMap<String, String>>;
}

/// Registry key for a pool. Token order does not matter.
pub fn pool_key(token_a: &TokenAddress, token_b: &TokenAddress, fee: FeeTier) -> SdkResult<String> {
    let pair = sort_addresses(token_a, token_b)?;
    Ok(format!("pool:{}:{}:{}", pair.token0, pair.token1, fee.fee()))
}

/// Registry persisted as a flat JSON object
///
/// Every call reads the file again so edits made by other tools are visible.
/// Writes go to a sibling temp file that is renamed over the registry file.
#[derive(Debug)]
pub struct JsonFileRegistry {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> SdkResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| {
            SdkError::Registry(format!("{} is not a JSON object: {}", self.path.display(), e))
        })
    }

    fn store(&self, entries: &BTreeMap<String, String>) -> SdkResult<()> {
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            serde_json::to_writer_pretty(&mut file, entries)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl AddressRegistry for JsonFileRegistry {
    fn get(&self, key: &str) -> SdkResult<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, address: &str) -> SdkResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| SdkError::Registry("registry lock poisoned".to_string()))?;

        let mut entries = self.load()?;
        entries.insert(key.to_string(), address.to_string());
        self.store(&entries)?;

        debug!(key, address, path = %self.path.display(), "registry updated");
        Ok(())
    }

    fn entries(&self) -> SdkResult<BTreeMap<String, String>> {
        self.load()
    }
}

/// In-process registry
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> SdkResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| SdkError::Registry("registry lock poisoned".to_string()))
    }
}

impl AddressRegistry for MemoryRegistry {
    fn get(&self, key: &str) -> SdkResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, address: &str) -> SdkResult<()> {
        self.lock()?.insert(key.to_string(), address.to_string());
        Ok(())
    }

    fn entries(&self) -> SdkResult<BTreeMap<String, String>> {
        Ok(self.lock()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    #[test]
    fn test_pool_key_is_order_independent() {
        let weth = TokenAddress::new(WETH).unwrap();
        let usdc = TokenAddress::new(USDC).unwrap();

        let forward = pool_key(&weth, &usdc, FeeTier::Medium).unwrap();
        let backward = pool_key(&usdc, &weth, FeeTier::Medium).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, format!("pool:{}:{}:3000", USDC, WETH));
    }

    #[test]
    fn test_pool_key_rejects_identical_tokens() {
        let weth = TokenAddress::new(WETH).unwrap();
        assert!(pool_key(&weth, &weth, FeeTier::Low).is_err());
    }

    #[test]
    fn test_memory_registry() {
        let registry = MemoryRegistry::new();
        assert_eq!(registry.get("factory").unwrap(), None);

        registry.set("factory", "0x01").unwrap();
        registry.set("factory", "0x02").unwrap();

        assert_eq!(registry.get("factory").unwrap().as_deref(), Some("0x02"));
        assert_eq!(registry.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_json_registry_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");

        let registry = JsonFileRegistry::new(&path);
        assert!(registry.entries().unwrap().is_empty());

        registry.set("b", "0x0b").unwrap();
        registry.set("a", "0x0a").unwrap();

        let reopened = JsonFileRegistry::new(&path);
        let entries = reopened.entries().unwrap();
        assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_json_registry_sees_external_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let registry = JsonFileRegistry::new(&path);

        registry.set("factory", "0x01").unwrap();
        fs::write(&path, r#"{"factory": "0xff"}"#).unwrap();

        assert_eq!(registry.get("factory").unwrap().as_deref(), Some("0xff"));
    }

    #[test]
    fn test_json_registry_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let registry = JsonFileRegistry::new(&path);
        assert!(matches!(registry.entries(), Err(SdkError::Registry(_))));
    }
}
