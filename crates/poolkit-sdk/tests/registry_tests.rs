//! File-backed registry used by the launch workflow

use poolkit_sdk::testing::SimulatedChain;
use poolkit_sdk::{AddressRegistry, JsonFileRegistry, PoolBootstrapper, PoolLaunch};

const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

#[tokio::test]
async fn test_launch_writes_pool_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deployments.json");

    let chain = SimulatedChain::new();
    chain.add_token(WETH, "WETH", Some(18)).unwrap();
    chain.add_token(USDC, "USDC", Some(6)).unwrap();

    let registry = JsonFileRegistry::new(&path);
    registry.set("factory", "0x1f98431c8ad98523631ae4a59f267346ea31f984").unwrap();

    let boot = PoolBootstrapper::new(chain, registry);
    let outcome = boot
        .launch_pool(&PoolLaunch {
            token_a: WETH.to_string(),
            token_b: USDC.to_string(),
            fee: 500,
            ratio: "4000".parse().unwrap(),
        })
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let key = format!("pool:{}:{}:500", USDC, WETH);

    assert_eq!(stored["factory"], "0x1f98431c8ad98523631ae4a59f267346ea31f984");
    assert_eq!(stored[&key], outcome.pool.as_str());

    // A fresh handle sees the same entry through either token order
    let reopened = PoolBootstrapper::new(SimulatedChain::new(), JsonFileRegistry::new(&path));
    assert_eq!(
        reopened.resolve_pool(WETH, USDC, 500).unwrap(),
        Some(outcome.pool.clone())
    );
    assert_eq!(reopened.resolve_pool(USDC, WETH, 3000).unwrap(), None);
}

#[test]
fn test_resolve_rejects_unknown_fee() {
    let dir = tempfile::tempdir().unwrap();
    let boot = PoolBootstrapper::new(
        SimulatedChain::new(),
        JsonFileRegistry::new(dir.path().join("deployments.json")),
    );
    assert!(boot.resolve_pool(WETH, USDC, 100).is_err());
}
