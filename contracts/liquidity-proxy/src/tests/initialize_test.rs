use soroban_sdk::{testutils::Address as _, Address, Env, Symbol};

use super::test_helpers::setup;
use crate::{
    LiquidityProxy, LiquidityProxyClient, ProxyConfig, ProxyError, SweepPhase, SweepState,
    DEFAULT_MAX_DATA_AGE, DEFAULT_PRICE_SCALE, DEFAULT_VOLATILITY_TOLERANCE,
};

fn sample_config(env: &Env) -> ProxyConfig {
    ProxyConfig {
        governor: Address::generate(env),
        executor: Address::generate(env),
        token_ledger: Address::generate(env),
        pool: Address::generate(env),
        oracle: Address::generate(env),
        base_asset: Address::generate(env),
        asset_code: Symbol::new(env, "XTZ_USD"),
        volatility_tolerance: DEFAULT_VOLATILITY_TOLERANCE,
        max_data_age: DEFAULT_MAX_DATA_AGE,
        price_scale: DEFAULT_PRICE_SCALE,
    }
}

#[test]
fn test_initialize_stores_config() {
    let env = Env::default();
    env.mock_all_auths();
    let proxy_id = env.register(LiquidityProxy, ());
    let proxy = LiquidityProxyClient::new(&env, &proxy_id);

    let config = sample_config(&env);
    proxy.initialize(&config);

    assert_eq!(proxy.get_config(), config);
    assert_eq!(proxy.get_sweep_state(), SweepState::Idle);
    assert_eq!(proxy.get_sweep_state().phase(), SweepPhase::Idle);
}

#[test]
fn test_initialize_twice_fails() {
    let t = setup();
    let config = t.config();

    let result = t.proxy.try_initialize(&config);
    assert_eq!(result, Err(Ok(ProxyError::AlreadyInitialized)));
}

#[test]
fn test_initialize_rejects_non_positive_scale() {
    let env = Env::default();
    env.mock_all_auths();
    let proxy_id = env.register(LiquidityProxy, ());
    let proxy = LiquidityProxyClient::new(&env, &proxy_id);

    let mut config = sample_config(&env);
    config.price_scale = 0;

    let result = proxy.try_initialize(&config);
    assert_eq!(result, Err(Ok(ProxyError::InvalidAmount)));
    assert_eq!(proxy.try_get_config(), Err(Ok(ProxyError::NotInitialized)));
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_operations_before_initialize_fail() {
    let env = Env::default();
    env.mock_all_auths();
    let proxy_id = env.register(LiquidityProxy, ());
    let proxy = LiquidityProxyClient::new(&env, &proxy_id);

    let caller = Address::generate(&env);
    proxy.add_liquidity(&caller, &1_000_000, &10_000);
}

#[test]
fn test_default_entrypoint_is_a_no_op() {
    let env = Env::default();
    let proxy_id = env.register(LiquidityProxy, ());
    let proxy = LiquidityProxyClient::new(&env, &proxy_id);

    // No configuration and no auth needed.
    proxy.default();
    assert_eq!(proxy.try_get_config(), Err(Ok(ProxyError::NotInitialized)));

    let t = setup();
    let before = t.config();
    t.proxy.default();
    assert_eq!(t.config(), before);
}
