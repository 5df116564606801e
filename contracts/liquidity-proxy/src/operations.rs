//! # Operation Orchestrator
//!
//! Each asset-moving operation is a fixed, ordered list of outbound calls.
//! Authorization (and, for deposits, price validation) has already happened
//! by the time these run, so there is no branching left: either every call
//! goes out in order or the invocation fails and the host discards all of
//! them.

use soroban_sdk::{log, token, vec, Address, BytesN, Env};

use crate::error::ProxyError;
use crate::interfaces::{
    resolved, LiquidityPoolClient, MultiTokenLedgerClient, TokenLedgerClient, TransferBatch,
    TransferTx,
};
use crate::storage::ProxyConfig;

/// Ledgers an allowance granted to the pool stays valid for (about one day)
pub const APPROVAL_LEDGERS: u32 = 17_280;

fn require_non_negative(amount: i128) -> Result<(), ProxyError> {
    if amount < 0 {
        return Err(ProxyError::InvalidAmount);
    }
    Ok(())
}

/// Approve the pool for `tokens`, hand it `base_units` of the base asset and
/// invest both.
///
/// Soroban has no value attached to a call, so the base asset is transferred
/// to the pool right before `invest_liquidity`.
pub fn invest(
    env: &Env,
    config: &ProxyConfig,
    tokens: i128,
    base_units: i128,
) -> Result<(), ProxyError> {
    let this = env.current_contract_address();
    let expiration_ledger = env
        .ledger()
        .sequence()
        .checked_add(APPROVAL_LEDGERS)
        .ok_or(ProxyError::Overflow)?;

    let ledger = TokenLedgerClient::new(env, &config.token_ledger);
    resolved(ledger.try_approve(&this, &config.pool, &tokens, &expiration_ledger))?;

    let base_asset = token::TokenClient::new(env, &config.base_asset);
    resolved(base_asset.try_transfer(&this, &config.pool, &base_units))?;

    let pool = LiquidityPoolClient::new(env, &config.pool);
    resolved(pool.try_invest_liquidity(&this, &base_units, &tokens))?;

    log!(env, "invest tokens={} base_units={}", tokens, base_units);
    Ok(())
}

/// Withdraw liquidity; the slippage bounds are passed through unchanged
pub fn divest(
    env: &Env,
    config: &ProxyConfig,
    min_base_out: i128,
    min_tokens_out: i128,
    lp_amount: i128,
) -> Result<(), ProxyError> {
    require_non_negative(min_base_out)?;
    require_non_negative(min_tokens_out)?;
    require_non_negative(lp_amount)?;

    let this = env.current_contract_address();
    let pool = LiquidityPoolClient::new(env, &config.pool);
    resolved(pool.try_divest_liquidity(&this, &min_base_out, &min_tokens_out, &lp_amount))
}

/// Withdraw accumulated pool rewards to the proxy itself
pub fn claim_rewards(env: &Env, config: &ProxyConfig) -> Result<(), ProxyError> {
    let this = env.current_contract_address();
    let pool = LiquidityPoolClient::new(env, &config.pool);
    resolved(pool.try_withdraw_profit(&this, &this))
}

pub fn vote(
    env: &Env,
    config: &ProxyConfig,
    candidate: &BytesN<32>,
    value: i128,
    voter: &Address,
) -> Result<(), ProxyError> {
    let pool = LiquidityPoolClient::new(env, &config.pool);
    resolved(pool.try_vote(candidate, &value, voter))
}

pub fn veto(env: &Env, config: &ProxyConfig, value: i128, voter: &Address) -> Result<(), ProxyError> {
    let pool = LiquidityPoolClient::new(env, &config.pool);
    resolved(pool.try_veto(&value, voter))
}

/// Send `amount` of the native base asset to `destination`
pub fn send_base(
    env: &Env,
    config: &ProxyConfig,
    amount: i128,
    destination: &Address,
) -> Result<(), ProxyError> {
    require_non_negative(amount)?;

    let this = env.current_contract_address();
    let base_asset = token::TokenClient::new(env, &config.base_asset);
    resolved(base_asset.try_transfer(&this, destination, &amount))
}

/// Send the proxy's entire base-asset balance to `destination`.
///
/// Returns the amount sent.
pub fn send_all_base(
    env: &Env,
    config: &ProxyConfig,
    destination: &Address,
) -> Result<i128, ProxyError> {
    let this = env.current_contract_address();
    let base_asset = token::TokenClient::new(env, &config.base_asset);
    let balance = resolved(base_asset.try_balance(&this))?;
    resolved(base_asset.try_transfer(&this, destination, &balance))?;
    Ok(balance)
}

/// Transfer managed tokens out of the proxy
pub fn send_tokens(
    env: &Env,
    config: &ProxyConfig,
    amount: i128,
    destination: &Address,
) -> Result<(), ProxyError> {
    require_non_negative(amount)?;

    let this = env.current_contract_address();
    let ledger = TokenLedgerClient::new(env, &config.token_ledger);
    resolved(ledger.try_transfer(&this, destination, &amount))
}

/// Move tokens held on an arbitrary single-asset (SEP-41) ledger
pub fn rescue_single_asset(
    env: &Env,
    ledger: &Address,
    amount: i128,
    destination: &Address,
) -> Result<(), ProxyError> {
    require_non_negative(amount)?;

    let this = env.current_contract_address();
    let client = token::TokenClient::new(env, ledger);
    resolved(client.try_transfer(&this, destination, &amount))
}

/// Move one token id held on an arbitrary multi-asset ledger
pub fn rescue_multi_asset(
    env: &Env,
    ledger: &Address,
    token_id: u128,
    amount: i128,
    destination: &Address,
) -> Result<(), ProxyError> {
    require_non_negative(amount)?;

    let batch = TransferBatch {
        from: env.current_contract_address(),
        txs: vec![
            env,
            TransferTx {
                to: destination.clone(),
                token_id,
                amount,
            },
        ],
    };
    let client = MultiTokenLedgerClient::new(env, ledger);
    resolved(client.try_transfer(&vec![env, batch]))
}
