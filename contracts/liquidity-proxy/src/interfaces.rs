//! # External Contract Interfaces
//!
//! Client traits for the collaborators the proxy talks to. Only the shapes
//! the proxy relies on are declared here; the collaborators themselves are
//! separate contracts.

use soroban_sdk::{contractclient, contracttype, Address, BytesN, Env, Symbol, Vec};

use crate::error::ProxyError;

/// Price report returned by the oracle
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Reference price for the asset pair
    pub price: i128,
    /// Ledger timestamp (seconds) the price was observed at
    pub timestamp: u64,
}

/// Single transfer inside a multi-asset batch
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferTx {
    pub to: Address,
    pub token_id: u128,
    pub amount: i128,
}

/// Multi-asset transfer batch, all moved out of `from`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferBatch {
    pub from: Address,
    pub txs: Vec<TransferTx>,
}

/// Fungible token ledger held by the proxy.
///
/// `get_balance` does not answer in the same invocation: the ledger later
/// invokes `callback_contract.callback_fn(ledger, balance)` as a new call.
#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedger {
    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn get_balance(env: Env, owner: Address, callback_contract: Address, callback_fn: Symbol);
}

/// Multi-asset ledger, used to rescue tokens sent to the proxy by mistake
#[contractclient(name = "MultiTokenLedgerClient")]
pub trait MultiTokenLedger {
    fn transfer(env: Env, batches: Vec<TransferBatch>);
}

/// AMM pool whose liquidity position the proxy manages
#[contractclient(name = "LiquidityPoolClient")]
pub trait LiquidityPool {
    fn invest_liquidity(env: Env, provider: Address, base_amount: i128, tokens: i128);

    fn divest_liquidity(
        env: Env,
        provider: Address,
        min_base_out: i128,
        min_tokens_out: i128,
        lp_amount: i128,
    );

    fn withdraw_profit(env: Env, provider: Address, receiver: Address);

    fn vote(env: Env, candidate: BytesN<32>, value: i128, voter: Address);

    fn veto(env: Env, value: i128, voter: Address);
}

/// Price oracle view
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn get_price(env: Env, asset_code: Symbol) -> Option<PriceData>;
}

/// Collapse the nested result of a `try_*` client call.
///
/// A missing contract, a missing entry point, a trapping callee and a callee
/// error all abort the operation with `ExternalCallTargetMissing`.
pub(crate) fn resolved<T, C, E>(result: Result<Result<T, C>, E>) -> Result<T, ProxyError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => Err(ProxyError::ExternalCallTargetMissing),
    }
}
