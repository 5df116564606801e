//! # Proxy State
//!
//! Instance-storage layout for the proxy: one `ProxyConfig` written at
//! initialization and changed only through the governor setters, and one
//! `SweepState` owned by the balance-sweep state machine.

use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::error::ProxyError;

/// Default volatility tolerance, in whole percent
pub const DEFAULT_VOLATILITY_TOLERANCE: u32 = 5;
/// Default maximum oracle data age, in seconds
pub const DEFAULT_MAX_DATA_AGE: u64 = 60;
/// Smallest-unit scale of the base asset in the reference deployment
pub const DEFAULT_PRICE_SCALE: i128 = 1_000_000;

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for proxy data
#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum ProxyDataKey {
    /// Proxy configuration: ProxyConfig
    Config,
    /// Balance sweep workflow: SweepState
    Sweep,
}

/// Long-lived proxy configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyConfig {
    /// Holder of all administrative rights
    pub governor: Address,
    /// Holder of the add-liquidity and veto rights
    pub executor: Address,
    /// Fungible token ledger whose balance the proxy manages
    pub token_ledger: Address,
    /// AMM pool holding the liquidity position
    pub pool: Address,
    /// Price oracle used to validate deposits
    pub oracle: Address,
    /// Native asset contract (SAC) for base-asset transfers
    pub base_asset: Address,
    /// Asset-pair code requested from the oracle
    pub asset_code: Symbol,
    /// Maximum price deviation, in whole percent (exclusive bound)
    pub volatility_tolerance: u32,
    /// Maximum oracle data age in seconds
    pub max_data_age: u64,
    /// Divisor applied to `tokens / base_units` to get the input price
    pub price_scale: i128,
}

/// Phase of the balance sweep workflow
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SweepPhase {
    Idle,
    AwaitingBalance,
}

/// Balance sweep workflow state
///
/// The pending destination lives inside the `AwaitingBalance` variant, so a
/// destination without a pending sweep (or the reverse) cannot be stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SweepState {
    Idle,
    AwaitingBalance(Address),
}

impl SweepState {
    pub fn phase(&self) -> SweepPhase {
        match self {
            SweepState::Idle => SweepPhase::Idle,
            SweepState::AwaitingBalance(_) => SweepPhase::AwaitingBalance,
        }
    }

    pub fn pending_destination(&self) -> Option<Address> {
        match self {
            SweepState::Idle => None,
            SweepState::AwaitingBalance(destination) => Some(destination.clone()),
        }
    }
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&ProxyDataKey::Config)
}

pub fn get_config(env: &Env) -> Result<ProxyConfig, ProxyError> {
    env.storage()
        .instance()
        .get::<ProxyDataKey, ProxyConfig>(&ProxyDataKey::Config)
        .ok_or(ProxyError::NotInitialized)
}

pub fn set_config(env: &Env, config: &ProxyConfig) {
    env.storage().instance().set(&ProxyDataKey::Config, config);
}

/// Current sweep state; a proxy that never swept is idle
pub fn get_sweep_state(env: &Env) -> SweepState {
    env.storage()
        .instance()
        .get::<ProxyDataKey, SweepState>(&ProxyDataKey::Sweep)
        .unwrap_or(SweepState::Idle)
}

pub fn set_sweep_state(env: &Env, state: &SweepState) {
    env.storage().instance().set(&ProxyDataKey::Sweep, state);
}

/// Keep config and sweep state alive for as long as the contract is used
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
