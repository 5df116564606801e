//! # Proxy Events
//!
//! Every successful state-changing entry point publishes exactly one event,
//! so each configuration change and asset movement is a distinct, indexable
//! record. The `#[contractevent]` macro uses the snake_case struct name as the
//! leading topic; `#[topic]` fields become extra topics and the remaining
//! fields form the data map.

use soroban_sdk::{contractevent, Address, BytesN, Symbol};

/// Emitted once when the proxy configuration is first written.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProxyInitializedEvent {
    pub governor: Address,
    pub executor: Address,
    pub token_ledger: Address,
    pub pool: Address,
    pub oracle: Address,
}

/// Emitted after a validated deposit was approved and invested.
///
/// # Fields
/// * `executor` – The executor that submitted the deposit.
/// * `tokens` – Token amount approved for and invested into the pool.
/// * `base_units` – Base-asset amount sent along with the investment.
/// * `oracle_price` – Reference price the deposit was checked against.
/// * `input_price` – Implied price of the deposit.
/// * `deviation` – Deviation in whole percent (below tolerance).
#[contractevent]
#[derive(Clone, Debug)]
pub struct LiquidityAddedEvent {
    #[topic]
    pub executor: Address,
    pub tokens: i128,
    pub base_units: i128,
    pub oracle_price: i128,
    pub input_price: i128,
    pub deviation: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct LiquidityRemovedEvent {
    pub min_base_out: i128,
    pub min_tokens_out: i128,
    pub lp_amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RewardsClaimedEvent {
    pub pool: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct VoteForwardedEvent {
    pub candidate: BytesN<32>,
    pub value: i128,
    pub voter: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct VetoForwardedEvent {
    pub value: i128,
    pub voter: Address,
}

/// Emitted when native base asset leaves the proxy (`send` / `send_all`).
#[contractevent]
#[derive(Clone, Debug)]
pub struct BaseAssetSentEvent {
    #[topic]
    pub destination: Address,
    pub amount: i128,
}

/// Emitted when managed tokens leave the proxy through `send_tokens`.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TokensSentEvent {
    #[topic]
    pub destination: Address,
    pub amount: i128,
}

/// Emitted when a balance sweep starts waiting for the ledger's reply.
#[contractevent]
#[derive(Clone, Debug)]
pub struct SweepRequestedEvent {
    #[topic]
    pub destination: Address,
}

/// Emitted when the ledger's reply was forwarded to the pending destination.
#[contractevent]
#[derive(Clone, Debug)]
pub struct SweepCompletedEvent {
    #[topic]
    pub destination: Address,
    pub amount: i128,
}

/// Emitted when the governor abandons a sweep.
///
/// `abandoned` is `None` when no sweep was pending.
#[contractevent]
#[derive(Clone, Debug)]
pub struct SweepResetEvent {
    pub abandoned: Option<Address>,
}

/// Emitted when foreign tokens are moved out of the proxy.
///
/// `token_id` is set for multi-asset ledgers only.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TokensRescuedEvent {
    #[topic]
    pub ledger: Address,
    pub token_id: Option<u128>,
    pub amount: i128,
    pub destination: Address,
}

/// Emitted when the governor or executor role moves to another address.
///
/// `role` is `governor` or `executor`.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RoleUpdatedEvent {
    #[topic]
    pub role: Symbol,
    pub previous: Address,
    pub current: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OracleUpdatedEvent {
    pub previous: Address,
    pub current: Address,
}

/// Emitted when a numeric validation parameter changes.
///
/// `parameter` is `volatility_tolerance` or `max_data_age`.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ParameterUpdatedEvent {
    #[topic]
    pub parameter: Symbol,
    pub previous: u64,
    pub current: u64,
}
