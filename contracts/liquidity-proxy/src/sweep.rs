//! # Balance Sweep State Machine
//!
//! The proxy cannot read its token balance on the ledger within its own
//! invocation; it has to ask and be told later. A sweep is therefore split
//! over two invocations:
//!
//! ```text
//!            request(destination)                 complete(balance)
//!   Idle ──────────────────────────▶ AwaitingBalance ─────────────────▶ Idle
//!     ▲                                   │
//!     └────────────── reset ──────────────┘
//! ```
//!
//! Only one sweep may be pending. Any number of unrelated calls can land
//! between the request and the reply, so the reply is only accepted from the
//! token ledger and only while a sweep is pending.

use soroban_sdk::{log, Address, Env, Symbol};

use crate::error::ProxyError;
use crate::interfaces::{resolved, TokenLedgerClient};
use crate::storage::{get_sweep_state, set_sweep_state, ProxyConfig, SweepState};

/// Entry point the ledger replies to
pub const CALLBACK_FN: &str = "send_all_tokens_callback";

/// Ask the ledger for the proxy's balance and remember where to send it.
///
/// # Errors
/// - `SweepAlreadyInProgress` - a previous sweep has not been answered
/// - `ExternalCallTargetMissing` - the ledger has no `get_balance`
pub fn request(env: &Env, config: &ProxyConfig, destination: Address) -> Result<(), ProxyError> {
    if let SweepState::AwaitingBalance(_) = get_sweep_state(env) {
        return Err(ProxyError::SweepAlreadyInProgress);
    }

    let this = env.current_contract_address();
    let ledger = TokenLedgerClient::new(env, &config.token_ledger);
    resolved(ledger.try_get_balance(&this, &this, &Symbol::new(env, CALLBACK_FN)))?;

    set_sweep_state(env, &SweepState::AwaitingBalance(destination));
    Ok(())
}

/// Forward the reported balance to the pending destination and go idle.
///
/// The caller must already be authorized as the token ledger.
///
/// Returns the destination the balance was sent to.
///
/// # Errors
/// - `BadState` - no sweep is pending (spurious or duplicate reply)
/// - `InvalidAmount` - negative balance reported
pub fn complete(env: &Env, config: &ProxyConfig, balance: i128) -> Result<Address, ProxyError> {
    let destination = match get_sweep_state(env) {
        SweepState::AwaitingBalance(destination) => destination,
        SweepState::Idle => return Err(ProxyError::BadState),
    };
    if balance < 0 {
        return Err(ProxyError::InvalidAmount);
    }

    let this = env.current_contract_address();
    let ledger = TokenLedgerClient::new(env, &config.token_ledger);
    resolved(ledger.try_transfer(&this, &destination, &balance))?;

    set_sweep_state(env, &SweepState::Idle);
    log!(env, "sweep complete amount={}", balance);
    Ok(destination)
}

/// Abandon any pending sweep.
///
/// Returns the destination that was waiting, if any. A reply arriving after
/// the reset is rejected with `BadState`.
pub fn reset(env: &Env) -> Option<Address> {
    let abandoned = get_sweep_state(env).pending_destination();
    set_sweep_state(env, &SweepState::Idle);
    abandoned
}
