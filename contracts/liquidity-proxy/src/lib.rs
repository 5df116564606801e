//! # Liquidity Proxy Contract
//!
//! Permissioned custody proxy for an organization's position in an AMM
//! liquidity pool. The proxy holds the native base asset and a managed token
//! and splits the rights to move them between two roles.
//!
//! ## Roles
//! - **Executor**: adds liquidity (after an oracle price check) and vetoes.
//! - **Governor**: removes liquidity, claims rewards, votes, moves or rescues
//!   any asset and reconfigures the proxy.
//!
//! ## Features
//! - Oracle-backed deviation and staleness guard on every deposit
//! - Ordered approve → fund → invest sequence for deposits
//! - Two-phase balance sweep driven by the token ledger's asynchronous reply
//! - Rescue of foreign single-asset and multi-asset tokens
//! - One event per state-changing call

#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Symbol};

mod access;
mod error;
mod events;
mod interfaces;
mod operations;
mod price;
mod storage;
mod sweep;

pub use access::{Authority, Entrypoint};
pub use error::ProxyError;
pub use interfaces::{PriceData, TransferBatch, TransferTx};
pub use storage::{
    ProxyConfig, SweepPhase, SweepState, DEFAULT_MAX_DATA_AGE, DEFAULT_PRICE_SCALE,
    DEFAULT_VOLATILITY_TOLERANCE,
};

use events::{
    BaseAssetSentEvent, LiquidityAddedEvent, LiquidityRemovedEvent, OracleUpdatedEvent,
    ParameterUpdatedEvent, ProxyInitializedEvent, RewardsClaimedEvent, RoleUpdatedEvent,
    SweepCompletedEvent, SweepRequestedEvent, SweepResetEvent, TokensRescuedEvent,
    TokensSentEvent, VetoForwardedEvent, VoteForwardedEvent,
};

#[contract]
pub struct LiquidityProxy;

/// Load the configuration and check the caller against the entry point's role
fn authorized_config(
    env: &Env,
    caller: &Address,
    entrypoint: Entrypoint,
) -> Result<ProxyConfig, ProxyError> {
    let config = storage::get_config(env)?;
    access::authorize(&config, caller, entrypoint)?;
    storage::extend_instance_ttl(env);
    Ok(config)
}

#[contractimpl]
impl LiquidityProxy {
    /// Initialize the proxy configuration
    ///
    /// Must be authorized by the governor named in `config`.
    ///
    /// # Arguments
    /// * `config` - Roles, collaborator addresses and validation parameters
    ///
    /// # Errors
    /// - `AlreadyInitialized` - configuration already written
    /// - `InvalidAmount` - `price_scale` is not positive
    pub fn initialize(env: Env, config: ProxyConfig) -> Result<(), ProxyError> {
        if storage::is_initialized(&env) {
            return Err(ProxyError::AlreadyInitialized);
        }
        config.governor.require_auth();
        if config.price_scale <= 0 {
            return Err(ProxyError::InvalidAmount);
        }

        storage::set_config(&env, &config);
        storage::set_sweep_state(&env, &SweepState::Idle);
        storage::extend_instance_ttl(&env);

        ProxyInitializedEvent {
            governor: config.governor,
            executor: config.executor,
            token_ledger: config.token_ledger,
            pool: config.pool,
            oracle: config.oracle,
        }
        .publish(&env);
        Ok(())
    }

    /// Accepts the native asset unconditionally.
    ///
    /// Base-asset deposits arrive through the asset contract and need no call
    /// into the proxy; this entry point exists so senders that do call it
    /// never fail.
    pub fn default(_env: Env) {}

    // ── Pool operations ───────────────────────────────────────────────────────

    /// Add liquidity to the pool (executor only)
    ///
    /// The implied deposit price is checked against the oracle first. On
    /// success the pool is approved for `tokens`, receives `base_units` of the
    /// base asset and both are invested.
    ///
    /// # Arguments
    /// * `caller` - The executor address
    /// * `tokens` - Amount of managed tokens to deposit
    /// * `base_units` - Amount of base asset, in its smallest unit
    ///
    /// # Errors
    /// - `Unauthorized` - caller is not the executor
    /// - `InvalidAmount` - either amount is not positive
    /// - `OracleUnavailable`, `ClockSkew`, `StaleData` - unusable oracle data
    /// - `ExcessiveVolatility` - deposit price too far from the oracle price
    ///
    /// # Events
    /// Emits `liquidity_added_event`
    pub fn add_liquidity(
        env: Env,
        caller: Address,
        tokens: i128,
        base_units: i128,
    ) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::AddLiquidity)?;
        let check = price::validate_deposit(&env, &config, tokens, base_units)?;
        log!(
            &env,
            "deposit price ok input={} oracle={} age={}",
            check.input_price,
            check.oracle_price,
            check.data_age
        );
        operations::invest(&env, &config, tokens, base_units)?;

        LiquidityAddedEvent {
            executor: caller,
            tokens,
            base_units,
            oracle_price: check.oracle_price,
            input_price: check.input_price,
            deviation: check.deviation,
        }
        .publish(&env);
        Ok(())
    }

    /// Remove liquidity from the pool (governor only)
    ///
    /// # Arguments
    /// * `caller` - The governor address
    /// * `min_base_out` - Minimum base asset to receive
    /// * `min_tokens_out` - Minimum tokens to receive
    /// * `lp_amount` - LP shares to burn
    pub fn remove_liquidity(
        env: Env,
        caller: Address,
        min_base_out: i128,
        min_tokens_out: i128,
        lp_amount: i128,
    ) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::RemoveLiquidity)?;
        operations::divest(&env, &config, min_base_out, min_tokens_out, lp_amount)?;

        LiquidityRemovedEvent {
            min_base_out,
            min_tokens_out,
            lp_amount,
        }
        .publish(&env);
        Ok(())
    }

    /// Claim pool rewards into the proxy (governor only)
    pub fn claim_rewards(env: Env, caller: Address) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::ClaimRewards)?;
        operations::claim_rewards(&env, &config)?;

        RewardsClaimedEvent { pool: config.pool }.publish(&env);
        Ok(())
    }

    /// Vote in pool governance (governor only); forwarded verbatim
    pub fn vote(
        env: Env,
        caller: Address,
        candidate: BytesN<32>,
        value: i128,
        voter: Address,
    ) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::Vote)?;
        operations::vote(&env, &config, &candidate, value, &voter)?;

        VoteForwardedEvent {
            candidate,
            value,
            voter,
        }
        .publish(&env);
        Ok(())
    }

    /// Veto in pool governance (executor only); forwarded verbatim
    pub fn veto(env: Env, caller: Address, value: i128, voter: Address) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::Veto)?;
        operations::veto(&env, &config, value, &voter)?;

        VetoForwardedEvent { value, voter }.publish(&env);
        Ok(())
    }

    // ── Asset movement ────────────────────────────────────────────────────────

    /// Send `amount` of the base asset to `destination` (governor only)
    pub fn send(
        env: Env,
        caller: Address,
        amount: i128,
        destination: Address,
    ) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::Send)?;
        operations::send_base(&env, &config, amount, &destination)?;

        BaseAssetSentEvent {
            destination,
            amount,
        }
        .publish(&env);
        Ok(())
    }

    /// Send the whole base-asset balance to `destination` (governor only)
    ///
    /// # Returns
    /// The amount sent
    pub fn send_all(env: Env, caller: Address, destination: Address) -> Result<i128, ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::SendAll)?;
        let amount = operations::send_all_base(&env, &config, &destination)?;

        BaseAssetSentEvent {
            destination,
            amount,
        }
        .publish(&env);
        Ok(amount)
    }

    /// Send `amount` of the managed token to `destination` (governor only)
    pub fn send_tokens(
        env: Env,
        caller: Address,
        amount: i128,
        destination: Address,
    ) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::SendTokens)?;
        operations::send_tokens(&env, &config, amount, &destination)?;

        TokensSentEvent {
            destination,
            amount,
        }
        .publish(&env);
        Ok(())
    }

    /// Start sweeping the whole managed-token balance to `destination`
    /// (governor only)
    ///
    /// Only queries the ledger. The transfer happens when the ledger replies
    /// through `send_all_tokens_callback`.
    ///
    /// # Errors
    /// - `Unauthorized` - caller is not the governor
    /// - `SweepAlreadyInProgress` - a sweep is still waiting for its reply
    ///
    /// # Events
    /// Emits `sweep_requested_event`
    pub fn send_all_tokens(
        env: Env,
        caller: Address,
        destination: Address,
    ) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::SendAllTokens)?;
        sweep::request(&env, &config, destination.clone())?;

        SweepRequestedEvent { destination }.publish(&env);
        log!(&env, "sweep requested");
        Ok(())
    }

    /// Balance reply from the token ledger
    ///
    /// # Arguments
    /// * `caller` - Must be the configured token ledger
    /// * `balance` - The proxy's token balance as reported by the ledger
    ///
    /// # Errors
    /// - `BadCallbackSender` - caller is not the token ledger
    /// - `BadState` - no sweep is pending
    pub fn send_all_tokens_callback(
        env: Env,
        caller: Address,
        balance: i128,
    ) -> Result<(), ProxyError> {
        let config = authorized_config(&env, &caller, Entrypoint::SendAllTokensCallback)?;
        let destination = sweep::complete(&env, &config, balance)?;

        SweepCompletedEvent {
            destination,
            amount: balance,
        }
        .publish(&env);
        Ok(())
    }

    /// Abandon a pending sweep whose reply never arrived (governor only)
    ///
    /// # Returns
    /// The destination that was waiting, if any
    pub fn reset_sweep(env: Env, caller: Address) -> Result<Option<Address>, ProxyError> {
        authorized_config(&env, &caller, Entrypoint::ResetSweep)?;
        let abandoned = sweep::reset(&env);

        SweepResetEvent {
            abandoned: abandoned.clone(),
        }
        .publish(&env);
        Ok(abandoned)
    }

    /// Rescue tokens held on a single-asset (SEP-41) ledger (governor only)
    pub fn rescue_fa12(
        env: Env,
        caller: Address,
        ledger: Address,
        amount: i128,
        destination: Address,
    ) -> Result<(), ProxyError> {
        authorized_config(&env, &caller, Entrypoint::RescueFa12)?;
        operations::rescue_single_asset(&env, &ledger, amount, &destination)?;

        TokensRescuedEvent {
            ledger,
            token_id: None,
            amount,
            destination,
        }
        .publish(&env);
        Ok(())
    }

    /// Rescue one token id held on a multi-asset ledger (governor only)
    pub fn rescue_fa2(
        env: Env,
        caller: Address,
        ledger: Address,
        token_id: u128,
        amount: i128,
        destination: Address,
    ) -> Result<(), ProxyError> {
        authorized_config(&env, &caller, Entrypoint::RescueFa2)?;
        operations::rescue_multi_asset(&env, &ledger, token_id, amount, &destination)?;

        TokensRescuedEvent {
            ledger,
            token_id: Some(token_id),
            amount,
            destination,
        }
        .publish(&env);
        Ok(())
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    /// Hand the governor role to another address (governor only)
    pub fn set_governor_contract(
        env: Env,
        caller: Address,
        new_governor: Address,
    ) -> Result<(), ProxyError> {
        let mut config = authorized_config(&env, &caller, Entrypoint::SetGovernorContract)?;
        let previous = core::mem::replace(&mut config.governor, new_governor.clone());
        storage::set_config(&env, &config);

        RoleUpdatedEvent {
            role: Symbol::new(&env, "governor"),
            previous,
            current: new_governor,
        }
        .publish(&env);
        Ok(())
    }

    /// Hand the executor role to another address (governor only)
    pub fn set_executor_contract(
        env: Env,
        caller: Address,
        new_executor: Address,
    ) -> Result<(), ProxyError> {
        let mut config = authorized_config(&env, &caller, Entrypoint::SetExecutorContract)?;
        let previous = core::mem::replace(&mut config.executor, new_executor.clone());
        storage::set_config(&env, &config);

        RoleUpdatedEvent {
            role: Symbol::new(&env, "executor"),
            previous,
            current: new_executor,
        }
        .publish(&env);
        Ok(())
    }

    /// Set the deposit deviation tolerance, in whole percent (governor only)
    pub fn set_volatility_tolerance(
        env: Env,
        caller: Address,
        tolerance: u32,
    ) -> Result<(), ProxyError> {
        let mut config = authorized_config(&env, &caller, Entrypoint::SetVolatilityTolerance)?;
        let previous = core::mem::replace(&mut config.volatility_tolerance, tolerance);
        storage::set_config(&env, &config);

        ParameterUpdatedEvent {
            parameter: Symbol::new(&env, "volatility_tolerance"),
            previous: u64::from(previous),
            current: u64::from(tolerance),
        }
        .publish(&env);
        Ok(())
    }

    /// Point the proxy at another price oracle (governor only)
    pub fn set_harbinger_contract(
        env: Env,
        caller: Address,
        new_oracle: Address,
    ) -> Result<(), ProxyError> {
        let mut config = authorized_config(&env, &caller, Entrypoint::SetHarbingerContract)?;
        let previous = core::mem::replace(&mut config.oracle, new_oracle.clone());
        storage::set_config(&env, &config);

        OracleUpdatedEvent {
            previous,
            current: new_oracle,
        }
        .publish(&env);
        Ok(())
    }

    /// Set the maximum accepted oracle data age in seconds (governor only)
    pub fn set_max_data_age(
        env: Env,
        caller: Address,
        max_data_age: u64,
    ) -> Result<(), ProxyError> {
        let mut config = authorized_config(&env, &caller, Entrypoint::SetMaxDataAge)?;
        let previous = core::mem::replace(&mut config.max_data_age, max_data_age);
        storage::set_config(&env, &config);

        ParameterUpdatedEvent {
            parameter: Symbol::new(&env, "max_data_age"),
            previous,
            current: max_data_age,
        }
        .publish(&env);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn get_config(env: Env) -> Result<ProxyConfig, ProxyError> {
        storage::get_config(&env)
    }

    pub fn get_sweep_state(env: Env) -> SweepState {
        storage::get_sweep_state(&env)
    }
}

#[cfg(test)]
mod tests;
