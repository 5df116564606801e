//! # Price Validation Engine
//!
//! Guards `add_liquidity` against depositing at a ratio far from the market.
//! The implied price of the deposit is compared with the oracle's reference
//! price using integer arithmetic only, so every validator reaches the same
//! verdict.
//!
//! ## Formula
//! ```text
//! input_price = tokens / base_units / price_scale
//! deviation   = (|oracle_price - input_price| / oracle_price) * 100
//! ```
//! Each division truncates. The deposit passes only when
//! `deviation < volatility_tolerance`.

use soroban_sdk::Env;

use crate::error::ProxyError;
use crate::interfaces::{PriceData, PriceOracleClient};
use crate::storage::ProxyConfig;

/// Outcome of a successful price validation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceCheck {
    pub oracle_price: i128,
    pub input_price: i128,
    pub deviation: i128,
    pub data_age: u64,
}

/// Validate a proposed deposit of `tokens` against `base_units`.
///
/// Amounts are checked before the oracle is queried, so a zero denominator
/// never costs an outbound call.
///
/// # Errors
/// - `InvalidAmount` - `tokens` or `base_units` is not positive
/// - `OracleUnavailable` - oracle call failed or returned no usable price
/// - `ClockSkew` - oracle timestamp is ahead of the ledger
/// - `StaleData` - oracle data older than `max_data_age`
/// - `ExcessiveVolatility` - deviation reached the tolerance
pub fn validate_deposit(
    env: &Env,
    config: &ProxyConfig,
    tokens: i128,
    base_units: i128,
) -> Result<PriceCheck, ProxyError> {
    if tokens <= 0 || base_units <= 0 {
        return Err(ProxyError::InvalidAmount);
    }

    let reported = fetch_oracle_price(env, config)?;
    let data_age = data_age(env.ledger().timestamp(), reported.timestamp)?;
    if data_age > config.max_data_age {
        return Err(ProxyError::StaleData);
    }

    let input_price = input_price(tokens, base_units, config.price_scale)?;
    let deviation = deviation_percent(reported.price, input_price)?;
    if deviation >= i128::from(config.volatility_tolerance) {
        return Err(ProxyError::ExcessiveVolatility);
    }

    Ok(PriceCheck {
        oracle_price: reported.price,
        input_price,
        deviation,
        data_age,
    })
}

/// Query the oracle for the configured asset pair
fn fetch_oracle_price(env: &Env, config: &ProxyConfig) -> Result<PriceData, ProxyError> {
    let oracle = PriceOracleClient::new(env, &config.oracle);
    let reported = match oracle.try_get_price(&config.asset_code) {
        Ok(Ok(Some(data))) => data,
        _ => return Err(ProxyError::OracleUnavailable),
    };

    // A non-positive reference price cannot be used as a divisor.
    if reported.price <= 0 {
        return Err(ProxyError::OracleUnavailable);
    }
    Ok(reported)
}

/// Age of an oracle report at ledger time `now`
pub fn data_age(now: u64, reported_at: u64) -> Result<u64, ProxyError> {
    now.checked_sub(reported_at).ok_or(ProxyError::ClockSkew)
}

/// Implied price of a deposit, truncated at each division
pub fn input_price(tokens: i128, base_units: i128, price_scale: i128) -> Result<i128, ProxyError> {
    if base_units <= 0 || price_scale <= 0 {
        return Err(ProxyError::InvalidAmount);
    }
    Ok(tokens / base_units / price_scale)
}

/// Deviation of `input_price` from `oracle_price`, in whole percent.
///
/// The ratio is truncated before it is scaled by 100, so any input price in
/// `(0, 2 * oracle_price)` reports a deviation of zero.
pub fn deviation_percent(oracle_price: i128, input_price: i128) -> Result<i128, ProxyError> {
    if oracle_price <= 0 {
        return Err(ProxyError::OracleUnavailable);
    }
    let diff = oracle_price.abs_diff(input_price);
    let diff = i128::try_from(diff).map_err(|_| ProxyError::Overflow)?;
    (diff / oracle_price)
        .checked_mul(100)
        .ok_or(ProxyError::Overflow)
}
