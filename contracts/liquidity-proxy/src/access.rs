//! # Access Control Guard
//!
//! Every privileged entry point has exactly one fixed authorization rule.
//! The rules are kept in a single table (`Entrypoint::authority`) instead of
//! being spread across the entry points, and there is no role hierarchy: the
//! governor does not inherit the executor's rights.

use soroban_sdk::Address;

use crate::error::ProxyError;
use crate::storage::ProxyConfig;

/// Who may invoke an entry point
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Authority {
    GovernorOnly,
    ExecutorOnly,
    LedgerCallbackOnly,
}

/// Privileged entry points of the proxy
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Entrypoint {
    AddLiquidity,
    RemoveLiquidity,
    ClaimRewards,
    Vote,
    Veto,
    Send,
    SendAll,
    SendTokens,
    SendAllTokens,
    SendAllTokensCallback,
    RescueFa12,
    RescueFa2,
    ResetSweep,
    SetGovernorContract,
    SetExecutorContract,
    SetVolatilityTolerance,
    SetHarbingerContract,
    SetMaxDataAge,
}

impl Entrypoint {
    pub fn authority(self) -> Authority {
        match self {
            // Veto is time-sensitive, so it sits with the operational role.
            Entrypoint::AddLiquidity | Entrypoint::Veto => Authority::ExecutorOnly,
            Entrypoint::SendAllTokensCallback => Authority::LedgerCallbackOnly,
            Entrypoint::RemoveLiquidity
            | Entrypoint::ClaimRewards
            | Entrypoint::Vote
            | Entrypoint::Send
            | Entrypoint::SendAll
            | Entrypoint::SendTokens
            | Entrypoint::SendAllTokens
            | Entrypoint::RescueFa12
            | Entrypoint::RescueFa2
            | Entrypoint::ResetSweep
            | Entrypoint::SetGovernorContract
            | Entrypoint::SetExecutorContract
            | Entrypoint::SetVolatilityTolerance
            | Entrypoint::SetHarbingerContract
            | Entrypoint::SetMaxDataAge => Authority::GovernorOnly,
        }
    }
}

/// Require that `caller` authorized this invocation and holds the role the
/// entry point is bound to.
///
/// # Errors
/// - `Unauthorized` - caller is not the configured governor/executor
/// - `BadCallbackSender` - a balance reply that is not from the token ledger
pub fn authorize(
    config: &ProxyConfig,
    caller: &Address,
    entrypoint: Entrypoint,
) -> Result<(), ProxyError> {
    caller.require_auth();

    let (expected, rejection) = match entrypoint.authority() {
        Authority::GovernorOnly => (&config.governor, ProxyError::Unauthorized),
        Authority::ExecutorOnly => (&config.executor, ProxyError::Unauthorized),
        Authority::LedgerCallbackOnly => (&config.token_ledger, ProxyError::BadCallbackSender),
    };

    if caller != expected {
        return Err(rejection);
    }
    Ok(())
}
