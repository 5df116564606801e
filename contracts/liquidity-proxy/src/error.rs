use soroban_sdk::contracterror;

/// Errors that can occur during proxy operations
///
/// Every failure aborts the whole invocation: storage writes and outbound
/// calls made earlier in the same invocation are rolled back by the host.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProxyError {
    /// `initialize` was already called
    AlreadyInitialized = 1,
    /// The proxy has no configuration yet
    NotInitialized = 2,
    /// Caller does not hold the role the entry point requires
    Unauthorized = 3,
    /// Zero denominator, non-positive deposit, negative amount or bad scale
    InvalidAmount = 4,
    /// The oracle could not be queried or reported no usable price
    OracleUnavailable = 5,
    /// Oracle data is older than the configured maximum age
    StaleData = 6,
    /// Oracle timestamp lies in the future
    ClockSkew = 7,
    /// Deposit price deviates from the oracle price by at least the tolerance
    ExcessiveVolatility = 8,
    /// A balance sweep is already waiting for its reply
    SweepAlreadyInProgress = 9,
    /// Balance reply did not come from the configured token ledger
    BadCallbackSender = 10,
    /// Balance reply arrived while no sweep was pending
    BadState = 11,
    /// An outbound contract call did not complete.
    ///
    /// Covers a missing contract or entry point as well as a callee that
    /// traps or returns an error (for example a transfer exceeding the
    /// proxy's balance). The host does not tell these apart reliably, so
    /// they share one code.
    ExternalCallTargetMissing = 12,
    /// Arithmetic overflow during price validation
    Overflow = 13,
}
