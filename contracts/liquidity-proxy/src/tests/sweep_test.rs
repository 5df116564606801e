use soroban_sdk::{testutils::Address as _, Address, Symbol};

use super::mocks::BalanceRequest;
use super::test_helpers::{setup, TOKEN_FUNDING};
use crate::{ProxyError, SweepPhase, SweepState};

#[test]
fn test_sweep_request_queries_ledger() {
    let t = setup();
    let destination = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &destination);

    assert_eq!(
        t.ledger.last_request(),
        Some(BalanceRequest {
            owner: t.proxy_id.clone(),
            callback_contract: t.proxy_id.clone(),
            callback_fn: Symbol::new(&t.env, "send_all_tokens_callback"),
        })
    );
    let state = t.proxy.get_sweep_state();
    assert_eq!(state.phase(), SweepPhase::AwaitingBalance);
    assert_eq!(state.pending_destination(), Some(destination.clone()));

    // Nothing has moved yet.
    assert_eq!(t.ledger.transfer_count(), 0);
    assert_eq!(t.ledger.balance(&destination), 0);
}

#[test]
fn test_second_sweep_is_rejected() {
    let t = setup();
    let first = Address::generate(&t.env);
    let second = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &first);
    let result = t.proxy.try_send_all_tokens(&t.governor, &second);

    assert_eq!(result, Err(Ok(ProxyError::SweepAlreadyInProgress)));
    assert_eq!(t.ledger.request_count(), 1);
    assert_eq!(t.proxy.get_sweep_state(), SweepState::AwaitingBalance(first));
}

#[test]
fn test_sweep_round_trip() {
    let t = setup();
    let destination = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &destination);
    t.proxy
        .send_all_tokens_callback(&t.ledger.address, &TOKEN_FUNDING);

    assert_eq!(t.proxy.get_sweep_state(), SweepState::Idle);
    assert_eq!(t.proxy.get_sweep_state().pending_destination(), None);
    assert_eq!(t.ledger.transfer_count(), 1);
    assert_eq!(t.ledger.balance(&destination), TOKEN_FUNDING);
    assert_eq!(t.ledger.balance(&t.proxy_id), 0);
}

#[test]
fn test_callback_from_impostor_changes_nothing() {
    let t = setup();
    let destination = Address::generate(&t.env);
    let impostor = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &destination);
    let result = t.proxy.try_send_all_tokens_callback(&impostor, &TOKEN_FUNDING);

    assert_eq!(result, Err(Ok(ProxyError::BadCallbackSender)));
    assert_eq!(
        t.proxy.get_sweep_state(),
        SweepState::AwaitingBalance(destination)
    );
    assert_eq!(t.ledger.transfer_count(), 0);
}

#[test]
fn test_callback_without_pending_sweep_fails() {
    let t = setup();

    let result = t.proxy.try_send_all_tokens_callback(&t.ledger.address, &10);
    assert_eq!(result, Err(Ok(ProxyError::BadState)));
    assert_eq!(t.ledger.transfer_count(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #11)")]
fn test_duplicate_callback_panics() {
    let t = setup();
    let destination = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &destination);
    t.proxy.send_all_tokens_callback(&t.ledger.address, &100);
    t.proxy.send_all_tokens_callback(&t.ledger.address, &100);
}

#[test]
fn test_callback_rejects_negative_balance() {
    let t = setup();
    let destination = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &destination);
    let result = t.proxy.try_send_all_tokens_callback(&t.ledger.address, &-1);

    assert_eq!(result, Err(Ok(ProxyError::InvalidAmount)));
    assert_eq!(
        t.proxy.get_sweep_state(),
        SweepState::AwaitingBalance(destination)
    );
}

#[test]
fn test_calls_interleaved_with_pending_sweep() {
    let t = setup();
    let destination = Address::generate(&t.env);
    let other = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &destination);
    // The ledger reported its balance before these ran; the reply carries
    // whatever it reported.
    t.proxy.send_tokens(&t.governor, &1_000, &other);
    t.proxy.claim_rewards(&t.governor);
    t.proxy
        .send_all_tokens_callback(&t.ledger.address, &(TOKEN_FUNDING - 1_000));

    assert_eq!(t.ledger.balance(&other), 1_000);
    assert_eq!(t.ledger.balance(&destination), TOKEN_FUNDING - 1_000);
    assert_eq!(t.proxy.get_sweep_state(), SweepState::Idle);
}

#[test]
fn test_reset_unsticks_sweep() {
    let t = setup();
    let abandoned = Address::generate(&t.env);
    let retry = Address::generate(&t.env);

    t.proxy.send_all_tokens(&t.governor, &abandoned);
    assert_eq!(t.proxy.reset_sweep(&t.governor), Some(abandoned.clone()));
    assert_eq!(t.proxy.get_sweep_state(), SweepState::Idle);

    // A reply that shows up late is refused.
    let result = t
        .proxy
        .try_send_all_tokens_callback(&t.ledger.address, &TOKEN_FUNDING);
    assert_eq!(result, Err(Ok(ProxyError::BadState)));
    assert_eq!(t.ledger.balance(&abandoned), 0);

    t.proxy.send_all_tokens(&t.governor, &retry);
    t.proxy
        .send_all_tokens_callback(&t.ledger.address, &TOKEN_FUNDING);
    assert_eq!(t.ledger.balance(&retry), TOKEN_FUNDING);
    assert_eq!(t.ledger.request_count(), 2);
}

#[test]
fn test_reset_when_idle() {
    let t = setup();

    assert_eq!(t.proxy.reset_sweep(&t.governor), None);
    assert_eq!(t.proxy.get_sweep_state(), SweepState::Idle);
}
