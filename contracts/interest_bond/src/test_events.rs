//! Event payloads emitted by accrual, settlement and the unit ledger.

#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, FromVal};

#[test]
fn test_interest_paid_carries_per_cycle_amount() {
    let e = Env::default();
    let f = setup(&e);

    advance(&e, 3 * INTERVAL);
    f.client.accrue(&f.issuer);

    let paid = bond_events(&e, &f, "interest_paid");
    assert_eq!(paid.len(), 1);
    let (topics, data) = &paid[0];
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), f.holder);
    // Three cycles were credited, but the event reports one.
    assert_eq!(i128::from_val(&e, data), SUPPLY / 20);
    assert_eq!(f.client.claimable(&f.holder), 3 * (SUPPLY / 20));
}

#[test]
fn test_interest_paid_emitted_per_holder_in_registry_order() {
    let e = Env::default();
    let f = setup(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    f.client.transfer(&f.holder, &alice, &200_000);
    f.client.transfer(&f.holder, &bob, &100_000);

    advance(&e, INTERVAL);
    f.client.accrue(&f.issuer);

    let paid = bond_events(&e, &f, "interest_paid");
    assert_eq!(paid.len(), 3);
    let expected = [(f.holder.clone(), 35_000), (alice, 10_000), (bob, 5_000)];
    for ((topics, data), (holder, amount)) in paid.iter().zip(expected.iter()) {
        assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), *holder);
        assert_eq!(i128::from_val(&e, data), *amount);
    }
}

#[test]
fn test_accrued_summarizes_pass() {
    let e = Env::default();
    let f = setup(&e);
    f.client.transfer(&f.holder, &Address::generate(&e), &10);

    advance(&e, 2 * INTERVAL + 5);
    f.client.accrue(&f.issuer);

    let accrued = bond_events(&e, &f, "accrued");
    assert_eq!(accrued.len(), 1);
    let (cycles, holders, cursor) = <(u64, u32, u64)>::from_val(&e, &accrued[0].1);
    assert_eq!(cycles, 2);
    assert_eq!(holders, 2);
    assert_eq!(cursor, ISSUED_AT + 2 * INTERVAL + 5);
}

#[test]
fn test_claim_emits_interest_claimed() {
    let e = Env::default();
    let f = setup(&e);
    fund_reserve(&e, &f, 1_000_000);
    advance(&e, INTERVAL);
    f.client.accrue(&f.issuer);

    f.client.claim(&f.holder);

    let claimed = bond_events(&e, &f, "interest_claimed");
    assert_eq!(claimed.len(), 1);
    let (topics, data) = &claimed[0];
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), f.holder);
    assert_eq!(i128::from_val(&e, data), SUPPLY / 20);
}

#[test]
fn test_auto_claim_emits_interest_claimed_during_accrual() {
    let e = Env::default();
    let f = setup(&e);
    fund_reserve(&e, &f, 1_000_000);
    f.client.set_auto_claim(&f.holder, &true);

    advance(&e, 2 * INTERVAL);
    f.client.accrue(&f.issuer);

    let paid = bond_events(&e, &f, "interest_paid");
    let claimed = bond_events(&e, &f, "interest_claimed");
    assert_eq!(paid.len(), 1);
    assert_eq!(claimed.len(), 1);
    assert_eq!(i128::from_val(&e, &paid[0].1), SUPPLY / 20);
    assert_eq!(i128::from_val(&e, &claimed[0].1), 2 * (SUPPLY / 20));
}

#[test]
fn test_redeem_emits_units_and_payout() {
    let e = Env::default();
    let f = setup(&e);
    fund_reserve(&e, &f, SUPPLY * PAR);

    set_time(&e, MATURITY);
    f.client.redeem(&f.holder, &250);

    let redeemed = bond_events(&e, &f, "redeemed");
    assert_eq!(redeemed.len(), 1);
    let (topics, data) = &redeemed[0];
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), f.holder);
    assert_eq!(<(i128, i128)>::from_val(&e, data), (250, 250 * PAR));
}

#[test]
fn test_transfer_event_names_both_parties() {
    let e = Env::default();
    let f = setup(&e);
    let buyer = Address::generate(&e);

    f.client.transfer(&f.holder, &buyer, &42);

    let transfers = bond_events(&e, &f, "transfer");
    assert_eq!(transfers.len(), 1);
    let (topics, data) = &transfers[0];
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), f.holder);
    assert_eq!(Address::from_val(&e, &topics.get(2).unwrap()), buyer);
    assert_eq!(i128::from_val(&e, data), 42);
}

#[test]
fn test_failed_accrual_emits_nothing() {
    let e = Env::default();
    let f = setup(&e);

    advance(&e, INTERVAL - 1);
    let _ = f.client.try_accrue(&f.issuer);

    assert!(bond_events(&e, &f, "interest_paid").is_empty());
    assert!(bond_events(&e, &f, "accrued").is_empty());
}
