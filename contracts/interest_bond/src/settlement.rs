//! Interest claims, principal redemption and the payment-asset reserve.
//!
//! All payouts follow checks-effects-interactions: local state is final
//! before the payment token is called, and the call is made with
//! `try_transfer` so a rejected transfer comes back as
//! `SettlementFailed` instead of trapping. Returning that error reverts the
//! whole invocation, restoring the zeroed claimable balance or burned units.
//! Callers run these paths inside `guard::with_guard`.

use crate::errors::BondError;
use crate::types::{BondTerms, DataKey};
use crate::{events, gate, ledger, math, storage};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

// ─── Per-holder state ──────────────────────────────────────────────────────

pub fn claimable(e: &Env, holder: &Address) -> i128 {
    storage::load(e, &DataKey::Claimable(holder.clone())).unwrap_or(0)
}

pub fn set_claimable(e: &Env, holder: &Address, amount: i128) {
    storage::save(e, &DataKey::Claimable(holder.clone()), &amount);
}

pub fn auto_claim(e: &Env, holder: &Address) -> bool {
    storage::load(e, &DataKey::AutoClaim(holder.clone())).unwrap_or(false)
}

pub fn set_auto_claim(e: &Env, holder: &Address, enabled: bool) {
    storage::save(e, &DataKey::AutoClaim(holder.clone()), &enabled);
    events::emit_auto_claim_set(e, holder, enabled);
}

// ─── Payment asset ─────────────────────────────────────────────────────────

fn payment_token<'a>(e: &'a Env, terms: &BondTerms) -> TokenClient<'a> {
    TokenClient::new(e, &terms.payment_asset)
}

/// Transfer `amount` of the payment asset from the contract to `to`.
fn pay(e: &Env, terms: &BondTerms, to: &Address, amount: i128) -> Result<(), BondError> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    match payment_token(e, terms).try_transfer(&contract, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(BondError::SettlementFailed),
    }
}

/// Payment asset currently held by the contract.
pub fn reserve(e: &Env, terms: &BondTerms) -> i128 {
    payment_token(e, terms).balance(&e.current_contract_address())
}

/// Pull `amount` of the payment asset from `from` into the reserve.
pub fn fund(e: &Env, terms: &BondTerms, from: &Address, amount: i128) -> Result<(), BondError> {
    if amount <= 0 {
        return Err(BondError::InvalidAmount);
    }
    let contract = e.current_contract_address();
    match payment_token(e, terms).try_transfer(from, &contract, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(BondError::SettlementFailed),
    }
    events::emit_funded(e, from, amount);
    Ok(())
}

// ─── Claim ─────────────────────────────────────────────────────────────────

/// Pay out the holder's entire claimable balance.
pub fn settle_interest(e: &Env, terms: &BondTerms, holder: &Address) -> Result<i128, BondError> {
    let amount = claimable(e, holder);
    if amount <= 0 {
        return Err(BondError::NothingToClaim);
    }

    // CEI: zero before transfer.
    set_claimable(e, holder, 0);
    pay(e, terms, holder, amount)?;

    events::emit_interest_claimed(e, holder, amount);
    Ok(amount)
}

// ─── Redemption ────────────────────────────────────────────────────────────

/// Burn `units` from `holder` and pay `units * par_value`.
pub fn redeem(
    e: &Env,
    terms: &BondTerms,
    holder: &Address,
    units: i128,
) -> Result<i128, BondError> {
    gate::require_mature(e, terms)?;
    if units <= 0 {
        return Err(BondError::InvalidAmount);
    }
    if units > ledger::balance(e, holder) {
        return Err(BondError::InsufficientBalance);
    }
    let payout = math::mul(units, terms.par_value)?;

    // CEI: burn before transfer.
    ledger::burn(e, holder, units)?;
    pay(e, terms, holder, payout)?;

    events::emit_redeemed(e, holder, units, payout);
    Ok(payout)
}
