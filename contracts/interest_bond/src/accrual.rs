//! Interest accrual engine.
//!
//! One pass credits every registered holder with
//! `floor(balance * rate / RATE_SCALE) * cycles`, where `cycles` counts the
//! whole intervals elapsed since the cursor. Late triggers therefore make up
//! for missed cycles instead of dropping them. The cursor moves to `now`
//! before any holder is visited.
//!
//! Holders with auto-claim enabled are settled in the same pass for their
//! whole claimable balance, so they always leave an accrual at zero.

use crate::errors::BondError;
use crate::types::BondTerms;
use crate::{events, gate, ledger, math, registry, settlement};
use soroban_sdk::{Address, Env};

/// Interest owed to `balance` units for a single cycle.
pub fn per_cycle_interest(terms: &BondTerms, balance: i128) -> Result<i128, BondError> {
    math::apply_rate(balance, terms.interest_rate)
}

fn credit_holder(
    e: &Env,
    terms: &BondTerms,
    holder: &Address,
    cycles: u64,
) -> Result<(), BondError> {
    let per_cycle = per_cycle_interest(terms, ledger::balance(e, holder))?;
    let credited = math::mul(per_cycle, cycles as i128)?;

    let claimable = math::add(settlement::claimable(e, holder), credited)?;
    if credited > 0 {
        settlement::set_claimable(e, holder, claimable);
    }
    events::emit_interest_paid(e, holder, per_cycle);

    if claimable > 0 && settlement::auto_claim(e, holder) {
        settlement::settle_interest(e, terms, holder)?;
    }
    Ok(())
}

/// Run one accrual pass. Returns the number of cycles credited.
pub fn accrue(e: &Env, terms: &BondTerms) -> Result<u64, BondError> {
    let cycles = gate::require_accrual_due(e, terms)?;
    let now = e.ledger().timestamp();
    gate::set_last_accrual(e, now);

    let count = registry::count(e);
    for index in 1..=count {
        let holder = registry::at(e, index).ok_or(BondError::HolderNotFound)?;
        credit_holder(e, terms, &holder, cycles)?;
    }

    events::emit_accrued(e, cycles, count, now);
    Ok(cycles)
}
