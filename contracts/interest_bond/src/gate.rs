//! Time predicates: maturity and the accrual interval.

use crate::errors::BondError;
use crate::storage;
use crate::types::{BondTerms, DataKey};
use soroban_sdk::Env;

pub fn is_mature(e: &Env, terms: &BondTerms) -> bool {
    e.ledger().timestamp() >= terms.maturity
}

pub fn require_mature(e: &Env, terms: &BondTerms) -> Result<(), BondError> {
    if !is_mature(e, terms) {
        return Err(BondError::NotMature);
    }
    Ok(())
}

/// Seconds until maturity, 0 once mature.
pub fn time_to_maturity(e: &Env, terms: &BondTerms) -> u64 {
    terms.maturity.saturating_sub(e.ledger().timestamp())
}

pub fn last_accrual(e: &Env) -> u64 {
    storage::load_instance(e, &DataKey::LastAccrual).unwrap_or(0)
}

pub fn set_last_accrual(e: &Env, timestamp: u64) {
    storage::save_instance(e, &DataKey::LastAccrual, &timestamp);
}

pub fn next_accrual_at(e: &Env, terms: &BondTerms) -> u64 {
    last_accrual(e).saturating_add(terms.interval)
}

/// Whole intervals elapsed since the cursor.
pub fn elapsed_cycles(e: &Env, terms: &BondTerms) -> u64 {
    e.ledger().timestamp().saturating_sub(last_accrual(e)) / terms.interval
}

/// Cycles owed right now; `TooEarly` unless at least one full interval elapsed.
pub fn require_accrual_due(e: &Env, terms: &BondTerms) -> Result<u64, BondError> {
    match elapsed_cycles(e, terms) {
        0 => Err(BondError::TooEarly),
        cycles => Ok(cycles),
    }
}
