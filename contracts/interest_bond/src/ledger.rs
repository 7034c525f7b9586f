//! Bond-unit balance ledger.
//!
//! Supply only changes through `mint` (issuance) and `burn` (redemption);
//! `total_minted - total_burned` always equals the sum of all balances.
//! Every credit that leaves the recipient with a positive balance registers
//! it in the holder registry.

use crate::errors::BondError;
use crate::types::{AllowanceValue, DataKey};
use crate::{math, registry, storage};
use soroban_sdk::{Address, Env};

pub fn balance(e: &Env, id: &Address) -> i128 {
    storage::load(e, &DataKey::Balance(id.clone())).unwrap_or(0)
}

pub fn total_minted(e: &Env) -> i128 {
    storage::load_instance(e, &DataKey::TotalMinted).unwrap_or(0)
}

pub fn total_burned(e: &Env) -> i128 {
    storage::load_instance(e, &DataKey::TotalBurned).unwrap_or(0)
}

pub fn total_supply(e: &Env) -> i128 {
    total_minted(e) - total_burned(e)
}

fn require_non_negative(amount: i128) -> Result<(), BondError> {
    if amount < 0 {
        return Err(BondError::InvalidAmount);
    }
    Ok(())
}

fn credit(e: &Env, to: &Address, amount: i128) -> Result<(), BondError> {
    let updated = math::add(balance(e, to), amount)?;
    storage::save(e, &DataKey::Balance(to.clone()), &updated);
    if updated > 0 {
        registry::register(e, to);
    }
    Ok(())
}

fn debit(e: &Env, from: &Address, amount: i128) -> Result<(), BondError> {
    let current = balance(e, from);
    if amount > current {
        return Err(BondError::InsufficientBalance);
    }
    let updated = math::sub(current, amount)?;
    storage::save(e, &DataKey::Balance(from.clone()), &updated);
    Ok(())
}

pub fn mint(e: &Env, to: &Address, amount: i128) -> Result<(), BondError> {
    require_non_negative(amount)?;
    let minted = math::add(total_minted(e), amount)?;
    credit(e, to, amount)?;
    storage::save_instance(e, &DataKey::TotalMinted, &minted);
    Ok(())
}

pub fn burn(e: &Env, from: &Address, amount: i128) -> Result<(), BondError> {
    require_non_negative(amount)?;
    debit(e, from, amount)?;
    let burned = math::add(total_burned(e), amount)?;
    storage::save_instance(e, &DataKey::TotalBurned, &burned);
    Ok(())
}

/// Move `amount` units from `from` to `to`. Self-transfers are a no-op on
/// balances but still register the recipient.
pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), BondError> {
    require_non_negative(amount)?;
    debit(e, from, amount)?;
    credit(e, to, amount)
}

// ─── Allowances ────────────────────────────────────────────────────────────

pub fn allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match storage::load::<AllowanceValue>(e, &key) {
        Some(value) if value.expiration_ledger >= e.ledger().sequence() => value.amount,
        _ => 0,
    }
}

pub fn approve(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), BondError> {
    require_non_negative(amount)?;
    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        return Err(BondError::InvalidAmount);
    }
    let value = AllowanceValue {
        amount,
        expiration_ledger,
    };
    storage::save(e, &DataKey::Allowance(from.clone(), spender.clone()), &value);
    Ok(())
}

pub fn spend_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), BondError> {
    require_non_negative(amount)?;
    let key = DataKey::Allowance(from.clone(), spender.clone());
    let current = match storage::load::<AllowanceValue>(e, &key) {
        Some(value) if value.expiration_ledger >= e.ledger().sequence() => value,
        _ => {
            if amount == 0 {
                return Ok(());
            }
            return Err(BondError::InsufficientAllowance);
        }
    };
    if amount > current.amount {
        return Err(BondError::InsufficientAllowance);
    }
    let remaining = AllowanceValue {
        amount: current.amount - amount,
        expiration_ledger: current.expiration_ledger,
    };
    storage::save(e, &key, &remaining);
    Ok(())
}
