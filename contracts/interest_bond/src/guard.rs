//! Reentrancy lock held across every payment-asset call.
//!
//! The lock lives in instance storage; a failing invocation is reverted by
//! the host, which also drops a lock taken inside it.

use crate::errors::BondError;
use crate::storage;
use crate::types::DataKey;
use soroban_sdk::Env;

pub fn is_locked(e: &Env) -> bool {
    storage::load_instance(e, &DataKey::Locked).unwrap_or(false)
}

pub fn enter(e: &Env) -> Result<(), BondError> {
    if is_locked(e) {
        return Err(BondError::ReentrancyDetected);
    }
    storage::save_instance(e, &DataKey::Locked, &true);
    Ok(())
}

pub fn exit(e: &Env) {
    storage::save_instance(e, &DataKey::Locked, &false);
}

pub fn with_guard<T, F>(e: &Env, f: F) -> Result<T, BondError>
where
    F: FnOnce() -> Result<T, BondError>,
{
    enter(e)?;
    let result = f();
    exit(e);
    result
}
