//! Holder registry: an append-only, insertion-ordered set of every address
//! that has ever held a positive bond balance.
//!
//! Holders are addressed by stable one-based indices (`HolderAt(1..=count)`);
//! index 0 means "not registered". Entries are never removed, so a holder who
//! divests completely keeps its slot and is still visited by every accrual
//! pass. Accrual cost therefore grows with the number of holders ever seen,
//! not the number currently holding units.

use crate::storage;
use crate::types::DataKey;
use soroban_sdk::{Address, Env, Vec};

pub fn count(e: &Env) -> u32 {
    storage::load_instance(e, &DataKey::HolderCount).unwrap_or(0)
}

/// One-based index of `holder`, or 0 when it has never been registered.
pub fn index_of(e: &Env, holder: &Address) -> u32 {
    storage::load(e, &DataKey::HolderIndex(holder.clone())).unwrap_or(0)
}

pub fn at(e: &Env, index: u32) -> Option<Address> {
    if index == 0 || index > count(e) {
        return None;
    }
    storage::load(e, &DataKey::HolderAt(index))
}

/// Register `holder` if unseen. Returns its index either way.
pub fn register(e: &Env, holder: &Address) -> u32 {
    let existing = index_of(e, holder);
    if existing != 0 {
        return existing;
    }
    let index = count(e) + 1;
    storage::save(e, &DataKey::HolderAt(index), holder);
    storage::save(e, &DataKey::HolderIndex(holder.clone()), &index);
    storage::save_instance(e, &DataKey::HolderCount, &index);
    index
}

/// All registered holders in registration order.
pub fn all(e: &Env) -> Vec<Address> {
    let mut holders = Vec::new(e);
    for index in 1..=count(e) {
        if let Some(holder) = at(e, index) {
            holders.push_back(holder);
        }
    }
    holders
}
