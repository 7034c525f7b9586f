//! Storage-tier helpers.
//!
//! `persistent()` entries are bumped on every read and write so that active
//! holders never lose their records to rent expiry; `instance()` is bumped
//! once per state-changing entry point.

use crate::types::{DataKey, BUMP_TARGET, BUMP_THRESHOLD};
use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

/// Read a `persistent()` entry and bump its TTL if present.
pub fn load<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: Debug,
{
    let storage = e.storage().persistent();
    let value = storage.get(key);
    if value.is_some() {
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    value
}

/// Write a `persistent()` entry and bump its TTL.
pub fn save<V: IntoVal<Env, Val>>(e: &Env, key: &DataKey, value: &V) {
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn load_instance<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: Debug,
{
    e.storage().instance().get(key)
}

pub fn save_instance<V: IntoVal<Env, Val>>(e: &Env, key: &DataKey, value: &V) {
    e.storage().instance().set(key, value);
}
