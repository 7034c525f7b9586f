//! Capability-based authorization.
//!
//! Entry points never inspect role storage directly; they ask an
//! `AuthorizationPolicy` whether a principal holds a capability. `RoleStore`
//! is the storage-backed policy used by the contract, administered by the
//! single stored admin.

use crate::errors::BondError;
use crate::storage;
use crate::types::{Capability, DataKey};
use soroban_sdk::{Address, Env};

pub trait AuthorizationPolicy {
    fn authorize(&self, e: &Env, capability: Capability, principal: &Address) -> bool;
}

/// Capabilities recorded as `Role(capability, address) -> true`.
pub struct RoleStore;

impl AuthorizationPolicy for RoleStore {
    fn authorize(&self, e: &Env, capability: Capability, principal: &Address) -> bool {
        storage::load(e, &DataKey::Role(capability, principal.clone())).unwrap_or(false)
    }
}

impl RoleStore {
    /// Returns `true` if the capability was newly granted.
    pub fn grant(&self, e: &Env, capability: Capability, principal: &Address) -> bool {
        if self.authorize(e, capability, principal) {
            return false;
        }
        storage::save(e, &DataKey::Role(capability, principal.clone()), &true);
        true
    }

    /// Returns `true` if the capability was held and is now removed.
    pub fn revoke(&self, e: &Env, capability: Capability, principal: &Address) -> bool {
        if !self.authorize(e, capability, principal) {
            return false;
        }
        e.storage()
            .persistent()
            .remove(&DataKey::Role(capability, principal.clone()));
        true
    }
}

pub fn admin(e: &Env) -> Result<Address, BondError> {
    storage::load_instance(e, &DataKey::Admin).ok_or(BondError::NotInitialized)
}

pub fn set_admin(e: &Env, admin: &Address) {
    storage::save_instance(e, &DataKey::Admin, admin);
}

pub fn require_admin(e: &Env, caller: &Address) -> Result<(), BondError> {
    caller.require_auth();
    if admin(e)? != *caller {
        return Err(BondError::Unauthorized);
    }
    Ok(())
}

/// Authenticate `caller` and check it holds `capability` under `policy`.
pub fn require_capability<P: AuthorizationPolicy>(
    e: &Env,
    policy: &P,
    capability: Capability,
    caller: &Address,
) -> Result<(), BondError> {
    caller.require_auth();
    if !policy.authorize(e, capability, caller) {
        return Err(BondError::Unauthorized);
    }
    Ok(())
}
