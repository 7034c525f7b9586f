//! Interest Bond Contract
//!
//! A fixed-maturity bond issued as a fungible unit ledger. The issuer
//! periodically triggers interest accrual; holders claim credited interest
//! (or opt into automatic payout) and redeem units at par once the bond has
//! matured. Interest and principal are settled in an external payment asset.
//!
//! ## Key design decisions
//!
//! - **Fixed supply**: the whole supply is minted to one holder at
//!   initialization; units only leave circulation through redemption.
//! - **Append-only holder registry**: every address that ever held units is
//!   visited by each accrual pass, including holders that have since sold.
//! - **Missed cycles are made up**: one late accrual credits every whole
//!   interval elapsed since the previous one.
//! - **Checks-Effects-Interactions**: claimable interest is zeroed and units
//!   are burned *before* the payment token is called, inside a reentrancy lock.
//! - **Typed errors**: every entry point returns `Result<_, BondError>`; the
//!   host reverts all writes of a failed invocation.
//! - **Capability checks**: accrual requires `Capability::Issuer` as reported
//!   by the `AuthorizationPolicy` in `access`.

#![no_std]

mod accrual;
pub mod access;
mod errors;
mod events;
mod gate;
mod guard;
mod ledger;
mod math;
mod registry;
mod settlement;
mod storage;
mod types;

pub use errors::{BondError, ErrorCategory};
pub use types::{BondTerms, Capability, TermsInput, TokenMetadata, RATE_SCALE};

use access::{AuthorizationPolicy, RoleStore};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use types::DataKey;


#[cfg(test)]
mod test_events;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_terms(e: &Env) -> Result<BondTerms, BondError> {
    storage::load_instance(e, &DataKey::Terms).ok_or(BondError::NotInitialized)
}

fn load_metadata(e: &Env) -> Result<TokenMetadata, BondError> {
    storage::load_instance(e, &DataKey::Metadata).ok_or(BondError::NotInitialized)
}

fn validate_terms(e: &Env, terms: &TermsInput, supply: i128) -> Result<(), BondError> {
    if terms.par_value <= 0
        || terms.interest_rate <= 0
        || terms.interval == 0
        || terms.maturity <= e.ledger().timestamp()
        || supply <= 0
    {
        return Err(BondError::InvalidTerms);
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct InterestBond;

#[contractimpl]
impl InterestBond {
    // ── Issuance ───────────────────────────────────────────────────────────

    /// One-time issuance. Records `terms`, grants `Capability::Issuer` to
    /// `issuer` and mints the full `supply` to `initial_holder`.
    ///
    /// Fails with `InvalidTerms` unless par value, rate, interval and supply
    /// are positive and maturity lies in the future.
    pub fn initialize(
        e: Env,
        admin: Address,
        issuer: Address,
        initial_holder: Address,
        supply: i128,
        terms: TermsInput,
    ) -> Result<BondTerms, BondError> {
        if e.storage().instance().has(&DataKey::Terms) {
            return Err(BondError::AlreadyInitialized);
        }
        admin.require_auth();
        validate_terms(&e, &terms, supply)?;

        let now = e.ledger().timestamp();
        let recorded = BondTerms {
            par_value: terms.par_value,
            interest_rate: terms.interest_rate,
            maturity: terms.maturity,
            interval: terms.interval,
            payment_asset: terms.payment_asset,
            decimals: terms.decimals,
            issued_at: now,
        };
        let metadata = TokenMetadata {
            name: terms.name,
            symbol: terms.symbol,
        };

        storage::save_instance(&e, &DataKey::Terms, &recorded);
        storage::save_instance(&e, &DataKey::Metadata, &metadata);
        access::set_admin(&e, &admin);
        gate::set_last_accrual(&e, now);
        RoleStore.grant(&e, Capability::Issuer, &issuer);
        ledger::mint(&e, &initial_holder, supply)?;
        storage::bump_instance(&e);

        events::emit_initialized(&e, &admin, &issuer, supply);
        events::emit_role_granted(&e, &issuer, Capability::Issuer);
        Ok(recorded)
    }

    // ── Accrual ────────────────────────────────────────────────────────────

    /// Credit interest for every whole interval elapsed since the last
    /// accrual. Only callable by a holder of `Capability::Issuer`.
    ///
    /// Returns the number of cycles credited. Fails with `TooEarly` if a
    /// full interval has not elapsed.
    pub fn accrue(e: Env, caller: Address) -> Result<u64, BondError> {
        let terms = load_terms(&e)?;
        access::require_capability(&e, &RoleStore, Capability::Issuer, &caller)?;
        storage::bump_instance(&e);
        guard::with_guard(&e, || accrual::accrue(&e, &terms))
    }

    // ── Settlement ─────────────────────────────────────────────────────────

    /// Withdraw all claimable interest to `holder`. Returns the amount paid.
    pub fn claim(e: Env, holder: Address) -> Result<i128, BondError> {
        let terms = load_terms(&e)?;
        holder.require_auth();
        storage::bump_instance(&e);
        guard::with_guard(&e, || settlement::settle_interest(&e, &terms, &holder))
    }

    /// Redeem `units` for `units * par_value` of the payment asset.
    ///
    /// Fails with `NotMature` before maturity and `InsufficientBalance` if
    /// `holder` owns fewer than `units`. Returns the amount paid.
    pub fn redeem(e: Env, holder: Address, units: i128) -> Result<i128, BondError> {
        let terms = load_terms(&e)?;
        holder.require_auth();
        storage::bump_instance(&e);
        guard::with_guard(&e, || settlement::redeem(&e, &terms, &holder, units))
    }

    /// Opt in or out of automatic interest payout during accrual.
    pub fn set_auto_claim(e: Env, holder: Address, enabled: bool) -> Result<(), BondError> {
        load_terms(&e)?;
        holder.require_auth();
        storage::bump_instance(&e);
        settlement::set_auto_claim(&e, &holder, enabled);
        Ok(())
    }

    /// Deposit payment asset into the contract so interest and principal
    /// can be settled.
    pub fn fund(e: Env, from: Address, amount: i128) -> Result<(), BondError> {
        let terms = load_terms(&e)?;
        from.require_auth();
        storage::bump_instance(&e);
        settlement::fund(&e, &terms, &from, amount)
    }

    pub fn claimable(e: Env, holder: Address) -> i128 {
        settlement::claimable(&e, &holder)
    }

    pub fn auto_claim(e: Env, holder: Address) -> bool {
        settlement::auto_claim(&e, &holder)
    }

    /// Payment asset held by the contract.
    pub fn payment_reserve(e: Env) -> Result<i128, BondError> {
        let terms = load_terms(&e)?;
        Ok(settlement::reserve(&e, &terms))
    }

    /// `true` while a settlement is in flight.
    pub fn is_locked(e: Env) -> bool {
        guard::is_locked(&e)
    }

    // ── Bond-unit ledger ───────────────────────────────────────────────────

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), BondError> {
        load_terms(&e)?;
        from.require_auth();
        storage::bump_instance(&e);
        ledger::transfer(&e, &from, &to, amount)?;
        events::emit_transfer(&e, &from, &to, amount);
        Ok(())
    }

    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), BondError> {
        load_terms(&e)?;
        from.require_auth();
        storage::bump_instance(&e);
        ledger::approve(&e, &from, &spender, amount, expiration_ledger)?;
        events::emit_approve(&e, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    /// Move units on behalf of `from`, consuming `spender`'s allowance.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), BondError> {
        load_terms(&e)?;
        spender.require_auth();
        storage::bump_instance(&e);
        ledger::spend_allowance(&e, &from, &spender, amount)?;
        ledger::transfer(&e, &from, &to, amount)?;
        events::emit_transfer(&e, &from, &to, amount);
        Ok(())
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        ledger::balance(&e, &id)
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        ledger::allowance(&e, &from, &spender)
    }

    pub fn total_supply(e: Env) -> i128 {
        ledger::total_supply(&e)
    }

    pub fn total_minted(e: Env) -> i128 {
        ledger::total_minted(&e)
    }

    pub fn total_burned(e: Env) -> i128 {
        ledger::total_burned(&e)
    }

    pub fn name(e: Env) -> Result<String, BondError> {
        Ok(load_metadata(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, BondError> {
        Ok(load_metadata(&e)?.symbol)
    }

    pub fn decimals(e: Env) -> Result<u32, BondError> {
        Ok(load_terms(&e)?.decimals)
    }

    // ── Holder registry ────────────────────────────────────────────────────

    pub fn holder_count(e: Env) -> u32 {
        registry::count(&e)
    }

    /// Holder at one-based `index`.
    pub fn holder_at(e: Env, index: u32) -> Result<Address, BondError> {
        registry::at(&e, index).ok_or(BondError::HolderNotFound)
    }

    /// One-based registry index of `holder`; 0 if never registered.
    pub fn holder_index(e: Env, holder: Address) -> u32 {
        registry::index_of(&e, &holder)
    }

    pub fn holders(e: Env) -> Vec<Address> {
        registry::all(&e)
    }

    // ── Access control ─────────────────────────────────────────────────────

    pub fn admin(e: Env) -> Result<Address, BondError> {
        access::admin(&e)
    }

    pub fn transfer_admin(e: Env, admin: Address, new_admin: Address) -> Result<(), BondError> {
        access::require_admin(&e, &admin)?;
        storage::bump_instance(&e);
        access::set_admin(&e, &new_admin);
        events::emit_admin_changed(&e, &admin, &new_admin);
        Ok(())
    }

    pub fn grant_role(
        e: Env,
        admin: Address,
        capability: Capability,
        principal: Address,
    ) -> Result<(), BondError> {
        access::require_admin(&e, &admin)?;
        storage::bump_instance(&e);
        if RoleStore.grant(&e, capability, &principal) {
            events::emit_role_granted(&e, &principal, capability);
        }
        Ok(())
    }

    pub fn revoke_role(
        e: Env,
        admin: Address,
        capability: Capability,
        principal: Address,
    ) -> Result<(), BondError> {
        access::require_admin(&e, &admin)?;
        storage::bump_instance(&e);
        if RoleStore.revoke(&e, capability, &principal) {
            events::emit_role_revoked(&e, &principal, capability);
        }
        Ok(())
    }

    pub fn has_role(e: Env, capability: Capability, principal: Address) -> bool {
        RoleStore.authorize(&e, capability, &principal)
    }

    // ── Schedule ───────────────────────────────────────────────────────────

    /// `true` once the ledger timestamp has reached maturity.
    pub fn is_mature(e: Env) -> Result<bool, BondError> {
        Ok(gate::is_mature(&e, &load_terms(&e)?))
    }

    /// Seconds remaining until maturity; 0 once matured.
    pub fn time_to_maturity(e: Env) -> Result<u64, BondError> {
        Ok(gate::time_to_maturity(&e, &load_terms(&e)?))
    }

    /// Earliest timestamp at which `accrue` succeeds.
    pub fn next_accrual_at(e: Env) -> Result<u64, BondError> {
        Ok(gate::next_accrual_at(&e, &load_terms(&e)?))
    }

    /// Cycles `accrue` would credit right now (0 if too early).
    pub fn pending_cycles(e: Env) -> Result<u64, BondError> {
        Ok(gate::elapsed_cycles(&e, &load_terms(&e)?))
    }

    /// Interest one cycle would credit to `holder` at its current balance.
    pub fn preview_interest(e: Env, holder: Address) -> Result<i128, BondError> {
        let terms = load_terms(&e)?;
        accrual::per_cycle_interest(&terms, ledger::balance(&e, &holder))
    }

    // ── Terms ──────────────────────────────────────────────────────────────

    pub fn terms(e: Env) -> Result<BondTerms, BondError> {
        load_terms(&e)
    }

    pub fn par_value(e: Env) -> Result<i128, BondError> {
        Ok(load_terms(&e)?.par_value)
    }

    pub fn interest_rate(e: Env) -> Result<i128, BondError> {
        Ok(load_terms(&e)?.interest_rate)
    }

    pub fn maturity(e: Env) -> Result<u64, BondError> {
        Ok(load_terms(&e)?.maturity)
    }

    pub fn interval(e: Env) -> Result<u64, BondError> {
        Ok(load_terms(&e)?.interval)
    }

    pub fn payment_asset(e: Env) -> Result<Address, BondError> {
        Ok(load_terms(&e)?.payment_asset)
    }

    pub fn last_accrual(e: Env) -> Result<u64, BondError> {
        load_terms(&e)?;
        Ok(gate::last_accrual(&e))
    }
}
