use crate::types::Capability;
use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the bond is issued.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - Admin
/// * `Address` - Initial issuer
/// * `i128` - Units minted to the initial holder
pub fn emit_initialized(e: &Env, admin: &Address, issuer: &Address, supply: i128) {
    let topics = (Symbol::new(e, "initialized"),);
    e.events()
        .publish(topics, (admin.clone(), issuer.clone(), supply));
}

/// Emitted for every registered holder on each accrual pass.
///
/// # Topics
/// * `Symbol` - "interest_paid"
/// * `Address` - The holder
///
/// # Data
/// * `i128` - Interest for a single cycle at the holder's current balance
///   (not multiplied by the number of cycles credited)
pub fn emit_interest_paid(e: &Env, holder: &Address, per_cycle: i128) {
    let topics = (Symbol::new(e, "interest_paid"), holder.clone());
    e.events().publish(topics, per_cycle);
}

/// Emitted once per accrual pass, after every holder was visited.
///
/// # Topics
/// * `Symbol` - "accrued"
///
/// # Data
/// * `u64` - Cycles credited
/// * `u32` - Holders visited
/// * `u64` - New accrual cursor
pub fn emit_accrued(e: &Env, cycles: u64, holders: u32, cursor: u64) {
    let topics = (Symbol::new(e, "accrued"),);
    e.events().publish(topics, (cycles, holders, cursor));
}

/// Emitted on every interest settlement, manual or automatic.
///
/// # Topics
/// * `Symbol` - "interest_claimed"
/// * `Address` - The holder paid
///
/// # Data
/// * `i128` - Payment-asset amount transferred
pub fn emit_interest_claimed(e: &Env, holder: &Address, amount: i128) {
    let topics = (Symbol::new(e, "interest_claimed"), holder.clone());
    e.events().publish(topics, amount);
}

/// Emitted when bond units are redeemed for principal.
///
/// # Topics
/// * `Symbol` - "redeemed"
/// * `Address` - The holder
///
/// # Data
/// * `i128` - Units burned
/// * `i128` - Payment-asset amount transferred
pub fn emit_redeemed(e: &Env, holder: &Address, units: i128, payout: i128) {
    let topics = (Symbol::new(e, "redeemed"), holder.clone());
    e.events().publish(topics, (units, payout));
}

pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "transfer"), from.clone(), to.clone());
    e.events().publish(topics, amount);
}

pub fn emit_approve(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let topics = (Symbol::new(e, "approve"), from.clone(), spender.clone());
    e.events().publish(topics, (amount, expiration_ledger));
}

pub fn emit_auto_claim_set(e: &Env, holder: &Address, enabled: bool) {
    let topics = (Symbol::new(e, "auto_claim_set"), holder.clone());
    e.events().publish(topics, enabled);
}

pub fn emit_role_granted(e: &Env, principal: &Address, capability: Capability) {
    let topics = (Symbol::new(e, "role_granted"), principal.clone());
    e.events().publish(topics, capability);
}

pub fn emit_role_revoked(e: &Env, principal: &Address, capability: Capability) {
    let topics = (Symbol::new(e, "role_revoked"), principal.clone());
    e.events().publish(topics, capability);
}

pub fn emit_admin_changed(e: &Env, previous: &Address, next: &Address) {
    let topics = (Symbol::new(e, "admin_changed"),);
    e.events().publish(topics, (previous.clone(), next.clone()));
}

/// Emitted when payment asset is deposited into the settlement reserve.
///
/// # Topics
/// * `Symbol` - "funded"
/// * `Address` - The depositor
///
/// # Data
/// * `i128` - Amount deposited
pub fn emit_funded(e: &Env, from: &Address, amount: i128) {
    let topics = (Symbol::new(e, "funded"), from.clone());
    e.events().publish(topics, amount);
}
