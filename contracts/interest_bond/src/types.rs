use soroban_sdk::{contracttype, Address, String};

/// Fixed-point scale of `interest_rate`: `1e18` represents 100 % per cycle.
pub const RATE_SCALE: i128 = 1_000_000_000_000_000_000;

/// Minimum TTL (in ledgers) before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

// ─── Instrument terms ──────────────────────────────────────────────────────

/// Caller-supplied terms passed to `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TermsInput {
    /// Payment-asset units repaid per bond unit at maturity.
    pub par_value: i128,
    /// Interest per cycle, scaled by `RATE_SCALE`.
    pub interest_rate: i128,
    /// Ledger timestamp from which redemption is allowed.
    pub maturity: u64,
    /// Length of one accrual cycle in seconds.
    pub interval: u64,
    /// Token contract used to settle interest and principal.
    pub payment_asset: Address,
    /// Display precision of the bond unit.
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

/// Immutable terms recorded at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondTerms {
    pub par_value: i128,
    pub interest_rate: i128,
    pub maturity: u64,
    pub interval: u64,
    pub payment_asset: Address,
    pub decimals: u32,
    /// Ledger timestamp at the moment the bond was issued.
    pub issued_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
}

// ─── Ledger ────────────────────────────────────────────────────────────────

/// Delegated-spend allowance; reads as zero once `expiration_ledger` has passed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ─── Access ────────────────────────────────────────────────────────────────

/// Privileged capabilities checked by the authorization policy.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    /// May trigger interest accrual.
    Issuer,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// `instance()` holds the bounded globals; every per-address or per-index
/// entry lives in `persistent()` with its own TTL.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin allowed to grant and revoke capabilities.
    Admin,
    /// `BondTerms`.
    Terms,
    /// `TokenMetadata`.
    Metadata,
    TotalMinted,
    TotalBurned,
    /// Accrual cursor: timestamp of the last successful accrual.
    LastAccrual,
    /// Reentrancy lock around settlement.
    Locked,
    /// Number of registered holders (highest one-based index).
    HolderCount,
    Role(Capability, Address),
    Balance(Address),
    Allowance(Address, Address),
    /// One-based registry index of a holder.
    HolderIndex(Address),
    /// Holder at a one-based registry index.
    HolderAt(u32),
    Claimable(Address),
    AutoClaim(Address),
}
