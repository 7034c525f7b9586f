use soroban_sdk::contracterror;

/// Groups errors by domain for monitoring and off-chain handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Setup and instrument-terms errors (codes 1-99).
    Initialization,
    /// Caller permission errors (codes 100-199).
    Authorization,
    /// Accrual schedule and maturity errors (codes 200-299).
    Schedule,
    /// Bond-unit ledger errors (codes 300-399).
    Ledger,
    /// Interest and principal settlement errors (codes 400-499).
    Settlement,
    /// Checked-arithmetic errors (codes 700-799).
    Arithmetic,
}

/// Error codes returned by every fallible `InterestBond` entry point.
///
/// Codes are wire-stable: never renumber a variant after deployment, append
/// new variants at the end of their category block.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BondError {
    // --- Initialization (1-99) ---
    /// The bond has not been initialized yet.
    NotInitialized = 1,
    /// `initialize` was already called.
    AlreadyInitialized = 2,
    /// Instrument terms or initial supply are out of range.
    InvalidTerms = 3,

    // --- Authorization (100-199) ---
    /// Caller lacks the required capability or is not the admin.
    Unauthorized = 100,

    // --- Schedule (200-299) ---
    /// A full accrual interval has not elapsed since the last accrual.
    TooEarly = 200,
    /// Redemption attempted before the maturity timestamp.
    NotMature = 201,

    // --- Ledger (300-399) ---
    /// Debit exceeds the holder's bond balance.
    InsufficientBalance = 300,
    /// Delegated transfer exceeds the spender's allowance.
    InsufficientAllowance = 301,
    /// Amount is negative, or zero where a positive amount is required.
    InvalidAmount = 302,
    /// Registry index does not point at a registered holder.
    HolderNotFound = 303,

    // --- Settlement (400-499) ---
    /// Caller has no claimable interest.
    NothingToClaim = 400,
    /// The payment-asset transfer was rejected.
    SettlementFailed = 401,
    /// A settlement was entered while another one is in flight.
    ReentrancyDetected = 402,

    // --- Arithmetic (700-799) ---
    /// Integer overflow in checked arithmetic.
    Overflow = 700,
}

impl BondError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BondError::NotInitialized | BondError::AlreadyInitialized | BondError::InvalidTerms => {
                ErrorCategory::Initialization
            }
            BondError::Unauthorized => ErrorCategory::Authorization,
            BondError::TooEarly | BondError::NotMature => ErrorCategory::Schedule,
            BondError::InsufficientBalance
            | BondError::InsufficientAllowance
            | BondError::InvalidAmount
            | BondError::HolderNotFound => ErrorCategory::Ledger,
            BondError::NothingToClaim
            | BondError::SettlementFailed
            | BondError::ReentrancyDetected => ErrorCategory::Settlement,
            BondError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    /// Static description safe for logging or display.
    pub fn description(&self) -> &'static str {
        match self {
            BondError::NotInitialized => "Bond has not been initialized",
            BondError::AlreadyInitialized => "Bond has already been initialized",
            BondError::InvalidTerms => "Instrument terms or initial supply are invalid",
            BondError::Unauthorized => "Caller is not authorized for this operation",
            BondError::TooEarly => "Accrual interval has not elapsed",
            BondError::NotMature => "Bond has not reached maturity",
            BondError::InsufficientBalance => "Insufficient bond balance",
            BondError::InsufficientAllowance => "Insufficient allowance for delegated transfer",
            BondError::InvalidAmount => "Amount is out of range",
            BondError::HolderNotFound => "No holder registered at this index",
            BondError::NothingToClaim => "No claimable interest",
            BondError::SettlementFailed => "Payment-asset transfer failed",
            BondError::ReentrancyDetected => "Reentrancy detected; call rejected",
            BondError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
