//! Overflow-checked arithmetic for interest and settlement amounts.
//!
//! Every helper reports overflow as `BondError::Overflow` so the failing
//! invocation is reverted instead of wrapping.

use crate::errors::BondError;
use crate::types::RATE_SCALE;

#[inline]
pub fn add(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_add(b).ok_or(BondError::Overflow)
}

#[inline]
pub fn sub(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_sub(b).ok_or(BondError::Overflow)
}

#[inline]
pub fn mul(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_mul(b).ok_or(BondError::Overflow)
}

/// `amount * rate / RATE_SCALE`, truncated toward zero.
///
/// The sub-unit remainder is dropped, not carried into the next cycle.
#[inline]
pub fn apply_rate(amount: i128, rate: i128) -> Result<i128, BondError> {
    Ok(mul(amount, rate)? / RATE_SCALE)
}
