use crate::{ContractError, StdError, StdResult};

/// Basis points in a whole.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Number of decimal places of the other chain's asset units (mojos per CAT).
pub const OTHER_CHAIN_DECIMALS: u8 = 3;

/// Check that a tip is within `1..=10000` basis points.
pub fn validate_tip_bps(tip_bps: u16) -> Result<(), ContractError> {
    if tip_bps == 0 || u128::from(tip_bps) > BPS_DENOMINATOR {
        return Err(ContractError::InvalidTip { tip_bps });
    }

    Ok(())
}

/// Tip on an amount: `floor(amount * tip_bps / 10000)`.
pub fn tip_of(amount: u128, tip_bps: u16) -> StdResult<u128> {
    amount
        .checked_mul(tip_bps.into())
        .map(|product| product / BPS_DENOMINATOR)
        .ok_or_else(|| StdError::overflow(amount, tip_bps.into(), "*"))
}

/// Tip on an amount, but never less than one minimal unit.
pub fn tip_with_minimum(amount: u128, tip_bps: u16) -> StdResult<u128> {
    tip_of(amount, tip_bps).map(|tip| tip.max(1))
}

/// The factor between an amount in the other chain's precision and the same
/// amount in a token with `decimals` decimal places. `None` if the token is
/// less precise than the other chain.
pub fn scale_factor(decimals: u8) -> Option<u128> {
    let exp = decimals.checked_sub(OTHER_CHAIN_DECIMALS)?;
    10_u128.checked_pow(exp.into())
}

/// Multiply an amount by a scale factor.
pub fn scale_up(amount: u128, factor: u128) -> StdResult<u128> {
    amount
        .checked_mul(factor)
        .ok_or_else(|| StdError::overflow(amount, factor, "*"))
}

/// Divide an amount by a scale factor. `None` if the division leaves a
/// remainder.
pub fn scale_down_exact(amount: u128, factor: u128) -> StdResult<Option<u128>> {
    if factor == 0 {
        return Err(StdError::DivisionByZero { a: amount });
    }

    if amount % factor != 0 {
        return Ok(None);
    }

    Ok(Some(amount / factor))
}

// ----------------------------------- tests -----------------------------------
