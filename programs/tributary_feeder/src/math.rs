//! Unit-conversion and fixed-point arithmetic for the feeder pool.
//!
//! All conversions floor; the withdrawal path's extra-unit burn (see
//! `FeederPool::burn_units`) returns the flooring slack to the pool.

use anchor_lang::prelude::*;

use crate::errors::FeederError;

/// WAD precision (1e18) for reward factor fixed-point math
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// floor(a * b / denom) over u128 intermediates
pub fn mul_div(a: u64, b: u64, denom: u64) -> Result<u64> {
    if denom == 0 {
        return Err(FeederError::DivisionByZero.into());
    }
    let wide = (a as u128)
        .checked_mul(b as u128)
        .ok_or(FeederError::ArithmeticOverflow)?
        / denom as u128;
    u64::try_from(wide).map_err(|_| FeederError::ArithmeticOverflow.into())
}

/// Units minted for a deposit. The first deposit into an empty pool mints
/// 1:1, establishing the unit:value exchange rate; later deposits buy in at
/// the current rate.
pub fn units_for_deposit(amount: u64, unit_total: u64, pool_value: u64) -> Result<u64> {
    if unit_total == 0 {
        return Ok(amount);
    }
    mul_div(amount, unit_total, pool_value)
}

/// Units covering a partial withdrawal of `amount` at the settled value
pub fn units_for_withdrawal(amount: u64, unit_total: u64, pool_value: u64) -> Result<u64> {
    mul_div(amount, unit_total, pool_value)
}

/// Principal attributed to `units_to_burn` out of the position's holdings,
/// splitting the withdrawal proportionally between principal and interest
pub fn proportional_principal(units_to_burn: u64, principal: u64, units: u64) -> Result<u64> {
    mul_div(units_to_burn, principal, units)
}

/// Principal-weighted blend of the depositor's prior reward snapshot with
/// the current global factor:
/// (factor * amount + prior_snapshot * prior_principal) / (amount + prior_principal)
///
/// Keeps reward accrued against the prior principal intact while the new
/// deposit starts accruing from the current factor.
pub fn blended_snapshot(
    factor_wad: u128,
    amount: u64,
    prior_snapshot_wad: u128,
    prior_principal: u64,
) -> Result<u128> {
    let denom = (amount as u128)
        .checked_add(prior_principal as u128)
        .ok_or(FeederError::ArithmeticOverflow)?;
    if denom == 0 {
        return Err(FeederError::DivisionByZero.into());
    }
    let new_part = factor_wad
        .checked_mul(amount as u128)
        .ok_or(FeederError::ArithmeticOverflow)?;
    let old_part = prior_snapshot_wad
        .checked_mul(prior_principal as u128)
        .ok_or(FeederError::ArithmeticOverflow)?;
    let sum = new_part
        .checked_add(old_part)
        .ok_or(FeederError::ArithmeticOverflow)?;
    Ok(sum / denom)
}

/// Reward accrued on `principal_out` since `snapshot_wad` was taken
pub fn accrued_reward(principal_out: u64, factor_wad: u128, snapshot_wad: u128) -> Result<u64> {
    let delta = factor_wad
        .checked_sub(snapshot_wad)
        .ok_or(FeederError::ArithmeticOverflow)?;
    let raw = (principal_out as u128)
        .checked_mul(delta)
        .ok_or(FeederError::ArithmeticOverflow)?
        / WAD;
    u64::try_from(raw).map_err(|_| FeederError::ArithmeticOverflow.into())
}

/// Signed interest figure for the withdrawal event: (amount + 1) - principal.
/// The +1 offsets the extra unit the partial burn removes.
pub fn realized_interest(amount: u64, principal_out: u64) -> i64 {
    let raw = amount as i128 + 1 - principal_out as i128;
    raw.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
