//! Deposit/withdrawal bookkeeping over pool and position state.
//!
//! Handlers resolve the settled upstream value and the current reward factor
//! first, then delegate here; nothing in this module touches accounts, CPIs,
//! or token balances, so every property is testable in isolation.

use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::math;
use crate::state::{DepositorPosition, FeederPool};

pub struct DepositOutcome {
    pub units_minted: u64,
}

/// Amounts resolved for a withdrawal before settlement runs.
pub struct WithdrawalPlan {
    /// Asset amount leaving the pool
    pub amount: u64,
    /// Units the plan asks to burn, before the rounding correction
    pub units_to_burn: u64,
    /// Principal attributed to the withdrawal
    pub principal_out: u64,
}

pub struct SettlementOutcome {
    pub units_burned: u64,
    pub reward_credited: u64,
    pub interest_realized: i64,
}

/// Deposit bookkeeping at the settled value: mint units, blend the reward
/// snapshot against the pre-deposit principal, then move principal on both
/// ledgers.
pub fn apply_deposit(
    pool: &mut FeederPool,
    position: &mut DepositorPosition,
    factor_wad: u128,
    amount: u64,
    pool_value: u64,
) -> Result<DepositOutcome> {
    let units = math::units_for_deposit(amount, pool.unit_total, pool_value)?;
    pool.mint_units(position, units)?;

    position.reward_factor_snapshot = math::blended_snapshot(
        factor_wad,
        amount,
        position.reward_factor_snapshot,
        position.principal,
    )?;

    position.principal = position
        .principal
        .checked_add(amount)
        .ok_or(FeederError::ArithmeticOverflow)?;
    pool.principal_total = pool
        .principal_total
        .checked_add(amount)
        .ok_or(FeederError::ArithmeticOverflow)?;

    Ok(DepositOutcome {
        units_minted: units,
    })
}

/// Resolve a partial withdrawal. Requesting the full balance (or more) is
/// rejected outright; a full exit goes through `plan_full_withdrawal`, which
/// has no rounding to attribute.
pub fn plan_partial_withdrawal(
    pool: &FeederPool,
    position: &DepositorPosition,
    amount: u64,
    pool_value: u64,
) -> Result<WithdrawalPlan> {
    let balance = pool.total_balance(position.units, pool_value)?;
    require!(amount < balance, FeederError::InsufficientFunds);

    let units_to_burn = math::units_for_withdrawal(amount, pool.unit_total, pool_value)?;
    let principal_out =
        math::proportional_principal(units_to_burn, position.principal, position.units)?;

    Ok(WithdrawalPlan {
        amount,
        units_to_burn,
        principal_out,
    })
}

/// Resolve a full withdrawal: every unit, the entire principal.
pub fn plan_full_withdrawal(
    pool: &FeederPool,
    position: &DepositorPosition,
    pool_value: u64,
) -> Result<WithdrawalPlan> {
    require!(position.units > 0, FeederError::ZeroAmount);

    let amount = math::mul_div(position.units, pool_value, pool.unit_total)?;

    Ok(WithdrawalPlan {
        amount,
        units_to_burn: position.units,
        principal_out: position.principal,
    })
}

/// Settlement shared by both withdrawal paths: realize reward on the
/// departing principal, move principal off both ledgers, then burn with the
/// rounding correction.
pub fn settle_withdrawal(
    pool: &mut FeederPool,
    position: &mut DepositorPosition,
    factor_wad: u128,
    plan: &WithdrawalPlan,
) -> Result<SettlementOutcome> {
    let reward = math::accrued_reward(
        plan.principal_out,
        factor_wad,
        position.reward_factor_snapshot,
    )?;
    position.locked_reward = position
        .locked_reward
        .checked_add(reward)
        .ok_or(FeederError::ArithmeticOverflow)?;

    position.principal = position
        .principal
        .checked_sub(plan.principal_out)
        .ok_or(FeederError::ArithmeticOverflow)?;
    pool.principal_total = pool
        .principal_total
        .checked_sub(plan.principal_out)
        .ok_or(FeederError::ArithmeticOverflow)?;

    let units_burned = pool.burn_units(position, plan.units_to_burn)?;

    Ok(SettlementOutcome {
        units_burned,
        reward_credited: reward,
        interest_realized: math::realized_interest(plan.amount, plan.principal_out),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::WAD;
    use crate::state::AccessMode;

    fn pool() -> FeederPool {
        FeederPool {
            governor: Pubkey::default(),
            liquidation_authority: Pubkey::default(),
            asset_mint: Pubkey::default(),
            asset_vault: Pubkey::default(),
            master_pool: Pubkey::default(),
            master_stake: Pubkey::default(),
            master_vault: Pubkey::default(),
            access_mode: AccessMode::Open,
            active: true,
            deposits_enabled: true,
            withdrawals_enabled: true,
            impairment_rank: 0,
            unit_total: 0,
            principal_total: 0,
            cached_pool_value: 0,
            created_at: 0,
            bump: 0,
            _padding: [0; 32],
        }
    }

    fn position() -> DepositorPosition {
        DepositorPosition {
            pool: Pubkey::default(),
            depositor: Pubkey::default(),
            units: 0,
            principal: 0,
            reward_factor_snapshot: 0,
            locked_reward: 0,
            bump: 0,
            _padding: [0; 16],
        }
    }

    #[test]
    fn first_deposit_mints_units_one_to_one() {
        let mut p = pool();
        let mut a = position();
        let out = apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();
        assert_eq!(out.units_minted, 1_000);
        assert_eq!(a.units, 1_000);
        assert_eq!(a.principal, 1_000);
        assert_eq!(p.unit_total, 1_000);
        assert_eq!(p.principal_total, 1_000);
    }

    #[test]
    fn later_deposit_buys_in_at_settled_value() {
        let mut p = pool();
        let mut a = position();
        let mut b = position();
        apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();
        // pool appreciated to 1100 before b entered
        let out = apply_deposit(&mut p, &mut b, 0, 550, 1_100).unwrap();
        assert_eq!(out.units_minted, 500);
        assert_eq!(p.unit_total, 1_500);
    }

    #[test]
    fn deposit_snapshot_blends_with_prior_principal() {
        let mut p = pool();
        let mut a = position();
        apply_deposit(&mut p, &mut a, 2 * WAD, 1_000, 0).unwrap();
        assert_eq!(a.reward_factor_snapshot, 2 * WAD);
        // second deposit at factor 4, equal principal: snapshot lands between
        apply_deposit(&mut p, &mut a, 4 * WAD, 1_000, 2_000).unwrap();
        assert_eq!(a.reward_factor_snapshot, 3 * WAD);
    }

    #[test]
    fn full_withdrawal_returns_appreciated_value() {
        let mut p = pool();
        let mut a = position();
        apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();

        let plan = plan_full_withdrawal(&p, &a, 1_100).unwrap();
        assert_eq!(plan.amount, 1_100);
        assert_eq!(plan.units_to_burn, 1_000);
        assert_eq!(plan.principal_out, 1_000);

        let settled = settle_withdrawal(&mut p, &mut a, 0, &plan).unwrap();
        assert_eq!(settled.units_burned, 1_000);
        assert_eq!(a.units, 0);
        assert_eq!(a.principal, 0);
        assert_eq!(p.unit_total, 0);
        assert_eq!(p.principal_total, 0);
        assert_eq!(settled.interest_realized, 101);
    }

    #[test]
    fn full_withdrawal_of_empty_position_is_rejected() {
        let p = pool();
        let a = position();
        assert!(plan_full_withdrawal(&p, &a, 1_000).is_err());
    }

    #[test]
    fn partial_withdrawal_splits_principal_and_burns_extra() {
        let mut p = pool();
        let mut a = position();
        let mut b = position();
        apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();
        apply_deposit(&mut p, &mut b, 0, 1_000, 1_000).unwrap();

        // pool appreciated to 2200; b is worth 1100 and takes out 600
        let plan = plan_partial_withdrawal(&p, &b, 600, 2_200).unwrap();
        assert_eq!(plan.units_to_burn, 545);
        assert_eq!(plan.principal_out, 545);

        let settled = settle_withdrawal(&mut p, &mut b, 0, &plan).unwrap();
        assert_eq!(settled.units_burned, 546);
        assert_eq!(b.units, 454);
        assert_eq!(b.principal, 455);
        assert_eq!(p.unit_total, 1_454);
        assert_eq!(p.principal_total, 1_455);
        assert_eq!(settled.interest_realized, 56);
    }

    #[test]
    fn partial_withdrawal_rejects_full_balance_exactly() {
        let mut p = pool();
        let mut a = position();
        apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();

        // balance is exactly 1100 at value 1100
        assert!(plan_partial_withdrawal(&p, &a, 1_100, 1_100).is_err());
        assert!(plan_partial_withdrawal(&p, &a, 2_000, 1_100).is_err());
        assert!(plan_partial_withdrawal(&p, &a, 1_099, 1_100).is_ok());
    }

    #[test]
    fn withdrawal_realizes_reward_on_departing_principal() {
        let mut p = pool();
        let mut a = position();
        // deposit while the factor sits at 1.0
        apply_deposit(&mut p, &mut a, WAD, 1_000, 0).unwrap();

        // factor advanced to 3.0 by withdrawal time; delta 2.0 per principal
        let plan = plan_full_withdrawal(&p, &a, 1_000).unwrap();
        let settled = settle_withdrawal(&mut p, &mut a, 3 * WAD, &plan).unwrap();
        assert_eq!(settled.reward_credited, 2_000);
        assert_eq!(a.locked_reward, 2_000);
    }

    #[test]
    fn partial_withdrawal_reward_scales_with_principal_out() {
        let mut p = pool();
        let mut a = position();
        let mut b = position();
        apply_deposit(&mut p, &mut a, WAD, 1_000, 0).unwrap();
        apply_deposit(&mut p, &mut b, WAD, 1_000, 1_000).unwrap();

        let plan = plan_partial_withdrawal(&p, &b, 600, 2_200).unwrap();
        let settled = settle_withdrawal(&mut p, &mut b, 2 * WAD, &plan).unwrap();
        // 545 principal departing, factor delta 1.0
        assert_eq!(settled.reward_credited, 545);
    }

    #[test]
    fn ledger_sums_stay_consistent_across_operations() {
        let mut p = pool();
        let mut a = position();
        let mut b = position();
        let mut c = position();

        apply_deposit(&mut p, &mut a, 0, 5_000, 0).unwrap();
        apply_deposit(&mut p, &mut b, 0, 3_000, 5_500).unwrap();
        apply_deposit(&mut p, &mut c, 0, 700, 9_000).unwrap();

        let value = 10_000;
        let plan = plan_partial_withdrawal(&p, &a, 1_234, value).unwrap();
        settle_withdrawal(&mut p, &mut a, 0, &plan).unwrap();

        assert_eq!(p.unit_total, a.units + b.units + c.units);
        assert_eq!(p.principal_total, a.principal + b.principal + c.principal);
    }
}
