//! Multi-operation lifecycle tests over the pure accounting core, plus the
//! property tests for the rounding correction and the reported interest
//! figure.

use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

use tributary_feeder::accounting::{
    apply_deposit, plan_full_withdrawal, plan_partial_withdrawal, settle_withdrawal,
};
use tributary_feeder::math::WAD;
use tributary_feeder::state::{AccessMode, DepositorPosition, FeederPool, RewardIndex};

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

fn reward_index(rate: u128) -> RewardIndex {
    RewardIndex {
        authority: Pubkey::default(),
        rate_per_second_wad: rate,
        factor_wad: 0,
        last_advance_at: 0,
        bump: 0,
        _padding: [0; 16],
    }
}

#[test]
fn single_depositor_captures_all_yield() {
    let mut p = pool();
    let mut a = position();

    apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();
    assert_eq!(a.units, 1_000);
    assert_eq!(p.unit_total, 1_000);

    // upstream appreciates 10%
    let plan = plan_full_withdrawal(&p, &a, 1_100).unwrap();
    assert_eq!(plan.amount, 1_100);
    settle_withdrawal(&mut p, &mut a, 0, &plan).unwrap();

    assert_eq!(a.units, 0);
    assert_eq!(a.principal, 0);
    assert_eq!(p.unit_total, 0);
    assert_eq!(p.principal_total, 0);
}

#[test]
fn two_depositors_share_yield_proportionally() {
    let mut p = pool();
    let mut a = position();
    let mut b = position();

    apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();
    apply_deposit(&mut p, &mut b, 0, 1_000, 1_000).unwrap();
    assert_eq!(b.units, 1_000);

    // pool value rises to 2200; b holds 1100 of it
    let value = 2_200;
    assert_eq!(p.total_balance(b.units, value).unwrap(), 1_100);

    let plan = plan_partial_withdrawal(&p, &b, 600, value).unwrap();
    assert_eq!(plan.units_to_burn, 545);

    let before_units = b.units;
    let before_principal = b.principal;
    let settled = settle_withdrawal(&mut p, &mut b, 0, &plan).unwrap();

    assert_eq!(settled.units_burned, 546);
    assert!(b.units < before_units);
    assert!(b.principal < before_principal);
    assert_eq!(p.unit_total, a.units + b.units);
    assert_eq!(p.principal_total, a.principal + b.principal);
}

#[test]
fn full_exit_after_partial_withdrawals_drains_the_position() {
    let mut p = pool();
    let mut a = position();
    let mut b = position();

    apply_deposit(&mut p, &mut a, 0, 10_000, 0).unwrap();
    apply_deposit(&mut p, &mut b, 0, 10_000, 10_000).unwrap();

    let value = 22_000;
    for amount in [1_000, 2_500, 700] {
        let plan = plan_partial_withdrawal(&p, &b, amount, value).unwrap();
        settle_withdrawal(&mut p, &mut b, 0, &plan).unwrap();
    }

    let plan = plan_full_withdrawal(&p, &b, value).unwrap();
    settle_withdrawal(&mut p, &mut b, 0, &plan).unwrap();
    assert_eq!(b.units, 0);
    assert_eq!(b.principal, 0);

    // the zeroed position rejects another full exit
    assert!(plan_full_withdrawal(&p, &b, value).is_err());

    assert_eq!(p.unit_total, a.units);
    assert_eq!(p.principal_total, a.principal);
}

#[test]
fn exact_balance_must_use_the_full_exit_path() {
    let mut p = pool();
    let mut a = position();
    apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();

    let value = 1_100;
    let balance = p.total_balance(a.units, value).unwrap();
    assert!(plan_partial_withdrawal(&p, &a, balance, value).is_err());
    assert!(plan_full_withdrawal(&p, &a, value).is_ok());
}

#[test]
fn deactivated_pool_zeroes_every_read_and_blocks_withdrawal_plans() {
    let mut p = pool();
    let mut a = position();
    apply_deposit(&mut p, &mut a, 0, 1_000, 0).unwrap();

    p.deactivate().unwrap();
    assert!(p.deactivate().is_err());

    assert_eq!(p.total_balance(a.units, 9_999).unwrap(), 0);
    assert_eq!(p.earned_interest(a.units, a.principal, 9_999).unwrap(), 0);
    // a partial plan sees a zero balance and refuses
    assert!(plan_partial_withdrawal(&p, &a, 1, 9_999).is_err());

    // the ledger itself is untouched
    assert_eq!(a.units, 1_000);
    assert_eq!(p.unit_total, 1_000);
}

#[test]
fn reward_accrues_between_principal_changes() {
    let mut p = pool();
    let mut a = position();
    let mut idx = reward_index(WAD / 100); // 0.01 per second

    idx.advance(100).unwrap();
    apply_deposit(&mut p, &mut a, idx.factor_wad, 1_000, 0).unwrap();
    assert_eq!(a.reward_factor_snapshot, WAD);

    // 200 more seconds: factor 1.0 -> 3.0
    idx.advance(300).unwrap();
    let plan = plan_full_withdrawal(&p, &a, 1_000).unwrap();
    let settled = settle_withdrawal(&mut p, &mut a, idx.factor_wad, &plan).unwrap();

    // 1000 principal over a factor delta of 2.0
    assert_eq!(settled.reward_credited, 2_000);
    assert_eq!(a.locked_reward, 2_000);
}

#[test]
fn second_deposit_dilutes_the_reward_snapshot() {
    let mut p = pool();
    let mut a = position();
    let mut idx = reward_index(WAD);

    idx.advance(1).unwrap();
    apply_deposit(&mut p, &mut a, idx.factor_wad, 1_000, 0).unwrap();

    idx.advance(3).unwrap();
    apply_deposit(&mut p, &mut a, idx.factor_wad, 1_000, 1_000).unwrap();

    // snapshots 1.0 and 3.0 on equal principal blend to 2.0
    assert_eq!(a.reward_factor_snapshot, 2 * WAD);
}

proptest! {
    #[test]
    fn partial_burn_stays_within_one_unit_of_the_plan(
        deposit_a in 1_000u64..1_000_000,
        deposit_b in 1_000u64..1_000_000,
        growth_bps in 0u64..5_000,
        take_bps in 1u64..9_999,
    ) {
        let mut p = pool();
        let mut a = position();
        let mut b = position();
        apply_deposit(&mut p, &mut a, 0, deposit_a, 0).unwrap();
        apply_deposit(&mut p, &mut b, 0, deposit_b, deposit_a).unwrap();

        let value = (p.unit_total as u128 * (10_000 + growth_bps) as u128 / 10_000) as u64;
        let balance = p.total_balance(b.units, value).unwrap();
        let amount = (balance as u128 * take_bps as u128 / 10_000) as u64;
        prop_assume!(amount >= 1 && amount < balance);

        let before_units = b.units;
        let before_total = p.unit_total;
        let plan = plan_partial_withdrawal(&p, &b, amount, value).unwrap();
        let settled = settle_withdrawal(&mut p, &mut b, 0, &plan).unwrap();

        // burn is the planned amount or exactly one more
        prop_assert!(
            settled.units_burned == plan.units_to_burn
                || settled.units_burned == plan.units_to_burn + 1
        );
        // both ledger sides move identically
        prop_assert_eq!(before_units - b.units, settled.units_burned);
        prop_assert_eq!(before_total - p.unit_total, settled.units_burned);
    }

    #[test]
    fn reported_interest_stays_within_one_of_the_naive_figure(
        deposit in 1_000u64..1_000_000,
        growth_bps in 0u64..5_000,
        take_bps in 1u64..9_999,
    ) {
        let mut p = pool();
        let mut a = position();
        apply_deposit(&mut p, &mut a, 0, deposit, 0).unwrap();

        let value = (p.unit_total as u128 * (10_000 + growth_bps) as u128 / 10_000) as u64;
        let balance = p.total_balance(a.units, value).unwrap();
        let amount = (balance as u128 * take_bps as u128 / 10_000) as u64;
        prop_assume!(amount >= 1 && amount < balance);

        let plan = plan_partial_withdrawal(&p, &a, amount, value).unwrap();
        let settled = settle_withdrawal(&mut p, &mut a, 0, &plan).unwrap();

        let naive = amount as i128 - plan.principal_out as i128;
        prop_assert!((settled.interest_realized as i128 - naive).abs() <= 1);
    }

    #[test]
    fn ledger_sums_hold_across_random_sequences(
        deposits in proptest::collection::vec(100u64..100_000, 2..6),
        growth_bps in 0u64..3_000,
        take_bps in 1u64..9_000,
    ) {
        let mut p = pool();
        let mut positions: Vec<DepositorPosition> = Vec::new();

        let mut value = 0u64;
        for d in &deposits {
            let mut pos = position();
            apply_deposit(&mut p, &mut pos, 0, *d, value).unwrap();
            value += d;
            positions.push(pos);
        }

        let value = (p.unit_total as u128 * (10_000 + growth_bps) as u128 / 10_000) as u64;
        for pos in positions.iter_mut() {
            let balance = p.total_balance(pos.units, value).unwrap();
            let amount = (balance as u128 * take_bps as u128 / 10_000) as u64;
            if amount >= 1 && amount < balance {
                let plan = plan_partial_withdrawal(&p, pos, amount, value).unwrap();
                settle_withdrawal(&mut p, pos, 0, &plan).unwrap();
            }
        }

        let unit_sum: u64 = positions.iter().map(|pos| pos.units).sum();
        let principal_sum: u64 = positions.iter().map(|pos| pos.principal).sum();
        prop_assert_eq!(p.unit_total, unit_sum);
        prop_assert_eq!(p.principal_total, principal_sum);
    }
}
