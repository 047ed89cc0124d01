use anchor_lang::prelude::*;

pub mod accounting;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

declare_id!("BTAd1ghiv4jKd4kREh14jCtHrVG6zDFNgLRNoF9pUgqw");

#[program]
pub mod tributary_feeder {
    use super::*;

    /// Create a feeder pool for an asset, wire it to its master pool, and
    /// register its stake upstream. The signer becomes the pool governor.
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        access_mode: u8,
        liquidation_authority: Pubkey,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, access_mode, liquidation_authority)
    }

    /// Create the deployment-wide reward index shared by every pool.
    pub fn initialize_reward_index(
        ctx: Context<InitializeRewardIndex>,
        rate_per_second_wad: u128,
    ) -> Result<()> {
        instructions::initialize_reward_index::handler(ctx, rate_per_second_wad)
    }

    /// Retune the reward accrual rate (reward authority only).
    pub fn set_reward_rate(ctx: Context<SetRewardRate>, rate_per_second_wad: u128) -> Result<()> {
        instructions::set_reward_rate::handler(ctx, rate_per_second_wad)
    }

    /// Deposit the underlying asset. Units are minted against the settled
    /// upstream valuation and the funds are forwarded to the master pool.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw part of a position, strictly less than its current balance.
    /// A full exit must use `withdraw_all`.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Withdraw the entire position at the settled upstream valuation.
    pub fn withdraw_all(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw_all::handler(ctx)
    }

    /// Toggle the deposit gate; setting the current value again fails.
    pub fn set_deposit_status(ctx: Context<GovernPool>, enabled: bool) -> Result<()> {
        instructions::set_deposit_status::handler(ctx, enabled)
    }

    /// Toggle the withdraw gate; setting the current value again fails.
    pub fn set_withdraw_status(ctx: Context<GovernPool>, enabled: bool) -> Result<()> {
        instructions::set_withdraw_status::handler(ctx, enabled)
    }

    /// Update the pool's impairment-cascade rank; the new rank must differ.
    pub fn set_impairment_rank(ctx: Context<GovernPool>, rank: u16) -> Result<()> {
        instructions::set_impairment_rank::handler(ctx, rank)
    }

    /// One-way deactivation by the liquidation authority.
    pub fn deactivate(ctx: Context<Deactivate>) -> Result<()> {
        instructions::deactivate::handler(ctx)
    }

    /// Add a depositor to a whitelisted pool (governor only).
    pub fn add_to_whitelist(ctx: Context<AddToWhitelist>, depositor: Pubkey) -> Result<()> {
        instructions::add_to_whitelist::handler(ctx, depositor)
    }

    /// Revoke a depositor's whitelist entry (governor only).
    pub fn remove_from_whitelist(ctx: Context<RemoveFromWhitelist>) -> Result<()> {
        instructions::remove_from_whitelist::handler(ctx)
    }
}
