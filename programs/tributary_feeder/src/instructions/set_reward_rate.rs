use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::events::RewardRateChanged;
use crate::state::RewardIndex;

#[derive(Accounts)]
pub struct SetRewardRate<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"reward_index"],
        bump = reward_index.bump,
        has_one = authority @ FeederError::Unauthorized,
    )]
    pub reward_index: Account<'info, RewardIndex>,
}

/// Retune the accrual rate. The factor is advanced first so accrual up to
/// this moment keeps the old rate.
pub fn handler(ctx: Context<SetRewardRate>, rate_per_second_wad: u128) -> Result<()> {
    let clock = Clock::get()?;

    let index = &mut ctx.accounts.reward_index;
    index.advance(clock.unix_timestamp)?;
    index.rate_per_second_wad = rate_per_second_wad;

    emit!(RewardRateChanged {
        rate_per_second_wad,
        factor_wad: index.factor_wad,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
