use anchor_lang::prelude::*;

use crate::state::RewardIndex;

#[derive(Accounts)]
pub struct InitializeRewardIndex<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The deployment-wide reward index singleton
    #[account(
        init,
        payer = authority,
        space = RewardIndex::SIZE,
        seeds = [b"reward_index"],
        bump,
    )]
    pub reward_index: Account<'info, RewardIndex>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRewardIndex>, rate_per_second_wad: u128) -> Result<()> {
    let clock = Clock::get()?;

    let index = &mut ctx.accounts.reward_index;
    index.authority = ctx.accounts.authority.key();
    index.rate_per_second_wad = rate_per_second_wad;
    index.factor_wad = 0;
    index.last_advance_at = clock.unix_timestamp;
    index.bump = ctx.bumps.reward_index;
    index._padding = [0u8; 16];

    msg!(
        "Reward index initialized at rate {}/s",
        rate_per_second_wad
    );

    Ok(())
}
