use anchor_lang::prelude::*;

use crate::events::FeederRegistered;
use crate::state::{MasterPool, MasterStake};

#[derive(Accounts)]
pub struct RegisterFeeder<'info> {
    /// Pays for the stake account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The feeder pool registering itself. Must sign (feeders call this via
    /// CPI with their pool PDA as signer) so stakes cannot be squatted.
    pub feeder: Signer<'info>,

    pub master: Account<'info, MasterPool>,

    /// Stake record for this feeder
    #[account(
        init,
        payer = payer,
        space = MasterStake::SIZE,
        seeds = [b"stake", master.key().as_ref(), feeder.key().as_ref()],
        bump,
    )]
    pub stake: Account<'info, MasterStake>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterFeeder>) -> Result<()> {
    let clock = Clock::get()?;

    let stake = &mut ctx.accounts.stake;
    stake.master = ctx.accounts.master.key();
    stake.feeder = ctx.accounts.feeder.key();
    stake.value = 0;
    stake.index_snapshot = ctx.accounts.master.yield_index_wad;
    stake.bump = ctx.bumps.stake;
    stake._padding = [0u8; 16];

    emit!(FeederRegistered {
        master: ctx.accounts.master.key(),
        feeder: stake.feeder,
        stake: stake.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
