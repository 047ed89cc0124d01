use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::events::WhitelistChanged;
use crate::state::{FeederPool, WhitelistEntry};

#[derive(Accounts)]
#[instruction(depositor: Pubkey)]
pub struct AddToWhitelist<'info> {
    #[account(mut)]
    pub governor: Signer<'info>,

    #[account(
        seeds = [b"pool", pool.asset_mint.as_ref(), pool.governor.as_ref()],
        bump = pool.bump,
        has_one = governor @ FeederError::Unauthorized,
    )]
    pub pool: Account<'info, FeederPool>,

    #[account(
        init,
        payer = governor,
        space = WhitelistEntry::SIZE,
        seeds = [b"whitelist", pool.key().as_ref(), depositor.as_ref()],
        bump,
    )]
    pub entry: Account<'info, WhitelistEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddToWhitelist>, depositor: Pubkey) -> Result<()> {
    let clock = Clock::get()?;

    let entry = &mut ctx.accounts.entry;
    entry.pool = ctx.accounts.pool.key();
    entry.depositor = depositor;
    entry.added_at = clock.unix_timestamp;
    entry.bump = ctx.bumps.entry;

    emit!(WhitelistChanged {
        pool: entry.pool,
        depositor,
        added: true,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
