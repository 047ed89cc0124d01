use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::events::WhitelistChanged;
use crate::state::{FeederPool, WhitelistEntry};

#[derive(Accounts)]
pub struct RemoveFromWhitelist<'info> {
    #[account(mut)]
    pub governor: Signer<'info>,

    #[account(
        seeds = [b"pool", pool.asset_mint.as_ref(), pool.governor.as_ref()],
        bump = pool.bump,
        has_one = governor @ FeederError::Unauthorized,
    )]
    pub pool: Account<'info, FeederPool>,

    /// Closing the entry revokes membership; rent refunds to the governor
    #[account(
        mut,
        close = governor,
        seeds = [b"whitelist", pool.key().as_ref(), entry.depositor.as_ref()],
        bump = entry.bump,
        constraint = entry.pool == pool.key() @ FeederError::NotWhitelisted,
    )]
    pub entry: Account<'info, WhitelistEntry>,
}

pub fn handler(ctx: Context<RemoveFromWhitelist>) -> Result<()> {
    let clock = Clock::get()?;

    emit!(WhitelistChanged {
        pool: ctx.accounts.pool.key(),
        depositor: ctx.accounts.entry.depositor,
        added: false,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
