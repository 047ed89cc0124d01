use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::events::GateStatusChanged;
use crate::state::FeederPool;

/// Governor-gated pool context shared by the gate and rank toggles.
#[derive(Accounts)]
pub struct GovernPool<'info> {
    pub governor: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref(), pool.governor.as_ref()],
        bump = pool.bump,
        has_one = governor @ FeederError::Unauthorized,
    )]
    pub pool: Account<'info, FeederPool>,
}

pub fn handler(ctx: Context<GovernPool>, enabled: bool) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.set_deposit_gate(enabled)?;

    let clock = Clock::get()?;
    emit!(GateStatusChanged {
        pool: pool.key(),
        deposits_enabled: pool.deposits_enabled,
        withdrawals_enabled: pool.withdrawals_enabled,
        timestamp: clock.unix_timestamp,
    });

    msg!("Deposit gate for pool {} set to {}", pool.key(), enabled);

    Ok(())
}
