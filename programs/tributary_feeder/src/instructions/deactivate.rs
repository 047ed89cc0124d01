use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::events::PoolDeactivated;
use crate::state::FeederPool;

#[derive(Accounts)]
pub struct Deactivate<'info> {
    pub liquidation_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref(), pool.governor.as_ref()],
        bump = pool.bump,
        has_one = liquidation_authority @ FeederError::UnauthorizedDeactivation,
    )]
    pub pool: Account<'info, FeederPool>,
}

/// Permanently retire the pool. Ledger entries survive untouched, but every
/// future balance/value read returns zero.
pub fn handler(ctx: Context<Deactivate>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.deactivate()?;

    let clock = Clock::get()?;
    emit!(PoolDeactivated {
        pool: pool.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Pool {} deactivated", pool.key());

    Ok(())
}
