use anchor_lang::prelude::*;

use crate::events::ImpairmentRankChanged;
use crate::instructions::set_deposit_status::GovernPool;

/// Reorder this pool in the external impairment cascade. The rank is opaque
/// here; only the distinct-from-previous rule is enforced.
pub fn handler(ctx: Context<GovernPool>, rank: u16) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.set_impairment_rank(rank)?;

    let clock = Clock::get()?;
    emit!(ImpairmentRankChanged {
        pool: pool.key(),
        rank,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
