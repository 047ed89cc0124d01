use anchor_lang::prelude::*;

use crate::errors::MasterError;
use crate::events::YieldReported;
use crate::state::MasterPool;

#[derive(Accounts)]
pub struct ReportYield<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"master", master.asset_mint.as_ref()],
        bump = master.bump,
        has_one = authority @ MasterError::UnauthorizedOracle,
    )]
    pub master: Account<'info, MasterPool>,
}

pub fn handler(ctx: Context<ReportYield>, index_wad: u128) -> Result<()> {
    require!(index_wad > 0, MasterError::ZeroIndex);

    let clock = Clock::get()?;
    let master = &mut ctx.accounts.master;
    master.yield_index_wad = index_wad;
    master.last_report_at = clock.unix_timestamp;

    emit!(YieldReported {
        master: master.key(),
        index_wad,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
