use anchor_lang::prelude::*;

use crate::errors::MasterError;
use crate::state::{MasterPool, MasterStake};

#[derive(Accounts)]
pub struct RefreshValuation<'info> {
    /// The feeder pool whose stake is being settled
    pub feeder: Signer<'info>,

    pub master: Account<'info, MasterPool>,

    #[account(
        mut,
        seeds = [b"stake", master.key().as_ref(), feeder.key().as_ref()],
        bump = stake.bump,
        constraint = stake.feeder == feeder.key() @ MasterError::UnknownFeeder,
    )]
    pub stake: Account<'info, MasterStake>,
}

pub fn handler(ctx: Context<RefreshValuation>) -> Result<()> {
    let index = ctx.accounts.master.yield_index_wad;
    ctx.accounts.stake.fold_index(index)?;

    msg!(
        "Stake {} settled at value {} (index {})",
        ctx.accounts.stake.key(),
        ctx.accounts.stake.value,
        index
    );

    Ok(())
}
