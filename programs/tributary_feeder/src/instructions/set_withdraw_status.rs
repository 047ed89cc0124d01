use anchor_lang::prelude::*;

use crate::events::GateStatusChanged;
use crate::instructions::set_deposit_status::GovernPool;

pub fn handler(ctx: Context<GovernPool>, enabled: bool) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.set_withdraw_gate(enabled)?;

    let clock = Clock::get()?;
    emit!(GateStatusChanged {
        pool: pool.key(),
        deposits_enabled: pool.deposits_enabled,
        withdrawals_enabled: pool.withdrawals_enabled,
        timestamp: clock.unix_timestamp,
    });

    msg!("Withdraw gate for pool {} set to {}", pool.key(), enabled);

    Ok(())
}
