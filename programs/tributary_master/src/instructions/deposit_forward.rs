use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::MasterError;
use crate::events::ValueForwarded;
use crate::state::{MasterPool, MasterStake};

#[derive(Accounts)]
pub struct DepositForward<'info> {
    /// The feeder pool forwarding funds. Its signer privilege covers the
    /// transfer out of `source_vault`, which it owns.
    pub feeder: Signer<'info>,

    pub master: Account<'info, MasterPool>,

    #[account(
        mut,
        seeds = [b"stake", master.key().as_ref(), feeder.key().as_ref()],
        bump = stake.bump,
        constraint = stake.feeder == feeder.key() @ MasterError::UnknownFeeder,
    )]
    pub stake: Account<'info, MasterStake>,

    /// The feeder's transit vault funds are pulled from
    #[account(
        mut,
        constraint = source_vault.mint == master.asset_mint @ MasterError::AssetMismatch,
        constraint = source_vault.owner == feeder.key() @ MasterError::UnknownFeeder,
    )]
    pub source_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = master_vault.key() == master.asset_vault @ MasterError::AssetMismatch,
    )]
    pub master_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<DepositForward>, amount: u64) -> Result<()> {
    require!(amount > 0, MasterError::ZeroAmount);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source_vault.to_account_info(),
                to: ctx.accounts.master_vault.to_account_info(),
                authority: ctx.accounts.feeder.to_account_info(),
            },
        ),
        amount,
    )?;

    let stake = &mut ctx.accounts.stake;
    stake.value = stake
        .value
        .checked_add(amount)
        .ok_or(MasterError::ArithmeticOverflow)?;

    let clock = Clock::get()?;
    emit!(ValueForwarded {
        stake: stake.key(),
        amount,
        staked_value: stake.value,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
