use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::MasterError;
use crate::events::ValueReleased;
use crate::state::{MasterPool, MasterStake};

#[derive(Accounts)]
pub struct WithdrawRelease<'info> {
    /// The feeder pool requesting the release
    pub feeder: Signer<'info>,

    pub master: Account<'info, MasterPool>,

    #[account(
        mut,
        seeds = [b"stake", master.key().as_ref(), feeder.key().as_ref()],
        bump = stake.bump,
        constraint = stake.feeder == feeder.key() @ MasterError::UnknownFeeder,
    )]
    pub stake: Account<'info, MasterStake>,

    #[account(
        mut,
        constraint = master_vault.key() == master.asset_vault @ MasterError::AssetMismatch,
    )]
    pub master_vault: Account<'info, TokenAccount>,

    /// The feeder's transit vault receiving the released funds
    #[account(
        mut,
        constraint = destination_vault.mint == master.asset_mint @ MasterError::AssetMismatch,
        constraint = destination_vault.owner == feeder.key() @ MasterError::UnknownFeeder,
    )]
    pub destination_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawRelease>, amount: u64) -> Result<()> {
    require!(amount > 0, MasterError::ZeroAmount);
    require!(
        amount <= ctx.accounts.stake.value,
        MasterError::InsufficientStake
    );

    // Master PDA signs the transfer out of its vault
    let mint_key = ctx.accounts.master.asset_mint;
    let master_seeds = &[
        b"master".as_ref(),
        mint_key.as_ref(),
        &[ctx.accounts.master.bump],
    ];
    let signer_seeds = &[&master_seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.master_vault.to_account_info(),
                to: ctx.accounts.destination_vault.to_account_info(),
                authority: ctx.accounts.master.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let stake = &mut ctx.accounts.stake;
    stake.value = stake
        .value
        .checked_sub(amount)
        .ok_or(MasterError::InsufficientStake)?;

    let clock = Clock::get()?;
    emit!(ValueReleased {
        stake: stake.key(),
        amount,
        staked_value: stake.value,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
