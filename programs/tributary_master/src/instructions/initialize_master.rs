use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::{master_pool::WAD, MasterPool};

#[derive(Accounts)]
pub struct InitializeMaster<'info> {
    /// The yield oracle authority (pays for account creation)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Underlying SPL asset accepted by this master pool
    pub asset_mint: Account<'info, Mint>,

    /// The master pool PDA to initialize
    #[account(
        init,
        payer = authority,
        space = MasterPool::SIZE,
        seeds = [b"master", asset_mint.key().as_ref()],
        bump,
    )]
    pub master: Account<'info, MasterPool>,

    /// Vault holding all forwarded funds, owned by the master PDA
    #[account(
        init,
        payer = authority,
        seeds = [b"master_vault", master.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = master,
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitializeMaster>) -> Result<()> {
    let clock = Clock::get()?;

    let master = &mut ctx.accounts.master;
    master.authority = ctx.accounts.authority.key();
    master.asset_mint = ctx.accounts.asset_mint.key();
    master.asset_vault = ctx.accounts.asset_vault.key();
    master.yield_index_wad = WAD;
    master.last_report_at = clock.unix_timestamp;
    master.bump = ctx.bumps.master;
    master._padding = [0u8; 24];

    msg!(
        "Master pool initialized for mint {} with oracle {}",
        master.asset_mint,
        master.authority
    );

    Ok(())
}
