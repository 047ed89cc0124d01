use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use tributary_master::program::TributaryMaster;
use tributary_master::state::MasterPool;

use crate::errors::FeederError;
use crate::state::{AccessMode, FeederPool};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The pool governor (pays for account creation)
    #[account(mut)]
    pub governor: Signer<'info>,

    /// Underlying SPL asset accepted by this pool
    pub asset_mint: Account<'info, Mint>,

    /// The feeder pool PDA to initialize
    #[account(
        init,
        payer = governor,
        space = FeederPool::SIZE,
        seeds = [b"pool", asset_mint.key().as_ref(), governor.key().as_ref()],
        bump,
    )]
    pub pool: Account<'info, FeederPool>,

    /// Transit vault funds pass through, owned by the pool PDA
    #[account(
        init,
        payer = governor,
        seeds = [b"pool_vault", pool.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = pool,
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    pub master_program: Program<'info, TributaryMaster>,

    #[account(constraint = master.asset_mint == asset_mint.key() @ FeederError::AssetMismatch)]
    pub master: Account<'info, MasterPool>,

    /// CHECK: created and validated by the master program's register_feeder
    #[account(mut)]
    pub master_stake: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    access_mode: u8,
    liquidation_authority: Pubkey,
) -> Result<()> {
    let access_mode = AccessMode::from_u8(access_mode)?;
    let clock = Clock::get()?;

    {
        let pool = &mut ctx.accounts.pool;
        pool.governor = ctx.accounts.governor.key();
        pool.liquidation_authority = liquidation_authority;
        pool.asset_mint = ctx.accounts.asset_mint.key();
        pool.asset_vault = ctx.accounts.asset_vault.key();
        pool.master_pool = ctx.accounts.master.key();
        pool.master_stake = ctx.accounts.master_stake.key();
        pool.master_vault = ctx.accounts.master.asset_vault;
        pool.access_mode = access_mode;
        pool.active = true;
        pool.deposits_enabled = true;
        pool.withdrawals_enabled = true;
        pool.impairment_rank = 0;
        pool.unit_total = 0;
        pool.principal_total = 0;
        pool.cached_pool_value = 0;
        pool.created_at = clock.unix_timestamp;
        pool.bump = ctx.bumps.pool;
        pool._padding = [0u8; 32];
    }

    // register this pool's stake with the master
    let asset_mint = ctx.accounts.pool.asset_mint;
    let governor = ctx.accounts.pool.governor;
    let pool_bump = ctx.accounts.pool.bump;
    let pool_seeds = &[
        b"pool".as_ref(),
        asset_mint.as_ref(),
        governor.as_ref(),
        &[pool_bump],
    ];
    let signer_seeds = &[&pool_seeds[..]];

    tributary_master::cpi::register_feeder(CpiContext::new_with_signer(
        ctx.accounts.master_program.to_account_info(),
        tributary_master::cpi::accounts::RegisterFeeder {
            payer: ctx.accounts.governor.to_account_info(),
            feeder: ctx.accounts.pool.to_account_info(),
            master: ctx.accounts.master.to_account_info(),
            stake: ctx.accounts.master_stake.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
        },
        signer_seeds,
    ))?;

    msg!(
        "Pool initialized for mint {} ({:?} access) feeding master {}",
        ctx.accounts.pool.asset_mint,
        access_mode,
        ctx.accounts.pool.master_pool
    );

    Ok(())
}
