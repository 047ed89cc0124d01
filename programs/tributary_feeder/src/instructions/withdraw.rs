use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use tributary_master::program::TributaryMaster;
use tributary_master::state::{MasterPool, MasterStake};

use crate::accounting;
use crate::errors::FeederError;
use crate::events::{CachedValueChanged, UnitTotalChanged, WithdrawalCompleted};
use crate::state::{whitelist, DepositorPosition, FeederPool, RewardIndex, WhitelistEntry};

/// Shared by both withdrawal paths; `withdraw_all` reuses this context.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref(), pool.governor.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, FeederPool>,

    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), depositor.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, DepositorPosition>,

    /// Membership proof, required when the pool is whitelisted
    pub whitelist_entry: Option<Account<'info, WhitelistEntry>>,

    #[account(
        mut,
        seeds = [b"reward_index"],
        bump = reward_index.bump,
    )]
    pub reward_index: Account<'info, RewardIndex>,

    #[account(
        mut,
        constraint = depositor_token.mint == pool.asset_mint @ FeederError::AssetMismatch,
        constraint = depositor_token.owner == depositor.key() @ FeederError::Unauthorized,
    )]
    pub depositor_token: Account<'info, TokenAccount>,

    /// The pool's transit vault
    #[account(
        mut,
        constraint = asset_vault.key() == pool.asset_vault @ FeederError::AssetMismatch,
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    pub master_program: Program<'info, TributaryMaster>,

    #[account(constraint = master.key() == pool.master_pool @ FeederError::UpstreamMismatch)]
    pub master: Account<'info, MasterPool>,

    #[account(
        mut,
        constraint = master_stake.key() == pool.master_stake @ FeederError::UpstreamMismatch,
    )]
    pub master_stake: Account<'info, MasterStake>,

    #[account(
        mut,
        constraint = master_vault.key() == pool.master_vault @ FeederError::UpstreamMismatch,
    )]
    pub master_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Clone, Copy)]
pub enum WithdrawKind {
    Partial(u64),
    Full,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    execute(ctx, WithdrawKind::Partial(amount))
}

/// The single withdrawal flow; only the plan differs between a partial and a
/// full exit.
pub(crate) fn execute(ctx: Context<Withdraw>, kind: WithdrawKind) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let depositor_key = ctx.accounts.depositor.key();

    {
        let pool = &ctx.accounts.pool;
        require!(pool.withdrawals_enabled, FeederError::WithdrawalsDisabled);
        require!(pool.active, FeederError::PoolInactive);
        if let WithdrawKind::Partial(amount) = kind {
            require!(amount > 0, FeederError::ZeroAmount);
        }
        whitelist::authorize(
            pool.access_mode,
            &pool_key,
            ctx.accounts.whitelist_entry.as_deref(),
            &depositor_key,
        )?;
    }

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

    // settle the upstream valuation for this bookkeeping pass
    tributary_master::cpi::refresh_valuation(CpiContext::new_with_signer(
        ctx.accounts.master_program.to_account_info(),
        tributary_master::cpi::accounts::RefreshValuation {
            feeder: ctx.accounts.pool.to_account_info(),
            master: ctx.accounts.master.to_account_info(),
            stake: ctx.accounts.master_stake.to_account_info(),
        },
        signer_seeds,
    ))?;
    ctx.accounts.master_stake.reload()?;
    let pool_value = ctx.accounts.master_stake.value;

    let clock = Clock::get()?;
    ctx.accounts.reward_index.advance(clock.unix_timestamp)?;
    let factor_wad = ctx.accounts.reward_index.factor_wad;

    let plan = match kind {
        WithdrawKind::Partial(amount) => accounting::plan_partial_withdrawal(
            &ctx.accounts.pool,
            &ctx.accounts.position,
            amount,
            pool_value,
        )?,
        WithdrawKind::Full => {
            accounting::plan_full_withdrawal(&ctx.accounts.pool, &ctx.accounts.position, pool_value)?
        }
    };

    let settled = accounting::settle_withdrawal(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.position,
        factor_wad,
        &plan,
    )?;

    // release upstream funds into the transit vault, then push them out
    if plan.amount > 0 {
        tributary_master::cpi::withdraw_release(
            CpiContext::new_with_signer(
                ctx.accounts.master_program.to_account_info(),
                tributary_master::cpi::accounts::WithdrawRelease {
                    feeder: ctx.accounts.pool.to_account_info(),
                    master: ctx.accounts.master.to_account_info(),
                    stake: ctx.accounts.master_stake.to_account_info(),
                    master_vault: ctx.accounts.master_vault.to_account_info(),
                    destination_vault: ctx.accounts.asset_vault.to_account_info(),
                    token_program: ctx.accounts.token_program.to_account_info(),
                },
                signer_seeds,
            ),
            plan.amount,
        )?;
    }

    ctx.accounts.master_stake.reload()?;
    ctx.accounts.pool.cached_pool_value = ctx.accounts.master_stake.value;

    if plan.amount > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.asset_vault.to_account_info(),
                    to: ctx.accounts.depositor_token.to_account_info(),
                    authority: ctx.accounts.pool.to_account_info(),
                },
                signer_seeds,
            ),
            plan.amount,
        )?;
    }

    emit!(UnitTotalChanged {
        pool: pool_key,
        unit_total: ctx.accounts.pool.unit_total,
        timestamp: clock.unix_timestamp,
    });
    emit!(CachedValueChanged {
        pool: pool_key,
        cached_pool_value: ctx.accounts.pool.cached_pool_value,
        timestamp: clock.unix_timestamp,
    });
    emit!(WithdrawalCompleted {
        pool: pool_key,
        depositor: depositor_key,
        principal_withdrawn: plan.principal_out,
        interest_realized: settled.interest_realized,
        units_burned: settled.units_burned,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Withdrew {} from pool {} burning {} units ({} principal)",
        plan.amount,
        pool_key,
        settled.units_burned,
        plan.principal_out
    );

    Ok(())
}
