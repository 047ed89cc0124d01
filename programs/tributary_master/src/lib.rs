use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("EH5sixTHAoLsdFox1bR3YUqgwf5VuX2BdXFew5wTE6dj");

#[program]
pub mod tributary_master {
    use super::*;

    /// Create the master pool for an asset mint.
    /// The signer becomes the yield oracle authority; the index starts at 1.0.
    pub fn initialize_master(ctx: Context<InitializeMaster>) -> Result<()> {
        instructions::initialize_master::handler(ctx)
    }

    /// Register a feeder pool and create its stake record.
    /// The feeder itself must sign so a stake cannot be claimed on its behalf.
    pub fn register_feeder(ctx: Context<RegisterFeeder>) -> Result<()> {
        instructions::register_feeder::handler(ctx)
    }

    /// Oracle-reported yield index update. A lower index than the current one
    /// is accepted: downstream pools must tolerate value decline.
    pub fn report_yield(ctx: Context<ReportYield>, index_wad: u128) -> Result<()> {
        instructions::report_yield::handler(ctx, index_wad)
    }

    /// Fold the current yield index into the calling feeder's staked value.
    /// After this call the stake's `value` is the settled valuation for the
    /// remainder of the feeder's bookkeeping pass.
    pub fn refresh_valuation(ctx: Context<RefreshValuation>) -> Result<()> {
        instructions::refresh_valuation::handler(ctx)
    }

    /// Accept forwarded funds from a feeder and grow its staked value 1:1.
    pub fn deposit_forward(ctx: Context<DepositForward>, amount: u64) -> Result<()> {
        instructions::deposit_forward::handler(ctx, amount)
    }

    /// Release funds back to a feeder and shrink its staked value 1:1.
    pub fn withdraw_release(ctx: Context<WithdrawRelease>, amount: u64) -> Result<()> {
        instructions::withdraw_release::handler(ctx, amount)
    }
}
