use anchor_lang::prelude::*;

/// Depositor position PDA.
///
/// Seeds: ["position", pool, depositor]
/// Implicitly created (zero-initialized) on the first deposit. A full
/// withdrawal returns units and principal to zero but the account is never
/// closed: `locked_reward` may still be pending collection by the reward
/// subsystem.
///
/// Size calculation:
///   discriminator: 8
///   pool: 32
///   depositor: 32
///   units: 8
///   principal: 8
///   reward_factor_snapshot: 16
///   locked_reward: 8
///   bump: 1
///   _padding: 16
///   TOTAL: 8 + 32 + 32 + 8 + 8 + 16 + 8 + 1 + 16 = 129
#[account]
pub struct DepositorPosition {
    pub pool: Pubkey,

    pub depositor: Pubkey,

    /// Claim on the pool's unit ledger
    pub units: u64,

    /// Cumulative principal currently deposited. Not the economic balance;
    /// units against the upstream valuation determine that.
    pub principal: u64,

    /// Global reward factor at the last principal-changing operation (WAD)
    pub reward_factor_snapshot: u128,

    /// Reward settled to this depositor but not yet claimed
    pub locked_reward: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _padding: [u8; 16],
}

impl DepositorPosition {
    /// Account size for space allocation (includes discriminator)
    pub const SIZE: usize = 8 + // discriminator
        32 +  // pool
        32 +  // depositor
        8 +   // units
        8 +   // principal
        16 +  // reward_factor_snapshot
        8 +   // locked_reward
        1 +   // bump
        16;   // _padding
}
