use anchor_lang::prelude::*;

use crate::errors::FeederError;

/// Globally shared reward accrual index.
///
/// Seeds: ["reward_index"]
/// One per deployment, shared by every pool. The factor advances linearly
/// with wall-clock time at a governable per-second rate and never decreases.
/// Positions snapshot the factor on principal-changing operations; the
/// difference against the snapshot prices reward accrual per unit of
/// principal (see `math::accrued_reward`).
///
/// Size calculation:
///   discriminator: 8
///   authority: 32
///   rate_per_second_wad: 16
///   factor_wad: 16
///   last_advance_at: 8
///   bump: 1
///   _padding: 16
///   TOTAL: 8 + 32 + 16 + 16 + 8 + 1 + 16 = 97
#[account]
pub struct RewardIndex {
    /// May retune the accrual rate
    pub authority: Pubkey,

    /// Factor growth per second (WAD)
    pub rate_per_second_wad: u128,

    /// Current factor value (WAD); monotonically non-decreasing
    pub factor_wad: u128,

    /// Unix timestamp the factor was last advanced to
    pub last_advance_at: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _padding: [u8; 16],
}

impl RewardIndex {
    /// Account size for space allocation (includes discriminator)
    pub const SIZE: usize = 8 + // discriminator
        32 +  // authority
        16 +  // rate_per_second_wad
        16 +  // factor_wad
        8 +   // last_advance_at
        1 +   // bump
        16;   // _padding

    /// Fold elapsed time into the factor. Repeated calls within the same
    /// timestamp are no-ops; earlier timestamps are ignored so the factor
    /// never rewinds.
    pub fn advance(&mut self, now: i64) -> Result<()> {
        if now <= self.last_advance_at {
            return Ok(());
        }
        let elapsed = (now - self.last_advance_at) as u128;
        let growth = self
            .rate_per_second_wad
            .checked_mul(elapsed)
            .ok_or(FeederError::ArithmeticOverflow)?;
        self.factor_wad = self
            .factor_wad
            .checked_add(growth)
            .ok_or(FeederError::ArithmeticOverflow)?;
        self.last_advance_at = now;
        Ok(())
    }
}
