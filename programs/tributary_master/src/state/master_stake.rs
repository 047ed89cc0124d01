use anchor_lang::prelude::*;

use crate::errors::MasterError;

/// Per-feeder stake record.
///
/// Seeds: ["stake", master, feeder]
/// Tracks the value attributable to one feeder pool. `value` is settled as
/// of `index_snapshot`; growth (or decline) since then is realized by
/// `fold_index`, and `live_value` projects it without mutating.
///
/// Size calculation:
///   discriminator: 8
///   master: 32
///   feeder: 32
///   value: 8
///   index_snapshot: 16
///   bump: 1
///   _padding: 16
///   TOTAL: 8 + 32 + 32 + 8 + 16 + 1 + 16 = 113
#[account]
pub struct MasterStake {
    /// The master pool this stake belongs to
    pub master: Pubkey,

    /// The feeder pool owning this stake
    pub feeder: Pubkey,

    /// Staked value as of `index_snapshot`
    pub value: u64,

    /// Yield index at the last fold (WAD)
    pub index_snapshot: u128,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _padding: [u8; 16],
}

impl MasterStake {
    /// Account size for space allocation (includes discriminator)
    pub const SIZE: usize = 8 + // discriminator
        32 +  // master
        32 +  // feeder
        8 +   // value
        16 +  // index_snapshot
        1 +   // bump
        16;   // _padding

    /// Project the stake's value at the given index without mutating.
    pub fn live_value(&self, index_wad: u128) -> Result<u64> {
        if index_wad == self.index_snapshot {
            return Ok(self.value);
        }
        if self.index_snapshot == 0 {
            return Err(MasterError::DivisionByZero.into());
        }
        let scaled = (self.value as u128)
            .checked_mul(index_wad)
            .ok_or(MasterError::ArithmeticOverflow)?
            / self.index_snapshot;
        u64::try_from(scaled).map_err(|_| MasterError::ArithmeticOverflow.into())
    }

    /// Realize index movement since the last fold into `value` and catch the
    /// snapshot up to `index_wad`.
    pub fn fold_index(&mut self, index_wad: u128) -> Result<()> {
        self.value = self.live_value(index_wad)?;
        self.index_snapshot = index_wad;
        Ok(())
    }
}
