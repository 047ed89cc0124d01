use anchor_lang::prelude::*;

/// WAD precision (1e18) for the yield index fixed-point math.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Master pool PDA.
///
/// Seeds: ["master", asset_mint]
/// One per asset mint. Holds pooled funds forwarded by feeders and the
/// oracle-reported yield index that values them. The index is not assumed
/// monotonic by consumers; the oracle may report a decline.
///
/// Size calculation:
///   discriminator: 8
///   authority: 32
///   asset_mint: 32
///   asset_vault: 32
///   yield_index_wad: 16
///   last_report_at: 8
///   bump: 1
///   _padding: 24 (reserved for future fields)
///   TOTAL: 8 + 32 + 32 + 32 + 16 + 8 + 1 + 24 = 153
#[account]
pub struct MasterPool {
    /// The yield oracle allowed to report index updates
    pub authority: Pubkey,

    /// Underlying SPL asset
    pub asset_mint: Pubkey,

    /// Token account holding all forwarded funds (PDA authority: this pool)
    pub asset_vault: Pubkey,

    /// Current yield index (WAD fixed-point, starts at 1.0)
    pub yield_index_wad: u128,

    /// Unix timestamp of the last oracle report
    pub last_report_at: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _padding: [u8; 24],
}

impl MasterPool {
    /// Account size for space allocation (includes discriminator)
    pub const SIZE: usize = 8 + // discriminator
        32 +  // authority
        32 +  // asset_mint
        32 +  // asset_vault
        16 +  // yield_index_wad
        8 +   // last_report_at
        1 +   // bump
        24;   // _padding
}
