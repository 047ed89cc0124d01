use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::math;
use crate::state::position::DepositorPosition;

/// Pool access gating
/// 0 = open (any depositor), 1 = whitelisted
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum AccessMode {
    Open = 0,
    Whitelisted = 1,
}

impl Default for AccessMode {
    fn default() -> Self {
        AccessMode::Open
    }
}

impl AccessMode {
    pub fn from_u8(val: u8) -> Result<Self> {
        match val {
            0 => Ok(AccessMode::Open),
            1 => Ok(AccessMode::Whitelisted),
            _ => Err(error!(FeederError::InvalidAccessMode)),
        }
    }
}

/// Feeder pool PDA.
///
/// Seeds: ["pool", asset_mint, governor]
/// Aggregates depositor funds, forwards them to the wired master pool, and
/// tracks each depositor's proportional claim through the unit ledger.
///
/// Size calculation:
///   discriminator: 8
///   governor: 32
///   liquidation_authority: 32
///   asset_mint: 32
///   asset_vault: 32
///   master_pool: 32
///   master_stake: 32
///   master_vault: 32
///   access_mode: 1
///   active: 1
///   deposits_enabled: 1
///   withdrawals_enabled: 1
///   impairment_rank: 2
///   unit_total: 8
///   principal_total: 8
///   cached_pool_value: 8
///   created_at: 8
///   bump: 1
///   _padding: 32 (reserved for future fields)
///   TOTAL: 8 + 224 + 4 + 2 + 24 + 8 + 1 + 32 = 303
#[account]
pub struct FeederPool {
    /// Governance authority: gates, impairment rank, whitelist
    pub governor: Pubkey,

    /// Sole authority allowed to deactivate the pool
    pub liquidation_authority: Pubkey,

    /// Underlying SPL asset
    pub asset_mint: Pubkey,

    /// Transit token account (PDA authority: this pool); funds pass through
    /// on their way to and from the master vault
    pub asset_vault: Pubkey,

    /// Wired upstream accounts, fixed at creation
    pub master_pool: Pubkey,
    pub master_stake: Pubkey,
    pub master_vault: Pubkey,

    /// Access gate configuration
    pub access_mode: AccessMode,

    /// One-way flag: once false, every balance/value read returns zero
    pub active: bool,

    /// Independently toggleable operation gates
    pub deposits_enabled: bool,
    pub withdrawals_enabled: bool,

    /// Ordering metadata for the external impairment cascade; not
    /// interpreted here
    pub impairment_rank: u16,

    /// Sum of all depositor unit balances
    pub unit_total: u64,

    /// Sum of all depositor principal balances
    pub principal_total: u64,

    /// Last-observed upstream valuation; advisory only, never authoritative
    pub cached_pool_value: u64,

    /// Unix timestamp when this pool was created
    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _padding: [u8; 32],
}

impl FeederPool {
    /// Account size for space allocation (includes discriminator)
    pub const SIZE: usize = 8 + // discriminator
        32 +  // governor
        32 +  // liquidation_authority
        32 +  // asset_mint
        32 +  // asset_vault
        32 +  // master_pool
        32 +  // master_stake
        32 +  // master_vault
        1 +   // access_mode
        1 +   // active
        1 +   // deposits_enabled
        1 +   // withdrawals_enabled
        2 +   // impairment_rank
        8 +   // unit_total
        8 +   // principal_total
        8 +   // cached_pool_value
        8 +   // created_at
        1 +   // bump
        32;   // _padding

    /// Mint units to a position. The caller guarantees `amount` already
    /// reflects any rounding; both ledger sides move identically.
    pub fn mint_units(&mut self, position: &mut DepositorPosition, amount: u64) -> Result<()> {
        position.units = position
            .units
            .checked_add(amount)
            .ok_or(FeederError::ArithmeticOverflow)?;
        self.unit_total = self
            .unit_total
            .checked_add(amount)
            .ok_or(FeederError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Burn units from a position, returning the quantity actually burned.
    ///
    /// A partial burn (`amount` equals neither the position's full balance
    /// nor the whole pool total) removes `amount + 1` from both sides: the
    /// partial-withdrawal unit math floors in the depositor's favor by at
    /// most one unit, and the extra burned unit hands that slack back to the
    /// remaining pool. Full-balance and full-pool burns carry no rounding
    /// error and burn exactly `amount`.
    pub fn burn_units(&mut self, position: &mut DepositorPosition, amount: u64) -> Result<u64> {
        let burned = if amount == position.units || amount == self.unit_total {
            amount
        } else {
            amount
                .checked_add(1)
                .ok_or(FeederError::ArithmeticOverflow)?
        };
        position.units = position
            .units
            .checked_sub(burned)
            .ok_or(FeederError::ArithmeticOverflow)?;
        self.unit_total = self
            .unit_total
            .checked_sub(burned)
            .ok_or(FeederError::ArithmeticOverflow)?;
        Ok(burned)
    }

    /// Depositor's current claim at the given upstream value. Zero once the
    /// pool is deactivated or holds no units.
    pub fn total_balance(&self, units: u64, pool_value: u64) -> Result<u64> {
        if !self.active || self.unit_total == 0 {
            return Ok(0);
        }
        math::mul_div(units, pool_value, self.unit_total)
    }

    /// Balance above principal, clamped at zero: a transient valuation dip
    /// must never read as negative earned interest.
    pub fn earned_interest(&self, units: u64, principal: u64, pool_value: u64) -> Result<u64> {
        let balance = self.total_balance(units, pool_value)?;
        Ok(balance.saturating_sub(principal))
    }

    pub fn set_deposit_gate(&mut self, enabled: bool) -> Result<()> {
        require!(
            self.deposits_enabled != enabled,
            FeederError::RedundantGovernanceChange
        );
        self.deposits_enabled = enabled;
        Ok(())
    }

    pub fn set_withdraw_gate(&mut self, enabled: bool) -> Result<()> {
        require!(
            self.withdrawals_enabled != enabled,
            FeederError::RedundantGovernanceChange
        );
        self.withdrawals_enabled = enabled;
        Ok(())
    }

    pub fn set_impairment_rank(&mut self, rank: u16) -> Result<()> {
        require!(
            self.impairment_rank != rank,
            FeederError::RedundantGovernanceChange
        );
        self.impairment_rank = rank;
        Ok(())
    }

    /// One-way deactivation: future balance and interest reads return zero.
    /// Ledger entries are left untouched; this is a logical wipe only.
    pub fn deactivate(&mut self) -> Result<()> {
        require!(self.active, FeederError::PoolInactive);
        self.active = false;
        Ok(())
    }
}
