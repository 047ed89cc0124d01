use anchor_lang::prelude::*;

#[event]
pub struct DepositCompleted {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub units_minted: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalCompleted {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub principal_withdrawn: u64,
    /// Signed: (amount + 1) - principal_withdrawn. The +1 offsets burn-side
    /// rounding so the figure is not systematically understated.
    pub interest_realized: i64,
    pub units_burned: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnitTotalChanged {
    pub pool: Pubkey,
    pub unit_total: u64,
    pub timestamp: i64,
}

#[event]
pub struct CachedValueChanged {
    pub pool: Pubkey,
    pub cached_pool_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct ImpairmentRankChanged {
    pub pool: Pubkey,
    pub rank: u16,
    pub timestamp: i64,
}

#[event]
pub struct GateStatusChanged {
    pub pool: Pubkey,
    pub deposits_enabled: bool,
    pub withdrawals_enabled: bool,
    pub timestamp: i64,
}

#[event]
pub struct PoolDeactivated {
    pub pool: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct WhitelistChanged {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub added: bool,
    pub timestamp: i64,
}

#[event]
pub struct RewardRateChanged {
    pub rate_per_second_wad: u128,
    pub factor_wad: u128,
    pub timestamp: i64,
}
