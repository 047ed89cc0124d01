use anchor_lang::prelude::*;

#[event]
pub struct FeederRegistered {
    pub master: Pubkey,
    pub feeder: Pubkey,
    pub stake: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct YieldReported {
    pub master: Pubkey,
    pub index_wad: u128,
    pub timestamp: i64,
}

#[event]
pub struct ValueForwarded {
    pub stake: Pubkey,
    pub amount: u64,
    pub staked_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct ValueReleased {
    pub stake: Pubkey,
    pub amount: u64,
    pub staked_value: u64,
    pub timestamp: i64,
}
