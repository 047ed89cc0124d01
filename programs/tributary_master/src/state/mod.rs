pub mod master_pool;
pub mod master_stake;

pub use master_pool::*;
pub use master_stake::*;
