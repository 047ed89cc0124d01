pub mod deposit_forward;
pub mod initialize_master;
pub mod refresh_valuation;
pub mod register_feeder;
pub mod report_yield;
pub mod withdraw_release;

pub use deposit_forward::*;
pub use initialize_master::*;
pub use refresh_valuation::*;
pub use register_feeder::*;
pub use report_yield::*;
pub use withdraw_release::*;
