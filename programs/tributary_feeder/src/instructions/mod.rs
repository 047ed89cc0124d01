pub mod add_to_whitelist;
pub mod deactivate;
pub mod deposit;
pub mod initialize_pool;
pub mod initialize_reward_index;
pub mod remove_from_whitelist;
pub mod set_deposit_status;
pub mod set_impairment_rank;
pub mod set_reward_rate;
pub mod set_withdraw_status;
pub mod withdraw;
pub mod withdraw_all;

pub use add_to_whitelist::*;
pub use deactivate::*;
pub use deposit::*;
pub use initialize_pool::*;
pub use initialize_reward_index::*;
pub use remove_from_whitelist::*;
pub use set_deposit_status::*;
pub use set_impairment_rank::*;
pub use set_reward_rate::*;
pub use set_withdraw_status::*;
pub use withdraw::*;
pub use withdraw_all::*;
