pub mod pool;
pub mod position;
pub mod reward_index;
pub mod whitelist;

pub use pool::*;
pub use position::*;
pub use reward_index::*;
pub use whitelist::*;
