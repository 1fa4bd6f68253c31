pub mod admin;
pub mod committee;
pub mod depositor;
pub mod dismiss_claim;
pub mod initialize;
pub mod reward_payout;
pub mod update_pool;

pub use admin::*;
pub use committee::*;
pub use depositor::*;
pub use dismiss_claim::*;
pub use initialize::*;
pub use reward_payout::*;
pub use update_pool::*;
