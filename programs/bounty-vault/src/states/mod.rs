pub mod allocation_timeline;
pub mod bounty_config;
pub mod depositor;
pub mod hacker_hat_reward;
pub mod pool;
pub mod reward_schedule;
pub mod vault_config;

pub use allocation_timeline::*;
pub use bounty_config::*;
pub use depositor::*;
pub use hacker_hat_reward::*;
pub use pool::*;
pub use reward_schedule::*;
pub use vault_config::*;
