pub mod committee_check_in;
pub mod set_committee;
pub mod set_pending_reward_levels;
pub mod set_reward_levels;
pub mod submit_claim;

pub use committee_check_in::*;
pub use set_committee::*;
pub use set_pending_reward_levels::*;
pub use set_reward_levels::*;
pub use submit_claim::*;
