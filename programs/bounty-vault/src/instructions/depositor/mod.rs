pub mod claim_reward;
pub mod deposit;
pub mod emergency_withdraw;
pub mod log_claim;
pub mod reward_depositors;
pub mod withdraw;
pub mod withdraw_request;

pub use claim_reward::*;
pub use deposit::*;
pub use emergency_withdraw::*;
pub use log_claim::*;
pub use reward_depositors::*;
pub use withdraw::*;
pub use withdraw_request::*;
