pub mod add_pool;
pub mod approve_claim;
pub mod set_fee_setter;
pub mod set_pool;
pub mod set_pool_fee;
pub mod set_rewards_split;
pub mod set_vesting_params;
pub mod swap_burn_send;
pub mod transfer_governance;
pub mod update_general_parameters;

pub use add_pool::*;
pub use approve_claim::*;
pub use set_fee_setter::*;
pub use set_pool::*;
pub use set_pool_fee::*;
pub use set_rewards_split::*;
pub use set_vesting_params::*;
pub use swap_burn_send::*;
pub use transfer_governance::*;
pub use update_general_parameters::*;
