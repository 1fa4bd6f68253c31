use crate::states::{GeneralParameters, RewardsSplit};
use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub governance: Pubkey,
    pub reward_mint: Pubkey,
    pub start_block: u64,
    pub period_length: u64,
    pub reward_per_block: u64,
    pub initialized_at: i64,
}

#[event]
pub struct PoolAdded {
    pub pool_id: u64,
    pub token_mint: Pubkey,
    pub committee: Pubkey,
    pub alloc_points: u64,
    pub total_alloc_points: u64,
    pub reward_levels: Vec<u16>,
    pub rewards_split: RewardsSplit,
    pub vesting_duration: i64,
    pub vesting_periods: u32,
    pub added_at: i64,
}

#[event]
pub struct PoolUpdated {
    pub pool_id: u64,
    pub alloc_points: u64,
    pub total_alloc_points: u64,
    pub deposit_paused: bool,
    pub updated_at: i64,
}

#[event]
pub struct Deposited {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub amount: u64,
    pub shares_minted: u64,
    pub total_shares: u64,
    pub pool_balance: u64,
    pub deposited_at: i64,
}

#[event]
pub struct Withdrawn {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub shares_burned: u64,
    pub amount: u64,
    pub fee: u64,
    pub withdrawn_at: i64,
}

#[event]
pub struct EmergencyWithdrawn {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub shares_burned: u64,
    pub amount: u64,
    pub fee: u64,
    pub withdrawn_at: i64,
}

/// `paid < owed` when the reward vault ran short
#[event]
pub struct RewardSent {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub paid: u64,
    pub owed: u64,
}

#[event]
pub struct WithdrawRequested {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub withdraw_enabled_at: i64,
}

#[event]
pub struct ClaimSubmitted {
    pub pool_id: u64,
    pub committee: Pubkey,
    pub beneficiary: Pubkey,
    pub severity: u8,
    pub submitted_at: i64,
}

#[event]
pub struct ClaimApproved {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    pub committee: Pubkey,
    pub severity: u8,
    pub hacker_vested: u64,
    pub hacker: u64,
    pub committee_reward: u64,
    pub swap_and_burn: u64,
    pub governance_hat: u64,
    pub hacker_hat: u64,
    pub vesting_lock: Pubkey,
    pub approved_at: i64,
}

#[event]
pub struct ClaimDismissed {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    pub dismissed_by: Pubkey,
    pub dismissed_at: i64,
}

#[event]
pub struct ClaimLogged {
    pub claimer: Pubkey,
    pub description_hash: [u8; 32],
    pub fee: u64,
    pub logged_at: i64,
}

#[event]
pub struct PendingRewardLevelsSet {
    pub pool_id: u64,
    pub reward_levels: Vec<u16>,
    pub set_at: i64,
}

#[event]
pub struct RewardLevelsSet {
    pub pool_id: u64,
    pub reward_levels: Vec<u16>,
}

#[event]
pub struct RewardsSplitSet {
    pub pool_id: u64,
    pub old_split: RewardsSplit,
    pub new_split: RewardsSplit,
}

#[event]
pub struct VestingParamsSet {
    pub pool_id: u64,
    pub duration: i64,
    pub periods: u32,
}

#[event]
pub struct CommitteeCheckedIn {
    pub pool_id: u64,
    pub committee: Pubkey,
}

#[event]
pub struct CommitteeSet {
    pub pool_id: u64,
    pub old_committee: Pubkey,
    pub new_committee: Pubkey,
}

#[event]
pub struct PoolFeeSet {
    pub pool_id: u64,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
}

#[event]
pub struct FeeSetterSet {
    pub old_fee_setter: Pubkey,
    pub new_fee_setter: Pubkey,
}

#[event]
pub struct GeneralParametersUpdated {
    pub old_params: GeneralParameters,
    pub new_params: GeneralParameters,
    pub updated_at: i64,
}

#[event]
pub struct GovernanceTransferred {
    pub old_governance: Pubkey,
    pub new_governance: Pubkey,
}

#[event]
pub struct DepositorsRewarded {
    pub pool_id: u64,
    pub sender: Pubkey,
    pub amount: u64,
    pub pool_balance: u64,
}

#[event]
pub struct SwapAndBurn {
    pub pool_id: u64,
    pub amount_swapped: u64,
    pub amount_burned: u64,
}

#[event]
pub struct SwapAndSend {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    pub amount_vested: u64,
    pub vesting_lock: Pubkey,
    pub governance_amount: u64,
}
