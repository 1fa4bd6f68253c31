use anchor_lang::prelude::*;

// Module declarations
pub mod constants;
pub mod errors;
pub mod events;
pub mod external;
pub mod instructions;
pub mod states;
pub mod utils;

// Re-export commonly used types
pub use events::*;
use instructions::*;
pub use states::*;

declare_id!("HatsVau1t1111111111111111111111111111111111");

#[program]
pub mod bounty_vault {
    use super::*;

    /// Create the vault config, allocation timeline and reward vault
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize(ctx, params)
    }

    /// Accrue a pool's emission up to the current slot
    pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
        instructions::update_pool(ctx)
    }

    // ------------------------------------------------------------ governance

    pub fn add_pool(ctx: Context<AddPool>, params: AddPoolParams) -> Result<()> {
        instructions::add_pool(ctx, params)
    }

    pub fn set_pool(ctx: Context<SetPool>, alloc_points: u64, deposit_paused: bool) -> Result<()> {
        instructions::set_pool(ctx, alloc_points, deposit_paused)
    }

    pub fn update_general_parameters(
        ctx: Context<UpdateGeneralParameters>,
        update: UpdateGeneralParams,
    ) -> Result<()> {
        instructions::update_general_parameters(ctx, update)
    }

    pub fn set_rewards_split(ctx: Context<SetRewardsSplit>, rewards_split: RewardsSplit) -> Result<()> {
        instructions::set_rewards_split(ctx, rewards_split)
    }

    pub fn set_vesting_params(ctx: Context<SetVestingParams>, duration: i64, periods: u32) -> Result<()> {
        instructions::set_vesting_params(ctx, duration, periods)
    }

    /// Fee setter (governance while unset) sets a pool's withdrawal fee
    pub fn set_pool_fee(ctx: Context<SetPoolFee>, fee_bps: u16) -> Result<()> {
        instructions::set_pool_fee(ctx, fee_bps)
    }

    pub fn set_fee_setter(ctx: Context<SetFeeSetter>, fee_setter: Pubkey) -> Result<()> {
        instructions::set_fee_setter(ctx, fee_setter)
    }

    pub fn transfer_governance(ctx: Context<TransferGovernance>, new_governance: Pubkey) -> Result<()> {
        instructions::transfer_governance(ctx, new_governance)
    }

    /// Pay out the pool's pending claim
    pub fn approve_claim(ctx: Context<ApproveClaim>) -> Result<()> {
        instructions::approve_claim(ctx)
    }

    /// Swap seized bounty shares to the emission token, then burn, vest and send
    /// Route accounts for the swap router go in remaining accounts
    pub fn swap_burn_send<'info>(
        ctx: Context<'_, '_, 'info, 'info, SwapBurnSend<'info>>,
        amount_out_minimum: u64,
        fees: [u32; 2],
    ) -> Result<()> {
        instructions::swap_burn_send(ctx, amount_out_minimum, fees)
    }

    // ------------------------------------------------------------- committee

    pub fn submit_claim(ctx: Context<SubmitClaim>, beneficiary: Pubkey, severity: u8) -> Result<()> {
        instructions::submit_claim(ctx, beneficiary, severity)
    }

    pub fn committee_check_in(ctx: Context<CommitteeCheckIn>) -> Result<()> {
        instructions::committee_check_in(ctx)
    }

    pub fn set_committee(ctx: Context<SetCommittee>, committee: Pubkey) -> Result<()> {
        instructions::set_committee(ctx, committee)
    }

    pub fn set_pending_reward_levels(
        ctx: Context<SetPendingRewardLevels>,
        reward_levels: Vec<u16>,
    ) -> Result<()> {
        instructions::set_pending_reward_levels(ctx, reward_levels)
    }

    pub fn set_reward_levels(ctx: Context<SetRewardLevels>) -> Result<()> {
        instructions::set_reward_levels(ctx)
    }

    // ------------------------------------------------------------- anyone

    /// Governance any time, anyone once the claim is stale
    pub fn dismiss_claim(ctx: Context<DismissClaim>) -> Result<()> {
        instructions::dismiss_claim(ctx)
    }

    pub fn log_claim(ctx: Context<LogClaim>, description_hash: [u8; 32]) -> Result<()> {
        instructions::log_claim(ctx, description_hash)
    }

    pub fn reward_depositors(ctx: Context<RewardDepositors>, amount: u64) -> Result<()> {
        instructions::reward_depositors(ctx, amount)
    }

    // ------------------------------------------------------------- depositor

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn withdraw_request(ctx: Context<WithdrawRequest>) -> Result<()> {
        instructions::withdraw_request(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, shares: u64) -> Result<()> {
        instructions::withdraw(ctx, shares)
    }

    /// Withdraw all principal, forfeiting pending emission reward
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw(ctx)
    }

    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward(ctx)
    }
}
