use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::RewardSchedule;
use anchor_lang::prelude::*;

/// Process-wide timing and fee parameters, owned by governance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct GeneralParameters {
    pub hat_vesting_duration: i64,
    pub hat_vesting_periods: u32,
    pub withdraw_period: i64,
    pub safety_period: i64,
    pub reward_levels_delay: i64,
    pub withdraw_request_enable_period: i64,
    pub withdraw_request_pending_period: i64,
    /// Lamports charged by `log_claim`
    pub claim_fee: u64,
}

impl Default for GeneralParameters {
    fn default() -> Self {
        Self {
            hat_vesting_duration: 90 * DAY,
            hat_vesting_periods: 90,
            withdraw_period: 11 * HOUR,
            safety_period: HOUR,
            reward_levels_delay: 2 * DAY,
            withdraw_request_enable_period: 7 * DAY,
            withdraw_request_pending_period: 7 * DAY,
            claim_fee: 0,
        }
    }
}

impl GeneralParameters {
    /// Safety period: the last `safety_period` seconds of every
    /// `withdraw_period + safety_period` cycle.
    pub fn is_safety_period(&self, now: i64) -> Result<bool> {
        let cycle = self
            .withdraw_period
            .checked_add(self.safety_period)
            .ok_or(ErrorCode::CalculationOverflow)?;
        require!(cycle > 0, ErrorCode::DivisionByZero);
        Ok(now.rem_euclid(cycle) >= self.withdraw_period)
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.withdraw_period >= MIN_WITHDRAW_PERIOD,
            ErrorCode::WithdrawPeriodTooShort
        );
        require!(
            self.withdraw_period <= MAX_WITHDRAW_PERIOD,
            ErrorCode::WithdrawPeriodTooLong
        );
        require!(self.safety_period >= 0, ErrorCode::SafetyPeriodNegative);
        require!(
            self.safety_period <= MAX_SAFETY_PERIOD,
            ErrorCode::SafetyPeriodTooLong
        );
        require!(
            self.withdraw_request_pending_period >= 0,
            ErrorCode::WithdrawRequestPendingPeriodNegative
        );
        require!(
            self.withdraw_request_pending_period <= MAX_WITHDRAW_REQUEST_PENDING_PERIOD,
            ErrorCode::WithdrawRequestPendingPeriodTooLong
        );
        require!(
            self.withdraw_request_enable_period >= MIN_WITHDRAW_REQUEST_ENABLE_PERIOD,
            ErrorCode::WithdrawRequestEnablePeriodTooShort
        );
        require!(
            self.hat_vesting_duration < MAX_EMISSION_VESTING_DURATION,
            ErrorCode::VestingDurationTooLong
        );
        require!(self.hat_vesting_periods > 0, ErrorCode::VestingPeriodsZero);
        require!(
            self.hat_vesting_duration >= self.hat_vesting_periods as i64,
            ErrorCode::VestingDurationSmallerThanPeriods
        );
        require!(
            self.reward_levels_delay >= MIN_REWARD_LEVELS_DELAY,
            ErrorCode::RewardLevelsDelayTooShort
        );
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct VaultConfig {
    pub governance: Pubkey,
    pub fee_setter: Pubkey,
    pub reward_mint: Pubkey,      // Emission token
    pub reward_vault: Pubkey,     // Emission token account owned by this PDA
    pub vesting_program: Pubkey,  // Vesting-lock factory
    pub swap_router: Pubkey,      // Swap router program
    pub swap_intermediate_mint: Pubkey,
    pub schedule: RewardSchedule,
    pub params: GeneralParameters,
    pub pool_count: u64,
    pub approving: bool,          // Set while approve_claim runs
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl VaultConfig {
    pub const PREFIX_SEED: &'static [u8] = SEED_VAULT_CONFIG;

    pub fn is_governance(&self, key: &Pubkey) -> bool {
        self.governance == *key
    }

    pub fn transfer_governance(&mut self, new_governance: Pubkey) -> Result<Pubkey> {
        require!(new_governance != Pubkey::default(), ErrorCode::InvalidGovernance);
        Ok(std::mem::replace(&mut self.governance, new_governance))
    }

    /// The fee setter falls back to governance while unset.
    pub fn is_fee_setter(&self, key: &Pubkey) -> bool {
        if self.fee_setter == Pubkey::default() {
            self.is_governance(key)
        } else {
            self.fee_setter == *key
        }
    }
}
