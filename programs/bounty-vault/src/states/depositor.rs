use crate::constants::SEED_DEPOSITOR;
use crate::errors::ErrorCode;
use crate::states::GeneralParameters;
use anchor_lang::prelude::*;

/// Where a depositor's withdraw request stands at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawRequestState {
    None,
    /// Requested, `pending_period` not yet over
    Pending,
    /// Withdrawals allowed
    Enabled,
    /// Enable window passed without a withdrawal
    Expired,
}

/// A depositor's position in one pool.
///
/// Reward-per-share model:
/// - shares: proportional ownership of the pool balance
/// - reward_debt: shares * reward_per_share / PRECISION at last settlement
/// - withdraw_request_at: start of the withdraw window, 0 when no request
#[account]
#[derive(InitSpace)]
pub struct DepositorInfo {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub shares: u64,
    pub reward_debt: u128,
    pub withdraw_request_at: i64,
    pub bump: u8,
}

impl DepositorInfo {
    pub const PREFIX_SEED: &'static [u8] = SEED_DEPOSITOR;

    /// Open a withdraw request. A new request is only accepted once the
    /// previous one's enable window is over, so it cannot be kept pending
    /// forever by re-requesting.
    pub fn request_withdraw(&mut self, now: i64, params: &GeneralParameters) -> Result<i64> {
        let enable_end = self
            .withdraw_request_at
            .checked_add(params.withdraw_request_enable_period)
            .ok_or(ErrorCode::CalculationOverflow)?;
        require!(now > enable_end, ErrorCode::WithdrawRequestPending);

        self.withdraw_request_at = now
            .checked_add(params.withdraw_request_pending_period)
            .ok_or(ErrorCode::CalculationOverflow)?;
        Ok(self.withdraw_request_at)
    }

    /// Consume a matured request; fails outside the enable window.
    pub fn consume_withdraw_request(&mut self, now: i64, params: &GeneralParameters) -> Result<()> {
        require!(
            self.withdraw_request_state(now, params) == WithdrawRequestState::Enabled,
            ErrorCode::WithdrawRequestInvalid
        );
        self.withdraw_request_at = 0;
        Ok(())
    }

    pub fn clear_withdraw_request(&mut self) {
        self.withdraw_request_at = 0;
    }

    pub fn withdraw_request_state(&self, now: i64, params: &GeneralParameters) -> WithdrawRequestState {
        if self.withdraw_request_at == 0 {
            return WithdrawRequestState::None;
        }
        if now <= self.withdraw_request_at {
            return WithdrawRequestState::Pending;
        }
        let enable_end = self
            .withdraw_request_at
            .saturating_add(params.withdraw_request_enable_period);
        if now < enable_end {
            WithdrawRequestState::Enabled
        } else {
            WithdrawRequestState::Expired
        }
    }
}
