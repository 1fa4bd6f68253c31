use crate::constants::{
    CLAIM_DISMISS_DELAY, MAX_FEE_BPS, MINIMUM_DEPOSIT, REWARD_PRECISION, SEED_POOL,
};
use crate::errors::ErrorCode;
use crate::states::{
    AllocationTimeline, ClaimRewards, DepositorInfo, GeneralParameters, PendingRewardLevels,
    PoolBountyConfig, RewardSchedule, RewardsSplit,
};
use crate::utils::{bps_of, mul_div_floor, to_u64};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct SubmittedClaim {
    pub beneficiary: Pubkey,
    pub severity: u8,
    /// Committee at submission time; it receives the committee share even if
    /// the committee is rotated before approval
    pub committee: Pubkey,
    pub submitted_at: i64,
}

/// Pool-token amounts converted in one `swap_burn_send`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapAmounts {
    pub swap_and_burn: u64,
    pub governance_hat: u64,
    pub hacker_hat: u64,
}

/// How the emission tokens bought by a swap are divided
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutputSplit {
    pub burn: u64,
    pub hacker: u64,
    pub governance: u64,
}

impl SwapAmounts {
    pub fn total(&self) -> Result<u64> {
        self.swap_and_burn
            .checked_add(self.governance_hat)
            .and_then(|x| x.checked_add(self.hacker_hat))
            .ok_or_else(|| error!(ErrorCode::CalculationOverflow))
    }

    /// Pro-rata split of `received`; rounding dust goes to governance.
    pub fn split_output(&self, received: u64) -> Result<SwapOutputSplit> {
        let total = self.total()? as u128;
        let burn = to_u64(mul_div_floor(received as u128, self.swap_and_burn as u128, total)?)?;
        let hacker = to_u64(mul_div_floor(received as u128, self.hacker_hat as u128, total)?)?;
        Ok(SwapOutputSplit {
            burn,
            hacker,
            governance: received - burn - hacker,
        })
    }
}

/// Bounty pool backed by one deposit token.
///
/// `balance` is the principal backing bounties. Depositors own it through
/// `total_shares`; emission rewards accrue separately through the
/// reward-per-share accumulator.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub pool_id: u64,
    pub token_mint: Pubkey,
    pub token_vault: Pubkey,
    pub committee: Pubkey,

    // Emission ledger
    pub alloc_points: u64,
    pub last_reward_block: u64,
    pub reward_per_share: u128, // Scaled by REWARD_PRECISION
    pub last_processed_checkpoint: u32,

    // Principal
    pub total_shares: u64,
    pub balance: u64,
    pub withdrawal_fee_bps: u16,
    pub deposit_paused: bool,

    pub bounty: PoolBountyConfig,
    pub pending_reward_levels: Option<PendingRewardLevels>,
    pub submitted_claim: Option<SubmittedClaim>,

    // Seized principal waiting for swap_burn_send
    pub swap_and_burn: u64,
    pub governance_hat_reward: u64,
    pub hacker_hat_reward_total: u64,

    pub vault_bump: u8,
    pub bump: u8,
}

impl Pool {
    pub const PREFIX_SEED: &'static [u8] = SEED_POOL;

    // ---------------------------------------------------------------- ledger

    /// Accrue emission up to `current_block`. Must run before any share change.
    ///
    /// With no shares outstanding the interval is skipped and its emission is
    /// forfeited.
    pub fn settle(
        &mut self,
        current_block: u64,
        timeline: &AllocationTimeline,
        schedule: &RewardSchedule,
    ) -> Result<u64> {
        if current_block <= self.last_reward_block {
            return Ok(0);
        }
        let latest = timeline.latest_index();
        if self.total_shares == 0 {
            self.last_reward_block = current_block;
            self.last_processed_checkpoint = latest;
            return Ok(0);
        }

        let reward = self.accrued_since_last_settlement(current_block, timeline, schedule)?;
        self.reward_per_share = self
            .reward_per_share
            .checked_add(mul_div_floor(reward, REWARD_PRECISION, self.total_shares as u128)?)
            .ok_or(ErrorCode::CalculationOverflow)?;
        self.last_reward_block = current_block;
        self.last_processed_checkpoint = latest;
        to_u64(reward)
    }

    fn accrued_since_last_settlement(
        &self,
        current_block: u64,
        timeline: &AllocationTimeline,
        schedule: &RewardSchedule,
    ) -> Result<u128> {
        timeline.pool_reward(
            schedule,
            self.alloc_points,
            self.last_reward_block,
            self.last_processed_checkpoint,
            current_block,
        )
    }

    /// Reward owed to `depositor` if the pool were settled at `current_block`.
    /// Read-only.
    pub fn pending_reward(
        &self,
        depositor: &DepositorInfo,
        current_block: u64,
        timeline: &AllocationTimeline,
        schedule: &RewardSchedule,
    ) -> Result<u64> {
        let mut reward_per_share = self.reward_per_share;
        if current_block > self.last_reward_block && self.total_shares > 0 {
            let reward = self.accrued_since_last_settlement(current_block, timeline, schedule)?;
            reward_per_share = reward_per_share
                .checked_add(mul_div_floor(reward, REWARD_PRECISION, self.total_shares as u128)?)
                .ok_or(ErrorCode::CalculationOverflow)?;
        }
        Self::owed(depositor, reward_per_share)
    }

    /// Reward owed at the current accumulator, without accruing.
    pub fn settled_reward(&self, depositor: &DepositorInfo) -> Result<u64> {
        Self::owed(depositor, self.reward_per_share)
    }

    fn owed(depositor: &DepositorInfo, reward_per_share: u128) -> Result<u64> {
        let accumulated = mul_div_floor(depositor.shares as u128, reward_per_share, REWARD_PRECISION)?;
        to_u64(
            accumulated
                .checked_sub(depositor.reward_debt)
                .ok_or(ErrorCode::CalculationOverflow)?,
        )
    }

    fn update_reward_debt(&self, depositor: &mut DepositorInfo) -> Result<()> {
        depositor.reward_debt =
            mul_div_floor(depositor.shares as u128, self.reward_per_share, REWARD_PRECISION)?;
        Ok(())
    }

    /// Mark the depositor's accrued reward as paid out.
    pub fn checkpoint_depositor(&self, depositor: &mut DepositorInfo) -> Result<()> {
        self.update_reward_debt(depositor)
    }

    // ------------------------------------------------------- share accounting

    pub fn ensure_can_deposit(&self, amount: u64) -> Result<()> {
        require!(!self.deposit_paused, ErrorCode::DepositPaused);
        require!(amount >= MINIMUM_DEPOSIT, ErrorCode::DepositBelowMinimum);
        require!(
            self.bounty.committee_checked_in,
            ErrorCode::CommitteeNotCheckedIn
        );
        Ok(())
    }

    pub fn shares_for_deposit(&self, amount: u64) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(amount);
        }
        to_u64(mul_div_floor(
            amount as u128,
            self.total_shares as u128,
            self.balance as u128,
        )?)
    }

    pub fn principal_for_shares(&self, shares: u64) -> Result<u64> {
        to_u64(mul_div_floor(
            shares as u128,
            self.balance as u128,
            self.total_shares as u128,
        )?)
    }

    /// Mint shares for `amount` of principal. The ledger must already be
    /// settled and the depositor's pending reward paid.
    pub fn apply_deposit(&mut self, depositor: &mut DepositorInfo, amount: u64) -> Result<u64> {
        let shares = self.shares_for_deposit(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(ErrorCode::CalculationOverflow)?;
        depositor.shares = depositor
            .shares
            .checked_add(shares)
            .ok_or(ErrorCode::CalculationOverflow)?;
        self.update_reward_debt(depositor)?;
        Ok(shares)
    }

    /// Burn `shares` and release their principal. Returns `(payout, fee)`.
    pub fn apply_withdraw(&mut self, depositor: &mut DepositorInfo, shares: u64) -> Result<(u64, u64)> {
        require!(shares <= depositor.shares, ErrorCode::InsufficientShares);
        let amount = self.burn_shares(depositor, shares)?;
        self.update_reward_debt(depositor)?;
        self.split_fee(amount)
    }

    /// Burn every share the depositor holds without touching the ledger.
    /// Whatever emission reward was pending is forfeited.
    pub fn apply_emergency_withdraw(&mut self, depositor: &mut DepositorInfo) -> Result<(u64, u64)> {
        require!(depositor.shares > 0, ErrorCode::NoShares);
        let shares = depositor.shares;
        let amount = self.burn_shares(depositor, shares)?;
        depositor.reward_debt = 0;
        self.split_fee(amount)
    }

    fn burn_shares(&mut self, depositor: &mut DepositorInfo, shares: u64) -> Result<u64> {
        if shares == 0 {
            return Ok(0);
        }
        let amount = self.principal_for_shares(shares)?;
        depositor.shares -= shares;
        self.total_shares = self
            .total_shares
            .checked_sub(shares)
            .ok_or(ErrorCode::CalculationOverflow)?;
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        Ok(amount)
    }

    fn split_fee(&self, amount: u64) -> Result<(u64, u64)> {
        let fee = bps_of(amount, self.withdrawal_fee_bps as u64)?;
        Ok((amount - fee, fee))
    }

    /// Add principal without minting shares, raising every share's value.
    pub fn inject_reward(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        require!(
            new_balance / MINIMUM_DEPOSIT < self.total_shares,
            ErrorCode::RewardInjectionTooBig
        );
        self.balance = new_balance;
        Ok(())
    }

    pub fn set_withdrawal_fee(&mut self, fee_bps: u16) -> Result<u16> {
        require!(fee_bps <= MAX_FEE_BPS, ErrorCode::FeeTooHigh);
        Ok(std::mem::replace(&mut self.withdrawal_fee_bps, fee_bps))
    }

    /// Ordinary withdrawals are closed while a claim is pending and during
    /// the safety period.
    pub fn ensure_withdrawals_open(&self, now: i64, params: &GeneralParameters) -> Result<()> {
        require!(self.submitted_claim.is_none(), ErrorCode::ClaimAlreadySubmitted);
        require!(!params.is_safety_period(now)?, ErrorCode::SafetyPeriod);
        Ok(())
    }

    // -------------------------------------------------------- claim lifecycle

    pub fn submit_claim(
        &mut self,
        committee: &Pubkey,
        beneficiary: Pubkey,
        severity: u8,
        now: i64,
        params: &GeneralParameters,
    ) -> Result<()> {
        require!(*committee == self.committee, ErrorCode::NotCommittee);
        require!(self.submitted_claim.is_none(), ErrorCode::ClaimAlreadySubmitted);
        require!(beneficiary != Pubkey::default(), ErrorCode::InvalidBeneficiary);
        require!(params.is_safety_period(now)?, ErrorCode::NotSafetyPeriod);
        require!(
            (severity as usize) < self.bounty.reward_levels.len(),
            ErrorCode::SeverityOutOfRange
        );

        self.submitted_claim = Some(SubmittedClaim {
            beneficiary,
            severity,
            committee: *committee,
            submitted_at: now,
        });
        Ok(())
    }

    /// Governance may dismiss at any time; anyone may once the claim is stale.
    pub fn dismiss_claim(&mut self, caller_is_governance: bool, now: i64) -> Result<SubmittedClaim> {
        let claim = self.submitted_claim.ok_or(ErrorCode::NoActiveClaim)?;
        if !caller_is_governance {
            let stale_at = claim
                .submitted_at
                .checked_add(CLAIM_DISMISS_DELAY)
                .ok_or(ErrorCode::CalculationOverflow)?;
            require!(now > stale_at, ErrorCode::DismissTooEarly);
        }
        self.submitted_claim = None;
        Ok(claim)
    }

    /// Remove the pending claim and carve its payout out of the balance.
    ///
    /// Swap-and-burn, governance and hacker emission-token shares stay in
    /// the vault and are booked here; the caller moves the rest.
    pub fn take_claim_for_approval(&mut self) -> Result<(SubmittedClaim, ClaimRewards)> {
        let claim = self.submitted_claim.take().ok_or(ErrorCode::NoActiveClaim)?;
        let rewards = self.bounty.calc_claim_rewards(self.balance, claim.severity)?;

        self.balance = self
            .balance
            .checked_sub(rewards.total()?)
            .ok_or(ErrorCode::CalculationOverflow)?;
        assert!(self.balance > 0, "pool balance exhausted by claim approval");

        self.swap_and_burn = self
            .swap_and_burn
            .checked_add(rewards.swap_and_burn)
            .ok_or(ErrorCode::CalculationOverflow)?;
        self.governance_hat_reward = self
            .governance_hat_reward
            .checked_add(rewards.governance_hat)
            .ok_or(ErrorCode::CalculationOverflow)?;
        self.hacker_hat_reward_total = self
            .hacker_hat_reward_total
            .checked_add(rewards.hacker_hat)
            .ok_or(ErrorCode::CalculationOverflow)?;
        Ok((claim, rewards))
    }

    /// Drain the pool's swap-and-burn and governance accumulators together
    /// with one beneficiary's hacker share.
    pub fn take_swap_amounts(&mut self, hacker_hat: u64) -> Result<SwapAmounts> {
        let amounts = SwapAmounts {
            swap_and_burn: self.swap_and_burn,
            governance_hat: self.governance_hat_reward,
            hacker_hat,
        };
        require!(amounts.total()? > 0, ErrorCode::NothingToSwap);
        self.hacker_hat_reward_total = self
            .hacker_hat_reward_total
            .checked_sub(hacker_hat)
            .ok_or(ErrorCode::CalculationOverflow)?;
        self.swap_and_burn = 0;
        self.governance_hat_reward = 0;
        Ok(amounts)
    }

    // ------------------------------------------------- committee / governance

    pub fn check_in_committee(&mut self, caller: &Pubkey) -> Result<()> {
        require!(*caller == self.committee, ErrorCode::NotCommittee);
        self.bounty.committee_checked_in = true;
        Ok(())
    }

    /// Governance can rotate the committee until it checks in; afterwards only
    /// the committee itself can hand over.
    pub fn set_committee(&mut self, caller: &Pubkey, is_governance: bool, committee: Pubkey) -> Result<Pubkey> {
        require!(committee != Pubkey::default(), ErrorCode::InvalidCommittee);
        if is_governance && *caller != self.committee {
            require!(
                !self.bounty.committee_checked_in,
                ErrorCode::CommitteeAlreadyCheckedIn
            );
        } else {
            require!(*caller == self.committee, ErrorCode::NotCommittee);
        }
        Ok(std::mem::replace(&mut self.committee, committee))
    }

    pub fn set_pending_reward_levels(&mut self, caller: &Pubkey, levels: Vec<u16>, now: i64) -> Result<()> {
        require!(*caller == self.committee, ErrorCode::NotCommittee);
        require!(self.submitted_claim.is_none(), ErrorCode::ClaimAlreadySubmitted);
        self.pending_reward_levels = Some(PendingRewardLevels {
            timestamp: now,
            levels: PoolBountyConfig::checked_reward_levels(levels)?,
        });
        Ok(())
    }

    pub fn activate_reward_levels(&mut self, caller: &Pubkey, now: i64, params: &GeneralParameters) -> Result<Vec<u16>> {
        require!(*caller == self.committee, ErrorCode::NotCommittee);
        require!(self.submitted_claim.is_none(), ErrorCode::ClaimAlreadySubmitted);
        let pending = self
            .pending_reward_levels
            .as_ref()
            .ok_or(ErrorCode::NoPendingRewardLevels)?;
        require!(
            now - pending.timestamp > params.reward_levels_delay,
            ErrorCode::RewardLevelsDelayNotElapsed
        );
        let levels = pending.levels.clone();
        self.bounty.reward_levels = levels.clone();
        self.pending_reward_levels = None;
        Ok(levels)
    }

    pub fn set_rewards_split(&mut self, split: RewardsSplit, now: i64, params: &GeneralParameters) -> Result<()> {
        split.validate()?;
        require!(self.submitted_claim.is_none(), ErrorCode::ClaimAlreadySubmitted);
        require!(!params.is_safety_period(now)?, ErrorCode::SafetyPeriod);
        self.bounty.rewards_split = split;
        Ok(())
    }

    pub fn set_vesting_params(&mut self, duration: i64, periods: u32) -> Result<()> {
        PoolBountyConfig::validate_vesting(duration, periods)?;
        self.bounty.vesting_duration = duration;
        self.bounty.vesting_periods = periods;
        Ok(())
    }

    /// Settle with the old weight, then switch the pool to `alloc_points`.
    pub fn set_alloc_points(
        &mut self,
        alloc_points: u64,
        current_block: u64,
        timeline: &mut AllocationTimeline,
        schedule: &RewardSchedule,
    ) -> Result<()> {
        self.settle(current_block, timeline, schedule)?;
        let total = timeline
            .total_alloc_points()
            .checked_sub(self.alloc_points)
            .and_then(|t| t.checked_add(alloc_points))
            .ok_or(ErrorCode::CalculationOverflow)?;
        timeline.record_allocation_change(current_block, total)?;
        self.alloc_points = alloc_points;
        self.last_processed_checkpoint = timeline.latest_index();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_REWARD_LEVELS, HOUR, MULTIPLIERS_LENGTH};

    const NOW_WITHDRAW: i64 = 1_000 * 12 * HOUR; // start of a withdraw window
    const NOW_SAFETY: i64 = NOW_WITHDRAW + 11 * HOUR; // start of a safety period

    fn schedule() -> RewardSchedule {
        RewardSchedule {
            start_block: 0,
            period_length: 1_000_000,
            reward_per_block: 100,
            multipliers: [100; MULTIPLIERS_LENGTH],
        }
    }

    fn timeline(block: u64, total: u64) -> AllocationTimeline {
        let mut t = AllocationTimeline { checkpoints: Vec::new(), bump: 255 };
        t.record_allocation_change(block, total).unwrap();
        t
    }

    fn pool(committee: Pubkey) -> Pool {
        Pool {
            pool_id: 0,
            token_mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            committee,
            alloc_points: 100,
            last_reward_block: 0,
            reward_per_share: 0,
            last_processed_checkpoint: 0,
            total_shares: 0,
            balance: 0,
            withdrawal_fee_bps: 0,
            deposit_paused: false,
            bounty: PoolBountyConfig {
                reward_levels: DEFAULT_REWARD_LEVELS.to_vec(),
                rewards_split: RewardsSplit::default(),
                committee_checked_in: true,
                vesting_duration: 30 * 86_400,
                vesting_periods: 30,
            },
            pending_reward_levels: None,
            submitted_claim: None,
            swap_and_burn: 0,
            governance_hat_reward: 0,
            hacker_hat_reward_total: 0,
            vault_bump: 255,
            bump: 255,
        }
    }

    fn depositor() -> DepositorInfo {
        DepositorInfo {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            shares: 0,
            reward_debt: 0,
            withdraw_request_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn first_deposit_mints_one_to_one() {
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();
        assert_eq!(p.apply_deposit(&mut d, 5_000_000).unwrap(), 5_000_000);
        assert_eq!(p.total_shares, 5_000_000);
        assert_eq!(p.balance, 5_000_000);
    }

    #[test]
    fn deposit_after_balance_growth_mints_fewer_shares() {
        let mut p = pool(Pubkey::new_unique());
        let mut a = depositor();
        let mut b = depositor();
        p.apply_deposit(&mut a, 10_000_000).unwrap();
        p.balance = 20_000_000; // bounty backing doubled by a reward injection
        assert_eq!(p.apply_deposit(&mut b, 10_000_000).unwrap(), 5_000_000);
        assert_eq!(p.principal_for_shares(5_000_000).unwrap(), 10_000_000);
    }

    #[test]
    fn deposit_then_withdraw_returns_principal_minus_fee() {
        let s = schedule();
        let t = timeline(0, 100);
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();

        p.settle(10, &t, &s).unwrap();
        let shares = p.apply_deposit(&mut d, 7_000_000).unwrap();
        // same block: nothing accrues
        p.settle(10, &t, &s).unwrap();
        assert_eq!(p.settled_reward(&d).unwrap(), 0);
        assert_eq!(p.apply_withdraw(&mut d, shares).unwrap(), (7_000_000, 0));
        assert_eq!(p.balance, 0);
        assert_eq!(p.total_shares, 0);

        p.set_withdrawal_fee(200).unwrap();
        let shares = p.apply_deposit(&mut d, 7_000_000).unwrap();
        assert_eq!(p.apply_withdraw(&mut d, shares).unwrap(), (6_860_000, 140_000));
    }

    #[test]
    fn withdraw_more_than_owned_is_rejected() {
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();
        p.apply_deposit(&mut d, 1_000_000).unwrap();
        assert_eq!(
            p.apply_withdraw(&mut d, 1_000_001).unwrap_err(),
            error!(ErrorCode::InsufficientShares)
        );
    }

    #[test]
    fn deposit_guards() {
        let mut p = pool(Pubkey::new_unique());
        assert_eq!(
            p.ensure_can_deposit(MINIMUM_DEPOSIT - 1).unwrap_err(),
            error!(ErrorCode::DepositBelowMinimum)
        );
        p.deposit_paused = true;
        assert_eq!(
            p.ensure_can_deposit(MINIMUM_DEPOSIT).unwrap_err(),
            error!(ErrorCode::DepositPaused)
        );
        p.deposit_paused = false;
        p.bounty.committee_checked_in = false;
        assert_eq!(
            p.ensure_can_deposit(MINIMUM_DEPOSIT).unwrap_err(),
            error!(ErrorCode::CommitteeNotCheckedIn)
        );
    }

    #[test]
    fn emission_split_pro_rata() {
        // 4 blocks * 100 per block at 1x for the only pool = 400 units
        let s = schedule();
        let t = timeline(0, 100);
        let mut p = pool(Pubkey::new_unique());
        let mut a = depositor();
        let mut b = depositor();

        p.settle(10, &t, &s).unwrap();
        p.apply_deposit(&mut a, 100).unwrap();
        p.apply_deposit(&mut b, 300).unwrap();

        assert_eq!(p.pending_reward(&a, 14, &t, &s).unwrap(), 100);
        assert_eq!(p.pending_reward(&b, 14, &t, &s).unwrap(), 300);

        assert_eq!(p.settle(14, &t, &s).unwrap(), 400);
        assert_eq!(p.settled_reward(&a).unwrap(), 100);
        assert_eq!(p.settled_reward(&b).unwrap(), 300);
    }

    #[test]
    fn reward_follows_shares_at_settlement_not_deposit_order() {
        let s = schedule();
        let t = timeline(0, 100);
        let mut p = pool(Pubkey::new_unique());
        let mut a = depositor();
        let mut b = depositor();

        // B deposits first but with fewer shares
        p.settle(10, &t, &s).unwrap();
        p.apply_deposit(&mut b, 1_000_000).unwrap();
        p.apply_deposit(&mut a, 3_000_000).unwrap();
        p.settle(20, &t, &s).unwrap();

        assert_eq!(p.settled_reward(&a).unwrap(), 750);
        assert_eq!(p.settled_reward(&b).unwrap(), 250);
    }

    #[test]
    fn pending_projection_matches_settlement() {
        let s = schedule();
        let t = timeline(0, 300);
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();
        p.settle(5, &t, &s).unwrap();
        p.apply_deposit(&mut d, 3_000_000).unwrap();

        let projected = p.pending_reward(&d, 50, &t, &s).unwrap();
        assert_eq!(p.last_reward_block, 5);
        p.settle(50, &t, &s).unwrap();
        assert_eq!(p.settled_reward(&d).unwrap(), projected);
        assert_eq!(projected, 45 * 100 / 3);
    }

    #[test]
    fn empty_pool_forfeits_emission() {
        let s = schedule();
        let t = timeline(0, 100);
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();

        assert_eq!(p.settle(50, &t, &s).unwrap(), 0);
        assert_eq!(p.last_reward_block, 50);
        p.apply_deposit(&mut d, 1_000_000).unwrap();
        assert_eq!(p.pending_reward(&d, 51, &t, &s).unwrap(), 100);
    }

    #[test]
    fn emergency_withdraw_forfeits_pending_reward() {
        let s = schedule();
        let t = timeline(0, 100);
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();
        p.settle(1, &t, &s).unwrap();
        p.apply_deposit(&mut d, 2_000_000).unwrap();
        assert!(p.pending_reward(&d, 30, &t, &s).unwrap() > 0);

        assert_eq!(p.apply_emergency_withdraw(&mut d).unwrap(), (2_000_000, 0));
        assert_eq!(d.shares, 0);
        assert_eq!(d.reward_debt, 0);
        assert_eq!(p.pending_reward(&d, 30, &t, &s).unwrap(), 0);
        assert_eq!(
            p.apply_emergency_withdraw(&mut d).unwrap_err(),
            error!(ErrorCode::NoShares)
        );
    }

    #[test]
    fn alloc_change_settles_with_old_weight() {
        let s = schedule();
        let mut t = timeline(0, 100);
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();
        p.settle(0, &t, &s).unwrap();
        p.apply_deposit(&mut d, 1_000_000).unwrap();

        // another pool joins at block 10 with weight 300
        t.record_allocation_change(10, 400).unwrap();
        p.set_alloc_points(100, 20, &mut t, &s).unwrap();
        // blocks 0..10 at 100%, 10..20 at 25%
        assert_eq!(p.settled_reward(&d).unwrap(), 1_000 + 250);
        assert_eq!(t.total_alloc_points(), 400);

        p.set_alloc_points(300, 30, &mut t, &s).unwrap();
        assert_eq!(t.total_alloc_points(), 600);
        assert_eq!(p.last_processed_checkpoint, t.latest_index());
    }

    #[test]
    fn reward_injection_bound() {
        let mut p = pool(Pubkey::new_unique());
        let mut d = depositor();
        p.apply_deposit(&mut d, 10 * MINIMUM_DEPOSIT).unwrap();
        p.inject_reward(MINIMUM_DEPOSIT).unwrap();
        assert_eq!(p.balance, 11 * MINIMUM_DEPOSIT);
        assert_eq!(
            p.inject_reward(u64::MAX / 2).unwrap_err(),
            error!(ErrorCode::RewardInjectionTooBig)
        );
        assert_eq!(p.inject_reward(0).unwrap_err(), error!(ErrorCode::InvalidAmount));
    }

    #[test]
    fn withdrawal_fee_cap() {
        let mut p = pool(Pubkey::new_unique());
        assert_eq!(p.set_withdrawal_fee(150).unwrap(), 0);
        assert_eq!(p.set_withdrawal_fee(200).unwrap(), 150);
        assert_eq!(p.set_withdrawal_fee(201).unwrap_err(), error!(ErrorCode::FeeTooHigh));
    }

    // ------------------------------------------------------------- claims

    #[test]
    fn claim_only_in_safety_period() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        let hacker = Pubkey::new_unique();

        assert_eq!(
            p.submit_claim(&committee, hacker, 1, NOW_WITHDRAW, &params).unwrap_err(),
            error!(ErrorCode::NotSafetyPeriod)
        );
        assert_eq!(
            p.submit_claim(&committee, hacker, 1, NOW_SAFETY - 1, &params).unwrap_err(),
            error!(ErrorCode::NotSafetyPeriod)
        );
        p.submit_claim(&committee, hacker, 1, NOW_SAFETY, &params).unwrap();
        assert_eq!(p.submitted_claim.unwrap().committee, committee);
    }

    #[test]
    fn claim_guards() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        let hacker = Pubkey::new_unique();

        assert_eq!(
            p.submit_claim(&Pubkey::new_unique(), hacker, 0, NOW_SAFETY, &params).unwrap_err(),
            error!(ErrorCode::NotCommittee)
        );
        assert_eq!(
            p.submit_claim(&committee, Pubkey::default(), 0, NOW_SAFETY, &params).unwrap_err(),
            error!(ErrorCode::InvalidBeneficiary)
        );
        assert_eq!(
            p.submit_claim(&committee, hacker, 4, NOW_SAFETY, &params).unwrap_err(),
            error!(ErrorCode::SeverityOutOfRange)
        );
        p.submit_claim(&committee, hacker, 3, NOW_SAFETY, &params).unwrap();
        assert_eq!(
            p.submit_claim(&committee, hacker, 0, NOW_SAFETY + 1, &params).unwrap_err(),
            error!(ErrorCode::ClaimAlreadySubmitted)
        );
    }

    #[test]
    fn pending_claim_blocks_matured_withdraw_request() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        let mut d = depositor();
        p.apply_deposit(&mut d, 1_000_000).unwrap();

        // request matures in the withdraw window of a later cycle
        let requested_at = NOW_WITHDRAW - params.withdraw_request_pending_period;
        d.request_withdraw(requested_at, &params).unwrap();

        p.submit_claim(&committee, Pubkey::new_unique(), 0, NOW_SAFETY - 12 * HOUR, &params)
            .unwrap();
        let now = NOW_WITHDRAW + 1;
        assert_eq!(
            d.withdraw_request_state(now, &params),
            crate::states::WithdrawRequestState::Enabled
        );
        assert_eq!(
            p.ensure_withdrawals_open(now, &params).unwrap_err(),
            error!(ErrorCode::ClaimAlreadySubmitted)
        );

        p.dismiss_claim(true, now).unwrap();
        p.ensure_withdrawals_open(now, &params).unwrap();
        assert_eq!(
            p.ensure_withdrawals_open(NOW_SAFETY, &params).unwrap_err(),
            error!(ErrorCode::SafetyPeriod)
        );
    }

    #[test]
    fn stale_claim_can_be_dismissed_by_anyone() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        p.submit_claim(&committee, Pubkey::new_unique(), 0, NOW_SAFETY, &params).unwrap();

        assert_eq!(
            p.dismiss_claim(false, NOW_SAFETY + CLAIM_DISMISS_DELAY).unwrap_err(),
            error!(ErrorCode::DismissTooEarly)
        );
        p.dismiss_claim(false, NOW_SAFETY + CLAIM_DISMISS_DELAY + 1).unwrap();
        assert!(p.submitted_claim.is_none());
        assert_eq!(
            p.dismiss_claim(true, NOW_SAFETY).unwrap_err(),
            error!(ErrorCode::NoActiveClaim)
        );
    }

    #[test]
    fn approval_carves_claim_out_of_balance() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        let mut d = depositor();
        p.apply_deposit(&mut d, 100_000).unwrap();
        let hacker = Pubkey::new_unique();
        p.submit_claim(&committee, hacker, 1, NOW_SAFETY, &params).unwrap();

        // committee rotated before approval
        p.committee = Pubkey::new_unique();

        let (claim, rewards) = p.take_claim_for_approval().unwrap();
        assert_eq!(claim.beneficiary, hacker);
        assert_eq!(claim.committee, committee);
        assert_eq!(rewards.hacker_vested, 24_000);
        assert_eq!(rewards.hacker, 8_000);
        assert_eq!(rewards.committee, 2_000);
        assert_eq!(rewards.swap_and_burn, 0);
        assert_eq!(rewards.governance_hat, 4_000);
        assert_eq!(rewards.hacker_hat, 2_000);
        assert_eq!(p.balance, 60_000);
        assert_eq!(p.governance_hat_reward, 4_000);
        assert_eq!(p.hacker_hat_reward_total, 2_000);
        assert!(p.submitted_claim.is_none());
        assert_eq!(
            p.take_claim_for_approval().unwrap_err(),
            error!(ErrorCode::NoActiveClaim)
        );
    }

    #[test]
    fn highest_severity_leaves_backing() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        p.bounty.reward_levels = vec![9999];
        for balance in [1u64, 10_000, 123_456_789] {
            p.balance = balance;
            p.submit_claim(&committee, Pubkey::new_unique(), 0, NOW_SAFETY, &params).unwrap();
            p.take_claim_for_approval().unwrap();
            assert!(p.balance > 0);
        }
    }

    #[test]
    fn swap_drains_accumulators_and_splits_output() {
        let committee = Pubkey::new_unique();
        let mut p = pool(committee);
        p.swap_and_burn = 1_000;
        p.governance_hat_reward = 3_000;
        p.hacker_hat_reward_total = 6_000;

        let amounts = p.take_swap_amounts(2_000).unwrap();
        assert_eq!(amounts.total().unwrap(), 6_000);
        assert_eq!(p.swap_and_burn, 0);
        assert_eq!(p.governance_hat_reward, 0);
        assert_eq!(p.hacker_hat_reward_total, 4_000);

        let split = amounts.split_output(601).unwrap();
        assert_eq!(split.burn, 100);
        assert_eq!(split.hacker, 200);
        assert_eq!(split.governance, 301);

        assert_eq!(
            p.take_swap_amounts(0).unwrap_err(),
            error!(ErrorCode::NothingToSwap)
        );
    }

    #[test]
    fn reward_levels_change_waits_for_delay() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        let t0 = 1_000_000;

        assert_eq!(
            p.activate_reward_levels(&committee, t0, &params).unwrap_err(),
            error!(ErrorCode::NoPendingRewardLevels)
        );
        p.set_pending_reward_levels(&committee, vec![1000, 9000], t0).unwrap();
        assert_eq!(
            p.activate_reward_levels(&committee, t0 + params.reward_levels_delay, &params)
                .unwrap_err(),
            error!(ErrorCode::RewardLevelsDelayNotElapsed)
        );
        let levels = p
            .activate_reward_levels(&committee, t0 + params.reward_levels_delay + 1, &params)
            .unwrap();
        assert_eq!(levels, vec![1000, 9000]);
        assert_eq!(p.bounty.reward_levels, vec![1000, 9000]);
        assert!(p.pending_reward_levels.is_none());
    }

    #[test]
    fn committee_rotation_rules() {
        let committee = Pubkey::new_unique();
        let governance = Pubkey::new_unique();
        let mut p = pool(committee);
        p.bounty.committee_checked_in = false;

        let next = Pubkey::new_unique();
        assert_eq!(p.set_committee(&governance, true, next).unwrap(), committee);
        p.check_in_committee(&next).unwrap();

        assert_eq!(
            p.set_committee(&governance, true, committee).unwrap_err(),
            error!(ErrorCode::CommitteeAlreadyCheckedIn)
        );
        assert_eq!(
            p.set_committee(&Pubkey::new_unique(), false, committee).unwrap_err(),
            error!(ErrorCode::NotCommittee)
        );
        assert_eq!(p.set_committee(&next, false, committee).unwrap(), next);
    }

    #[test]
    fn split_change_blocked_by_claim_and_safety_period() {
        let committee = Pubkey::new_unique();
        let params = GeneralParameters::default();
        let mut p = pool(committee);
        let split = RewardsSplit { hacker_vested: 5000, hacker: 5000, committee: 0, swap_and_burn: 0, governance_hat: 0, hacker_hat: 0 };

        assert_eq!(
            p.set_rewards_split(split, NOW_SAFETY, &params).unwrap_err(),
            error!(ErrorCode::SafetyPeriod)
        );
        p.set_rewards_split(split, NOW_WITHDRAW, &params).unwrap();
        assert_eq!(p.bounty.rewards_split, split);

        let bad = RewardsSplit { hacker: 4999, ..split };
        assert_eq!(
            p.set_rewards_split(bad, NOW_WITHDRAW, &params).unwrap_err(),
            error!(ErrorCode::InvalidRewardsSplit)
        );
    }
}
