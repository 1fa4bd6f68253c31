use crate::constants::{
    DEFAULT_REWARD_LEVELS, HUNDRED_PERCENT, MAX_POOL_VESTING_DURATION, MAX_REWARD_LEVELS,
};
use crate::errors::ErrorCode;
use crate::utils::{mul_div_floor, to_u64};
use anchor_lang::prelude::*;

/// How an approved claim is divided, in basis points of the claimed amount.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct RewardsSplit {
    pub hacker_vested: u16,
    pub hacker: u16,
    pub committee: u16,
    pub swap_and_burn: u16,
    pub governance_hat: u16,
    pub hacker_hat: u16,
}

impl Default for RewardsSplit {
    fn default() -> Self {
        Self {
            hacker_vested: 6000,
            hacker: 2000,
            committee: 500,
            swap_and_burn: 0,
            governance_hat: 1000,
            hacker_hat: 500,
        }
    }
}

impl RewardsSplit {
    pub fn total(&self) -> u64 {
        [
            self.hacker_vested,
            self.hacker,
            self.committee,
            self.swap_and_burn,
            self.governance_hat,
            self.hacker_hat,
        ]
        .iter()
        .map(|&bps| bps as u64)
        .sum()
    }

    fn zeroed() -> Self {
        Self {
            hacker_vested: 0,
            hacker: 0,
            committee: 0,
            swap_and_burn: 0,
            governance_hat: 0,
            hacker_hat: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(self.total() == HUNDRED_PERCENT, ErrorCode::InvalidRewardsSplit);
        Ok(())
    }

    /// An all-zero split means "use the default"; anything else is kept
    /// as given and must pass `validate`.
    pub fn or_default(self) -> Self {
        if self == Self::zeroed() {
            Self::default()
        } else {
            self
        }
    }
}

/// Absolute token amounts of an approved claim.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimRewards {
    pub hacker_vested: u64,
    pub hacker: u64,
    pub committee: u64,
    pub swap_and_burn: u64,
    pub governance_hat: u64,
    pub hacker_hat: u64,
}

impl ClaimRewards {
    pub fn total(&self) -> Result<u64> {
        [
            self.hacker,
            self.committee,
            self.swap_and_burn,
            self.governance_hat,
            self.hacker_hat,
        ]
        .iter()
        .try_fold(self.hacker_vested, |acc, &x| acc.checked_add(x))
        .ok_or_else(|| error!(ErrorCode::CalculationOverflow))
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRewardLevels {
    pub timestamp: i64,
    #[max_len(10)]
    pub levels: Vec<u16>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct PoolBountyConfig {
    /// Share of the pool balance paid per severity, in basis points
    #[max_len(10)]
    pub reward_levels: Vec<u16>,
    pub rewards_split: RewardsSplit,
    pub committee_checked_in: bool,
    pub vesting_duration: i64,
    pub vesting_periods: u32,
}

impl PoolBountyConfig {
    /// Validates reward levels; an empty list selects the default levels.
    pub fn checked_reward_levels(levels: Vec<u16>) -> Result<Vec<u16>> {
        if levels.is_empty() {
            return Ok(DEFAULT_REWARD_LEVELS.to_vec());
        }
        require!(levels.len() <= MAX_REWARD_LEVELS, ErrorCode::TooManyRewardLevels);
        for &level in levels.iter() {
            require!((level as u64) < HUNDRED_PERCENT, ErrorCode::RewardLevelTooHigh);
        }
        Ok(levels)
    }

    pub fn validate_vesting(duration: i64, periods: u32) -> Result<()> {
        require!(
            duration < MAX_POOL_VESTING_DURATION,
            ErrorCode::VestingDurationTooLong
        );
        require!(periods > 0, ErrorCode::VestingPeriodsZero);
        require!(
            duration >= periods as i64,
            ErrorCode::VestingDurationSmallerThanPeriods
        );
        Ok(())
    }

    /// Split `pool_balance` for a claim of the given severity.
    ///
    /// Level and split are both fractions of 10000, hence the double
    /// basis-point division.
    pub fn calc_claim_rewards(&self, pool_balance: u64, severity: u8) -> Result<ClaimRewards> {
        require!(pool_balance > 0, ErrorCode::DivisionByZero);
        let level = *self
            .reward_levels
            .get(severity as usize)
            .ok_or(ErrorCode::SeverityOutOfRange)?;

        let claim_amount = (pool_balance as u128)
            .checked_mul(level as u128)
            .ok_or(ErrorCode::CalculationOverflow)?;
        let denom = (HUNDRED_PERCENT as u128) * (HUNDRED_PERCENT as u128);
        let part = |bps: u16| -> Result<u64> { to_u64(mul_div_floor(claim_amount, bps as u128, denom)?) };

        let split = &self.rewards_split;
        Ok(ClaimRewards {
            hacker_vested: part(split.hacker_vested)?,
            hacker: part(split.hacker)?,
            committee: part(split.committee)?,
            swap_and_burn: part(split.swap_and_burn)?,
            governance_hat: part(split.governance_hat)?,
            hacker_hat: part(split.hacker_hat)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(levels: Vec<u16>) -> PoolBountyConfig {
        PoolBountyConfig {
            reward_levels: levels,
            rewards_split: RewardsSplit::default(),
            committee_checked_in: true,
            vesting_duration: 86_400,
            vesting_periods: 10,
        }
    }

    #[test]
    fn default_split_sums_to_hundred_percent() {
        assert_eq!(RewardsSplit::default().total(), HUNDRED_PERCENT);
        assert!(RewardsSplit::default().validate().is_ok());
    }

    #[test]
    fn split_not_summing_to_hundred_percent_is_rejected() {
        let mut split = RewardsSplit::default();
        split.committee += 1;
        assert_eq!(split.validate().unwrap_err(), error!(ErrorCode::InvalidRewardsSplit));
        split.committee -= 2;
        assert_eq!(split.validate().unwrap_err(), error!(ErrorCode::InvalidRewardsSplit));
    }

    #[test]
    fn only_zero_split_falls_back_to_default() {
        assert_eq!(RewardsSplit::zeroed().or_default(), RewardsSplit::default());

        let full = RewardsSplit {
            hacker_vested: 0,
            hacker: 0,
            committee: 5000,
            swap_and_burn: 5000,
            governance_hat: 0,
            hacker_hat: 0,
        };
        assert_eq!(full.or_default(), full);
        full.or_default().validate().unwrap();
    }

    #[test]
    fn partial_split_without_hacker_share_is_rejected() {
        let partial = RewardsSplit {
            hacker_vested: 0,
            hacker: 0,
            committee: 3000,
            swap_and_burn: 0,
            governance_hat: 0,
            hacker_hat: 0,
        };
        assert_eq!(
            partial.or_default().validate().unwrap_err(),
            error!(ErrorCode::InvalidRewardsSplit)
        );
    }

    #[test]
    fn reward_levels_validation() {
        assert_eq!(
            PoolBountyConfig::checked_reward_levels(vec![]).unwrap(),
            vec![2000, 4000, 6000, 8000]
        );
        assert_eq!(
            PoolBountyConfig::checked_reward_levels(vec![9999]).unwrap(),
            vec![9999]
        );
        assert_eq!(
            PoolBountyConfig::checked_reward_levels(vec![100, 10_000]).unwrap_err(),
            error!(ErrorCode::RewardLevelTooHigh)
        );
        assert_eq!(
            PoolBountyConfig::checked_reward_levels(vec![1; MAX_REWARD_LEVELS + 1]).unwrap_err(),
            error!(ErrorCode::TooManyRewardLevels)
        );
    }

    #[test]
    fn vesting_bounds() {
        assert!(PoolBountyConfig::validate_vesting(86_400, 30).is_ok());
        assert_eq!(
            PoolBountyConfig::validate_vesting(MAX_POOL_VESTING_DURATION, 30).unwrap_err(),
            error!(ErrorCode::VestingDurationTooLong)
        );
        assert_eq!(
            PoolBountyConfig::validate_vesting(100, 0).unwrap_err(),
            error!(ErrorCode::VestingPeriodsZero)
        );
        assert_eq!(
            PoolBountyConfig::validate_vesting(5, 10).unwrap_err(),
            error!(ErrorCode::VestingDurationSmallerThanPeriods)
        );
    }

    #[test]
    fn severity_one_with_default_split() {
        let rewards = config(vec![2000, 4000, 6000, 8000])
            .calc_claim_rewards(100_000, 1)
            .unwrap();
        assert_eq!(
            rewards,
            ClaimRewards {
                hacker_vested: 24_000,
                hacker: 8_000,
                committee: 2_000,
                swap_and_burn: 0,
                governance_hat: 4_000,
                hacker_hat: 2_000,
            }
        );
        assert_eq!(rewards.total().unwrap(), 40_000);
    }

    #[test]
    fn components_never_exceed_level_amount() {
        let cfg = PoolBountyConfig {
            rewards_split: RewardsSplit {
                hacker_vested: 3333,
                hacker: 3333,
                committee: 3333,
                swap_and_burn: 1,
                governance_hat: 0,
                hacker_hat: 0,
            },
            ..config(vec![3333, 9999])
        };
        for balance in [1u64, 7, 999, 123_456_789, u64::MAX / 10_000] {
            for severity in 0..2u8 {
                let rewards = cfg.calc_claim_rewards(balance, severity).unwrap();
                let level_amount = balance as u128 * cfg.reward_levels[severity as usize] as u128
                    / HUNDRED_PERCENT as u128;
                assert!(rewards.total().unwrap() as u128 <= level_amount);
                assert!((rewards.total().unwrap() as u128) < balance as u128);
            }
        }
    }

    #[test]
    fn severity_out_of_range_is_rejected() {
        assert_eq!(
            config(vec![2000]).calc_claim_rewards(1_000, 1).unwrap_err(),
            error!(ErrorCode::SeverityOutOfRange)
        );
    }
}
