use crate::constants::{DEFAULT_REWARD_MULTIPLIERS, MULTIPLIERS_LENGTH, MULTIPLIER_SCALE};
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Block-based emission schedule.
///
/// Emission starts at `start_block` and is split into 24 periods of
/// `period_length` blocks. Each period has its own multiplier (in hundredths);
/// blocks after the last period keep using the last multiplier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct RewardSchedule {
    pub start_block: u64,
    pub period_length: u64,
    pub reward_per_block: u64,
    pub multipliers: [u16; MULTIPLIERS_LENGTH],
}

impl RewardSchedule {
    pub fn new(start_block: u64, period_length: u64, reward_per_block: u64) -> Result<Self> {
        require!(period_length > 0, ErrorCode::InvalidRewardSchedule);
        Ok(Self {
            start_block,
            period_length,
            reward_per_block,
            multipliers: DEFAULT_REWARD_MULTIPLIERS,
        })
    }

    /// Sum of `multiplier * blocks` over every period overlapped by `[from, to)`.
    pub fn multiplier_between(&self, from: u64, to: u64) -> Result<u128> {
        let mut from = from.max(self.start_block);
        if to <= from {
            return Ok(0);
        }

        let period = self.period_length;
        let mut result: u128 = 0;
        let mut i = (from - self.start_block) / period + 1;
        while i <= MULTIPLIERS_LENGTH as u64 {
            let end_block = period
                .checked_mul(i)
                .and_then(|x| x.checked_add(self.start_block))
                .ok_or(ErrorCode::CalculationOverflow)?;
            if to <= end_block {
                break;
            }
            result = result
                .checked_add((end_block - from) as u128 * self.multipliers[(i - 1) as usize] as u128)
                .ok_or(ErrorCode::CalculationOverflow)?;
            from = end_block;
            i += 1;
        }

        let idx = (i.min(MULTIPLIERS_LENGTH as u64) - 1) as usize;
        result
            .checked_add((to - from) as u128 * self.multipliers[idx] as u128)
            .ok_or_else(|| error!(ErrorCode::CalculationOverflow))
    }

    /// Emission for `[from, to)` attributed to a pool holding `alloc_points`
    /// out of `total_alloc_points`.
    pub fn reward_for_block_range(
        &self,
        from: u64,
        to: u64,
        alloc_points: u64,
        total_alloc_points: u64,
    ) -> Result<u128> {
        if total_alloc_points == 0 {
            return Ok(0);
        }
        self.multiplier_between(from, to)?
            .checked_mul(self.reward_per_block as u128)
            .and_then(|x| x.checked_mul(alloc_points as u128))
            .map(|x| x / total_alloc_points as u128 / MULTIPLIER_SCALE)
            .ok_or_else(|| error!(ErrorCode::CalculationOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_schedule() -> RewardSchedule {
        RewardSchedule {
            start_block: 100,
            period_length: 10,
            reward_per_block: 1_000,
            multipliers: [100; MULTIPLIERS_LENGTH],
        }
    }

    #[test]
    fn empty_or_inverted_range_is_zero() {
        let schedule = flat_schedule();
        assert_eq!(schedule.multiplier_between(150, 150).unwrap(), 0);
        assert_eq!(schedule.multiplier_between(160, 150).unwrap(), 0);
    }

    #[test]
    fn blocks_before_start_are_not_rewarded() {
        let schedule = flat_schedule();
        assert_eq!(schedule.multiplier_between(0, 100).unwrap(), 0);
        assert_eq!(schedule.multiplier_between(90, 105).unwrap(), 5 * 100);
    }

    #[test]
    fn range_spanning_periods_uses_each_multiplier() {
        let mut schedule = flat_schedule();
        schedule.multipliers[0] = 300;
        schedule.multipliers[1] = 200;
        // 5 blocks in period 0, 10 in period 1, 3 in period 2
        let expected = 5 * 300 + 10 * 200 + 3 * 100;
        assert_eq!(schedule.multiplier_between(105, 123).unwrap(), expected);
    }

    #[test]
    fn tail_uses_last_multiplier() {
        let mut schedule = flat_schedule();
        schedule.multipliers[MULTIPLIERS_LENGTH - 2] = 50;
        schedule.multipliers[MULTIPLIERS_LENGTH - 1] = 7;
        let end_of_table = 100 + 10 * MULTIPLIERS_LENGTH as u64;
        assert_eq!(
            schedule
                .multiplier_between(end_of_table + 50, end_of_table + 60)
                .unwrap(),
            10 * 7
        );
        // second-to-last period, whole last period, then tail
        assert_eq!(
            schedule
                .multiplier_between(end_of_table - 15, end_of_table + 5)
                .unwrap(),
            5 * 50 + 10 * 7 + 5 * 7
        );
    }

    #[test]
    fn default_table_first_period() {
        let schedule = RewardSchedule::new(0, 1_000, 10).unwrap();
        assert_eq!(schedule.multiplier_between(0, 10).unwrap(), 10 * 4413);
        assert_eq!(
            schedule.reward_for_block_range(0, 10, 1, 1).unwrap(),
            10 * 4413 * 10 / 100
        );
    }

    #[test]
    fn reward_is_prorated_by_allocation() {
        let schedule = flat_schedule();
        assert_eq!(schedule.reward_for_block_range(100, 110, 1, 4).unwrap(), 2_500);
        assert_eq!(schedule.reward_for_block_range(100, 110, 3, 4).unwrap(), 7_500);
        assert_eq!(schedule.reward_for_block_range(100, 110, 3, 0).unwrap(), 0);
    }

    #[test]
    fn zero_period_length_is_rejected() {
        assert_eq!(
            RewardSchedule::new(0, 0, 10).unwrap_err(),
            error!(ErrorCode::InvalidRewardSchedule)
        );
    }
}
