use crate::constants::{DISCRIMINATOR_SIZE, SEED_ALLOCATION_TIMELINE};
use crate::errors::ErrorCode;
use crate::states::RewardSchedule;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct AllocationCheckpoint {
    pub block: u64,
    pub total_alloc_points: u64,
}

/// Append-only log of total allocation points, one entry per block at most.
///
/// Pools accrue emission interval by interval against the total that was in
/// force during that interval, so a weight change never reprices rewards
/// that were already emitted. The account grows by one checkpoint per
/// change through `realloc`.
#[account]
pub struct AllocationTimeline {
    pub checkpoints: Vec<AllocationCheckpoint>,
    pub bump: u8,
}

impl AllocationTimeline {
    pub const PREFIX_SEED: &'static [u8] = SEED_ALLOCATION_TIMELINE;

    /// Account size holding `len` checkpoints.
    pub fn space(len: usize) -> usize {
        DISCRIMINATOR_SIZE + 4 + len * AllocationCheckpoint::INIT_SPACE + 1
    }

    /// Size needed before recording one more change.
    pub fn space_for_next(&self) -> usize {
        Self::space(self.checkpoints.len() + 1)
    }

    pub fn record_allocation_change(&mut self, block: u64, total_alloc_points: u64) -> Result<()> {
        if let Some(last) = self.checkpoints.last_mut() {
            require!(block >= last.block, ErrorCode::StaleAllocationCheckpoint);
            if last.block == block {
                last.total_alloc_points = total_alloc_points;
                return Ok(());
            }
        }
        self.checkpoints.push(AllocationCheckpoint {
            block,
            total_alloc_points,
        });
        Ok(())
    }

    /// Index of the newest checkpoint (0 while the log is empty).
    pub fn latest_index(&self) -> u32 {
        self.checkpoints.len().saturating_sub(1) as u32
    }

    pub fn total_alloc_points(&self) -> u64 {
        self.checkpoints
            .last()
            .map(|c| c.total_alloc_points)
            .unwrap_or(0)
    }

    pub fn total_alloc_points_at(&self, index: u32) -> u64 {
        self.checkpoints
            .get(index as usize)
            .map(|c| c.total_alloc_points)
            .unwrap_or(0)
    }

    /// Emission owed to a pool with `alloc_points` for blocks
    /// `[from_block, to_block)`, walking checkpoints from `from_index`.
    pub fn pool_reward(
        &self,
        schedule: &RewardSchedule,
        alloc_points: u64,
        from_block: u64,
        from_index: u32,
        to_block: u64,
    ) -> Result<u128> {
        let last = self.latest_index();
        let mut from = from_block;
        let mut reward: u128 = 0;
        let mut i = from_index;
        while i < last {
            let next_block = self.checkpoints[i as usize + 1].block;
            let interval = schedule.reward_for_block_range(
                from,
                next_block,
                alloc_points,
                self.total_alloc_points_at(i),
            )?;
            reward = reward
                .checked_add(interval)
                .ok_or(ErrorCode::CalculationOverflow)?;
            from = next_block;
            i += 1;
        }
        let tail = schedule.reward_for_block_range(
            from,
            to_block,
            alloc_points,
            self.total_alloc_points_at(i),
        )?;
        reward
            .checked_add(tail)
            .ok_or_else(|| error!(ErrorCode::CalculationOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MULTIPLIERS_LENGTH;

    fn schedule() -> RewardSchedule {
        RewardSchedule {
            start_block: 0,
            period_length: 1_000,
            reward_per_block: 100,
            multipliers: [100; MULTIPLIERS_LENGTH],
        }
    }

    fn timeline() -> AllocationTimeline {
        AllocationTimeline {
            checkpoints: Vec::new(),
            bump: 255,
        }
    }

    #[test]
    fn same_block_changes_coalesce() {
        let mut t = timeline();
        t.record_allocation_change(10, 100).unwrap();
        t.record_allocation_change(10, 300).unwrap();
        t.record_allocation_change(12, 400).unwrap();
        assert_eq!(
            t.checkpoints,
            vec![
                AllocationCheckpoint { block: 10, total_alloc_points: 300 },
                AllocationCheckpoint { block: 12, total_alloc_points: 400 },
            ]
        );
        assert_eq!(t.latest_index(), 1);
        assert_eq!(t.total_alloc_points(), 400);
    }

    #[test]
    fn older_block_is_rejected() {
        let mut t = timeline();
        t.record_allocation_change(10, 100).unwrap();
        assert_eq!(
            t.record_allocation_change(9, 200).unwrap_err(),
            error!(ErrorCode::StaleAllocationCheckpoint)
        );
    }

    #[test]
    fn timeline_keeps_growing() {
        let mut t = timeline();
        for block in 0..128u64 {
            t.record_allocation_change(block, block + 1).unwrap();
        }
        t.record_allocation_change(1_000_000, 42).unwrap();
        assert_eq!(t.latest_index(), 128);
        assert_eq!(t.total_alloc_points(), 42);

        let s = schedule();
        // blocks 127..1_000_000 were the pool's alone at the last interval
        let reward = t.pool_reward(&s, 128, 127, 127, 1_000_000).unwrap();
        assert_eq!(reward, s.reward_for_block_range(127, 1_000_000, 128, 128).unwrap());
    }

    #[test]
    fn space_covers_one_more_checkpoint() {
        let mut t = timeline();
        assert_eq!(AllocationTimeline::space(0), 8 + 4 + 1);
        assert_eq!(t.space_for_next(), 8 + 4 + 16 + 1);
        t.record_allocation_change(5, 10).unwrap();
        assert_eq!(t.space_for_next(), 8 + 4 + 2 * 16 + 1);
        let mut data = Vec::new();
        AnchorSerialize::serialize(&t, &mut data).unwrap();
        assert_eq!(data.len() + DISCRIMINATOR_SIZE, AllocationTimeline::space(1));
    }

    #[test]
    fn reward_follows_historical_totals() {
        let mut t = timeline();
        // pool alone for blocks 0..10, then another pool triples the total
        t.record_allocation_change(0, 100).unwrap();
        t.record_allocation_change(10, 400).unwrap();

        let s = schedule();
        let reward = t.pool_reward(&s, 100, 0, 0, 20).unwrap();
        // 10 blocks at 100% + 10 blocks at 25%
        assert_eq!(reward, 10 * 100 + 10 * 100 / 4);

        // a pool that already processed the first interval only sees the second
        let reward = t.pool_reward(&s, 100, 10, 1, 20).unwrap();
        assert_eq!(reward, 250);
    }

    #[test]
    fn empty_timeline_yields_nothing() {
        let t = timeline();
        assert_eq!(t.pool_reward(&schedule(), 100, 0, 0, 50).unwrap(), 0);
    }
}
