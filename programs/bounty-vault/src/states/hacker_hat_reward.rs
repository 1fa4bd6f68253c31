use crate::constants::SEED_HACKER_HAT_REWARD;
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Pool tokens set aside for a hacker, paid out in the emission token by
/// `swap_burn_send`
#[account]
#[derive(InitSpace)]
pub struct HackerHatReward {
    pub pool: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl HackerHatReward {
    pub const PREFIX_SEED: &'static [u8] = SEED_HACKER_HAT_REWARD;

    pub fn accrue(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        Ok(())
    }

    pub fn take(&mut self) -> u64 {
        std::mem::take(&mut self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accrues_across_claims_and_drains_once() {
        let mut reward = HackerHatReward {
            pool: Pubkey::new_unique(),
            beneficiary: Pubkey::new_unique(),
            amount: 0,
            bump: 255,
        };
        reward.accrue(2_000).unwrap();
        reward.accrue(500).unwrap();
        assert_eq!(reward.take(), 2_500);
        assert_eq!(reward.take(), 0);
        reward.amount = u64::MAX;
        assert_eq!(reward.accrue(1).unwrap_err(), error!(ErrorCode::CalculationOverflow));
    }
}
