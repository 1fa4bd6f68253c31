use crate::errors::ErrorCode;
use crate::events::RewardsSplitSet;
use crate::states::{Pool, RewardsSplit, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetRewardsSplit<'info> {
    #[account(
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump,
        constraint = governance.key() == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    pub governance: Signer<'info>,
}

/// Not allowed while a claim is pending or during the safety period
pub fn set_rewards_split(ctx: Context<SetRewardsSplit>, rewards_split: RewardsSplit) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    let old_split = pool.bounty.rewards_split;
    pool.set_rewards_split(rewards_split, now, &ctx.accounts.vault_config.params)?;

    emit!(RewardsSplitSet {
        pool_id: pool.pool_id,
        old_split,
        new_split: rewards_split,
    });

    Ok(())
}
