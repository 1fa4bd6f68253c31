use crate::events::RewardLevelsSet;
use crate::states::{Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetRewardLevels<'info> {
    #[account(
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    pub committee: Signer<'info>,
}

/// Activate staged reward levels once the levels delay has passed
pub fn set_reward_levels(ctx: Context<SetRewardLevels>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    let reward_levels =
        pool.activate_reward_levels(&ctx.accounts.committee.key(), now, &ctx.accounts.vault_config.params)?;

    msg!("[SET_REWARD_LEVELS] Pool {} - {:?}", pool.pool_id, reward_levels);

    emit!(RewardLevelsSet {
        pool_id: pool.pool_id,
        reward_levels,
    });

    Ok(())
}
