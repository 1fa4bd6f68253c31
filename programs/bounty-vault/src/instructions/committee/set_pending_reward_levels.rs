use crate::events::PendingRewardLevelsSet;
use crate::states::Pool;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetPendingRewardLevels<'info> {
    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    pub committee: Signer<'info>,
}

/// Stage new reward levels; an empty list stages the defaults
pub fn set_pending_reward_levels(ctx: Context<SetPendingRewardLevels>, reward_levels: Vec<u16>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    pool.set_pending_reward_levels(&ctx.accounts.committee.key(), reward_levels, now)?;

    let levels = pool
        .pending_reward_levels
        .as_ref()
        .map(|p| p.levels.clone())
        .unwrap_or_default();
    emit!(PendingRewardLevelsSet {
        pool_id: pool.pool_id,
        reward_levels: levels,
        set_at: now,
    });

    Ok(())
}
