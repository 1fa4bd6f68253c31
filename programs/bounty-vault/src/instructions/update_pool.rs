use crate::states::{AllocationTimeline, Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        seeds = [AllocationTimeline::PREFIX_SEED],
        bump = allocation_timeline.bump
    )]
    pub allocation_timeline: Account<'info, AllocationTimeline>,

    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,
}

/// Accrue emission for a pool up to the current slot. Permissionless.
pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
    let slot = Clock::get()?.slot;
    let pool = &mut ctx.accounts.pool;

    let reward = pool.settle(slot, &ctx.accounts.allocation_timeline, &ctx.accounts.vault_config.schedule)?;

    msg!("[UPDATE_POOL] Pool {} - accrued {}, reward_per_share {}", pool.pool_id, reward, pool.reward_per_share);

    Ok(())
}
