use crate::errors::ErrorCode;
use crate::events::PoolUpdated;
use crate::states::{AllocationTimeline, Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetPool<'info> {
    #[account(
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump,
        constraint = governance.key() == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        mut,
        seeds = [AllocationTimeline::PREFIX_SEED],
        bump = allocation_timeline.bump,
        realloc = allocation_timeline.space_for_next(),
        realloc::payer = governance,
        realloc::zero = false
    )]
    pub allocation_timeline: Account<'info, AllocationTimeline>,

    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub governance: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Change a pool's emission weight and deposit switch. Accrual up to now
/// uses the old weight.
pub fn set_pool(ctx: Context<SetPool>, alloc_points: u64, deposit_paused: bool) -> Result<()> {
    let clock = Clock::get()?;
    let timeline = &mut ctx.accounts.allocation_timeline;
    let pool = &mut ctx.accounts.pool;

    pool.set_alloc_points(alloc_points, clock.slot, timeline, &ctx.accounts.vault_config.schedule)?;
    pool.deposit_paused = deposit_paused;

    msg!("[SET_POOL] Pool {} - alloc {} of {}, paused {}", pool.pool_id, alloc_points, timeline.total_alloc_points(), deposit_paused);

    emit!(PoolUpdated {
        pool_id: pool.pool_id,
        alloc_points,
        total_alloc_points: timeline.total_alloc_points(),
        deposit_paused,
        updated_at: clock.unix_timestamp,
    });

    Ok(())
}
