use crate::errors::ErrorCode;
use crate::instructions::pay_pending_reward;
use crate::states::{AllocationTimeline, DepositorInfo, Pool, VaultConfig};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
pub struct ClaimReward<'info> {
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

    #[account(
        mut,
        seeds = [DepositorInfo::PREFIX_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = depositor_info.bump
    )]
    pub depositor_info: Account<'info, DepositorInfo>,

    #[account(mut, address = vault_config.reward_vault)]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_reward_account.mint == vault_config.reward_mint @ ErrorCode::PoolTokenMismatch
    )]
    pub owner_reward_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Settle the pool and pay the caller's emission reward; shares are untouched
pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
    let slot = Clock::get()?.slot;
    let config = &ctx.accounts.vault_config;
    let pool = &mut ctx.accounts.pool;
    let depositor = &mut ctx.accounts.depositor_info;

    pool.settle(slot, &ctx.accounts.allocation_timeline, &config.schedule)?;
    let paid = pay_pending_reward(
        pool,
        depositor,
        &ctx.accounts.reward_vault,
        &ctx.accounts.owner_reward_account.to_account_info(),
        &config.to_account_info(),
        config.bump,
        &ctx.accounts.token_program.to_account_info(),
    )?;
    pool.checkpoint_depositor(depositor)?;

    msg!("[CLAIM_REWARD] Pool {} - {} received {}", pool.pool_id, depositor.owner, paid);

    Ok(())
}
