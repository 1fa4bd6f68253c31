use crate::constants::{DISCRIMINATOR_SIZE, SEED_POOL_VAULT};
use crate::errors::ErrorCode;
use crate::events::PoolAdded;
use crate::states::{AllocationTimeline, Pool, PoolBountyConfig, RewardsSplit, VaultConfig};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AddPoolParams {
    pub alloc_points: u64,
    pub committee: Pubkey,
    /// Empty selects the default levels
    pub reward_levels: Vec<u16>,
    /// All zeros selects the default split
    pub rewards_split: RewardsSplit,
    pub vesting_duration: i64,
    pub vesting_periods: u32,
}

/// Register a bounty pool for a token
///
/// Flow:
/// 1. Validate committee, reward levels, split and vesting
/// 2. Open the pool at the current block (or the emission start)
/// 3. Record the new total allocation in the timeline
#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(
        mut,
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
        init,
        payer = governance,
        space = DISCRIMINATOR_SIZE + Pool::INIT_SPACE,
        seeds = [Pool::PREFIX_SEED, vault_config.pool_count.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    pub token_mint: Account<'info, Mint>,

    /// Seeded by mint, so a token can back one pool only
    #[account(
        init,
        payer = governance,
        seeds = [SEED_POOL_VAULT, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_config
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub governance: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn add_pool(ctx: Context<AddPool>, params: AddPoolParams) -> Result<()> {
    let clock = Clock::get()?;

    require!(params.committee != Pubkey::default(), ErrorCode::InvalidCommittee);
    PoolBountyConfig::validate_vesting(params.vesting_duration, params.vesting_periods)?;
    let rewards_split = params.rewards_split.or_default();
    rewards_split.validate()?;
    let reward_levels = PoolBountyConfig::checked_reward_levels(params.reward_levels)?;

    let config = &mut ctx.accounts.vault_config;
    let timeline = &mut ctx.accounts.allocation_timeline;
    let pool = &mut ctx.accounts.pool;

    let total_alloc_points = timeline
        .total_alloc_points()
        .checked_add(params.alloc_points)
        .ok_or(ErrorCode::CalculationOverflow)?;
    timeline.record_allocation_change(clock.slot, total_alloc_points)?;

    pool.pool_id = config.pool_count;
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.token_vault = ctx.accounts.pool_vault.key();
    pool.committee = params.committee;
    pool.alloc_points = params.alloc_points;
    pool.last_reward_block = clock.slot.max(config.schedule.start_block);
    pool.reward_per_share = 0;
    pool.last_processed_checkpoint = timeline.latest_index();
    pool.total_shares = 0;
    pool.balance = 0;
    pool.withdrawal_fee_bps = 0;
    pool.deposit_paused = false;
    pool.bounty = PoolBountyConfig {
        reward_levels,
        rewards_split,
        committee_checked_in: false,
        vesting_duration: params.vesting_duration,
        vesting_periods: params.vesting_periods,
    };
    pool.pending_reward_levels = None;
    pool.submitted_claim = None;
    pool.swap_and_burn = 0;
    pool.governance_hat_reward = 0;
    pool.hacker_hat_reward_total = 0;
    pool.vault_bump = ctx.bumps.pool_vault;
    pool.bump = ctx.bumps.pool;

    config.pool_count = config
        .pool_count
        .checked_add(1)
        .ok_or(ErrorCode::CalculationOverflow)?;

    msg!("[ADD_POOL] Pool {} for mint {} - alloc {} of {}", pool.pool_id, pool.token_mint, pool.alloc_points, total_alloc_points);

    emit!(PoolAdded {
        pool_id: pool.pool_id,
        token_mint: pool.token_mint,
        committee: pool.committee,
        alloc_points: pool.alloc_points,
        total_alloc_points,
        reward_levels: pool.bounty.reward_levels.clone(),
        rewards_split,
        vesting_duration: params.vesting_duration,
        vesting_periods: params.vesting_periods,
        added_at: clock.unix_timestamp,
    });

    Ok(())
}
