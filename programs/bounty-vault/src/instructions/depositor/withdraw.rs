use crate::errors::ErrorCode;
use crate::events::Withdrawn;
use crate::instructions::pay_pending_reward;
use crate::states::{AllocationTimeline, DepositorInfo, Pool, VaultConfig};
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

/// Redeem shares for pool tokens
///
/// Flow:
/// 1. Check no claim is pending, no safety period, and the withdraw request is enabled
/// 2. Settle the pool and pay the pending emission reward
/// 3. Burn shares and pay out their principal, minus the pool fee
#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    #[account(mut, address = pool.token_vault)]
    pub pool_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [DepositorInfo::PREFIX_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = depositor_info.bump
    )]
    pub depositor_info: Account<'info, DepositorInfo>,

    #[account(
        mut,
        constraint = owner_token_account.mint == pool.token_mint @ ErrorCode::PoolTokenMismatch
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// Receives the withdrawal fee
    #[account(
        mut,
        constraint = governance_token_account.mint == pool.token_mint @ ErrorCode::PoolTokenMismatch,
        constraint = governance_token_account.owner == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub governance_token_account: Account<'info, TokenAccount>,

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

pub fn withdraw(ctx: Context<Withdraw>, shares: u64) -> Result<()> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.vault_config;
    let pool = &mut ctx.accounts.pool;
    let depositor = &mut ctx.accounts.depositor_info;

    msg!("[WITHDRAW] Pool {} - owner {}, shares {}", pool.pool_id, depositor.owner, shares);

    pool.ensure_withdrawals_open(clock.unix_timestamp, &config.params)?;
    depositor.consume_withdraw_request(clock.unix_timestamp, &config.params)?;
    require!(shares <= depositor.shares, ErrorCode::InsufficientShares);

    pool.settle(clock.slot, &ctx.accounts.allocation_timeline, &config.schedule)?;
    pay_pending_reward(
        pool,
        depositor,
        &ctx.accounts.reward_vault,
        &ctx.accounts.owner_reward_account.to_account_info(),
        &config.to_account_info(),
        config.bump,
        &ctx.accounts.token_program.to_account_info(),
    )?;

    let (amount, fee) = pool.apply_withdraw(depositor, shares)?;

    let token_program = ctx.accounts.token_program.to_account_info();
    let pool_vault = ctx.accounts.pool_vault.to_account_info();
    let config_info = config.to_account_info();
    transfer_from_vault(
        &token_program,
        &pool_vault,
        &ctx.accounts.governance_token_account.to_account_info(),
        &config_info,
        config.bump,
        fee,
    )?;
    transfer_from_vault(
        &token_program,
        &pool_vault,
        &ctx.accounts.owner_token_account.to_account_info(),
        &config_info,
        config.bump,
        amount,
    )?;

    msg!("[WITHDRAW] Paid {} (fee {}) - pool balance {}", amount, fee, pool.balance);

    emit!(Withdrawn {
        pool_id: pool.pool_id,
        depositor: depositor.owner,
        shares_burned: shares,
        amount,
        fee,
        withdrawn_at: clock.unix_timestamp,
    });

    Ok(())
}
