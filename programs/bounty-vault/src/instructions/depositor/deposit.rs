use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::ErrorCode;
use crate::events::Deposited;
use crate::instructions::pay_pending_reward;
use crate::states::{AllocationTimeline, DepositorInfo, Pool, VaultConfig};
use crate::utils::transfer_from_user;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

/// Deposit pool tokens for shares
///
/// Flow:
/// 1. Check deposits are open and the amount meets the minimum
/// 2. Cancel any withdraw request
/// 3. Settle the pool and pay the depositor's pending emission reward
/// 4. Move the tokens into the pool vault and mint shares
#[derive(Accounts)]
pub struct Deposit<'info> {
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
        init_if_needed,
        payer = owner,
        space = DISCRIMINATOR_SIZE + DepositorInfo::INIT_SPACE,
        seeds = [DepositorInfo::PREFIX_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub depositor_info: Account<'info, DepositorInfo>,

    #[account(
        mut,
        constraint = owner_token_account.mint == pool.token_mint @ ErrorCode::PoolTokenMismatch,
        constraint = owner_token_account.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut, address = vault_config.reward_vault)]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_reward_account.mint == vault_config.reward_mint @ ErrorCode::PoolTokenMismatch
    )]
    pub owner_reward_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;
    let depositor = &mut ctx.accounts.depositor_info;

    msg!("[DEPOSIT] Pool {} - owner {}, amount {}", pool.pool_id, ctx.accounts.owner.key(), amount);

    pool.ensure_can_deposit(amount)?;

    if depositor.owner == Pubkey::default() {
        depositor.owner = ctx.accounts.owner.key();
        depositor.pool = pool.key();
        depositor.shares = 0;
        depositor.reward_debt = 0;
        depositor.withdraw_request_at = 0;
        depositor.bump = ctx.bumps.depositor_info;
    }
    depositor.clear_withdraw_request();

    let config = &ctx.accounts.vault_config;
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

    transfer_from_user(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.owner_token_account.to_account_info(),
        &ctx.accounts.pool_vault.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;
    let shares = pool.apply_deposit(depositor, amount)?;

    msg!("[DEPOSIT] Minted {} shares - pool total {}, balance {}", shares, pool.total_shares, pool.balance);

    emit!(Deposited {
        pool_id: pool.pool_id,
        depositor: depositor.owner,
        amount,
        shares_minted: shares,
        total_shares: pool.total_shares,
        pool_balance: pool.balance,
        deposited_at: clock.unix_timestamp,
    });

    Ok(())
}
