use crate::errors::ErrorCode;
use crate::events::EmergencyWithdrawn;
use crate::states::{DepositorInfo, Pool, VaultConfig};
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

/// Withdraw all principal without touching the reward ledger.
/// Pending emission reward is forfeited. Same gates as `withdraw`.
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
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

    #[account(
        mut,
        constraint = governance_token_account.mint == pool.token_mint @ ErrorCode::PoolTokenMismatch,
        constraint = governance_token_account.owner == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub governance_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.vault_config;
    let pool = &mut ctx.accounts.pool;
    let depositor = &mut ctx.accounts.depositor_info;

    pool.ensure_withdrawals_open(now, &config.params)?;
    depositor.consume_withdraw_request(now, &config.params)?;

    let shares = depositor.shares;
    let (amount, fee) = pool.apply_emergency_withdraw(depositor)?;

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

    msg!("[EMERGENCY_WITHDRAW] Pool {} - {} burned {} shares for {}", pool.pool_id, depositor.owner, shares, amount);

    emit!(EmergencyWithdrawn {
        pool_id: pool.pool_id,
        depositor: depositor.owner,
        shares_burned: shares,
        amount,
        fee,
        withdrawn_at: now,
    });

    Ok(())
}
