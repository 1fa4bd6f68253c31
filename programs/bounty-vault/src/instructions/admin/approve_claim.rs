use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::ErrorCode;
use crate::events::ClaimApproved;
use crate::external::{create_vesting_lock, CreateLockParams, VestingLockAccounts};
use crate::states::{HackerHatReward, Pool, VaultConfig};
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

/// Approve the pool's pending claim and pay it out
///
/// Flow:
/// 1. Raise the approval guard and remove the claim from the pool
/// 2. Carve the bounty out of the pool balance
/// 3. Book swap-and-burn, governance and hacker emission-token shares
/// 4. Flush state, then lock the vested share and pay hacker and committee
#[derive(Accounts)]
pub struct ApproveClaim<'info> {
    #[account(
        mut,
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

    #[account(mut, address = pool.token_vault)]
    pub pool_vault: Account<'info, TokenAccount>,

    #[account(address = pool.token_mint)]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: must be the beneficiary of the pending claim
    #[account(
        constraint = pool.submitted_claim.map(|c| c.beneficiary) == Some(beneficiary.key())
            @ ErrorCode::ClaimAccountMismatch
    )]
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ ErrorCode::ClaimAccountMismatch,
        constraint = beneficiary_token_account.mint == pool.token_mint @ ErrorCode::PoolTokenMismatch
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    /// Owned by the committee that submitted the claim
    #[account(
        mut,
        constraint = pool.submitted_claim.map(|c| c.committee) == Some(committee_token_account.owner)
            @ ErrorCode::ClaimAccountMismatch,
        constraint = committee_token_account.mint == pool.token_mint @ ErrorCode::PoolTokenMismatch
    )]
    pub committee_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = governance,
        space = DISCRIMINATOR_SIZE + HackerHatReward::INIT_SPACE,
        seeds = [HackerHatReward::PREFIX_SEED, pool.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub hacker_hat_reward: Account<'info, HackerHatReward>,

    /// CHECK: vesting-lock program configured by governance
    #[account(address = vault_config.vesting_program)]
    pub vesting_program: UncheckedAccount<'info>,

    /// CHECK: created and validated by the vesting program
    #[account(mut)]
    pub vesting_lock: UncheckedAccount<'info>,

    /// CHECK: lock token account, created by the vesting program
    #[account(mut)]
    pub vesting_lock_vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub governance: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn approve_claim(ctx: Context<ApproveClaim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    require!(!ctx.accounts.vault_config.approving, ErrorCode::ReentrantApproval);
    ctx.accounts.vault_config.approving = true;

    let pool_key = ctx.accounts.pool.key();
    let (claim, rewards) = ctx.accounts.pool.take_claim_for_approval()?;

    msg!(
        "[APPROVE_CLAIM] Pool {} - severity {}, payout {}, remaining balance {}",
        ctx.accounts.pool.pool_id,
        claim.severity,
        rewards.total()?,
        ctx.accounts.pool.balance
    );

    let hacker_hat = &mut ctx.accounts.hacker_hat_reward;
    if hacker_hat.pool == Pubkey::default() {
        hacker_hat.pool = pool_key;
        hacker_hat.beneficiary = claim.beneficiary;
        hacker_hat.amount = 0;
        hacker_hat.bump = ctx.bumps.hacker_hat_reward;
    }
    hacker_hat.accrue(rewards.hacker_hat)?;

    // Persist before calling out so a re-entering call sees the guard and no claim
    ctx.accounts.vault_config.exit(&crate::ID)?;
    ctx.accounts.pool.exit(&crate::ID)?;
    ctx.accounts.hacker_hat_reward.exit(&crate::ID)?;

    let config_bump = ctx.accounts.vault_config.bump;
    let config_info = ctx.accounts.vault_config.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let pool_vault = ctx.accounts.pool_vault.to_account_info();

    let mut vesting_lock = Pubkey::default();
    if rewards.hacker_vested > 0 {
        let bounty = &ctx.accounts.pool.bounty;
        let params = CreateLockParams::linear(
            ctx.accounts.pool.token_mint,
            claim.beneficiary,
            rewards.hacker_vested,
            now,
            bounty.vesting_duration,
            bounty.vesting_periods,
            false,
        );
        vesting_lock = create_vesting_lock(
            &VestingLockAccounts {
                vesting_program: &ctx.accounts.vesting_program.to_account_info(),
                lock: &ctx.accounts.vesting_lock.to_account_info(),
                lock_vault: &ctx.accounts.vesting_lock_vault.to_account_info(),
                payer: &ctx.accounts.governance.to_account_info(),
                token_mint: &ctx.accounts.token_mint.to_account_info(),
                source_vault: &pool_vault,
                config: &config_info,
                token_program: &token_program,
                system_program: &ctx.accounts.system_program.to_account_info(),
            },
            config_bump,
            params,
        )?;
    }

    transfer_from_vault(
        &token_program,
        &pool_vault,
        &ctx.accounts.beneficiary_token_account.to_account_info(),
        &config_info,
        config_bump,
        rewards.hacker,
    )?;
    transfer_from_vault(
        &token_program,
        &pool_vault,
        &ctx.accounts.committee_token_account.to_account_info(),
        &config_info,
        config_bump,
        rewards.committee,
    )?;

    ctx.accounts.vault_config.approving = false;

    emit!(ClaimApproved {
        pool_id: ctx.accounts.pool.pool_id,
        beneficiary: claim.beneficiary,
        committee: claim.committee,
        severity: claim.severity,
        hacker_vested: rewards.hacker_vested,
        hacker: rewards.hacker,
        committee_reward: rewards.committee,
        swap_and_burn: rewards.swap_and_burn,
        governance_hat: rewards.governance_hat,
        hacker_hat: rewards.hacker_hat,
        vesting_lock,
        approved_at: now,
    });

    Ok(())
}
