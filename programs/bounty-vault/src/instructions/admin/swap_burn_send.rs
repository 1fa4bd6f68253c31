use crate::errors::ErrorCode;
use crate::events::{SwapAndBurn, SwapAndSend};
use crate::external::{
    build_swap_path, create_vesting_lock, exact_input, CreateLockParams, ExactInputParams, SwapAccounts,
    VestingLockAccounts,
};
use crate::states::{HackerHatReward, Pool, VaultConfig};
use crate::utils::{approve_delegate, burn_from_vault, revoke_delegate, transfer_from_vault};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

/// Convert a pool's seized bounty shares into the emission token
///
/// Flow:
/// 1. Drain the swap-and-burn, governance and beneficiary hacker accumulators
/// 2. Swap the total through the router (skipped for the emission token itself)
/// 3. Burn the swap-and-burn part
/// 4. Lock the hacker part under the emission vesting schedule
/// 5. Send the rest to governance
#[derive(Accounts)]
pub struct SwapBurnSend<'info> {
    #[account(
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

    #[account(mut, address = vault_config.reward_mint)]
    pub reward_mint: Account<'info, Mint>,

    #[account(mut, address = vault_config.reward_vault)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// CHECK: only used to derive the hacker reward account
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [HackerHatReward::PREFIX_SEED, pool.key().as_ref(), beneficiary.key().as_ref()],
        bump = hacker_hat_reward.bump
    )]
    pub hacker_hat_reward: Account<'info, HackerHatReward>,

    #[account(
        mut,
        constraint = governance_reward_account.mint == vault_config.reward_mint @ ErrorCode::PoolTokenMismatch,
        constraint = governance_reward_account.owner == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub governance_reward_account: Account<'info, TokenAccount>,

    /// CHECK: swap router configured by governance
    #[account(address = vault_config.swap_router)]
    pub swap_router: UncheckedAccount<'info>,

    /// CHECK: router authority, approved as delegate for the swap amount only
    pub router_authority: UncheckedAccount<'info>,

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

pub fn swap_burn_send<'info>(
    ctx: Context<'_, '_, 'info, 'info, SwapBurnSend<'info>>,
    amount_out_minimum: u64,
    fees: [u32; 2],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.vault_config;
    let config_bump = config.bump;

    let hacker_amount = ctx.accounts.hacker_hat_reward.take();
    let amounts = ctx.accounts.pool.take_swap_amounts(hacker_amount)?;
    let amount = amounts.total()?;

    ctx.accounts.pool.exit(&crate::ID)?;
    ctx.accounts.hacker_hat_reward.exit(&crate::ID)?;

    let pool_id = ctx.accounts.pool.pool_id;
    let token_mint = ctx.accounts.pool.token_mint;
    let config_info = config.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let pool_vault = ctx.accounts.pool_vault.to_account_info();

    msg!("[SWAP_BURN_SEND] Pool {} - swapping {} of {}", pool_id, amount, token_mint);

    // Emission tokens to distribute and the vault holding them
    let (received, source) = if token_mint == config.reward_mint {
        (amount, pool_vault.clone())
    } else {
        let before = ctx.accounts.reward_vault.amount;
        let path = build_swap_path(&token_mint, &config.swap_intermediate_mint, &config.reward_mint, fees)?;

        approve_delegate(
            &token_program,
            &pool_vault,
            &ctx.accounts.router_authority.to_account_info(),
            &config_info,
            config_bump,
            amount,
        )?;
        exact_input(
            &SwapAccounts {
                router_program: &ctx.accounts.swap_router.to_account_info(),
                router_authority: &ctx.accounts.router_authority.to_account_info(),
                source: &pool_vault,
                destination: &ctx.accounts.reward_vault.to_account_info(),
                config: &config_info,
                token_program: &token_program,
                route: ctx.remaining_accounts,
            },
            config_bump,
            ExactInputParams {
                path,
                amount_in: amount,
                amount_out_minimum,
                deadline: now,
            },
        )?;
        revoke_delegate(&token_program, &pool_vault, &config_info, config_bump)?;

        ctx.accounts.reward_vault.reload()?;
        let received = ctx
            .accounts
            .reward_vault
            .amount
            .checked_sub(before)
            .ok_or(ErrorCode::CalculationOverflow)?;
        require!(received >= amount_out_minimum, ErrorCode::SwapOutputTooLow);
        (received, ctx.accounts.reward_vault.to_account_info())
    };

    let split = amounts.split_output(received)?;

    burn_from_vault(
        &token_program,
        &ctx.accounts.reward_mint.to_account_info(),
        &source,
        &config_info,
        config_bump,
        split.burn,
    )?;
    emit!(SwapAndBurn {
        pool_id,
        amount_swapped: amount,
        amount_burned: split.burn,
    });

    let mut vesting_lock = Pubkey::default();
    if split.hacker > 0 {
        let params = CreateLockParams::linear(
            config.reward_mint,
            ctx.accounts.hacker_hat_reward.beneficiary,
            split.hacker,
            now,
            config.params.hat_vesting_duration,
            config.params.hat_vesting_periods,
            true,
        );
        vesting_lock = create_vesting_lock(
            &VestingLockAccounts {
                vesting_program: &ctx.accounts.vesting_program.to_account_info(),
                lock: &ctx.accounts.vesting_lock.to_account_info(),
                lock_vault: &ctx.accounts.vesting_lock_vault.to_account_info(),
                payer: &ctx.accounts.governance.to_account_info(),
                token_mint: &ctx.accounts.reward_mint.to_account_info(),
                source_vault: &source,
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
        &source,
        &ctx.accounts.governance_reward_account.to_account_info(),
        &config_info,
        config_bump,
        split.governance,
    )?;

    msg!(
        "[SWAP_BURN_SEND] Received {} - burned {}, vested {}, governance {}",
        received,
        split.burn,
        split.hacker,
        split.governance
    );

    emit!(SwapAndSend {
        pool_id,
        beneficiary: ctx.accounts.hacker_hat_reward.beneficiary,
        amount_vested: split.hacker,
        vesting_lock,
        governance_amount: split.governance,
    });

    Ok(())
}
