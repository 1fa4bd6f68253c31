use crate::constants::{DEFAULT_REWARD_MULTIPLIERS, DISCRIMINATOR_SIZE, MULTIPLIERS_LENGTH, SEED_REWARD_VAULT};
use crate::events::VaultInitialized;
use crate::states::{AllocationTimeline, GeneralParameters, RewardSchedule, VaultConfig};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    pub start_block: u64,
    pub period_length: u64,
    pub reward_per_block: u64,
    /// Falls back to the default emission curve
    pub multipliers: Option<[u16; MULTIPLIERS_LENGTH]>,
    pub vesting_program: Pubkey,
    pub swap_router: Pubkey,
    pub swap_intermediate_mint: Pubkey,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = governance,
        space = DISCRIMINATOR_SIZE + VaultConfig::INIT_SPACE,
        seeds = [VaultConfig::PREFIX_SEED],
        bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        init,
        payer = governance,
        space = AllocationTimeline::space(0),
        seeds = [AllocationTimeline::PREFIX_SEED],
        bump
    )]
    pub allocation_timeline: Account<'info, AllocationTimeline>,

    pub reward_mint: Account<'info, Mint>,

    /// Emission token custody, pays depositor rewards
    #[account(
        init,
        payer = governance,
        seeds = [SEED_REWARD_VAULT],
        bump,
        token::mint = reward_mint,
        token::authority = vault_config
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub governance: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let schedule = RewardSchedule {
        multipliers: params.multipliers.unwrap_or(DEFAULT_REWARD_MULTIPLIERS),
        ..RewardSchedule::new(params.start_block, params.period_length, params.reward_per_block)?
    };

    let config = &mut ctx.accounts.vault_config;
    config.governance = ctx.accounts.governance.key();
    config.fee_setter = Pubkey::default();
    config.reward_mint = ctx.accounts.reward_mint.key();
    config.reward_vault = ctx.accounts.reward_vault.key();
    config.vesting_program = params.vesting_program;
    config.swap_router = params.swap_router;
    config.swap_intermediate_mint = params.swap_intermediate_mint;
    config.schedule = schedule;
    config.params = GeneralParameters::default();
    config.pool_count = 0;
    config.approving = false;
    config.reward_vault_bump = ctx.bumps.reward_vault;
    config.bump = ctx.bumps.vault_config;

    let timeline = &mut ctx.accounts.allocation_timeline;
    timeline.checkpoints = Vec::new();
    timeline.bump = ctx.bumps.allocation_timeline;

    msg!("[INIT] Governance: {}", config.governance);
    msg!(
        "[INIT] Emission from block {} - period {} blocks, {} per block",
        schedule.start_block,
        schedule.period_length,
        schedule.reward_per_block
    );

    emit!(VaultInitialized {
        governance: config.governance,
        reward_mint: config.reward_mint,
        start_block: schedule.start_block,
        period_length: schedule.period_length,
        reward_per_block: schedule.reward_per_block,
        initialized_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
