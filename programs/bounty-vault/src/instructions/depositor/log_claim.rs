use crate::events::ClaimLogged;
use crate::states::VaultConfig;
use anchor_lang::prelude::*;
use anchor_lang::system_program;

#[derive(Accounts)]
pub struct LogClaim<'info> {
    #[account(
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    /// CHECK: governance wallet, receives the claim fee
    #[account(mut, address = vault_config.governance)]
    pub governance: UncheckedAccount<'info>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Publish a vulnerability report hash before the committee acts on it
pub fn log_claim(ctx: Context<LogClaim>, description_hash: [u8; 32]) -> Result<()> {
    let fee = ctx.accounts.vault_config.params.claim_fee;

    if fee > 0 {
        let fee_cpi = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.claimer.to_account_info(),
                to: ctx.accounts.governance.to_account_info(),
            },
        );
        system_program::transfer(fee_cpi, fee)?;
    }

    msg!("[LOG_CLAIM] {} logged a claim, fee {}", ctx.accounts.claimer.key(), fee);

    emit!(ClaimLogged {
        claimer: ctx.accounts.claimer.key(),
        description_hash,
        fee,
        logged_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
