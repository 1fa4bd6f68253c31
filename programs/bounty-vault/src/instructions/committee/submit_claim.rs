use crate::events::ClaimSubmitted;
use crate::states::{Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SubmitClaim<'info> {
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

    pub committee: Signer<'info>,
}

/// Committee files a claim for `beneficiary`; only possible during the safety
/// period, and it freezes withdrawals until approved or dismissed
pub fn submit_claim(ctx: Context<SubmitClaim>, beneficiary: Pubkey, severity: u8) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let committee = ctx.accounts.committee.key();

    pool.submit_claim(&committee, beneficiary, severity, now, &ctx.accounts.vault_config.params)?;

    msg!("[SUBMIT_CLAIM] Pool {} - beneficiary {}, severity {}", pool.pool_id, beneficiary, severity);

    emit!(ClaimSubmitted {
        pool_id: pool.pool_id,
        committee,
        beneficiary,
        severity,
        submitted_at: now,
    });

    Ok(())
}
