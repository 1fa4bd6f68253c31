use crate::events::ClaimDismissed;
use crate::states::{Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct DismissClaim<'info> {
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

    pub caller: Signer<'info>,
}

/// Drop the pending claim. Governance may do so at any time; anyone once the
/// claim has gone stale.
pub fn dismiss_claim(ctx: Context<DismissClaim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();
    let is_governance = ctx.accounts.vault_config.is_governance(&caller);
    let pool = &mut ctx.accounts.pool;

    let claim = pool.dismiss_claim(is_governance, now)?;

    msg!("[DISMISS_CLAIM] Pool {} - claim for {} dismissed by {}", pool.pool_id, claim.beneficiary, caller);

    emit!(ClaimDismissed {
        pool_id: pool.pool_id,
        beneficiary: claim.beneficiary,
        dismissed_by: caller,
        dismissed_at: now,
    });

    Ok(())
}
