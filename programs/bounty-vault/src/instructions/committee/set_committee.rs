use crate::events::CommitteeSet;
use crate::states::{Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetCommittee<'info> {
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

    /// Governance before check-in, the committee itself afterwards
    pub authority: Signer<'info>,
}

pub fn set_committee(ctx: Context<SetCommittee>, committee: Pubkey) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let is_governance = ctx.accounts.vault_config.is_governance(&caller);
    let pool = &mut ctx.accounts.pool;

    let old_committee = pool.set_committee(&caller, is_governance, committee)?;

    msg!("[SET_COMMITTEE] Pool {} - {} -> {}", pool.pool_id, old_committee, committee);

    emit!(CommitteeSet {
        pool_id: pool.pool_id,
        old_committee,
        new_committee: committee,
    });

    Ok(())
}
