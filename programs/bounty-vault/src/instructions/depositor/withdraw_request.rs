use crate::events::WithdrawRequested;
use crate::states::{DepositorInfo, Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct WithdrawRequest<'info> {
    #[account(
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [DepositorInfo::PREFIX_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = depositor_info.bump
    )]
    pub depositor_info: Account<'info, DepositorInfo>,

    pub owner: Signer<'info>,
}

/// Start the withdraw timelock; withdrawals open once the pending period is over
pub fn withdraw_request(ctx: Context<WithdrawRequest>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let depositor = &mut ctx.accounts.depositor_info;

    let enabled_at = depositor.request_withdraw(now, &ctx.accounts.vault_config.params)?;

    msg!("[WITHDRAW_REQUEST] {} - withdraw enabled after {}", depositor.owner, enabled_at);

    emit!(WithdrawRequested {
        pool_id: ctx.accounts.pool.pool_id,
        depositor: depositor.owner,
        withdraw_enabled_at: enabled_at,
    });

    Ok(())
}
