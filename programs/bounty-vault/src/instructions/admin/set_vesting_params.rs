use crate::errors::ErrorCode;
use crate::events::VestingParamsSet;
use crate::states::{Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetVestingParams<'info> {
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

    pub governance: Signer<'info>,
}

/// Vesting applied to the hacker's vested share of future claims
pub fn set_vesting_params(ctx: Context<SetVestingParams>, duration: i64, periods: u32) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.set_vesting_params(duration, periods)?;

    emit!(VestingParamsSet {
        pool_id: pool.pool_id,
        duration,
        periods,
    });

    Ok(())
}
