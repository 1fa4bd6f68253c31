use crate::errors::ErrorCode;
use crate::events::PoolFeeSet;
use crate::states::{Pool, VaultConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetPoolFee<'info> {
    #[account(
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump,
        constraint = vault_config.is_fee_setter(&fee_setter.key()) @ ErrorCode::NotFeeSetter
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    pub fee_setter: Signer<'info>,
}

pub fn set_pool_fee(ctx: Context<SetPoolFee>, fee_bps: u16) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let old_fee_bps = pool.set_withdrawal_fee(fee_bps)?;

    msg!("[SET_POOL_FEE] Pool {} - {} bps -> {} bps", pool.pool_id, old_fee_bps, fee_bps);

    emit!(PoolFeeSet {
        pool_id: pool.pool_id,
        old_fee_bps,
        new_fee_bps: fee_bps,
    });

    Ok(())
}
