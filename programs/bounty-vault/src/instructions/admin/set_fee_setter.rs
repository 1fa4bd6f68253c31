use crate::errors::ErrorCode;
use crate::events::FeeSetterSet;
use crate::states::VaultConfig;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetFeeSetter<'info> {
    #[account(
        mut,
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump,
        constraint = governance.key() == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub vault_config: Account<'info, VaultConfig>,

    pub governance: Signer<'info>,
}

/// `Pubkey::default()` hands fee control back to governance
pub fn set_fee_setter(ctx: Context<SetFeeSetter>, fee_setter: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.vault_config;
    let old_fee_setter = std::mem::replace(&mut config.fee_setter, fee_setter);

    emit!(FeeSetterSet {
        old_fee_setter,
        new_fee_setter: fee_setter,
    });

    Ok(())
}
