use crate::errors::ErrorCode;
use crate::events::GovernanceTransferred;
use crate::states::VaultConfig;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct TransferGovernance<'info> {
    #[account(
        mut,
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump,
        constraint = governance.key() == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub vault_config: Account<'info, VaultConfig>,

    pub governance: Signer<'info>,
}

pub fn transfer_governance(ctx: Context<TransferGovernance>, new_governance: Pubkey) -> Result<()> {
    let old_governance = ctx.accounts.vault_config.transfer_governance(new_governance)?;

    msg!("[GOVERNANCE] {} -> {}", old_governance, new_governance);

    emit!(GovernanceTransferred {
        old_governance,
        new_governance,
    });

    Ok(())
}
