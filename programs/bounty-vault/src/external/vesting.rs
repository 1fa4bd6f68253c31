use super::instruction_discriminator;
use crate::constants::{SEED_VAULT_CONFIG, TOKEN_LOCK_OWNER};
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Revocable {
    Enabled,
    Disabled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateLockParams {
    pub token_mint: Pubkey,
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub managed_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub periods: u32,
    pub release_start_time: i64,
    pub vesting_cliff_time: i64,
    pub revocable: Revocable,
    pub is_transferable: bool,
}

impl CreateLockParams {
    /// Lock releasing `amount` to `beneficiary` linearly over `duration`
    /// in `periods` steps, starting now. Locks are never revocable.
    pub fn linear(
        token_mint: Pubkey,
        beneficiary: Pubkey,
        amount: u64,
        now: i64,
        duration: i64,
        periods: u32,
        is_transferable: bool,
    ) -> Self {
        Self {
            token_mint,
            owner: TOKEN_LOCK_OWNER,
            beneficiary,
            managed_amount: amount,
            start_time: now,
            end_time: now.saturating_add(duration),
            periods,
            release_start_time: 0,
            vesting_cliff_time: 0,
            revocable: Revocable::Disabled,
            is_transferable,
        }
    }
}

/// Accounts the vesting program needs to open a lock and the token account
/// the locked amount is moved into.
pub struct VestingLockAccounts<'a, 'info> {
    pub vesting_program: &'a AccountInfo<'info>,
    pub lock: &'a AccountInfo<'info>,
    pub lock_vault: &'a AccountInfo<'info>,
    pub payer: &'a AccountInfo<'info>,
    pub token_mint: &'a AccountInfo<'info>,
    pub source_vault: &'a AccountInfo<'info>,
    pub config: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
}

/// Open a vesting lock signed by the vault config and fund it from
/// `source_vault`. Returns the lock address.
pub fn create_vesting_lock(
    accounts: &VestingLockAccounts<'_, '_>,
    config_bump: u8,
    params: CreateLockParams,
) -> Result<Pubkey> {
    let amount = params.managed_amount;

    let mut data = instruction_discriminator("create_lock").to_vec();
    params
        .serialize(&mut data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;

    let ix = Instruction {
        program_id: accounts.vesting_program.key(),
        accounts: vec![
            AccountMeta::new(accounts.lock.key(), false),
            AccountMeta::new(accounts.lock_vault.key(), false),
            AccountMeta::new_readonly(accounts.config.key(), true),
            AccountMeta::new(accounts.payer.key(), true),
            AccountMeta::new_readonly(accounts.token_mint.key(), false),
            AccountMeta::new_readonly(accounts.token_program.key(), false),
            AccountMeta::new_readonly(accounts.system_program.key(), false),
        ],
        data,
    };

    let seeds: &[&[u8]] = &[SEED_VAULT_CONFIG, &[config_bump]];
    invoke_signed(
        &ix,
        &[
            accounts.lock.clone(),
            accounts.lock_vault.clone(),
            accounts.config.clone(),
            accounts.payer.clone(),
            accounts.token_mint.clone(),
            accounts.token_program.clone(),
            accounts.system_program.clone(),
            accounts.vesting_program.clone(),
        ],
        &[seeds],
    )?;

    transfer_from_vault(
        accounts.token_program,
        accounts.source_vault,
        accounts.lock_vault,
        accounts.config,
        config_bump,
        amount,
    )?;

    msg!(
        "[VESTING] Lock {} funded with {} for {}",
        accounts.lock.key(),
        amount,
        params.beneficiary
    );
    Ok(accounts.lock.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_lock_is_owned_by_sentinel_and_irrevocable() {
        let mint = Pubkey::new_unique();
        let beneficiary = Pubkey::new_unique();
        let params = CreateLockParams::linear(mint, beneficiary, 500, 1_000, 86_400, 30, false);
        assert_eq!(params.owner, TOKEN_LOCK_OWNER);
        assert_eq!(params.end_time, 1_000 + 86_400);
        assert_eq!(params.revocable, Revocable::Disabled);
        assert_eq!(params.release_start_time, 0);
        assert_eq!(params.vesting_cliff_time, 0);
        assert!(!params.is_transferable);
    }
}
