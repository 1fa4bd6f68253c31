use super::instruction_discriminator;
use crate::constants::SEED_VAULT_CONFIG;
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

/// Largest fee tier a path can encode (3 bytes)
pub const MAX_PATH_FEE: u32 = 0x00FF_FFFF;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExactInputParams {
    pub path: Vec<u8>,
    pub amount_in: u64,
    pub amount_out_minimum: u64,
    pub deadline: i64,
}

/// Encode a swap route `token -> [intermediate ->] emission`.
///
/// Each hop is `mint (32 bytes) | fee (3 bytes big-endian)`, closed by the
/// output mint. A pool token equal to `intermediate` swaps directly.
pub fn build_swap_path(
    token: &Pubkey,
    intermediate: &Pubkey,
    emission: &Pubkey,
    fees: [u32; 2],
) -> Result<Vec<u8>> {
    let mut path = Vec::with_capacity(32 * 3 + 3 * 2);
    path.extend_from_slice(token.as_ref());
    push_fee(&mut path, fees[0])?;
    if token != intermediate {
        path.extend_from_slice(intermediate.as_ref());
        push_fee(&mut path, fees[1])?;
    }
    path.extend_from_slice(emission.as_ref());
    Ok(path)
}

fn push_fee(path: &mut Vec<u8>, fee: u32) -> Result<()> {
    require!(fee <= MAX_PATH_FEE, ErrorCode::InvalidAmount);
    path.extend_from_slice(&fee.to_be_bytes()[1..]);
    Ok(())
}

pub struct SwapAccounts<'a, 'info> {
    pub router_program: &'a AccountInfo<'info>,
    /// Delegate approved on `source` for the swap amount
    pub router_authority: &'a AccountInfo<'info>,
    pub source: &'a AccountInfo<'info>,
    pub destination: &'a AccountInfo<'info>,
    pub config: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
    /// Route-specific pool accounts, forwarded as-is
    pub route: &'a [AccountInfo<'info>],
}

pub fn exact_input(accounts: &SwapAccounts<'_, '_>, config_bump: u8, params: ExactInputParams) -> Result<()> {
    let mut data = instruction_discriminator("exact_input").to_vec();
    params
        .serialize(&mut data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;

    let mut metas = vec![
        AccountMeta::new_readonly(accounts.router_authority.key(), false),
        AccountMeta::new(accounts.source.key(), false),
        AccountMeta::new(accounts.destination.key(), false),
        AccountMeta::new_readonly(accounts.config.key(), true),
        AccountMeta::new_readonly(accounts.token_program.key(), false),
    ];
    let mut infos = vec![
        accounts.router_authority.clone(),
        accounts.source.clone(),
        accounts.destination.clone(),
        accounts.config.clone(),
        accounts.token_program.clone(),
    ];
    for info in accounts.route.iter() {
        metas.push(if info.is_writable {
            AccountMeta::new(info.key(), false)
        } else {
            AccountMeta::new_readonly(info.key(), false)
        });
        infos.push(info.clone());
    }
    infos.push(accounts.router_program.clone());

    let ix = Instruction {
        program_id: accounts.router_program.key(),
        accounts: metas,
        data,
    };
    let seeds: &[&[u8]] = &[SEED_VAULT_CONFIG, &[config_bump]];
    invoke_signed(&ix, &infos, &[seeds])?;
    Ok(())
}
