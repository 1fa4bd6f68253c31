use crate::constants::SEED_VAULT_CONFIG;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Approve, Burn, Revoke, Transfer};

/// Transfer tokens out of an account whose authority is the vault config PDA.
pub fn transfer_from_vault<'info>(
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    config: &AccountInfo<'info>,
    config_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let seeds: &[&[u8]] = &[SEED_VAULT_CONFIG, &[config_bump]];
    let signer = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: config.clone(),
            },
            signer,
        ),
        amount,
    )
}

pub fn transfer_from_user<'info>(
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: owner.clone(),
            },
        ),
        amount,
    )
}

pub fn burn_from_vault<'info>(
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    config: &AccountInfo<'info>,
    config_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let seeds: &[&[u8]] = &[SEED_VAULT_CONFIG, &[config_bump]];
    let signer = &[seeds];

    token::burn(
        CpiContext::new_with_signer(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: config.clone(),
            },
            signer,
        ),
        amount,
    )
}

/// Let `delegate` move up to `amount` out of a vault-owned token account.
pub fn approve_delegate<'info>(
    token_program: &AccountInfo<'info>,
    account: &AccountInfo<'info>,
    delegate: &AccountInfo<'info>,
    config: &AccountInfo<'info>,
    config_bump: u8,
    amount: u64,
) -> Result<()> {
    let seeds: &[&[u8]] = &[SEED_VAULT_CONFIG, &[config_bump]];
    let signer = &[seeds];

    token::approve(
        CpiContext::new_with_signer(
            token_program.clone(),
            Approve {
                to: account.clone(),
                delegate: delegate.clone(),
                authority: config.clone(),
            },
            signer,
        ),
        amount,
    )
}

pub fn revoke_delegate<'info>(
    token_program: &AccountInfo<'info>,
    account: &AccountInfo<'info>,
    config: &AccountInfo<'info>,
    config_bump: u8,
) -> Result<()> {
    let seeds: &[&[u8]] = &[SEED_VAULT_CONFIG, &[config_bump]];
    let signer = &[seeds];

    token::revoke(CpiContext::new_with_signer(
        token_program.clone(),
        Revoke {
            source: account.clone(),
            authority: config.clone(),
        },
        signer,
    ))
}
