use crate::events::RewardSent;
use crate::states::{DepositorInfo, Pool};
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

/// Pay the depositor's settled reward from the reward vault.
///
/// The pool must be settled first. Pays at most what the vault holds; the
/// caller resets `reward_debt` afterwards.
pub fn pay_pending_reward<'info>(
    pool: &Pool,
    depositor: &DepositorInfo,
    reward_vault: &Account<'info, TokenAccount>,
    recipient: &AccountInfo<'info>,
    config: &AccountInfo<'info>,
    config_bump: u8,
    token_program: &AccountInfo<'info>,
) -> Result<u64> {
    let owed = pool.settled_reward(depositor)?;
    if owed == 0 {
        return Ok(0);
    }
    let paid = owed.min(reward_vault.amount);
    transfer_from_vault(
        token_program,
        &reward_vault.to_account_info(),
        recipient,
        config,
        config_bump,
        paid,
    )?;

    if paid < owed {
        msg!("[REWARD] Reward vault short: paid {} of {}", paid, owed);
    }
    emit!(RewardSent {
        pool_id: pool.pool_id,
        depositor: depositor.owner,
        paid,
        owed,
    });
    Ok(paid)
}
