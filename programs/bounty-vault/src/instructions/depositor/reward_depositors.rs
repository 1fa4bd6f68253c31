use crate::errors::ErrorCode;
use crate::events::DepositorsRewarded;
use crate::states::Pool;
use crate::utils::transfer_from_user;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
pub struct RewardDepositors<'info> {
    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut, address = pool.token_vault)]
    pub pool_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = sender_token_account.mint == pool.token_mint @ ErrorCode::PoolTokenMismatch
    )]
    pub sender_token_account: Account<'info, TokenAccount>,

    pub sender: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Donate pool tokens to the bounty balance; every share gains value
pub fn reward_depositors(ctx: Context<RewardDepositors>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.inject_reward(amount)?;

    transfer_from_user(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.sender_token_account.to_account_info(),
        &ctx.accounts.pool_vault.to_account_info(),
        &ctx.accounts.sender.to_account_info(),
        amount,
    )?;

    msg!("[REWARD_DEPOSITORS] Pool {} - {} added, balance {}", pool.pool_id, amount, pool.balance);

    emit!(DepositorsRewarded {
        pool_id: pool.pool_id,
        sender: ctx.accounts.sender.key(),
        amount,
        pool_balance: pool.balance,
    });

    Ok(())
}
