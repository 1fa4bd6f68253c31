use crate::events::CommitteeCheckedIn;
use crate::states::Pool;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CommitteeCheckIn<'info> {
    #[account(
        mut,
        seeds = [Pool::PREFIX_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    pub committee: Signer<'info>,
}

/// Committee confirms it controls its key; opens the pool for deposits
pub fn committee_check_in(ctx: Context<CommitteeCheckIn>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.check_in_committee(&ctx.accounts.committee.key())?;

    emit!(CommitteeCheckedIn {
        pool_id: pool.pool_id,
        committee: pool.committee,
    });

    Ok(())
}
