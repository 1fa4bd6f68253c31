use crate::errors::ErrorCode;
use crate::events::GeneralParametersUpdated;
use crate::states::{GeneralParameters, VaultConfig};
use anchor_lang::prelude::*;

/// Fields left `None` keep their current value
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct UpdateGeneralParams {
    pub hat_vesting_duration: Option<i64>,
    pub hat_vesting_periods: Option<u32>,
    pub withdraw_period: Option<i64>,
    pub safety_period: Option<i64>,
    pub reward_levels_delay: Option<i64>,
    pub withdraw_request_enable_period: Option<i64>,
    pub withdraw_request_pending_period: Option<i64>,
    pub claim_fee: Option<u64>,
}

impl UpdateGeneralParams {
    pub fn apply(&self, current: &GeneralParameters) -> Result<GeneralParameters> {
        let params = GeneralParameters {
            hat_vesting_duration: self.hat_vesting_duration.unwrap_or(current.hat_vesting_duration),
            hat_vesting_periods: self.hat_vesting_periods.unwrap_or(current.hat_vesting_periods),
            withdraw_period: self.withdraw_period.unwrap_or(current.withdraw_period),
            safety_period: self.safety_period.unwrap_or(current.safety_period),
            reward_levels_delay: self.reward_levels_delay.unwrap_or(current.reward_levels_delay),
            withdraw_request_enable_period: self
                .withdraw_request_enable_period
                .unwrap_or(current.withdraw_request_enable_period),
            withdraw_request_pending_period: self
                .withdraw_request_pending_period
                .unwrap_or(current.withdraw_request_pending_period),
            claim_fee: self.claim_fee.unwrap_or(current.claim_fee),
        };
        params.validate()?;
        Ok(params)
    }
}

#[derive(Accounts)]
pub struct UpdateGeneralParameters<'info> {
    #[account(
        mut,
        seeds = [VaultConfig::PREFIX_SEED],
        bump = vault_config.bump,
        constraint = governance.key() == vault_config.governance @ ErrorCode::NotGovernance
    )]
    pub vault_config: Account<'info, VaultConfig>,

    pub governance: Signer<'info>,
}

pub fn update_general_parameters(ctx: Context<UpdateGeneralParameters>, update: UpdateGeneralParams) -> Result<()> {
    let config = &mut ctx.accounts.vault_config;

    let old_params = config.params;
    let new_params = update.apply(&old_params)?;
    config.params = new_params;

    msg!("[UPDATE_PARAMS] {:?}", new_params);

    emit!(GeneralParametersUpdated {
        old_params,
        new_params,
        updated_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
