use anchor_lang::prelude::*;

use crate::{
    error::CommitSwapError,
    events::ConfigUpdated,
    state::{Config, RecommitPolicy, UpdateConfigType},
};

pub fn update_config(
    ctx: Context<UpdateConfig>,
    param: UpdateConfigType,
    value: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    match param {
        UpdateConfigType::RecommitPolicy => {
            config.recommit_policy = RecommitPolicy::try_from(value)
                .map_err(|_| CommitSwapError::InvalidConfigValue)?;
        }
        UpdateConfigType::BindPayload => {
            config.bind_payload = parse_flag(value)?;
        }
        UpdateConfigType::CommitTtl => {
            config.commit_ttl =
                i64::try_from(value).map_err(|_| CommitSwapError::InvalidConfigValue)?;
        }
        UpdateConfigType::MinRevealDelay => {
            config.min_reveal_delay = value;
        }
        UpdateConfigType::Paused => {
            config.is_paused = parse_flag(value)?;
        }
        UpdateConfigType::Admin => {
            let new_admin_info = ctx
                .remaining_accounts
                .first()
                .ok_or(CommitSwapError::InvalidRemainingAccounts)?;
            config.authority = new_admin_info.key();
        }
    }

    msg!("Config updated: {:?} = {}", param, value);
    emit!(ConfigUpdated {
        authority: ctx.accounts.authority.key(),
        update_type: format!("{:?}", param),
        new_value: value,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

fn parse_flag(value: u64) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => err!(CommitSwapError::InvalidConfigValue),
    }
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// The current authority of the program.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The program's configuration account.
    #[account(
        mut,
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
        has_one = authority
    )]
    pub config: Box<Account<'info, Config>>,
}
