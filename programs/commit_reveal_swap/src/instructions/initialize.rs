use anchor_lang::prelude::*;

use crate::events::ProgramInitialized;
use crate::state::{Config, RecommitPolicy};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    ctx.accounts.config.set_inner(Config {
        authority: ctx.accounts.signer.key(),
        recommit_policy: RecommitPolicy::Reject,
        bind_payload: false,
        commit_ttl: 0,
        min_reveal_delay: 0,
        is_paused: false,
        bump: ctx.bumps.config,
    });

    msg!("Config initialized, authority {}", ctx.accounts.signer.key());
    emit!(ProgramInitialized {
        authority: ctx.accounts.signer.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::PREFIX_SEED],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    pub system_program: Program<'info, System>,
}
