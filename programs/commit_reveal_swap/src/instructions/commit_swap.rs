use anchor_lang::prelude::*;

use crate::error::CommitSwapError;
use crate::events::SwapCommitted;
use crate::state::{Config, SwapCommit};

pub fn commit_swap(ctx: Context<CommitSwap>, swap_hash: [u8; 32]) -> Result<()> {
    require!(!ctx.accounts.config.is_paused, CommitSwapError::ProgramPaused);

    let clock = Clock::get()?;
    let owner = ctx.accounts.sender.key();
    let commit_record = &mut ctx.accounts.commit_record;

    let overwritten = commit_record.record(
        owner,
        swap_hash,
        &ctx.accounts.config,
        &clock,
        ctx.bumps.commit_record,
    )?;

    msg!(
        "Swap committed for {} (overwritten: {})",
        owner,
        overwritten
    );

    SwapCommitted::emit_event(
        owner,
        commit_record.key(),
        swap_hash,
        overwritten,
        commit_record.earliest_reveal_slot,
        commit_record.expires_at,
        clock.unix_timestamp,
    );
    Ok(())
}

#[derive(Accounts)]
pub struct CommitSwap<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(seeds = [Config::PREFIX_SEED], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    /// Commitment slot of `sender`, created on first use (rent payer: sender)
    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + SwapCommit::INIT_SPACE,
        seeds = [SwapCommit::PREFIX_SEED, sender.key().as_ref()],
        bump,
    )]
    pub commit_record: Account<'info, SwapCommit>,

    pub system_program: Program<'info, System>,
}
