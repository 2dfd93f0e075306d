use anchor_lang::prelude::*;

use crate::error::CommitSwapError;
use crate::events::CommitCancelled;
use crate::state::SwapCommit;

pub fn cancel_commit(ctx: Context<CancelCommit>) -> Result<()> {
    let commit_record = ctx.accounts.commit_record.to_account_info();
    let record = SwapCommit::load(&commit_record)?.ok_or(CommitSwapError::NotFound)?;
    require_keys_eq!(
        record.owner,
        ctx.accounts.sender.key(),
        CommitSwapError::CommitmentOwnerMismatch
    );

    SwapCommit::consume(&commit_record, &ctx.accounts.sender.to_account_info())?;

    msg!("Commitment cancelled for {}", record.owner);
    emit!(CommitCancelled {
        owner: record.owner,
        commit_record: commit_record.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CancelCommit<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: loaded through `SwapCommit::load`
    #[account(
        mut,
        seeds = [SwapCommit::PREFIX_SEED, sender.key().as_ref()],
        bump,
    )]
    pub commit_record: UncheckedAccount<'info>,
}
