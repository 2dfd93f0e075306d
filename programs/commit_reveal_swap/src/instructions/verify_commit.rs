use anchor_lang::prelude::*;

use crate::state::{verify_reveal, RevealStatus, SwapCommit};

/// Read-only check of a reveal against `owner`'s commitment. Nothing is
/// consumed; the status is returned as instruction return data.
pub fn verify_commit(ctx: Context<VerifyCommit>, reveal: [u8; 32]) -> Result<RevealStatus> {
    let record = SwapCommit::load(&ctx.accounts.commit_record.to_account_info())?;
    let status = verify_reveal(record.as_ref(), ctx.accounts.owner.key, &reveal);
    msg!("Reveal status for {}: {:?}", ctx.accounts.owner.key(), status);
    Ok(status)
}

#[derive(Accounts)]
pub struct VerifyCommit<'info> {
    /// CHECK: only used to derive the commitment address
    pub owner: UncheckedAccount<'info>,

    /// CHECK: may be uninitialized; loaded through `SwapCommit::load`
    #[account(seeds = [SwapCommit::PREFIX_SEED, owner.key().as_ref()], bump)]
    pub commit_record: UncheckedAccount<'info>,
}
