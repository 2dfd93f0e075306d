use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod security;
pub mod state;
pub mod venue;


use instructions::*;
use state::{RevealStatus, UpdateConfigType};

declare_id!("76j3Mhhr64JU2Lj1FMV1dPErgmJMVgpPcm19nyx1XHDF");

/// Commit-reveal gate in front of Jupiter swaps: a swap can only be executed
/// by revealing a value committed to in an earlier transaction
#[program]
pub mod commit_reveal_swap {
    use super::*;

    /// Create the program configuration
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Update one configuration parameter (authority only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        param: UpdateConfigType,
        value: u64,
    ) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    /// Register the sender's commitment to a future swap
    pub fn commit_swap(ctx: Context<CommitSwap>, swap_hash: [u8; 32]) -> Result<()> {
        instructions::commit_swap(ctx, swap_hash)
    }

    /// Check a reveal against an owner's commitment without consuming it
    pub fn verify_commit(ctx: Context<VerifyCommit>, reveal: [u8; 32]) -> Result<RevealStatus> {
        instructions::verify_commit(ctx, reveal)
    }

    /// Reveal the commitment and forward the swap to Jupiter
    pub fn execute_swap<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, ExecuteSwap<'info>>,
        data: Vec<u8>,
        hash: [u8; 32],
        amount: u64,
    ) -> Result<()> {
        instructions::execute_swap(ctx, data, hash, amount)
    }

    /// Withdraw an unrevealed commitment and reclaim its rent
    pub fn cancel_commit(ctx: Context<CancelCommit>) -> Result<()> {
        instructions::cancel_commit(ctx)
    }
}
