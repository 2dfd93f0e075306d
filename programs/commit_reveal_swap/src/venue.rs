use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, program::invoke};

use crate::constants::JUPITER_PROGRAM_ID;
use crate::error::CommitSwapError;
use crate::security::validation;

/// External program that performs the actual exchange.
///
/// The program only ever talks to the venue through this trait, so tests can
/// substitute a deterministic stub for the on-chain Jupiter program.
pub trait RoutingVenue<'info> {
    fn program_id(&self) -> Pubkey;

    fn invoke(&self, instruction: &Instruction, accounts: &[AccountInfo<'info>]) -> Result<()>;
}

/// Jupiter aggregator reached through a plain CPI.
pub struct JupiterVenue<'a, 'info> {
    program: &'a AccountInfo<'info>,
}

impl<'a, 'info> JupiterVenue<'a, 'info> {
    pub fn new(program: &'a AccountInfo<'info>) -> Result<Self> {
        require_keys_eq!(
            *program.key,
            JUPITER_PROGRAM_ID,
            CommitSwapError::InvalidRoutingVenue
        );
        validation::validate_program_executable(program)?;
        Ok(Self { program })
    }
}

impl<'a, 'info> RoutingVenue<'info> for JupiterVenue<'a, 'info> {
    fn program_id(&self) -> Pubkey {
        *self.program.key
    }

    fn invoke(&self, instruction: &Instruction, accounts: &[AccountInfo<'info>]) -> Result<()> {
        let mut account_infos = Vec::with_capacity(accounts.len() + 1);
        account_infos.push(self.program.clone());
        account_infos.extend_from_slice(accounts);

        invoke(instruction, &account_infos)?;
        Ok(())
    }
}

/// Instruction for `program_id` carrying `payload` untouched and the accounts
/// in their submitted order and flags.
pub fn build_swap_instruction(
    program_id: Pubkey,
    payload: &[u8],
    accounts: &[AccountInfo],
) -> Instruction {
    let account_metas = accounts
        .iter()
        .map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.is_signer,
            is_writable: account.is_writable,
        })
        .collect::<Vec<_>>();

    Instruction {
        program_id,
        accounts: account_metas,
        data: payload.to_vec(),
    }
}

/// Forward the swap to the venue. Errors raised by the venue are returned
/// as-is so callers see its own failure code.
pub fn forward_swap<'info, V: RoutingVenue<'info>>(
    venue: &V,
    payload: &[u8],
    accounts: &[AccountInfo<'info>],
) -> Result<()> {
    let program_id = venue.program_id();
    require_keys_eq!(
        program_id,
        JUPITER_PROGRAM_ID,
        CommitSwapError::InvalidRoutingVenue
    );

    let instruction = build_swap_instruction(program_id, payload, accounts);

    msg!(
        "Forwarding swap to {} with {} accounts",
        program_id,
        accounts.len()
    );

    venue.invoke(&instruction, accounts).map_err(|e| {
        msg!("Routing venue failed: {}", e);
        e
    })
}
