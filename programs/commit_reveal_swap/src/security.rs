use anchor_lang::prelude::*;

use crate::error::CommitSwapError;

// Limits on caller-supplied swap input

/// Maximum size of the forwarded instruction data
pub const MAX_PAYLOAD_SIZE: usize = 1024;

/// Maximum number of accounts forwarded to the routing venue
pub const MAX_FORWARDED_ACCOUNTS: usize = 64;

// Forwarded account count is reported as a u8 in `SwapExecuted`
const _: () = assert!(MAX_FORWARDED_ACCOUNTS <= u8::MAX as usize);

/// Account that must take part in the forwarded call, with the access it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredAccount {
    pub key: Pubkey,
    pub writable: bool,
    pub signer: bool,
}

impl RequiredAccount {
    pub fn signer(key: Pubkey) -> Self {
        Self {
            key,
            writable: false,
            signer: true,
        }
    }

    pub fn writable(key: Pubkey) -> Self {
        Self {
            key,
            writable: true,
            signer: false,
        }
    }

    fn is_satisfied_by(&self, account: &AccountInfo) -> bool {
        account.key == &self.key
            && (!self.writable || account.is_writable)
            && (!self.signer || account.is_signer)
    }
}

pub mod validation {
    use super::*;

    /// Validate forwarded instruction data
    pub fn validate_payload(payload: &[u8]) -> Result<()> {
        require!(!payload.is_empty(), CommitSwapError::PayloadMissing);
        require!(
            payload.len() <= MAX_PAYLOAD_SIZE,
            CommitSwapError::PayloadTooLarge
        );
        Ok(())
    }

    /// Validate forwarded account count
    pub fn validate_remaining_accounts(accounts: &[AccountInfo]) -> Result<()> {
        require!(
            accounts.len() <= MAX_FORWARDED_ACCOUNTS,
            CommitSwapError::TooManyForwardedAccounts
        );
        Ok(())
    }

    pub fn validate_amount(amount: u64) -> Result<()> {
        require!(amount > 0, CommitSwapError::InvalidAmount);
        Ok(())
    }

    /// Validate program is executable
    pub fn validate_program_executable(program: &AccountInfo) -> Result<()> {
        require!(program.executable, CommitSwapError::ProgramNotExecutable);
        Ok(())
    }

    /// Every required participant must appear in the forwarded list with at
    /// least the access it needs.
    pub fn validate_forwarded_accounts(
        accounts: &[AccountInfo],
        required: &[RequiredAccount],
    ) -> Result<()> {
        for requirement in required {
            let present = accounts.iter().any(|acc| requirement.is_satisfied_by(acc));
            if !present {
                msg!("Forwarded accounts do not satisfy {}", requirement.key);
                return err!(CommitSwapError::MalformedAccounts);
            }
        }
        Ok(())
    }
}
