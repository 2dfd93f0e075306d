use anchor_lang::prelude::*;

/// Event emitted when program is initialized
#[event]
pub struct ProgramInitialized {
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when program configuration is updated
#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub update_type: String,
    pub new_value: u64,
    pub timestamp: i64,
}

/// Event emitted when a swap commitment is stored
#[event]
pub struct SwapCommitted {
    pub owner: Pubkey,
    pub commit_record: Pubkey,
    pub hash: [u8; 32],
    pub overwritten: bool,
    pub earliest_reveal_slot: u64,
    pub expires_at: i64,
    pub timestamp: i64,
}

/// Event emitted when a revealed swap was forwarded and its commitment consumed
#[event]
pub struct SwapExecuted {
    pub owner: Pubkey,
    pub commit_record: Pubkey,
    pub routing_venue: Pubkey,
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    pub amount: u64,
    pub fee_account: Pubkey,
    pub forwarded_accounts: u8,
    pub timestamp: i64,
}

/// Event emitted when an owner withdraws an unrevealed commitment
#[event]
pub struct CommitCancelled {
    pub owner: Pubkey,
    pub commit_record: Pubkey,
    pub timestamp: i64,
}

impl SwapCommitted {
    pub fn emit_event(
        owner: Pubkey,
        commit_record: Pubkey,
        hash: [u8; 32],
        overwritten: bool,
        earliest_reveal_slot: u64,
        expires_at: i64,
        timestamp: i64,
    ) {
        emit!(Self {
            owner,
            commit_record,
            hash,
            overwritten,
            earliest_reveal_slot,
            expires_at,
            timestamp,
        });
    }
}
