use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::Hasher;
use anchor_lang::system_program;

use crate::constants::SWAP_DIGEST_TAG;
use crate::error::CommitSwapError;
use crate::state::{Config, RecommitPolicy};
use crate::ID;

/// Commitment to a swap that is revealed and executed later.
/// The account address is derived from the owner, so an owner holds at most
/// one live commitment at a time.
#[account]
#[derive(Default, InitSpace, Debug)]
pub struct SwapCommit {
    /// Signer that created the commitment
    pub owner: Pubkey,
    /// Opaque value chosen by the owner, usually a digest of the swap
    pub hash: [u8; 32],
    /// Reveal must also equal `swap_digest` of the executed swap
    pub bind_payload: bool,
    pub committed_at: i64,
    pub commit_slot: u64,
    /// First slot in which the commitment may be revealed
    pub earliest_reveal_slot: u64,
    /// Unix expiration timestamp, 0 when the commitment never expires
    pub expires_at: i64,
    pub bump: u8,
}

/// Outcome of comparing a reveal against the stored commitment.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStatus {
    Match,
    Mismatch,
    NotFound,
}

impl SwapCommit {
    pub const PREFIX_SEED: &'static [u8] = b"commit";

    pub fn is_live(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Stores `hash` for `owner`, applying the recommit policy when a live
    /// commitment is already present. Returns whether one was overwritten.
    pub fn record(
        &mut self,
        owner: Pubkey,
        hash: [u8; 32],
        config: &Config,
        clock: &Clock,
        bump: u8,
    ) -> Result<bool> {
        let overwritten = self.is_live();
        if overwritten {
            require!(
                config.recommit_policy == RecommitPolicy::Overwrite,
                CommitSwapError::AlreadyCommitted
            );
            require_keys_eq!(self.owner, owner, CommitSwapError::CommitmentOwnerMismatch);
        }

        let earliest_reveal_slot = clock
            .slot
            .checked_add(config.min_reveal_delay)
            .ok_or(CommitSwapError::IntegerOverflow)?;
        let expires_at = match config.commit_ttl {
            0 => 0,
            ttl => clock
                .unix_timestamp
                .checked_add(ttl)
                .ok_or(CommitSwapError::IntegerOverflow)?,
        };

        *self = SwapCommit {
            owner,
            hash,
            bind_payload: config.bind_payload,
            committed_at: clock.unix_timestamp,
            commit_slot: clock.slot,
            earliest_reveal_slot,
            expires_at,
            bump,
        };
        Ok(overwritten)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at != 0 && now > self.expires_at
    }

    /// Reads the live commitment held by `info`.
    ///
    /// Accounts that were never created, were consumed earlier in the same
    /// transaction, or belong to another program yield `None`.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &ID || info.lamports() == 0 || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        if data.iter().all(|b| *b == 0) {
            return Ok(None);
        }
        let record = Self::try_deserialize(&mut &data[..])?;
        Ok(record.is_live().then_some(record))
    }

    /// Closes the commitment: rent goes back to `refund_to` and the account
    /// is handed back to the system program with no data, so the same address
    /// can be committed to again later in the transaction.
    pub fn consume(info: &AccountInfo, refund_to: &AccountInfo) -> Result<()> {
        let refunded = refund_to
            .lamports()
            .checked_add(info.lamports())
            .ok_or(CommitSwapError::IntegerOverflow)?;
        **refund_to.try_borrow_mut_lamports()? = refunded;
        **info.try_borrow_mut_lamports()? = 0;

        info.try_borrow_mut_data()?.fill(0);
        info.assign(&system_program::ID);
        info.resize(0)?;
        Ok(())
    }
}

/// Byte-exact comparison of `reveal` against the commitment owned by `owner`.
pub fn verify_reveal(record: Option<&SwapCommit>, owner: &Pubkey, reveal: &[u8; 32]) -> RevealStatus {
    match record {
        Some(record) if record.owner == *owner => {
            if record.hash == *reveal {
                RevealStatus::Match
            } else {
                RevealStatus::Mismatch
            }
        }
        _ => RevealStatus::NotFound,
    }
}

/// sha256(tag || owner || amount_le || payload), the value a payload-bound
/// commitment must reveal.
pub fn swap_digest(owner: &Pubkey, amount: u64, payload: &[u8]) -> [u8; 32] {
    let mut hasher = Hasher::default();
    hasher.hash(SWAP_DIGEST_TAG);
    hasher.hash(owner.as_ref());
    hasher.hash(&amount.to_le_bytes());
    hasher.hash(payload);
    hasher.result().to_bytes()
}
