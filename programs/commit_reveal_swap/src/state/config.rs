use anchor_lang::prelude::*;

#[account]
#[derive(Default, InitSpace)]
pub struct Config {
    pub authority: Pubkey,
    /// What happens when an owner commits while a commitment is still live
    pub recommit_policy: RecommitPolicy,
    /// Require reveals to equal `swap_digest` over the executed swap
    pub bind_payload: bool,
    /// Seconds a commitment stays revealable, 0 for no expiry
    pub commit_ttl: i64,
    /// Slots that must pass between commit and reveal
    pub min_reveal_delay: u64,
    pub is_paused: bool,
    pub bump: u8,
}

impl Config {
    pub const PREFIX_SEED: &'static [u8] = b"config";
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, InitSpace)]
pub enum RecommitPolicy {
    #[default]
    Reject,
    Overwrite,
}

impl TryFrom<u64> for RecommitPolicy {
    type Error = ();

    fn try_from(value: u64) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(RecommitPolicy::Reject),
            1 => Ok(RecommitPolicy::Overwrite),
            _ => Err(()),
        }
    }
}

#[derive(Debug, AnchorSerialize, AnchorDeserialize)]
pub enum UpdateConfigType {
    RecommitPolicy = 0,
    BindPayload = 1,
    CommitTtl = 2,
    MinRevealDelay = 3,
    Paused = 4,
    Admin = 5,
}
