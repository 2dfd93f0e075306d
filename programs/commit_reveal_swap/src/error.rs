use anchor_lang::error_code;

#[error_code]
pub enum CommitSwapError {
    #[msg("A live commitment already exists for this owner")]
    AlreadyCommitted,

    #[msg("No live commitment exists for this owner")]
    NotFound,

    #[msg("The revealed swap details do not match the committed hash.")]
    InvalidReveal,

    #[msg("Forwarded accounts are missing a required participant or carry wrong flags")]
    MalformedAccounts,

    #[msg("Jupiter program ID mismatch.")]
    InvalidRoutingVenue,

    #[msg("Fee account must be the fee wallet's token account for the output mint")]
    InvalidFeeAccount,

    #[msg("Commitment belongs to a different owner")]
    CommitmentOwnerMismatch,

    #[msg("Commitment has expired")]
    CommitmentExpired,

    #[msg("Commitment cannot be revealed in this slot yet")]
    RevealTooEarly,

    #[msg("Swap instruction data is empty")]
    PayloadMissing,

    #[msg("Swap instruction data exceeds the maximum size")]
    PayloadTooLarge,

    #[msg("Too many accounts forwarded to the routing venue")]
    TooManyForwardedAccounts,

    #[msg("Swap amount must be greater than zero")]
    InvalidAmount,

    #[msg("Program is paused")]
    ProgramPaused,

    ProgramNotExecutable,

    InvalidConfigValue,

    InvalidRemainingAccounts,

    IntegerOverflow,
}
