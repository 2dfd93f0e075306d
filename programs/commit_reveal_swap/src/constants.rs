use anchor_lang::prelude::*;

/// Jupiter aggregator v6, the only program swaps are ever forwarded to.
pub const JUPITER_PROGRAM_ID: Pubkey = pubkey!("JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4");

/// Wallet whose output-mint token account collects the platform fee.
pub const FEE_WALLET: Pubkey = pubkey!("4HyUr6FF9U8HfWpxyCLKsVMMRGqZ8ekgwNDH7YkP5uqp");

/// Domain tag mixed into payload-bound commitments.
pub const SWAP_DIGEST_TAG: &[u8] = b"swap_digest";
