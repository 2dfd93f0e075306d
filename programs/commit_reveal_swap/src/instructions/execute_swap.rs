use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{FEE_WALLET, JUPITER_PROGRAM_ID};
use crate::error::CommitSwapError;
use crate::events::SwapExecuted;
use crate::security::{validation, RequiredAccount};
use crate::state::{swap_digest, verify_reveal, Config, RevealStatus, SwapCommit};
use crate::venue::{forward_swap, JupiterVenue, RoutingVenue};

/// Swap details presented when revealing a commitment.
#[derive(Debug, Clone, Copy)]
pub struct RevealedSwap<'a> {
    pub owner: Pubkey,
    pub reveal: [u8; 32],
    pub amount: u64,
    pub payload: &'a [u8],
}

pub fn execute_swap<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, ExecuteSwap<'info>>,
    data: Vec<u8>,
    hash: [u8; 32],
    amount: u64,
) -> Result<()> {
    // 0. Validate args and global state
    require!(!ctx.accounts.config.is_paused, CommitSwapError::ProgramPaused);
    validation::validate_payload(&data)?;
    validation::validate_amount(amount)?;
    validation::validate_remaining_accounts(ctx.remaining_accounts)?;
    let forwarded_accounts = u8::try_from(ctx.remaining_accounts.len())
        .map_err(|_| CommitSwapError::TooManyForwardedAccounts)?;

    // 1. Routing venue is fixed, never taken from the caller
    let jupiter_program = ctx.accounts.jupiter_program.to_account_info();
    let venue = JupiterVenue::new(&jupiter_program)?;

    // 2. Participants the forwarded call cannot do without
    let required = [
        RequiredAccount::signer(ctx.accounts.sender.key()),
        RequiredAccount::writable(ctx.accounts.sender_token_account.key()),
        RequiredAccount::writable(ctx.accounts.fee_account.key()),
    ];

    // 3. Verify, forward, consume
    let swap = RevealedSwap {
        owner: ctx.accounts.sender.key(),
        reveal: hash,
        amount,
        payload: &data,
    };
    let clock = Clock::get()?;
    reveal_and_forward(
        &ctx.accounts.commit_record.to_account_info(),
        &ctx.accounts.sender.to_account_info(),
        &swap,
        ctx.remaining_accounts,
        &required,
        &venue,
        &clock,
    )?;

    emit!(SwapExecuted {
        owner: swap.owner,
        commit_record: ctx.accounts.commit_record.key(),
        routing_venue: venue.program_id(),
        input_mint: ctx.accounts.input_mint.key(),
        output_mint: ctx.accounts.output_mint.key(),
        amount,
        fee_account: ctx.accounts.fee_account.key(),
        forwarded_accounts,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}

/// Checks `swap` against the commitment held by `commit_record`, forwards it
/// to `venue` and consumes the commitment.
///
/// Every check runs before the venue is invoked. If anything fails, including
/// the venue itself, the commitment is left exactly as it was.
pub fn reveal_and_forward<'info, V: RoutingVenue<'info>>(
    commit_record: &AccountInfo<'info>,
    refund_to: &AccountInfo<'info>,
    swap: &RevealedSwap,
    forwarded: &[AccountInfo<'info>],
    required: &[RequiredAccount],
    venue: &V,
    clock: &Clock,
) -> Result<SwapCommit> {
    let record = SwapCommit::load(commit_record)?;
    match verify_reveal(record.as_ref(), &swap.owner, &swap.reveal) {
        RevealStatus::Match => {}
        RevealStatus::Mismatch => {
            msg!("Reveal does not match commitment of {}", swap.owner);
            return err!(CommitSwapError::InvalidReveal);
        }
        RevealStatus::NotFound => {
            msg!("No live commitment for {}", swap.owner);
            return err!(CommitSwapError::NotFound);
        }
    }
    let record = record.ok_or(CommitSwapError::NotFound)?;

    if record.bind_payload {
        require!(
            swap_digest(&swap.owner, swap.amount, swap.payload) == swap.reveal,
            CommitSwapError::InvalidReveal
        );
    }

    require!(
        clock.slot >= record.earliest_reveal_slot,
        CommitSwapError::RevealTooEarly
    );
    require!(
        !record.is_expired(clock.unix_timestamp),
        CommitSwapError::CommitmentExpired
    );

    validation::validate_forwarded_accounts(forwarded, required)?;

    msg!("Reveal verified for {}", swap.owner);
    forward_swap(venue, swap.payload, forwarded)?;

    SwapCommit::consume(commit_record, refund_to)?;
    msg!("Commitment consumed for {}", swap.owner);

    Ok(record)
}

#[derive(Accounts)]
pub struct ExecuteSwap<'info> {
    #[account(mint::token_program = input_mint_program)]
    pub input_mint: Box<InterfaceAccount<'info, Mint>>,
    pub input_mint_program: Interface<'info, TokenInterface>,

    #[account(mint::token_program = output_mint_program)]
    pub output_mint: Box<InterfaceAccount<'info, Mint>>,
    pub output_mint_program: Interface<'info, TokenInterface>,

    #[account(mut)]
    pub sender: Signer<'info>,

    /// Sender's token account receiving the output mint
    #[account(
        mut,
        associated_token::mint = output_mint,
        associated_token::authority = sender,
        associated_token::token_program = output_mint_program,
    )]
    pub sender_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Fee wallet's token account for the output mint
    #[account(
        mut,
        constraint = fee_account.owner == FEE_WALLET @ CommitSwapError::InvalidFeeAccount,
        constraint = fee_account.mint == output_mint.key() @ CommitSwapError::InvalidFeeAccount,
    )]
    pub fee_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Commitment being revealed. Closed on success to refund rent to sender.
    /// CHECK: loaded through `SwapCommit::load`; missing or consumed commitments surface as `NotFound`
    #[account(
        mut,
        seeds = [SwapCommit::PREFIX_SEED, sender.key().as_ref()],
        bump,
    )]
    pub commit_record: UncheckedAccount<'info>,

    /// CHECK: fixed address, executable checked by `JupiterVenue::new`
    #[account(address = JUPITER_PROGRAM_ID @ CommitSwapError::InvalidRoutingVenue)]
    pub jupiter_program: UncheckedAccount<'info>,

    #[account(seeds = [Config::PREFIX_SEED], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,
}
