use crate::{
    error::RaffleError,
    state::{Config, Raffle, CONFIG_SEED},
};
use anchor_lang::prelude::*;

/// Event emitted when winners are posted for a raffle
#[event]
pub struct WinnersPosted {
    pub raffle_id: u64,
    pub winners: Vec<Pubkey>,
    pub posted_at: i64,
}

/// Records the externally selected winners of a raffle.
///
/// The list is stored verbatim, in the given order. It may be posted at
/// any time after creation and posted again; the latest posting replaces
/// the previous one. Winners are not checked against the entrant list.
///
/// # Errors
/// - `Unauthorized` if the signer is not the program authority
/// - `RaffleNotFound` if no raffle exists with this id
/// - `TooManyWinners` if more than `MAX_WINNERS` keys are supplied
pub fn post_winners(ctx: Context<PostWinners>, raffle_id: u64, winners: Vec<Pubkey>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let config = &ctx.accounts.config;
    config.require_raffle(raffle_id)?;

    let raffle_info = ctx.accounts.raffle.to_account_info();
    let mut raffle = Raffle::load(&raffle_info, raffle_id)?;
    config.post_winners(&authority, &mut raffle, winners.clone())?;
    raffle.store(&raffle_info)?;

    msg!("Posted {} winners for raffle {}", winners.len(), raffle_id);
    emit!(WinnersPosted {
        raffle_id,
        winners,
        posted_at: now,
    });

    Ok(())
}

/// Accounts required for the post_winners instruction
#[derive(Accounts)]
pub struct PostWinners<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ RaffleError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Owner, layout and id are validated by `Raffle::load`. The
    /// account was sized for `MAX_WINNERS` at creation.
    #[account(mut)]
    pub raffle: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
}
