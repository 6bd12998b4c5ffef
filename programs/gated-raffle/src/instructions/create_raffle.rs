use crate::{
    error::RaffleError,
    state::{Config, Raffle, CONFIG_SEED, RAFFLE_ACCOUNT_SIZE, RAFFLE_SEED},
};
use anchor_lang::prelude::*;

/// Event emitted when a raffle is created
#[event]
pub struct RaffleCreated {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// Sequence id of the new raffle
    pub raffle_id: u64,
    /// Lowest credential tier allowed to enter
    pub minimum_tier: u64,
    /// Entry window length in seconds
    pub duration: u64,
    /// When the raffle was created; the entry window opens here
    pub start_time: i64,
}

/// Instruction to create a new raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `minimum_tier` - Lowest credential tier allowed to enter
/// * `duration` - Entry window length in seconds; zero yields a raffle that
///   never accepts entries
///
/// # Security Considerations
/// 1. Only the program authority may create raffles
/// 2. The raffle's tier, start time and duration are immutable once written
///
/// # Account Validations
/// * Raffle - New PDA initialized with seeds ["raffle", raffle_counter]
/// * Config - Must hold the signing authority; its counter is incremented
///
/// # Implementation Notes
/// - Raffle ids are 0-based and assigned in creation order
/// - The raffle account is allocated at its final size, winners included
pub fn create_raffle(ctx: Context<CreateRaffle>, minimum_tier: u64, duration: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();

    let raffle = ctx.accounts.config.create_raffle(
        &authority,
        minimum_tier,
        duration,
        now,
        ctx.bumps.raffle,
    )?;
    let raffle_id = raffle.raffle_id;
    ctx.accounts.raffle.set_inner(raffle);

    msg!("Raffle {} created", raffle_id);
    emit!(RaffleCreated {
        raffle: ctx.accounts.raffle.key(),
        raffle_id,
        minimum_tier,
        duration,
        start_time: now,
    });

    Ok(raffle_id)
}

#[derive(Accounts)]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            RAFFLE_SEED,
            config.raffle_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ RaffleError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
