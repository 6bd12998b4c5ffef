use anchor_lang::prelude::*;

use crate::{
    ledger::CredentialAccount,
    state::{Config, Entry, Raffle, CONFIG_SEED, ENTRY_ACCOUNT_SIZE, ENTRY_SEED},
};

/// Event emitted when an entrant is admitted
#[event]
pub struct RaffleEntered {
    pub raffle_id: u64,
    pub entrant: Pubkey,
    /// Position of the entrant in the raffle's entry order
    pub entry_index: u64,
    pub entered_at: i64,
}

/// Instruction to enter a raffle as the signing entrant
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `raffle_id` - Sequence id of the raffle to enter
///
/// # Security Considerations
/// Checks run in this order, the first failure aborts the instruction:
/// 1. The raffle exists
/// 2. The entry window is still open
/// 3. The entrant's credential tier meets the raffle minimum
/// 4. The entrant's stake meets the schedule's minimum for that tier
/// 5. The entrant has not entered before
///
/// # Account Validations
/// * Raffle - Must be the program-owned raffle with this id
/// * Entry - PDA with seeds ["entry", raffle, entrant]; created on first
///   entry, an existing one means the entrant is already in
/// * Credential - Must be the entrant's credential PDA under the configured
///   ledger program; an uninitialized PDA means no credential
///
/// # Implementation Notes
/// - The clock is read once and drives the window check
/// - No collateral moves; the ledger is only read
/// - A rejected entry reverts the entry account's creation with it
pub fn enter_raffle(ctx: Context<EnterRaffle>, raffle_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let entrant = ctx.accounts.entrant.key();
    let config = &ctx.accounts.config;
    config.require_raffle(raffle_id)?;

    let raffle_info = ctx.accounts.raffle.to_account_info();
    let mut raffle = Raffle::load(&raffle_info, raffle_id)?;

    let credential_info = ctx.accounts.credential.to_account_info();
    let ledger = CredentialAccount::new(&credential_info, &entrant, config.credential_ledger);

    let entry = &mut ctx.accounts.entry;
    config.enter_raffle(&mut raffle, &entrant, now, &ledger, entry, ctx.bumps.entry)?;
    raffle.store(&raffle_info)?;

    msg!("Entrant {} joined raffle {}", entrant, raffle_id);
    emit!(RaffleEntered {
        raffle_id,
        entrant,
        entry_index: entry.index,
        entered_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: Owner, layout and id are validated by `Raffle::load` so a
    /// missing raffle reports `RaffleNotFound`.
    #[account(mut)]
    pub raffle: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = entrant,
        space = ENTRY_ACCOUNT_SIZE,
        seeds = [
            ENTRY_SEED,
            raffle.key().as_ref(),
            entrant.key().as_ref(),
        ],
        bump,
    )]
    pub entry: Account<'info, Entry>,

    #[account(mut)]
    pub entrant: Signer<'info>,

    /// CHECK: Address, owner and layout are validated by `CredentialAccount`
    /// against the configured credential ledger on every read.
    pub credential: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
