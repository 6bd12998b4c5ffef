use crate::state::{Config, Entry, Raffle, RaffleTerms, RaffleView, CONFIG_SEED};
use anchor_lang::prelude::*;

/// Returns the entrants and winners of a raffle through return data.
///
/// Entrants are read from the raffle's entry accounts, passed as remaining
/// accounts in any order; all of them are required. Return data is capped
/// at 1024 bytes, so larger raffles are read off-chain with the same
/// [`Raffle::view`] over the fetched entry accounts.
pub fn get_raffle(ctx: Context<ReadRaffle>, raffle_id: u64) -> Result<RaffleView> {
    let raffle = load(&ctx.accounts.config, &ctx.accounts.raffle, raffle_id)?;
    let entries = ctx
        .remaining_accounts
        .iter()
        .map(Entry::load)
        .collect::<Result<Vec<_>>>()?;

    raffle.view(&entries)
}

/// Returns the raffle's `(minimum_tier, start_time, duration)` as stored at creation.
pub fn raffle_terms(ctx: Context<ReadRaffle>, raffle_id: u64) -> Result<RaffleTerms> {
    Ok(load(&ctx.accounts.config, &ctx.accounts.raffle, raffle_id)?.terms())
}

pub fn raffle_count(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.raffle_counter)
}

fn load(config: &Config, raffle: &UncheckedAccount, raffle_id: u64) -> Result<Raffle> {
    config.require_raffle(raffle_id)?;
    Raffle::load(&raffle.to_account_info(), raffle_id)
}

#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: Owner, layout and id are validated by `Raffle::load`.
    pub raffle: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadConfig<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}
