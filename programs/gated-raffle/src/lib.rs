use anchor_lang::prelude::*;
use instructions::*;
use state::{RaffleTerms, RaffleView, StakeSchedule};

pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;

declare_id!("HHmC6LkVUTnsa9mcbLAVZeWozdmiKipyEQ99vJ95ciMp");

#[program]
pub mod gated_raffle {
    use super::*;

    pub fn init_config(
        ctx: Context<InitConfig>,
        credential_ledger: Pubkey,
        stake_schedule: StakeSchedule,
    ) -> Result<()> {
        instructions::init_config::init_config(ctx, credential_ledger, stake_schedule)
    }

    pub fn set_credential_ledger(
        ctx: Context<SetCredentialLedger>,
        credential_ledger: Pubkey,
    ) -> Result<()> {
        instructions::set_credential_ledger::set_credential_ledger(ctx, credential_ledger)
    }

    pub fn set_stake_schedule(
        ctx: Context<SetStakeSchedule>,
        stake_schedule: StakeSchedule,
    ) -> Result<()> {
        instructions::set_stake_schedule::set_stake_schedule(ctx, stake_schedule)
    }

    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        minimum_tier: u64,
        duration: u64,
    ) -> Result<u64> {
        instructions::create_raffle::create_raffle(ctx, minimum_tier, duration)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, raffle_id: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, raffle_id)
    }

    pub fn post_winners(
        ctx: Context<PostWinners>,
        raffle_id: u64,
        winners: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::post_winners::post_winners(ctx, raffle_id, winners)
    }

    pub fn get_raffle(ctx: Context<ReadRaffle>, raffle_id: u64) -> Result<RaffleView> {
        instructions::read_raffle::get_raffle(ctx, raffle_id)
    }

    pub fn raffle_terms(ctx: Context<ReadRaffle>, raffle_id: u64) -> Result<RaffleTerms> {
        instructions::read_raffle::raffle_terms(ctx, raffle_id)
    }

    pub fn raffle_count(ctx: Context<ReadConfig>) -> Result<u64> {
        instructions::read_raffle::raffle_count(ctx)
    }
}
