use crate::{
    error::RaffleError,
    state::{Config, StakeSchedule, CONFIG_SEED},
};
use anchor_lang::prelude::*;

#[event]
pub struct StakeScheduleUpdated {
    pub previous: StakeSchedule,
    pub stake_schedule: StakeSchedule,
}

/// Replaces the tier to minimum-stake schedule. Existing raffles are judged
/// by the new schedule from their next entry on.
pub fn set_stake_schedule(
    ctx: Context<SetStakeSchedule>,
    stake_schedule: StakeSchedule,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    let previous = config.stake_schedule;

    config.set_stake_schedule(&authority, stake_schedule)?;

    emit!(StakeScheduleUpdated {
        previous,
        stake_schedule,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetStakeSchedule<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ RaffleError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}
