use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    ledger::CredentialLedger,
    state::{Entry, Raffle, StakeSchedule, STAKE_SCHEDULE_SIZE},
};

pub const CONFIG_SEED: &[u8] = b"config";

// 8 discriminator + 32 authority + 32 credential_ledger + 17 stake_schedule + 8 raffle_counter + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + STAKE_SCHEDULE_SIZE + 8 + 1;

/// Program-wide settings and the raffle id sequence.
///
/// Raffle `n` lives at PDA `["raffle", n]` for every `n < raffle_counter`;
/// ids are never reused and raffles are never deleted.
#[account]
#[derive(Debug, PartialEq)]
pub struct Config {
    pub authority: Pubkey,
    /// Program that owns the credential accounts checked on entry.
    pub credential_ledger: Pubkey,
    pub stake_schedule: StakeSchedule,
    pub raffle_counter: u64,
    pub bump: u8,
}

impl Config {
    pub fn new(
        authority: Pubkey,
        credential_ledger: Pubkey,
        stake_schedule: StakeSchedule,
        bump: u8,
    ) -> Self {
        Self {
            authority,
            credential_ledger,
            stake_schedule,
            raffle_counter: 0,
            bump,
        }
    }

    pub fn require_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, RaffleError::Unauthorized);
        Ok(())
    }

    pub fn require_raffle(&self, raffle_id: u64) -> Result<()> {
        require!(raffle_id < self.raffle_counter, RaffleError::RaffleNotFound);
        Ok(())
    }

    /// Takes the next id and returns the raffle to store under it. The
    /// entry window opens at `now`.
    pub fn create_raffle(
        &mut self,
        caller: &Pubkey,
        minimum_tier: u64,
        duration: u64,
        now: i64,
        bump: u8,
    ) -> Result<Raffle> {
        self.require_authority(caller)?;

        let raffle_id = self.raffle_counter;
        self.raffle_counter = raffle_id.checked_add(1).ok_or(RaffleError::Overflow)?;
        Ok(Raffle::new(raffle_id, minimum_tier, now, duration, bump))
    }

    /// Admits `entity` into `raffle` under the configured stake schedule.
    pub fn enter_raffle(
        &self,
        raffle: &mut Raffle,
        entity: &Pubkey,
        now: i64,
        ledger: &dyn CredentialLedger,
        entry: &mut Entry,
        entry_bump: u8,
    ) -> Result<()> {
        raffle.admit(entity, now, ledger, &self.stake_schedule, entry, entry_bump)
    }

    /// Replaces the winner list verbatim. Allowed at any point after
    /// creation; the latest posting wins.
    pub fn post_winners(
        &self,
        caller: &Pubkey,
        raffle: &mut Raffle,
        winners: Vec<Pubkey>,
    ) -> Result<()> {
        self.require_authority(caller)?;
        raffle.set_winners(winners)
    }

    pub fn set_credential_ledger(
        &mut self,
        caller: &Pubkey,
        credential_ledger: Pubkey,
    ) -> Result<()> {
        self.require_authority(caller)?;
        self.credential_ledger = credential_ledger;
        Ok(())
    }

    pub fn set_stake_schedule(
        &mut self,
        caller: &Pubkey,
        stake_schedule: StakeSchedule,
    ) -> Result<()> {
        self.require_authority(caller)?;
        self.stake_schedule = stake_schedule;
        Ok(())
    }
}
