use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    ledger::{CredentialLedger, StakePolicy},
    state::Entry,
};

pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Winners accepted in one posting. A legacy transaction is capped at 1232
/// bytes; after the signature, header, blockhash, the four account keys and
/// the instruction discriminator and raffle id, about 30 keys fit. 24 leaves
/// room for a compute-budget instruction alongside.
pub const MAX_WINNERS: usize = 24;

// 8 discriminator + 8 raffle_id + 8 minimum_tier + 8 start_time + 8 duration +
// 8 entrant_count + (4 + 32 * MAX_WINNERS) winners + 1 bump
pub const RAFFLE_ACCOUNT_SIZE: usize = 8 + 8 + 8 + 8 + 8 + 8 + (4 + 32 * MAX_WINNERS) + 1;

/// One raffle, stored at PDA `["raffle", raffle_id]`.
///
/// `minimum_tier`, `start_time` and `duration` are written once at creation.
/// Whether the raffle accepts entries is never stored; it is recomputed from
/// the clock on every call through [`Raffle::is_active`]. Entrants live in
/// their own [`Entry`] accounts; the raffle only counts them.
#[account]
#[derive(Debug, PartialEq)]
pub struct Raffle {
    pub raffle_id: u64,
    pub minimum_tier: u64,
    pub start_time: i64,
    /// Entry window length in seconds.
    pub duration: u64,
    pub entrant_count: u64,
    pub winners: Vec<Pubkey>,
    pub bump: u8,
}

impl Raffle {
    pub fn new(
        raffle_id: u64,
        minimum_tier: u64,
        start_time: i64,
        duration: u64,
        bump: u8,
    ) -> Self {
        Self {
            raffle_id,
            minimum_tier,
            start_time,
            duration,
            entrant_count: 0,
            winners: Vec::new(),
            bump,
        }
    }

    /// First timestamp at which entry is refused.
    pub fn window_end(&self) -> i64 {
        let duration = i64::try_from(self.duration).unwrap_or(i64::MAX);
        self.start_time.saturating_add(duration)
    }

    /// Entry window is the half-open interval `[start_time, start_time + duration)`.
    pub fn is_active(&self, now: i64) -> bool {
        now < self.window_end()
    }

    /// Runs the eligibility checks in order (window, tier, stake, repeat
    /// entry) and records `entity` in `entry` only when all of them pass.
    ///
    /// `entry` is the `(raffle, entity)` entry account; a recorded one means
    /// the entity is already in.
    pub fn admit(
        &mut self,
        entity: &Pubkey,
        now: i64,
        ledger: &dyn CredentialLedger,
        policy: &dyn StakePolicy,
        entry: &mut Entry,
        entry_bump: u8,
    ) -> Result<()> {
        require!(self.is_active(now), RaffleError::RaffleInactive);

        let tier = ledger.tier_of(entity)?;
        require!(tier >= self.minimum_tier, RaffleError::InsufficientTier);

        let required_stake = policy.minimum_stake(self.minimum_tier)?;
        let staked = ledger.staked_amount(entity)?;
        require!(staked >= required_stake, RaffleError::InsufficientStake);

        require!(!entry.is_recorded(), RaffleError::DuplicateEntry);

        let index = self.entrant_count;
        self.entrant_count = index.checked_add(1).ok_or(RaffleError::Overflow)?;
        *entry = Entry {
            raffle_id: self.raffle_id,
            entrant: *entity,
            index,
            entered_at: now,
            bump: entry_bump,
        };
        Ok(())
    }

    /// Replaces the winner list verbatim.
    pub fn set_winners(&mut self, winners: Vec<Pubkey>) -> Result<()> {
        require!(winners.len() <= MAX_WINNERS, RaffleError::TooManyWinners);
        self.winners = winners;
        Ok(())
    }

    pub fn terms(&self) -> RaffleTerms {
        RaffleTerms {
            minimum_tier: self.minimum_tier,
            start_time: self.start_time,
            duration: self.duration,
        }
    }

    /// Assembles entrants in entry order from the raffle's entry accounts.
    /// The set must be complete: one entry per index, none from another raffle.
    pub fn view(&self, entries: &[Entry]) -> Result<RaffleView> {
        require!(
            entries.iter().all(|entry| entry.raffle_id == self.raffle_id),
            RaffleError::EntrantListMismatch
        );

        let mut ordered: Vec<&Entry> = entries.iter().collect();
        ordered.sort_by_key(|entry| entry.index);
        require!(
            ordered.len() as u64 == self.entrant_count
                && ordered
                    .iter()
                    .enumerate()
                    .all(|(position, entry)| entry.index == position as u64),
            RaffleError::EntrantListMismatch
        );

        Ok(RaffleView {
            entrants: ordered.iter().map(|entry| entry.entrant).collect(),
            winners: self.winners.clone(),
        })
    }

    /// Reads raffle `raffle_id` from an account the handler received unchecked.
    /// Anything that is not that raffle, owned by this program, is reported
    /// as not found.
    pub fn load(info: &AccountInfo, raffle_id: u64) -> Result<Self> {
        require_keys_eq!(*info.owner, crate::ID, RaffleError::RaffleNotFound);

        let data = info.try_borrow_data()?;
        let raffle = Self::try_deserialize(&mut &data[..])
            .map_err(|_| error!(RaffleError::RaffleNotFound))?;
        require_eq!(raffle.raffle_id, raffle_id, RaffleError::RaffleNotFound);
        Ok(raffle)
    }

    /// Writes the raffle back into its account. Size is fixed at creation.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}

/// Immutable creation parameters of a raffle, for display and auditing.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct RaffleTerms {
    pub minimum_tier: u64,
    pub start_time: i64,
    pub duration: u64,
}

/// Read-only projection returned by `get_raffle`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RaffleView {
    pub entrants: Vec<Pubkey>,
    pub winners: Vec<Pubkey>,
}
