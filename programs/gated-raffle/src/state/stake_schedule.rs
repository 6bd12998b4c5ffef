use anchor_lang::prelude::*;

use crate::{error::RaffleError, ledger::StakePolicy};

// 1 (variant tag) + 16 (largest variant: Linear { base, per_tier })
pub const STAKE_SCHEDULE_SIZE: usize = 1 + 16;

/// Maps a raffle's minimum tier to the stake an entrant must hold.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakeSchedule {
    /// Every tier requires the same stake.
    Flat { amount: u64 },
    /// Tier `t` requires `base + per_tier * t`.
    Linear { base: u64, per_tier: u64 },
}

impl StakePolicy for StakeSchedule {
    fn minimum_stake(&self, tier: u64) -> Result<u64> {
        match *self {
            StakeSchedule::Flat { amount } => Ok(amount),
            StakeSchedule::Linear { base, per_tier } => per_tier
                .checked_mul(tier)
                .and_then(|scaled| scaled.checked_add(base))
                .ok_or_else(|| RaffleError::Overflow.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_ignores_tier() {
        let schedule = StakeSchedule::Flat { amount: 7 };
        assert_eq!(schedule.minimum_stake(0).unwrap(), 7);
        assert_eq!(schedule.minimum_stake(9).unwrap(), 7);
    }

    #[test]
    fn linear_scales_with_tier() {
        let schedule = StakeSchedule::Linear { base: 1, per_tier: 2 };
        assert_eq!(schedule.minimum_stake(0).unwrap(), 1);
        assert_eq!(schedule.minimum_stake(2).unwrap(), 5);
        assert_eq!(schedule.minimum_stake(3).unwrap(), 7);
    }

    #[test]
    fn linear_overflow_is_an_error() {
        let schedule = StakeSchedule::Linear {
            base: 1,
            per_tier: u64::MAX,
        };
        assert!(schedule.minimum_stake(2).is_err());
    }

    #[test]
    fn encoded_size_fits_reserved_space() {
        let mut encoded = Vec::new();
        StakeSchedule::Linear { base: 1, per_tier: 2 }
            .serialize(&mut encoded)
            .unwrap();
        assert_eq!(encoded.len(), STAKE_SCHEDULE_SIZE);
    }
}
