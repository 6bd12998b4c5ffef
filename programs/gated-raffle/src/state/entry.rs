use anchor_lang::prelude::*;

use crate::error::RaffleError;

pub const ENTRY_SEED: &[u8] = b"entry";

// 8 discriminator + 8 raffle_id + 32 entrant + 8 index + 8 entered_at + 1 bump
pub const ENTRY_ACCOUNT_SIZE: usize = 8 + 8 + 32 + 8 + 8 + 1;

/// Membership record of one entrant in one raffle, at PDA
/// `["entry", raffle, entrant]`. Its existence is what makes an entity
/// "entered"; `index` is the entrant's position in entry order.
#[account]
#[derive(Debug, Default, PartialEq)]
pub struct Entry {
    pub raffle_id: u64,
    pub entrant: Pubkey,
    pub index: u64,
    pub entered_at: i64,
    pub bump: u8,
}

impl Entry {
    /// A freshly allocated entry account is zeroed; a recorded one names
    /// its entrant.
    pub fn is_recorded(&self) -> bool {
        self.entrant != Pubkey::default()
    }

    /// Reads an entry account handed to a view instruction.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require_keys_eq!(*info.owner, crate::ID, RaffleError::EntrantListMismatch);

        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
            .map_err(|_| error!(RaffleError::EntrantListMismatch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_account_is_not_recorded() {
        let data = [0u8; ENTRY_ACCOUNT_SIZE];
        let entry = Entry::try_deserialize_unchecked(&mut &data[..]).unwrap();
        assert!(!entry.is_recorded());
    }

    #[test]
    fn encoded_size_matches_account_size() {
        let entry = Entry {
            raffle_id: 1,
            entrant: Pubkey::new_unique(),
            index: 2,
            entered_at: 3,
            bump: 4,
        };
        let mut data = Vec::new();
        entry.try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), ENTRY_ACCOUNT_SIZE);
        assert!(Entry::try_deserialize(&mut &data[..]).unwrap().is_recorded());
    }

    #[test]
    fn load_requires_program_owned_entry() {
        let key = Pubkey::new_unique();
        let entry = Entry {
            raffle_id: 0,
            entrant: Pubkey::new_unique(),
            index: 0,
            entered_at: 9,
            bump: 255,
        };
        let mut data = Vec::new();
        entry.try_serialize(&mut data).unwrap();

        let mut lamports = 1;
        let program_id = crate::ID;
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &program_id,
            false,
            0,
        );
        assert_eq!(Entry::load(&info).unwrap(), entry);

        let mut lamports = 1;
        let mut copied = Vec::new();
        entry.try_serialize(&mut copied).unwrap();
        let forger = Pubkey::new_unique();
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut copied,
            &forger,
            false,
            0,
        );
        assert!(Entry::load(&info).is_err());
    }
}
