use anchor_lang::{prelude::*, solana_program::hash::hash};
use arrayref::array_ref;

use crate::error::RaffleError;

/// Seed of the credential PDA kept by the ledger program for each holder.
pub const CREDENTIAL_SEED: &[u8] = b"credential";

// 32 holder + 8 tier + 8 staked_amount
pub const CREDENTIAL_RECORD_SIZE: usize = 32 + 8 + 8;

/// Read-only view of the credential ledger consulted on every entry check.
pub trait CredentialLedger {
    fn tier_of(&self, entity: &Pubkey) -> Result<u64>;
    fn staked_amount(&self, entity: &Pubkey) -> Result<u64>;
}

/// Stake an entrant must hold to join a raffle gated at `tier`.
pub trait StakePolicy {
    fn minimum_stake(&self, tier: u64) -> Result<u64>;
}

/// Account body written by the ledger program, after its 8 byte discriminator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct CredentialRecord {
    pub holder: Pubkey,
    pub tier: u64,
    pub staked_amount: u64,
}

impl CredentialRecord {
    pub fn discriminator() -> [u8; 8] {
        let digest = hash(b"account:Credential").to_bytes();
        *array_ref![digest, 0, 8]
    }

    /// Parses a raw ledger account and checks it was issued to `holder`.
    pub fn parse(data: &[u8], holder: &Pubkey) -> Result<Self> {
        require!(
            data.len() >= 8 + CREDENTIAL_RECORD_SIZE,
            RaffleError::InvalidCredentialAccount
        );
        require!(
            *array_ref![data, 0, 8] == Self::discriminator(),
            RaffleError::InvalidCredentialAccount
        );

        let record = Self::deserialize(&mut &data[8..])
            .map_err(|_| error!(RaffleError::InvalidCredentialAccount))?;
        require_keys_eq!(
            record.holder,
            *holder,
            RaffleError::InvalidCredentialAccount
        );
        Ok(record)
    }
}

/// Ledger adapter over the credential PDA passed alongside an entrant.
///
/// The expected address is derived once, when the adapter is built for its
/// holder. Each read then re-validates and re-parses the account, so nothing
/// is cached between the tier and stake checks. A PDA the ledger never
/// initialized means the holder has no credential, which reads as tier 0
/// with nothing staked.
pub struct CredentialAccount<'a, 'info> {
    account: &'a AccountInfo<'info>,
    holder: Pubkey,
    ledger_program: Pubkey,
    at_holder_address: bool,
}

impl<'a, 'info> CredentialAccount<'a, 'info> {
    pub fn new(account: &'a AccountInfo<'info>, holder: &Pubkey, ledger_program: Pubkey) -> Self {
        let (expected, _) =
            Pubkey::find_program_address(&[CREDENTIAL_SEED, holder.as_ref()], &ledger_program);
        Self {
            account,
            holder: *holder,
            ledger_program,
            at_holder_address: *account.key == expected,
        }
    }

    fn read(&self, holder: &Pubkey) -> Result<Option<CredentialRecord>> {
        require_keys_eq!(*holder, self.holder, RaffleError::InvalidCredentialAccount);
        require!(self.at_holder_address, RaffleError::InvalidCredentialAccount);

        if self.account.data_is_empty() {
            return Ok(None);
        }

        require_keys_eq!(
            *self.account.owner,
            self.ledger_program,
            RaffleError::InvalidCredentialAccount
        );
        let data = self.account.try_borrow_data()?;
        CredentialRecord::parse(&data, holder).map(Some)
    }
}

impl CredentialLedger for CredentialAccount<'_, '_> {
    fn tier_of(&self, entity: &Pubkey) -> Result<u64> {
        Ok(self.read(entity)?.map_or(0, |record| record.tier))
    }

    fn staked_amount(&self, entity: &Pubkey) -> Result<u64> {
        Ok(self.read(entity)?.map_or(0, |record| record.staked_amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(record: &CredentialRecord) -> Vec<u8> {
        let mut data = CredentialRecord::discriminator().to_vec();
        record.serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn parses_record_issued_to_holder() {
        let holder = Pubkey::new_unique();
        let record = CredentialRecord {
            holder,
            tier: 3,
            staked_amount: 5,
        };

        assert_eq!(
            CredentialRecord::parse(&encode(&record), &holder).unwrap(),
            record
        );
    }

    #[test]
    fn rejects_record_of_another_holder() {
        let record = CredentialRecord {
            holder: Pubkey::new_unique(),
            tier: 3,
            staked_amount: 5,
        };

        assert!(CredentialRecord::parse(&encode(&record), &Pubkey::new_unique()).is_err());
    }

    #[test]
    fn rejects_foreign_discriminator_and_short_data() {
        let holder = Pubkey::new_unique();
        let mut data = encode(&CredentialRecord {
            holder,
            tier: 1,
            staked_amount: 1,
        });

        assert!(CredentialRecord::parse(&data[..20], &holder).is_err());

        data[0] ^= 0xff;
        assert!(CredentialRecord::parse(&data, &holder).is_err());
    }

    fn credential_address(ledger_program: &Pubkey, holder: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[CREDENTIAL_SEED, holder.as_ref()], ledger_program).0
    }

    #[test]
    fn missing_credential_reads_as_tier_zero() {
        let ledger_program = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let key = credential_address(&ledger_program, &holder);
        let owner = Pubkey::default();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        let ledger = CredentialAccount::new(&info, &holder, ledger_program);
        assert_eq!(ledger.tier_of(&holder).unwrap(), 0);
        assert_eq!(ledger.staked_amount(&holder).unwrap(), 0);
    }

    #[test]
    fn reads_tier_and_stake_from_ledger_owned_pda() {
        let ledger_program = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let key = credential_address(&ledger_program, &holder);
        let mut lamports = 1_000_000;
        let mut data = encode(&CredentialRecord {
            holder,
            tier: 3,
            staked_amount: 5,
        });
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &ledger_program,
            false,
            0,
        );

        let ledger = CredentialAccount::new(&info, &holder, ledger_program);
        assert_eq!(ledger.tier_of(&holder).unwrap(), 3);
        assert_eq!(ledger.staked_amount(&holder).unwrap(), 5);
    }

    #[test]
    fn rejects_wrong_address_or_owner() {
        let ledger_program = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let record = CredentialRecord {
            holder,
            tier: 9,
            staked_amount: 9,
        };

        // Someone else's credential PDA.
        let other = credential_address(&ledger_program, &Pubkey::new_unique());
        let mut lamports = 1;
        let mut data = encode(&record);
        let info = AccountInfo::new(
            &other,
            false,
            false,
            &mut lamports,
            &mut data,
            &ledger_program,
            false,
            0,
        );
        assert!(CredentialAccount::new(&info, &holder, ledger_program)
            .tier_of(&holder)
            .is_err());

        // Right address, forged by a program other than the ledger.
        let key = credential_address(&ledger_program, &holder);
        let forger = Pubkey::new_unique();
        let mut lamports = 1;
        let mut data = encode(&record);
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &forger,
            false,
            0,
        );
        assert!(CredentialAccount::new(&info, &holder, ledger_program)
            .staked_amount(&holder)
            .is_err());
    }

    #[test]
    fn adapter_answers_only_for_its_holder() {
        let ledger_program = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let key = credential_address(&ledger_program, &holder);
        let mut lamports = 1;
        let mut data = encode(&CredentialRecord {
            holder,
            tier: 2,
            staked_amount: 2,
        });
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &ledger_program,
            false,
            0,
        );

        let ledger = CredentialAccount::new(&info, &holder, ledger_program);
        assert!(ledger.tier_of(&Pubkey::new_unique()).is_err());
        // Repeated reads against the address derived at construction.
        assert_eq!(ledger.tier_of(&holder).unwrap(), 2);
        assert_eq!(ledger.tier_of(&holder).unwrap(), 2);
        assert_eq!(ledger.staked_amount(&holder).unwrap(), 2);
    }
}
