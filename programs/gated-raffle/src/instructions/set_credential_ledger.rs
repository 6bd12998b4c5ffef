use crate::{
    error::RaffleError,
    state::{Config, CONFIG_SEED},
};
use anchor_lang::prelude::*;

#[event]
pub struct CredentialLedgerUpdated {
    pub previous: Pubkey,
    pub credential_ledger: Pubkey,
}

/// Points entry checks at a different credential ledger program. Only the
/// program authority may call this.
pub fn set_credential_ledger(
    ctx: Context<SetCredentialLedger>,
    credential_ledger: Pubkey,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    let previous = config.credential_ledger;

    config.set_credential_ledger(&authority, credential_ledger)?;

    emit!(CredentialLedgerUpdated {
        previous,
        credential_ledger,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetCredentialLedger<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ RaffleError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}
