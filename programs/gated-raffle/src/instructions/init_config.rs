use crate::state::{Config, StakeSchedule, CONFIG_ACCOUNT_SIZE, CONFIG_SEED};
use anchor_lang::prelude::*;

/// Event emitted once the program configuration is created
#[event]
pub struct ConfigInitialized {
    /// The config PDA
    pub config: Pubkey,
    /// The single authority allowed to create raffles and post winners
    pub authority: Pubkey,
    /// The credential ledger program consulted on entry
    pub credential_ledger: Pubkey,
    pub stake_schedule: StakeSchedule,
}

/// Instruction to initialize the program configuration
/// This should be called once during program deployment
///
/// # Security Considerations
/// - Creates a PDA with seed "config" holding the authority, the ledger
///   settings and the raffle counter
/// - The authority account becomes the only identity allowed to create
///   raffles, post winners and change the ledger settings
/// - The authority cannot be changed afterwards
///
/// # Account Validations
/// * Config - New PDA initialized with proper space allocation
/// * Deployer - Pays for the config account
/// * Authority - Account becomes the program authority
pub fn init_config(
    ctx: Context<InitConfig>,
    credential_ledger: Pubkey,
    stake_schedule: StakeSchedule,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.config.set_inner(Config::new(
        authority,
        credential_ledger,
        stake_schedule,
        ctx.bumps.config,
    ));

    emit!(ConfigInitialized {
        config: ctx.accounts.config.key(),
        authority,
        credential_ledger,
        stake_schedule,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = deployer,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub deployer: Signer<'info>,
    pub authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
