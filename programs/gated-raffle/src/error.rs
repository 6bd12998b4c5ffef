use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    #[msg("Only the program authority can perform this action")]
    Unauthorized,
    #[msg("No raffle exists with this id")]
    RaffleNotFound,
    #[msg("Raffle is not active")]
    RaffleInactive,
    #[msg("Credential tier is below the raffle minimum")]
    InsufficientTier,
    #[msg("Staked amount is below the minimum for this raffle's tier")]
    InsufficientStake,
    #[msg("Entrant has already entered this raffle")]
    DuplicateEntry,
    #[msg("Too many winners in a single posting")]
    TooManyWinners,
    #[msg("Credential account does not belong to the entrant or the configured ledger")]
    InvalidCredentialAccount,
    #[msg("Entry accounts do not match the raffle's entrant list")]
    EntrantListMismatch,
    Overflow,
}
