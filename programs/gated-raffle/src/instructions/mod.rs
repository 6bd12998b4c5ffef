pub mod create_raffle;
pub mod enter_raffle;
pub mod init_config;
pub mod post_winners;
pub mod read_raffle;
pub mod set_credential_ledger;
pub mod set_stake_schedule;

pub use create_raffle::*;
pub use enter_raffle::*;
pub use init_config::*;
pub use post_winners::*;
pub use read_raffle::*;
pub use set_credential_ledger::*;
pub use set_stake_schedule::*;
