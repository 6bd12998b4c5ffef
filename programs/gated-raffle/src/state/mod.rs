pub use config::*;
pub use entry::*;
pub use raffle::*;
pub use stake_schedule::*;

pub mod config;
pub mod entry;
pub mod raffle;
pub mod stake_schedule;
