mod account;
mod balance_tracker;
mod codes;
pub mod constants;
pub mod mocks;
mod setup;
mod tracing;

pub use {crate::tracing::*, account::*, balance_tracker::*, codes::*, setup::*};
