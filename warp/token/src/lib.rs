mod execute;
mod ledger;
mod query;
mod state;

pub use {execute::*, ledger::*, query::*, state::*};
