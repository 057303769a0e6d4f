mod chains;
mod execute;
mod nonces;
mod query;
mod signers;
mod state;
mod toll;

pub use {chains::*, execute::*, nonces::*, query::*, signers::*, state::*, toll::*};
