mod app;
mod contract;
mod ctx;
mod error;
mod execute;
mod macros;
mod outcome;
mod providers;
mod query;
mod shared;
mod state;
mod tracing;

pub use {
    crate::tracing::*, app::*, contract::*, ctx::*, error::*, execute::*, outcome::*,
    providers::*, query::*, shared::*, state::*,
};
