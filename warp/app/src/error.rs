use {
    crate::VmError,
    thiserror::Error,
    warp_types::{Addr, StdError},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Vm(#[from] VmError),

    #[error("contract returned error! address: {address}, method: {name}, msg: {msg}")]
    Guest {
        address: Addr,
        name: &'static str,
        msg: String,
    },

    #[error("code with index `{code_id}` not found")]
    CodeNotFound { code_id: u32 },

    #[error("contract with address `{address}` not found")]
    ContractNotFound { address: Addr },

    #[error("account with address `{address}` already exists")]
    AccountExists { address: Addr },

    #[error("insufficient native balance! address: {address}, balance: {balance}, amount: {amount}")]
    InsufficientFunds {
        address: Addr,
        balance: u128,
        amount: u128,
    },

    #[error("max message depth exceeded")]
    ExceedMaxMessageDepth,

    #[error("max query depth exceeded")]
    ExceedMaxQueryDepth,
}

pub type AppResult<T> = core::result::Result<T, AppError>;
