use crate::{Addr, ChainCode, Hash256};

/// Errors raised by the bridge contracts.
///
/// Every message starts with a short tag (`!toll`, `!nonce`, ...) that stays
/// stable across versions, so that relayers and frontends can match on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    // -------------------------------- portal ---------------------------------
    #[error("!dest: destination chain {chain} is not supported")]
    UnsupportedDestination { chain: ChainCode },

    #[error("!src: source chain {chain} is not supported")]
    UnsupportedSource { chain: ChainCode },

    #[error("!toll: incorrect message toll! expecting: {expect}, got: {actual}")]
    IncorrectToll { expect: u128, actual: u128 },

    #[error("!toll: message toll {toll} exceeds the maximum {max_toll}")]
    TollTooHigh { toll: u128, max_toll: u128 },

    #[error("!nonce: nonce {nonce} from chain {chain} has already been consumed")]
    NonceReused { chain: ChainCode, nonce: Hash256 },

    #[error("!order: signer {current} is not greater than the previous signer {previous}")]
    SignerOrder { previous: Addr, current: Addr },

    #[error("!signer: {signer} is not a signer")]
    UnknownSigner { signer: Addr },

    #[error("!sigs: too few signatures! threshold: {threshold}, got: {count}")]
    TooFewSignatures { threshold: u32, count: usize },

    #[error("!sig: {reason}")]
    MalformedSignature { reason: String },

    #[error("!threshold: threshold {threshold} must be within 1..={signers}")]
    InvalidThreshold { threshold: u32, signers: u32 },

    #[error("!diff: {what} is already set to the given value")]
    NoChange { what: &'static str },

    #[error("!len: {recipients} recipients but {amounts} amounts")]
    LengthMismatch { recipients: usize, amounts: usize },

    // -------------------------------- adapters -------------------------------
    #[error("!msg: {reason}")]
    MessageMismatch { reason: &'static str },

    #[error("!payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("!amnt: {reason}")]
    NonPositiveAmount { reason: &'static str },

    #[error("!tip: tip must be within 1..=10000 basis points, got {tip_bps}")]
    InvalidTip { tip_bps: u16 },

    #[error("!addrs: {what} can't be the zero address")]
    ZeroAddress { what: &'static str },

    #[error("!portal: portal can't be the zero address")]
    ZeroPortal,

    #[error("!decimals: token has {decimals} decimals, fewer than the other chain's {other}")]
    UnsupportedDecimals { decimals: u8, other: u8 },

    #[error("!sender: unexpected native currency from {sender}")]
    UnexpectedSender { sender: Addr },

    #[error("!init: puzzle hashes are not initialized")]
    NotInitialized,

    #[error("nope")]
    AlreadyInitialized,

    #[error("!auth: {sender} is not authorized")]
    Unauthorized { sender: Addr },

    // ------------------------------ fungible unit ----------------------------
    #[error("!msg.value: deposit of {value} is not a positive multiple of {ratio}")]
    InvalidDeposit { value: u128, ratio: u128 },

    #[error("!amount: withdrawal amount can't be zero")]
    ZeroWithdrawal,

    #[error("!balance: insufficient balance! owner: {owner}, balance: {balance}, amount: {amount}")]
    InsufficientBalance {
        owner: Addr,
        balance: u128,
        amount: u128,
    },

    #[error(
        "!allowance: insufficient allowance! owner: {owner}, spender: {spender}, allowance: {allowance}, amount: {amount}"
    )]
    InsufficientAllowance {
        owner: Addr,
        spender: Addr,
        allowance: u128,
        amount: u128,
    },

    #[error("!deadline: permit expired at {deadline}, current time: {now}")]
    ExpiredPermit { deadline: u64, now: u64 },

    #[error("!permit: invalid permit signature")]
    InvalidPermitSignature,
}

impl ContractError {
    /// The stable tag that prefixes the error message.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::UnsupportedDestination { .. } => "!dest",
            Self::UnsupportedSource { .. } => "!src",
            Self::IncorrectToll { .. } | Self::TollTooHigh { .. } => "!toll",
            Self::NonceReused { .. } => "!nonce",
            Self::SignerOrder { .. } => "!order",
            Self::UnknownSigner { .. } => "!signer",
            Self::TooFewSignatures { .. } => "!sigs",
            Self::MalformedSignature { .. } => "!sig",
            Self::InvalidThreshold { .. } => "!threshold",
            Self::NoChange { .. } => "!diff",
            Self::LengthMismatch { .. } => "!len",
            Self::MessageMismatch { .. } => "!msg",
            Self::MalformedPayload { .. } => "!payload",
            Self::NonPositiveAmount { .. } => "!amnt",
            Self::InvalidTip { .. } => "!tip",
            Self::ZeroAddress { .. } => "!addrs",
            Self::ZeroPortal => "!portal",
            Self::UnsupportedDecimals { .. } => "!decimals",
            Self::UnexpectedSender { .. } => "!sender",
            Self::NotInitialized => "!init",
            Self::AlreadyInitialized => "nope",
            Self::Unauthorized { .. } => "!auth",
            Self::InvalidDeposit { .. } => "!msg.value",
            Self::ZeroWithdrawal => "!amount",
            Self::InsufficientBalance { .. } => "!balance",
            Self::InsufficientAllowance { .. } => "!allowance",
            Self::ExpiredPermit { .. } => "!deadline",
            Self::InvalidPermitSignature => "!permit",
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(ContractError::NonceReused { chain: ChainCode::from_inner(*b"xch"), nonce: Hash256::ZERO }; "nonce")]
    #[test_case(ContractError::SignerOrder { previous: Addr::mock(2), current: Addr::mock(1) }; "order")]
    #[test_case(ContractError::InvalidDeposit { value: 1, ratio: 10 }; "deposit")]
    #[test_case(ContractError::AlreadyInitialized; "init")]
    fn messages_start_with_tag(err: ContractError) {
        assert!(err.to_string().starts_with(err.tag()));
    }
}
