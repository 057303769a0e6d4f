use {crate::Hash256, std::any::type_name};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StdError {
    #[error(transparent)]
    FromHex(#[from] hex::FromHexError),

    #[error("data is of incorrect length! expecting: {expect}, got: {actual}")]
    LengthMismatch { expect: usize, actual: usize },

    #[error("word {word} is not a valid {ty}")]
    InvalidWord { ty: &'static str, word: Hash256 },

    #[error("data not found! type: {ty}, storage key: {key}")]
    DataNotFound { ty: &'static str, key: String },

    #[error("failed to serialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Serialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("failed to deserialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Deserialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("overflow: {a} {op} {b}")]
    Overflow {
        a: u128,
        b: u128,
        op: &'static str,
    },

    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: u128 },

    #[error("query failed! contract: {contract}, msg: {msg}")]
    Query { contract: String, msg: String },
}

impl StdError {
    pub fn length_mismatch(expect: usize, actual: usize) -> Self {
        Self::LengthMismatch { expect, actual }
    }

    pub fn invalid_word(ty: &'static str, word: Hash256) -> Self {
        Self::InvalidWord { ty, word }
    }

    pub fn data_not_found<T>(key: &[u8]) -> Self {
        Self::DataNotFound {
            ty: type_name::<T>(),
            key: hex::encode(key),
        }
    }

    pub fn serialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Serialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Deserialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn overflow(a: u128, b: u128, op: &'static str) -> Self {
        Self::Overflow { a, b, op }
    }

    pub fn query<C, M>(contract: C, msg: M) -> Self
    where
        C: ToString,
        M: ToString,
    {
        Self::Query {
            contract: contract.to_string(),
            msg: msg.to_string(),
        }
    }
}

pub type StdResult<T> = core::result::Result<T, StdError>;
