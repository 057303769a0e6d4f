#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("data is of incorrect length! expecting: {expect}, got: {actual}")]
    IncorrectLength { expect: usize, actual: usize },

    #[error("invalid recovery ID: {recovery_id}")]
    InvalidRecoveryId { recovery_id: u8 },

    #[error("signature is not normalized to low-S")]
    HighS,

    #[error(transparent)]
    Signature(#[from] k256::ecdsa::Error),
}

pub type CryptoResult<T> = core::result::Result<T, CryptoError>;
