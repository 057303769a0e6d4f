use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde_with::{DeserializeFromStr, SerializeDisplay},
    std::{
        fmt::{self, Debug, Display},
        ops::Deref,
        str::FromStr,
    },
};

/// A 20-byte EVM account or contract address.
pub type Addr = ByteArray<20>;

/// A 32-byte word. Used for nonces, foreign-chain identifiers (puzzle hashes),
/// payload words and digests.
pub type Hash256 = ByteArray<32>;

/// A 3-byte chain code, e.g. `xch` or `eth`.
pub type ChainCode = ByteArray<3>;

/// A fixed-size byte array that is serialized as a `0x`-prefixed lowercase hex
/// string in JSON, and as raw bytes in Borsh.
#[derive(
    SerializeDisplay,
    DeserializeFromStr,
    BorshSerialize,
    BorshDeserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct ByteArray<const N: usize>([u8; N]);

impl<const N: usize> ByteArray<N> {
    pub const LENGTH: usize = N;
    pub const ZERO: Self = Self([0; N]);

    pub const fn from_inner(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub const fn into_inner(self) -> [u8; N] {
        self.0
    }

    pub const fn inner(&self) -> &[u8; N] {
        &self.0
    }

    /// Create a mock value for use in tests, with all bytes set to `index`.
    pub const fn mock(index: u8) -> Self {
        Self([index; N])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; N]
    }
}

// ---------------------------------- words ------------------------------------

impl ByteArray<32> {
    /// Left-pad an address into a 32-byte word, the way ABI encoding does.
    pub fn from_addr(addr: Addr) -> Self {
        let mut word = [0; 32];
        word[12..].copy_from_slice(addr.inner());
        Self(word)
    }

    /// Encode an integer into a big-endian 32-byte word.
    pub fn from_u128(value: u128) -> Self {
        let mut word = [0; 32];
        word[16..].copy_from_slice(&value.to_be_bytes());
        Self(word)
    }

    /// Interpret the word as a left-padded address. Errors if any of the
    /// padding bytes is non-zero.
    pub fn to_addr(&self) -> StdResult<Addr> {
        if self.0[..12].iter().any(|byte| *byte != 0) {
            return Err(StdError::invalid_word("address", *self));
        }

        let mut addr = [0; 20];
        addr.copy_from_slice(&self.0[12..]);

        Ok(Addr::from_inner(addr))
    }

    /// Interpret the word as a big-endian integer. Errors if the value doesn't
    /// fit in 128 bits.
    pub fn to_u128(&self) -> StdResult<u128> {
        if self.0[..16].iter().any(|byte| *byte != 0) {
            return Err(StdError::invalid_word("u128", *self));
        }

        let mut int = [0; 16];
        int.copy_from_slice(&self.0[16..]);

        Ok(u128::from_be_bytes(int))
    }
}

impl ByteArray<3> {
    /// Right-pad the chain code into a 32-byte word, which is how ABI encoding
    /// treats a `bytes3` value.
    pub fn to_word(&self) -> Hash256 {
        let mut word = [0; 32];
        word[..3].copy_from_slice(&self.0);
        Hash256::from_inner(word)
    }
}

// ---------------------------------- traits -----------------------------------

impl<const N: usize> Default for ByteArray<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[u8; N]> for ByteArray<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8]> for ByteArray<N> {
    type Error = StdError;

    fn try_from(slice: &[u8]) -> StdResult<Self> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| StdError::length_mismatch(N, slice.len()))
    }
}

impl<const N: usize> AsRef<[u8]> for ByteArray<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Deref for ByteArray<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> Display for ByteArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl<const N: usize> Debug for ByteArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ByteArray<{N}>({self})")
    }
}

impl<const N: usize> FromStr for ByteArray<N> {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;

        bytes.as_slice().try_into()
    }
}

// --------------------------------- hex binary --------------------------------

/// Variable-length bytes, serialized as a `0x`-prefixed hex string in JSON.
#[derive(
    SerializeDisplay,
    DeserializeFromStr,
    BorshSerialize,
    BorshDeserialize,
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
pub struct HexBinary(Vec<u8>);

impl HexBinary {
    pub fn from_inner(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for HexBinary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Deref for HexBinary {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Debug for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HexBinary({self})")
    }
}

impl FromStr for HexBinary {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        Ok(Self(hex::decode(s)?))
    }
}

// ----------------------------------- tests -----------------------------------
