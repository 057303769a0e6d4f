use {
    crate::{Hash256, StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de::DeserializeOwned, ser::Serialize},
    sha3::{Digest, Keccak256},
    std::fmt::{self, Display},
};

/// JSON-encoded bytes.
///
/// Messages are kept as raw JSON bytes rather than `serde_json::Value`, because
/// the latter can't represent integers wider than 64 bits.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Json(Vec<u8>);

impl Json {
    pub fn from_inner(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Json({self})")
    }
}

// ----------------------------------- json ------------------------------------

pub trait JsonSerExt {
    fn to_json(&self) -> StdResult<Json>;
}

impl<T> JsonSerExt for T
where
    T: Serialize,
{
    fn to_json(&self) -> StdResult<Json> {
        serde_json::to_vec(self)
            .map(Json)
            .map_err(|err| StdError::serialize::<T, _>("json", err))
    }
}

pub trait JsonDeExt {
    fn deserialize_json<T>(&self) -> StdResult<T>
    where
        T: DeserializeOwned;
}

impl JsonDeExt for Json {
    fn deserialize_json<T>(&self) -> StdResult<T>
    where
        T: DeserializeOwned,
    {
        self.0.deserialize_json()
    }
}

impl JsonDeExt for [u8] {
    fn deserialize_json<T>(&self) -> StdResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(self).map_err(|err| StdError::deserialize::<T, _>("json", err))
    }
}

impl JsonDeExt for Vec<u8> {
    fn deserialize_json<T>(&self) -> StdResult<T>
    where
        T: DeserializeOwned,
    {
        self.as_slice().deserialize_json()
    }
}

// ----------------------------------- borsh -----------------------------------

pub trait BorshSerExt {
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>>;
}

impl<T> BorshSerExt for T
where
    T: BorshSerialize,
{
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>> {
        borsh::to_vec(self).map_err(|err| StdError::serialize::<T, _>("borsh", err))
    }
}

pub trait BorshDeExt {
    fn deserialize_borsh<T>(&self) -> StdResult<T>
    where
        T: BorshDeserialize;
}

impl BorshDeExt for [u8] {
    fn deserialize_borsh<T>(&self) -> StdResult<T>
    where
        T: BorshDeserialize,
    {
        borsh::from_slice(self).map_err(|err| StdError::deserialize::<T, _>("borsh", err))
    }
}

// ----------------------------------- hash ------------------------------------

pub trait HashExt {
    fn keccak256(&self) -> Hash256;
}

impl<T> HashExt for T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn keccak256(&self) -> Hash256 {
        Hash256::from_inner(Keccak256::digest(self.as_ref()).into())
    }
}

// ----------------------------------- tests -----------------------------------
