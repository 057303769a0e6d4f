use {
    crate::{nested_namespaces_with_key, split_first_key},
    std::borrow::Cow,
    warp_types::{ByteArray, StdError, StdResult},
};

/// Describes a key used in mapping data structures, i.e. [`Map`](crate::Map)
/// and [`Set`](crate::Set).
///
/// Keys are serialized into raw bytes such that the byte order matches the
/// natural order of the keys. We don't use `serde` here because it's slow,
/// not compact, and faillable.
pub trait PrimaryKey {
    /// The type that raw keys deserialize into, which may be different from
    /// the key itself.
    type Output;

    /// Convert the key into one or more _raw keys_.
    fn raw_keys(&self) -> Vec<Cow<[u8]>>;

    /// Serialize the raw keys into bytes. Each raw key, other than the last
    /// one, is prefixed by its length.
    fn joined_key(&self) -> Vec<u8> {
        let mut raw_keys = self.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(None, &raw_keys, last_raw_key.as_ref())
    }

    /// Deserialize the raw bytes into the output.
    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output>;
}

impl<const N: usize> PrimaryKey for ByteArray<N> {
    type Output = ByteArray<N>;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Borrowed(self.as_ref())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        bytes.try_into()
    }
}

impl<K> PrimaryKey for &K
where
    K: PrimaryKey,
{
    type Output = K::Output;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        (*self).raw_keys()
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        K::from_slice(bytes)
    }
}

/// A tuple key whose first element is a singleton key. Keys that share the
/// first element are stored next to each other.
impl<A, B> PrimaryKey for (A, B)
where
    A: PrimaryKey,
    B: PrimaryKey,
{
    type Output = (A::Output, B::Output);

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        let mut keys = self.0.raw_keys();
        keys.extend(self.1.raw_keys());
        keys
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let (a_raw, b_raw) = split_first_key(bytes)?;

        let a = A::from_slice(a_raw)?;
        let b = B::from_slice(b_raw)?;

        Ok((a, b))
    }
}

macro_rules! impl_unsigned_integer_key {
    ($($t:ty),+) => {
        $(impl PrimaryKey for $t {
            type Output = $t;

            fn raw_keys(&self) -> Vec<Cow<[u8]>> {
                vec![Cow::Owned(self.to_be_bytes().to_vec())]
            }

            fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
                let Ok(bytes) = <[u8; std::mem::size_of::<Self>()]>::try_from(bytes) else {
                    return Err(StdError::length_mismatch(std::mem::size_of::<Self>(), bytes.len()));
                };

                Ok(Self::from_be_bytes(bytes))
            }
        })*
    }
}

impl_unsigned_integer_key!(u8, u16, u32, u64, u128);

// ----------------------------------- tests -----------------------------------
