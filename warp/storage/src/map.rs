use {
    crate::{
        encode_length, extend_one_byte, increment_last_byte, Borsh, Bound, Codec, Path,
        PrimaryKey,
    },
    std::marker::PhantomData,
    warp_types::{Order, StdError, StdResult, Storage},
};

/// Mimic the behavior of `BTreeMap`, on top of a KV store.
pub struct Map<'a, K, T, C = Borsh>
where
    C: Codec<T>,
{
    namespace: &'a [u8],
    key: PhantomData<K>,
    data: PhantomData<T>,
    codec: PhantomData<C>,
}

impl<'a, K, T, C> Map<'a, K, T, C>
where
    C: Codec<T>,
{
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            key: PhantomData,
            data: PhantomData,
            codec: PhantomData,
        }
    }
}

impl<K, T, C> Map<'_, K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    pub fn path(&self, key: K) -> Path<T, C> {
        let mut raw_keys = key.raw_keys();
        let last_raw_key = raw_keys.pop();
        Path::new(self.namespace, &raw_keys, last_raw_key.as_ref())
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        raw_range(storage, self.namespace, None::<Bound<K>>, None, Order::Ascending)
            .next()
            .is_none()
    }

    // ---------------------- methods for single entries -----------------------

    pub fn has(&self, storage: &dyn Storage, key: K) -> bool {
        self.path(key).exists(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.path(key).may_load(storage)
    }

    pub fn load(&self, storage: &dyn Storage, key: K) -> StdResult<T> {
        self.path(key).load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, key: K, data: &T) -> StdResult<()> {
        self.path(key).save(storage, data)
    }

    pub fn remove(&self, storage: &mut dyn Storage, key: K) {
        self.path(key).remove(storage)
    }

    pub fn may_update<F, E>(&self, storage: &mut dyn Storage, key: K, action: F) -> Result<T, E>
    where
        F: FnOnce(Option<T>) -> Result<T, E>,
        E: From<StdError>,
    {
        self.path(key).may_update(storage, action)
    }

    pub fn update<F, E>(&self, storage: &mut dyn Storage, key: K, action: F) -> Result<T, E>
    where
        F: FnOnce(T) -> Result<T, E>,
        E: From<StdError>,
    {
        self.path(key).update(storage, action)
    }

    // --------------------------- iteration methods ---------------------------

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'b> {
        let iter = raw_range(storage, self.namespace, min, max, order).map(|(k, v)| {
            let key = K::from_slice(&k)?;
            let data = C::decode(&v)?;
            Ok((key, data))
        });

        Box::new(iter)
    }

    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'b> {
        let iter = raw_range(storage, self.namespace, min, max, order)
            .map(|(k, _)| K::from_slice(&k));

        Box::new(iter)
    }
}

/// Iterate the records under a namespace, with the namespace trimmed off the
/// keys.
pub(crate) fn raw_range<'b, K>(
    storage: &'b dyn Storage,
    namespace: &[u8],
    min: Option<Bound<K>>,
    max: Option<Bound<K>>,
    order: Order,
) -> Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'b>
where
    K: PrimaryKey,
{
    let mut prefix = encode_length(namespace).to_vec();
    prefix.extend_from_slice(namespace);

    let with_prefix = |key: &K| {
        let mut bytes = prefix.clone();
        bytes.extend(key.joined_key());
        bytes
    };

    let min = match min {
        Some(Bound::Inclusive(k)) => with_prefix(&k),
        Some(Bound::Exclusive(k)) => extend_one_byte(with_prefix(&k)),
        None => prefix.clone(),
    };
    let max = match max {
        Some(Bound::Inclusive(k)) => extend_one_byte(with_prefix(&k)),
        Some(Bound::Exclusive(k)) => with_prefix(&k),
        None => increment_last_byte(prefix.clone()),
    };

    let prefix_len = prefix.len();
    let iter = storage
        .scan(Some(min.as_slice()), Some(max.as_slice()), order)
        .map(move |(k, v)| (k[prefix_len..].to_vec(), v));

    Box::new(iter)
}

// ----------------------------------- tests -----------------------------------
