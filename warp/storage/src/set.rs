use {
    crate::{map::raw_range, nested_namespaces_with_key, Bound, PrimaryKey},
    std::marker::PhantomData,
    warp_types::{Order, StdResult, Storage},
};

/// Mimic the behavior of `BTreeSet`.
///
/// Internally, this is basically a map whose values are empty bytes.
pub struct Set<'a, T> {
    namespace: &'a [u8],
    item: PhantomData<T>,
}

impl<'a, T> Set<'a, T> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            item: PhantomData,
        }
    }
}

impl<T> Set<'_, T>
where
    T: PrimaryKey,
{
    fn storage_key(&self, item: &T) -> Vec<u8> {
        let mut raw_keys = item.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(Some(self.namespace), &raw_keys, last_raw_key.as_ref())
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        raw_range(storage, self.namespace, None::<Bound<T>>, None, Order::Ascending)
            .next()
            .is_none()
    }

    pub fn has(&self, storage: &dyn Storage, item: T) -> bool {
        storage.read(&self.storage_key(&item)).is_some()
    }

    pub fn insert(&self, storage: &mut dyn Storage, item: T) {
        storage.write(&self.storage_key(&item), &[]);
    }

    pub fn remove(&self, storage: &mut dyn Storage, item: T) {
        storage.remove(&self.storage_key(&item));
    }

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        min: Option<Bound<T>>,
        max: Option<Bound<T>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<T::Output>> + 'b> {
        let iter = raw_range(storage, self.namespace, min, max, order)
            .map(|(k, _)| T::from_slice(&k));

        Box::new(iter)
    }

    /// Count the members. Iterates the whole set.
    pub fn count(&self, storage: &dyn Storage) -> usize {
        raw_range(storage, self.namespace, None::<Bound<T>>, None, Order::Ascending).count()
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        warp_types::{ChainCode, Hash256, MockStorage},
    };

    const CONSUMED: Set<(ChainCode, Hash256)> = Set::new("consumed");

    #[test]
    fn insert_has_remove() {
        let storage = &mut MockStorage::new();
        let xch = ChainCode::from_inner(*b"xch");

        assert!(CONSUMED.is_empty(storage));

        CONSUMED.insert(storage, (xch, Hash256::from_u128(1)));
        CONSUMED.insert(storage, (xch, Hash256::from_u128(2)));

        assert!(CONSUMED.has(storage, (xch, Hash256::from_u128(1))));
        assert!(!CONSUMED.has(storage, (xch, Hash256::from_u128(3))));
        assert_eq!(CONSUMED.count(storage), 2);

        CONSUMED.remove(storage, (xch, Hash256::from_u128(1)));
        assert!(!CONSUMED.has(storage, (xch, Hash256::from_u128(1))));

        let members = CONSUMED
            .range(storage, None, None, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(members, vec![(xch, Hash256::from_u128(2))]);
    }
}
