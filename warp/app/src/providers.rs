use {
    crate::{do_query_balance, do_query_wasm_smart, AppCtx, Shared},
    warp_storage::increment_last_byte,
    warp_types::{Addr, Buffer, Json, MockStorage, Order, Querier, Record, StdError, StdResult, Storage},
};

/// The storage a transaction runs on: a write buffer over the chain state.
/// Dropping it discards the transaction's writes.
pub type TxStorage = Shared<Buffer<Shared<MockStorage>>>;

// ---------------------------------- storage ----------------------------------

/// Provides access to a contract's storage.
///
/// Essentially, this is a prefixed key-value storage. The prefix is the word
/// `b"wasm"` followed by the contract address.
#[derive(Clone)]
pub struct StorageProvider<S> {
    storage: S,
    namespace: Vec<u8>,
}

impl<S> StorageProvider<S> {
    pub fn new(storage: S, prefixes: &[&[u8]]) -> Self {
        Self {
            storage,
            namespace: prefixes.concat(),
        }
    }

    pub fn namespace(&self) -> &[u8] {
        &self.namespace
    }
}

impl<S> Storage for StorageProvider<S>
where
    S: Storage,
{
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.storage.read(&concat(&self.namespace, key))
    }

    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        let (min, max) = prefixed_range_bounds(&self.namespace, min, max);
        let iter = self
            .storage
            .scan(Some(&min), Some(&max), order)
            .map(|(key, value)| (trim(&self.namespace, &key), value));

        Box::new(iter)
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        let prefixed_key = concat(&self.namespace, key);
        self.storage.write(&prefixed_key, value);
    }

    fn remove(&mut self, key: &[u8]) {
        let prefixed_key = concat(&self.namespace, key);
        self.storage.remove(&prefixed_key);
    }
}

#[inline]
fn concat(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(namespace.len() + key.len());
    joined.extend_from_slice(namespace);
    joined.extend_from_slice(key);
    joined
}

#[inline]
fn trim(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    key[namespace.len()..].to_vec()
}

#[inline]
fn prefixed_range_bounds(
    prefix: &[u8],
    min: Option<&[u8]>,
    max: Option<&[u8]>,
) -> (Vec<u8>, Vec<u8>) {
    let min = match min {
        Some(bytes) => concat(prefix, bytes),
        None => prefix.to_vec(),
    };
    let max = match max {
        Some(bytes) => concat(prefix, bytes),
        None => increment_last_byte(prefix.to_vec()),
    };
    (min, max)
}

// ---------------------------------- querier ----------------------------------

/// Provides querier functionalities to contracts.
///
/// Compared to `Querier`, which contracts use, this carries the depth of the
/// current query, to prevent the call stack from getting too deep.
pub struct QuerierProvider<'a, S> {
    ctx: AppCtx<'a, S>,
    query_depth: usize,
}

impl<'a, S> QuerierProvider<'a, S> {
    pub fn new(ctx: AppCtx<'a, S>, query_depth: usize) -> Self {
        Self { ctx, query_depth }
    }
}

impl<S> Querier for QuerierProvider<'_, S>
where
    S: Storage + Clone,
{
    fn query_contract(&self, contract: Addr, msg: Json) -> StdResult<Json> {
        do_query_wasm_smart(self.ctx.clone(), contract, &msg, self.query_depth)
            .map_err(|err| StdError::query(contract, err))
    }

    fn query_balance(&self, address: Addr) -> StdResult<u128> {
        do_query_balance(&self.ctx.storage, address).map_err(|err| StdError::query(address, err))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_provider_isolates_namespaces() {
        let base = Shared::new(MockStorage::new());
        let mut alice = StorageProvider::new(base.clone(), &[b"wasm".as_slice(), &[1]]);
        let mut bob = StorageProvider::new(base.clone(), &[b"wasm".as_slice(), &[2]]);

        alice.write(b"k1", b"a1");
        alice.write(b"k2", b"a2");
        bob.write(b"k1", b"b1");

        assert_eq!(alice.read(b"k1"), Some(b"a1".to_vec()));
        assert_eq!(bob.read(b"k1"), Some(b"b1".to_vec()));
        assert_eq!(base.read(b"wasm\x01k2"), Some(b"a2".to_vec()));

        // Iteration only covers the provider's own namespace, with the prefix
        // trimmed off.
        let records = alice.scan(None, None, Order::Ascending).collect::<Vec<_>>();
        assert_eq!(records, vec![
            (b"k1".to_vec(), b"a1".to_vec()),
            (b"k2".to_vec(), b"a2".to_vec()),
        ]);

        bob.remove(b"k1");
        assert_eq!(bob.scan(None, None, Order::Descending).count(), 0);
        assert_eq!(alice.read(b"k1"), Some(b"a1".to_vec()));
    }
}
