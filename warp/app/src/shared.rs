use {
    std::{
        sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
        vec,
    },
    warp_storage::extend_one_byte,
    warp_types::{Batch, Order, Record, Storage},
};

/// A wrapper over the `Arc<RwLock<T>>` smart pointer, providing some convenience
/// methods.
#[derive(Debug, Default)]
pub struct Shared<S> {
    inner: Arc<RwLock<S>>,
}

impl<S> Shared<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    pub fn read_access(&self) -> RwLockReadGuard<S> {
        self.inner
            .read()
            .unwrap_or_else(|err| panic!("poisoned lock: {err:?}"))
    }

    pub fn write_access(&self) -> RwLockWriteGuard<S> {
        self.inner
            .write()
            .unwrap_or_else(|err| panic!("poisoned lock: {err:?}"))
    }

    /// Disassemble the smart pointer and return the inner value.
    ///
    /// Panics if reference count is greater than 1, or if the lock is poisoned.
    pub fn disassemble(self) -> S {
        Arc::try_unwrap(self.inner)
            .unwrap_or_else(|_| panic!("unwrapping Arc when ref count > 1"))
            .into_inner()
            .unwrap_or_else(|err| panic!("poisoned lock: {err:?}"))
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// When the inner type is `Storage`, the outer `Shared` also implements `Storage`.
impl<S> Storage for Shared<S>
where
    S: Storage,
{
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.read_access().read(key)
    }

    // The iterator returned by the inner storage borrows the read guard, which
    // can't outlive this function. Instead, the iterator owns the guard and
    // collects records in small batches.
    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        Box::new(SharedIter::new(self.read_access(), min, max, order))
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.write_access().write(key, value)
    }

    fn remove(&mut self, key: &[u8]) {
        self.write_access().remove(key)
    }

    fn flush(&mut self, batch: Batch) {
        self.write_access().flush(batch)
    }
}

struct SharedIter<'a, S> {
    storage: RwLockReadGuard<'a, S>,
    batch: vec::IntoIter<Record>,
    min: Option<Vec<u8>>,
    max: Option<Vec<u8>>,
    order: Order,
}

impl<'a, S> SharedIter<'a, S> {
    const BATCH_SIZE: usize = 30;

    fn new(
        storage: RwLockReadGuard<'a, S>,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Self {
        Self {
            storage,
            batch: Vec::new().into_iter(),
            min: min.map(|slice| slice.to_vec()),
            max: max.map(|slice| slice.to_vec()),
            order,
        }
    }
}

impl<S> SharedIter<'_, S>
where
    S: Storage,
{
    fn collect_next_batch(&mut self) {
        let batch = self
            .storage
            .scan(self.min.as_deref(), self.max.as_deref(), self.order)
            .take(Self::BATCH_SIZE)
            .collect::<Vec<_>>();

        if let Some((key, _)) = batch.last() {
            match self.order {
                Order::Ascending => self.min = Some(extend_one_byte(key.clone())),
                Order::Descending => self.max = Some(key.clone()),
            }
        }

        self.batch = batch.into_iter();
    }
}

impl<S> Iterator for SharedIter<'_, S>
where
    S: Storage,
{
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(record) = self.batch.next() {
            return Some(record);
        }

        // The batch has reached its end. Collect another one; if that's empty,
        // the entire iteration has reached its end.
        self.collect_next_batch();
        self.batch.next()
    }
}

// ----------------------------------- tests -----------------------------------
