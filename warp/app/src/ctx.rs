use {
    crate::Contract,
    warp_types::BlockInfo,
};

/// Everything a host operation needs: the uploaded codes, the storage it
/// reads and writes, and the chain's current state.
pub struct AppCtx<'a, S> {
    pub codes: &'a [Box<dyn Contract + Send + Sync>],
    pub storage: S,
    pub chain_id: u64,
    pub block: BlockInfo,
}

impl<S> Clone for AppCtx<'_, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            codes: self.codes,
            storage: self.storage.clone(),
            chain_id: self.chain_id,
            block: self.block,
        }
    }
}

impl<'a, S> AppCtx<'a, S> {
    pub fn new(
        codes: &'a [Box<dyn Contract + Send + Sync>],
        storage: S,
        chain_id: u64,
        block: BlockInfo,
    ) -> Self {
        Self {
            codes,
            storage,
            chain_id,
            block,
        }
    }
}
