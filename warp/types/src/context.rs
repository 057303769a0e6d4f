use {
    crate::{Addr, Json, JsonDeExt, JsonSerExt, StdResult, Storage},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de::DeserializeOwned, Deserialize, Serialize},
};

#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct BlockInfo {
    pub height: u64,
    /// Seconds since the UNIX epoch.
    pub timestamp: u64,
}

/// Read access to the state of other contracts and to native balances.
pub trait Querier {
    fn query_contract(&self, contract: Addr, msg: Json) -> StdResult<Json>;

    fn query_balance(&self, address: Addr) -> StdResult<u128>;
}

pub trait QuerierExt: Querier {
    fn query_wasm_smart<M, R>(&self, contract: Addr, msg: &M) -> StdResult<R>
    where
        M: Serialize,
        R: DeserializeOwned,
    {
        self.query_contract(contract, msg.to_json()?)?
            .deserialize_json()
    }
}

impl<Q> QuerierExt for Q where Q: Querier + ?Sized {}

/// Context of a call that may mutate the contract's state.
pub struct MutableCtx<'a> {
    pub storage: &'a mut dyn Storage,
    pub querier: &'a dyn Querier,
    pub chain_id: u64,
    pub block: BlockInfo,
    pub contract: Addr,
    pub sender: Addr,
    /// Native currency attached to the call, already credited to `contract`.
    pub funds: u128,
}

impl MutableCtx<'_> {
    pub fn as_immutable(&self) -> ImmutableCtx {
        ImmutableCtx {
            storage: &*self.storage,
            querier: self.querier,
            chain_id: self.chain_id,
            block: self.block,
            contract: self.contract,
        }
    }
}

/// Context of a read-only call.
pub struct ImmutableCtx<'a> {
    pub storage: &'a dyn Storage,
    pub querier: &'a dyn Querier,
    pub chain_id: u64,
    pub block: BlockInfo,
    pub contract: Addr,
}
