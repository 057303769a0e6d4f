use {
    serde::de::DeserializeOwned,
    warp_types::{Addr, EventName, Json, JsonDeExt, StdResult},
};

/// An event emitted during a transaction, together with the contract that
/// emitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEvent {
    pub contract: Addr,
    pub ty: String,
    pub data: Json,
}

impl ContractEvent {
    pub fn is<E>(&self) -> bool
    where
        E: EventName,
    {
        self.ty == E::EVENT_NAME
    }
}

/// The outcome of a successful transaction: every event it emitted, in the
/// order they were emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxOutcome {
    pub events: Vec<ContractEvent>,
}

impl TxOutcome {
    /// Decode every event of type `E`.
    pub fn events_of<E>(&self) -> StdResult<Vec<E>>
    where
        E: EventName + DeserializeOwned,
    {
        self.events
            .iter()
            .filter(|event| event.is::<E>())
            .map(|event| event.data.deserialize_json())
            .collect()
    }

    /// Decode the first event of type `E` emitted by `contract`, if any.
    pub fn search_event<E>(&self, contract: Addr) -> StdResult<Option<E>>
    where
        E: EventName + DeserializeOwned,
    {
        self.events
            .iter()
            .find(|event| event.contract == contract && event.is::<E>())
            .map(|event| event.data.deserialize_json())
            .transpose()
    }
}
