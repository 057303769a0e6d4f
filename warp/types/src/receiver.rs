//! The interface a contract implements to receive messages from the Portal.

use {
    crate::{ChainCode, ContractError, Hash256},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ReceiverMsg {
    /// Deliver a verified inbound message. Only the Portal may call this.
    ReceiveMessage {
        nonce: Hash256,
        source_chain: ChainCode,
        source: Hash256,
        payload: Vec<Hash256>,
    },
}

/// Wraps [`ReceiverMsg`] so that it can be sent to any receiving contract,
/// regardless of the other variants of that contract's execute message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    Receiver(ReceiverMsg),
}

/// Split a payload into exactly `N` words.
pub fn payload_words<const N: usize>(payload: &[Hash256]) -> Result<[Hash256; N], ContractError> {
    payload
        .try_into()
        .map_err(|_| ContractError::MalformedPayload {
            reason: format!("expecting {N} words, got {}", payload.len()),
        })
}
