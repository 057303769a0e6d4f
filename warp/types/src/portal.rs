use {
    crate::{Addr, ChainCode, Hash256, HexBinary},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::collections::BTreeSet,
};

// ----------------------------------- types -----------------------------------

/// An inbound message, as signed by the signers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Message {
    pub nonce: Hash256,
    pub source_chain: ChainCode,
    pub source: Hash256,
    pub destination: Addr,
    pub payload: Vec<Hash256>,
}

#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq,
)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub owner: Addr,
    pub message_toll: u128,
    pub signature_threshold: u32,
    pub signer_count: u32,
    /// The nonce most recently assigned to an outbound message. Zero if no
    /// message has been sent yet.
    pub outbound_nonce: Hash256,
}

// --------------------------------- messages ----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub signers: BTreeSet<Addr>,
    pub signature_threshold: u32,
    pub message_toll: u128,
    pub supported_chains: BTreeSet<ChainCode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Send a message to another chain. The message toll must be attached.
    SendMessage {
        destination_chain: ChainCode,
        destination: Hash256,
        payload: Vec<Hash256>,
    },
    /// Deliver a message from another chain, authorized by the signers.
    ///
    /// `signatures` is the concatenation of 65-byte `v ‖ r ‖ s` triples,
    /// ordered by strictly ascending signer address.
    ReceiveMessage {
        nonce: Hash256,
        source_chain: ChainCode,
        source: Hash256,
        destination: Addr,
        payload: Vec<Hash256>,
        signatures: HexBinary,
    },
    /// Send collected native currency out of the Portal.
    WithdrawFees {
        recipients: Vec<Addr>,
        amounts: Vec<u128>,
    },
    /// Send tokens held by the Portal, e.g. token-denominated tips.
    RescueAsset {
        token: Addr,
        recipients: Vec<Addr>,
        amounts: Vec<u128>,
    },
    UpdateSigner {
        signer: Addr,
        is_signer: bool,
    },
    UpdateSignatureThreshold {
        threshold: u32,
    },
    UpdateMessageToll {
        toll: u128,
    },
    UpdateSupportedChain {
        chain: ChainCode,
        is_supported: bool,
    },
    TransferOwnership {
        new_owner: Addr,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns [`Config`].
    Config {},
    /// Returns `u128`.
    MessageToll {},
    /// Returns `u32`.
    SignatureThreshold {},
    /// Returns `bool`.
    IsSigner { signer: Addr },
    /// Returns `Vec<Addr>`, in ascending order.
    Signers {
        start_after: Option<Addr>,
        limit: Option<u32>,
    },
    /// Returns `Vec<ChainCode>`, in ascending order.
    SupportedChains {
        start_after: Option<ChainCode>,
        limit: Option<u32>,
    },
    /// Returns `bool`.
    IsSupportedChain { chain: ChainCode },
    /// Returns `Hash256`.
    OutboundNonce {},
    /// Returns `bool`.
    NonceUsed { source_chain: ChainCode, nonce: Hash256 },
    /// Returns `Hash256`: the digest signers must sign to authorize `message`.
    Digest { message: Message },
}

// ---------------------------------- events -----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageSent {
    pub nonce: Hash256,
    pub sender: Addr,
    pub destination_chain: ChainCode,
    pub destination: Hash256,
    pub payload: Vec<Hash256>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageReceived {
    pub nonce: Hash256,
    pub source_chain: ChainCode,
    pub source: Hash256,
    pub destination: Addr,
    pub payload: Vec<Hash256>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignerUpdated {
    pub signer: Addr,
    pub is_signer: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignatureThresholdUpdated {
    pub old_threshold: u32,
    pub new_threshold: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageTollUpdated {
    pub old_toll: u128,
    pub new_toll: u128,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SupportedChainUpdated {
    pub chain: ChainCode,
    pub is_supported: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeesWithdrawn {
    pub recipients: Vec<Addr>,
    pub amounts: Vec<u128>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnershipTransferred {
    pub previous_owner: Addr,
    pub new_owner: Addr,
}

crate::event_name! {
    MessageSent => "message_sent",
    MessageReceived => "message_received",
    SignerUpdated => "signer_updated",
    SignatureThresholdUpdated => "signature_threshold_updated",
    MessageTollUpdated => "message_toll_updated",
    SupportedChainUpdated => "supported_chain_updated",
    FeesWithdrawn => "fees_withdrawn",
    OwnershipTransferred => "ownership_transferred",
}
