use {
    crate::{receiver::ReceiverMsg, Addr, ChainCode, Hash256},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

// ----------------------------------- types -----------------------------------

#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq,
)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub owner: Addr,
    /// Tip in basis points, deducted from every transfer in both directions.
    pub tip_bps: u16,
    pub portal: Addr,
    pub other_chain: ChainCode,
    pub wrapped_native: Addr,
    /// Native units per wrapped native unit.
    pub wrapped_native_ratio: u128,
    /// Wrapped native units per foreign unit.
    pub wrapped_native_factor: u128,
}

/// Identifiers of the puzzles on the other chain that mint wrapped tokens
/// (outbound destination) and that burn them (inbound source).
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
#[serde(deny_unknown_fields)]
pub struct PuzzleHashes {
    pub burn_puzzle_hash: Hash256,
    pub mint_puzzle_hash: Hash256,
}

/// The asset named by the first word of an inbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    /// The wrapped native contract. Paid out as native currency.
    WrappedNative,
    /// Any other token. Paid out as is.
    Token(Addr),
}

// --------------------------------- messages ----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub tip_bps: u16,
    pub portal: Addr,
    /// The ratio and decimals of the wrapped native token are queried from
    /// it during instantiation.
    pub wrapped_native: Addr,
    pub other_chain: ChainCode,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Set the puzzle hashes. Owner only, and only once.
    InitializePuzzleHashes {
        burn_puzzle_hash: Hash256,
        mint_puzzle_hash: Hash256,
    },
    /// Lock `amount` (in the other chain's precision) of `token` and send it
    /// to `receiver` on the other chain. The message toll must be attached.
    BridgeToChia {
        token: Addr,
        receiver: Hash256,
        amount: u128,
    },
    /// Same as `BridgeToChia`, but first approve the bridge using a permit.
    BridgeToChiaWithPermit {
        token: Addr,
        receiver: Hash256,
        amount: u128,
        deadline: u64,
        v: u8,
        r: Hash256,
        s: Hash256,
    },
    /// Wrap the attached native currency, less the toll, and send it to
    /// `receiver` on the other chain.
    BridgeEtherToChia {
        receiver: Hash256,
        max_toll: u128,
    },
    /// Send `amounts[i]` of `token` held by the bridge to `recipients[i]`.
    /// Owner only.
    RescueAsset {
        token: Addr,
        recipients: Vec<Addr>,
        amounts: Vec<u128>,
    },
    /// Send `amounts[i]` of native currency held by the bridge to
    /// `recipients[i]`. Owner only.
    RescueEther {
        recipients: Vec<Addr>,
        amounts: Vec<u128>,
    },
    Receiver(ReceiverMsg),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns [`Config`].
    Config {},
    /// Returns `Option<PuzzleHashes>`.
    PuzzleHashes {},
}

// ---------------------------------- events -----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BridgedToChia {
    pub sender: Addr,
    pub token: Addr,
    pub receiver: Hash256,
    /// Amount delivered on the other chain, in its precision.
    pub amount: u128,
    pub tip: u128,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BridgedFromChia {
    pub nonce: Hash256,
    pub token: Addr,
    pub receiver: Addr,
    /// Amount paid out, in the token's (or native) precision.
    pub amount: u128,
    pub tip: u128,
}

crate::event_name! {
    BridgedToChia => "bridged_to_chia",
    BridgedFromChia => "bridged_from_chia",
}
