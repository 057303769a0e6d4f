use {
    crate::{receiver::ReceiverMsg, Addr, ChainCode, Hash256},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Decimals of the wrapped token when the mojo-to-token ratio is 10^15.
pub const DEFAULT_DECIMALS: u8 = 18;

// ----------------------------------- types -----------------------------------

#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq,
)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub owner: Addr,
    pub portal: Addr,
    pub tip_bps: u16,
    /// Token units per mojo.
    pub mojo_to_token_ratio: u128,
    pub other_chain: ChainCode,
}

/// Identifiers of the puzzles on the other chain that lock CATs (inbound
/// source) and that unlock them (outbound destination).
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
#[serde(deny_unknown_fields)]
pub struct PuzzleHashes {
    pub locker_puzzle_hash: Hash256,
    pub unlocker_puzzle_hash: Hash256,
}

// --------------------------------- messages ----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub portal: Addr,
    pub tip_bps: u16,
    pub mojo_to_token_ratio: u128,
    pub other_chain: ChainCode,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Set the puzzle hashes. Owner only, and only once.
    InitializePuzzleHashes {
        locker_puzzle_hash: Hash256,
        unlocker_puzzle_hash: Hash256,
    },
    /// Burn `amount` mojos worth of tokens and unlock the CATs to `receiver`
    /// on the other chain. The message toll must be attached.
    BridgeBack {
        receiver: Hash256,
        amount: u128,
    },
    Transfer {
        to: Addr,
        amount: u128,
    },
    TransferFrom {
        from: Addr,
        to: Addr,
        amount: u128,
    },
    Approve {
        spender: Addr,
        amount: u128,
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
    /// Returns [`TokenInfo`](crate::token::TokenInfo).
    TokenInfo {},
    /// Returns `u128`.
    Balance { address: Addr },
    /// Returns `u128`.
    Allowance { owner: Addr, spender: Addr },
    /// Returns `u128`.
    TotalSupply {},
}

// ---------------------------------- events -----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BridgedBack {
    pub sender: Addr,
    pub receiver: Hash256,
    /// Mojos unlocked on the other chain, after the tip.
    pub amount: u128,
    pub tip: u128,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Minted {
    pub nonce: Hash256,
    pub receiver: Addr,
    /// Mojos credited to the receiver, after the tip.
    pub amount: u128,
    pub tip: u128,
}

crate::event_name! {
    BridgedBack => "bridged_back",
    Minted => "minted",
}
