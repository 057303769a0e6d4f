//! Standard fungible token interface.
//!
//! The wrapped CAT and wrapped native contracts accept the same `transfer`,
//! `transfer_from` and `approve` messages and answer the same queries, so
//! other contracts may talk to any of them using the types here.

use {
    crate::{Addr, Hash256},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq,
)]
#[serde(deny_unknown_fields)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u128,
}

// --------------------------------- messages ----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// The account allowed to mint and burn. `None` for a fixed supply.
    pub minter: Option<Addr>,
    pub initial_balances: BTreeMap<Addr, u128>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
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
    /// Set an allowance using the owner's signature over the permit digest
    /// instead of a call from the owner.
    Permit {
        owner: Addr,
        spender: Addr,
        value: u128,
        deadline: u64,
        v: u8,
        r: Hash256,
        s: Hash256,
    },
    Mint {
        to: Addr,
        amount: u128,
    },
    Burn {
        from: Addr,
        amount: u128,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns [`TokenInfo`].
    TokenInfo {},
    /// Returns `u128`.
    Balance { address: Addr },
    /// Returns `u128`.
    Allowance { owner: Addr, spender: Addr },
    /// Returns `u128`: the next permit nonce of `owner`.
    Nonce { owner: Addr },
    /// Returns `u128`.
    TotalSupply {},
}

// ---------------------------------- events -----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Zero for mints.
    pub from: Addr,
    /// Zero for burns.
    pub to: Addr,
    pub amount: u128,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    pub owner: Addr,
    pub spender: Addr,
    pub amount: u128,
}

crate::event_name! {
    Transfer => "transfer",
    Approval => "approval",
}
