use {
    crate::Addr,
    serde::{Deserialize, Serialize},
};

/// 1 unit = 1 wei.
pub const WETH_RATIO: u128 = 1;

/// 1 unit = 10^12 wei, i.e. 0.001 ether with 3 decimals.
pub const MILLI_ETH_RATIO: u128 = 1_000_000_000_000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Native units per wrapped unit. Must be non-zero.
    pub ratio: u128,
}

impl InstantiateMsg {
    pub fn weth() -> Self {
        Self {
            name: "Wrapped Ether".to_string(),
            symbol: "WETH".to_string(),
            decimals: 18,
            ratio: WETH_RATIO,
        }
    }

    pub fn milli_eth() -> Self {
        Self {
            name: "milliETH".to_string(),
            symbol: "milliETH".to_string(),
            decimals: 3,
            ratio: MILLI_ETH_RATIO,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Wrap the attached native currency.
    Deposit {},
    /// Unwrap `amount` units and send the native currency to the caller.
    Withdraw { amount: u128 },
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
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns `u128`.
    Ratio {},
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
pub struct Deposited {
    pub owner: Addr,
    pub value: u128,
    pub units: u128,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Withdrawn {
    pub owner: Addr,
    pub units: u128,
    pub value: u128,
}

crate::event_name! {
    Deposited => "deposited",
    Withdrawn => "withdrawn",
}
