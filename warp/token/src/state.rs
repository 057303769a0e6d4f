use {
    warp_storage::{Item, Map},
    warp_types::{token::TokenInfo, Addr},
};

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

pub const MINTER: Item<Addr> = Item::new("minter");

pub const BALANCES: Map<Addr, u128> = Map::new("balance");

/// (owner, spender) => allowance
pub const ALLOWANCES: Map<(Addr, Addr), u128> = Map::new("allowance");

/// Owner => the nonce their next permit must be signed with.
pub const PERMIT_NONCES: Map<Addr, u128> = Map::new("permit_nonce");
