use {
    crate::{AppError, AppResult},
    warp_storage::Map,
    warp_types::{Addr, StdError, Storage},
};

/// Contract metadata: address => code index.
pub const CONTRACTS: Map<Addr, u32> = Map::new("contracts");

/// Native currency balances: address => amount.
pub const BALANCES: Map<Addr, u128> = Map::new("balances");

/// Each contract has its own storage space, prefixed by the word "wasm"
/// followed by the contract address.
pub const CONTRACT_NAMESPACE: &[u8] = b"wasm";

/// Move native currency between two accounts.
pub fn transfer_native(
    storage: &mut dyn Storage,
    from: Addr,
    to: Addr,
    amount: u128,
) -> AppResult<()> {
    if amount == 0 || from == to {
        return Ok(());
    }

    let balance = BALANCES.may_load(storage, from)?.unwrap_or_default();
    let Some(remaining) = balance.checked_sub(amount) else {
        return Err(AppError::InsufficientFunds {
            address: from,
            balance,
            amount,
        });
    };

    if remaining == 0 {
        BALANCES.remove(storage, from);
    } else {
        BALANCES.save(storage, from, &remaining)?;
    }

    let received = BALANCES.may_load(storage, to)?.unwrap_or_default();
    let received = received
        .checked_add(amount)
        .ok_or_else(|| StdError::overflow(received, amount, "+"))?;
    BALANCES.save(storage, to, &received)?;

    Ok(())
}

// ----------------------------------- tests -----------------------------------
