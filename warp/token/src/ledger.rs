//! Balance and allowance bookkeeping shared by every fungible token in the
//! workspace. Each function returns the event the caller should emit.

use {
    crate::{ALLOWANCES, BALANCES, TOKEN_INFO},
    anyhow::ensure,
    warp_types::{
        token::{Approval, TokenInfo, Transfer},
        Addr, ContractError, StdError, StdResult, Storage,
    },
};

pub fn initialize(
    storage: &mut dyn Storage,
    name: String,
    symbol: String,
    decimals: u8,
) -> StdResult<()> {
    TOKEN_INFO.save(storage, &TokenInfo {
        name,
        symbol,
        decimals,
        total_supply: 0,
    })
}

pub fn balance_of(storage: &dyn Storage, owner: Addr) -> StdResult<u128> {
    BALANCES
        .may_load(storage, owner)
        .map(|maybe_balance| maybe_balance.unwrap_or_default())
}

pub fn allowance_of(storage: &dyn Storage, owner: Addr, spender: Addr) -> StdResult<u128> {
    ALLOWANCES
        .may_load(storage, (owner, spender))
        .map(|maybe_allowance| maybe_allowance.unwrap_or_default())
}

pub fn transfer(
    storage: &mut dyn Storage,
    from: Addr,
    to: Addr,
    amount: u128,
) -> anyhow::Result<Transfer> {
    decrease_balance(storage, from, amount)?;
    increase_balance(storage, to, amount)?;

    Ok(Transfer { from, to, amount })
}

/// Deduct `amount` from the allowance `owner` has given `spender`.
pub fn spend_allowance(
    storage: &mut dyn Storage,
    owner: Addr,
    spender: Addr,
    amount: u128,
) -> anyhow::Result<()> {
    let allowance = allowance_of(storage, owner, spender)?;

    ensure!(allowance >= amount, ContractError::InsufficientAllowance {
        owner,
        spender,
        allowance,
        amount,
    });

    ALLOWANCES.save(storage, (owner, spender), &(allowance - amount))?;

    Ok(())
}

pub fn approve(
    storage: &mut dyn Storage,
    owner: Addr,
    spender: Addr,
    amount: u128,
) -> StdResult<Approval> {
    if amount == 0 {
        ALLOWANCES.remove(storage, (owner, spender));
    } else {
        ALLOWANCES.save(storage, (owner, spender), &amount)?;
    }

    Ok(Approval {
        owner,
        spender,
        amount,
    })
}

pub fn mint(storage: &mut dyn Storage, to: Addr, amount: u128) -> anyhow::Result<Transfer> {
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        info.total_supply = info
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| StdError::overflow(info.total_supply, amount, "+"))?;
        Ok(info)
    })?;

    increase_balance(storage, to, amount)?;

    Ok(Transfer {
        from: Addr::ZERO,
        to,
        amount,
    })
}

pub fn burn(storage: &mut dyn Storage, from: Addr, amount: u128) -> anyhow::Result<Transfer> {
    decrease_balance(storage, from, amount)?;

    // Can't underflow: the supply is at least the balance just deducted.
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        info.total_supply -= amount;
        Ok(info)
    })?;

    Ok(Transfer {
        from,
        to: Addr::ZERO,
        amount,
    })
}

fn increase_balance(storage: &mut dyn Storage, owner: Addr, amount: u128) -> StdResult<()> {
    let balance = balance_of(storage, owner)?;
    let balance = balance
        .checked_add(amount)
        .ok_or_else(|| StdError::overflow(balance, amount, "+"))?;

    BALANCES.save(storage, owner, &balance)
}

fn decrease_balance(storage: &mut dyn Storage, owner: Addr, amount: u128) -> anyhow::Result<()> {
    let balance = balance_of(storage, owner)?;

    ensure!(balance >= amount, ContractError::InsufficientBalance {
        owner,
        balance,
        amount,
    });

    if balance == amount {
        BALANCES.remove(storage, owner);
    } else {
        BALANCES.save(storage, owner, &(balance - amount))?;
    }

    Ok(())
}

// ----------------------------------- tests -----------------------------------
