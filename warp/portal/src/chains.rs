use {
    crate::page_limit,
    warp_storage::{Bound, Set},
    warp_types::{ChainCode, ContractError, Order, StdResult, Storage},
};

/// Chains messages may be sent to and received from.
pub const SUPPORTED_CHAINS: Set<ChainCode> = Set::new("supported_chain");

pub fn ensure_destination_supported(
    storage: &dyn Storage,
    chain: ChainCode,
) -> Result<(), ContractError> {
    if !SUPPORTED_CHAINS.has(storage, chain) {
        return Err(ContractError::UnsupportedDestination { chain });
    }

    Ok(())
}

pub fn ensure_source_supported(storage: &dyn Storage, chain: ChainCode) -> Result<(), ContractError> {
    if !SUPPORTED_CHAINS.has(storage, chain) {
        return Err(ContractError::UnsupportedSource { chain });
    }

    Ok(())
}

/// Add or remove a chain. Errors if the chain is already in the requested
/// state.
pub fn set_chain_supported(
    storage: &mut dyn Storage,
    chain: ChainCode,
    is_supported: bool,
) -> Result<(), ContractError> {
    if SUPPORTED_CHAINS.has(storage, chain) == is_supported {
        return Err(ContractError::NoChange {
            what: "supported chain",
        });
    }

    if is_supported {
        SUPPORTED_CHAINS.insert(storage, chain);
    } else {
        SUPPORTED_CHAINS.remove(storage, chain);
    }

    Ok(())
}

pub fn list_supported_chains(
    storage: &dyn Storage,
    start_after: Option<ChainCode>,
    limit: Option<u32>,
) -> StdResult<Vec<ChainCode>> {
    SUPPORTED_CHAINS
        .range(storage, start_after.map(Bound::Exclusive), None, Order::Ascending)
        .take(page_limit(limit))
        .collect()
}

// ----------------------------------- tests -----------------------------------
