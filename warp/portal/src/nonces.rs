use {
    warp_storage::{Counter, Set},
    warp_types::{ChainCode, ContractError, Hash256, StdResult, Storage},
};

/// The number of messages sent so far. The n-th outbound message carries
/// nonce n, big-endian encoded into 32 bytes.
pub const OUTBOUND_NONCE: Counter<u128> = Counter::new("outbound_nonce", 0, 1);

/// Inbound nonces that have been consumed, per source chain. Entries are never
/// removed.
pub const CONSUMED_NONCES: Set<(ChainCode, Hash256)> = Set::new("consumed_nonce");

/// Assign the nonce of the next outbound message.
pub fn next_outbound_nonce(storage: &mut dyn Storage) -> StdResult<Hash256> {
    let (_, nonce) = OUTBOUND_NONCE.increment(storage)?;

    Ok(Hash256::from_u128(nonce))
}

pub fn current_outbound_nonce(storage: &dyn Storage) -> StdResult<Hash256> {
    OUTBOUND_NONCE.current(storage).map(Hash256::from_u128)
}

pub fn is_consumed(storage: &dyn Storage, source_chain: ChainCode, nonce: Hash256) -> bool {
    CONSUMED_NONCES.has(storage, (source_chain, nonce))
}

pub fn ensure_unconsumed(
    storage: &dyn Storage,
    source_chain: ChainCode,
    nonce: Hash256,
) -> Result<(), ContractError> {
    if is_consumed(storage, source_chain, nonce) {
        return Err(ContractError::NonceReused {
            chain: source_chain,
            nonce,
        });
    }

    Ok(())
}

pub fn consume(storage: &mut dyn Storage, source_chain: ChainCode, nonce: Hash256) {
    CONSUMED_NONCES.insert(storage, (source_chain, nonce));
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        warp_types::{MockStorage, ResultExt},
    };

    #[test]
    fn outbound_nonces_count_up_from_one() {
        let mut storage = MockStorage::new();

        assert_eq!(current_outbound_nonce(&storage).unwrap(), Hash256::ZERO);
        assert_eq!(next_outbound_nonce(&mut storage).unwrap(), Hash256::from_u128(1));
        assert_eq!(next_outbound_nonce(&mut storage).unwrap(), Hash256::from_u128(2));
        assert_eq!(current_outbound_nonce(&storage).unwrap(), Hash256::from_u128(2));

        let first = Hash256::from_u128(1);
        assert_eq!(first.inner()[31], 1);
        assert!(first.inner()[..31].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn inbound_nonces_are_scoped_by_source_chain() {
        let mut storage = MockStorage::new();
        let xch = ChainCode::from_inner(*b"xch");
        let bse = ChainCode::from_inner(*b"bse");
        let nonce = Hash256::mock(7);

        consume(&mut storage, xch, nonce);

        ensure_unconsumed(&storage, xch, nonce).should_fail_with_error("!nonce");
        ensure_unconsumed(&storage, bse, nonce).should_succeed();
    }
}
