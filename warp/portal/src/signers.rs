use {
    crate::page_limit,
    warp_crypto::secp256k1_recover_eth_address,
    warp_storage::{Bound, Item, Set},
    warp_types::{
        decode_signatures, Addr, ContractError, Hash256, Order, RecoverableSignature, StdResult,
        Storage,
    },
};

pub const SIGNERS: Set<Addr> = Set::new("signer");

/// Number of entries in [`SIGNERS`], kept alongside so that it doesn't need to
/// be counted by iteration.
pub const SIGNER_COUNT: Item<u32> = Item::new("signer_count");

pub const SIGNATURE_THRESHOLD: Item<u32> = Item::new("signature_threshold");

pub fn is_signer(storage: &dyn Storage, signer: Addr) -> bool {
    SIGNERS.has(storage, signer)
}

/// Add or remove a signer. Removal fails if it would leave fewer signers than
/// the threshold.
pub fn set_signer(
    storage: &mut dyn Storage,
    signer: Addr,
    is_signer: bool,
) -> anyhow::Result<()> {
    if SIGNERS.has(storage, signer) == is_signer {
        return Err(ContractError::NoChange { what: "signer" }.into());
    }

    let count = SIGNER_COUNT.may_load(storage)?.unwrap_or_default();

    let count = if is_signer {
        SIGNERS.insert(storage, signer);
        count + 1
    } else {
        let threshold = SIGNATURE_THRESHOLD.may_load(storage)?.unwrap_or_default();
        let remaining = count - 1;

        if threshold > remaining {
            return Err(ContractError::InvalidThreshold {
                threshold,
                signers: remaining,
            }
            .into());
        }

        SIGNERS.remove(storage, signer);
        remaining
    };

    SIGNER_COUNT.save(storage, &count)?;

    Ok(())
}

/// Replace the threshold; return the old one.
pub fn set_signature_threshold(storage: &mut dyn Storage, threshold: u32) -> anyhow::Result<u32> {
    let old_threshold = SIGNATURE_THRESHOLD.may_load(storage)?;

    if old_threshold == Some(threshold) {
        return Err(ContractError::NoChange {
            what: "signature threshold",
        }
        .into());
    }

    let signers = SIGNER_COUNT.may_load(storage)?.unwrap_or_default();

    if threshold == 0 || threshold > signers {
        return Err(ContractError::InvalidThreshold { threshold, signers }.into());
    }

    SIGNATURE_THRESHOLD.save(storage, &threshold)?;

    Ok(old_threshold.unwrap_or_default())
}

pub fn list_signers(
    storage: &dyn Storage,
    start_after: Option<Addr>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    SIGNERS
        .range(storage, start_after.map(Bound::Exclusive), None, Order::Ascending)
        .take(page_limit(limit))
        .collect()
}

/// Check that `blob` carries signatures over `digest` from at least
/// `threshold` distinct signers. Return the signers in the order they signed.
///
/// Signatures must be sorted by strictly ascending signer address, which
/// rules out duplicates without keeping track of who has been seen.
pub fn verify_signatures(
    storage: &dyn Storage,
    digest: Hash256,
    blob: &[u8],
) -> anyhow::Result<Vec<Addr>> {
    let threshold = SIGNATURE_THRESHOLD.load(storage)?;

    // A blob that isn't a whole number of 65-byte signatures is malformed
    // (`!sig`), whatever its length. Only a well-formed blob is counted
    // against the threshold (`!sigs`).
    let signatures = decode_signatures(blob)?;

    if signatures.len() < threshold as usize {
        return Err(ContractError::TooFewSignatures {
            threshold,
            count: signatures.len(),
        }
        .into());
    }

    let mut signers = Vec::<Addr>::with_capacity(signatures.len());

    for signature in &signatures {
        let signer = recover_signer(digest, signature)?;

        if let Some(previous) = signers.last().copied() {
            if signer <= previous {
                return Err(ContractError::SignerOrder {
                    previous,
                    current: signer,
                }
                .into());
            }
        }

        if !SIGNERS.has(storage, signer) {
            return Err(ContractError::UnknownSigner { signer }.into());
        }

        signers.push(signer);
    }

    Ok(signers)
}

fn recover_signer(
    digest: Hash256,
    signature: &RecoverableSignature,
) -> Result<Addr, ContractError> {
    let recovery_id = signature.recovery_id()?;

    secp256k1_recover_eth_address(digest.inner(), &signature.rs(), recovery_id)
        .map(Addr::from_inner)
        .map_err(|err| ContractError::MalformedSignature {
            reason: err.to_string(),
        })
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        k256::ecdsa::SigningKey,
        rand::rngs::OsRng,
        test_case::test_case,
        warp_crypto::{eth_address, secp256k1_sign_recoverable},
        warp_types::{encode_signatures, HashExt, MockStorage, ResultExt},
    };

    /// Generate keys, sorted by address.
    fn keys(n: usize) -> Vec<(SigningKey, Addr)> {
        let mut keys = (0..n)
            .map(|_| {
                let sk = SigningKey::random(&mut OsRng);
                let addr = Addr::from_inner(eth_address(sk.verifying_key()));
                (sk, addr)
            })
            .collect::<Vec<_>>();

        keys.sort_by_key(|(_, addr)| *addr);
        keys
    }

    fn sign(sk: &SigningKey, digest: Hash256) -> RecoverableSignature {
        RecoverableSignature::from_packed(&secp256k1_sign_recoverable(sk, digest.inner()).unwrap())
    }

    fn setup(keys: &[(SigningKey, Addr)], threshold: u32) -> MockStorage {
        let mut storage = MockStorage::new();
        for (_, addr) in keys {
            set_signer(&mut storage, *addr, true).unwrap();
        }
        set_signature_threshold(&mut storage, threshold).unwrap();
        storage
    }

    #[test]
    fn threshold_of_ascending_signatures() {
        let keys = keys(3);
        let storage = setup(&keys, 2);
        let digest = b"message".keccak256();

        // Any two of three, in ascending order.
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            let blob = encode_signatures(&[sign(&keys[i].0, digest), sign(&keys[j].0, digest)]);
            verify_signatures(&storage, digest, &blob)
                .should_succeed_and_equal(vec![keys[i].1, keys[j].1]);
        }

        // All three also works.
        let blob = encode_signatures(&keys.iter().map(|(sk, _)| sign(sk, digest)).collect::<Vec<_>>());
        verify_signatures(&storage, digest, &blob).should_succeed();
    }

    #[test_case(&[1, 0], "!order"; "descending")]
    #[test_case(&[0, 0], "!order"; "duplicate")]
    #[test_case(&[0], "!sigs"; "too few")]
    #[test_case(&[], "!sigs"; "empty")]
    fn rejecting_bad_sets(indexes: &[usize], tag: &str) {
        let keys = keys(3);
        let storage = setup(&keys, 2);
        let digest = b"message".keccak256();

        let signatures = indexes
            .iter()
            .map(|i| sign(&keys[*i].0, digest))
            .collect::<Vec<_>>();

        verify_signatures(&storage, digest, &encode_signatures(&signatures))
            .should_fail_with_error(tag);
    }

    #[test]
    fn rejecting_outsiders_and_garbage() {
        let keys = keys(2);
        let storage = setup(&keys[..1], 1);
        let digest = b"message".keccak256();

        // keys[1] is a valid key but not a signer.
        let blob = encode_signatures(&[sign(&keys[1].0, digest)]);
        verify_signatures(&storage, digest, &blob).should_fail_with_error("!signer");

        // Partial triple. Malformed even where the threshold isn't met either.
        verify_signatures(&storage, digest, &[27; 64]).should_fail_with_error("!sig");
        verify_signatures(&setup(&keys, 2), digest, &[27; 64]).should_fail_with_error("!sig");

        // Bad recovery byte.
        let mut signature = sign(&keys[0].0, digest);
        signature.v = 29;
        verify_signatures(&storage, digest, &encode_signatures(&[signature]))
            .should_fail_with_error("!sig");
    }

    #[test]
    fn signature_over_other_digest_recovers_someone_else() {
        let keys = keys(1);
        let storage = setup(&keys, 1);

        let blob = encode_signatures(&[sign(&keys[0].0, b"other".keccak256())]);
        verify_signatures(&storage, b"message".keccak256(), &blob)
            .should_fail_with_error("!signer");
    }

    #[test]
    fn threshold_bounds() {
        let keys = keys(2);
        let mut storage = setup(&keys, 2);

        set_signature_threshold(&mut storage, 2).should_fail_with_error("!diff");
        set_signature_threshold(&mut storage, 0).should_fail_with_error("!threshold");
        set_signature_threshold(&mut storage, 3).should_fail_with_error("!threshold");

        // Removing a signer would leave one signer under a threshold of two.
        set_signer(&mut storage, keys[0].1, false).should_fail_with_error("!threshold");

        set_signature_threshold(&mut storage, 1).should_succeed_and_equal(2);
        set_signer(&mut storage, keys[0].1, false).should_succeed();
        set_signer(&mut storage, keys[0].1, false).should_fail_with_error("!diff");

        assert_eq!(SIGNER_COUNT.load(&storage).unwrap(), 1);
        list_signers(&storage, None, None).should_succeed_and_equal(vec![keys[1].1]);
    }
}
