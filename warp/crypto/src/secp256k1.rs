use {
    crate::{keccak256, to_sized, CryptoError, CryptoResult},
    k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey},
};

const SECP256K1_DIGEST_LEN: usize = 32;
const SECP256K1_SIGNATURE_LEN: usize = 64;

/// Offset added to the recovery ID in Ethereum-style `v` values.
pub const ETH_RECOVERY_OFFSET: u8 = 27;

/// Derive the Ethereum address of a public key: the last 20 bytes of the
/// keccak256 hash of the uncompressed point, without its `0x04` tag.
pub fn eth_address(vk: &VerifyingKey) -> [u8; 20] {
    let point = vk.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);

    let mut addr = [0; 20];
    addr.copy_from_slice(&hash[12..]);
    addr
}

/// Recover the Ethereum address that signed the given digest.
///
/// `sig` is the 64-byte `r ‖ s`; `recovery_id` is 0 or 1. Signatures with a
/// high S value are rejected, so every signer has exactly one valid signature
/// per digest.
///
/// NOTE: This function takes the hash of the message, not the prehash.
pub fn secp256k1_recover_eth_address(
    msg_hash: &[u8],
    sig: &[u8],
    recovery_id: u8,
) -> CryptoResult<[u8; 20]> {
    let msg_hash = to_sized::<SECP256K1_DIGEST_LEN>(msg_hash)?;
    let sig = to_sized::<SECP256K1_SIGNATURE_LEN>(sig)?;
    let sig = Signature::from_slice(&sig)?;

    if sig.normalize_s().is_some() {
        return Err(CryptoError::HighS);
    }

    let recovery_id = RecoveryId::from_byte(recovery_id)
        .ok_or(CryptoError::InvalidRecoveryId { recovery_id })?;

    VerifyingKey::recover_from_prehash(&msg_hash, &sig, recovery_id)
        .map(|vk| eth_address(&vk))
        .map_err(Into::into)
}

/// Sign a digest, returning the packed `v ‖ r ‖ s` signature with `v` being
/// 27 or 28.
pub fn secp256k1_sign_recoverable(sk: &SigningKey, msg_hash: &[u8]) -> CryptoResult<[u8; 65]> {
    let msg_hash = to_sized::<SECP256K1_DIGEST_LEN>(msg_hash)?;
    let (sig, recovery_id) = sk.sign_prehash_recoverable(&msg_hash)?;

    let mut packed = [0; 65];
    packed[0] = recovery_id.to_byte() + ETH_RECOVERY_OFFSET;
    packed[1..].copy_from_slice(&sig.to_bytes());
    Ok(packed)
}

// ----------------------------------- tests -----------------------------------
