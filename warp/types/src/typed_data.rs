//! Structured data hashing, compatible with EIP-712.
//!
//! Signers of inbound messages and holders of permits sign the digests
//! computed here; the contracts recompute them and recover the signer.

use crate::{portal::Message, Addr, Hash256, HashExt};

pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

pub const MESSAGE_TYPE: &str =
    "Message(bytes32 nonce,bytes3 source_chain,bytes32 source,address destination,bytes32[] contents)";

pub const PERMIT_TYPE: &str =
    "Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

pub const PORTAL_DOMAIN_NAME: &str = "Portal";

pub const DOMAIN_VERSION: &str = "1";

pub fn domain_separator(name: &str, chain_id: u64, verifying_contract: Addr) -> Hash256 {
    hash_words(&[
        DOMAIN_TYPE.keccak256(),
        name.keccak256(),
        DOMAIN_VERSION.keccak256(),
        Hash256::from_u128(chain_id.into()),
        Hash256::from_addr(verifying_contract),
    ])
}

/// `keccak256(0x1901 ‖ domain_separator ‖ struct_hash)`
pub fn typed_data_hash(domain_separator: Hash256, struct_hash: Hash256) -> Hash256 {
    let mut preimage = Vec::with_capacity(2 + 2 * Hash256::LENGTH);
    preimage.extend_from_slice(b"\x19\x01");
    preimage.extend_from_slice(domain_separator.inner());
    preimage.extend_from_slice(struct_hash.inner());
    preimage.keccak256()
}

/// The digest that signers sign to authorize delivery of an inbound message
/// through the Portal deployed at `portal`.
pub fn message_digest(chain_id: u64, portal: Addr, message: &Message) -> Hash256 {
    let contents = message
        .payload
        .iter()
        .flat_map(|word| word.into_inner())
        .collect::<Vec<_>>()
        .keccak256();

    let struct_hash = hash_words(&[
        MESSAGE_TYPE.keccak256(),
        message.nonce,
        message.source_chain.to_word(),
        message.source,
        Hash256::from_addr(message.destination),
        contents,
    ]);

    typed_data_hash(
        domain_separator(PORTAL_DOMAIN_NAME, chain_id, portal),
        struct_hash,
    )
}

/// The digest a token holder signs to approve `spender` without a transaction.
#[allow(clippy::too_many_arguments)]
pub fn permit_digest(
    token_name: &str,
    chain_id: u64,
    token: Addr,
    owner: Addr,
    spender: Addr,
    value: u128,
    nonce: u128,
    deadline: u64,
) -> Hash256 {
    let struct_hash = hash_words(&[
        PERMIT_TYPE.keccak256(),
        Hash256::from_addr(owner),
        Hash256::from_addr(spender),
        Hash256::from_u128(value),
        Hash256::from_u128(nonce),
        Hash256::from_u128(deadline.into()),
    ]);

    typed_data_hash(domain_separator(token_name, chain_id, token), struct_hash)
}

fn hash_words(words: &[Hash256]) -> Hash256 {
    words
        .iter()
        .flat_map(|word| word.into_inner())
        .collect::<Vec<_>>()
        .keccak256()
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::ChainCode, hex_literal::hex};

    #[test]
    fn domain_type_hash_matches_eip712() {
        // The well-known EIP-712 domain type hash.
        assert_eq!(
            DOMAIN_TYPE.keccak256(),
            Hash256::from_inner(hex!(
                "8b73c3c69bb8fe3d512ecc4cf759cc79239f7b179b0ffacaa9a75d522b39400f"
            ))
        );
    }

    fn mock_message() -> Message {
        Message {
            nonce: Hash256::from_u128(1),
            source_chain: ChainCode::from_inner(*b"xch"),
            source: Hash256::mock(0xbb),
            destination: Addr::mock(0xdd),
            payload: vec![Hash256::mock(1), Hash256::from_u128(10_000)],
        }
    }

    #[test]
    fn digest_binds_every_field() {
        let message = mock_message();
        let digest = message_digest(1, Addr::mock(0xaa), &message);

        // Same inputs, same digest.
        assert_eq!(digest, message_digest(1, Addr::mock(0xaa), &message));

        // Different chain ID or portal, different domain.
        assert_ne!(digest, message_digest(2, Addr::mock(0xaa), &message));
        assert_ne!(digest, message_digest(1, Addr::mock(0xab), &message));

        let mutations: [fn(&mut Message); 5] = [
            |m| m.nonce = Hash256::from_u128(2),
            |m| m.source_chain = ChainCode::from_inner(*b"eth"),
            |m| m.source = Hash256::mock(0xbc),
            |m| m.destination = Addr::mock(0xde),
            |m| {
                m.payload.pop();
            },
        ];

        for mutate in mutations {
            let mut mutated = mock_message();
            mutate(&mut mutated);
            assert_ne!(digest, message_digest(1, Addr::mock(0xaa), &mutated));
        }
    }
}
