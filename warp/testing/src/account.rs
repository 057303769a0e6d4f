use {
    k256::ecdsa::SigningKey,
    rand::rngs::OsRng,
    warp_crypto::{eth_address, secp256k1_sign_recoverable},
    warp_types::{
        encode_signatures,
        portal::Message,
        typed_data::{message_digest, permit_digest},
        Addr, Hash256, HexBinary, RecoverableSignature,
    },
};

/// An externally owned account, backed by a Secp256k1 key.
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub name: &'static str,
    pub address: Addr,
    sk: SigningKey,
}

impl TestAccount {
    pub fn new_random(name: &'static str) -> Self {
        let sk = SigningKey::random(&mut OsRng);
        let address = Addr::from_inner(eth_address(sk.verifying_key()));

        Self { name, address, sk }
    }

    pub fn sign(&self, digest: Hash256) -> RecoverableSignature {
        let packed = secp256k1_sign_recoverable(&self.sk, digest.inner())
            .expect("a 32-byte digest can always be signed");

        RecoverableSignature::from_packed(&packed)
    }

    /// Sign a permit letting `spender` spend `value` of this account's
    /// `token`.
    #[allow(clippy::too_many_arguments)]
    pub fn sign_permit(
        &self,
        token_name: &str,
        chain_id: u64,
        token: Addr,
        spender: Addr,
        value: u128,
        nonce: u128,
        deadline: u64,
    ) -> RecoverableSignature {
        let digest = permit_digest(
            token_name,
            chain_id,
            token,
            self.address,
            spender,
            value,
            nonce,
            deadline,
        );

        self.sign(digest)
    }
}

/// Generate `count` signer accounts, sorted by ascending address.
pub fn generate_signers(count: usize) -> Vec<TestAccount> {
    let mut signers = (0..count)
        .map(|_| TestAccount::new_random("signer"))
        .collect::<Vec<_>>();

    signers.sort_by_key(|signer| signer.address);
    signers
}

/// Sign an inbound message with each of `signers`, and pack the signatures in
/// the order the Portal expects them: by ascending signer address.
pub fn sign_message<'a, I>(signers: I, chain_id: u64, portal: Addr, message: &Message) -> HexBinary
where
    I: IntoIterator<Item = &'a TestAccount>,
{
    let digest = message_digest(chain_id, portal, message);

    let mut signers = signers.into_iter().collect::<Vec<_>>();
    signers.sort_by_key(|signer| signer.address);

    let signatures = signers
        .into_iter()
        .map(|signer| signer.sign(digest))
        .collect::<Vec<_>>();

    encode_signatures(&signatures).into()
}
