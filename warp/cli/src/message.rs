use {
    crate::{config::Config, keys::Keystore, prompt::print_json_pretty},
    anyhow::{anyhow, bail},
    clap::Args,
    serde::Serialize,
    std::path::Path,
    warp_crypto::{secp256k1_recover_eth_address, secp256k1_sign_recoverable},
    warp_types::{
        decode_signatures, portal::Message, typed_data::message_digest, Addr, ChainCode, Hash256,
        HexBinary,
    },
};

/// An inbound message, as given on the command line.
#[derive(Args, Debug, Clone)]
pub struct MessageArgs {
    /// Message nonce: a decimal number or a 0x-prefixed 32-byte word
    #[arg(long, value_parser = parse_word)]
    pub nonce: Hash256,

    /// Source chain code, e.g. `xch`
    #[arg(long, value_parser = parse_chain_code)]
    pub source_chain: ChainCode,

    /// Sender on the source chain, as a 32-byte word
    #[arg(long)]
    pub source: Hash256,

    /// Receiving contract on this chain
    #[arg(long)]
    pub destination: Addr,

    /// Comma-separated payload words, each a decimal number or a 32-byte word
    #[arg(long, value_parser = parse_word, value_delimiter = ',')]
    pub payload: Vec<Hash256>,

    /// Overrides the `chain_id` of the config file
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Overrides the `portal` of the config file
    #[arg(long)]
    pub portal: Option<Addr>,
}

impl MessageArgs {
    pub fn message(&self) -> Message {
        Message {
            nonce: self.nonce,
            source_chain: self.source_chain,
            source: self.source,
            destination: self.destination,
            payload: self.payload.clone(),
        }
    }

    pub fn digest(&self, cfg: &Config) -> Hash256 {
        message_digest(
            self.chain_id.unwrap_or(cfg.chain_id),
            self.portal.unwrap_or(cfg.portal),
            &self.message(),
        )
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Verification {
    pub digest: Hash256,
    /// Recovered signers, in the order the signatures were given.
    pub signers: Vec<Addr>,
    /// Whether the signers are in the strictly ascending order the Portal
    /// requires.
    pub ascending: bool,
}

pub fn digest(cfg: &Config, args: &MessageArgs) -> anyhow::Result<()> {
    print_json_pretty(&args.digest(cfg))
}

pub fn sign(cfg: &Config, keys_dir: &Path, key: &str, args: &MessageArgs) -> anyhow::Result<()> {
    let signature = sign_message(cfg, &Keystore::read(keys_dir, key)?, args)?;

    println!("{signature}");

    Ok(())
}

pub fn verify(cfg: &Config, signatures: &HexBinary, args: &MessageArgs) -> anyhow::Result<()> {
    print_json_pretty(&verify_signatures(cfg, signatures, args)?)
}

fn sign_message(cfg: &Config, keystore: &Keystore, args: &MessageArgs) -> anyhow::Result<HexBinary> {
    let digest = args.digest(cfg);
    let signature = secp256k1_sign_recoverable(&keystore.signing_key()?, digest.inner())?;

    tracing::debug!(
        signer = keystore.address.to_string(),
        digest = digest.to_string(),
        "Signed message"
    );

    Ok(signature.to_vec().into())
}

fn verify_signatures(
    cfg: &Config,
    signatures: &HexBinary,
    args: &MessageArgs,
) -> anyhow::Result<Verification> {
    let digest = args.digest(cfg);

    let signers = decode_signatures(signatures)?
        .into_iter()
        .map(|signature| {
            let recovery_id = signature.recovery_id()?;

            secp256k1_recover_eth_address(digest.inner(), &signature.rs(), recovery_id)
                .map(Addr::from_inner)
                .map_err(Into::into)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let ascending = signers.windows(2).all(|pair| pair[0] < pair[1]);

    Ok(Verification {
        digest,
        signers,
        ascending,
    })
}

/// Parse a 32-byte word from either a `0x`-prefixed hex string or a decimal
/// number.
pub fn parse_word(s: &str) -> anyhow::Result<Hash256> {
    if s.starts_with("0x") {
        return Ok(s.parse()?);
    }

    s.parse::<u128>()
        .map(Hash256::from_u128)
        .map_err(|err| anyhow!("`{s}` is neither a hex word nor a number: {err}"))
}

/// Parse a chain code from its three ASCII characters, e.g. `xch`.
pub fn parse_chain_code(s: &str) -> anyhow::Result<ChainCode> {
    match <[u8; 3]>::try_from(s.as_bytes()) {
        Ok(bytes) if bytes.is_ascii() => Ok(ChainCode::from_inner(bytes)),
        _ => bail!("chain code must be three ASCII characters, got `{s}`"),
    }
}

// ----------------------------------- tests -----------------------------------
