use {
    crate::prompt::print_json_pretty,
    anyhow::{anyhow, ensure},
    clap::Parser,
    k256::ecdsa::SigningKey,
    rand::rngs::OsRng,
    serde::{Deserialize, Serialize},
    std::{
        ffi::OsStr,
        fs,
        path::{Path, PathBuf},
    },
    warp_crypto::eth_address,
    warp_types::{Addr, Hash256},
};

#[derive(Parser)]
pub enum KeysCmd {
    /// Generate a new secp256k1 signer key and save it to a file
    Generate {
        /// A human-readable name for the key
        name: String,
    },
    /// Display the address of a key by name
    Show {
        /// Name of the key to display
        name: String,
    },
    /// List all keys
    #[command(alias = "ls")]
    List,
}

impl KeysCmd {
    pub fn run(self, dir: PathBuf) -> anyhow::Result<()> {
        match self {
            KeysCmd::Generate { name } => {
                let keystore = generate(&dir, &name)?;
                print_json_pretty(&KeyInfo::from(&keystore))
            },
            KeysCmd::Show { name } => {
                let keystore = Keystore::read(&dir, &name)?;
                print_json_pretty(&KeyInfo::from(&keystore))
            },
            KeysCmd::List => print_json_pretty(&list(&dir)?),
        }
    }
}

/// A signer key, stored unencrypted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Keystore {
    pub address: Addr,
    pub secret_key: Hash256,
}

impl Keystore {
    pub fn new(sk: &SigningKey) -> Self {
        Self {
            address: Addr::from_inner(eth_address(sk.verifying_key())),
            secret_key: Hash256::from_inner(sk.to_bytes().into()),
        }
    }

    pub fn read(dir: &Path, name: &str) -> anyhow::Result<Self> {
        let filename = key_file(dir, name);
        ensure!(filename.exists(), "file {filename:?} not found");

        let keystore_str = fs::read_to_string(filename)?;

        Ok(serde_json::from_str(&keystore_str)?)
    }

    pub fn signing_key(&self) -> anyhow::Result<SigningKey> {
        let sk = SigningKey::from_slice(self.secret_key.inner())?;
        let address = Addr::from_inner(eth_address(sk.verifying_key()));

        ensure!(
            address == self.address,
            "keystore address {} doesn't match its secret key, which is of {address}",
            self.address
        );

        Ok(sk)
    }
}

/// What's printed about a key: everything but the secret.
#[derive(Serialize, Debug)]
pub struct KeyInfo {
    pub address: Addr,
}

impl From<&Keystore> for KeyInfo {
    fn from(keystore: &Keystore) -> Self {
        Self {
            address: keystore.address,
        }
    }
}

fn key_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.json"))
}

fn generate(dir: &Path, name: &str) -> anyhow::Result<Keystore> {
    let filename = key_file(dir, name);
    ensure!(!filename.exists(), "file {filename:?} already exists");

    fs::create_dir_all(dir)?;

    let keystore = Keystore::new(&SigningKey::random(&mut OsRng));

    fs::write(&filename, serde_json::to_string_pretty(&keystore)?)?;

    tracing::info!(
        address = keystore.address.to_string(),
        file = ?filename,
        "Generated signer key"
    );

    Ok(keystore)
}

fn list(dir: &Path) -> anyhow::Result<Vec<KeyInfo>> {
    if !dir.exists() {
        return Ok(vec![]);
    }

    let mut keys = vec![];
    for entry in dir.read_dir()? {
        let path = entry?.path();

        if path.extension() != Some(OsStr::new("json")) {
            continue;
        }

        let keystore_str = fs::read_to_string(&path)?;
        let keystore: Keystore = serde_json::from_str(&keystore_str)
            .map_err(|err| anyhow!("failed to read keystore {path:?}: {err}"))?;

        keys.push(KeyInfo::from(&keystore));
    }

    keys.sort_by_key(|key| key.address);

    Ok(keys)
}

// ----------------------------------- tests -----------------------------------
