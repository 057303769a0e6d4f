use {
    serde::{Deserialize, Serialize},
    std::path::PathBuf,
    warp_types::Addr,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    /// Chain ID of the EVM chain the Portal is deployed on.
    pub chain_id: u64,
    /// The Portal, which is the verifying contract of the signed digests.
    pub portal: Addr,
    /// Overrides `<home>/keys`.
    pub keys_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            chain_id: 1,
            portal: Addr::ZERO,
            keys_dir: None,
        }
    }
}
