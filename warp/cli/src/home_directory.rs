use {anyhow::anyhow, std::path::PathBuf};

/// Where the CLI keeps its config file and signer keys.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Use the given directory, or `~/.warp` if none is given.
    pub fn new_or_default(home: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(home) = home {
            return Ok(Self::new(home));
        }

        home::home_dir()
            .map(|dir| Self::new(dir.join(".warp")))
            .ok_or_else(|| anyhow!("failed to find the user's home directory"))
    }

    pub fn keys_dir(&self) -> PathBuf {
        self.home.join("keys")
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("app.toml")
    }
}
