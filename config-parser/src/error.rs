use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file `{}` not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
