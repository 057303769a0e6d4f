use {
    crate::Error,
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Read a TOML config file, then let environment variables override any of
/// its fields. Nested fields are separated by a double underscore, e.g.
/// `LOG_LEVEL` or `PORTAL__ADDRESS`.
pub fn parse_config<P, D>(path: P) -> Result<D, Error>
where
    P: AsRef<Path>,
    D: DeserializeOwned,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let cfg = Config::builder()
        .add_source(File::from(path))
        .add_source(Environment::default().separator("__"))
        .build()?;

    Ok(cfg.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------
