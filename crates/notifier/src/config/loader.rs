use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::schema::RelayConfig;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        return dir.join("amrelay").join("notifiers.yml");
    }
    PathBuf::from("/etc/amrelay/notifiers.yml")
}

pub fn load_from_file(path: &Path) -> Result<RelayConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<RelayConfig, LoadError> {
    let cfg: RelayConfig = serde_yaml::from_str(yaml)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &RelayConfig) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for (idx, n) in cfg.notifiers.iter().enumerate() {
        if n.name.is_empty() {
            return Err(LoadError::Validation(format!(
                "notifiers[{idx}].name must not be empty"
            )));
        }
        if n.notifier_type.is_empty() {
            return Err(LoadError::Validation(format!(
                "notifiers[{idx}].type must not be empty"
            )));
        }
        if !seen.insert(n.name.as_str()) {
            return Err(LoadError::Validation(format!(
                "duplicate notifier name '{}'",
                n.name
            )));
        }
    }
    if cfg.transport.timeout_seconds == 0 {
        return Err(LoadError::Validation(
            "transport.timeout_seconds must be > 0".into(),
        ));
    }
    Ok(())
}
