use anyhow::{Context, Result};
use amrelay_notifier::alert::EvaluationSnapshot;
use amrelay_notifier::config::{default_config_path, load_from_file, RelayConfig};
use std::path::PathBuf;

pub fn resolve_config_path(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

pub fn load_config(config_path: Option<&str>) -> Result<RelayConfig> {
    let path = resolve_config_path(config_path);
    load_from_file(&path).with_context(|| format!("loading config from {}", path.display()))
}

pub fn load_snapshot(path: &str) -> Result<EvaluationSnapshot> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading snapshot {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing snapshot {path}"))
}
