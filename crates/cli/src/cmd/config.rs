use anyhow::Result;
use clap::Subcommand;

use super::helpers;
use crate::output::{print_json, print_success, theme, OutputMode};

#[derive(Subcommand)]
pub enum ConfigCmd {
    Show,
    Validate,
    Path,
}

pub fn execute(cmd: ConfigCmd, mode: OutputMode, config_path: Option<String>) -> Result<()> {
    match cmd {
        ConfigCmd::Show => show(mode, config_path),
        ConfigCmd::Validate => validate(mode, config_path),
        ConfigCmd::Path => path(mode, config_path),
    }
}

fn show(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let cfg = helpers::load_config(config_path.as_deref())?;

    match mode {
        OutputMode::Json => print_json(&cfg)?,
        OutputMode::Human => {
            theme::print_header("Notifier Configuration");

            theme::print_section("Transport");
            theme::print_kv("Timeout", &format!("{}s", cfg.transport.timeout_seconds));

            for n in &cfg.notifiers {
                theme::print_section(&n.name);
                theme::print_kv("Type", &n.notifier_type);
                theme::print_kv("URL", n.setting_str("url").unwrap_or("<not set>"));
                theme::print_kv("Mode", n.setting_str("mode").unwrap_or("single"));
                theme::print_kv_colored("Default", &n.is_default.to_string(), n.is_default);
            }
            if cfg.notifiers.is_empty() {
                theme::print_dim("no notifiers configured");
            }
            println!();
        }
    }
    Ok(())
}

fn validate(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let cfg = helpers::load_config(config_path.as_deref())?;
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "valid": true,
            "notifiers": cfg.notifiers.len(),
        }))?,
        OutputMode::Human => print_success(&format!(
            "Configuration valid ({} notifier(s))",
            cfg.notifiers.len()
        )),
    }
    Ok(())
}

fn path(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let p = helpers::resolve_config_path(config_path.as_deref());
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({ "path": p.display().to_string() }))?,
        OutputMode::Human => println!("{}", p.display()),
    }
    Ok(())
}
