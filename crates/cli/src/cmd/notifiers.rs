use anyhow::Result;
use amrelay_notifier::notifier::NotifierRegistry;
use clap::Subcommand;
use serde::Serialize;

use crate::output::{build_table, print_json, OutputMode};

#[derive(Subcommand)]
pub enum NotifiersCmd {
    List,
}

#[derive(Serialize)]
struct PluginInfo<'a> {
    r#type: &'a str,
    name: &'a str,
    description: &'a str,
}

pub fn execute(cmd: NotifiersCmd, mode: OutputMode) -> Result<()> {
    match cmd {
        NotifiersCmd::List => list(mode),
    }
}

fn list(mode: OutputMode) -> Result<()> {
    let registry = NotifierRegistry::with_builtin();
    let plugins: Vec<PluginInfo> = registry
        .plugins()
        .into_iter()
        .map(|p| PluginInfo {
            r#type: p.type_name,
            name: p.name,
            description: p.description,
        })
        .collect();

    match mode {
        OutputMode::Json => print_json(&plugins)?,
        OutputMode::Human => {
            let mut table = build_table(&["Type", "Name", "Description"]);
            for p in &plugins {
                table.add_row(vec![p.r#type, p.name, p.description]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
