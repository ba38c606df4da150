use anyhow::Result;
use amrelay_notifier::alertmanager::{compile, to_json, CompileMode};

use super::helpers;
use crate::output::{print_json, OutputMode};

#[derive(clap::Args)]
pub struct RenderArgs {
    #[arg(long, help = "Evaluation snapshot JSON file")]
    pub(crate) snapshot: String,

    #[arg(long, default_value = "single", help = "Alert mode: single or per_match")]
    pub(crate) mode: CompileMode,
}

pub fn execute(args: RenderArgs, mode: OutputMode) -> Result<()> {
    let snapshot = helpers::load_snapshot(&args.snapshot)?;
    let alerts = compile(&snapshot, args.mode);

    match mode {
        OutputMode::Json => println!("{}", to_json(&alerts)?),
        OutputMode::Human => print_json(&alerts)?,
    }
    Ok(())
}
