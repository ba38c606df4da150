use anyhow::{bail, Result};
use amrelay_notifier::config::build_notifiers;
use amrelay_notifier::notifier::{HttpWebhookSender, NotifierRegistry};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::helpers;
use crate::output::{print_error, print_json, print_success, theme, OutputMode};

#[derive(clap::Args)]
pub struct SendArgs {
    #[arg(long, help = "Evaluation snapshot JSON file")]
    pub(crate) snapshot: String,

    #[arg(long, help = "Only send through the notifier with this name")]
    pub(crate) notifier: Option<String>,
}

#[derive(Serialize)]
struct SendOutcome {
    notifier: String,
    success: bool,
    skipped: bool,
    error: Option<String>,
}

pub async fn execute(args: SendArgs, mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let cfg = helpers::load_config(config_path.as_deref())?;
    let snapshot = helpers::load_snapshot(&args.snapshot)?;

    let sender = Arc::new(HttpWebhookSender::with_timeout(Duration::from_secs(
        cfg.transport.timeout_seconds,
    ))?);
    let registry = NotifierRegistry::with_builtin();
    let mut notifiers = build_notifiers(&cfg, &registry, sender)?;

    if let Some(name) = &args.notifier {
        notifiers.retain(|n| n.name() == name.as_str());
        if notifiers.is_empty() {
            bail!("no notifier named '{name}' in config");
        }
    }
    if notifiers.is_empty() {
        bail!("no notifiers configured");
    }

    let mut outcomes = Vec::with_capacity(notifiers.len());
    for n in &notifiers {
        if !n.should_notify(&snapshot) {
            outcomes.push(SendOutcome {
                notifier: n.name().to_string(),
                success: true,
                skipped: true,
                error: None,
            });
            continue;
        }
        let result = n.notify(&snapshot).await;
        outcomes.push(SendOutcome {
            notifier: n.name().to_string(),
            success: result.is_ok(),
            skipped: false,
            error: result.err().map(|e| e.to_string()),
        });
    }

    match mode {
        OutputMode::Json => print_json(&outcomes)?,
        OutputMode::Human => {
            for o in &outcomes {
                match (&o.error, o.skipped) {
                    (Some(e), _) => print_error(&format!("{}: {e}", o.notifier)),
                    (None, true) => theme::print_dim(&format!("{}: skipped", o.notifier)),
                    (None, false) => print_success(&format!("{}: delivered", o.notifier)),
                }
            }
        }
    }

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        bail!("{failed} of {} notifier(s) failed", outcomes.len());
    }
    Ok(())
}
