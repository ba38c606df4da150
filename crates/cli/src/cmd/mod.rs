mod config;
pub(crate) mod helpers;
mod notifiers;
mod render;
mod send;
mod version;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Render(render::RenderArgs),
    Send(send::SendArgs),
    #[command(subcommand)]
    Notifiers(notifiers::NotifiersCmd),
    #[command(subcommand)]
    Config(config::ConfigCmd),
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match opts.cmd {
        Commands::Render(args) => render::execute(args, mode),
        Commands::Send(args) => send::execute(args, mode, opts.config).await,
        Commands::Notifiers(cmd) => notifiers::execute(cmd, mode),
        Commands::Config(cmd) => config::execute(cmd, mode, opts.config),
        Commands::Version => {
            version::execute(mode);
            Ok(())
        }
    }
}
