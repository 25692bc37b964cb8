use crate::prelude::*;
use clap::Parser;

mod campaign;
mod config;
mod generate;
mod prelude;
mod provider;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate marketing ad campaigns (image, caption and hashtags) with an AI gateway"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    #[clap(flatten)]
    provider: config::ProviderOptions,

    /// Whether to display additional information.
    #[clap(long, env = "ADCRAFT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the campaign generation endpoint over HTTP
    Serve(crate::server::App),

    /// Generate a single campaign and print it
    Generate(crate::generate::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Generate(sub_app) => crate::generate::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
