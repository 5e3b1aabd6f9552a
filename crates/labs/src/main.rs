use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod gate;
mod prelude;
mod process;
mod random;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "String-processing service with a hard cap on in-flight requests"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "LABS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Start the HTTP service
    Serve(crate::server::ServeOptions),

    /// Process a single string and print the result
    Process(crate::process::ProcessOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Process(options) => crate::process::run(options, app.global).await,
    }
}
