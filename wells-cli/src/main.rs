//! Wells CLI - check the dashboard API and preview its charts from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wells-cli",
    version,
    about = "Well drilling efficiency dashboard toolkit"
)]
struct Cli {
    #[command(flatten)]
    target: wells_cmd::Target,

    #[command(subcommand)]
    command: wells_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wells_cmd::run(cli.target, cli.command).await
}
