//! bbs-cli - serve the bike share dashboard, build its SQLite warehouse and
//! render its views from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(name = "bbs-cli", version, about = "Bike share analytics dashboard")]
struct Cli {
    #[command(subcommand)]
    command: bbs_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bbs_cmd::run(cli.command).await
}
