use clap::Parser;
use teamname_registry::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run().await,
        Command::List => cli::names::list().await,
        Command::Canonicalize(args) => cli::names::canonicalize(args),
    }
}
