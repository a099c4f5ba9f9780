use anyhow::Result;
use clap::Parser;

use folio::{cli::Cli, runtime::Orchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let orchestrator = Orchestrator::new(cli)?;
    if !orchestrator.run().await? {
        std::process::exit(1);
    }

    Ok(())
}
