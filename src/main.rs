use anyhow::Result;
use clap::Parser;

use edge_batch::{
    cli::{execute_run, Cli, RunConfig},
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    tracing::debug!("edge_batch v{}", env!("CARGO_PKG_VERSION"));

    // アイテム単位の失敗は終了コードに反映しない
    execute_run(RunConfig::from(&cli)).await?;
    Ok(())
}
