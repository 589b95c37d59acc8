use anyhow::Result;
use clap::Parser;
use weatherfx::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weatherfx::logging::init(cli.log_file.as_deref())?;
    weatherfx::run(cli).await
}
