use anyhow::Result;
use faultline::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
