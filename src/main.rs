use anyhow::Result;
use gemini_hub::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
