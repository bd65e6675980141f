mod cli;
mod scraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up GENIUS_TOKEN (and RUST_LOG) from .env when present; a missing
    // file is fine
    dotenvy::dotenv().ok();
    env_logger::init();

    cli::run().await?;

    Ok(())
}
