use clap::Parser;
use log::info;
use lyricset::clients::errors::Result;

use crate::scraper;

#[derive(Parser)]
#[command(name = "lyricset")]
#[command(version, about = "Scrape Genius lyrics into instruction/output JSONL rows", long_about = None)]
struct Cli {}

pub async fn run() -> Result<()> {
    // No flags yet; parsing still provides --help and --version
    let _cli = Cli::parse();

    info!("Building config ...");
    let config = scraper::ConfigBuilder::new().build()?;
    let scraper = scraper::Scraper::new(config);
    scraper.run(scraper::ARTISTS).await
}
