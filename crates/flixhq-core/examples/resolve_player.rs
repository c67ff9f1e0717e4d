//! Walks the whole resolution chain for one title and prints each hop
//!
//! Run with: cargo run --example resolve_player -p flixhq-core -- "movie/watch-inception-19777"

use flixhq_core::{ClientConfig, FlixhqScraper};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let media_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "movie/watch-inception-19777".to_string());

    let config = ClientConfig::default();
    let referer = config.referer.clone();
    let scraper = FlixhqScraper::with_config(config)?;

    println!("Fetching detail page for '{}'...\n", media_id);
    let info = scraper.get_info(&media_id).await?;
    println!("Title:   {}", info.title);
    println!("Data ID: {}", info.data_id);
    println!("Series:  {}\n", info.is_tv);

    let sources = scraper.get_sources(&info.data_id, info.is_tv).await?;

    match sources.link() {
        Some(link) => {
            println!("✓ Player URL: {}", link);
            println!("  Embed it in an iframe with Referer: {}", referer);
        }
        None => {
            println!("✗ No player link in sources response:");
            println!("{}", serde_json::to_string_pretty(&sources)?);
        }
    }

    Ok(())
}
