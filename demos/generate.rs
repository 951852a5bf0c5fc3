use memeforge::{MemeClient, MemeConfig, DOWNLOAD_FILENAME};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    memeforge::logger::init()?;

    let config = MemeConfig::from_env()
        .with_template("futurama-fry")
        .with_watermark_text("memeforge.app");

    let client = MemeClient::new(config)?;
    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "When the tests pass on the first try".to_string());

    let meme = client.create_meme(&prompt).await?;
    println!("top:    {}", meme.caption.top);
    println!("bottom: {}", meme.caption.bottom);
    println!("url:    {}", meme.url);
    for link in &meme.share_links {
        println!("{}: {}", link.platform.label(), link.url);
    }

    fs::write(DOWNLOAD_FILENAME, &meme.image)?;
    println!("saved {}", DOWNLOAD_FILENAME);

    Ok(())
}
