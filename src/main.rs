use std::env;
use std::fs;

use memeforge::{MemeClient, MemeConfig, MemeError, DOWNLOAD_FILENAME};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    memeforge::logger::init_with_config(
        memeforge::logger::LoggerConfig::development()
            .with_level(memeforge::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking caption API environment...");
    match env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            log::info!("✅ Caption credential found in environment");
            log::debug!("Key starts with: {}...", &key[..5.min(key.len())]);
        }
        _ => {
            log::warn!("⚠️  No OPENAI_API_KEY set, captions will use the local generator");
        }
    }

    let config = MemeConfig::from_env();
    log::info!("⚙️  Configuration loaded:");
    log::info!("   Template: {}", config.template);
    log::info!(
        "   Random template: {}",
        if config.random_template { "✅" } else { "❌" }
    );
    log::info!(
        "   Watermark: {}",
        if config.watermark { "✅" } else { "❌" }
    );
    log::info!("   Watermark text: {}", config.watermark_text);

    log::info!("🔄 Creating meme client...");
    let client = match MemeClient::new(config) {
        Ok(client) => {
            log::info!("✅ Meme client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize meme client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("📚 Known meme templates:");
    for template in memeforge::MEME_TEMPLATES {
        log::info!("  {}", template);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let prompt = if args.is_empty() {
        let surprise = memeforge::surprise_prompt();
        log::info!("🎲 No prompt given, surprise pick: '{}'", surprise);
        surprise.to_string()
    } else {
        args.join(" ")
    };

    log::info!("🧪 Generating meme for prompt: '{}'", prompt);
    let mut timer = memeforge::logger::timer("meme generation");

    match client.create_meme(&prompt).await {
        Ok(meme) => {
            timer.stop();
            log::info!("✅ Meme generated!");
            log::info!("📝 Top: {}", meme.caption.top);
            log::info!("📝 Bottom: {}", meme.caption.bottom);
            match &meme.origin {
                memeforge::CaptionOrigin::Remote => {
                    log::info!("🤖 Caption source: remote API");
                }
                memeforge::CaptionOrigin::Fallback(reason) => {
                    log::info!("🎲 Caption source: local fallback ({})", reason);
                }
            }
            log::info!("🔗 Meme URL: {}", meme.url);
            log::info!(
                "🖼️  Image: {} bytes{}",
                meme.image.len(),
                if meme.watermarked {
                    " (watermarked)"
                } else {
                    ""
                }
            );

            match fs::write(DOWNLOAD_FILENAME, &meme.image) {
                Ok(_) => log::info!("💾 Image saved to: {}", DOWNLOAD_FILENAME),
                Err(e) => log::error!("❌ Failed to save image: {}", e),
            }

            log::info!("📣 Share links:");
            for link in &meme.share_links {
                log::info!("   {}: {}", link.platform.label(), link.url);
            }
        }
        Err(MemeError::EmptyPrompt) => {
            log::warn!("💡 Type a prompt first (or run without arguments for a surprise).");
        }
        Err(e) => {
            log::error!("❌ Failed to generate meme: {}", e);
            return Err(e.into());
        }
    }

    log::info!("🎉 Done!");
    Ok(())
}
