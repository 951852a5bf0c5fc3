pub mod caption;
pub mod config;
pub mod error;
pub mod logger;
pub mod meme;
pub mod models;
pub mod share;
pub mod templates;
pub mod watermark;

pub use caption::{fallback_caption, parse_caption, surprise_prompt, SAMPLE_PROMPTS};
pub use config::{CaptionConfig, MemeConfig};
pub use error::{MemeError, Result};
pub use meme::{CaptionClient, MemeClient, RenderClient};
pub use models::{
    CaptionOrigin, CaptionPair, CaptionRequest, CaptionResolution, FallbackReason, Meme,
    ShareLink, SharePlatform, DOWNLOAD_FILENAME,
};
pub use share::build_share_links;
pub use templates::{random_template, MEME_TEMPLATES};
