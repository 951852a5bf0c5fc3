use crate::models::caption::{CaptionOrigin, CaptionPair};
use crate::models::share::ShareLink;

/// Fixed filename under which generated memes are offered for download.
pub const DOWNLOAD_FILENAME: &str = "meme.png";

/// A fully generated meme: caption, rendered bytes, and share links.
#[derive(Debug, Clone)]
pub struct Meme {
    pub template: String,
    pub caption: CaptionPair,
    pub origin: CaptionOrigin,
    pub url: String,
    pub image: Vec<u8>,
    pub watermarked: bool,
    pub share_links: Vec<ShareLink>,
}
