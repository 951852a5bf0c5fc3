//! Share-intent URL construction for the supported social platforms.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{ShareLink, SharePlatform};

// Everything outside [A-Za-z0-9_.~-] is escaped, with '/' left bare the way
// share intents conventionally receive text.
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE).to_string()
}

/// Builds one share link per supported platform, in the fixed order
/// Twitter, WhatsApp, Reddit. Pure; never fails.
pub fn build_share_links(meme_url: &str, caption_text: &str) -> Vec<ShareLink> {
    let text = encode(caption_text);
    let url = encode(meme_url);
    let whatsapp_text = encode(&format!("{} {}", caption_text, meme_url));

    SharePlatform::ALL
        .iter()
        .map(|platform| {
            let link = match platform {
                SharePlatform::Twitter => {
                    format!("https://twitter.com/intent/tweet?text={}&url={}", text, url)
                }
                SharePlatform::WhatsApp => {
                    format!("https://api.whatsapp.com/send?text={}", whatsapp_text)
                }
                SharePlatform::Reddit => {
                    format!("https://www.reddit.com/submit?title={}&url={}", text, url)
                }
            };
            ShareLink {
                platform: *platform,
                url: link,
            }
        })
        .collect()
}
