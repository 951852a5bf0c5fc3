use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharePlatform {
    Twitter,
    WhatsApp,
    Reddit,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [
        SharePlatform::Twitter,
        SharePlatform::WhatsApp,
        SharePlatform::Reddit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::WhatsApp => "WhatsApp",
            SharePlatform::Reddit => "Reddit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub platform: SharePlatform,
    pub url: String,
}
