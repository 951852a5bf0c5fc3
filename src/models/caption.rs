use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionRequest {
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub model_id: Option<String>,
}

impl CaptionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        CaptionRequest {
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
            model_id: None,
        }
    }
}

/// The two overlay lines rendered onto a meme image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionPair {
    pub top: String,
    pub bottom: String,
}

impl CaptionPair {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        CaptionPair {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    /// Single-line form used for share text, e.g. `"top / bottom"`.
    pub fn share_text(&self) -> String {
        format!("{} / {}", self.top, self.bottom)
    }
}

/// Where a caption came from. The remote path downgrades to the local
/// generator on any failure, and the reason travels with the result instead
/// of being swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionOrigin {
    Remote,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    RequestFailed(String),
    ApiError { status: u16, message: String },
    MalformedResponse(String),
    EmptyCaption,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::MissingCredential => write!(f, "no API credential supplied"),
            FallbackReason::RequestFailed(msg) => write!(f, "caption request failed: {}", msg),
            FallbackReason::ApiError { status, message } => {
                write!(f, "caption API returned {}: {}", status, message)
            }
            FallbackReason::MalformedResponse(msg) => {
                write!(f, "malformed caption response: {}", msg)
            }
            FallbackReason::EmptyCaption => write!(f, "caption response parsed to empty lines"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CaptionResolution {
    pub pair: CaptionPair,
    pub origin: CaptionOrigin,
}

impl CaptionResolution {
    pub fn is_remote(&self) -> bool {
        self.origin == CaptionOrigin::Remote
    }
}

// Chat-completion wire format shared by OpenAI-compatible endpoints.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}
