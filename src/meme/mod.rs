pub mod caption_client;
pub mod render_client;

pub use caption_client::CaptionClient;
pub use render_client::RenderClient;

use crate::config::MemeConfig;
use crate::error::{MemeError, Result};
use crate::models::{CaptionRequest, Meme};
use crate::{share, templates, watermark};

/// Root client: owns the caption and render clients and runs the full
/// prompt-to-meme flow.
#[derive(Clone)]
pub struct MemeClient {
    caption_client: CaptionClient,
    render_client: RenderClient,
    config: MemeConfig,
}

impl MemeClient {
    pub fn new(config: MemeConfig) -> Result<Self> {
        let caption_client = CaptionClient::new(config.caption.clone())?;
        let render_client = RenderClient::new()?;

        Ok(Self {
            caption_client,
            render_client,
            config,
        })
    }

    /// Replaces the caption client, e.g. one pointed at a compatible
    /// endpoint.
    pub fn with_caption_client(mut self, client: CaptionClient) -> Self {
        self.caption_client = client;
        self
    }

    /// Replaces the render client, e.g. one pointed at a different endpoint.
    pub fn with_render_client(mut self, client: RenderClient) -> Self {
        self.render_client = client;
        self
    }

    pub fn caption(&self) -> &CaptionClient {
        &self.caption_client
    }

    pub fn render(&self) -> &RenderClient {
        &self.render_client
    }

    pub fn config(&self) -> &MemeConfig {
        &self.config
    }

    /// Runs the full flow: caption the prompt, fetch the rendered image,
    /// optionally watermark it, and build share links.
    ///
    /// An empty prompt is rejected up front; a caption-service failure is
    /// absorbed into a fallback caption; an image-fetch failure propagates.
    pub async fn create_meme(&self, prompt: &str) -> Result<Meme> {
        if prompt.trim().is_empty() {
            return Err(MemeError::EmptyPrompt);
        }

        let template = if self.config.random_template {
            templates::random_template().to_string()
        } else {
            self.config.template.clone()
        };
        log::info!("Generating meme with template '{}'", template);

        let resolution = self
            .caption_client
            .generate(&CaptionRequest::new(prompt))
            .await;

        let url = self
            .render_client
            .build_url(&template, &resolution.pair.top, &resolution.pair.bottom);
        let image = self.render_client.fetch(&url).await?;

        let (image, watermarked) = if self.config.watermark {
            (
                watermark::apply(&image, &self.config.watermark_text)?,
                true,
            )
        } else {
            (image, false)
        };

        let share_links = share::build_share_links(&url, &resolution.pair.share_text());

        Ok(Meme {
            template,
            caption: resolution.pair,
            origin: resolution.origin,
            url,
            image,
            watermarked,
            share_links,
        })
    }
}
