use std::env;

#[derive(Debug, Clone)]
pub struct CaptionConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        CaptionConfig {
            api_key: None,
            model: None,
            base_url: None,
        }
    }
}

impl CaptionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let model = env::var("OPENAI_MODEL").ok();
        let base_url = env::var("OPENAI_BASE_URL").ok();

        CaptionConfig {
            api_key,
            model,
            base_url,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct MemeConfig {
    pub caption: CaptionConfig,
    pub template: String,
    pub random_template: bool,
    pub watermark: bool,
    pub watermark_text: String,
}

impl Default for MemeConfig {
    fn default() -> Self {
        MemeConfig {
            caption: CaptionConfig::default(),
            template: crate::templates::DEFAULT_TEMPLATE.to_string(),
            random_template: false,
            watermark: true,
            watermark_text: crate::watermark::DEFAULT_WATERMARK_TEXT.to_string(),
        }
    }
}

impl MemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let template = env::var("MEME_TEMPLATE")
            .unwrap_or_else(|_| crate::templates::DEFAULT_TEMPLATE.to_string());
        let random_template = env::var("MEME_RANDOM_TEMPLATE")
            .ok()
            .map_or(false, |val| val == "true");
        let watermark = env::var("MEME_WATERMARK")
            .ok()
            .map_or(true, |val| val != "false");
        let watermark_text = env::var("MEME_WATERMARK_TEXT")
            .unwrap_or_else(|_| crate::watermark::DEFAULT_WATERMARK_TEXT.to_string());

        MemeConfig {
            caption: CaptionConfig::from_env(),
            template,
            random_template,
            watermark,
            watermark_text,
        }
    }

    pub fn with_caption(mut self, config: CaptionConfig) -> Self {
        self.caption = config;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.caption.api_key = Some(api_key.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_random_template(mut self, enabled: bool) -> Self {
        self.random_template = enabled;
        self
    }

    pub fn with_watermark(mut self, enabled: bool) -> Self {
        self.watermark = enabled;
        self
    }

    pub fn with_watermark_text(mut self, text: impl Into<String>) -> Self {
        self.watermark_text = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_watermark() {
        let config = MemeConfig::default();
        assert!(config.watermark);
        assert!(!config.random_template);
        assert_eq!(config.template, crate::templates::DEFAULT_TEMPLATE);
        assert!(config.caption.api_key.is_none());
    }

    #[test]
    fn builders_chain() {
        let config = MemeConfig::new()
            .with_api_key("sk-test")
            .with_template("doge")
            .with_random_template(true)
            .with_watermark(false)
            .with_watermark_text("my-brand");

        assert_eq!(config.caption.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.template, "doge");
        assert!(config.random_template);
        assert!(!config.watermark);
        assert_eq!(config.watermark_text, "my-brand");
    }

    #[test]
    fn caption_config_builders_chain() {
        let config = CaptionConfig::new()
            .with_api_key("sk-test")
            .with_model("gpt-4o-mini")
            .with_base_url("http://localhost:9000/v1");

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000/v1"));
    }
}
