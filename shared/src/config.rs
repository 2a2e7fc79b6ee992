//! Client configuration.

/// Service address used when the build does not provide one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// How article bodies are turned into markup for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyTrust {
    /// The content service is trusted: bodies are rendered verbatim.
    #[default]
    Trusted,
    /// Bodies pass through an HTML sanitizer before rendering.
    Sanitized,
}

/// Explicit configuration handed to [`crate::ApiClient`] at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the article API, e.g. `http://localhost:8000/api`.
    pub api_base: String,
    /// Publish filter applied when a list request does not specify one.
    pub default_published: bool,
    /// Page size requested from the service; `None` leaves it to the server.
    pub page_size: Option<u32>,
    /// Trust model for article bodies.
    pub body_trust: BodyTrust,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Config pointing at `api_base` with default filter and trust settings.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            default_published: true,
            page_size: None,
            body_trust: BodyTrust::Trusted,
        }
    }

    /// Override the page size sent with list requests.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Override the default publish filter.
    pub fn with_default_published(mut self, published: bool) -> Self {
        self.default_published = published;
        self
    }

    /// Override the body trust model.
    pub fn with_body_trust(mut self, trust: BodyTrust) -> Self {
        self.body_trust = trust;
        self
    }

    /// Origin that serves media files: the API base without its `/api` suffix.
    pub fn backend_base(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        base.strip_suffix("/api").unwrap_or(base).to_string()
    }

    /// Absolute URL for an API path such as `/articles/`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiConfig, BodyTrust};

    #[test]
    fn backend_base_drops_api_segment() {
        let config = ApiConfig::new("https://cms.example.com/api/");
        assert_eq!(config.api_base, "https://cms.example.com/api");
        assert_eq!(config.backend_base(), "https://cms.example.com");
    }

    #[test]
    fn backend_base_keeps_base_without_api_segment() {
        let config = ApiConfig::new("https://cms.example.com/v2");
        assert_eq!(config.backend_base(), "https://cms.example.com/v2");
    }

    #[test]
    fn defaults_match_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url("/health/"), "http://localhost:8000/api/health/");
        assert!(config.default_published);
        assert_eq!(config.page_size, None);
        assert_eq!(config.body_trust, BodyTrust::Trusted);
    }
}
