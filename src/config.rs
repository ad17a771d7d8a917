use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";
pub const DEFAULT_PROVIDER_REGION: &str = "US";
pub const DEFAULT_FALLBACK_LINK: &str = "https://cutt.ly/5QGm4jF";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the upstream movie catalog. Built once at startup and
/// handed to `CatalogClient`; nothing reads the environment per request.
#[derive(Clone)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    /// ISO-3166 region whose watch-provider link is used.
    pub provider_region: String,
    /// Link used when a movie has no provider entry for `provider_region`.
    pub fallback_link: String,
    pub language: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("provider_region", &self.provider_region)
            .field("fallback_link", &self.fallback_link)
            .field("language", &self.language)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl CatalogConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            provider_region: DEFAULT_PROVIDER_REGION.to_string(),
            fallback_link: DEFAULT_FALLBACK_LINK.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads the process environment. Variables that are set but empty count
    /// as unset. A missing API key is not an error: requests go out without a
    /// valid key and fail upstream.
    pub fn from_env() -> Self {
        let api_key = non_empty_var("api_key")
            .or_else(|| non_empty_var("TMDB_API_KEY"))
            .unwrap_or_else(|| {
                warn!("No catalog API key in environment (api_key / TMDB_API_KEY)");
                String::new()
            });

        let mut config = Self::new(api_key);
        if let Some(url) = non_empty_var("TMDB_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(url) = non_empty_var("TMDB_IMAGE_BASE_URL") {
            config = config.with_image_base_url(url);
        }
        if let Some(region) = non_empty_var("WATCH_PROVIDER_REGION") {
            config = config.with_provider_region(region);
        }
        if let Some(link) = non_empty_var("WATCH_PROVIDER_FALLBACK_URL") {
            config = config.with_fallback_link(link);
        }
        if let Some(language) = non_empty_var("TMDB_LANGUAGE") {
            config.language = language;
        }
        if let Some(raw) = non_empty_var("CATALOG_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config = config.with_timeout(Duration::from_secs(secs)),
                Err(e) => warn!("Ignoring CATALOG_TIMEOUT_SECS={:?}: {}", raw, e),
            }
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_provider_region(mut self, region: impl Into<String>) -> Self {
        self.provider_region = region.into();
        self
    }

    pub fn with_fallback_link(mut self, link: impl Into<String>) -> Self {
        self.fallback_link = link.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
