const DEFAULT_DEVELOPMENT_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_PRODUCTION_URL: &str = "https://api.skydesk.example/api/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub retry: RetryConfig,
    pub default_page_size: u32,
}

/// Retry settings for idempotent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, the first one included. `1` disables retrying.
    pub attempts: u32,
    pub backoff_ms: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_ms: 300,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: DEFAULT_DEVELOPMENT_URL.to_string(),
            api_base_url_production: DEFAULT_PRODUCTION_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            retry: RetryConfig::default(),
            default_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_DEVELOPMENT_URL)
                .to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or(DEFAULT_PRODUCTION_URL)
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            retry: RetryConfig {
                attempts: parse_or(option_env!("RETRY_ATTEMPTS"), defaults.retry.attempts).max(1),
                backoff_ms: parse_or(option_env!("RETRY_BACKOFF_MS"), defaults.retry.backoff_ms),
            },
            default_page_size: parse_or(option_env!("DEFAULT_PAGE_SIZE"), defaults.default_page_size)
                .max(1),
        }
    }

    /// API base URL for the current environment, without trailing slash
    pub fn api_base_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(fallback)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
