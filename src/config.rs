use std::env;

/// YouTube 单页评论数上限
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub server_host: String,
    pub server_port: u16,
    pub environment: String,
    pub log_level: String,
    pub log_format: String,

    // YouTube Data API
    pub youtube_api_key: String,
    pub youtube_api_base_url: String,
    pub upstream_timeout_secs: u64,

    // Comment fetching
    pub comment_page_size: u32,
    pub max_comments: usize,

    // Sentiment
    pub sentiment_lexicon_path: Option<String>,

    // CORS configuration
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let youtube_api_key = env::var("YOUTUBE_API_KEY")
            .map_err(|_| anyhow::anyhow!("YOUTUBE_API_KEY must be set"))?;

        let comment_page_size: u32 = env::var("COMMENT_PAGE_SIZE")
            .unwrap_or_else(|_| MAX_PAGE_SIZE.to_string())
            .parse()?;

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "video_sentiment=debug,tower_http=debug".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),

            youtube_api_key,
            youtube_api_base_url: env::var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,

            comment_page_size: comment_page_size.clamp(1, MAX_PAGE_SIZE),
            max_comments: env::var("MAX_COMMENTS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()?,

            sentiment_lexicon_path: env::var("SENTIMENT_LEXICON_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    /// 测试和本地调试使用的默认配置
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            environment: "development".to_string(),
            log_level: "video_sentiment=debug".to_string(),
            log_format: "pretty".to_string(),
            youtube_api_key: api_key.into(),
            youtube_api_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            upstream_timeout_secs: 30,
            comment_page_size: MAX_PAGE_SIZE,
            max_comments: 500,
            sentiment_lexicon_path: None,
            cors_allowed_origins: "*".to_string(),
        }
    }

    pub fn use_json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
