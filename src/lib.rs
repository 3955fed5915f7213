use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use crate::{
    config::Config,
    services::{SentimentClassifier, VaderClassifier, VideoPlatform, VideoService, YouTubeClient},
    state::AppState,
};

/// 根据配置构建共享状态：YouTube 客户端和情感分类器各构建一次
pub fn build_state(config: Config) -> error::Result<Arc<AppState>> {
    let platform: Arc<dyn VideoPlatform> = Arc::new(YouTubeClient::new(&config)?);

    let classifier: Arc<dyn SentimentClassifier> = match &config.sentiment_lexicon_path {
        Some(path) => Arc::new(VaderClassifier::from_lexicon_file(path)?),
        None => Arc::new(VaderClassifier::new()),
    };

    let video_service = VideoService::new(platform, classifier, &config);
    Ok(Arc::new(AppState::new(config, video_service)))
}

pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .nest("/api/video", routes::videos::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.trim() == "*" {
        return cors.allow_origin(Any);
    }

    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<_>>();

    cors.allow_origin(origins)
}

async fn health_check() -> &'static str {
    "video-sentiment is running!"
}
