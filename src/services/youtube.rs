use crate::{
    config::Config,
    error::{AppError, Result},
    models::youtube::{ApiErrorResponse, CommentThreadListResponse, VideoListResponse, VideoResource},
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

const VIDEO_CONTEXT: &str = "error fetching video data";
const COMMENTS_CONTEXT: &str = "error fetching comments";

/// 视频平台的只读接口
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// 按 ID 获取视频 (snippet + statistics)，不存在时返回 None
    async fn get_video(&self, video_id: &str) -> Result<Option<VideoResource>>;

    /// 获取一页顶层评论
    async fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<CommentThreadListResponse>;
}

#[derive(Clone)]
pub struct YouTubeClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.youtube_api_base_url.trim_end_matches('/').to_string(),
            api_key: config.youtube_api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                // 请求 URL 里带着 API key，不能出现在日志和响应中
                let e = e.without_url();
                error!("YouTube API request failed: {}", e);
                AppError::upstream(context, e)
            })?;

        if !response.status().is_success() {
            return Err(Self::api_error(response, context).await);
        }

        response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            error!("Failed to parse YouTube API response: {}", e);
            AppError::upstream(context, format!("invalid response body: {}", e))
        })
    }

    /// 从 Google 错误信封中取出错误信息
    async fn api_error(response: Response, context: &str) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("YouTube API returned error status: {}", status);

        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .map(|e| e.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or(body);

        AppError::upstream(context, format!("YouTube API returned {}: {}", status, message))
    }
}

#[async_trait]
impl VideoPlatform for YouTubeClient {
    async fn get_video(&self, video_id: &str) -> Result<Option<VideoResource>> {
        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[("part", "snippet,statistics"), ("id", video_id)],
                VIDEO_CONTEXT,
            )
            .await?;

        Ok(response.items.into_iter().next())
    }

    async fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<CommentThreadListResponse> {
        let max_results = max_results.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        self.get_json("commentThreads", &query, COMMENTS_CONTEXT).await
    }
}
