//! YouTube Data API v3 响应结构，只保留本服务用到的字段

use crate::utils::serde_helpers::lenient_u64;
use serde::{Deserialize, Serialize};

/// `videos.list` 响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// 优先使用高清缩略图
    pub fn preferred_url(&self) -> Option<String> {
        [&self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .map(|thumbnail| thumbnail.url.clone())
            .find(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// 计数字段以字符串下发，隐藏点赞数时字段缺失
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, with = "lenient_u64")]
    pub view_count: u64,
    #[serde(default, with = "lenient_u64")]
    pub like_count: u64,
    #[serde(default, with = "lenient_u64")]
    pub comment_count: u64,
}

/// `commentThreads.list` 响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub items: Vec<CommentThread>,
}

impl CommentThreadListResponse {
    /// 空字符串与缺失一样视为最后一页
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopLevelComment {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Google API 错误信封
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_video_list() {
        let body = json!({
            "kind": "youtube#videoListResponse",
            "items": [{
                "id": "dQw4w9WgXcQ",
                "snippet": {
                    "title": "Never Gonna Give You Up",
                    "thumbnails": {
                        "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg" },
                        "high": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg" }
                    }
                },
                "statistics": {
                    "viewCount": "1500000000",
                    "commentCount": "2300000"
                }
            }]
        });

        let response: VideoListResponse = serde_json::from_value(body).unwrap();
        let video = &response.items[0];
        assert_eq!(video.statistics.view_count, 1_500_000_000);
        assert_eq!(video.statistics.like_count, 0);
        assert_eq!(video.statistics.comment_count, 2_300_000);
        assert_eq!(
            video.snippet.thumbnails.preferred_url().as_deref(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn test_thumbnail_fallback() {
        let thumbnails: Thumbnails = serde_json::from_value(json!({
            "default": { "url": "https://i.ytimg.com/vi/x/default.jpg" }
        }))
        .unwrap();
        assert_eq!(
            thumbnails.preferred_url().as_deref(),
            Some("https://i.ytimg.com/vi/x/default.jpg")
        );
        assert!(Thumbnails::default().preferred_url().is_none());
    }

    #[test]
    fn test_continuation_token() {
        let last: CommentThreadListResponse =
            serde_json::from_value(json!({ "items": [] })).unwrap();
        assert_eq!(last.continuation(), None);

        let empty: CommentThreadListResponse =
            serde_json::from_value(json!({ "nextPageToken": "", "items": [] })).unwrap();
        assert_eq!(empty.continuation(), None);

        let more: CommentThreadListResponse =
            serde_json::from_value(json!({ "nextPageToken": "QURTSl", "items": [] })).unwrap();
        assert_eq!(more.continuation(), Some("QURTSl"));
    }
}
