use crate::{
    config::{Config, MAX_PAGE_SIZE},
    error::{AppError, Result},
    models::{
        video::{Comment, VideoData, VideoStats},
        youtube::{CommentThread, VideoResource},
    },
    services::{sentiment::SentimentClassifier, youtube::VideoPlatform},
    utils::time::normalize_timestamp,
};
use std::sync::Arc;
use tracing::{debug, info};

/// 视频数据聚合：统计信息 + 分页评论 + 逐条情感分类
#[derive(Clone)]
pub struct VideoService {
    platform: Arc<dyn VideoPlatform>,
    classifier: Arc<dyn SentimentClassifier>,
    page_size: u32,
    max_comments: usize,
}

impl VideoService {
    pub fn new(
        platform: Arc<dyn VideoPlatform>,
        classifier: Arc<dyn SentimentClassifier>,
        config: &Config,
    ) -> Self {
        Self {
            platform,
            classifier,
            page_size: config.comment_page_size.clamp(1, MAX_PAGE_SIZE),
            max_comments: config.max_comments,
        }
    }

    pub async fn get_video_data(&self, video_id: &str) -> Result<VideoData> {
        let video_stats = self.fetch_video_stats(video_id).await?;
        let comments = self.fetch_comments(video_id).await?;

        info!(
            "Aggregated video {}: {} of {} comments",
            video_id,
            comments.len(),
            video_stats.comment_count
        );

        Ok(VideoData {
            video_stats,
            comments,
        })
    }

    async fn fetch_video_stats(&self, video_id: &str) -> Result<VideoStats> {
        let video = self
            .platform
            .get_video(video_id)
            .await?
            .ok_or_else(|| AppError::not_found(video_id))?;

        Ok(Self::video_stats(video))
    }

    fn video_stats(video: VideoResource) -> VideoStats {
        VideoStats {
            thumbnail_url: video.snippet.thumbnails.preferred_url(),
            title: video.snippet.title,
            view_count: video.statistics.view_count,
            like_count: video.statistics.like_count,
            comment_count: video.statistics.comment_count,
        }
    }

    async fn fetch_comments(&self, video_id: &str) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;

        while comments.len() < self.max_comments {
            let page = self
                .platform
                .list_comment_threads(video_id, page_token.as_deref(), self.page_size)
                .await?;
            debug!(
                "Fetched comment page for {} with {} items",
                video_id,
                page.items.len()
            );

            let remaining = self.max_comments - comments.len();
            for item in page.items.iter().take(remaining) {
                comments.push(self.build_comment(item)?);
            }

            // 没有下一页即结束
            match page.continuation() {
                Some(token) => page_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(comments)
    }

    fn build_comment(&self, thread: &CommentThread) -> Result<Comment> {
        let top_level = &thread.snippet.top_level_comment;
        let text = top_level.snippet.text_display.clone();
        let sentiment = self.classifier.classify(&text)?;
        let updated_at = top_level
            .snippet
            .updated_at
            .as_deref()
            .map(normalize_timestamp)
            .transpose()?;

        Ok(Comment {
            id: top_level.id.clone(),
            text,
            sentiment,
            updated_at,
        })
    }
}
