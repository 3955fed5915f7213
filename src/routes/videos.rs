use crate::{
    error::{AppError, Result},
    models::video::VideoData,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_video))
}

/// 取查询参数的第一个值，重复参数时忽略后面的
fn first_param(params: Vec<(String, String)>, name: &str) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// GET /api/video?videoId=<id>
async fn get_video(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<VideoData>> {
    let video_id = first_param(params, "videoId")
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::missing_parameter("videoId"))?;

    tracing::info!("Fetching video data for {}", video_id);

    let video_data = state.video_service.get_video_data(&video_id).await?;
    Ok(Json(video_data))
}
