use crate::{config::Config, services::video::VideoService};

/// 应用程序的共享状态
/// 进程启动时构建一次，请求之间只读共享
#[derive(Clone)]
pub struct AppState {
    /// 应用配置
    pub config: Config,

    /// 视频聚合服务
    pub video_service: VideoService,
}

impl AppState {
    pub fn new(config: Config, video_service: VideoService) -> Self {
        Self {
            config,
            video_service,
        }
    }
}
