pub mod sentiment;
pub mod video;
pub mod youtube;

// 重新导出常用类型
pub use sentiment::{SentimentClassifier, VaderClassifier};
pub use video::VideoService;
pub use youtube::{VideoPlatform, YouTubeClient};
