use chrono::DateTime;

use crate::error::{AppError, Result};

/// 评论时间的展示格式
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 将 RFC 3339 时间转换为展示格式，保留原始时区偏移下的本地时间
pub fn normalize_timestamp(raw: &str) -> Result<String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.format(DISPLAY_FORMAT).to_string())
        .map_err(|e| AppError::Parse(format!("{:?}: {}", raw, e)))
}
