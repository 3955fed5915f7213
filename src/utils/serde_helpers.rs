//! 上游 JSON 的序列化/反序列化辅助模块

use serde::{Deserialize, Deserializer, Serializer};

/// YouTube 把 uint64 计数编码成字符串 (例如: "1024")，这里同时接受数字
pub mod lenient_u64 {
    use super::*;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CountValue {
            Number(u64),
            String(String),
        }

        match Option::<CountValue>::deserialize(deserializer)? {
            None => Ok(0),
            Some(CountValue::Number(n)) => Ok(n),
            Some(CountValue::String(s)) if s.trim().is_empty() => Ok(0),
            Some(CountValue::String(s)) => s
                .trim()
                .parse::<u64>()
                .map_err(|e| serde::de::Error::custom(format!("invalid count {:?}: {}", s, e))),
        }
    }
}
