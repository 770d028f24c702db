//! 日期时间反序列化工具
//!
//! Forge 返回的时间字段格式不统一：
//! - `"2024-05-01 12:30:00"`（无时区，按 UTC 处理）
//! - `"2024-05-01T12:30:00.000000Z"`（RFC3339）
//! - `null` 或缺失
//!
//! 无法识别的格式视为 `None`，不让单个字段拖垮整个响应的解析。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Forge 的 "Y-m-d H:i:s" 格式
const FORGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 反序列化：RFC3339 或 `Y-m-d H:i:s` -> `Option<DateTime<Utc>>`
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(parse_timestamp))
}

/// 解析单个时间字符串
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    match NaiveDateTime::parse_from_str(raw, FORGE_FORMAT) {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            log::debug!("[forge] Unrecognized timestamp '{raw}': {e}");
            None
        }
    }
}
