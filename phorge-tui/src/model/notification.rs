//! 通知（toast）
//!
//! 新通知插在最前面，最多保留 [`MAX_NOTIFICATIONS`] 条，按严重程度设置存活时间。

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// 同时显示的最大通知数
pub const MAX_NOTIFICATIONS: usize = 5;

/// 严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// 存活时间
    pub fn ttl(self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_secs(4),
            Self::Warning => Duration::from_secs(6),
            Self::Error => Duration::from_secs(8),
        }
    }
}

/// 单条通知
#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    created: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= self.severity.ttl()
    }
}

/// 通知队列
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.push_at(severity, message, Instant::now());
    }

    fn push_at(&mut self, severity: Severity, message: impl Into<String>, created: Instant) {
        let message = message.into();
        match severity {
            Severity::Error => log::error!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Info | Severity::Success => log::info!("{message}"),
        }
        self.items.push_front(Notification {
            severity,
            message,
            created,
        });
        self.items.truncate(MAX_NOTIFICATIONS);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// 移除过期通知
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|item| !item.is_expired(now));
    }

    /// 从新到旧
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_capped() {
        let mut list = Notifications::new();
        for i in 0..7 {
            list.info(format!("n{i}"));
        }

        assert_eq!(list.len(), MAX_NOTIFICATIONS);
        let messages: Vec<&str> = list.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["n6", "n5", "n4", "n3", "n2"]);
    }

    #[test]
    fn expire_respects_severity_ttl() {
        let mut list = Notifications::new();
        let start = Instant::now();
        list.push_at(Severity::Error, "kept", start);
        list.push_at(Severity::Info, "dropped", start);

        list.expire(start + Duration::from_secs(5));

        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().map(|n| n.severity), Some(Severity::Error));

        list.expire(start + Duration::from_secs(9));
        assert!(list.is_empty());
    }
}
