//! 文件日志
//!
//! TUI 占用了终端，日志只能写文件。`log` 宏的记录经由 tracing-subscriber
//! 自带的 log 桥接进入同一个订阅者。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::backend::APP_DIR;

/// 过滤级别的环境变量
pub const LOG_ENV: &str = "PHORGE_LOG";
const DEFAULT_FILTER: &str = "info";

/// `<state dir>/phorge/phorge.log`，没有 state 目录的平台退回到缓存目录
pub fn default_log_file() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join(APP_DIR).join("phorge.log"))
}

/// 初始化日志；返回的 guard 必须持有到程序退出，否则缓冲中的日志会丢失
pub fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let file_name = path.file_name().map_or_else(|| "phorge.log".into(), |name| name.to_os_string());
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(build_filter(std::env::var(LOG_ENV).ok().as_deref()))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}

/// 环境变量无法解析时退回默认级别
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
