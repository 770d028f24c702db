//! phorge: Laravel Forge 终端面板
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: API、配置、凭证、外部命令 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 命令行参数
//!     init_logging()          // 文件日志；失败只提示，不阻止启动
//!     load_config()           // config.toml + 命令行覆盖
//!     resolve_api_key()       // 命令行/环境变量 → 钥匙串 → 配置文件
//!     App::new()              // 装配 ForgeService、凭证和配置服务
//!     load_project()          // 工作目录下的 .phorge
//!     update::start()         // 没有密钥时弹出录入框，否则开始加载树
//!     init_terminal()
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use phorge_api::ForgeClient;
use tokio::sync::mpsc;

use backend::{
    resolve_api_key, AppConfig, ConfigService, FileConfigService, ForgeService, KeyringCredentialStore,
    ProjectConfig,
};
use cli::Cli;
use i18n::Language;
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 日志（guard 持有到 main 结束）
    let _log_guard = match cli.log_file.clone().or_else(util::default_log_file) {
        Some(path) => match util::init_logging(&path) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("phorge: logging disabled: {e:#}");
                None
            }
        },
        None => None,
    };
    log::info!("phorge {} starting", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let config_service = match &cli.config {
        Some(path) => FileConfigService::new(path),
        None => FileConfigService::default_location()?,
    };
    let config = load_config(&config_service, &cli)?;

    config.ui.theme.apply();
    match Language::from_code(&config.ui.language) {
        Some(language) => {
            log::info!("Language: {} ({})", language.display_name(), language.code());
            i18n::set_language(language);
        }
        None => log::warn!("Unknown language '{}', using en-US", config.ui.language),
    }

    // 3. API 密钥
    let credentials = KeyringCredentialStore::new();
    let client = match resolve_api_key(cli.api_key.as_deref(), &credentials, &config) {
        Some((api_key, source)) => {
            log::info!("Using API key from {source:?}");
            Some(ForgeClient::new(&api_key).context("Failed to build the Forge client")?)
        }
        None => {
            log::info!("No API key configured");
            None
        }
    };

    // 4. 应用
    let (tx, rx) = mpsc::unbounded_channel();
    let backend = ForgeService::new(client, tx);
    let (project_dir, project) = load_project();
    let mut app = model::App::new(config, backend, Box::new(credentials), Box::new(config_service))
        .with_project(project_dir, project);
    if let Some(server) = &cli.server {
        app.default_server = Some(server.clone());
    }

    update::start(&mut app);

    // 5. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("{e:#}");
    }
    result
}

/// 读取配置文件并叠加命令行参数
fn load_config(service: &FileConfigService, cli: &Cli) -> Result<AppConfig> {
    let mut config = service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;

    if let Some(mode) = cli.mode {
        config.ui.mode = mode;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    if let Some(language) = &cli.language {
        config.ui.language.clone_from(language);
    }
    Ok(config)
}

/// 工作目录下的 `.phorge`；读取失败时按空配置处理
fn load_project() -> (Option<PathBuf>, ProjectConfig) {
    let Ok(dir) = std::env::current_dir() else {
        log::warn!("No working directory, project defaults disabled");
        return (None, ProjectConfig::default());
    };
    let project = ProjectConfig::load_from(&dir).unwrap_or_else(|e| {
        log::warn!("{e}");
        ProjectConfig::default()
    });
    (Some(dir), project)
}
