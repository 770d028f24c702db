//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐   Message    ┌──────────┐   调用    ┌──────────────────┐    │
//！│   │  Event  │ ───────────▶ │  Update  │ ────────▶ │   Backend 层     │    │
//！│   │   层    │              │    层    │           │  ForgeService    │    │
//！│   └─────────┘              └────▲─────┘           └────────┬─────────┘    │
//！│                                 │                          │ tokio::spawn │
//！│                                 │   BackendEvent           ▼              │
//！│                                 └────────────────── ┌──────────────┐      │
//！│                                     (mpsc 通道)      │  phorge-api  │      │
//！│                                                     └──────────────┘      │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：网络请求、配置、凭证和外部命令
//!
//! Backend 层不持有任何 UI 状态。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod forge_service;          // 后台任务：加载树、面板数据、执行变更
//!         mod mutation;               // 变更操作（表单 / 确认弹窗 → API 请求）
//!         mod config_service;         // 配置文件（TOML）与项目文件 .phorge
//!         mod credential_service;     // API 密钥（keyring）
//!         mod external;               // SSH / SFTP / 编辑器
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、ForgeService
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个方法都立即返回，真正的请求在 tokio 任务里执行：
//!
//!         update 层                        后台任务
//!         ─────────                        ────────
//!         slot.begin() → ticket
//!         service.load_servers(ticket) ──▶ client.list_servers().await
//!                                              │
//!         BackendEvent::ServersLoaded ◀────────┘ (ticket 原样带回)
//!         slot.finish(ticket)?
//!             是最新票据 → 写入模型
//!             已过期     → 丢弃
//!
//!     客户端（ForgeClient）在所有任务间共享，只读。
//!     没有配置 API 密钥时，所有请求都以 Authentication 错误返回。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置与凭证
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     API 密钥的解析顺序：
//!         1. --api-key / FORGE_API_KEY
//!         2. 系统钥匙串（service "phorge"，user "api-key"）
//!         3. config.toml 中的 forge.api_key
//!
//!     都没有时弹出录入对话框；录入的密钥先写钥匙串，失败再写配置文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、外部命令
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     update 层只记录 `pending_external`，主循环在下一帧挂起终端后执行：
//!
//!         restore terminal → ExternalCommand::run() → init terminal
//!             → AppMessage::External(outcome) → update
//!

mod config_service;
mod credential_service;
mod external;
mod forge_service;
mod mutation;

pub use config_service::{
    AppConfig, ConfigEdit, ConfigService, DefaultChange, FileConfigService, ProjectConfig, APP_DIR,
};
pub use credential_service::{resolve_api_key, CredentialStore, KeyringCredentialStore};
pub use external::{EditTarget, ExternalCommand, ExternalOutcome};
pub use forge_service::{ForgeService, Lookup};
pub use mutation::Mutation;

#[cfg(test)]
pub(crate) use credential_service::memory::MemoryStore;
