//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              Update 层                                     │
//！│                                                                            │
//！│   AppMessage ──┬─ Tree(..)     ──▶ tree.rs     光标、展开、懒加载站点       │
//！│                ├─ Detail(..)   ──▶ detail.rs   行选择、面板动作             │
//！│                ├─ Modal(..)    ──▶ modal.rs    确认、表单、选择器           │
//！│                ├─ Backend(..)  ──▶ backend.rs  核对票据后写入模型           │
//！│                └─ 其他          ──▶ mod.rs      焦点、刷新、帮助、退出       │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要网络的操作只在这里发起（调用 `app.backend`），结果以 BackendEvent 的形式回来。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、树加载
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全部服务器模式：
//!         start() / Ctrl+r ──▶ loads.tree.begin() ──▶ load_servers
//!         ServersLoaded(最新票据) ──▶ tree.populate()
//!
//!     单服务器模式：
//!         start() / p ──▶ loads.picker.begin() ──▶ load_picker
//!         PickerLoaded ──▶ 默认服务器匹配则直接加载，否则弹出选择器
//!         选择器确认 / Ctrl+r ──▶ loads.tree.begin() ──▶ load_single_server
//!         SingleServerLoaded(最新票据) ──▶ tree.populate_single_server()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、错误
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     所有异步操作的错误都在 report_error() 中转换成通知；
//!     Authentication 额外弹出阻塞式错误弹窗，其他错误不打断当前操作。
//!

mod backend;
mod detail;
mod modal;
mod tree;

use phorge_api::ForgeError;

use crate::backend::ExternalOutcome;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::state::config_field;
use crate::model::{App, FocusPanel, FormKind, FormState, NavigationMode};

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Tree(tree_msg) => {
            tree::update(app, tree_msg);
        }

        AppMessage::Detail(detail_msg) => {
            detail::update(app, detail_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::External(outcome) => {
            handle_external(app, outcome);
        }

        AppMessage::ReloadTree => {
            reload_tree(app);
        }

        AppMessage::RefreshPanel => {
            detail::refresh(app);
        }

        AppMessage::OpenPicker => {
            if app.mode.is_single() {
                open_picker(app);
            } else {
                app.notifications.info(t().notify.single_mode_only);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::OpenPalette => {
            app.modal.show_palette();
        }

        AppMessage::EditConfig => {
            open_config_form(app);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
            }
        }

        AppMessage::Noop => {}
    }
}

// ============================================================================
// 顶层加载
// ============================================================================

/// 启动：没有 API 密钥时先录入，否则按模式加载
pub fn start(app: &mut App) {
    if !app.backend.is_connected() {
        app.modal.show_form(FormState::new(FormKind::ApiKey, None, None));
        return;
    }
    load_initial(app);
}

fn load_initial(app: &mut App) {
    match app.mode {
        NavigationMode::AllServers => reload_tree(app),
        NavigationMode::SingleServer => open_picker(app),
    }
}

/// 重新执行构建当前树的加载
pub fn reload_tree(app: &mut App) {
    match (app.mode, app.current_server) {
        (NavigationMode::AllServers, _) => {
            let ticket = app.loads.tree.begin();
            log::debug!("Reloading server list ({ticket:?})");
            app.backend.load_servers(ticket);
        }
        (NavigationMode::SingleServer, Some(server_id)) => load_single_server(app, server_id),
        (NavigationMode::SingleServer, None) => open_picker(app),
    }
}

/// 单服务器模式：加载一台服务器及其站点
pub fn load_single_server(app: &mut App, server_id: i64) {
    app.current_server = Some(server_id);
    let ticket = app.loads.tree.begin();
    log::debug!("Loading server {server_id} ({ticket:?})");
    app.backend.load_single_server(ticket, server_id);
}

/// 拉取服务器列表并打开选择器
pub fn open_picker(app: &mut App) {
    let ticket = app.loads.picker.begin();
    app.backend.load_picker(ticket);
}

/// 配置表单：以当前配置预填，API 密钥留空
pub fn open_config_form(app: &mut App) {
    let config = &app.config;
    let mut values = vec![String::new(); FormKind::Config.fields().len()];
    values[config_field::SSH_USER].clone_from(&config.forge.ssh_user);
    values[config_field::EDITOR].clone_from(&config.editor.command);
    let vim_keys = if config.ui.vim_keys { "yes" } else { "no" };
    values[config_field::VIM_KEYS] = vim_keys.to_string();
    values[config_field::THEME] = config.ui.theme.code().to_string();

    let form = FormState::new(FormKind::Config, None, None).with_values(values);
    app.modal.show_form(form);
}

// ============================================================================
// 错误与外部命令
// ============================================================================

/// 把异步操作的错误转成通知；认证失败弹出阻塞式弹窗
fn report_error(app: &mut App, context: &str, err: &ForgeError) {
    if err.is_authentication() {
        app.modal.show_error(t().modal.auth_title, format!("{context}: {err}"));
        return;
    }
    let message = format!("{context}: {err}");
    if err.is_expected() {
        app.notifications.warning(message);
    } else {
        app.notifications.error(message);
    }
}

fn handle_external(app: &mut App, outcome: ExternalOutcome) {
    match outcome {
        ExternalOutcome::Finished => {}
        ExternalOutcome::Failed(message) => app.notifications.error(message),
        ExternalOutcome::Unchanged => app.notifications.info(t().notify.no_changes),
        ExternalOutcome::Edited { mutation, instance } => {
            app.backend.run_mutation(mutation, instance);
        }
    }
}

/// 测试公用的装配
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod harness {
    use std::sync::Arc;

    use phorge_api::test_utils::MockTransport;
    use phorge_api::ForgeClient;
    use tempfile::TempDir;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::update;
    use crate::backend::{AppConfig, FileConfigService, ForgeService, MemoryStore};
    use crate::message::{AppMessage, BackendEvent};
    use crate::model::App;

    pub(crate) struct Harness {
        pub app: App,
        pub mock: Arc<MockTransport>,
        rx: UnboundedReceiver<BackendEvent>,
        _dir: TempDir,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_config(AppConfig::default())
        }

        pub fn with_config(config: AppConfig) -> Self {
            let mock = Arc::new(MockTransport::new());
            let (tx, rx) = mpsc::unbounded_channel();
            let backend = ForgeService::new(Some(ForgeClient::with_transport(mock.clone())), tx);
            let dir = tempfile::tempdir().unwrap();
            let app = App::new(
                config,
                backend,
                Box::new(MemoryStore::with(None)),
                Box::new(FileConfigService::new(dir.path().join("config.toml"))),
            );
            Self {
                app,
                mock,
                rx,
                _dir: dir,
            }
        }

        /// 没有 API 密钥的应用
        pub fn disconnected() -> Self {
            let mut harness = Self::new();
            let (tx, rx) = mpsc::unbounded_channel();
            harness.app.backend = ForgeService::new(None, tx);
            harness.rx = rx;
            harness
        }

        pub fn send(&mut self, msg: AppMessage) {
            update(&mut self.app, msg);
        }

        /// 等待下一个后台事件（不交给 update）
        pub async fn next_event(&mut self) -> BackendEvent {
            self.rx.recv().await.unwrap()
        }

        /// 等待下一个后台事件并交给 update
        pub async fn pump(&mut self) {
            let event = self.next_event().await;
            update(&mut self.app, AppMessage::Backend(event));
        }

        /// 让已经 spawn 的任务跑到第一个挂起点
        pub async fn settle(&self) {
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
        }
    }
}
