//! 应用主状态结构

use std::collections::HashMap;
use std::path::PathBuf;

use phorge_api::Server;

use crate::backend::{
    AppConfig, ConfigService, CredentialStore, ExternalCommand, ForgeService, ProjectConfig,
};

use super::detail::DetailView;
use super::node::{NodeData, NodeKind};
use super::load::LoadSlot;
use super::notification::Notifications;
use super::tree::{NavigationTree, NodeId};
use super::{FocusPanel, ModalState, NavigationMode};

/// 各个异步加载的槽位
#[derive(Debug, Default)]
pub struct Loads {
    /// 构建当前树的加载（服务器列表或单台服务器）
    pub tree: LoadSlot,
    /// 服务器选择器的列表
    pub picker: LoadSlot,
    /// 站点分组的懒加载（按当前代数内的节点 ID）
    pub sites: HashMap<NodeId, LoadSlot>,
}

impl Loads {
    /// 树重建后旧节点的站点加载全部作废
    pub fn reset_sites(&mut self) {
        self.sites.clear();
    }

    pub fn is_site_loading(&self, node: NodeId) -> bool {
        self.sites.get(&node).is_some_and(LoadSlot::is_loading)
    }
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航模式
    pub mode: NavigationMode,

    /// 导航树
    pub tree: NavigationTree,

    /// 详情面板
    pub detail: DetailView,

    pub loads: Loads,

    /// 最近加载到的服务器（按 ID），用于解析 SSH 用户
    pub servers: HashMap<i64, Server>,

    /// 单服务器模式下当前展示的服务器
    pub current_server: Option<i64>,

    /// 单服务器模式的默认服务器名（`.phorge` 或 `--server`）
    pub default_server: Option<String>,

    /// 当前项目的默认服务器和站点（`.phorge`）
    pub project: ProjectConfig,

    /// `.phorge` 所在目录；None 时默认值只在本次会话内生效
    pub project_dir: Option<PathBuf>,

    /// 弹窗状态
    pub modal: ModalState,

    pub notifications: Notifications,

    pub config: AppConfig,

    pub backend: ForgeService,

    pub credentials: Box<dyn CredentialStore>,

    pub config_service: Box<dyn ConfigService>,

    /// 等待主循环挂起终端后执行的命令
    pub pending_external: Option<ExternalCommand>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        config: AppConfig,
        backend: ForgeService,
        credentials: Box<dyn CredentialStore>,
        config_service: Box<dyn ConfigService>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            mode: config.ui.mode,
            tree: NavigationTree::new(),
            detail: DetailView::new(),
            loads: Loads::default(),
            servers: HashMap::new(),
            current_server: None,
            default_server: None,
            project: ProjectConfig::default(),
            project_dir: None,
            modal: ModalState::new(),
            notifications: Notifications::new(),
            config,
            backend,
            credentials,
            config_service,
            pending_external: None,
        }
    }

    /// 树是否正在加载（显示加载提示）
    pub fn is_tree_loading(&self) -> bool {
        self.loads.tree.is_loading() || self.loads.picker.is_loading()
    }

    /// 服务器的 SSH 用户
    pub fn ssh_user_for_id(&self, server_id: i64) -> String {
        self.servers.get(&server_id).map_or_else(
            || self.config.default_ssh_user().to_string(),
            |server| self.config.ssh_user_for(server).to_string(),
        )
    }

    /// 绑定项目目录，默认服务器取自项目配置
    pub fn with_project(mut self, dir: Option<PathBuf>, project: ProjectConfig) -> Self {
        self.default_server.clone_from(&project.server);
        self.project = project;
        self.project_dir = dir;
        self
    }

    pub fn server_name(&self, server_id: i64) -> Option<&str> {
        self.servers.get(&server_id).map(|server| server.name.as_str())
    }

    /// 节点是否是项目默认的服务器或站点
    pub fn is_project_default(&self, data: &NodeData) -> bool {
        let Some(server) = self.server_name(data.server_id) else {
            return false;
        };
        match (data.kind, data.site_name.as_deref()) {
            (NodeKind::ServerRoot, _) => self.project.is_default_server(server),
            (NodeKind::SiteRoot, Some(site)) => self.project.is_default_site(server, site),
            _ => false,
        }
    }

    /// 记住服务器（按 ID 覆盖）
    pub fn remember_servers<'a>(&mut self, servers: impl IntoIterator<Item = &'a Server>) {
        for server in servers {
            self.servers.insert(server.id, server.clone());
        }
    }
}
