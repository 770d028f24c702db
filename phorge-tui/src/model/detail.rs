//! 详情面板（单槽位）
//!
//! 右侧内容区任何时刻最多只挂载一个面板：
//! - `show()` 先卸载旧面板，再按节点类型从静态注册表中取面板类型并挂载
//! - 每次挂载分配新的 [`PanelInstance`]，面板的每次加载再分配一张 `Ticket`
//! - 异步结果必须同时匹配当前实例和最新票据才会写入，否则直接丢弃
//!
//! 注册表 [`panel_for`] 是一个穷举 match，新增节点类型而忘记登记会直接编译失败。

use phorge_api::{
    BackupConfig, Certificate, Daemon, Database, DatabaseUser, Deployment, FirewallRule, ScheduledJob,
    Server, Site, SiteCommand, SshKey, Worker,
};

use crate::i18n::t;

use super::load::{LoadSlot, Ticket};
use super::node::{NodeData, NodeKind};

// ============================================================================
// 面板类型与注册表
// ============================================================================

/// 面板类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    ServerInfo,
    SiteInfo,
    Deployments,
    DeploymentScript,
    Logs,
    Environment,
    Workers,
    Backups,
    Domains,
    Databases,
    DatabaseUsers,
    Certificates,
    Commands,
    Git,
    SshKeys,
    Daemons,
    FirewallRules,
    ScheduledJobs,
}

/// 节点类型 → 面板类型
///
/// 分组节点没有面板，显式返回 None。
pub fn panel_for(kind: NodeKind) -> Option<PanelKind> {
    match kind {
        NodeKind::ServerRoot | NodeKind::SiteRoot | NodeKind::SitesGroup => None,
        NodeKind::ServerInfo => Some(PanelKind::ServerInfo),
        NodeKind::SiteInfo => Some(PanelKind::SiteInfo),
        NodeKind::Deployments => Some(PanelKind::Deployments),
        NodeKind::DeploymentScript => Some(PanelKind::DeploymentScript),
        NodeKind::Logs => Some(PanelKind::Logs),
        NodeKind::Environment => Some(PanelKind::Environment),
        NodeKind::Workers => Some(PanelKind::Workers),
        NodeKind::Backups => Some(PanelKind::Backups),
        NodeKind::Domains => Some(PanelKind::Domains),
        NodeKind::DatabasesSite | NodeKind::DatabasesServer => Some(PanelKind::Databases),
        NodeKind::DatabaseUsers => Some(PanelKind::DatabaseUsers),
        NodeKind::SslCertificates => Some(PanelKind::Certificates),
        NodeKind::Commands => Some(PanelKind::Commands),
        NodeKind::GitRepository => Some(PanelKind::Git),
        NodeKind::SshKeys => Some(PanelKind::SshKeys),
        NodeKind::Daemons => Some(PanelKind::Daemons),
        NodeKind::FirewallRules => Some(PanelKind::FirewallRules),
        NodeKind::ScheduledJobs => Some(PanelKind::ScheduledJobs),
    }
}

/// 面板动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Ssh,
    Sftp,
    Reboot,
    ServerLog,
    Deploy,
    ToggleQuickDeploy,
    DeploymentOutput,
    DeploymentLog,
    ResetDeployment,
    Edit,
    ClearLog,
    Reveal,
    Create,
    Restart,
    Delete,
    RunBackup,
    Sync,
    Activate,
    InstallRepository,
    UpdateBranch,
    RemoveRepository,
}

impl PanelAction {
    /// 状态栏提示文本
    pub fn label(self) -> &'static str {
        let a = &t().actions;
        match self {
            Self::Ssh => a.ssh,
            Self::Sftp => a.sftp,
            Self::Reboot => a.reboot,
            Self::ServerLog => a.server_log,
            Self::Deploy => a.deploy,
            Self::ToggleQuickDeploy => a.quick_deploy,
            Self::DeploymentOutput => a.output,
            Self::DeploymentLog => a.latest_log,
            Self::ResetDeployment => a.reset_status,
            Self::Edit => a.edit,
            Self::ClearLog => a.clear,
            Self::Reveal => a.reveal,
            Self::Create => a.create,
            Self::Restart => a.restart,
            Self::Delete => a.delete,
            Self::RunBackup => a.run_backup,
            Self::Sync => a.sync,
            Self::Activate => a.activate,
            Self::InstallRepository => a.install,
            Self::UpdateBranch => a.branch,
            Self::RemoveRepository => a.remove,
        }
    }
}

/// 按键 → 动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBinding {
    pub key: char,
    pub action: PanelAction,
}

const fn bind(key: char, action: PanelAction) -> ActionBinding {
    ActionBinding { key, action }
}

impl PanelKind {
    pub const ALL: [PanelKind; 18] = [
        Self::ServerInfo,
        Self::SiteInfo,
        Self::Deployments,
        Self::DeploymentScript,
        Self::Logs,
        Self::Environment,
        Self::Workers,
        Self::Backups,
        Self::Domains,
        Self::Databases,
        Self::DatabaseUsers,
        Self::Certificates,
        Self::Commands,
        Self::Git,
        Self::SshKeys,
        Self::Daemons,
        Self::FirewallRules,
        Self::ScheduledJobs,
    ];

    /// 面板标题
    pub fn title(self) -> &'static str {
        let p = &t().panels;
        match self {
            Self::ServerInfo => p.server_info,
            Self::SiteInfo => p.site_info,
            Self::Deployments => p.deployments,
            Self::DeploymentScript => p.deployment_script,
            Self::Logs => p.logs,
            Self::Environment => p.environment,
            Self::Workers => p.workers,
            Self::Backups => p.backups,
            Self::Domains => p.domains,
            Self::Databases => p.databases,
            Self::DatabaseUsers => p.database_users,
            Self::Certificates => p.certificates,
            Self::Commands => p.commands,
            Self::Git => p.git,
            Self::SshKeys => p.ssh_keys,
            Self::Daemons => p.daemons,
            Self::FirewallRules => p.firewall_rules,
            Self::ScheduledJobs => p.scheduled_jobs,
        }
    }

    /// 面板可用的动作按键
    pub fn actions(self) -> &'static [ActionBinding] {
        use PanelAction as A;

        const SERVER_INFO: &[ActionBinding] = &[
            bind('s', A::Ssh),
            bind('f', A::Sftp),
            bind('b', A::Reboot),
            bind('l', A::ServerLog),
        ];
        const SITE_INFO: &[ActionBinding] = &[bind('s', A::Ssh), bind('f', A::Sftp), bind('d', A::Deploy)];
        const DEPLOYMENTS: &[ActionBinding] = &[
            bind('d', A::Deploy),
            bind('q', A::ToggleQuickDeploy),
            bind('o', A::DeploymentOutput),
            bind('L', A::DeploymentLog),
            bind('R', A::ResetDeployment),
        ];
        const EDIT_ONLY: &[ActionBinding] = &[bind('e', A::Edit)];
        const LOGS: &[ActionBinding] = &[bind('c', A::ClearLog)];
        const ENVIRONMENT: &[ActionBinding] = &[bind('e', A::Edit), bind('v', A::Reveal)];
        const RESTARTABLE: &[ActionBinding] = &[
            bind('n', A::Create),
            bind('R', A::Restart),
            bind('x', A::Delete),
        ];
        const BACKUPS: &[ActionBinding] = &[bind('b', A::RunBackup), bind('x', A::Delete)];
        const DATABASES: &[ActionBinding] = &[bind('n', A::Create), bind('y', A::Sync), bind('x', A::Delete)];
        const CREATE_DELETE: &[ActionBinding] = &[bind('n', A::Create), bind('x', A::Delete)];
        const CERTIFICATES: &[ActionBinding] = &[
            bind('n', A::Create),
            bind('a', A::Activate),
            bind('x', A::Delete),
        ];
        const COMMANDS: &[ActionBinding] = &[bind('n', A::Create)];
        const GIT: &[ActionBinding] = &[
            bind('i', A::InstallRepository),
            bind('u', A::UpdateBranch),
            bind('x', A::RemoveRepository),
        ];

        match self {
            Self::ServerInfo => SERVER_INFO,
            Self::SiteInfo => SITE_INFO,
            Self::Deployments => DEPLOYMENTS,
            Self::DeploymentScript => EDIT_ONLY,
            Self::Logs => LOGS,
            Self::Environment => ENVIRONMENT,
            Self::Workers | Self::Daemons => RESTARTABLE,
            Self::Backups => BACKUPS,
            Self::Databases => DATABASES,
            Self::Domains
            | Self::DatabaseUsers
            | Self::SshKeys
            | Self::FirewallRules
            | Self::ScheduledJobs => CREATE_DELETE,
            Self::Certificates => CERTIFICATES,
            Self::Commands => COMMANDS,
            Self::Git => GIT,
        }
    }

    /// 按键查找动作
    pub fn action_for(self, key: char) -> Option<PanelAction> {
        self.actions()
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.action)
    }

    /// Enter 的默认动作
    pub fn default_action(self) -> Option<PanelAction> {
        match self {
            Self::Deployments => Some(PanelAction::DeploymentOutput),
            _ => None,
        }
    }
}

// ============================================================================
// 面板数据
// ============================================================================

/// 面板加载到的数据
#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    Server(Box<Server>),
    Site(Box<Site>),
    Deployments {
        site: Box<Site>,
        deployments: Vec<Deployment>,
    },
    /// 纯文本（部署脚本、日志）
    Text(String),
    Environment {
        raw: String,
        entries: Vec<(String, String)>,
    },
    Workers(Vec<Worker>),
    Backups(Vec<BackupConfig>),
    /// 站点别名
    Domains(Box<Site>),
    Databases(Vec<Database>),
    DatabaseUsers(Vec<DatabaseUser>),
    Certificates(Vec<Certificate>),
    Commands(Vec<SiteCommand>),
    Git(Box<Site>),
    SshKeys(Vec<SshKey>),
    Daemons(Vec<Daemon>),
    FirewallRules(Vec<FirewallRule>),
    ScheduledJobs(Vec<ScheduledJob>),
}

impl PanelData {
    /// 可选中的行数
    pub fn row_count(&self) -> usize {
        match self {
            Self::Server(_) | Self::Site(_) | Self::Git(_) => 0,
            Self::Deployments { deployments, .. } => deployments.len(),
            Self::Text(text) => text.lines().count(),
            Self::Environment { entries, .. } => entries.len(),
            Self::Workers(items) => items.len(),
            Self::Backups(items) => items.len(),
            Self::Domains(site) => site.aliases.len(),
            Self::Databases(items) => items.len(),
            Self::DatabaseUsers(items) => items.len(),
            Self::Certificates(items) => items.len(),
            Self::Commands(items) => items.len(),
            Self::SshKeys(items) => items.len(),
            Self::Daemons(items) => items.len(),
            Self::FirewallRules(items) => items.len(),
            Self::ScheduledJobs(items) => items.len(),
        }
    }
}

/// 面板内容状态
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Loading,
    Ready(PanelData),
    Failed(String),
}

// ============================================================================
// 挂载状态
// ============================================================================

/// 面板实例 ID，每次挂载递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelInstance(u64);

/// 已挂载的面板
#[derive(Debug, Clone)]
pub struct Panel {
    pub instance: PanelInstance,
    pub kind: PanelKind,
    /// 挂载时的节点数据
    pub node: NodeData,
    pub content: PanelContent,
    /// 当前选中行
    pub selected: usize,
    /// 是否显示敏感值（环境变量）
    pub reveal: bool,
    load: LoadSlot,
}

impl Panel {
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn data(&self) -> Option<&PanelData> {
        match &self.content {
            PanelContent::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn row_count(&self) -> usize {
        self.data().map_or(0, PanelData::row_count)
    }

    fn clamp_selection(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.selected = 0;
        } else if self.selected >= rows {
            self.selected = rows - 1;
        }
    }
}

/// 当前挂载的内容
#[derive(Debug, Clone, Default)]
pub enum Mounted {
    /// 初始占位
    #[default]
    Placeholder,
    Panel(Box<Panel>),
    /// 注册表中没有对应面板
    Fallback(NodeKind),
}

/// 面板加载请求，交给 backend 执行
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub instance: PanelInstance,
    pub ticket: Ticket,
    pub kind: PanelKind,
    pub node: NodeData,
}

/// 详情视图
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    mounted: Mounted,
    next_instance: u64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(&self) -> &Mounted {
        &self.mounted
    }

    pub fn panel(&self) -> Option<&Panel> {
        match &self.mounted {
            Mounted::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn panel_mut(&mut self) -> Option<&mut Panel> {
        match &mut self.mounted {
            Mounted::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    /// 实例是否仍然挂载
    pub fn is_current(&self, instance: PanelInstance) -> bool {
        self.panel().is_some_and(|panel| panel.instance == instance)
    }

    /// 卸载当前面板并挂载节点对应的面板
    ///
    /// 找到面板时返回首次加载请求；没有对应面板时挂载兜底提示，返回 None。
    pub fn show(&mut self, node: &NodeData) -> Option<FetchRequest> {
        self.mounted = Mounted::Placeholder;

        let Some(kind) = panel_for(node.kind) else {
            log::warn!("no panel registered for {}", node.kind);
            self.mounted = Mounted::Fallback(node.kind);
            return None;
        };

        self.next_instance += 1;
        let instance = PanelInstance(self.next_instance);
        let mut load = LoadSlot::new();
        let ticket = load.begin();

        self.mounted = Mounted::Panel(Box::new(Panel {
            instance,
            kind,
            node: node.clone(),
            content: PanelContent::Loading,
            selected: 0,
            reveal: false,
            load,
        }));

        Some(FetchRequest {
            instance,
            ticket,
            kind,
            node: node.clone(),
        })
    }

    /// 在同一实例上重新加载（旧请求作废）
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        let panel = self.panel_mut()?;
        let ticket = panel.load.begin();
        if matches!(panel.content, PanelContent::Failed(_)) {
            panel.content = PanelContent::Loading;
        }
        Some(FetchRequest {
            instance: panel.instance,
            ticket,
            kind: panel.kind,
            node: panel.node.clone(),
        })
    }

    /// 写入加载结果；实例或票据过期时丢弃并返回 false
    pub fn apply(
        &mut self,
        instance: PanelInstance,
        ticket: Ticket,
        result: Result<PanelData, String>,
    ) -> bool {
        let Some(panel) = self.panel_mut() else {
            return false;
        };
        if panel.instance != instance || !panel.load.finish(ticket) {
            return false;
        }

        panel.content = match result {
            Ok(data) => PanelContent::Ready(data),
            Err(message) => PanelContent::Failed(message),
        };
        panel.clamp_selection();
        true
    }

    // ------------------------------------------------------------------------
    // 行选择
    // ------------------------------------------------------------------------

    pub fn select_next(&mut self) {
        if let Some(panel) = self.panel_mut() {
            if panel.selected + 1 < panel.row_count() {
                panel.selected += 1;
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(panel) = self.panel_mut() {
            panel.selected = panel.selected.saturating_sub(1);
        }
    }

    pub fn select_first(&mut self) {
        if let Some(panel) = self.panel_mut() {
            panel.selected = 0;
        }
    }

    pub fn select_last(&mut self) {
        if let Some(panel) = self.panel_mut() {
            panel.selected = panel.row_count().saturating_sub(1);
        }
    }

    pub fn toggle_reveal(&mut self) {
        if let Some(panel) = self.panel_mut() {
            panel.reveal = !panel.reveal;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn node(kind: NodeKind) -> NodeData {
        NodeData::new(kind, 1)
    }

    fn workers(count: usize) -> PanelData {
        let items = (0..count)
            .map(|i| serde_json::from_value(serde_json::json!({ "id": i, "connection": "redis" })).unwrap())
            .collect();
        PanelData::Workers(items)
    }

    // ---- registry ----

    #[test]
    fn only_group_kinds_are_unmapped() {
        for kind in NodeKind::ALL {
            assert_eq!(panel_for(kind).is_none(), kind.is_group(), "{kind}");
        }
    }

    #[test]
    fn both_database_kinds_share_a_panel() {
        assert_eq!(panel_for(NodeKind::DatabasesSite), Some(PanelKind::Databases));
        assert_eq!(panel_for(NodeKind::DatabasesServer), Some(PanelKind::Databases));
    }

    #[test]
    fn every_panel_is_reachable() {
        for panel in PanelKind::ALL {
            assert!(NodeKind::ALL.iter().any(|kind| panel_for(*kind) == Some(panel)));
        }
    }

    #[test]
    fn action_keys_are_unique_per_panel() {
        for panel in PanelKind::ALL {
            let mut keys: Vec<char> = panel.actions().iter().map(|b| b.key).collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "{panel:?}");
            assert!(!keys.contains(&'r'), "'r' is reserved for refresh");
        }
    }

    #[test]
    fn action_lookup_uses_panel_table() {
        assert_eq!(PanelKind::ServerInfo.action_for('l'), Some(PanelAction::ServerLog));
        assert_eq!(PanelKind::Workers.action_for('R'), Some(PanelAction::Restart));
        assert_eq!(PanelKind::Daemons.actions(), PanelKind::Workers.actions());
        assert_eq!(PanelKind::Git.action_for('u'), Some(PanelAction::UpdateBranch));
        assert_eq!(PanelKind::Commands.action_for('x'), None);
        assert_eq!(PanelKind::Logs.action_for('e'), None);
    }

    // ---- show ----

    #[test]
    fn show_mounts_loading_panel() {
        let mut view = DetailView::new();
        let request = view.show(&node(NodeKind::Workers)).unwrap();

        let panel = view.panel().unwrap();
        assert_eq!(panel.kind, PanelKind::Workers);
        assert_eq!(panel.instance, request.instance);
        assert_eq!(panel.content, PanelContent::Loading);
        assert!(panel.is_loading());
    }

    #[test]
    fn show_group_kind_mounts_fallback() {
        let mut view = DetailView::new();
        view.show(&node(NodeKind::Workers));

        assert!(view.show(&node(NodeKind::SitesGroup)).is_none());
        assert!(matches!(view.mounted(), Mounted::Fallback(NodeKind::SitesGroup)));
        assert!(view.panel().is_none());
    }

    #[test]
    fn second_show_discards_first_result() {
        let mut view = DetailView::new();
        let a = view.show(&node(NodeKind::Workers)).unwrap();
        let b = view.show(&node(NodeKind::Daemons)).unwrap();

        assert_ne!(a.instance, b.instance);
        assert!(!view.apply(a.instance, a.ticket, Ok(workers(3))));
        assert_eq!(view.panel().unwrap().content, PanelContent::Loading);
        assert!(view.apply(b.instance, b.ticket, Ok(PanelData::Daemons(Vec::new()))));
        assert_eq!(view.panel().unwrap().kind, PanelKind::Daemons);
    }

    #[test]
    fn same_kind_remount_gets_a_new_instance() {
        let mut view = DetailView::new();
        let a = view.show(&node(NodeKind::Workers)).unwrap();
        let b = view.show(&node(NodeKind::Workers)).unwrap();

        assert!(!view.apply(a.instance, a.ticket, Ok(workers(1))));
        assert!(view.apply(b.instance, b.ticket, Ok(workers(2))));
        assert_eq!(view.panel().unwrap().row_count(), 2);
    }

    // ---- refresh ----

    #[test]
    fn refresh_is_last_request_wins() {
        let mut view = DetailView::new();
        let first = view.show(&node(NodeKind::Workers)).unwrap();
        let second = view.refresh().unwrap();

        assert_eq!(first.instance, second.instance);
        assert!(view.apply(second.instance, second.ticket, Ok(workers(2))));
        assert!(!view.apply(first.instance, first.ticket, Ok(workers(5))));
        assert_eq!(view.panel().unwrap().row_count(), 2);
    }

    #[test]
    fn failure_is_kept_as_message() {
        let mut view = DetailView::new();
        let request = view.show(&node(NodeKind::Logs)).unwrap();

        assert!(view.apply(request.instance, request.ticket, Err("boom".into())));
        assert_eq!(view.panel().unwrap().content, PanelContent::Failed("boom".into()));
    }

    #[test]
    fn selection_is_clamped_after_reload() {
        let mut view = DetailView::new();
        let request = view.show(&node(NodeKind::Workers)).unwrap();
        view.apply(request.instance, request.ticket, Ok(workers(4)));
        view.select_last();
        assert_eq!(view.panel().unwrap().selected, 3);

        let again = view.refresh().unwrap();
        view.apply(again.instance, again.ticket, Ok(workers(2)));
        assert_eq!(view.panel().unwrap().selected, 1);
    }
}
