//! 树节点数据模型
//!
//! 每个树节点（根节点除外）都挂一份 [`NodeData`]：
//! - `kind` 决定节点角色，创建后不可变
//! - 服务器的 IP / SSH 端口在创建时自上而下复制给所有后代
//! - 站点名 / 项目目录在创建时复制给站点下的所有后代
//!
//! 构造函数只填默认值，不会自动向上查找继承字段；
//! 继承由 `NavigationTree` 在建树时显式完成。

use crate::i18n::t;

/// 默认 SSH 端口
pub const DEFAULT_SSH_PORT: u16 = 22;

/// 节点角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ServerRoot,
    ServerInfo,
    SitesGroup,
    SiteRoot,
    SiteInfo,
    Deployments,
    DeploymentScript,
    Logs,
    Environment,
    Workers,
    Backups,
    Domains,
    DatabasesSite,
    DatabasesServer,
    DatabaseUsers,
    SslCertificates,
    Commands,
    GitRepository,
    SshKeys,
    Daemons,
    FirewallRules,
    ScheduledJobs,
}

impl NodeKind {
    /// 全部节点角色
    pub const ALL: [NodeKind; 22] = [
        Self::ServerRoot,
        Self::ServerInfo,
        Self::SitesGroup,
        Self::SiteRoot,
        Self::SiteInfo,
        Self::Deployments,
        Self::DeploymentScript,
        Self::Logs,
        Self::Environment,
        Self::Workers,
        Self::Backups,
        Self::Domains,
        Self::DatabasesSite,
        Self::DatabasesServer,
        Self::DatabaseUsers,
        Self::SslCertificates,
        Self::Commands,
        Self::GitRepository,
        Self::SshKeys,
        Self::Daemons,
        Self::FirewallRules,
        Self::ScheduledJobs,
    ];

    /// 服务器节点下的固定子节点（按显示顺序）
    pub const SERVER_CHILDREN: [NodeKind; 8] = [
        Self::ServerInfo,
        Self::SitesGroup,
        Self::SshKeys,
        Self::Daemons,
        Self::FirewallRules,
        Self::ScheduledJobs,
        Self::DatabasesServer,
        Self::DatabaseUsers,
    ];

    /// 站点节点下的固定子节点（按显示顺序）
    pub const SITE_CHILDREN: [NodeKind; 12] = [
        Self::SiteInfo,
        Self::Deployments,
        Self::DeploymentScript,
        Self::Logs,
        Self::Environment,
        Self::Workers,
        Self::Backups,
        Self::Domains,
        Self::DatabasesSite,
        Self::SslCertificates,
        Self::Commands,
        Self::GitRepository,
    ];

    /// 分组节点：只用于组织树结构，没有详情面板
    pub fn is_group(self) -> bool {
        matches!(self, Self::ServerRoot | Self::SiteRoot | Self::SitesGroup)
    }

    /// 常量风格的名称，用于日志和兜底提示
    pub fn name(self) -> &'static str {
        match self {
            Self::ServerRoot => "SERVER_ROOT",
            Self::ServerInfo => "SERVER_INFO",
            Self::SitesGroup => "SITES_GROUP",
            Self::SiteRoot => "SITE_ROOT",
            Self::SiteInfo => "SITE_INFO",
            Self::Deployments => "DEPLOYMENTS",
            Self::DeploymentScript => "DEPLOYMENT_SCRIPT",
            Self::Logs => "LOGS",
            Self::Environment => "ENVIRONMENT",
            Self::Workers => "WORKERS",
            Self::Backups => "BACKUPS",
            Self::Domains => "DOMAINS",
            Self::DatabasesSite => "DATABASES_SITE",
            Self::DatabasesServer => "DATABASES_SERVER",
            Self::DatabaseUsers => "DATABASE_USERS",
            Self::SslCertificates => "SSL_CERTIFICATES",
            Self::Commands => "COMMANDS",
            Self::GitRepository => "GIT_REPOSITORY",
            Self::SshKeys => "SSH_KEYS",
            Self::Daemons => "DAEMONS",
            Self::FirewallRules => "FIREWALL_RULES",
            Self::ScheduledJobs => "SCHEDULED_JOBS",
        }
    }

    /// 固定子节点的显示标签（服务器 / 站点节点的标签来自 API 数据）
    pub fn label(self) -> &'static str {
        let texts = &t().tree;
        match self {
            Self::ServerRoot | Self::SiteRoot => "",
            Self::ServerInfo => texts.server_info,
            Self::SitesGroup => texts.sites,
            Self::SiteInfo => texts.site_info,
            Self::Deployments => texts.deployments,
            Self::DeploymentScript => texts.deployment_script,
            Self::Logs => texts.logs,
            Self::Environment => texts.environment,
            Self::Workers => texts.workers,
            Self::Backups => texts.backups,
            Self::Domains => texts.domains,
            Self::DatabasesSite | Self::DatabasesServer => texts.databases,
            Self::DatabaseUsers => texts.database_users,
            Self::SslCertificates => texts.ssl_certificates,
            Self::Commands => texts.commands,
            Self::GitRepository => texts.git_repository,
            Self::SshKeys => texts.ssh_keys,
            Self::Daemons => texts.daemons,
            Self::FirewallRules => texts.firewall_rules,
            Self::ScheduledJobs => texts.scheduled_jobs,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 挂在树节点上的数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// 节点角色
    pub kind: NodeKind,
    /// 所属服务器
    pub server_id: i64,
    /// 所属站点（仅站点子树内存在）
    pub site_id: Option<i64>,
    /// 显示文本
    pub label: String,
    /// 服务器公网 IP（创建时继承）
    pub server_ip: Option<String>,
    /// 服务器 SSH 端口（创建时继承）
    pub ssh_port: u16,
    /// 站点名（创建时继承）
    pub site_name: Option<String>,
    /// 站点项目目录（创建时继承）
    pub site_directory: Option<String>,
    /// 子节点是否已加载（只对 `SitesGroup` 有意义）
    pub loaded: bool,
}

impl NodeData {
    /// 以默认值创建节点数据
    pub fn new(kind: NodeKind, server_id: i64) -> Self {
        Self {
            kind,
            server_id,
            site_id: None,
            label: String::new(),
            server_ip: None,
            ssh_port: DEFAULT_SSH_PORT,
            site_name: None,
            site_directory: None,
            loaded: false,
        }
    }
}
