//! Forge 服务
//!
//! 所有网络请求都在 tokio 任务中执行，完成后把 [`BackendEvent`] 发回主循环。
//! 请求发起时携带的票据 / 实例 ID 原样带回，由 update 层判断结果是否过期。

use std::future::Future;

use phorge_api::{ForgeClient, ForgeError, Result, parse_env};
use tokio::sync::mpsc::UnboundedSender;

use crate::i18n::t;
use crate::message::BackendEvent;
use crate::model::detail::{FetchRequest, PanelData, PanelInstance, PanelKind};
use crate::model::load::Ticket;
use crate::model::node::NodeData;
use crate::model::tree::NodeId;

use super::mutation::Mutation;

/// 只读文本查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    ServerLog { server_id: i64 },
    DeploymentOutput { server_id: i64, site_id: i64, deployment_id: i64 },
    DeploymentLog { server_id: i64, site_id: i64 },
}

impl Lookup {
    pub fn title(&self) -> &'static str {
        let m = &t().modal;
        match self {
            Self::ServerLog { .. } => m.server_log,
            Self::DeploymentOutput { .. } => m.deployment_output,
            Self::DeploymentLog { .. } => m.deployment_log,
        }
    }

    async fn run(&self, client: &ForgeClient) -> Result<String> {
        match self {
            Self::ServerLog { server_id } => client.get_server_logs(*server_id).await,
            Self::DeploymentOutput {
                server_id,
                site_id,
                deployment_id,
            } => client.get_deployment_output(*server_id, *site_id, *deployment_id).await,
            Self::DeploymentLog { server_id, site_id } => client.get_deployment_log(*server_id, *site_id).await,
        }
    }
}

/// Forge 服务
#[derive(Clone)]
pub struct ForgeService {
    client: Option<ForgeClient>,
    tx: UnboundedSender<BackendEvent>,
}

impl std::fmt::Debug for ForgeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForgeService")
            .field("connected", &self.client.is_some())
            .finish_non_exhaustive()
    }
}

impl ForgeService {
    pub fn new(client: Option<ForgeClient>, tx: UnboundedSender<BackendEvent>) -> Self {
        Self { client, tx }
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// 替换客户端（录入新的 API 密钥之后）
    pub fn connect(&mut self, client: ForgeClient) {
        self.client = Some(client);
    }

    fn client(&self) -> Result<ForgeClient> {
        self.client.clone().ok_or_else(|| ForgeError::Authentication {
            message: t().notify.no_api_key.to_string(),
        })
    }

    fn spawn(&self, task: impl Future<Output = BackendEvent> + Send + 'static) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            if tx.send(task.await).is_err() {
                log::debug!("backend event dropped, main loop has exited");
            }
        });
    }

    // ========================================================================
    // 树加载
    // ========================================================================

    pub fn load_servers(&self, ticket: Ticket) {
        let client = self.client();
        self.spawn(async move {
            let result = async { client?.list_servers().await }.await;
            BackendEvent::ServersLoaded { ticket, result }
        });
    }

    pub fn load_picker(&self, ticket: Ticket) {
        let client = self.client();
        self.spawn(async move {
            let result = async { client?.list_servers().await }.await;
            BackendEvent::PickerLoaded { ticket, result }
        });
    }

    pub fn load_single_server(&self, ticket: Ticket, server_id: i64) {
        let client = self.client();
        self.spawn(async move {
            let result = async {
                let client = client?;
                tokio::try_join!(client.get_server(server_id), client.list_sites(server_id))
            }
            .await;
            BackendEvent::SingleServerLoaded { ticket, result }
        });
    }

    pub fn load_sites(&self, generation: u64, node: NodeId, ticket: Ticket, server_id: i64) {
        let client = self.client();
        self.spawn(async move {
            let result = async { client?.list_sites(server_id).await }.await;
            BackendEvent::SitesLoaded {
                generation,
                node,
                ticket,
                result,
            }
        });
    }

    // ========================================================================
    // 面板与操作
    // ========================================================================

    pub fn fetch_panel(&self, request: FetchRequest) {
        let client = self.client();
        self.spawn(async move {
            let FetchRequest {
                instance,
                ticket,
                kind,
                node,
            } = request;
            let result = async { fetch_panel_data(&client?, kind, &node).await }.await;
            BackendEvent::PanelLoaded {
                instance,
                ticket,
                result,
            }
        });
    }

    pub fn run_mutation(&self, mutation: Mutation, instance: Option<PanelInstance>) {
        let client = self.client();
        let description = mutation.describe();
        // 负载可能含密码或 .env 内容，只记录描述
        log::info!("Running mutation: {description}");
        self.spawn(async move {
            let result = async { mutation.execute(&client?).await }.await;
            BackendEvent::MutationFinished {
                instance,
                description,
                result,
            }
        });
    }

    pub fn lookup(&self, lookup: Lookup) {
        let client = self.client();
        self.spawn(async move {
            let result = async { lookup.run(&client?).await }.await;
            BackendEvent::LookupFinished {
                title: lookup.title(),
                result,
            }
        });
    }

    /// 用新密钥请求 `/user`，确认密钥有效
    pub fn check_api_key(&self, api_key: String) {
        self.spawn(async move {
            let result = async { ForgeClient::new(&api_key)?.get_user().await }.await;
            BackendEvent::ApiKeyChecked { api_key, result }
        });
    }
}

/// 按面板类型拉取数据
pub async fn fetch_panel_data(client: &ForgeClient, kind: PanelKind, node: &NodeData) -> Result<PanelData> {
    let server_id = node.server_id;
    let site_id = || {
        node.site_id.ok_or_else(|| ForgeError::NotFound {
            path: format!("/servers/{server_id}/sites"),
        })
    };

    let data = match kind {
        PanelKind::ServerInfo => PanelData::Server(Box::new(client.get_server(server_id).await?)),
        PanelKind::SiteInfo => PanelData::Site(Box::new(client.get_site(server_id, site_id()?).await?)),
        PanelKind::Deployments => {
            let site_id = site_id()?;
            let (site, deployments) = tokio::try_join!(
                client.get_site(server_id, site_id),
                client.list_deployments(server_id, site_id)
            )?;
            PanelData::Deployments {
                site: Box::new(site),
                deployments,
            }
        }
        PanelKind::DeploymentScript => {
            PanelData::Text(client.get_deployment_script(server_id, site_id()?).await?)
        }
        PanelKind::Logs => PanelData::Text(client.get_site_logs(server_id, site_id()?).await?),
        PanelKind::Environment => {
            let raw = client.get_environment(server_id, site_id()?).await?;
            let entries = parse_env(&raw);
            PanelData::Environment { raw, entries }
        }
        PanelKind::Workers => PanelData::Workers(client.list_workers(server_id, site_id()?).await?),
        PanelKind::Backups => PanelData::Backups(client.list_backup_configs(server_id).await?),
        PanelKind::Domains => PanelData::Domains(Box::new(client.get_site(server_id, site_id()?).await?)),
        PanelKind::Databases => PanelData::Databases(client.list_databases(server_id).await?),
        PanelKind::DatabaseUsers => PanelData::DatabaseUsers(client.list_database_users(server_id).await?),
        PanelKind::Certificates => {
            PanelData::Certificates(client.list_certificates(server_id, site_id()?).await?)
        }
        PanelKind::Commands => PanelData::Commands(client.list_commands(server_id, site_id()?).await?),
        PanelKind::Git => PanelData::Git(Box::new(client.get_site(server_id, site_id()?).await?)),
        PanelKind::SshKeys => PanelData::SshKeys(client.list_ssh_keys(server_id).await?),
        PanelKind::Daemons => PanelData::Daemons(client.list_daemons(server_id).await?),
        PanelKind::FirewallRules => PanelData::FirewallRules(client.list_firewall_rules(server_id).await?),
        PanelKind::ScheduledJobs => PanelData::ScheduledJobs(client.list_jobs(server_id).await?),
    };

    Ok(data)
}
