//! 变更操作
//!
//! 所有会修改远端状态的操作都先被描述成一个 [`Mutation`] 值：
//! 确认弹窗和表单只负责构造它，真正的请求由 `ForgeService` 在后台任务里执行。

use phorge_api::{
    CreateDaemon, CreateDatabase, CreateDatabaseUser, CreateFirewallRule, CreateScheduledJob,
    CreateSshKey, CreateWorker, FirewallRuleType, ForgeClient, InstallRepository, Result,
};

use crate::i18n::t;
use crate::model::detail::PanelData;
use crate::model::state::{FormKind, FormState};

/// 一次变更请求
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    RebootServer { server_id: i64 },
    Deploy { server_id: i64, site_id: i64 },
    SetQuickDeploy { server_id: i64, site_id: i64, enabled: bool },
    ResetDeployment { server_id: i64, site_id: i64 },
    UpdateDeploymentScript { server_id: i64, site_id: i64, content: String },
    UpdateEnvironment { server_id: i64, site_id: i64, content: String },
    ClearSiteLog { server_id: i64, site_id: i64 },
    CreateWorker { server_id: i64, site_id: i64, payload: CreateWorker },
    RestartWorker { server_id: i64, site_id: i64, worker_id: i64 },
    DeleteWorker { server_id: i64, site_id: i64, worker_id: i64 },
    RunBackup { server_id: i64, config_id: i64 },
    DeleteBackupConfig { server_id: i64, config_id: i64 },
    UpdateAliases { server_id: i64, site_id: i64, aliases: Vec<String> },
    CreateDatabase { server_id: i64, payload: CreateDatabase },
    SyncDatabases { server_id: i64 },
    DeleteDatabase { server_id: i64, database_id: i64 },
    CreateDatabaseUser { server_id: i64, payload: CreateDatabaseUser },
    DeleteDatabaseUser { server_id: i64, user_id: i64 },
    ObtainCertificate { server_id: i64, site_id: i64, domains: Vec<String> },
    ActivateCertificate { server_id: i64, site_id: i64, certificate_id: i64 },
    DeleteCertificate { server_id: i64, site_id: i64, certificate_id: i64 },
    ExecuteCommand { server_id: i64, site_id: i64, command: String },
    InstallRepository { server_id: i64, site_id: i64, payload: InstallRepository },
    UpdateBranch { server_id: i64, site_id: i64, branch: String },
    RemoveRepository { server_id: i64, site_id: i64 },
    CreateSshKey { server_id: i64, payload: CreateSshKey },
    DeleteSshKey { server_id: i64, key_id: i64 },
    CreateDaemon { server_id: i64, payload: CreateDaemon },
    RestartDaemon { server_id: i64, daemon_id: i64 },
    DeleteDaemon { server_id: i64, daemon_id: i64 },
    CreateFirewallRule { server_id: i64, payload: CreateFirewallRule },
    DeleteFirewallRule { server_id: i64, rule_id: i64 },
    CreateScheduledJob { server_id: i64, payload: CreateScheduledJob },
    DeleteScheduledJob { server_id: i64, job_id: i64 },
}

impl Mutation {
    /// 用于确认弹窗和通知的简短描述
    pub fn describe(&self) -> &'static str {
        let m = &t().mutations;
        match self {
            Self::RebootServer { .. } => m.reboot_server,
            Self::Deploy { .. } => m.deploy,
            Self::SetQuickDeploy { enabled: true, .. } => m.enable_quick_deploy,
            Self::SetQuickDeploy { enabled: false, .. } => m.disable_quick_deploy,
            Self::ResetDeployment { .. } => m.reset_deployment,
            Self::UpdateDeploymentScript { .. } => m.update_script,
            Self::UpdateEnvironment { .. } => m.update_environment,
            Self::ClearSiteLog { .. } => m.clear_log,
            Self::CreateWorker { .. } => m.create_worker,
            Self::RestartWorker { .. } => m.restart_worker,
            Self::DeleteWorker { .. } => m.delete_worker,
            Self::RunBackup { .. } => m.run_backup,
            Self::DeleteBackupConfig { .. } => m.delete_backup,
            Self::UpdateAliases { .. } => m.update_aliases,
            Self::CreateDatabase { .. } => m.create_database,
            Self::SyncDatabases { .. } => m.sync_databases,
            Self::DeleteDatabase { .. } => m.delete_database,
            Self::CreateDatabaseUser { .. } => m.create_database_user,
            Self::DeleteDatabaseUser { .. } => m.delete_database_user,
            Self::ObtainCertificate { .. } => m.obtain_certificate,
            Self::ActivateCertificate { .. } => m.activate_certificate,
            Self::DeleteCertificate { .. } => m.delete_certificate,
            Self::ExecuteCommand { .. } => m.execute_command,
            Self::InstallRepository { .. } => m.install_repository,
            Self::UpdateBranch { .. } => m.update_branch,
            Self::RemoveRepository { .. } => m.remove_repository,
            Self::CreateSshKey { .. } => m.create_ssh_key,
            Self::DeleteSshKey { .. } => m.delete_ssh_key,
            Self::CreateDaemon { .. } => m.create_daemon,
            Self::RestartDaemon { .. } => m.restart_daemon,
            Self::DeleteDaemon { .. } => m.delete_daemon,
            Self::CreateFirewallRule { .. } => m.create_firewall_rule,
            Self::DeleteFirewallRule { .. } => m.delete_firewall_rule,
            Self::CreateScheduledJob { .. } => m.create_job,
            Self::DeleteScheduledJob { .. } => m.delete_job,
        }
    }

    /// 执行请求
    pub async fn execute(&self, client: &ForgeClient) -> Result<()> {
        match self {
            Self::RebootServer { server_id } => client.reboot_server(*server_id).await,
            Self::Deploy { server_id, site_id } => client.deploy(*server_id, *site_id).await,
            Self::SetQuickDeploy {
                server_id,
                site_id,
                enabled,
            } => client.set_quick_deploy(*server_id, *site_id, *enabled).await,
            Self::ResetDeployment { server_id, site_id } => {
                client.reset_deployment_status(*server_id, *site_id).await
            }
            Self::UpdateDeploymentScript {
                server_id,
                site_id,
                content,
            } => client.update_deployment_script(*server_id, *site_id, content).await,
            Self::UpdateEnvironment {
                server_id,
                site_id,
                content,
            } => client.update_environment(*server_id, *site_id, content).await,
            Self::ClearSiteLog { server_id, site_id } => client.clear_site_logs(*server_id, *site_id).await,
            Self::CreateWorker {
                server_id,
                site_id,
                payload,
            } => client.create_worker(*server_id, *site_id, payload).await.map(drop),
            Self::RestartWorker {
                server_id,
                site_id,
                worker_id,
            } => client.restart_worker(*server_id, *site_id, *worker_id).await,
            Self::DeleteWorker {
                server_id,
                site_id,
                worker_id,
            } => client.delete_worker(*server_id, *site_id, *worker_id).await,
            Self::RunBackup { server_id, config_id } => client.run_backup(*server_id, *config_id).await,
            Self::DeleteBackupConfig { server_id, config_id } => {
                client.delete_backup_config(*server_id, *config_id).await
            }
            Self::UpdateAliases {
                server_id,
                site_id,
                aliases,
            } => client.update_aliases(*server_id, *site_id, aliases).await.map(drop),
            Self::CreateDatabase { server_id, payload } => {
                client.create_database(*server_id, payload).await.map(drop)
            }
            Self::SyncDatabases { server_id } => client.sync_databases(*server_id).await,
            Self::DeleteDatabase { server_id, database_id } => {
                client.delete_database(*server_id, *database_id).await
            }
            Self::CreateDatabaseUser { server_id, payload } => {
                client.create_database_user(*server_id, payload).await.map(drop)
            }
            Self::DeleteDatabaseUser { server_id, user_id } => {
                client.delete_database_user(*server_id, *user_id).await
            }
            Self::ObtainCertificate {
                server_id,
                site_id,
                domains,
            } => client.obtain_letsencrypt(*server_id, *site_id, domains).await.map(drop),
            Self::ActivateCertificate {
                server_id,
                site_id,
                certificate_id,
            } => client.activate_certificate(*server_id, *site_id, *certificate_id).await,
            Self::DeleteCertificate {
                server_id,
                site_id,
                certificate_id,
            } => client.delete_certificate(*server_id, *site_id, *certificate_id).await,
            Self::ExecuteCommand {
                server_id,
                site_id,
                command,
            } => client.execute_command(*server_id, *site_id, command).await.map(drop),
            Self::InstallRepository {
                server_id,
                site_id,
                payload,
            } => client.install_repository(*server_id, *site_id, payload).await,
            Self::UpdateBranch {
                server_id,
                site_id,
                branch,
            } => client.update_repository_branch(*server_id, *site_id, branch).await,
            Self::RemoveRepository { server_id, site_id } => {
                client.remove_repository(*server_id, *site_id).await
            }
            Self::CreateSshKey { server_id, payload } => {
                client.create_ssh_key(*server_id, payload).await.map(drop)
            }
            Self::DeleteSshKey { server_id, key_id } => client.delete_ssh_key(*server_id, *key_id).await,
            Self::CreateDaemon { server_id, payload } => {
                client.create_daemon(*server_id, payload).await.map(drop)
            }
            Self::RestartDaemon { server_id, daemon_id } => {
                client.restart_daemon(*server_id, *daemon_id).await
            }
            Self::DeleteDaemon { server_id, daemon_id } => {
                client.delete_daemon(*server_id, *daemon_id).await
            }
            Self::CreateFirewallRule { server_id, payload } => {
                client.create_firewall_rule(*server_id, payload).await.map(drop)
            }
            Self::DeleteFirewallRule { server_id, rule_id } => {
                client.delete_firewall_rule(*server_id, *rule_id).await
            }
            Self::CreateScheduledJob { server_id, payload } => {
                client.create_job(*server_id, payload).await.map(drop)
            }
            Self::DeleteScheduledJob { server_id, job_id } => client.delete_job(*server_id, *job_id).await,
        }
    }

    /// 由已通过校验的表单构造变更请求
    ///
    /// `data` 是发起表单的面板当前数据（添加别名时需要现有别名），
    /// `ssh_user` 是新 SSH 密钥所属的服务器用户。
    pub fn from_form(
        form: &FormState,
        data: Option<&PanelData>,
        ssh_user: &str,
    ) -> std::result::Result<Self, String> {
        form.validate()?;

        let target = form.target.as_ref().ok_or_else(|| t().notify.no_selection.to_string())?;
        let server_id = target.server_id;
        let site_id = || target.site_id.ok_or_else(|| t().notify.no_selection.to_string());

        let mutation = match form.kind {
            FormKind::CreateWorker => Self::CreateWorker {
                server_id,
                site_id: site_id()?,
                payload: CreateWorker {
                    connection: form.value(0).to_string(),
                    queue: form.value(1).to_string(),
                    processes: parse_count(form.value(2)),
                    ..CreateWorker::default()
                },
            },
            FormKind::AddAlias => {
                let mut aliases = match data {
                    Some(PanelData::Domains(site)) => site.aliases.clone(),
                    _ => Vec::new(),
                };
                let alias = form.value(0).to_string();
                if aliases.contains(&alias) {
                    return Err(t().notify.alias_exists.to_string());
                }
                aliases.push(alias);
                Self::UpdateAliases {
                    server_id,
                    site_id: site_id()?,
                    aliases,
                }
            }
            FormKind::CreateDatabase => Self::CreateDatabase {
                server_id,
                payload: CreateDatabase {
                    name: form.value(0).to_string(),
                    user: form.optional_value(1),
                    password: form.optional_value(2),
                },
            },
            FormKind::CreateDatabaseUser => Self::CreateDatabaseUser {
                server_id,
                payload: CreateDatabaseUser {
                    name: form.value(0).to_string(),
                    password: form.value(1).to_string(),
                    databases: Vec::new(),
                },
            },
            FormKind::ObtainCertificate => Self::ObtainCertificate {
                server_id,
                site_id: site_id()?,
                domains: split_list(form.value(0)),
            },
            FormKind::ExecuteCommand => Self::ExecuteCommand {
                server_id,
                site_id: site_id()?,
                command: form.value(0).to_string(),
            },
            FormKind::InstallRepository => Self::InstallRepository {
                server_id,
                site_id: site_id()?,
                payload: InstallRepository {
                    provider: form.value(0).to_string(),
                    repository: form.value(1).to_string(),
                    branch: form.value(2).to_string(),
                    composer: true,
                },
            },
            FormKind::UpdateBranch => Self::UpdateBranch {
                server_id,
                site_id: site_id()?,
                branch: form.value(0).to_string(),
            },
            FormKind::CreateSshKey => Self::CreateSshKey {
                server_id,
                payload: CreateSshKey {
                    name: form.value(0).to_string(),
                    key: form.value(1).to_string(),
                    username: ssh_user.to_string(),
                },
            },
            FormKind::CreateDaemon => Self::CreateDaemon {
                server_id,
                payload: CreateDaemon {
                    command: form.value(0).to_string(),
                    user: form.value(1).to_string(),
                    directory: form.optional_value(2),
                    processes: 1,
                    startsecs: 1,
                },
            },
            FormKind::CreateFirewallRule => Self::CreateFirewallRule {
                server_id,
                payload: CreateFirewallRule {
                    name: form.value(0).to_string(),
                    port: form.value(1).to_string(),
                    ip_address: form.optional_value(2),
                    rule_type: FirewallRuleType::Allow,
                },
            },
            FormKind::CreateScheduledJob => Self::CreateScheduledJob {
                server_id,
                payload: CreateScheduledJob {
                    command: form.value(0).to_string(),
                    frequency: form.value(1).to_lowercase(),
                    user: form.value(2).to_string(),
                },
            },
            FormKind::ApiKey | FormKind::Config => return Err(t().notify.no_selection.to_string()),
        };

        Ok(mutation)
    }
}

/// 已校验过的整数字段
fn parse_count(value: &str) -> u32 {
    value.parse().unwrap_or(1)
}

/// 逗号分隔的列表，忽略空项
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
