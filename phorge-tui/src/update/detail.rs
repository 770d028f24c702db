//! 详情面板更新逻辑
//!
//! 面板动作先被翻译成一个 [`Plan`]，再统一执行：
//! 破坏性操作走确认弹窗，创建类操作打开表单，查看类操作发起查询，
//! SSH / SFTP / 编辑器交给主循环挂起终端后执行。

use crate::backend::{EditTarget, ExternalCommand, Lookup, Mutation};
use crate::i18n::t;
use crate::message::DetailMessage;
use crate::model::detail::{Panel, PanelAction, PanelData, PanelInstance, PanelKind};
use crate::model::{App, FormKind, FormState};

/// 处理详情面板消息
pub fn update(app: &mut App, msg: DetailMessage) {
    match msg {
        DetailMessage::SelectPrevious => app.detail.select_previous(),
        DetailMessage::SelectNext => app.detail.select_next(),
        DetailMessage::SelectFirst => app.detail.select_first(),
        DetailMessage::SelectLast => app.detail.select_last(),
        DetailMessage::Action(action) => run_action(app, action),
        DetailMessage::DefaultAction => {
            if let Some(action) = app.detail.panel().and_then(|panel| panel.kind.default_action()) {
                run_action(app, action);
            }
        }
    }
}

/// 在当前实例上重新加载面板
pub fn refresh(app: &mut App) {
    if let Some(request) = app.detail.refresh() {
        log::debug!("Refreshing {:?} ({:?})", request.kind, request.ticket);
        app.backend.fetch_panel(request);
    }
}

// ============================================================================
// 动作
// ============================================================================

/// 动作的执行方式
enum Plan {
    /// 先弹出确认
    Confirm { mutation: Mutation, subject: String },
    /// 直接执行
    Run(Mutation),
    Form(FormState),
    Lookup(Lookup),
    External(ExternalCommand),
}

fn run_action(app: &mut App, action: PanelAction) {
    let Some(panel) = app.detail.panel() else {
        return;
    };
    if !panel.kind.actions().iter().any(|binding| binding.action == action) {
        return;
    }
    if action == PanelAction::Reveal {
        app.detail.toggle_reveal();
        return;
    }

    let instance = panel.instance;
    match plan(app, panel, action) {
        Ok(plan) => execute(app, plan, instance),
        Err(message) => app.notifications.warning(message),
    }
}

fn execute(app: &mut App, plan: Plan, instance: PanelInstance) {
    match plan {
        Plan::Confirm { mutation, subject } => {
            let message = format!("{subject}\n{}", t().modal.confirm_question);
            app.modal
                .show_confirm(mutation.describe(), message, mutation, Some(instance));
        }
        Plan::Run(mutation) => app.backend.run_mutation(mutation, Some(instance)),
        Plan::Form(form) => app.modal.show_form(form),
        Plan::Lookup(lookup) => app.backend.lookup(lookup),
        Plan::External(command) => app.pending_external = Some(command),
    }
}

fn plan(app: &App, panel: &Panel, action: PanelAction) -> Result<Plan, &'static str> {
    let node = &panel.node;
    let server_id = node.server_id;
    let site_id = || node.site_id.ok_or(t().notify.no_selection);
    let site_name = || node.site_name.clone().unwrap_or_else(|| node.label.clone());
    let loaded = || panel.data().ok_or(t().common.loading);
    let row = panel.selected;

    let plan = match action {
        PanelAction::Ssh | PanelAction::Sftp => {
            let host = node.server_ip.clone().ok_or(t().notify.no_ip)?;
            let user = app.ssh_user_for_id(server_id);
            let directory = node.site_directory.clone();
            let command = if action == PanelAction::Ssh {
                ExternalCommand::Ssh {
                    user,
                    host,
                    port: node.ssh_port,
                    directory,
                }
            } else {
                ExternalCommand::sftp(&user, host, node.ssh_port, directory)
            };
            Plan::External(command)
        }

        PanelAction::Reboot => Plan::Confirm {
            mutation: Mutation::RebootServer { server_id },
            subject: server_name(app, server_id),
        },

        PanelAction::ServerLog => Plan::Lookup(Lookup::ServerLog { server_id }),

        PanelAction::Deploy => Plan::Confirm {
            mutation: Mutation::Deploy {
                server_id,
                site_id: site_id()?,
            },
            subject: site_name(),
        },

        PanelAction::ToggleQuickDeploy => {
            let PanelData::Deployments { site, .. } = loaded()? else {
                return Err(t().common.loading);
            };
            Plan::Run(Mutation::SetQuickDeploy {
                server_id,
                site_id: site_id()?,
                enabled: !site.quick_deploy,
            })
        }

        PanelAction::DeploymentOutput => {
            let PanelData::Deployments { deployments, .. } = loaded()? else {
                return Err(t().common.loading);
            };
            let deployment = pick(deployments, row)?;
            Plan::Lookup(Lookup::DeploymentOutput {
                server_id,
                site_id: site_id()?,
                deployment_id: deployment.id,
            })
        }

        PanelAction::DeploymentLog => Plan::Lookup(Lookup::DeploymentLog {
            server_id,
            site_id: site_id()?,
        }),

        PanelAction::ResetDeployment => Plan::Run(Mutation::ResetDeployment {
            server_id,
            site_id: site_id()?,
        }),

        PanelAction::Edit => {
            let site_id = site_id()?;
            let (target, content) = match loaded()? {
                PanelData::Text(text) => (EditTarget::DeploymentScript { server_id, site_id }, text.clone()),
                PanelData::Environment { raw, .. } => (EditTarget::Environment { server_id, site_id }, raw.clone()),
                _ => return Err(t().common.loading),
            };
            Plan::External(ExternalCommand::Edit {
                target,
                content,
                instance: Some(panel.instance),
                editor: app.config.editor.resolve(),
            })
        }

        PanelAction::ClearLog => Plan::Confirm {
            mutation: Mutation::ClearSiteLog {
                server_id,
                site_id: site_id()?,
            },
            subject: site_name(),
        },

        PanelAction::Create => Plan::Form(create_form(app, panel)?),

        PanelAction::Restart => {
            let (mutation, subject) = match loaded()? {
                PanelData::Workers(workers) => {
                    let worker = pick(workers, row)?;
                    let mutation = Mutation::RestartWorker {
                        server_id,
                        site_id: site_id()?,
                        worker_id: worker.id,
                    };
                    (mutation, worker_subject(worker))
                }
                PanelData::Daemons(daemons) => {
                    let daemon = pick(daemons, row)?;
                    let mutation = Mutation::RestartDaemon {
                        server_id,
                        daemon_id: daemon.id,
                    };
                    (mutation, daemon.command.clone())
                }
                _ => return Err(t().notify.no_selection),
            };
            Plan::Confirm { mutation, subject }
        }

        PanelAction::Delete => {
            let (mutation, subject) = delete_mutation(panel, loaded()?)?;
            Plan::Confirm { mutation, subject }
        }

        PanelAction::RunBackup => {
            let PanelData::Backups(configs) = loaded()? else {
                return Err(t().notify.no_selection);
            };
            let config = pick(configs, row)?;
            Plan::Confirm {
                mutation: Mutation::RunBackup {
                    server_id,
                    config_id: config.id,
                },
                subject: backup_subject(config),
            }
        }

        PanelAction::Sync => Plan::Run(Mutation::SyncDatabases { server_id }),

        PanelAction::Activate => {
            let PanelData::Certificates(certificates) = loaded()? else {
                return Err(t().notify.no_selection);
            };
            let certificate = pick(certificates, row)?;
            Plan::Confirm {
                mutation: Mutation::ActivateCertificate {
                    server_id,
                    site_id: site_id()?,
                    certificate_id: certificate.id,
                },
                subject: certificate_subject(certificate),
            }
        }

        PanelAction::InstallRepository => Plan::Form(
            FormState::new(FormKind::InstallRepository, Some(node.clone()), Some(panel.instance))
                .with_values(["github", "", "main"]),
        ),

        PanelAction::UpdateBranch => {
            let branch = match panel.data() {
                Some(PanelData::Git(site)) => site.repository_branch.clone().unwrap_or_default(),
                _ => String::new(),
            };
            Plan::Form(
                FormState::new(FormKind::UpdateBranch, Some(node.clone()), Some(panel.instance))
                    .with_values([branch]),
            )
        }

        PanelAction::RemoveRepository => Plan::Confirm {
            mutation: Mutation::RemoveRepository {
                server_id,
                site_id: site_id()?,
            },
            subject: site_name(),
        },

        // 在 run_action 中直接处理
        PanelAction::Reveal => return Err(t().notify.no_selection),
    };

    Ok(plan)
}

fn pick<T>(items: &[T], row: usize) -> Result<&T, &'static str> {
    items.get(row).ok_or(t().notify.no_selection)
}

/// 创建表单（带预填值）
fn create_form(app: &App, panel: &Panel) -> Result<FormState, &'static str> {
    let ssh_user = app.ssh_user_for_id(panel.node.server_id);
    let site_name = panel.node.site_name.clone().unwrap_or_default();

    let (kind, values): (FormKind, Vec<String>) = match panel.kind {
        PanelKind::Workers => (
            FormKind::CreateWorker,
            vec!["redis".into(), "default".into(), "1".into()],
        ),
        PanelKind::Domains => (FormKind::AddAlias, Vec::new()),
        PanelKind::Databases => (FormKind::CreateDatabase, Vec::new()),
        PanelKind::DatabaseUsers => (FormKind::CreateDatabaseUser, Vec::new()),
        PanelKind::Certificates => (FormKind::ObtainCertificate, vec![site_name]),
        PanelKind::Commands => (FormKind::ExecuteCommand, Vec::new()),
        PanelKind::SshKeys => (FormKind::CreateSshKey, Vec::new()),
        PanelKind::Daemons => (FormKind::CreateDaemon, vec![String::new(), ssh_user]),
        PanelKind::FirewallRules => (FormKind::CreateFirewallRule, Vec::new()),
        PanelKind::ScheduledJobs => (
            FormKind::CreateScheduledJob,
            vec![String::new(), "nightly".into(), ssh_user],
        ),
        _ => return Err(t().notify.no_selection),
    };

    Ok(FormState::new(kind, Some(panel.node.clone()), Some(panel.instance)).with_values(values))
}

/// 删除选中行
fn delete_mutation(panel: &Panel, data: &PanelData) -> Result<(Mutation, String), &'static str> {
    let server_id = panel.node.server_id;
    let site_id = || panel.node.site_id.ok_or(t().notify.no_selection);
    let row = panel.selected;

    let deletion = match data {
        PanelData::Workers(items) => {
            let worker = pick(items, row)?;
            let mutation = Mutation::DeleteWorker {
                server_id,
                site_id: site_id()?,
                worker_id: worker.id,
            };
            (mutation, worker_subject(worker))
        }
        PanelData::Backups(items) => {
            let config = pick(items, row)?;
            let mutation = Mutation::DeleteBackupConfig {
                server_id,
                config_id: config.id,
            };
            (mutation, backup_subject(config))
        }
        // 别名没有独立的删除接口，提交去掉该别名后的完整列表
        PanelData::Domains(site) => {
            let alias = pick(&site.aliases, row)?;
            let aliases = site.aliases.iter().filter(|a| *a != alias).cloned().collect();
            let mutation = Mutation::UpdateAliases {
                server_id,
                site_id: site_id()?,
                aliases,
            };
            (mutation, alias.clone())
        }
        PanelData::Databases(items) => {
            let database = pick(items, row)?;
            let mutation = Mutation::DeleteDatabase {
                server_id,
                database_id: database.id,
            };
            (mutation, database.name.clone())
        }
        PanelData::DatabaseUsers(items) => {
            let user = pick(items, row)?;
            let mutation = Mutation::DeleteDatabaseUser {
                server_id,
                user_id: user.id,
            };
            (mutation, user.name.clone())
        }
        PanelData::Certificates(items) => {
            let certificate = pick(items, row)?;
            let mutation = Mutation::DeleteCertificate {
                server_id,
                site_id: site_id()?,
                certificate_id: certificate.id,
            };
            (mutation, certificate_subject(certificate))
        }
        PanelData::SshKeys(items) => {
            let key = pick(items, row)?;
            let mutation = Mutation::DeleteSshKey {
                server_id,
                key_id: key.id,
            };
            (mutation, key.name.clone())
        }
        PanelData::Daemons(items) => {
            let daemon = pick(items, row)?;
            let mutation = Mutation::DeleteDaemon {
                server_id,
                daemon_id: daemon.id,
            };
            (mutation, daemon.command.clone())
        }
        PanelData::FirewallRules(items) => {
            let rule = pick(items, row)?;
            let mutation = Mutation::DeleteFirewallRule {
                server_id,
                rule_id: rule.id,
            };
            (mutation, rule.name.clone())
        }
        PanelData::ScheduledJobs(items) => {
            let job = pick(items, row)?;
            let mutation = Mutation::DeleteScheduledJob {
                server_id,
                job_id: job.id,
            };
            (mutation, job.command.clone())
        }
        _ => return Err(t().notify.no_selection),
    };

    Ok(deletion)
}

// ============================================================================
// 确认弹窗中的对象名
// ============================================================================

fn server_name(app: &App, server_id: i64) -> String {
    app.servers
        .get(&server_id)
        .map_or_else(|| format!("#{server_id}"), |server| server.name.clone())
}

fn worker_subject(worker: &phorge_api::Worker) -> String {
    format!(
        "#{} {}:{}",
        worker.id,
        worker.connection.as_deref().unwrap_or("-"),
        worker.queue.as_deref().unwrap_or("-")
    )
}

fn backup_subject(config: &phorge_api::BackupConfig) -> String {
    format!("#{} {}", config.id, config.provider.as_deref().unwrap_or("-"))
}

fn certificate_subject(certificate: &phorge_api::Certificate) -> String {
    format!("#{} {}", certificate.id, certificate.domain.as_deref().unwrap_or("-"))
}
