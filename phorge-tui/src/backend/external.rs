//! 外部命令（SSH、SFTP、编辑器）
//!
//! 这些命令需要独占终端：主循环先挂起 TUI，再调用 [`ExternalCommand::run`]，
//! 结束后恢复终端并把 [`ExternalOutcome`] 交给 update 层。

use std::fs;
use std::process::Command;

use crate::i18n::t;
use crate::model::detail::PanelInstance;

use super::mutation::Mutation;

/// 在编辑器中修改的远端文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    DeploymentScript { server_id: i64, site_id: i64 },
    Environment { server_id: i64, site_id: i64 },
}

impl EditTarget {
    /// 临时文件名，让编辑器选对语法高亮
    pub fn file_name(self) -> &'static str {
        match self {
            Self::DeploymentScript { .. } => "deploy.sh",
            Self::Environment { .. } => ".env",
        }
    }

    fn into_mutation(self, content: String) -> Mutation {
        match self {
            Self::DeploymentScript { server_id, site_id } => Mutation::UpdateDeploymentScript {
                server_id,
                site_id,
                content,
            },
            Self::Environment { server_id, site_id } => Mutation::UpdateEnvironment {
                server_id,
                site_id,
                content,
            },
        }
    }
}

/// 需要挂起终端执行的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalCommand {
    Ssh {
        user: String,
        host: String,
        port: u16,
        /// 登录后进入的目录
        directory: Option<String>,
    },
    Sftp {
        user: String,
        host: String,
        port: u16,
        directory: String,
    },
    Edit {
        target: EditTarget,
        content: String,
        instance: Option<PanelInstance>,
        editor: String,
    },
}

/// 外部命令的结果
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalOutcome {
    /// 正常退出
    Finished,
    /// 启动失败或非零退出
    Failed(String),
    /// 编辑后内容有变化，需要提交
    Edited {
        mutation: Mutation,
        instance: Option<PanelInstance>,
    },
    /// 编辑后内容未变
    Unchanged,
}

impl ExternalCommand {
    /// SFTP 命令；未知目录时使用用户主目录
    pub fn sftp(user: &str, host: String, port: u16, directory: Option<String>) -> Self {
        Self::Sftp {
            directory: directory.unwrap_or_else(|| format!("/home/{user}")),
            user: user.to_string(),
            host,
            port,
        }
    }

    /// SSH / SFTP 的程序和参数（编辑器命令返回 None）
    pub fn program_and_args(&self) -> Option<(String, Vec<String>)> {
        match self {
            Self::Ssh {
                user,
                host,
                port,
                directory,
            } => {
                let mut args = vec![
                    "-t".to_string(),
                    "-p".to_string(),
                    port.to_string(),
                    format!("{user}@{host}"),
                ];
                if let Some(dir) = directory {
                    args.push(format!("cd {} && exec $SHELL -l", shell_quote(dir)));
                }
                Some(("ssh".to_string(), args))
            }
            Self::Sftp {
                user,
                host,
                port,
                directory,
            } => Some((
                "termscp".to_string(),
                vec![format!("sftp://{user}@{host}:{port}:{directory}")],
            )),
            Self::Edit { .. } => None,
        }
    }

    /// 同步执行（调用方负责挂起 / 恢复终端）
    pub fn run(self) -> ExternalOutcome {
        if let Some((program, args)) = self.program_and_args() {
            log::info!("Running {program} {}", args.join(" "));
            return status_outcome(&program, Command::new(&program).args(&args).status());
        }

        match self {
            Self::Edit {
                target,
                content,
                instance,
                editor,
            } => edit(target, &content, instance, &editor),
            Self::Ssh { .. } | Self::Sftp { .. } => ExternalOutcome::Finished,
        }
    }
}

/// 远端 shell 的单引号转义：`'` 写成 `'\''`
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn status_outcome(program: &str, status: std::io::Result<std::process::ExitStatus>) -> ExternalOutcome {
    match status {
        Ok(status) if status.success() => ExternalOutcome::Finished,
        Ok(status) => {
            log::warn!("{program} exited with {status}");
            ExternalOutcome::Failed(format!("{}: {program} ({status})", t().notify.command_failed))
        }
        Err(e) => {
            log::warn!("Failed to start {program}: {e}");
            ExternalOutcome::Failed(format!("{}: {program} ({e})", t().notify.command_failed))
        }
    }
}

/// 写入临时文件、运行编辑器、读回内容
fn edit(target: EditTarget, content: &str, instance: Option<PanelInstance>, editor: &str) -> ExternalOutcome {
    let failed = |detail: String| {
        log::warn!("Editor failed: {detail}");
        ExternalOutcome::Failed(format!("{}: {detail}", t().notify.editor_failed))
    };

    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => return failed(e.to_string()),
    };
    let path = dir.path().join(target.file_name());
    if let Err(e) = fs::write(&path, content) {
        return failed(e.to_string());
    }

    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        return failed(editor.to_string());
    };
    log::info!("Editing {} with {editor}", target.file_name());

    match status_outcome(program, Command::new(program).args(parts).arg(&path).status()) {
        ExternalOutcome::Finished => {}
        other => return other,
    }

    match fs::read_to_string(&path) {
        Ok(edited) if edited == content => ExternalOutcome::Unchanged,
        Ok(edited) => ExternalOutcome::Edited {
            mutation: target.into_mutation(edited),
            instance,
        },
        Err(e) => failed(e.to_string()),
    }
}
