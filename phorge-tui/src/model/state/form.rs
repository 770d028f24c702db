//! 输入表单
//!
//! 每种表单由 [`FormKind`] 决定字段列表；提交前只做本地校验（必填、整数、选项），
//! 通过后才会转换成变更请求发给 API。配置表单例外，提交后直接写配置文件。

use crate::i18n::t;
use crate::model::detail::PanelInstance;
use crate::model::node::NodeData;

/// 表单类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    CreateWorker,
    AddAlias,
    CreateDatabase,
    CreateDatabaseUser,
    ObtainCertificate,
    ExecuteCommand,
    InstallRepository,
    UpdateBranch,
    CreateSshKey,
    CreateDaemon,
    CreateFirewallRule,
    CreateScheduledJob,
    /// 首次启动时录入 API 密钥
    ApiKey,
    /// 编辑 config.toml
    Config,
}

/// 是 / 否
const YES_NO: &[&str] = &["yes", "no"];
/// 可选主题
const THEMES: &[&str] = &["dark", "light"];

/// 配置表单的字段顺序
pub mod config_field {
    pub const API_KEY: usize = 0;
    pub const SSH_USER: usize = 1;
    pub const EDITOR: usize = 2;
    pub const VIM_KEYS: usize = 3;
    pub const THEME: usize = 4;
}

/// 字段定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub hint: Option<&'static str>,
    pub required: bool,
    pub numeric: bool,
    pub secret: bool,
    /// 只接受这些值（忽略大小写）
    pub choices: Option<&'static [&'static str]>,
}

impl FormField {
    const fn required(label: &'static str) -> Self {
        Self {
            label,
            hint: None,
            required: true,
            numeric: false,
            secret: false,
            choices: None,
        }
    }

    const fn optional(label: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(label)
        }
    }

    const fn numeric(self) -> Self {
        Self { numeric: true, ..self }
    }

    const fn secret(self) -> Self {
        Self { secret: true, ..self }
    }

    const fn choices(self, choices: &'static [&'static str]) -> Self {
        Self {
            choices: Some(choices),
            ..self
        }
    }

    const fn hint(self, hint: &'static str) -> Self {
        Self {
            hint: Some(hint),
            ..self
        }
    }
}

impl FormKind {
    pub fn title(self) -> &'static str {
        let f = &t().form;
        match self {
            Self::CreateWorker => f.new_worker,
            Self::AddAlias => f.add_alias,
            Self::CreateDatabase => f.new_database,
            Self::CreateDatabaseUser => f.new_database_user,
            Self::ObtainCertificate => f.letsencrypt,
            Self::ExecuteCommand => f.run_command,
            Self::InstallRepository => f.install_repository,
            Self::UpdateBranch => f.change_branch,
            Self::CreateSshKey => f.new_ssh_key,
            Self::CreateDaemon => f.new_daemon,
            Self::CreateFirewallRule => f.new_firewall_rule,
            Self::CreateScheduledJob => f.new_job,
            Self::ApiKey => f.api_key,
            Self::Config => f.config,
        }
    }

    pub fn fields(self) -> Vec<FormField> {
        let f = &t().form;
        match self {
            Self::CreateWorker => vec![
                FormField::required(f.connection),
                FormField::required(f.queue),
                FormField::required(f.processes).numeric(),
            ],
            Self::AddAlias => vec![FormField::required(f.alias)],
            Self::CreateDatabase => vec![
                FormField::required(f.name),
                FormField::optional(f.user).hint(f.optional),
                FormField::optional(f.password).hint(f.optional).secret(),
            ],
            Self::CreateDatabaseUser => vec![
                FormField::required(f.name),
                FormField::required(f.password).secret(),
            ],
            Self::ObtainCertificate => vec![FormField::required(f.domains).hint(f.domains_hint)],
            Self::ExecuteCommand => vec![FormField::required(f.command)],
            Self::InstallRepository => vec![
                FormField::required(f.provider),
                FormField::required(f.repository),
                FormField::required(f.branch),
            ],
            Self::UpdateBranch => vec![FormField::required(f.branch)],
            Self::CreateSshKey => vec![
                FormField::required(f.name),
                FormField::required(f.public_key),
            ],
            Self::CreateDaemon => vec![
                FormField::required(f.command),
                FormField::required(f.user),
                FormField::optional(f.directory).hint(f.optional),
            ],
            Self::CreateFirewallRule => vec![
                FormField::required(f.name),
                FormField::required(f.port),
                FormField::optional(f.ip_address).hint(f.optional),
            ],
            Self::CreateScheduledJob => vec![
                FormField::required(f.command),
                FormField::required(f.frequency).hint(f.frequency_hint),
                FormField::required(f.user),
            ],
            Self::ApiKey => vec![FormField::required(f.key).hint(f.key_hint).secret()],
            Self::Config => vec![
                FormField::optional(f.key).hint(f.keep_key_hint).secret(),
                FormField::required(f.ssh_user),
                FormField::optional(f.editor).hint(f.optional),
                FormField::required(f.vim_keys).hint(f.yes_no_hint).choices(YES_NO),
                FormField::required(f.theme).hint(f.theme_hint).choices(THEMES),
            ],
        }
    }
}

/// 表单状态
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub kind: FormKind,
    pub values: Vec<String>,
    pub focus: usize,
    pub error: Option<String>,
    /// 发起表单的节点
    pub target: Option<NodeData>,
    /// 发起表单的面板实例（提交成功后刷新）
    pub instance: Option<PanelInstance>,
}

impl FormState {
    pub fn new(kind: FormKind, target: Option<NodeData>, instance: Option<PanelInstance>) -> Self {
        let count = kind.fields().len();
        Self {
            kind,
            values: vec![String::new(); count],
            focus: 0,
            error: None,
            target,
            instance,
        }
    }

    /// 预填字段（多余的值被忽略）
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (slot, value) in self.values.iter_mut().zip(values) {
            *slot = value.into();
        }
        self
    }

    /// 去掉首尾空白后的字段值
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map_or("", |value| value.trim())
    }

    /// 可选字段：空串视为 None
    pub fn optional_value(&self, index: usize) -> Option<String> {
        let value = self.value(index);
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn next_field(&mut self) {
        if !self.values.is_empty() {
            self.focus = (self.focus + 1) % self.values.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.values.is_empty() {
            self.focus = (self.focus + self.values.len() - 1) % self.values.len();
        }
    }

    pub fn input(&mut self, c: char) {
        if let Some(value) = self.values.get_mut(self.focus) {
            value.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.focus) {
            value.pop();
        }
    }

    /// 本地校验：必填字段非空，数字字段能解析为非负整数，选项字段在列表内
    pub fn validate(&self) -> Result<(), String> {
        let texts = &t().form;
        for (index, field) in self.kind.fields().iter().enumerate() {
            let value = self.value(index);
            if field.required && value.is_empty() {
                return Err(format!("{} {}", field.label, texts.required));
            }
            if field.numeric && !value.is_empty() && value.parse::<u32>().is_err() {
                return Err(format!("{} {}", field.label, texts.numeric));
            }
            if let Some(choices) = field.choices {
                if !value.is_empty() && !choices.iter().any(|c| c.eq_ignore_ascii_case(value)) {
                    return Err(format!("{} {} {}", field.label, texts.one_of, choices.join(", ")));
                }
            }
        }
        Ok(())
    }
}
