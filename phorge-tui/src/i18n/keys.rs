//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**，表单字段归 `form.*`
//! 3. **面板内容归 `panels.*` / `columns.*` / `fields.*`**
//! 4. **通知文本归 `notify.*`**
//! 5. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub tree: TreeTexts,
    pub panels: PanelTexts,
    pub columns: ColumnTexts,
    pub fields: FieldTexts,
    pub actions: ActionTexts,
    pub mutations: MutationTexts,
    pub form: FormTexts,
    pub modal: ModalTexts,
    pub notify: NotifyTexts,
    pub hints: HintTexts,
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub error: &'static str,
    /// 空值占位
    pub none: &'static str,
}

// ============================================================================
// 导航树
// ============================================================================

pub struct TreeTexts {
    pub title: &'static str,
    pub root: &'static str,
    pub no_ip: &'static str,
    pub loading: &'static str,
    pub server_info: &'static str,
    pub sites: &'static str,
    pub site_info: &'static str,
    pub deployments: &'static str,
    pub deployment_script: &'static str,
    pub logs: &'static str,
    pub environment: &'static str,
    pub workers: &'static str,
    pub backups: &'static str,
    pub domains: &'static str,
    pub databases: &'static str,
    pub database_users: &'static str,
    pub ssl_certificates: &'static str,
    pub commands: &'static str,
    pub git_repository: &'static str,
    pub ssh_keys: &'static str,
    pub daemons: &'static str,
    pub firewall_rules: &'static str,
    pub scheduled_jobs: &'static str,
}

// ============================================================================
// 详情面板
// ============================================================================

pub struct PanelTexts {
    pub placeholder: &'static str,
    pub fallback: &'static str,
    pub failed: &'static str,
    pub empty: &'static str,
    pub masked: &'static str,
    pub server_info: &'static str,
    pub site_info: &'static str,
    pub deployments: &'static str,
    pub deployment_script: &'static str,
    pub logs: &'static str,
    pub environment: &'static str,
    pub workers: &'static str,
    pub backups: &'static str,
    pub domains: &'static str,
    pub databases: &'static str,
    pub database_users: &'static str,
    pub certificates: &'static str,
    pub commands: &'static str,
    pub git: &'static str,
    pub ssh_keys: &'static str,
    pub daemons: &'static str,
    pub firewall_rules: &'static str,
    pub scheduled_jobs: &'static str,
}

/// 列表表头
pub struct ColumnTexts {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub connection: &'static str,
    pub queue: &'static str,
    pub processes: &'static str,
    pub timeout: &'static str,
    pub domain: &'static str,
    pub kind: &'static str,
    pub active: &'static str,
    pub commit: &'static str,
    pub author: &'static str,
    pub message: &'static str,
    pub started: &'static str,
    pub command: &'static str,
    pub user: &'static str,
    pub directory: &'static str,
    pub port: &'static str,
    pub ip: &'static str,
    pub frequency: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub schedule: &'static str,
    pub provider: &'static str,
    pub last_backup: &'static str,
    pub databases: &'static str,
    pub created: &'static str,
    pub synced: &'static str,
    pub alias: &'static str,
}

/// 信息面板字段名
pub struct FieldTexts {
    pub ip_address: &'static str,
    pub private_ip: &'static str,
    pub region: &'static str,
    pub provider: &'static str,
    pub server_type: &'static str,
    pub php_version: &'static str,
    pub database: &'static str,
    pub ubuntu: &'static str,
    pub ssh_port: &'static str,
    pub ready: &'static str,
    pub status: &'static str,
    pub repository: &'static str,
    pub repository_provider: &'static str,
    pub branch: &'static str,
    pub repository_status: &'static str,
    pub quick_deploy: &'static str,
    pub project_type: &'static str,
    pub directory: &'static str,
    pub web_directory: &'static str,
    pub project_directory: &'static str,
    pub aliases: &'static str,
    pub secured: &'static str,
    pub deployment_url: &'static str,
}

/// 面板动作（状态栏提示）
pub struct ActionTexts {
    pub ssh: &'static str,
    pub sftp: &'static str,
    pub reboot: &'static str,
    pub server_log: &'static str,
    pub deploy: &'static str,
    pub quick_deploy: &'static str,
    pub output: &'static str,
    pub latest_log: &'static str,
    pub reset_status: &'static str,
    pub edit: &'static str,
    pub clear: &'static str,
    pub reveal: &'static str,
    pub create: &'static str,
    pub restart: &'static str,
    pub delete: &'static str,
    pub run_backup: &'static str,
    pub sync: &'static str,
    pub activate: &'static str,
    pub install: &'static str,
    pub branch: &'static str,
    pub remove: &'static str,
}

/// 变更操作描述（确认弹窗、通知）
pub struct MutationTexts {
    pub reboot_server: &'static str,
    pub deploy: &'static str,
    pub enable_quick_deploy: &'static str,
    pub disable_quick_deploy: &'static str,
    pub reset_deployment: &'static str,
    pub update_script: &'static str,
    pub update_environment: &'static str,
    pub clear_log: &'static str,
    pub create_worker: &'static str,
    pub restart_worker: &'static str,
    pub delete_worker: &'static str,
    pub run_backup: &'static str,
    pub delete_backup: &'static str,
    pub update_aliases: &'static str,
    pub create_database: &'static str,
    pub sync_databases: &'static str,
    pub delete_database: &'static str,
    pub create_database_user: &'static str,
    pub delete_database_user: &'static str,
    pub obtain_certificate: &'static str,
    pub activate_certificate: &'static str,
    pub delete_certificate: &'static str,
    pub execute_command: &'static str,
    pub install_repository: &'static str,
    pub update_branch: &'static str,
    pub remove_repository: &'static str,
    pub create_ssh_key: &'static str,
    pub delete_ssh_key: &'static str,
    pub create_daemon: &'static str,
    pub restart_daemon: &'static str,
    pub delete_daemon: &'static str,
    pub create_firewall_rule: &'static str,
    pub delete_firewall_rule: &'static str,
    pub create_job: &'static str,
    pub delete_job: &'static str,
}

// ============================================================================
// 表单与弹窗
// ============================================================================

pub struct FormTexts {
    pub required: &'static str,
    pub numeric: &'static str,
    pub submit_hint: &'static str,
    // 标题
    pub new_worker: &'static str,
    pub add_alias: &'static str,
    pub new_database: &'static str,
    pub new_database_user: &'static str,
    pub letsencrypt: &'static str,
    pub run_command: &'static str,
    pub install_repository: &'static str,
    pub change_branch: &'static str,
    pub new_ssh_key: &'static str,
    pub new_daemon: &'static str,
    pub new_firewall_rule: &'static str,
    pub new_job: &'static str,
    pub api_key: &'static str,
    // 字段
    pub connection: &'static str,
    pub queue: &'static str,
    pub processes: &'static str,
    pub alias: &'static str,
    pub name: &'static str,
    pub user: &'static str,
    pub password: &'static str,
    pub domains: &'static str,
    pub domains_hint: &'static str,
    pub command: &'static str,
    pub provider: &'static str,
    pub repository: &'static str,
    pub branch: &'static str,
    pub public_key: &'static str,
    pub directory: &'static str,
    pub port: &'static str,
    pub ip_address: &'static str,
    pub optional: &'static str,
    pub frequency: &'static str,
    pub frequency_hint: &'static str,
    pub key: &'static str,
    pub key_hint: &'static str,
    pub one_of: &'static str,
    // 配置
    pub config: &'static str,
    pub ssh_user: &'static str,
    pub editor: &'static str,
    pub vim_keys: &'static str,
    pub theme: &'static str,
    pub keep_key_hint: &'static str,
    pub yes_no_hint: &'static str,
    pub theme_hint: &'static str,
}

pub struct ModalTexts {
    pub confirm_title: &'static str,
    pub confirm_question: &'static str,
    pub error_title: &'static str,
    pub auth_title: &'static str,
    pub help_title: &'static str,
    pub picker_title: &'static str,
    pub picker_empty: &'static str,
    pub output_title: &'static str,
    pub deployment_output: &'static str,
    pub deployment_log: &'static str,
    pub server_log: &'static str,
    pub close_hint: &'static str,
    // 命令面板
    pub palette_title: &'static str,
    pub palette_empty: &'static str,
    pub palette_hint: &'static str,
    pub palette_switch_server: &'static str,
    pub palette_edit_config: &'static str,
    pub palette_reload: &'static str,
    pub palette_toggle_default: &'static str,
    pub palette_ssh: &'static str,
}

// ============================================================================
// 通知
// ============================================================================

pub struct NotifyTexts {
    pub done: &'static str,
    pub failed: &'static str,
    pub load_servers_failed: &'static str,
    pub load_sites_failed: &'static str,
    pub load_panel_failed: &'static str,
    pub no_ip: &'static str,
    pub no_selection: &'static str,
    pub no_changes: &'static str,
    pub command_failed: &'static str,
    pub editor_failed: &'static str,
    pub no_api_key: &'static str,
    pub key_saved: &'static str,
    pub key_saved_config: &'static str,
    pub key_save_failed: &'static str,
    pub server_not_found: &'static str,
    pub alias_exists: &'static str,
    pub single_mode_only: &'static str,
    pub default_cleared: &'static str,
    pub default_set: &'static str,
    pub default_server_set: &'static str,
    pub default_save_failed: &'static str,
    pub config_saved: &'static str,
    pub config_save_failed: &'static str,
}

// ============================================================================
// 键盘提示与帮助
// ============================================================================

pub struct HintTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub expand: &'static str,
    pub switch_panel: &'static str,
    pub refresh: &'static str,
    pub reload: &'static str,
    pub picker: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub rows: &'static str,
}

pub struct HelpTexts {
    pub global: &'static str,
    pub tree: &'static str,
    pub content: &'static str,
    pub modal: &'static str,
    pub quit: &'static str,
    pub help: &'static str,
    pub switch_focus: &'static str,
    pub reload_tree: &'static str,
    pub refresh_panel: &'static str,
    pub back: &'static str,
    pub move_cursor: &'static str,
    pub first_last: &'static str,
    pub select_toggle: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub reload_sites: &'static str,
    pub picker: &'static str,
    pub rows: &'static str,
    pub panel_actions: &'static str,
    pub fields: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub toggle: &'static str,
    pub toggle_default: &'static str,
    pub palette: &'static str,
    pub config: &'static str,
}
