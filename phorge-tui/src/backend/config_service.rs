//! 配置服务
//!
//! 配置文件位于 `<config dir>/phorge/config.toml`，缺失时使用默认值；
//! 工作目录下的 `.phorge` 文件记录该项目的默认服务器和站点。

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use phorge_api::Server;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::NavigationMode;
use crate::view::theme::Theme;

/// 配置目录名
pub const APP_DIR: &str = "phorge";
/// 项目配置文件名
pub const PROJECT_FILE: &str = ".phorge";
/// 默认的 SSH 用户
pub const DEFAULT_SSH_USER: &str = "forge";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No config directory available on this system")]
    NoConfigDir,

    #[error("Keyring error: {0}")]
    Keyring(String),
}

// ============================================================================
// 配置结构
// ============================================================================

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub forge: ForgeConfig,
    pub editor: EditorConfig,
    pub ui: UiConfig,
    /// 服务器名或 ID → SSH 用户
    pub server_users: BTreeMap<String, String>,
}

/// `[forge]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// 钥匙串和环境变量优先
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    pub ssh_user: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            ssh_user: DEFAULT_SSH_USER.to_string(),
        }
    }
}

/// `[editor]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub command: String,
}

impl EditorConfig {
    /// 实际使用的编辑器：配置 → `$EDITOR` → `vi`
    pub fn resolve(&self) -> String {
        resolve_editor(&self.command, std::env::var("EDITOR").ok().as_deref())
    }
}

fn resolve_editor(configured: &str, env: Option<&str>) -> String {
    [Some(configured), env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|command| !command.is_empty())
        .unwrap_or("vi")
        .to_string()
}

/// `[ui]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub mode: NavigationMode,
    pub theme: Theme,
    pub language: String,
    pub vim_keys: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mode: NavigationMode::default(),
            theme: Theme::default(),
            language: "en-US".to_string(),
            vim_keys: true,
        }
    }
}

impl AppConfig {
    /// 服务器的 SSH 用户：按名称、再按 ID 查 `server_users`，否则使用 `forge.ssh_user`
    pub fn ssh_user_for(&self, server: &Server) -> &str {
        self.server_users
            .get(&server.name)
            .or_else(|| self.server_users.get(&server.id.to_string()))
            .map_or_else(|| self.default_ssh_user(), String::as_str)
    }

    pub fn default_ssh_user(&self) -> &str {
        let user = self.forge.ssh_user.trim();
        if user.is_empty() {
            DEFAULT_SSH_USER
        } else {
            user
        }
    }
}

/// 配置表单可以修改的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEdit {
    pub ssh_user: String,
    pub editor: String,
    pub vim_keys: bool,
    pub theme: Theme,
}

impl ConfigEdit {
    /// 只覆盖表单里的字段，其余配置（语言、模式、server_users）原样保留
    pub fn apply_to(&self, config: &mut AppConfig) {
        config.forge.ssh_user.clone_from(&self.ssh_user);
        config.editor.command.clone_from(&self.editor);
        config.ui.vim_keys = self.vim_keys;
        config.ui.theme = self.theme;
    }
}

// ============================================================================
// 读写
// ============================================================================

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置（文件不存在时返回默认值）
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// 配置文件路径
    fn path(&self) -> &Path;
}

/// 基于 TOML 文件的配置服务
#[derive(Debug, Clone)]
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/phorge/config.toml`
    pub fn default_location() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_DIR).join("config.toml")))
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
            restrict_permissions(dir, 0o700).map_err(write_err)?;
        }
        fs::write(&self.path, content).map_err(write_err)?;
        restrict_permissions(&self.path, 0o600).map_err(write_err)?;

        log::info!("Config saved to {}", self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

// ============================================================================
// 项目配置
// ============================================================================

/// 工作目录下的 `.phorge`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// 默认服务器名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// 默认站点名（属于 `server`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// 切换默认值的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultChange {
    Cleared,
    Server(String),
    Site { server: String, site: String },
}

impl ProjectConfig {
    /// 读取 `dir/.phorge`；文件不存在时返回默认值
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(PROJECT_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// 写入 `dir/.phorge`；没有任何默认值时删除文件
    pub fn save_to(&self, dir: &Path) -> Result<(), ConfigError> {
        let path = dir.join(PROJECT_FILE);
        let write_err = |source| ConfigError::Write {
            path: path.clone(),
            source,
        };

        if self.is_empty() {
            return match fs::remove_file(&path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(write_err(e)),
                _ => Ok(()),
            };
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).map_err(write_err)?;
        log::info!("Project defaults saved to {}", path.display());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.server.is_none() && self.site.is_none()
    }

    pub fn is_default_server(&self, name: &str) -> bool {
        self.server.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(name))
    }

    /// 默认站点：服务器和站点都匹配
    pub fn is_default_site(&self, server: &str, site: &str) -> bool {
        self.is_default_server(server)
            && self.site.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(site))
    }

    /// 切换默认值：已经是默认就清除，否则设为默认
    ///
    /// 只给服务器时，站点一并清除；服务器已是默认但带着站点时改为只设服务器。
    pub fn toggle(&mut self, server: &str, site: Option<&str>) -> DefaultChange {
        match site {
            Some(site) if self.is_default_site(server, site) => {
                self.clear();
                DefaultChange::Cleared
            }
            Some(site) => {
                self.server = Some(server.to_string());
                self.site = Some(site.to_string());
                DefaultChange::Site {
                    server: server.to_string(),
                    site: site.to_string(),
                }
            }
            None if self.is_default_server(server) && self.site.is_none() => {
                self.clear();
                DefaultChange::Cleared
            }
            None => {
                self.server = Some(server.to_string());
                self.site = None;
                DefaultChange::Server(server.to_string())
            }
        }
    }

    fn clear(&mut self) {
        self.server = None;
        self.site = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn server(id: i64, name: &str) -> Server {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    // ---- load / save ----

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = FileConfigService::new(dir.path().join("config.toml"));

        let config = service.load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.forge.ssh_user, "forge");
        assert!(config.ui.vim_keys);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\nmode = \"single\"\ntheme = \"light\"\n\n[server_users]\n\"web-1\" = \"deploy\"\n",
        )
        .unwrap();

        let config = FileConfigService::new(&path).load().unwrap();

        assert_eq!(config.ui.mode, NavigationMode::SingleServer);
        assert_eq!(config.ui.theme, Theme::Light);
        assert_eq!(config.ui.language, "en-US");
        assert_eq!(config.forge.ssh_user, "forge");
        assert_eq!(config.server_users.get("web-1").map(String::as_str), Some("deploy"));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\nmode = ").unwrap();

        let err = FileConfigService::new(&path).load().unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let service = FileConfigService::new(dir.path().join("nested").join("config.toml"));
        let mut config = AppConfig::default();
        config.forge.api_key = "secret".to_string();
        config.ui.mode = NavigationMode::SingleServer;

        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let service = FileConfigService::new(dir.path().join("phorge").join("config.toml"));
        service.save(&AppConfig::default()).unwrap();

        let file_mode = fs::metadata(service.path()).unwrap().permissions().mode();
        let dir_mode = fs::metadata(dir.path().join("phorge")).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);
        assert_eq!(dir_mode & 0o777, 0o700);
    }

    #[test]
    fn config_edit_keeps_untouched_fields() {
        let mut config = AppConfig::default();
        config.ui.language = "zh-CN".to_string();
        config.server_users.insert("web-1".to_string(), "deploy".to_string());
        let edit = ConfigEdit {
            ssh_user: "ops".to_string(),
            editor: "nano".to_string(),
            vim_keys: false,
            theme: Theme::Light,
        };

        edit.apply_to(&mut config);

        assert_eq!(config.forge.ssh_user, "ops");
        assert_eq!(config.editor.command, "nano");
        assert!(!config.ui.vim_keys);
        assert_eq!(config.ui.theme, Theme::Light);
        assert_eq!(config.ui.language, "zh-CN");
        assert_eq!(config.server_users.len(), 1);
    }

    // ---- ssh user / editor ----

    #[test]
    fn ssh_user_prefers_name_then_id() {
        let mut config = AppConfig::default();
        config.server_users.insert("web-1".to_string(), "deploy".to_string());
        config.server_users.insert("7".to_string(), "ops".to_string());

        assert_eq!(config.ssh_user_for(&server(1, "web-1")), "deploy");
        assert_eq!(config.ssh_user_for(&server(7, "db-1")), "ops");
        assert_eq!(config.ssh_user_for(&server(8, "db-2")), "forge");
    }

    #[test]
    fn blank_ssh_user_falls_back() {
        let mut config = AppConfig::default();
        config.forge.ssh_user = "  ".to_string();

        assert_eq!(config.default_ssh_user(), DEFAULT_SSH_USER);
    }

    #[test]
    fn editor_resolution_order() {
        assert_eq!(resolve_editor("nano", Some("vim")), "nano");
        assert_eq!(resolve_editor("", Some("vim")), "vim");
        assert_eq!(resolve_editor(" ", None), "vi");
    }

    // ---- project file ----

    #[test]
    fn project_file_selects_server() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROJECT_FILE), "server = \"web-1\"\n").unwrap();

        let project = ProjectConfig::load_from(dir.path()).unwrap();

        assert_eq!(project.server.as_deref(), Some("web-1"));
    }

    #[test]
    fn missing_project_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(ProjectConfig::load_from(dir.path()).unwrap(), ProjectConfig::default());
    }

    #[test]
    fn project_file_reads_site() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROJECT_FILE), "server = \"web-1\"\nsite = \"example.com\"\n").unwrap();

        let project = ProjectConfig::load_from(dir.path()).unwrap();

        assert!(project.is_default_site("WEB-1", "Example.com"));
    }

    #[test]
    fn project_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let project = ProjectConfig {
            server: Some("web-1".to_string()),
            site: Some("example.com".to_string()),
        };

        project.save_to(dir.path()).unwrap();

        assert_eq!(ProjectConfig::load_from(dir.path()).unwrap(), project);
    }

    #[test]
    fn empty_project_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        fs::write(&path, "server = \"web-1\"\n").unwrap();

        ProjectConfig::default().save_to(dir.path()).unwrap();
        assert!(!path.exists());

        // 再删一次不报错
        ProjectConfig::default().save_to(dir.path()).unwrap();
    }

    // ---- toggle default ----

    #[test]
    fn toggle_server_sets_then_clears() {
        let mut project = ProjectConfig::default();

        assert_eq!(project.toggle("web-1", None), DefaultChange::Server("web-1".to_string()));
        assert_eq!(project.server.as_deref(), Some("web-1"));

        assert_eq!(project.toggle("WEB-1", None), DefaultChange::Cleared);
        assert!(project.is_empty());
    }

    #[test]
    fn toggle_site_sets_then_clears() {
        let mut project = ProjectConfig::default();

        let change = project.toggle("web-1", Some("example.com"));

        assert_eq!(
            change,
            DefaultChange::Site {
                server: "web-1".to_string(),
                site: "example.com".to_string()
            }
        );
        assert_eq!(project.toggle("web-1", Some("example.com")), DefaultChange::Cleared);
        assert!(project.is_empty());
    }

    #[test]
    fn toggle_server_with_default_site_keeps_server_only() {
        let mut project = ProjectConfig {
            server: Some("web-1".to_string()),
            site: Some("example.com".to_string()),
        };

        assert_eq!(project.toggle("web-1", None), DefaultChange::Server("web-1".to_string()));
        assert_eq!(project.server.as_deref(), Some("web-1"));
        assert_eq!(project.site, None);
    }

    #[test]
    fn toggle_other_site_replaces_default() {
        let mut project = ProjectConfig {
            server: Some("web-1".to_string()),
            site: Some("example.com".to_string()),
        };

        project.toggle("web-2", Some("shop.test"));

        assert!(project.is_default_site("web-2", "shop.test"));
        assert!(!project.is_default_server("web-1"));
    }
}
