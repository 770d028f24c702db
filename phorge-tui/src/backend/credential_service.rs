//! 凭证存储服务
//!
//! 使用系统钥匙串保存 Forge API 密钥，并按固定优先级解析启动时使用的密钥。

use std::sync::{Mutex, PoisonError};

use keyring::Entry;

use super::config_service::{AppConfig, ConfigError};

const SERVICE_NAME: &str = "phorge";
const API_KEY_USER: &str = "api-key";

/// 凭证存储 trait
pub trait CredentialStore: Send + Sync {
    /// 读取 API 密钥（不存在时返回 None）
    fn load(&self) -> Result<Option<String>, ConfigError>;

    /// 保存 API 密钥
    fn save(&self, api_key: &str) -> Result<(), ConfigError>;
}

/// 基于系统钥匙串的凭证存储
///
/// 使用 keyring crate 将密钥安全存储到：
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
pub struct KeyringCredentialStore {
    /// 内存缓存，避免频繁访问钥匙串
    cache: Mutex<Option<String>>,
}

impl KeyringCredentialStore {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    fn entry() -> Result<Entry, ConfigError> {
        Entry::new(SERVICE_NAME, API_KEY_USER)
            .map_err(|e| ConfigError::Keyring(format!("Failed to create entry: {e}")))
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn load(&self) -> Result<Option<String>, ConfigError> {
        // 尝试从缓存返回
        if let Some(key) = self.cache.lock().unwrap_or_else(PoisonError::into_inner).clone() {
            return Ok(Some(key));
        }

        let key = match Self::entry()?.get_password() {
            Ok(key) if !key.trim().is_empty() => key,
            Ok(_) | Err(keyring::Error::NoEntry) => return Ok(None),
            Err(e) => return Err(ConfigError::Keyring(format!("Failed to load: {e}"))),
        };

        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = Some(key.clone());
        Ok(Some(key))
    }

    fn save(&self, api_key: &str) -> Result<(), ConfigError> {
        Self::entry()?
            .set_password(api_key)
            .map_err(|e| ConfigError::Keyring(format!("Failed to save: {e}")))?;

        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = Some(api_key.to_string());
        Ok(())
    }
}

/// 密钥来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// `--api-key` 或 `FORGE_API_KEY`
    Cli,
    Keyring,
    Config,
}

/// 按优先级解析 API 密钥：命令行/环境变量 → 钥匙串 → 配置文件
///
/// 钥匙串不可用只记录日志，继续尝试配置文件。
pub fn resolve_api_key(
    cli: Option<&str>,
    store: &dyn CredentialStore,
    config: &AppConfig,
) -> Option<(String, KeySource)> {
    let non_empty = |key: &str| {
        let key = key.trim();
        (!key.is_empty()).then(|| key.to_string())
    };

    if let Some(key) = cli.and_then(non_empty) {
        return Some((key, KeySource::Cli));
    }

    match store.load() {
        Ok(Some(key)) => {
            if let Some(key) = non_empty(&key) {
                return Some((key, KeySource::Keyring));
            }
        }
        Ok(None) => {}
        Err(e) => log::warn!("Keyring unavailable: {e}"),
    }

    non_empty(&config.forge.api_key).map(|key| (key, KeySource::Config))
}
