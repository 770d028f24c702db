//! Forge API records
//!
//! Unknown fields are ignored. Collections and booleans that the API may send
//! as `null` are normalized to empty/false so callers never see `Option<Vec<_>>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::utils::datetime;

// ============================================================================
// Deserialization helpers
// ============================================================================

/// `null` → `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number or string → `Option<String>` (firewall ports, backup sizes, durations).
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

const DEFAULT_SSH_PORT: u16 = 22;
const DEFAULT_WORKER_TIMEOUT: u32 = 60;
const DEFAULT_WORKER_SLEEP: u32 = 3;

fn default_ssh_port() -> u16 {
    DEFAULT_SSH_PORT
}

fn ssh_port<'de, D: Deserializer<'de>>(d: D) -> Result<u16, D::Error> {
    Ok(Option::<u16>::deserialize(d)?.unwrap_or(DEFAULT_SSH_PORT))
}

fn default_worker_timeout() -> u32 {
    DEFAULT_WORKER_TIMEOUT
}

fn worker_timeout<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(d)?.unwrap_or(DEFAULT_WORKER_TIMEOUT))
}

fn default_worker_sleep() -> u32 {
    DEFAULT_WORKER_SLEEP
}

fn worker_sleep<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(d)?.unwrap_or(DEFAULT_WORKER_SLEEP))
}

fn one() -> u32 {
    1
}

fn count_or_one<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(d)?.unwrap_or(1))
}

fn yes() -> bool {
    true
}

// ============================================================================
// Account & servers
// ============================================================================

/// The account owning the API key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A provisioned server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Server {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub private_ip_address: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub php_version: Option<String>,
    #[serde(default)]
    pub php_cli_version: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default, rename = "type")]
    pub server_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_ready: bool,
    #[serde(default)]
    pub database_type: Option<String>,
    #[serde(default = "default_ssh_port", deserialize_with = "ssh_port")]
    pub ssh_port: u16,
    #[serde(default)]
    pub ubuntu_version: Option<String>,
    #[serde(default)]
    pub db_status: Option<String>,
    #[serde(default)]
    pub redis_status: Option<String>,
}

/// A site hosted on a server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Site {
    pub id: i64,
    #[serde(default)]
    pub server_id: Option<i64>,
    pub name: String,
    /// Public directory relative to the project root, e.g. `/public`.
    #[serde(default)]
    pub directory: Option<String>,
    /// Absolute web root, e.g. `/home/forge/example.com/public`.
    #[serde(default)]
    pub web_directory: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub repository_provider: Option<String>,
    #[serde(default)]
    pub repository_branch: Option<String>,
    #[serde(default)]
    pub repository_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quick_deploy: bool,
    #[serde(default)]
    pub deployment_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub php_version: Option<String>,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wildcards: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_secured: bool,
}

// ============================================================================
// Site resources
// ============================================================================

/// One entry of a site's deployment history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deployment {
    pub id: i64,
    #[serde(default)]
    pub site_id: Option<i64>,
    #[serde(default)]
    pub commit_hash: Option<String>,
    #[serde(default)]
    pub commit_author: Option<String>,
    #[serde(default)]
    pub commit_message: Option<String>,
    #[serde(default, deserialize_with = "datetime::deserialize")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "datetime::deserialize")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub displayable_type: Option<String>,
}

impl Deployment {
    /// Abbreviated commit hash.
    pub fn short_hash(&self) -> &str {
        self.commit_hash
            .as_deref()
            .map_or("", |h| h.get(..7).unwrap_or(h))
    }
}

/// A queue worker attached to a site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Worker {
    pub id: i64,
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default)]
    pub queue: Option<String>,
    #[serde(default = "default_worker_timeout", deserialize_with = "worker_timeout")]
    pub timeout: u32,
    #[serde(default = "default_worker_sleep", deserialize_with = "worker_sleep")]
    pub sleep: u32,
    #[serde(default = "one", deserialize_with = "count_or_one")]
    pub processes: u32,
    #[serde(default = "yes", deserialize_with = "null_as_default")]
    pub daemon: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub force: bool,
    #[serde(default)]
    pub status: Option<String>,
}

/// An SSL certificate installed on a site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certificate {
    pub id: i64,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, rename = "type")]
    pub certificate_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub existing: bool,
}

/// A command run in a site's directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteCommand {
    pub id: i64,
    #[serde(default)]
    pub site_id: Option<i64>,
    pub command: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

// ============================================================================
// Server resources
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Database {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default = "yes")]
    pub is_synced: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Ids of the databases this user can access.
    #[serde(default, deserialize_with = "null_as_default")]
    pub databases: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshKey {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// A supervisor-managed background process.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Daemon {
    pub id: i64,
    pub command: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default = "one", deserialize_with = "count_or_one")]
    pub processes: u32,
    #[serde(default = "one", deserialize_with = "count_or_one")]
    pub startsecs: u32,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FirewallRule {
    pub id: i64,
    pub name: String,
    /// A single port or a range such as `"8000:8100"`.
    #[serde(default, deserialize_with = "string_or_number")]
    pub port: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default, rename = "type")]
    pub rule_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A cron entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduledJob {
    pub id: i64,
    pub command: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub cron: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A backup schedule and its recent runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackupConfig {
    pub id: i64,
    #[serde(default)]
    pub day_of_week: Option<u8>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub databases: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backups: Vec<Backup>,
}

impl BackupConfig {
    /// Most recent run, by date.
    pub fn last_backup(&self) -> Option<&Backup> {
        self.backups.iter().max_by_key(|b| b.date)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Backup {
    pub id: i64,
    #[serde(default)]
    pub backup_configuration_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "datetime::deserialize")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    // ---- null normalization ----

    #[test]
    fn server_nulls_become_defaults() {
        let server: Server = serde_json::from_value(json!({
            "id": 1,
            "name": "web-1",
            "ip_address": null,
            "is_ready": null,
            "ssh_port": null,
            "network": null,
            "unexpected": {"nested": true}
        }))
        .unwrap();
        assert_eq!(server.ip_address, None);
        assert!(!server.is_ready);
        assert_eq!(server.ssh_port, 22);
    }

    #[test]
    fn server_missing_port_defaults_to_22() {
        let server: Server = serde_json::from_value(json!({"id": 1, "name": "a"})).unwrap();
        assert_eq!(server.ssh_port, 22);
    }

    #[test]
    fn site_null_aliases_and_flags() {
        let site: Site = serde_json::from_value(json!({
            "id": 7,
            "name": "example.com",
            "aliases": null,
            "quick_deploy": null,
            "wildcards": null,
            "is_secured": true,
            "web_directory": "/home/forge/example.com/public",
            "directory": "/public"
        }))
        .unwrap();
        assert!(site.aliases.is_empty());
        assert!(!site.quick_deploy);
        assert!(site.is_secured);
        assert_eq!(site.directory.as_deref(), Some("/public"));
    }

    #[test]
    fn worker_null_numbers_use_forge_defaults() {
        let worker: Worker = serde_json::from_value(json!({
            "id": 3,
            "timeout": null,
            "sleep": null,
            "processes": null,
            "daemon": null
        }))
        .unwrap();
        assert_eq!((worker.timeout, worker.sleep, worker.processes), (60, 3, 1));
        assert!(!worker.daemon);
    }

    #[test]
    fn worker_missing_daemon_is_true() {
        let worker: Worker = serde_json::from_value(json!({"id": 3})).unwrap();
        assert!(worker.daemon);
        assert!(!worker.force);
    }

    #[test]
    fn database_user_null_databases() {
        let user: DatabaseUser =
            serde_json::from_value(json!({"id": 1, "name": "forge", "databases": null})).unwrap();
        assert!(user.databases.is_empty());
    }

    // ---- flexible scalars ----

    #[test]
    fn firewall_port_accepts_number_or_range() {
        let a: FirewallRule =
            serde_json::from_value(json!({"id": 1, "name": "http", "port": 80})).unwrap();
        let b: FirewallRule =
            serde_json::from_value(json!({"id": 2, "name": "range", "port": "8000:8100"})).unwrap();
        assert_eq!(a.port.as_deref(), Some("80"));
        assert_eq!(b.port.as_deref(), Some("8000:8100"));
    }

    #[test]
    fn deployment_timestamps_and_short_hash() {
        let d: Deployment = serde_json::from_value(json!({
            "id": 9,
            "commit_hash": "abcdef1234567",
            "started_at": "2024-05-01 12:30:00",
            "ended_at": "not a date"
        }))
        .unwrap();
        assert_eq!(d.short_hash(), "abcdef1");
        assert!(d.started_at.is_some());
        assert!(d.ended_at.is_none());
    }

    #[test]
    fn backup_config_last_backup() {
        let config: BackupConfig = serde_json::from_value(json!({
            "id": 1,
            "databases": null,
            "backups": [
                {"id": 1, "date": "2024-01-01 00:00:00", "size": 1024},
                {"id": 2, "date": "2024-02-01 00:00:00", "size": "2 MB"}
            ]
        }))
        .unwrap();
        assert!(config.databases.is_empty());
        let last = config.last_backup().unwrap();
        assert_eq!(last.id, 2);
        assert_eq!(last.size.as_deref(), Some("2 MB"));
    }
}
