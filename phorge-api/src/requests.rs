//! Request payloads for create/update operations.

use serde::Serialize;

/// `POST /servers/{s}/sites/{x}/workers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateWorker {
    pub connection: String,
    pub queue: String,
    pub timeout: u32,
    pub sleep: u32,
    pub processes: u32,
    pub daemon: bool,
    pub force: bool,
}

impl Default for CreateWorker {
    fn default() -> Self {
        Self {
            connection: "redis".to_string(),
            queue: "default".to_string(),
            timeout: 60,
            sleep: 3,
            processes: 1,
            daemon: true,
            force: false,
        }
    }
}

/// `POST /servers/{s}/databases`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDatabase {
    pub name: String,
    /// Optional user created alongside the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `POST /servers/{s}/database-users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDatabaseUser {
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub databases: Vec<i64>,
}

/// `POST /servers/{s}/keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSshKey {
    pub name: String,
    pub key: String,
    pub username: String,
}

/// `POST /servers/{s}/daemons`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDaemon {
    pub command: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    pub processes: u32,
    pub startsecs: u32,
}

/// Whether a firewall rule opens or closes the port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FirewallRuleType {
    #[default]
    Allow,
    Deny,
}

/// `POST /servers/{s}/firewall-rules`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFirewallRule {
    pub name: String,
    pub port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: FirewallRuleType,
}

/// `POST /servers/{s}/jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateScheduledJob {
    pub command: String,
    /// `minutely`, `hourly`, `nightly`, `weekly`, `monthly`, `reboot` or `custom`.
    pub frequency: String,
    pub user: String,
}

/// `POST /servers/{s}/sites/{x}/git`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallRepository {
    /// `github`, `gitlab`, `bitbucket` or `custom`.
    pub provider: String,
    /// `owner/name`, or a full URL for custom providers.
    pub repository: String,
    pub branch: String,
    pub composer: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn worker_defaults_match_forge() {
        assert_eq!(
            serde_json::to_value(CreateWorker::default()).unwrap(),
            json!({
                "connection": "redis",
                "queue": "default",
                "timeout": 60,
                "sleep": 3,
                "processes": 1,
                "daemon": true,
                "force": false
            })
        );
    }

    #[test]
    fn optional_fields_are_omitted() {
        let db = CreateDatabase {
            name: "app".to_string(),
            ..CreateDatabase::default()
        };
        assert_eq!(serde_json::to_value(db).unwrap(), json!({"name": "app"}));

        let user = CreateDatabaseUser {
            name: "app".to_string(),
            password: "secret".to_string(),
            databases: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(user).unwrap(),
            json!({"name": "app", "password": "secret"})
        );
    }

    #[test]
    fn firewall_type_is_lowercase() {
        let rule = CreateFirewallRule {
            name: "http".to_string(),
            port: "80".to_string(),
            ip_address: None,
            rule_type: FirewallRuleType::Allow,
        };
        assert_eq!(
            serde_json::to_value(rule).unwrap(),
            json!({"name": "http", "port": "80", "type": "allow"})
        );
    }
}
