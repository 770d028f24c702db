//! Per-resource operations, as `impl ForgeClient` blocks.
//!
//! | Module | Scope |
//! |--------|-------|
//! | [`servers`] | account, servers, server logs |
//! | [`sites`] | sites, aliases, `.env`, site logs, git |
//! | [`deployments`] | deploy, history, script, quick deploy |
//! | [`site_resources`] | workers, certificates, commands |
//! | [`server_resources`] | databases, database users, SSH keys, daemons, firewall, jobs, backups |

mod deployments;
mod server_resources;
mod servers;
mod site_resources;
mod sites;

/// `/servers/{server_id}`
fn server_path(server_id: i64) -> String {
    format!("/servers/{server_id}")
}

/// `/servers/{server_id}/sites/{site_id}`
fn site_path(server_id: i64, site_id: i64) -> String {
    format!("/servers/{server_id}/sites/{site_id}")
}

/// Pull a string field out of a JSON envelope (`{"output": "..."}`), defaulting to empty.
fn text_field(value: &serde_json::Value, key: &str) -> String {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paths() {
        assert_eq!(server_path(4), "/servers/4");
        assert_eq!(site_path(4, 12), "/servers/4/sites/12");
    }

    #[test]
    fn text_field_defaults_to_empty() {
        assert_eq!(text_field(&json!({"output": "done"}), "output"), "done");
        assert_eq!(text_field(&json!({"output": null}), "output"), "");
        assert_eq!(text_field(&json!({}), "output"), "");
    }
}
