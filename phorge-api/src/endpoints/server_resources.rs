use super::server_path;
use crate::client::ForgeClient;
use crate::error::Result;
use crate::models::{BackupConfig, Daemon, Database, DatabaseUser, FirewallRule, ScheduledJob, SshKey};
use crate::requests::{
    CreateDaemon, CreateDatabase, CreateDatabaseUser, CreateFirewallRule, CreateScheduledJob, CreateSshKey,
};

impl ForgeClient {
    async fn delete_child(&self, server_id: i64, collection: &str, id: i64) -> Result<()> {
        self.delete(&format!("{}/{collection}/{id}", server_path(server_id)))
            .await?;
        Ok(())
    }

    // ===== Databases =====

    pub async fn list_databases(&self, server_id: i64) -> Result<Vec<Database>> {
        self.get_list(&format!("{}/databases", server_path(server_id)), "databases")
            .await
    }

    pub async fn create_database(&self, server_id: i64, payload: &CreateDatabase) -> Result<Database> {
        self.post_item(
            &format!("{}/databases", server_path(server_id)),
            payload,
            "database",
        )
        .await
    }

    pub async fn delete_database(&self, server_id: i64, database_id: i64) -> Result<()> {
        self.delete_child(server_id, "databases", database_id).await
    }

    /// Import databases created outside Forge.
    pub async fn sync_databases(&self, server_id: i64) -> Result<()> {
        self.post(&format!("{}/databases/sync", server_path(server_id)), None)
            .await?;
        Ok(())
    }

    // ===== Database users =====

    pub async fn list_database_users(&self, server_id: i64) -> Result<Vec<DatabaseUser>> {
        self.get_list(&format!("{}/database-users", server_path(server_id)), "users")
            .await
    }

    pub async fn create_database_user(&self, server_id: i64, payload: &CreateDatabaseUser) -> Result<DatabaseUser> {
        self.post_item(
            &format!("{}/database-users", server_path(server_id)),
            payload,
            "user",
        )
        .await
    }

    pub async fn delete_database_user(&self, server_id: i64, user_id: i64) -> Result<()> {
        self.delete_child(server_id, "database-users", user_id).await
    }

    // ===== SSH keys =====

    pub async fn list_ssh_keys(&self, server_id: i64) -> Result<Vec<SshKey>> {
        self.get_list(&format!("{}/keys", server_path(server_id)), "keys")
            .await
    }

    pub async fn create_ssh_key(&self, server_id: i64, payload: &CreateSshKey) -> Result<SshKey> {
        self.post_item(&format!("{}/keys", server_path(server_id)), payload, "key")
            .await
    }

    pub async fn delete_ssh_key(&self, server_id: i64, key_id: i64) -> Result<()> {
        self.delete_child(server_id, "keys", key_id).await
    }

    // ===== Daemons =====

    pub async fn list_daemons(&self, server_id: i64) -> Result<Vec<Daemon>> {
        self.get_list(&format!("{}/daemons", server_path(server_id)), "daemons")
            .await
    }

    pub async fn create_daemon(&self, server_id: i64, payload: &CreateDaemon) -> Result<Daemon> {
        self.post_item(&format!("{}/daemons", server_path(server_id)), payload, "daemon")
            .await
    }

    pub async fn restart_daemon(&self, server_id: i64, daemon_id: i64) -> Result<()> {
        self.post(
            &format!("{}/daemons/{daemon_id}/restart", server_path(server_id)),
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_daemon(&self, server_id: i64, daemon_id: i64) -> Result<()> {
        self.delete_child(server_id, "daemons", daemon_id).await
    }

    // ===== Firewall =====

    pub async fn list_firewall_rules(&self, server_id: i64) -> Result<Vec<FirewallRule>> {
        self.get_list(&format!("{}/firewall-rules", server_path(server_id)), "rules")
            .await
    }

    pub async fn create_firewall_rule(&self, server_id: i64, payload: &CreateFirewallRule) -> Result<FirewallRule> {
        self.post_item(
            &format!("{}/firewall-rules", server_path(server_id)),
            payload,
            "rule",
        )
        .await
    }

    pub async fn delete_firewall_rule(&self, server_id: i64, rule_id: i64) -> Result<()> {
        self.delete_child(server_id, "firewall-rules", rule_id).await
    }

    // ===== Scheduled jobs =====

    pub async fn list_jobs(&self, server_id: i64) -> Result<Vec<ScheduledJob>> {
        self.get_list(&format!("{}/jobs", server_path(server_id)), "jobs")
            .await
    }

    pub async fn create_job(&self, server_id: i64, payload: &CreateScheduledJob) -> Result<ScheduledJob> {
        self.post_item(&format!("{}/jobs", server_path(server_id)), payload, "job")
            .await
    }

    pub async fn delete_job(&self, server_id: i64, job_id: i64) -> Result<()> {
        self.delete_child(server_id, "jobs", job_id).await
    }

    // ===== Backups =====

    pub async fn list_backup_configs(&self, server_id: i64) -> Result<Vec<BackupConfig>> {
        self.get_list(&format!("{}/backup-configs", server_path(server_id)), "backups")
            .await
    }

    /// Trigger an immediate run of a backup configuration.
    pub async fn run_backup(&self, server_id: i64, config_id: i64) -> Result<()> {
        self.post(
            &format!("{}/backup-configs/{config_id}", server_path(server_id)),
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_backup_config(&self, server_id: i64, config_id: i64) -> Result<()> {
        self.delete_child(server_id, "backup-configs", config_id).await
    }
}
