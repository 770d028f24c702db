use serde_json::json;

use super::site_path;
use crate::client::{ForgeClient, extract_item};
use crate::error::Result;
use crate::models::{Certificate, SiteCommand, Worker};
use crate::requests::CreateWorker;

impl ForgeClient {
    // ===== Workers =====

    pub async fn list_workers(&self, server_id: i64, site_id: i64) -> Result<Vec<Worker>> {
        self.get_list(&format!("{}/workers", site_path(server_id, site_id)), "workers")
            .await
    }

    pub async fn create_worker(&self, server_id: i64, site_id: i64, payload: &CreateWorker) -> Result<Worker> {
        self.post_item(
            &format!("{}/workers", site_path(server_id, site_id)),
            payload,
            "worker",
        )
        .await
    }

    pub async fn restart_worker(&self, server_id: i64, site_id: i64, worker_id: i64) -> Result<()> {
        self.post(
            &format!("{}/workers/{worker_id}/restart", site_path(server_id, site_id)),
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_worker(&self, server_id: i64, site_id: i64, worker_id: i64) -> Result<()> {
        self.delete(&format!("{}/workers/{worker_id}", site_path(server_id, site_id)))
            .await?;
        Ok(())
    }

    // ===== SSL certificates =====

    pub async fn list_certificates(&self, server_id: i64, site_id: i64) -> Result<Vec<Certificate>> {
        self.get_list(
            &format!("{}/certificates", site_path(server_id, site_id)),
            "certificates",
        )
        .await
    }

    /// Request a Let's Encrypt certificate covering `domains`.
    pub async fn obtain_letsencrypt(&self, server_id: i64, site_id: i64, domains: &[String]) -> Result<Certificate> {
        let value = self
            .post(
                &format!("{}/certificates/letsencrypt", site_path(server_id, site_id)),
                Some(json!({ "domains": domains })),
            )
            .await?;
        extract_item(value, "certificate")
    }

    pub async fn activate_certificate(&self, server_id: i64, site_id: i64, certificate_id: i64) -> Result<()> {
        self.post(
            &format!(
                "{}/certificates/{certificate_id}/activate",
                site_path(server_id, site_id)
            ),
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_certificate(&self, server_id: i64, site_id: i64, certificate_id: i64) -> Result<()> {
        self.delete(&format!(
            "{}/certificates/{certificate_id}",
            site_path(server_id, site_id)
        ))
        .await?;
        Ok(())
    }

    // ===== Commands =====

    pub async fn list_commands(&self, server_id: i64, site_id: i64) -> Result<Vec<SiteCommand>> {
        self.get_list(&format!("{}/commands", site_path(server_id, site_id)), "commands")
            .await
    }

    pub async fn execute_command(&self, server_id: i64, site_id: i64, command: &str) -> Result<SiteCommand> {
        let value = self
            .post(
                &format!("{}/commands", site_path(server_id, site_id)),
                Some(json!({ "command": command })),
            )
            .await?;
        extract_item(value, "command")
    }
}
