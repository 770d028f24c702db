use serde_json::json;

use super::{site_path, text_field};
use crate::client::ForgeClient;
use crate::error::Result;
use crate::models::Deployment;

impl ForgeClient {
    /// Deployment history, newest first as returned by the API.
    pub async fn list_deployments(&self, server_id: i64, site_id: i64) -> Result<Vec<Deployment>> {
        self.get_list(
            &format!("{}/deployment-history", site_path(server_id, site_id)),
            "deployments",
        )
        .await
    }

    /// Console output of one past deployment.
    pub async fn get_deployment_output(&self, server_id: i64, site_id: i64, deployment_id: i64) -> Result<String> {
        let value = self
            .get_json(&format!(
                "{}/deployment-history/{deployment_id}/output",
                site_path(server_id, site_id)
            ))
            .await?;
        Ok(text_field(&value, "output"))
    }

    pub async fn deploy(&self, server_id: i64, site_id: i64) -> Result<()> {
        self.post(
            &format!("{}/deployment/deploy", site_path(server_id, site_id)),
            None,
        )
        .await?;
        Ok(())
    }

    /// Log of the latest deployment.
    pub async fn get_deployment_log(&self, server_id: i64, site_id: i64) -> Result<String> {
        let value = self
            .get_json(&format!("{}/deployment/log", site_path(server_id, site_id)))
            .await?;
        Ok(text_field(&value, "output"))
    }

    /// The deploy script is served as plain text, not JSON.
    pub async fn get_deployment_script(&self, server_id: i64, site_id: i64) -> Result<String> {
        self.get_text(&format!("{}/deployment/script", site_path(server_id, site_id)))
            .await
    }

    pub async fn update_deployment_script(&self, server_id: i64, site_id: i64, content: &str) -> Result<()> {
        self.put(
            &format!("{}/deployment/script", site_path(server_id, site_id)),
            json!({ "content": content }),
        )
        .await?;
        Ok(())
    }

    pub async fn set_quick_deploy(&self, server_id: i64, site_id: i64, enabled: bool) -> Result<()> {
        let path = format!("{}/deployment", site_path(server_id, site_id));
        if enabled {
            self.post(&path, None).await?;
        } else {
            self.delete(&path).await?;
        }
        Ok(())
    }

    /// Clear a deployment stuck in the "deploying" state.
    pub async fn reset_deployment_status(&self, server_id: i64, site_id: i64) -> Result<()> {
        self.post(
            &format!("{}/deployment/reset", site_path(server_id, site_id)),
            None,
        )
        .await?;
        Ok(())
    }
}
