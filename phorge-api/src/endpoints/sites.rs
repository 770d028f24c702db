use serde_json::json;

use super::{site_path, text_field};
use crate::client::{ForgeClient, extract_item, to_body};
use crate::error::Result;
use crate::models::Site;
use crate::requests::InstallRepository;

impl ForgeClient {
    pub async fn list_sites(&self, server_id: i64) -> Result<Vec<Site>> {
        self.get_list(&format!("/servers/{server_id}/sites"), "sites")
            .await
    }

    pub async fn get_site(&self, server_id: i64, site_id: i64) -> Result<Site> {
        self.get_item(&site_path(server_id, site_id), "site").await
    }

    /// Replace the site's domain aliases with `aliases`.
    pub async fn update_aliases(&self, server_id: i64, site_id: i64, aliases: &[String]) -> Result<Site> {
        let value = self
            .put(
                &format!("{}/aliases", site_path(server_id, site_id)),
                json!({ "aliases": aliases }),
            )
            .await?;
        extract_item(value, "site")
    }

    // ===== .env =====

    /// Raw `.env` file contents.
    pub async fn get_environment(&self, server_id: i64, site_id: i64) -> Result<String> {
        self.get_text(&format!("{}/env", site_path(server_id, site_id)))
            .await
    }

    pub async fn update_environment(&self, server_id: i64, site_id: i64, content: &str) -> Result<()> {
        self.put(
            &format!("{}/env", site_path(server_id, site_id)),
            json!({ "content": content }),
        )
        .await?;
        Ok(())
    }

    // ===== Logs =====

    pub async fn get_site_logs(&self, server_id: i64, site_id: i64) -> Result<String> {
        let value = self
            .get_json(&format!("{}/logs", site_path(server_id, site_id)))
            .await?;
        Ok(text_field(&value, "content"))
    }

    pub async fn clear_site_logs(&self, server_id: i64, site_id: i64) -> Result<()> {
        self.delete(&format!("{}/logs", site_path(server_id, site_id)))
            .await?;
        Ok(())
    }

    // ===== Git =====

    pub async fn install_repository(&self, server_id: i64, site_id: i64, payload: &InstallRepository) -> Result<()> {
        self.post(
            &format!("{}/git", site_path(server_id, site_id)),
            Some(to_body(payload)?),
        )
        .await?;
        Ok(())
    }

    pub async fn update_repository_branch(&self, server_id: i64, site_id: i64, branch: &str) -> Result<()> {
        self.put(
            &format!("{}/git", site_path(server_id, site_id)),
            json!({ "branch": branch }),
        )
        .await?;
        Ok(())
    }

    pub async fn remove_repository(&self, server_id: i64, site_id: i64) -> Result<()> {
        self.delete(&format!("{}/git", site_path(server_id, site_id)))
            .await?;
        Ok(())
    }
}
