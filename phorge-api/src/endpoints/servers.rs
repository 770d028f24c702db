use super::{server_path, text_field};
use crate::client::ForgeClient;
use crate::error::Result;
use crate::models::{Server, User};

impl ForgeClient {
    /// `GET /user`, also the cheapest way to validate an API key.
    pub async fn get_user(&self) -> Result<User> {
        self.get_item("/user", "user").await
    }

    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        self.get_list("/servers", "servers").await
    }

    pub async fn get_server(&self, server_id: i64) -> Result<Server> {
        self.get_item(&server_path(server_id), "server").await
    }

    pub async fn reboot_server(&self, server_id: i64) -> Result<()> {
        self.post(&format!("{}/reboot", server_path(server_id)), None)
            .await?;
        Ok(())
    }

    /// Server log (nginx/system) as plain text.
    pub async fn get_server_logs(&self, server_id: i64) -> Result<String> {
        let value = self
            .get_json(&format!("{}/logs", server_path(server_id)))
            .await?;
        Ok(text_field(&value, "content"))
    }
}
