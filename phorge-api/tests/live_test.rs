//! 真实 API 冒烟测试（只读）
//!
//! 运行方式:
//! ```bash
//! FORGE_API_KEY=xxx cargo test -p phorge-api --test live_test -- --ignored --nocapture
//! ```

mod common;

use phorge_api::ForgeClient;

#[tokio::test]
#[ignore]
async fn test_live_list_servers_and_sites() {
    skip_if_no_credentials!("FORGE_API_KEY");

    let Ok(api_key) = std::env::var("FORGE_API_KEY") else {
        return;
    };
    let client = require_ok!(ForgeClient::new(&api_key));

    let user = require_ok!(client.get_user().await);
    println!("✓ authenticated as {}", user.name);

    let servers = require_ok!(client.list_servers().await);
    println!("✓ list_servers: {} servers", servers.len());

    if let Some(server) = servers.first() {
        let sites = require_ok!(client.list_sites(server.id).await);
        println!("✓ list_sites({}): {} sites", server.name, sites.len());
    }
}
