//! Endpoint 集成测试（MockTransport，无网络）
//!
//! 验证路径、请求体与响应信封的对应关系。

mod common;

use common::MockContext;
use phorge_api::{
    CreateDaemon, CreateDatabaseUser, CreateFirewallRule, CreateWorker, FirewallRuleType, ForgeError, Method,
};
use serde_json::json;

// ============ servers & sites ============

#[tokio::test]
async fn list_servers_reads_servers_envelope() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Get,
        "/servers",
        &json!({"servers": [
            {"id": 1, "name": "web-1", "ip_address": "10.0.0.1"},
            {"id": 2, "name": "web-2", "ip_address": null, "ssh_port": 2222}
        ]}),
    );

    let servers = require_ok!(ctx.client.list_servers().await);
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].name, "web-1");
    assert_eq!(servers[1].ip_address, None);
    assert_eq!(servers[1].ssh_port, 2222);
}

#[tokio::test]
async fn list_sites_is_scoped_to_server() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Get,
        "/servers/7/sites",
        &json!({"sites": [{"id": 3, "name": "example.com"}]}),
    );

    let sites = require_ok!(ctx.client.list_sites(7).await);
    assert_eq!(sites.len(), 1);
    assert_eq!(ctx.mock.call_count(Method::Get, "/servers/7/sites"), 1);
}

#[tokio::test]
async fn get_site_not_found() {
    let ctx = MockContext::new();
    ctx.mock.respond(Method::Get, "/servers/1/sites/99", 404, "");

    let err = ctx.client.get_site(1, 99).await.unwrap_err();
    assert!(matches!(err, ForgeError::NotFound { .. }));
}

#[tokio::test]
async fn update_aliases_sends_list() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Put,
        "/servers/1/sites/2/aliases",
        &json!({"site": {"id": 2, "name": "example.com", "aliases": ["www.example.com"]}}),
    );

    let site = require_ok!(
        ctx.client
            .update_aliases(1, 2, &["www.example.com".to_string()])
            .await
    );
    assert_eq!(site.aliases, vec!["www.example.com"]);

    let calls = ctx.mock.calls();
    assert_eq!(calls[0].body, Some(json!({"aliases": ["www.example.com"]})));
}

// ============ text endpoints ============

#[tokio::test]
async fn deployment_script_and_env_are_plain_text() {
    let ctx = MockContext::new();
    ctx.mock
        .respond(Method::Get, "/servers/1/sites/2/deployment/script", 200, "git pull origin main");
    ctx.mock
        .respond(Method::Get, "/servers/1/sites/2/env", 200, "APP_ENV=production");

    assert_eq!(
        require_ok!(ctx.client.get_deployment_script(1, 2).await),
        "git pull origin main"
    );
    assert_eq!(
        require_ok!(ctx.client.get_environment(1, 2).await),
        "APP_ENV=production"
    );
}

#[tokio::test]
async fn update_environment_sends_content() {
    let ctx = MockContext::new();
    ctx.mock.respond(Method::Put, "/servers/1/sites/2/env", 200, "");

    require_ok!(ctx.client.update_environment(1, 2, "A=1").await);
    assert_eq!(ctx.mock.calls()[0].body, Some(json!({"content": "A=1"})));
}

#[tokio::test]
async fn logs_read_content_field() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Get,
        "/servers/1/sites/2/logs",
        &json!({"content": "[2024-01-01] production.ERROR"}),
    );
    ctx.mock.respond_json(Method::Get, "/servers/1/logs", &json!({}));

    assert!(require_ok!(ctx.client.get_site_logs(1, 2).await).contains("ERROR"));
    assert_eq!(require_ok!(ctx.client.get_server_logs(1).await), "");
}

#[tokio::test]
async fn deployment_output_reads_output_field() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Get,
        "/servers/1/sites/2/deployment-history/5/output",
        &json!({"output": "Deploying..."}),
    );

    assert_eq!(
        require_ok!(ctx.client.get_deployment_output(1, 2, 5).await),
        "Deploying..."
    );
}

// ============ mutations ============

#[tokio::test]
async fn quick_deploy_toggle_uses_post_and_delete() {
    let ctx = MockContext::new();
    ctx.mock.respond(Method::Post, "/servers/1/sites/2/deployment", 200, "");
    ctx.mock.respond(Method::Delete, "/servers/1/sites/2/deployment", 200, "");

    require_ok!(ctx.client.set_quick_deploy(1, 2, true).await);
    require_ok!(ctx.client.set_quick_deploy(1, 2, false).await);
    assert_eq!(ctx.mock.call_count(Method::Post, "/servers/1/sites/2/deployment"), 1);
    assert_eq!(ctx.mock.call_count(Method::Delete, "/servers/1/sites/2/deployment"), 1);
}

#[tokio::test]
async fn create_worker_posts_payload_and_reads_worker() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Post,
        "/servers/1/sites/2/workers",
        &json!({"worker": {"id": 11, "queue": "emails", "processes": 2}}),
    );

    let payload = CreateWorker {
        queue: "emails".to_string(),
        processes: 2,
        ..CreateWorker::default()
    };
    let worker = require_ok!(ctx.client.create_worker(1, 2, &payload).await);
    assert_eq!(worker.id, 11);

    let body = require_some!(ctx.mock.calls()[0].body.clone());
    assert_eq!(body["queue"], "emails");
    assert_eq!(body["connection"], "redis");
}

#[tokio::test]
async fn create_database_user_validation_error() {
    let ctx = MockContext::new();
    ctx.mock.respond(
        Method::Post,
        "/servers/1/database-users",
        422,
        r#"{"errors":{"password":["The password must be at least 8 characters."]}}"#,
    );

    let payload = CreateDatabaseUser {
        name: "app".to_string(),
        password: "short".to_string(),
        databases: Vec::new(),
    };
    let err = ctx.client.create_database_user(1, &payload).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation failed: password: The password must be at least 8 characters."
    );
}

#[tokio::test]
async fn server_resource_creates_use_their_envelopes() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Post,
        "/servers/1/daemons",
        &json!({"daemon": {"id": 4, "command": "php artisan horizon"}}),
    );
    ctx.mock.respond_json(
        Method::Post,
        "/servers/1/firewall-rules",
        &json!({"rule": {"id": 5, "name": "redis", "port": 6379}}),
    );

    let daemon = require_ok!(
        ctx.client
            .create_daemon(
                1,
                &CreateDaemon {
                    command: "php artisan horizon".to_string(),
                    user: "forge".to_string(),
                    directory: None,
                    processes: 1,
                    startsecs: 1,
                },
            )
            .await
    );
    assert_eq!(daemon.id, 4);

    let rule = require_ok!(
        ctx.client
            .create_firewall_rule(
                1,
                &CreateFirewallRule {
                    name: "redis".to_string(),
                    port: "6379".to_string(),
                    ip_address: Some("10.0.0.2".to_string()),
                    rule_type: FirewallRuleType::Allow,
                },
            )
            .await
    );
    assert_eq!(rule.port.as_deref(), Some("6379"));
}

#[tokio::test]
async fn deletes_hit_resource_paths() {
    let ctx = MockContext::new();
    for path in [
        "/servers/1/databases/3",
        "/servers/1/keys/4",
        "/servers/1/jobs/5",
        "/servers/1/backup-configs/6",
        "/servers/1/sites/2/workers/7",
        "/servers/1/sites/2/certificates/8",
    ] {
        ctx.mock.respond(Method::Delete, path, 200, "");
    }

    require_ok!(ctx.client.delete_database(1, 3).await);
    require_ok!(ctx.client.delete_ssh_key(1, 4).await);
    require_ok!(ctx.client.delete_job(1, 5).await);
    require_ok!(ctx.client.delete_backup_config(1, 6).await);
    require_ok!(ctx.client.delete_worker(1, 2, 7).await);
    require_ok!(ctx.client.delete_certificate(1, 2, 8).await);

    assert_eq!(ctx.mock.calls().len(), 6);
}

#[tokio::test]
async fn letsencrypt_sends_domains() {
    let ctx = MockContext::new();
    ctx.mock.respond_json(
        Method::Post,
        "/servers/1/sites/2/certificates/letsencrypt",
        &json!({"certificate": {"id": 9, "domain": "example.com", "active": null}}),
    );

    let domains = vec!["example.com".to_string(), "www.example.com".to_string()];
    let cert = require_ok!(ctx.client.obtain_letsencrypt(1, 2, &domains).await);
    assert!(!cert.active);
    assert_eq!(
        ctx.mock.calls()[0].body,
        Some(json!({"domains": ["example.com", "www.example.com"]}))
    );
}
