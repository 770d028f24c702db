//! 导航树更新逻辑
//!
//! 树只返回 [`TreeEvent`]，这里把事件转成副作用：
//! 选中 → 详情面板，展开未加载的站点分组 → 懒加载站点。

use crate::backend::DefaultChange;
use crate::i18n::t;
use crate::message::TreeMessage;
use crate::model::node::NodeKind;
use crate::model::tree::{NodeId, TreeEvent};
use crate::model::App;

/// 处理导航树消息
pub fn update(app: &mut App, msg: TreeMessage) {
    let events: Vec<TreeEvent> = match msg {
        TreeMessage::SelectPrevious => {
            app.tree.cursor_up();
            Vec::new()
        }
        TreeMessage::SelectNext => {
            app.tree.cursor_down();
            Vec::new()
        }
        TreeMessage::SelectFirst => {
            app.tree.cursor_first();
            Vec::new()
        }
        TreeMessage::SelectLast => {
            app.tree.cursor_last();
            Vec::new()
        }
        TreeMessage::Activate => app.tree.activate(),
        TreeMessage::Expand => app.tree.expand(app.tree.cursor()).into_iter().collect(),
        TreeMessage::Collapse => app.tree.collapse_or_parent().into_iter().collect(),
        TreeMessage::ReloadSites => {
            reload_sites(app);
            Vec::new()
        }
        TreeMessage::ToggleDefault => {
            toggle_default(app);
            Vec::new()
        }
    };

    for event in events {
        handle_event(app, event);
    }
}

fn handle_event(app: &mut App, event: TreeEvent) {
    match event {
        TreeEvent::Selected(id) => select_node(app, id),
        TreeEvent::Expanded(id) => on_expanded(app, id),
        TreeEvent::Collapsed(_) => {}
    }
}

/// 分组节点没有详情面板，直接忽略
fn select_node(app: &mut App, id: NodeId) {
    let Some(data) = app.tree.resolved_data(id) else {
        return;
    };
    if data.kind.is_group() {
        return;
    }

    if let Some(request) = app.detail.show(&data) {
        app.backend.fetch_panel(request);
    }
}

fn on_expanded(app: &mut App, id: NodeId) {
    let Some(data) = app.tree.data(id) else {
        return;
    };
    if data.kind == NodeKind::SitesGroup && !data.loaded {
        let server_id = data.server_id;
        load_sites(app, id, server_id);
    }
}

/// 发起站点加载；同一分组上一次未完成的请求随之作废
fn load_sites(app: &mut App, group: NodeId, server_id: i64) {
    let ticket = app.loads.sites.entry(group).or_default().begin();
    log::debug!("Loading sites of server {server_id} ({ticket:?})");
    app.backend.load_sites(app.tree.generation(), group, ticket, server_id);
}

// ============================================================================
// 项目默认值
// ============================================================================

/// 树建好后：光标移到默认服务器；有默认站点时展开其站点分组开始懒加载
pub fn open_project_default(app: &mut App) {
    let Some(server) = app
        .tree
        .servers()
        .iter()
        .copied()
        .find(|id| app.tree.data(*id).is_some_and(|data| app.is_project_default(data)))
    else {
        return;
    };
    app.tree.set_cursor(server);
    app.tree.expand(server);

    if app.project.site.is_none() {
        return;
    }
    let group = app.tree.children(server).iter().copied().find(|id| {
        app.tree
            .data(*id)
            .is_some_and(|data| data.kind == NodeKind::SitesGroup)
    });
    if let Some(event) = group.and_then(|group| app.tree.expand(group)) {
        handle_event(app, event);
    }
    if let Some(group) = group {
        focus_default_site(app, group);
    }
}

/// D：切换光标处服务器 / 站点的项目默认值并写入 `.phorge`
///
/// 写入失败时内存中的默认值保持不变。
pub fn toggle_default(app: &mut App) {
    let Some(data) = app.tree.data(app.tree.cursor()) else {
        app.notifications.info(t().notify.no_selection);
        return;
    };
    let Some(server) = app.server_name(data.server_id).map(str::to_string) else {
        app.notifications.warning(t().notify.server_not_found);
        return;
    };
    let site = data.site_id.and(data.site_name.clone());

    let mut project = app.project.clone();
    let change = project.toggle(&server, site.as_deref());

    if let Some(dir) = &app.project_dir {
        if let Err(err) = project.save_to(dir) {
            log::error!("{err}");
            app.notifications.error(format!("{}: {err}", t().notify.default_save_failed));
            return;
        }
    }

    let texts = &t().notify;
    let message = match change {
        DefaultChange::Cleared => texts.default_cleared.to_string(),
        DefaultChange::Server(server) => format!("{server} {}", texts.default_server_set),
        DefaultChange::Site { server, site } => format!("{server}/{site} {}", texts.default_set),
    };
    log::info!("{message}");
    app.default_server.clone_from(&project.server);
    app.project = project;
    app.notifications.success(message);
}

/// 站点加载完成后，光标移到默认站点（只在它属于默认服务器时）
pub fn focus_default_site(app: &mut App, group: NodeId) {
    let site = app
        .tree
        .children(group)
        .iter()
        .copied()
        .find(|id| app.tree.data(*id).is_some_and(|data| app.is_project_default(data)));
    if let Some(site) = site {
        app.tree.set_cursor(site);
    }
}

/// r：丢弃光标所在站点分组的站点并重新加载
fn reload_sites(app: &mut App) {
    let group = app.tree.cursor();
    let Some(data) = app.tree.data(group) else {
        return;
    };
    if data.kind != NodeKind::SitesGroup {
        return;
    }
    let server_id = data.server_id;

    app.tree.reset_sites(group);
    app.tree.expand(group);
    load_sites(app, group, server_id);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use phorge_api::Method;
    use serde_json::json;

    use super::*;
    use crate::message::AppMessage;
    use crate::backend::ProjectConfig;
    use crate::model::detail::Mounted;
    use crate::update::harness::Harness;

    async fn loaded_tree() -> Harness {
        let mut h = Harness::new();
        h.mock.respond_json(
            Method::Get,
            "/servers",
            &json!({ "servers": [
                { "id": 1, "name": "web-1", "ip_address": "10.0.0.1" },
                { "id": 2, "name": "web-2", "ip_address": "10.0.0.2" }
            ] }),
        );
        h.send(AppMessage::ReloadTree);
        h.pump().await;
        h
    }

    fn sites_group(h: &Harness) -> NodeId {
        h.app.tree.sites_group_of(1).unwrap()
    }

    // ---- selection ----

    #[tokio::test]
    async fn selecting_group_kinds_never_shows_detail() {
        let mut h = loaded_tree().await;
        h.mock.respond_json(Method::Get, "/servers/1/sites", &json!({ "sites": [{ "id": 10, "name": "a.com" }] }));
        let server = h.app.tree.servers()[0];
        let group = sites_group(&h);
        h.app.tree.set_cursor(group);
        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.pump().await;
        let site = h.app.tree.children(group)[0];
        assert_eq!(h.app.tree.data(site).unwrap().kind, NodeKind::SiteRoot);

        for id in [server, group, site] {
            h.app.tree.set_cursor(id);
            h.send(AppMessage::Tree(TreeMessage::Activate));
        }

        assert!(matches!(h.app.detail.mounted(), Mounted::Placeholder));
        h.settle().await;
        assert_eq!(h.mock.call_count(Method::Get, "/servers/1"), 0);
        assert_eq!(h.mock.call_count(Method::Get, "/servers/1/sites/10"), 0);
    }

    #[tokio::test]
    async fn selected_panel_inherits_connection_from_ancestors() {
        let mut h = loaded_tree().await;
        h.mock.respond_json(Method::Get, "/servers/1", &json!({ "server": { "id": 1, "name": "web-1" } }));
        let info = h.app.tree.children(h.app.tree.servers()[0])[0];
        h.app.tree.data_mut(info).unwrap().server_ip = None;

        h.app.tree.set_cursor(info);
        h.send(AppMessage::Tree(TreeMessage::Activate));

        let panel = h.app.detail.panel().unwrap();
        assert_eq!(panel.node.server_ip.as_deref(), Some("10.0.0.1"));
        h.pump().await;
    }

    #[tokio::test]
    async fn selecting_leaf_mounts_and_fetches() {
        let mut h = loaded_tree().await;
        h.mock.respond_json(
            Method::Get,
            "/servers/1",
            &json!({ "server": { "id": 1, "name": "web-1" } }),
        );
        let info = h.app.tree.children(h.app.tree.servers()[0])[0];

        h.app.tree.set_cursor(info);
        h.send(AppMessage::Tree(TreeMessage::Activate));
        assert!(h.app.detail.panel().unwrap().is_loading());
        h.pump().await;

        let panel = h.app.detail.panel().unwrap();
        assert!(!panel.is_loading());
        assert!(panel.data().is_some());
    }

    #[tokio::test]
    async fn cursor_movement_alone_does_not_select() {
        let mut h = loaded_tree().await;

        h.send(AppMessage::Tree(TreeMessage::SelectNext));
        h.send(AppMessage::Tree(TreeMessage::SelectLast));

        assert!(matches!(h.app.detail.mounted(), Mounted::Placeholder));
    }

    // ---- lazy sites ----

    #[tokio::test]
    async fn expanding_unloaded_group_loads_sites() {
        let mut h = loaded_tree().await;
        h.mock.respond_json(
            Method::Get,
            "/servers/1/sites",
            &json!({ "sites": [
                { "id": 10, "name": "a.com", "web_directory": "/home/forge/a.com/public", "directory": "/public" }
            ] }),
        );
        let group = sites_group(&h);

        h.app.tree.set_cursor(group);
        h.send(AppMessage::Tree(TreeMessage::Expand));
        assert!(h.app.loads.is_site_loading(group));
        h.pump().await;

        assert!(h.app.tree.data(group).unwrap().loaded);
        let site = h.app.tree.children(group)[0];
        assert_eq!(h.app.tree.children(site).len(), 12);
        assert_eq!(
            h.app.tree.effective_site_directory(site).as_deref(),
            Some("/home/forge/a.com")
        );
    }

    #[tokio::test]
    async fn site_list_not_found_leaves_group_unloaded() {
        let mut h = loaded_tree().await;
        let group = sites_group(&h);

        h.app.tree.set_cursor(group);
        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.pump().await;

        let data = h.app.tree.data(group).unwrap();
        assert!(!data.loaded);
        assert!(h.app.tree.children(group).is_empty());
        assert_eq!(h.app.notifications.len(), 1);
    }

    #[tokio::test]
    async fn failed_group_retries_on_next_expansion() {
        let mut h = loaded_tree().await;
        h.mock.respond(Method::Get, "/servers/1/sites", 500, r#"{"message":"boom"}"#);
        h.mock.respond_json(Method::Get, "/servers/1/sites", &json!({ "sites": [{ "id": 10, "name": "a.com" }] }));
        let group = sites_group(&h);
        h.app.tree.set_cursor(group);

        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.pump().await;
        h.send(AppMessage::Tree(TreeMessage::Collapse));
        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.pump().await;

        assert!(h.app.tree.data(group).unwrap().loaded);
        assert_eq!(h.app.tree.children(group).len(), 1);
        assert_eq!(h.mock.call_count(Method::Get, "/servers/1/sites"), 2);
    }

    #[tokio::test]
    async fn loaded_group_is_not_fetched_again() {
        let mut h = loaded_tree().await;
        h.mock.respond_json(Method::Get, "/servers/1/sites", &json!({ "sites": [] }));
        let group = sites_group(&h);
        h.app.tree.set_cursor(group);

        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.pump().await;
        h.send(AppMessage::Tree(TreeMessage::Collapse));
        h.send(AppMessage::Tree(TreeMessage::Expand));

        assert_eq!(h.mock.call_count(Method::Get, "/servers/1/sites"), 1);
    }

    #[tokio::test]
    async fn reload_sites_refetches_loaded_group() {
        let mut h = loaded_tree().await;
        h.mock.respond_json(Method::Get, "/servers/1/sites", &json!({ "sites": [{ "id": 10, "name": "a.com" }] }));
        let group = sites_group(&h);
        h.app.tree.set_cursor(group);
        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.pump().await;

        h.send(AppMessage::Tree(TreeMessage::ReloadSites));
        assert!(!h.app.tree.data(group).unwrap().loaded);
        h.pump().await;

        assert_eq!(h.app.tree.children(group).len(), 1);
        assert_eq!(h.mock.call_count(Method::Get, "/servers/1/sites"), 2);
    }

    #[tokio::test]
    async fn sites_from_an_older_tree_are_dropped() {
        let mut h = loaded_tree().await;
        let gate = h.mock.respond_json_gated(
            Method::Get,
            "/servers/1/sites",
            &json!({ "sites": [{ "id": 10, "name": "a.com" }] }),
        );
        let group = sites_group(&h);
        h.app.tree.set_cursor(group);
        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.settle().await;

        // 站点返回之前树被重建
        h.send(AppMessage::ReloadTree);
        h.pump().await;
        gate.notify_one();
        h.pump().await;

        let group = sites_group(&h);
        assert!(!h.app.tree.data(group).unwrap().loaded);
        assert!(h.app.tree.children(group).is_empty());
    }

    // ---- project default ----

    async fn expanded_sites(h: &mut Harness) -> NodeId {
        h.mock.respond_json(
            Method::Get,
            "/servers/1/sites",
            &json!({ "sites": [{ "id": 10, "name": "a.com" }, { "id": 11, "name": "b.com" }] }),
        );
        let group = sites_group(h);
        h.app.tree.set_cursor(group);
        h.send(AppMessage::Tree(TreeMessage::Expand));
        h.pump().await;
        group
    }

    #[tokio::test]
    async fn d_on_server_sets_then_clears_default() {
        let mut h = loaded_tree().await;
        let dir = tempfile::tempdir().unwrap();
        h.app.project_dir = Some(dir.path().to_path_buf());
        let server = h.app.tree.servers()[0];
        h.app.tree.set_cursor(server);

        h.send(AppMessage::Tree(TreeMessage::ToggleDefault));

        assert_eq!(h.app.project.server.as_deref(), Some("web-1"));
        assert_eq!(h.app.default_server.as_deref(), Some("web-1"));
        assert_eq!(ProjectConfig::load_from(dir.path()).unwrap(), h.app.project);
        assert!(h.app.is_project_default(h.app.tree.data(server).unwrap()));

        h.send(AppMessage::Tree(TreeMessage::ToggleDefault));

        assert!(h.app.project.is_empty());
        assert!(!dir.path().join(".phorge").exists());
        assert_eq!(h.app.notifications.len(), 2);
    }

    #[tokio::test]
    async fn d_inside_site_sets_site_default() {
        let mut h = loaded_tree().await;
        let group = expanded_sites(&mut h).await;
        let site = h.app.tree.children(group)[1];
        let workers = h.app.tree.children(site)[5];
        h.app.tree.set_cursor(workers);

        h.send(AppMessage::Tree(TreeMessage::ToggleDefault));

        assert!(h.app.project.is_default_site("web-1", "b.com"));
        assert!(h.app.is_project_default(h.app.tree.data(site).unwrap()));
        let other = h.app.tree.children(group)[0];
        assert!(!h.app.is_project_default(h.app.tree.data(other).unwrap()));
    }

    #[tokio::test]
    async fn failed_save_keeps_previous_default() {
        let mut h = loaded_tree().await;
        let dir = tempfile::tempdir().unwrap();
        h.app.project_dir = Some(dir.path().join("missing"));
        h.app.tree.set_cursor(h.app.tree.servers()[1]);

        h.send(AppMessage::Tree(TreeMessage::ToggleDefault));

        assert!(h.app.project.is_empty());
        assert_eq!(h.app.default_server, None);
        assert_eq!(h.app.notifications.len(), 1);
    }

    #[tokio::test]
    async fn default_site_is_selected_after_tree_load() {
        let mut h = Harness::new();
        h.app.project = ProjectConfig {
            server: Some("web-1".to_string()),
            site: Some("B.COM".to_string()),
        };
        h.mock.respond_json(
            Method::Get,
            "/servers",
            &json!({ "servers": [{ "id": 1, "name": "web-1", "ip_address": "10.0.0.1" }] }),
        );
        h.mock.respond_json(
            Method::Get,
            "/servers/1/sites",
            &json!({ "sites": [{ "id": 10, "name": "a.com" }, { "id": 11, "name": "b.com" }] }),
        );

        h.send(AppMessage::ReloadTree);
        h.pump().await;
        let server = h.app.tree.servers()[0];
        assert_eq!(h.app.tree.cursor(), server);
        assert!(h.app.tree.is_expanded(server));
        h.pump().await;

        let cursor = h.app.tree.data(h.app.tree.cursor()).unwrap();
        assert_eq!(cursor.kind, NodeKind::SiteRoot);
        assert_eq!(cursor.site_name.as_deref(), Some("b.com"));
    }

    #[tokio::test]
    async fn no_default_leaves_cursor_at_root() {
        let h = loaded_tree().await;

        assert_eq!(h.app.tree.cursor(), NodeId::ROOT);
        h.settle().await;
        assert_eq!(h.mock.call_count(Method::Get, "/servers/1/sites"), 0);
    }
}
