//! 弹窗更新逻辑

use crate::backend::{ConfigEdit, ExternalCommand, Mutation};
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::detail::Panel;
use crate::model::state::config_field;
use crate::model::state::palette::{self, PaletteCommand};
use crate::model::{App, FormKind, FormState, Modal};
use crate::view::theme::Theme;

use super::{load_single_server, open_config_form, open_picker, reload_tree, tree};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if matches!(app.modal.active, Some(Modal::Palette { .. })) {
        update_palette(app, msg);
        return;
    }

    let Some(modal) = app.modal.active.as_mut() else {
        return;
    };

    match modal {
        Modal::Confirm { confirm_focused, .. } => match msg {
            ModalMessage::Close | ModalMessage::Input('n' | 'N') => app.modal.close(),
            ModalMessage::ToggleConfirmFocus | ModalMessage::Next | ModalMessage::Previous => {
                *confirm_focused = !*confirm_focused;
            }
            ModalMessage::Input('y' | 'Y') => confirm(app),
            ModalMessage::Confirm => {
                // 焦点默认在"取消"上
                if *confirm_focused {
                    confirm(app);
                } else {
                    app.modal.close();
                }
            }
            ModalMessage::Input(_) | ModalMessage::Backspace => {}
        },

        Modal::Form(form) => match msg {
            ModalMessage::Close => app.modal.close(),
            ModalMessage::Next | ModalMessage::ToggleConfirmFocus => form.next_field(),
            ModalMessage::Previous => form.prev_field(),
            ModalMessage::Input(c) => form.input(c),
            ModalMessage::Backspace => form.backspace(),
            ModalMessage::Confirm => submit_form(app),
        },

        Modal::ServerPicker { servers, selected } => match msg {
            ModalMessage::Close => app.modal.close(),
            ModalMessage::Next => {
                if *selected + 1 < servers.len() {
                    *selected += 1;
                }
            }
            ModalMessage::Previous => *selected = selected.saturating_sub(1),
            ModalMessage::Confirm => {
                let server_id = servers.get(*selected).map(|server| server.id);
                app.modal.close();
                if let Some(server_id) = server_id {
                    load_single_server(app, server_id);
                }
            }
            ModalMessage::ToggleConfirmFocus | ModalMessage::Input(_) | ModalMessage::Backspace => {}
        },

        Modal::Output { scroll, .. } => match msg {
            ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
            ModalMessage::Next => *scroll = scroll.saturating_add(1),
            ModalMessage::Previous => *scroll = scroll.saturating_sub(1),
            _ => {}
        },

        Modal::Error { .. } | Modal::Help => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }

        Modal::Palette { .. } => {}
    }
}

// ============================================================================
// 命令面板
// ============================================================================

/// 输入即过滤，选择下标随之归零
fn update_palette(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Palette { query, selected }) = &app.modal.active else {
        return;
    };
    let matches = palette::matching(app, query);
    let current = *selected;

    if msg == ModalMessage::Confirm {
        let command = matches.get(current).map(|entry| entry.command);
        app.modal.close();
        if let Some(command) = command {
            run_palette_command(app, command);
        }
        return;
    }

    let Some(Modal::Palette { query, selected }) = app.modal.active.as_mut() else {
        return;
    };
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::Next => {
            if current + 1 < matches.len() {
                *selected = current + 1;
            }
        }
        ModalMessage::Previous => *selected = current.saturating_sub(1),
        ModalMessage::Input(c) => {
            query.push(c);
            *selected = 0;
        }
        ModalMessage::Backspace => {
            query.pop();
            *selected = 0;
        }
        ModalMessage::Confirm | ModalMessage::ToggleConfirmFocus => {}
    }
}

fn run_palette_command(app: &mut App, command: PaletteCommand) {
    log::debug!("Palette command {command:?}");
    match command {
        PaletteCommand::SwitchServer => open_picker(app),
        PaletteCommand::EditConfig => open_config_form(app),
        PaletteCommand::ReloadTree => reload_tree(app),
        PaletteCommand::ToggleDefault => tree::toggle_default(app),
        PaletteCommand::Ssh(server_id) => {
            let Some(server) = app.servers.get(&server_id) else {
                app.notifications.warning(t().notify.server_not_found);
                return;
            };
            let Some(host) = server.ip_address.clone() else {
                app.notifications.warning(t().notify.no_ip);
                return;
            };
            let port = server.ssh_port;
            app.pending_external = Some(ExternalCommand::Ssh {
                user: app.ssh_user_for_id(server_id),
                host,
                port,
                directory: None,
            });
        }
    }
}

/// 确认弹窗：执行变更
fn confirm(app: &mut App) {
    if let Some(Modal::Confirm { mutation, instance, .. }) = app.modal.active.take() {
        app.backend.run_mutation(*mutation, instance);
    }
}

/// 提交表单：校验失败时留在表单中显示错误
fn submit_form(app: &mut App) {
    let Some(form) = app.modal.form().cloned() else {
        return;
    };

    if form.kind == FormKind::Config {
        submit_config(app, &form);
        return;
    }

    if form.kind == FormKind::ApiKey {
        if let Err(message) = form.validate() {
            set_form_error(app, message);
            return;
        }
        app.modal.close();
        app.backend.check_api_key(form.value(0).to_string());
        return;
    }

    let ssh_user = form
        .target
        .as_ref()
        .map_or_else(|| app.config.default_ssh_user().to_string(), |node| app.ssh_user_for_id(node.server_id));

    // 只有发起表单的面板仍然挂载时，它的数据才可信
    let data = form
        .instance
        .filter(|instance| app.detail.is_current(*instance))
        .and_then(|_| app.detail.panel())
        .and_then(Panel::data);

    match Mutation::from_form(&form, data, &ssh_user) {
        Ok(mutation) => {
            app.modal.close();
            app.backend.run_mutation(mutation, form.instance);
        }
        Err(message) => set_form_error(app, message),
    }
}

/// 配置表单：写回磁盘上的配置（命令行覆盖项不落盘），再更新内存中的配置
///
/// 填了新的 API 密钥时走与首次录入相同的校验流程。
fn submit_config(app: &mut App, form: &FormState) {
    if let Err(message) = form.validate() {
        set_form_error(app, message);
        return;
    }
    let theme = match form.value(config_field::THEME).to_ascii_lowercase().parse::<Theme>() {
        Ok(theme) => theme,
        Err(message) => {
            set_form_error(app, message);
            return;
        }
    };
    let edit = ConfigEdit {
        ssh_user: form.value(config_field::SSH_USER).to_string(),
        editor: form.value(config_field::EDITOR).to_string(),
        vim_keys: form.value(config_field::VIM_KEYS).eq_ignore_ascii_case("yes"),
        theme,
    };

    let saved = app.config_service.load().and_then(|mut on_disk| {
        edit.apply_to(&mut on_disk);
        app.config_service.save(&on_disk)
    });
    if let Err(err) = saved {
        log::error!("{err}");
        set_form_error(app, format!("{}: {err}", t().notify.config_save_failed));
        return;
    }

    edit.apply_to(&mut app.config);
    app.config.ui.theme.apply();
    app.modal.close();
    app.notifications.success(t().notify.config_saved);

    if let Some(api_key) = form.optional_value(config_field::API_KEY) {
        app.backend.check_api_key(api_key);
    }
}

fn set_form_error(app: &mut App, message: String) {
    if let Some(form) = app.modal.form_mut() {
        form.error = Some(message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use phorge_api::{Method, Server};
    use serde_json::json;

    use super::*;
    use crate::message::AppMessage;
    use crate::model::node::{NodeData, NodeKind};
    use crate::model::NavigationMode;
    use crate::update::harness::Harness;

    fn send(h: &mut Harness, msg: ModalMessage) {
        h.send(AppMessage::Modal(msg));
    }

    fn confirm_reboot(h: &mut Harness) {
        h.app
            .modal
            .show_confirm("Reboot server", "web-1", Mutation::RebootServer { server_id: 1 }, None);
    }

    // ---- confirm ----

    #[tokio::test]
    async fn confirm_defaults_to_cancel() {
        let mut h = Harness::new();
        confirm_reboot(&mut h);

        send(&mut h, ModalMessage::Confirm);

        assert!(!h.app.modal.is_open());
        h.settle().await;
        assert!(h.mock.calls().is_empty());
    }

    #[tokio::test]
    async fn focused_confirm_runs_mutation() {
        let mut h = Harness::new();
        h.mock.respond_json(Method::Post, "/servers/1/reboot", &json!({}));
        confirm_reboot(&mut h);

        send(&mut h, ModalMessage::ToggleConfirmFocus);
        send(&mut h, ModalMessage::Confirm);
        h.pump().await;

        assert_eq!(h.mock.call_count(Method::Post, "/servers/1/reboot"), 1);
        assert_eq!(h.app.notifications.len(), 1);
    }

    #[tokio::test]
    async fn y_confirms_directly() {
        let mut h = Harness::new();
        h.mock.respond_json(Method::Post, "/servers/1/reboot", &json!({}));
        confirm_reboot(&mut h);

        send(&mut h, ModalMessage::Input('y'));
        h.pump().await;

        assert!(!h.app.modal.is_open());
        assert_eq!(h.mock.call_count(Method::Post, "/servers/1/reboot"), 1);
    }

    // ---- forms ----

    #[tokio::test]
    async fn invalid_form_stays_open_with_error() {
        let mut h = Harness::new();
        let node = NodeData {
            site_id: Some(10),
            ..NodeData::new(NodeKind::Workers, 1)
        };
        h.app.modal.show_form(
            FormState::new(FormKind::CreateWorker, Some(node), None).with_values(["redis", "default", "lots"]),
        );

        send(&mut h, ModalMessage::Confirm);

        assert!(h.app.modal.form().unwrap().error.is_some());
        h.settle().await;
        assert!(h.mock.calls().is_empty());
    }

    #[tokio::test]
    async fn typing_fills_focused_field() {
        let mut h = Harness::new();
        h.app
            .modal
            .show_form(FormState::new(FormKind::CreateFirewallRule, Some(NodeData::new(NodeKind::FirewallRules, 1)), None));

        for c in "web".chars() {
            send(&mut h, ModalMessage::Input(c));
        }
        send(&mut h, ModalMessage::Next);
        for c in "80x".chars() {
            send(&mut h, ModalMessage::Input(c));
        }
        send(&mut h, ModalMessage::Backspace);

        assert_eq!(h.app.modal.form().unwrap().values, vec!["web", "80", ""]);
    }

    #[tokio::test]
    async fn valid_form_closes_and_submits() {
        let mut h = Harness::new();
        h.mock.respond_json(
            Method::Post,
            "/servers/1/databases",
            &json!({ "database": { "id": 5, "name": "shop" } }),
        );
        h.app.modal.show_form(
            FormState::new(FormKind::CreateDatabase, Some(NodeData::new(NodeKind::DatabasesServer, 1)), None)
                .with_values(["shop"]),
        );

        send(&mut h, ModalMessage::Confirm);
        assert!(!h.app.modal.is_open());
        h.pump().await;

        assert_eq!(h.mock.call_count(Method::Post, "/servers/1/databases"), 1);
    }

    #[tokio::test]
    async fn empty_api_key_is_rejected_locally() {
        let mut h = Harness::disconnected();
        h.app.modal.show_form(FormState::new(FormKind::ApiKey, None, None));

        send(&mut h, ModalMessage::Confirm);

        assert!(h.app.modal.form().unwrap().error.is_some());
    }

    // ---- picker and output ----

    #[tokio::test]
    async fn picker_confirm_loads_selected_server() {
        let mut h = Harness::new();
        let servers: Vec<Server> =
            serde_json::from_value(json!([{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }])).unwrap();
        h.app.modal.show_picker(servers, 0);

        send(&mut h, ModalMessage::Next);
        send(&mut h, ModalMessage::Next);
        send(&mut h, ModalMessage::Confirm);

        assert!(!h.app.modal.is_open());
        assert_eq!(h.app.current_server, Some(2));
        assert!(h.app.is_tree_loading());
    }

    #[tokio::test]
    async fn output_scrolls_without_underflow() {
        let mut h = Harness::new();
        h.app.modal.show_output("Server Log", "a\nb\nc");

        send(&mut h, ModalMessage::Previous);
        send(&mut h, ModalMessage::Next);
        send(&mut h, ModalMessage::Next);
        send(&mut h, ModalMessage::Previous);

        assert!(matches!(h.app.modal.active, Some(Modal::Output { scroll: 1, .. })));
    }

    // ---- config form ----

    fn set_field(h: &mut Harness, index: usize, value: &str) {
        h.app.modal.form_mut().unwrap().values[index] = value.to_string();
    }

    #[tokio::test]
    async fn config_form_is_prefilled() {
        let mut h = Harness::new();
        h.app.config.editor.command = "nano".to_string();

        open_config_form(&mut h.app);

        let form = h.app.modal.form().unwrap();
        assert_eq!(form.kind, FormKind::Config);
        assert_eq!(form.values, vec!["", "forge", "nano", "yes", "dark"]);
    }

    #[tokio::test]
    async fn config_form_saves_to_disk_and_memory() {
        let mut h = Harness::new();
        open_config_form(&mut h.app);
        set_field(&mut h, config_field::SSH_USER, "deploy");
        set_field(&mut h, config_field::VIM_KEYS, "No");

        send(&mut h, ModalMessage::Confirm);

        assert!(!h.app.modal.is_open());
        assert_eq!(h.app.config.forge.ssh_user, "deploy");
        assert!(!h.app.config.ui.vim_keys);
        let on_disk = h.app.config_service.load().unwrap();
        assert_eq!(on_disk.forge.ssh_user, "deploy");
        assert!(!on_disk.ui.vim_keys);
        assert_eq!(h.app.notifications.len(), 1);
    }

    #[tokio::test]
    async fn config_form_leaves_session_overrides_off_disk() {
        let mut h = Harness::new();
        h.app.config.ui.mode = NavigationMode::SingleServer;
        open_config_form(&mut h.app);

        send(&mut h, ModalMessage::Confirm);

        let on_disk = h.app.config_service.load().unwrap();
        assert_eq!(on_disk.ui.mode, NavigationMode::AllServers);
        assert_eq!(h.app.config.ui.mode, NavigationMode::SingleServer);
    }

    #[tokio::test]
    async fn invalid_choice_keeps_config_form_open() {
        let mut h = Harness::new();
        open_config_form(&mut h.app);
        set_field(&mut h, config_field::THEME, "solarized");

        send(&mut h, ModalMessage::Confirm);

        assert!(h.app.modal.form().unwrap().error.is_some());
        assert_eq!(h.app.config_service.load().unwrap(), crate::backend::AppConfig::default());
    }

    // ---- palette ----

    fn palette(h: &mut Harness, query: &str) {
        h.app.modal.show_palette();
        for c in query.chars() {
            send(h, ModalMessage::Input(c));
        }
    }

    fn web_server(ip: Option<&str>) -> Server {
        serde_json::from_value(json!({ "id": 1, "name": "web-1", "ip_address": ip, "ssh_port": 2222 })).unwrap()
    }

    #[tokio::test]
    async fn typing_resets_palette_selection() {
        let mut h = Harness::new();
        h.app.modal.show_palette();
        send(&mut h, ModalMessage::Next);
        assert!(matches!(h.app.modal.active, Some(Modal::Palette { selected: 1, .. })));

        send(&mut h, ModalMessage::Input('e'));
        send(&mut h, ModalMessage::Input('x'));
        send(&mut h, ModalMessage::Backspace);

        let Some(Modal::Palette { query, selected }) = &h.app.modal.active else {
            panic!("palette closed");
        };
        assert_eq!(query, "e");
        assert_eq!(*selected, 0);
    }

    #[tokio::test]
    async fn palette_selection_stops_at_last_match() {
        let mut h = Harness::new();
        palette(&mut h, "reload");

        send(&mut h, ModalMessage::Next);
        send(&mut h, ModalMessage::Next);

        assert!(matches!(h.app.modal.active, Some(Modal::Palette { selected: 0, .. })));
    }

    #[tokio::test]
    async fn palette_opens_config_form() {
        let mut h = Harness::new();
        palette(&mut h, "edit conf");

        send(&mut h, ModalMessage::Confirm);

        assert_eq!(h.app.modal.form().map(|form| form.kind), Some(FormKind::Config));
    }

    #[tokio::test]
    async fn palette_ssh_queues_external_command() {
        let mut h = Harness::new();
        h.app.remember_servers([&web_server(Some("10.0.0.1"))]);
        palette(&mut h, "ssh web");

        send(&mut h, ModalMessage::Confirm);

        assert!(!h.app.modal.is_open());
        assert_eq!(
            h.app.pending_external,
            Some(ExternalCommand::Ssh {
                user: "forge".to_string(),
                host: "10.0.0.1".to_string(),
                port: 2222,
                directory: None,
            })
        );
    }

    #[tokio::test]
    async fn palette_ssh_without_ip_warns() {
        let mut h = Harness::new();
        h.app.remember_servers([&web_server(None)]);
        palette(&mut h, "ssh web");

        send(&mut h, ModalMessage::Confirm);

        assert!(h.app.pending_external.is_none());
        assert_eq!(h.app.notifications.len(), 1);
    }

    #[tokio::test]
    async fn confirm_without_match_just_closes() {
        let mut h = Harness::new();
        palette(&mut h, "zzz");

        send(&mut h, ModalMessage::Confirm);

        assert!(!h.app.modal.is_open());
        h.settle().await;
        assert!(h.mock.calls().is_empty());
    }
}
