//! 后台事件处理
//!
//! 每个事件先核对票据（以及树的 generation / 面板实例），过期的直接丢弃。

use phorge_api::ForgeClient;

use crate::i18n::t;
use crate::message::BackendEvent;
use crate::model::{App, FormKind, FormState};

use super::tree::{focus_default_site, open_project_default};
use super::{detail, load_initial, load_single_server, report_error};

/// 处理后台事件
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::ServersLoaded { ticket, result } => {
            if !app.loads.tree.finish(ticket) {
                log::debug!("Dropping stale server list ({ticket:?})");
                return;
            }
            match result {
                Ok(servers) => {
                    log::info!("Loaded {} servers", servers.len());
                    app.remember_servers(&servers);
                    app.tree.populate(&servers);
                    app.loads.reset_sites();
                    open_project_default(app);
                }
                Err(err) => report_error(app, t().notify.load_servers_failed, &err),
            }
        }

        BackendEvent::PickerLoaded { ticket, result } => {
            if !app.loads.picker.finish(ticket) {
                log::debug!("Dropping stale picker list ({ticket:?})");
                return;
            }
            match result {
                Ok(servers) => {
                    app.remember_servers(&servers);
                    let default = app
                        .default_server
                        .as_deref()
                        .and_then(|name| {
                            servers.iter().position(|server| server.name.eq_ignore_ascii_case(name))
                        });

                    // 首次进入且默认服务器存在时跳过选择器
                    match (app.current_server, default) {
                        (None, Some(index)) => {
                            let server_id = servers[index].id;
                            load_single_server(app, server_id);
                        }
                        _ => {
                            let selected = app
                                .current_server
                                .and_then(|id| servers.iter().position(|server| server.id == id))
                                .or(default)
                                .unwrap_or(0);
                            app.modal.show_picker(servers, selected);
                        }
                    }
                }
                Err(err) => report_error(app, t().notify.load_servers_failed, &err),
            }
        }

        BackendEvent::SingleServerLoaded { ticket, result } => {
            if !app.loads.tree.finish(ticket) {
                log::debug!("Dropping stale server ({ticket:?})");
                return;
            }
            match result {
                Ok((server, sites)) => {
                    log::info!("Loaded server {} with {} sites", server.name, sites.len());
                    app.remember_servers([&server]);
                    let ssh_user = app.config.ssh_user_for(&server).to_string();
                    app.tree.populate_single_server(&server, &sites, &ssh_user);
                    app.loads.reset_sites();
                    if let Some(group) = app.tree.sites_group_of(server.id) {
                        focus_default_site(app, group);
                    }
                }
                Err(err) => report_error(app, t().notify.load_servers_failed, &err),
            }
        }

        BackendEvent::SitesLoaded {
            generation,
            node,
            ticket,
            result,
        } => {
            if generation != app.tree.generation() {
                log::debug!("Dropping sites from tree generation {generation}");
                return;
            }
            let current = app.loads.sites.get_mut(&node).is_some_and(|slot| slot.finish(ticket));
            if !current {
                log::debug!("Dropping stale sites ({ticket:?})");
                return;
            }
            let Some(server_id) = app.tree.data(node).map(|data| data.server_id) else {
                return;
            };
            match result {
                Ok(sites) => {
                    let ssh_user = app.ssh_user_for_id(server_id);
                    app.tree.add_sites_to(node, &sites, &ssh_user);
                    focus_default_site(app, node);
                }
                // loaded 保持 false，下次展开重试
                Err(err) => report_error(app, t().notify.load_sites_failed, &err),
            }
        }

        BackendEvent::PanelLoaded {
            instance,
            ticket,
            result,
        } => match result {
            Ok(data) => {
                if !app.detail.apply(instance, ticket, Ok(data)) {
                    log::debug!("Dropping stale panel data ({instance:?}, {ticket:?})");
                }
            }
            Err(err) => {
                if app.detail.apply(instance, ticket, Err(err.to_string())) {
                    let title = app.detail.panel().map_or("", |panel| panel.kind.title());
                    let context = format!("{} {title}", t().notify.load_panel_failed);
                    report_error(app, &context, &err);
                }
            }
        },

        BackendEvent::MutationFinished {
            instance,
            description,
            result,
        } => match result {
            Ok(()) => {
                app.notifications.success(format!("{description}: {}", t().notify.done));
                if instance.is_some_and(|instance| app.detail.is_current(instance)) {
                    detail::refresh(app);
                }
            }
            Err(err) => report_error(app, description, &err),
        },

        BackendEvent::LookupFinished { title, result } => match result {
            Ok(text) => app.modal.show_output(title, text),
            Err(err) => report_error(app, title, &err),
        },

        BackendEvent::ApiKeyChecked { api_key, result } => match result {
            Ok(user) => {
                log::info!("API key accepted for {}", user.name);
                store_api_key(app, &api_key);
                match ForgeClient::new(&api_key) {
                    Ok(client) => {
                        app.backend.connect(client);
                        load_initial(app);
                    }
                    Err(err) => report_error(app, t().notify.failed, &err),
                }
            }
            Err(err) => {
                let mut form = FormState::new(FormKind::ApiKey, None, None);
                form.error = Some(err.to_string());
                app.modal.show_form(form);
            }
        },
    }
}

/// 先写钥匙串，失败再写配置文件
fn store_api_key(app: &mut App, api_key: &str) {
    match app.credentials.save(api_key) {
        Ok(()) => {
            app.notifications.success(t().notify.key_saved);
            return;
        }
        Err(err) => log::warn!("{err}"),
    }

    // 写回磁盘上的配置，命令行覆盖项只在本次运行有效
    app.config.forge.api_key = api_key.to_string();
    let saved = app.config_service.load().and_then(|mut on_disk| {
        on_disk.forge.api_key = api_key.to_string();
        app.config_service.save(&on_disk)
    });
    match saved {
        Ok(()) => app.notifications.success(t().notify.key_saved_config),
        Err(err) => {
            log::error!("{err}");
            app.notifications.error(format!("{}: {err}", t().notify.key_save_failed));
        }
    }
}
