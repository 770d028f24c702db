//! 信息类面板：服务器、站点、Git 仓库、域名别名

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Cell, Row},
    Frame,
};

use phorge_api::{Server, Site};

use crate::i18n::t;
use crate::model::detail::Panel;

use super::{opt, render_pairs, render_table, yes_no};

pub fn server(server: &Server, frame: &mut Frame, area: Rect) {
    let f = &t().fields;
    let pairs = [
        (t().columns.name, server.name.clone()),
        (f.ip_address, opt(server.ip_address.as_deref())),
        (f.private_ip, opt(server.private_ip_address.as_deref())),
        (f.ssh_port, server.ssh_port.to_string()),
        (f.region, opt(server.region.as_deref())),
        (f.provider, opt(server.provider.as_deref())),
        (f.server_type, opt(server.server_type.as_deref())),
        (f.php_version, opt(server.php_version.as_deref())),
        (f.database, opt(server.database_type.as_deref())),
        (f.ubuntu, opt(server.ubuntu_version.as_deref())),
        (f.ready, yes_no(server.is_ready)),
        (f.status, opt(server.status.as_deref())),
    ];
    render_pairs(frame, area, &pairs);
}

/// 项目目录取自节点（创建时已按站点目录规则推导）
pub fn site(site: &Site, panel: &Panel, frame: &mut Frame, area: Rect) {
    let f = &t().fields;
    let pairs = [
        (t().columns.name, site.name.clone()),
        (f.project_directory, opt(panel.node.site_directory.as_deref())),
        (f.web_directory, opt(site.web_directory.as_deref())),
        (f.directory, opt(site.directory.as_deref())),
        (f.project_type, opt(site.project_type.as_deref())),
        (f.php_version, opt(site.php_version.as_deref())),
        (f.repository, opt(site.repository.as_deref())),
        (f.branch, opt(site.repository_branch.as_deref())),
        (f.quick_deploy, yes_no(site.quick_deploy)),
        (f.secured, yes_no(site.is_secured)),
        (f.aliases, aliases(site)),
        (f.status, opt(site.status.as_deref())),
    ];
    render_pairs(frame, area, &pairs);
}

pub fn git(site: &Site, frame: &mut Frame, area: Rect) {
    let f = &t().fields;
    let pairs = [
        (f.repository, opt(site.repository.as_deref())),
        (f.repository_provider, opt(site.repository_provider.as_deref())),
        (f.branch, opt(site.repository_branch.as_deref())),
        (f.repository_status, opt(site.repository_status.as_deref())),
        (f.quick_deploy, yes_no(site.quick_deploy)),
        (f.deployment_url, opt(site.deployment_url.as_deref())),
    ];
    render_pairs(frame, area, &pairs);
}

/// 主域名在上，别名表在下（选中行作用于别名）
pub fn domains(site: &Site, panel: &Panel, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_pairs(frame, layout[0], &[(t().columns.domain, site.name.clone())]);

    let rows = site
        .aliases
        .iter()
        .map(|alias| Row::new([Cell::from(alias.clone())]))
        .collect();
    render_table(
        frame,
        layout[1],
        panel,
        &[t().columns.alias],
        &[Constraint::Min(10)],
        rows,
    );
}

fn aliases(site: &Site) -> String {
    if site.aliases.is_empty() {
        t().common.none.to_string()
    } else {
        site.aliases.join(", ")
    }
}
