//! 详情面板视图
//!
//! 外框（标题、焦点边框、加载标记）在这里统一绘制，
//! 内容按 [`PanelData`] 的变体分发到 `info` / `lists` / `text`。

mod info;
mod lists;
mod text;

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::detail::{Mounted, Panel, PanelContent, PanelData};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染右侧内容区
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let border_style = if app.focus.is_content() {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let title = match app.detail.mounted() {
        Mounted::Panel(panel) if panel.is_loading() => {
            format!(" {} · {} ", panel.kind.title(), texts.common.loading)
        }
        Mounted::Panel(panel) => format!(" {} ", panel.kind.title()),
        Mounted::Placeholder | Mounted::Fallback(_) => String::from(" "),
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.detail.mounted() {
        Mounted::Placeholder => render_message(frame, inner, texts.panels.placeholder, Styles::muted()),
        Mounted::Fallback(kind) => render_message(
            frame,
            inner,
            &format!("{} {}", texts.panels.fallback, kind.name()),
            Styles::muted(),
        ),
        Mounted::Panel(panel) => render_panel(panel, frame, inner),
    }
}

fn render_panel(panel: &Panel, frame: &mut Frame, area: Rect) {
    match &panel.content {
        PanelContent::Loading => render_message(frame, area, t().common.loading, Styles::muted()),
        PanelContent::Failed(message) => render_message(
            frame,
            area,
            &format!("{}: {message}", t().panels.failed),
            Style::default().fg(colors().error),
        ),
        PanelContent::Ready(data) => render_data(panel, data, frame, area),
    }
}

fn render_data(panel: &Panel, data: &PanelData, frame: &mut Frame, area: Rect) {
    match data {
        PanelData::Server(server) => info::server(server, frame, area),
        PanelData::Site(site) => info::site(site, panel, frame, area),
        PanelData::Git(site) => info::git(site, frame, area),
        PanelData::Domains(site) => info::domains(site, panel, frame, area),
        PanelData::Deployments { site, deployments } => lists::deployments(site, deployments, panel, frame, area),
        PanelData::Workers(items) => lists::workers(items, panel, frame, area),
        PanelData::Backups(items) => lists::backups(items, panel, frame, area),
        PanelData::Databases(items) => lists::databases(items, panel, frame, area),
        PanelData::DatabaseUsers(items) => lists::database_users(items, panel, frame, area),
        PanelData::Certificates(items) => lists::certificates(items, panel, frame, area),
        PanelData::Commands(items) => lists::commands(items, panel, frame, area),
        PanelData::SshKeys(items) => lists::ssh_keys(items, panel, frame, area),
        PanelData::Daemons(items) => lists::daemons(items, panel, frame, area),
        PanelData::FirewallRules(items) => lists::firewall_rules(items, panel, frame, area),
        PanelData::ScheduledJobs(items) => lists::scheduled_jobs(items, panel, frame, area),
        PanelData::Text(body) => text::plain(body, panel, frame, area),
        PanelData::Environment { entries, .. } => text::environment(entries, panel, frame, area),
    }
}

// ============================================================================
// 公用绘制
// ============================================================================

/// 居左的一段提示文字
fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::styled(format!("  {message}"), style)])
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 键值对列表（信息面板）
fn render_pairs(frame: &mut Frame, area: Rect, pairs: &[(&str, String)]) {
    let width = pairs
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from("")];
    for (label, value) in pairs {
        let padding = width.saturating_sub(label.width());
        lines.push(Line::from(vec![
            Span::styled(format!("  {label}{}  ", " ".repeat(padding)), Styles::muted()),
            Span::styled(value.clone(), Styles::text()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// 带表头和选中行的表格；没有行时显示空提示
fn render_table(
    frame: &mut Frame,
    area: Rect,
    panel: &Panel,
    header: &[&str],
    widths: &[Constraint],
    rows: Vec<Row<'static>>,
) {
    if rows.is_empty() {
        render_message(frame, area, t().panels.empty, Styles::muted());
        return;
    }

    let header = Row::new(header.iter().map(|title| Cell::from(title.to_string()))).style(Styles::header());
    let table = Table::new(rows, widths.to_vec())
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▸ ");

    let mut state = TableState::default().with_selected(Some(panel.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 状态列，按状态着色
fn status_cell(status: Option<&str>) -> Cell<'static> {
    Cell::from(opt(status)).style(Styles::status(status))
}

/// 空值显示为占位符
fn opt(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => t().common.none.to_string(),
    }
}

fn yes_no(value: bool) -> String {
    let common = &t().common;
    let text = if value { common.yes } else { common.no };
    text.to_string()
}

/// 本地时区，分钟精度
fn time(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(
        || t().common.none.to_string(),
        |value| value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_use_placeholder() {
        let none = t().common.none;
        assert_eq!(opt(None), none);
        assert_eq!(opt(Some("")), none);
        assert_eq!(opt(Some("8.3")), "8.3");
        assert_eq!(time(None), none);
    }

    #[test]
    fn time_is_minute_precision() {
        let value = DateTime::parse_from_rfc3339("2026-03-01T10:20:30Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(time(Some(&value)).len(), "2026-03-01 10:20".len());
    }
}
