//! 左侧导航树组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::node::NodeKind;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染导航树
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.focus.is_navigation();

    // 边框样式
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let title = if app.is_tree_loading() {
        format!(" {} · {} ", texts.tree.title, texts.common.loading)
    } else {
        format!(" {} ", texts.tree.title)
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let width = usize::from(block.inner(area).width);
    let cursor = app.tree.cursor();
    let rows = app.tree.visible_rows();

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let marker = match (row.expandable, row.expanded) {
                (false, _) => "  ",
                (true, false) => "▸ ",
                (true, true) => "▾ ",
            };
            let indent = "  ".repeat(row.depth);

            let mut label = app.tree.label(row.id).to_string();
            let data = app.tree.data(row.id);
            // 正在懒加载的站点分组
            if data.is_some_and(|d| d.kind == NodeKind::SitesGroup) && app.loads.is_site_loading(row.id) {
                label = format!("{label} ({})", texts.common.loading);
            }
            // 项目默认的服务器 / 站点
            if data.is_some_and(|d| app.is_project_default(d)) {
                label.push_str(" ★");
            }

            let text = truncate(&format!("{indent}{marker}{label}"), width);
            let style = if row.id == cursor {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if data.is_some_and(|d| d.kind.is_group()) {
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    // 使用 ListState 让光标行保持在可视区域内
    let mut state = ListState::default();
    state.select(rows.iter().position(|row| row.id == cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 按显示宽度截断，超出部分用 … 表示
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
