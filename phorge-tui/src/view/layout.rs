//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::panels;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // 导航树
            Constraint::Percentage(70), // 详情面板
        ])
        .split(main_layout[1]);

    components::tree::render(app, frame, columns[0]);
    panels::render(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);
    components::toasts::render(app, frame, columns[1]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut title = format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION"));

    if let Some(server) = app.current_server.and_then(|id| app.servers.get(&id)) {
        title.push_str(&format!(" · {}", server.name));
    }

    let paragraph = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}
