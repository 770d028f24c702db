//! 文本类面板：部署脚本、日志、环境变量

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row},
    Frame,
};

use crate::i18n::t;
use crate::model::detail::Panel;
use crate::view::theme::Styles;

use super::{render_message, render_table};

/// 按行显示，选中行高亮并保持在可视范围内
pub fn plain(body: &str, panel: &Panel, frame: &mut Frame, area: Rect) {
    if body.trim().is_empty() {
        render_message(frame, area, t().panels.empty, Styles::muted());
        return;
    }

    let number_width = body.lines().count().to_string().len();
    let lines: Vec<Line> = body
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == panel.selected {
                Styles::selected()
            } else {
                Styles::text()
            };
            Line::from(vec![
                Span::styled(format!("{:>number_width$} ", i + 1), Styles::muted()),
                Span::styled(line.to_string(), style),
            ])
        })
        .collect();

    let offset = scroll_offset(panel.selected, area.height);
    let paragraph = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// 值默认遮盖，`v` 切换显示
pub fn environment(entries: &[(String, String)], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = entries
        .iter()
        .map(|(key, value)| {
            let shown = if panel.reveal || value.is_empty() {
                value.clone()
            } else {
                t().panels.masked.to_string()
            };
            Row::new([
                Cell::from(key.clone()).style(Styles::hint_key()),
                Cell::from(shown),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.key, c.value],
        &[Constraint::Percentage(35), Constraint::Percentage(65)],
        rows,
    );
}

/// 选中行超出视口时向下滚动
fn scroll_offset(selected: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    let offset = selected.saturating_sub(height - 1);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(3, 0), 3);
    }
}
