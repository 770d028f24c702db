//! 通知（右上角浮层）

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::notification::Severity;
use crate::model::App;
use crate::view::theme::colors;

/// 最多同时显示的通知条数
const MAX_VISIBLE: usize = 3;
const WIDTH: u16 = 48;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let width = WIDTH.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }

    let mut y = area.y + 1;
    let visible: Vec<_> = app.notifications.iter().collect();
    let start = visible.len().saturating_sub(MAX_VISIBLE);

    for notification in &visible[start..] {
        let color = match notification.severity {
            Severity::Info => c.info,
            Severity::Success => c.success,
            Severity::Warning => c.warning,
            Severity::Error => c.error,
        };

        // 边框占两行
        let text_width = usize::from(width.saturating_sub(2)).max(1);
        let lines = notification
            .message
            .lines()
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum::<usize>();
        let height = u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2).min(6);

        if y + height > area.y + area.height {
            break;
        }

        let rect = Rect::new(area.x + area.width - width - 1, y, width, height);
        let paragraph = Paragraph::new(notification.message.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(c.fg).bg(c.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
        y += height;
    }
}
