//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::palette;
use crate::model::{App, FormState, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::Confirm {
            title,
            message,
            confirm_focused,
            ..
        } => render_confirm(frame, title, message, *confirm_focused),
        Modal::Form(form) => render_form(frame, form),
        Modal::ServerPicker { servers, selected } => render_picker(frame, servers, *selected),
        Modal::Output { title, text, scroll } => render_output(frame, title, text, *scroll),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
        Modal::Palette { query, selected } => render_palette(app, frame, query, *selected),
    }
}

/// 计算居中的矩形区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并画出带标题的边框，返回内部区域
fn frame_block(frame: &mut Frame, area: Rect, title: &str, border: Style) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(colors().bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染确认弹窗
fn render_confirm(frame: &mut Frame, title: &str, message: &str, confirm_focused: bool) {
    let c = colors();
    let texts = t();
    let message_lines = message.lines().count() as u16;
    let area = centered_rect(56, message_lines + 6, frame.area());
    let inner = frame_block(frame, area, title, Style::default().fg(c.error));

    let cancel_style = if confirm_focused {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.bg).bg(c.fg)
    };

    let confirm_style = if confirm_focused {
        Style::default().fg(c.bg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let mut lines = vec![Line::from("")];
    for (i, line) in message.lines().enumerate() {
        // 第一行是操作对象，高亮显示
        let style = if i == 0 {
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD)
        } else {
            Styles::text()
        };
        lines.push(Line::styled(line.to_string(), style));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
        Span::raw("    "),
        Span::styled(format!(" {} ", texts.common.confirm), confirm_style),
    ]));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染表单弹窗
fn render_form(frame: &mut Frame, form: &FormState) {
    let c = colors();
    let fields = form.kind.fields();

    // 每个字段占三行（标签、输入框、空行），外加错误行和提示行
    let height = fields.len() as u16 * 3 + 5;
    let area = centered_rect(60, height, frame.area());
    let inner = frame_block(frame, area, form.kind.title(), Styles::border_focused());

    let mut lines = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let focused = form.focus == i;
        let label_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Styles::text()
        };

        let mut label = vec![Span::styled(field.label, label_style)];
        if field.required {
            label.push(Span::styled(" *", Style::default().fg(c.error)));
        }
        if let Some(hint) = field.hint {
            label.push(Span::styled(format!("  ({hint})"), Styles::muted()));
        }
        lines.push(Line::from(label));

        let value = form.value(i);
        let shown = if field.secret {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let (marker, value_style) = if focused {
            ("▎", Style::default().fg(c.fg).bg(c.selected_bg))
        } else {
            (" ", Styles::text())
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(c.highlight)),
            Span::styled(format!("{shown:<width$}", width = inner.width.saturating_sub(2) as usize), value_style),
        ]));
        lines.push(Line::from(""));
    }

    if let Some(error) = &form.error {
        lines.push(Line::styled(error.clone(), Style::default().fg(c.error)));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(t().form.submit_hint, Styles::muted()));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染服务器选择器
fn render_picker(frame: &mut Frame, servers: &[phorge_api::Server], selected: usize) {
    let texts = t();
    let height = (servers.len() as u16).clamp(1, 16) + 2;
    let area = centered_rect(64, height, frame.area());
    let inner = frame_block(frame, area, texts.modal.picker_title, Styles::border_focused());

    if servers.is_empty() {
        let paragraph = Paragraph::new(texts.modal.picker_empty)
            .style(Styles::muted())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let items: Vec<ListItem> = servers
        .iter()
        .map(|server| {
            let none = texts.common.none;
            ListItem::new(Line::from(vec![
                Span::styled(server.name.clone(), Styles::text()),
                Span::styled(
                    format!("  ({})", server.ip_address.as_deref().unwrap_or(texts.tree.no_ip)),
                    Styles::muted(),
                ),
                Span::styled(
                    format!(
                        "  {} / {}",
                        server.region.as_deref().unwrap_or(none),
                        server.provider.as_deref().unwrap_or(none)
                    ),
                    Styles::muted(),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected()).highlight_symbol("▸ ");
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, inner, &mut state);
}

/// 渲染命令面板：输入行 + 过滤后的命令
fn render_palette(app: &App, frame: &mut Frame, query: &str, selected: usize) {
    let c = colors();
    let texts = t();
    let entries = palette::matching(app, query);
    let height = (entries.len() as u16).clamp(1, 12) + 5;
    let area = centered_rect(60, height, frame.area());
    let inner = frame_block(frame, area, texts.modal.palette_title, Styles::border_focused());

    let input = Rect::new(inner.x, inner.y, inner.width, 1);
    let list_area = Rect::new(inner.x, inner.y + 2, inner.width, inner.height.saturating_sub(3));
    let footer = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);

    let prompt = Line::from(vec![
        Span::styled("> ", Style::default().fg(c.highlight)),
        Span::styled(query.to_string(), Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        Span::styled("▎", Style::default().fg(c.highlight)),
    ]);
    frame.render_widget(Paragraph::new(prompt), input);

    if entries.is_empty() {
        let empty = Paragraph::new(texts.modal.palette_empty).style(Styles::muted());
        frame.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| ListItem::new(Line::styled(entry.label.clone(), Styles::text())))
            .collect();
        let list = List::new(items).highlight_style(Styles::selected()).highlight_symbol("▸ ");
        let mut state = ListState::default();
        state.select(Some(selected));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    frame.render_widget(Paragraph::new(texts.modal.palette_hint).style(Styles::muted()), footer);
}

/// 渲染只读输出
fn render_output(frame: &mut Frame, title: &str, text: &str, scroll: u16) {
    let area = frame.area();
    let width = area.width.saturating_sub(8).max(20);
    let height = area.height.saturating_sub(4).max(6);
    let area = centered_rect(width, height, area);
    let inner = frame_block(frame, area, title, Styles::border_focused());

    let body = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let footer = Rect::new(inner.x, inner.y + body.height, inner.width, 1);

    let paragraph = Paragraph::new(text)
        .style(Styles::text())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, body);

    let hint = Paragraph::new(t().modal.close_hint)
        .style(Styles::muted())
        .alignment(Alignment::Right);
    frame.render_widget(hint, footer);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 9, frame.area());
    let inner = frame_block(frame, area, title, Style::default().fg(c.error));

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Styles::text()),
        Line::from(""),
        Line::styled(t().modal.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let h = &t().help;
    let sections: [(&str, &[(&str, &str)]); 4] = [
        (
            h.global,
            &[
                ("Tab", h.switch_focus),
                ("Ctrl+r", h.reload_tree),
                ("Alt+r", h.refresh_panel),
                ("Esc", h.back),
                ("Ctrl+p", h.palette),
                ("Alt+c", h.config),
                ("Alt+h / ?", h.help),
                ("Alt+q", h.quit),
            ],
        ),
        (
            h.tree,
            &[
                ("↑↓ / jk", h.move_cursor),
                ("Home/End", h.first_last),
                ("Enter", h.select_toggle),
                ("→ / l", h.expand),
                ("← / h", h.collapse),
                ("r", h.reload_sites),
                ("p", h.picker),
                ("D", h.toggle_default),
                (":", h.palette),
            ],
        ),
        (
            h.content,
            &[
                ("↑↓ / jk", h.rows),
                ("r", h.refresh_panel),
                ("a-z", h.panel_actions),
            ],
        ),
        (
            h.modal,
            &[
                ("Tab / ↑↓", h.fields),
                ("Enter", h.submit),
                ("Esc", h.cancel),
                ("←→", h.toggle),
            ],
        ),
    ];

    let mut lines = Vec::new();
    for (i, (title, keys)) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(*title, Styles::header()));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Styles::hint_key()),
                Span::styled(*desc, Styles::text()),
            ]));
        }
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(56, height, frame.area());
    let inner = frame_block(frame, area, t().modal.help_title, Styles::border_focused());
    frame.render_widget(Paragraph::new(lines), inner);
}
