//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = hints(app);
    let separator = Style::default().fg(colors().muted);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(key.clone(), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点和当前面板生成快捷键提示
fn hints(app: &App) -> Vec<(String, &'static str)> {
    let h = &t().hints;
    let mut hints: Vec<(String, &'static str)> = vec![("Tab".into(), h.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓".into(), h.navigate));
            hints.push(("Enter".into(), h.select));
            hints.push(("→".into(), h.expand));
            hints.push(("Ctrl+r".into(), h.reload));
            if app.mode.is_single() {
                hints.push(("p".into(), h.picker));
            }
        }
        FocusPanel::Content => {
            hints.push(("↑↓".into(), h.rows));
            // 当前面板的动作表
            if let Some(panel) = app.detail.panel() {
                for binding in panel.kind.actions() {
                    hints.push((binding.key.to_string(), binding.action.label()));
                }
            }
            hints.push(("Alt+r".into(), h.refresh));
        }
    }

    hints.push(("?".into(), h.help));
    hints.push(("Alt+q".into(), h.quit));
    hints
}
