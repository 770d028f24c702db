//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, DetailMessage, ModalMessage, TreeMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop,                                     // Resize 等：下一帧自动重绘
    }
}

/// 无修饰键，或只有 Shift（大写字母、`?`）
fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || (is_plain(&key) && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::RELOAD_TREE.matches(&key) {
        return AppMessage::ReloadTree;
    }

    if DefaultKeymap::REFRESH_PANEL.matches(&key) {
        return AppMessage::RefreshPanel;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::SWITCH_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::PALETTE.matches(&key) {
        return AppMessage::OpenPalette;
    }

    if DefaultKeymap::CONFIG.matches(&key) {
        return AppMessage::EditConfig;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_tree_keys(key, app.config.ui.vim_keys)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航树的按键
fn handle_tree_keys(key: KeyEvent, vim_keys: bool) -> AppMessage {
    if DefaultKeymap::RELOAD_SITES.matches(&key) {
        return AppMessage::Tree(TreeMessage::ReloadSites);
    }
    if DefaultKeymap::PICKER.matches(&key) {
        return AppMessage::OpenPicker;
    }
    if is_plain(&key) {
        match key.code {
            KeyCode::Char('D') => return AppMessage::Tree(TreeMessage::ToggleDefault),
            KeyCode::Char(':') => return AppMessage::OpenPalette,
            _ => {}
        }
    }

    let code = match key.code {
        // vim 风格按键映射到方向键
        KeyCode::Char('k') if vim_keys => KeyCode::Up,
        KeyCode::Char('j') if vim_keys => KeyCode::Down,
        KeyCode::Char('h') if vim_keys => KeyCode::Left,
        KeyCode::Char('l') if vim_keys => KeyCode::Right,
        code => code,
    };

    match code {
        KeyCode::Up => AppMessage::Tree(TreeMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Tree(TreeMessage::SelectNext),
        KeyCode::Home => AppMessage::Tree(TreeMessage::SelectFirst),
        KeyCode::End => AppMessage::Tree(TreeMessage::SelectLast),

        // Enter: 选中并展开/折叠
        KeyCode::Enter => AppMessage::Tree(TreeMessage::Activate),

        // →: 展开；←: 折叠或跳到父节点
        KeyCode::Right => AppMessage::Tree(TreeMessage::Expand),
        KeyCode::Left => AppMessage::Tree(TreeMessage::Collapse),

        _ => AppMessage::Noop,
    }
}

/// 处理内容区的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Detail(DetailMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Detail(DetailMessage::SelectNext),
        KeyCode::Home => AppMessage::Detail(DetailMessage::SelectFirst),
        KeyCode::End => AppMessage::Detail(DetailMessage::SelectLast),
        KeyCode::Enter => AppMessage::Detail(DetailMessage::DefaultAction),
        KeyCode::Char('r') if is_plain(&key) => AppMessage::RefreshPanel,

        // 面板动作：查当前面板的动作表
        KeyCode::Char(c) if is_plain(&key) => app
            .detail
            .panel()
            .and_then(|panel| panel.kind.action_for(c))
            .map_or(AppMessage::Noop, |action| {
                AppMessage::Detail(DetailMessage::Action(action))
            }),

        _ => AppMessage::Noop,
    }
}

// ============================================================================
// 弹窗
// ============================================================================

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let msg = match modal {
        Modal::Confirm { .. } => handle_confirm_keys(key),
        Modal::Form(_) => handle_form_keys(key),
        Modal::ServerPicker { .. } | Modal::Output { .. } => handle_list_keys(key),
        Modal::Error { .. } | Modal::Help => match key.code {
            KeyCode::Enter => Some(ModalMessage::Close),
            _ => None,
        },
        Modal::Palette { .. } => handle_palette_keys(key),
    };

    msg.map_or(AppMessage::Noop, AppMessage::Modal)
}

/// 确认弹窗：←/→/Tab 切换焦点，Enter 确认，y/n 快捷键
fn handle_confirm_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            Some(ModalMessage::ToggleConfirmFocus)
        }
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Char(c @ ('y' | 'Y' | 'n' | 'N')) => Some(ModalMessage::Input(c)),
        _ => None,
    }
}

fn handle_form_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => Some(ModalMessage::Next),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => Some(ModalMessage::Previous),

        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Backspace => Some(ModalMessage::Backspace),

        // 字符输入（允许 Shift）
        KeyCode::Char(c) if is_plain(&key) => Some(ModalMessage::Input(c)),

        _ => None,
    }
}

/// 命令面板：字母都用于过滤，只有方向键移动
fn handle_palette_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Up => Some(ModalMessage::Previous),
        KeyCode::Down => Some(ModalMessage::Next),
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Backspace => Some(ModalMessage::Backspace),
        KeyCode::Char(c) if is_plain(&key) => Some(ModalMessage::Input(c)),
        _ => None,
    }
}

/// 选择器与输出弹窗：上下移动 / 滚动
fn handle_list_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ModalMessage::Previous),
        KeyCode::Down | KeyCode::Char('j') => Some(ModalMessage::Next),
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Char('q') => Some(ModalMessage::Close),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;
    use crate::model::detail::PanelAction;
    use crate::model::node::{NodeData, NodeKind};
    use crate::model::FocusPanel;
    use crate::update::harness::Harness;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    // ---- global ----

    #[tokio::test]
    async fn release_events_are_ignored() {
        let h = Harness::new();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });

        assert!(matches!(handle_event(event, &h.app), AppMessage::Noop));
    }

    #[tokio::test]
    async fn ctrl_r_reloads_tree_from_anywhere() {
        let mut h = Harness::new();
        h.app.focus = FocusPanel::Content;

        let msg = handle_event(press(KeyCode::Char('r'), KeyModifiers::CONTROL), &h.app);

        assert!(matches!(msg, AppMessage::ReloadTree));
    }

    // ---- tree ----

    #[tokio::test]
    async fn vim_keys_follow_config() {
        let mut h = Harness::new();
        assert!(matches!(
            handle_event(key(KeyCode::Char('j')), &h.app),
            AppMessage::Tree(TreeMessage::SelectNext)
        ));

        h.app.config.ui.vim_keys = false;
        assert!(matches!(handle_event(key(KeyCode::Char('j')), &h.app), AppMessage::Noop));
    }

    #[tokio::test]
    async fn shift_d_toggles_default_and_colon_opens_palette() {
        let h = Harness::new();

        assert!(matches!(
            handle_event(press(KeyCode::Char('D'), KeyModifiers::SHIFT), &h.app),
            AppMessage::Tree(TreeMessage::ToggleDefault)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char(':')), &h.app),
            AppMessage::OpenPalette
        ));
    }

    #[tokio::test]
    async fn palette_and_config_bindings_work_from_content() {
        let mut h = Harness::new();
        h.app.focus = FocusPanel::Content;

        assert!(matches!(
            handle_event(press(KeyCode::Char('p'), KeyModifiers::CONTROL), &h.app),
            AppMessage::OpenPalette
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::ALT), &h.app),
            AppMessage::EditConfig
        ));
    }

    // ---- content ----

    #[tokio::test]
    async fn action_letters_come_from_mounted_panel() {
        let mut h = Harness::new();
        h.app.focus = FocusPanel::Content;
        h.app.detail.show(&NodeData::new(NodeKind::Deployments, 1));

        let msg = handle_event(press(KeyCode::Char('R'), KeyModifiers::SHIFT), &h.app);
        assert!(matches!(
            msg,
            AppMessage::Detail(DetailMessage::Action(PanelAction::ResetDeployment))
        ));

        // 服务器面板没有 'q'
        h.app.detail.show(&NodeData::new(NodeKind::ServerInfo, 1));
        assert!(matches!(handle_event(key(KeyCode::Char('q')), &h.app), AppMessage::Noop));
    }

    #[tokio::test]
    async fn plain_r_refreshes_panel_in_content() {
        let mut h = Harness::new();
        h.app.focus = FocusPanel::Content;

        assert!(matches!(
            handle_event(key(KeyCode::Char('r')), &h.app),
            AppMessage::RefreshPanel
        ));
    }

    // ---- modal ----

    #[tokio::test]
    async fn modal_swallows_global_keys() {
        let mut h = Harness::new();
        h.app.modal.show_form(crate::model::FormState::new(crate::model::FormKind::ApiKey, None, None));

        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &h.app),
            AppMessage::Modal(ModalMessage::Input('?'))
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &h.app),
            AppMessage::Modal(ModalMessage::Next)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &h.app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[tokio::test]
    async fn palette_treats_letters_as_query() {
        let mut h = Harness::new();
        h.app.modal.show_palette();

        assert!(matches!(
            handle_event(key(KeyCode::Char('j')), &h.app),
            AppMessage::Modal(ModalMessage::Input('j'))
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Down), &h.app),
            AppMessage::Modal(ModalMessage::Next)
        ));
    }
}
