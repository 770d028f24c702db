//! 详情面板消息

use crate::model::detail::PanelAction;

/// 详情面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 面板动作（按键已在 event 层映射）
    Action(PanelAction),
    /// Enter：面板的默认动作
    DefaultAction,
}
