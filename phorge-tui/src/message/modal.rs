//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段 / 选择器下一项 / 输出向下滚动
    Next,

    /// 上一个输入字段 / 选择器上一项 / 输出向上滚动
    Previous,

    /// 确认/提交
    Confirm,

    /// 在确认弹窗中切换焦点
    ToggleConfirmFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
