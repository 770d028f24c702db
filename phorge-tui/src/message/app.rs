//! 应用主消息枚举

use crate::backend::ExternalOutcome;

use super::{BackendEvent, DetailMessage, ModalMessage, TreeMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航树相关消息
    Tree(TreeMessage),

    /// 详情面板相关消息
    Detail(DetailMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务完成
    Backend(BackendEvent),

    /// 外部命令结束
    External(ExternalOutcome),

    /// 重新执行构建当前树的加载
    ReloadTree,

    /// 刷新当前面板
    RefreshPanel,

    /// 打开服务器选择器（单服务器模式）
    OpenPicker,

    /// 显示帮助
    ShowHelp,

    /// 打开命令面板
    OpenPalette,

    /// 打开配置表单
    EditConfig,

    /// 返回（内容区 → 导航树）
    GoBack,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
