//! 导航树消息

/// 导航树消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMessage {
    /// 上一行
    SelectPrevious,
    /// 下一行
    SelectNext,
    /// 第一行
    SelectFirst,
    /// 最后一行
    SelectLast,
    /// 选中并切换展开状态（Enter）
    Activate,
    /// 展开
    Expand,
    /// 收起，已收起时跳到父节点
    Collapse,
    /// 重新加载光标所在分组的站点
    ReloadSites,
    /// 把光标处的服务器 / 站点设为项目默认，已是默认则清除
    ToggleDefault,
}
