//! 命令面板
//!
//! 条目在打开和过滤时按当前状态现算，不单独缓存：
//! 服务器列表或光标变化后，下一次按键看到的就是新条目。

use crate::i18n::t;
use crate::model::App;

/// 面板中的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
    /// 打开服务器选择器（单服务器模式）
    SwitchServer,
    /// 打开配置表单
    EditConfig,
    /// 重新加载导航树
    ReloadTree,
    /// 设置 / 清除光标处的项目默认值
    ToggleDefault,
    /// SSH 到服务器
    Ssh(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub label: String,
    pub command: PaletteCommand,
}

impl PaletteEntry {
    fn new(label: impl Into<String>, command: PaletteCommand) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

/// 当前可用的全部命令
pub fn entries(app: &App) -> Vec<PaletteEntry> {
    let texts = &t().modal;
    let mut entries = Vec::new();

    if app.mode.is_single() {
        entries.push(PaletteEntry::new(texts.palette_switch_server, PaletteCommand::SwitchServer));
    }
    entries.push(PaletteEntry::new(texts.palette_edit_config, PaletteCommand::EditConfig));
    entries.push(PaletteEntry::new(texts.palette_reload, PaletteCommand::ReloadTree));
    if app.tree.data(app.tree.cursor()).is_some() {
        entries.push(PaletteEntry::new(texts.palette_toggle_default, PaletteCommand::ToggleDefault));
    }

    let mut servers: Vec<_> = app.servers.values().collect();
    servers.sort_by(|a, b| a.name.cmp(&b.name));
    entries.extend(servers.into_iter().map(|server| {
        PaletteEntry::new(format!("{} {}", texts.palette_ssh, server.name), PaletteCommand::Ssh(server.id))
    }));

    entries
}

/// 过滤后的命令（保持原有顺序）
pub fn matching(app: &App, query: &str) -> Vec<PaletteEntry> {
    entries(app)
        .into_iter()
        .filter(|entry| fuzzy_match(query, &entry.label))
        .collect()
}

/// 忽略大小写的子序列匹配；空查询匹配一切
pub fn fuzzy_match(query: &str, text: &str) -> bool {
    let mut haystack = text.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .all(|needle| haystack.any(|c| c == needle))
}
