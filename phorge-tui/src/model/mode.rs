//! 导航模式

use serde::{Deserialize, Serialize};

/// 导航模式
///
/// - `AllServers`：树中列出账号下的所有服务器，站点在展开时懒加载
/// - `SingleServer`：启动时选择一台服务器，站点立即加载
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavigationMode {
    #[default]
    #[serde(rename = "tree", alias = "all")]
    AllServers,
    #[serde(rename = "single")]
    SingleServer,
}

impl NavigationMode {
    pub fn is_single(self) -> bool {
        matches!(self, Self::SingleServer)
    }
}

impl std::str::FromStr for NavigationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" | "all" => Ok(Self::AllServers),
            "single" => Ok(Self::SingleServer),
            other => Err(format!("unknown mode '{other}' (expected 'tree' or 'single')")),
        }
    }
}
