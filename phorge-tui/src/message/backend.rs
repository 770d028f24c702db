//! 后台任务完成后发回主循环的事件

use phorge_api::{ForgeError, Server, Site, User};

use crate::model::detail::{PanelData, PanelInstance};
use crate::model::load::Ticket;
use crate::model::tree::NodeId;

/// 后台事件
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 全部服务器列表（树模式）
    ServersLoaded {
        ticket: Ticket,
        result: Result<Vec<Server>, ForgeError>,
    },

    /// 服务器选择器的列表（单服务器模式）
    PickerLoaded {
        ticket: Ticket,
        result: Result<Vec<Server>, ForgeError>,
    },

    /// 单台服务器及其站点
    SingleServerLoaded {
        ticket: Ticket,
        result: Result<(Server, Vec<Site>), ForgeError>,
    },

    /// 某个站点分组的站点列表
    SitesLoaded {
        generation: u64,
        node: NodeId,
        ticket: Ticket,
        result: Result<Vec<Site>, ForgeError>,
    },

    /// 面板数据
    PanelLoaded {
        instance: PanelInstance,
        ticket: Ticket,
        result: Result<PanelData, ForgeError>,
    },

    /// 变更操作完成
    MutationFinished {
        instance: Option<PanelInstance>,
        description: &'static str,
        result: Result<(), ForgeError>,
    },

    /// 只读文本查询完成（日志、部署输出）
    LookupFinished {
        title: &'static str,
        result: Result<String, ForgeError>,
    },

    /// 新 API 密钥校验完成
    ApiKeyChecked {
        api_key: String,
        result: Result<User, ForgeError>,
    },
}
