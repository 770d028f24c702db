//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐   按键     ┌───────────────┐   消费    ┌──────────┐         │
//！│   │  Event  │ ─────────▶ │               │ ────────▶ │  Update  │         │
//！│   │   层    │            │  AppMessage   │           │    层    │         │
//！│   └─────────┘            │   ├ Tree      │           └──────────┘         │
//！│                          │   ├ Detail    │                                │
//！│   ┌─────────┐   完成     │   ├ Modal     │                                │
//！│   │ Backend │ ─────────▶ │   ├ Backend   │                                │
//！│   │  任务   │  (mpsc)    │   └ External  │                                │
//！│   └─────────┘            └───────────────┘                                │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend ──▶ Update 之间的桥梁。
//! 按键和后台任务的完成都被翻译成 [`AppMessage`]，Update 层只认识消息。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage 主消息
//!         mod tree;       // 导航树
//!         mod detail;     // 详情面板
//!         mod modal;      // 弹窗
//!         mod backend;    // 后台任务结果
//!
//!
//!     后台事件都携带发起时拿到的票据（Ticket）或面板实例（PanelInstance）：
//!
//!         BackendEvent::SitesLoaded { generation, node, ticket, result }
//!             generation  树的代数，树重建后旧结果作废
//!             node        发起加载的站点分组
//!             ticket      该分组最近一次加载的票据
//!
//!     Update 层先核对这些标记，再决定是否写入模型。
//!

mod app;
mod backend;
mod detail;
mod modal;
mod tree;

pub use app::AppMessage;
pub use backend::BackendEvent;
pub use detail::DetailMessage;
pub use modal::ModalMessage;
pub use tree::TreeMessage;
