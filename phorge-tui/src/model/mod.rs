//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              Model 层                                      │
//！│                                                                            │
//！│   App                                                                      │
//！│    ├─ tree: NavigationTree ────────── arena 节点 + 光标 + generation       │
//！│    │                                     │ TreeEvent                       │
//！│    │                                     ▼                                 │
//！│    ├─ detail: DetailView ──────────── 单槽位面板 + PanelInstance           │
//！│    ├─ loads: Loads ────────────────── 每个加载操作一个 LoadSlot            │
//！│    ├─ modal: ModalState                                                    │
//！│    └─ notifications: Notifications                                        │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 这一层不发起网络请求，异步结果由 Update 层核对票据后写入。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod mode;           // 导航模式（全部服务器 / 单服务器）
//!         pub mod node;       // 节点类型与节点数据
//!         pub mod tree;       // 导航树
//!         pub mod detail;     // 详情面板（单槽位）与面板注册表
//!         pub mod load;       // 加载槽位与票据
//!         pub mod notification; // 通知
//!         pub mod state;      // 弹窗、表单
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、最后一次请求获胜
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个逻辑加载（树、选择器、某个站点分组、某个面板）都有一个 LoadSlot：
//!
//!         Idle ──begin()──▶ Loading ──finish(最新票据)──▶ Idle
//!                              │
//!                              └─begin()─▶ Loading（旧票据作废）
//!
//!     finish() 只接受最近一次 begin() 发出的票据，旧结果返回 false 被丢弃。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、面板实例
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     DetailView::show() 总是先卸载再挂载，新面板拿到新的 PanelInstance。
//!     旧面板的数据即使晚到，也因实例不匹配而被丢弃：
//!
//!         show(A) → instance 1, ticket 1
//!         show(B) → instance 2, ticket 1
//!         A 的结果 (instance 1) 到达 → 丢弃
//!         B 的结果 (instance 2) 到达 → 写入
//!

mod app;
mod focus;
mod mode;

pub mod detail;
pub mod load;
pub mod node;
pub mod notification;
pub mod state;
pub mod tree;

pub use app::App;
pub use focus::FocusPanel;
pub use mode::NavigationMode;
pub use state::{FormKind, FormState, Modal, ModalState};
