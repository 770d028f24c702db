//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌──────────┐  crossterm   ┌──────────┐   AppMessage   ┌──────────┐      │
//！│   │   终端   │ ───────────▶ │  Event   │ ─────────────▶ │  Update  │      │
//！│   │          │    Event     │    层    │                │    层    │      │
//！│   └──────────┘              └──────────┘                └──────────┘      │
//！│                                  │                                        │
//！│                                  │ 只读 App（焦点、弹窗、面板类型）       │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     handle_event 的判断顺序：
//!         1. 只处理 Press 事件
//!         2. 有弹窗打开时，按弹窗类型处理（弹窗独占键盘）
//!         3. 全局快捷键（退出、帮助、Tab、Ctrl+r、Alt+r、Esc）
//!         4. 焦点在导航树 → handle_tree_keys
//!            焦点在内容区 → handle_content_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 面板动作键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     内容区的字母键不在这里写死，而是查询当前面板类型的动作表：
//!
//!         panel.kind.action_for('d')  ──▶ Some(PanelAction::Deploy)
//!                                     ──▶ AppMessage::Detail(DetailMessage::Action(..))
//!
//!     动作表同时用于状态栏提示，两处不会不一致。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
