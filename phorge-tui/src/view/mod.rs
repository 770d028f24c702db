//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              View 层布局                                   │
//！│                                                                            │
//！│   ┌────────────────────────────────────────────────────────────────────┐   │
//！│   │ 标题栏：phorge · 模式 · 当前服务器                                  │   │
//！│   ├──────────────────────┬─────────────────────────────────────────────┤   │
//！│   │ components::tree     │ panels::render                              │   │
//！│   │                      │   Placeholder / Fallback / Panel            │   │
//！│   │ 导航树               │   按 PanelData 分发到具体渲染函数           │   │
//！│   │                      │                               ┌──────────┐ │   │
//！│   │                      │                               │ toasts   │ │   │
//！│   ├──────────────────────┴───────────────────────────────┴──────────┴─┤   │
//！│   │ components::statusbar：快捷键提示（含当前面板的动作表）            │   │
//！│   └────────────────────────────────────────────────────────────────────┘   │
//！│                      components::modal 覆盖在最上层                        │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod components;     // 导航树、状态栏、弹窗、通知
//!         mod panels;         // 详情面板
//!         pub mod theme;      // 主题和样式
//!

mod components;
mod layout;
mod panels;
pub mod theme;

pub use layout::render;
