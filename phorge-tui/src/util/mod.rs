//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                               Util 层                                      │
//！│                                                                            │
//！│   main.rs ──▶ init_logging()   文件日志（tracing + tracing-appender）       │
//！│           ──▶ init_terminal()  原始模式 + 备用屏幕                          │
//！│                                                                            │
//！│   app.rs  ──▶ suspend() ──▶ ssh / termscp / $EDITOR ──▶ resume()           │
//！│                                                                            │
//！│   退出    ──▶ restore_terminal()                                           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/util/mod.rs
//! Util 层：与业务逻辑无关的基础设施
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志订阅者，写入文件
//!         mod terminal;       // 终端初始化、恢复、挂起
//!
//!
//!     日志：
//!         TUI 占用终端，日志一律写文件：
//!             默认    <state dir>/phorge/phorge.log
//!             覆盖    --log-file <path>
//!             级别    PHORGE_LOG（EnvFilter 语法，默认 info）
//!
//!         代码里统一使用 log 宏（log::info! 等），由 tracing-subscriber 桥接。
//!         init_logging() 返回的 WorkerGuard 必须一直持有到 main 结束。
//!
//!
//!     终端：
//!         无论主循环正常退出还是出错，main 都会先 restore_terminal() 再返回结果，
//!         否则终端会停留在原始模式。
//!
//!         SSH、SFTP 和编辑器需要独占终端，主循环用 suspend() / resume() 包住它们。
//!

mod logging;
mod terminal;

pub use logging::{default_log_file, init_logging};
pub use terminal::{init_terminal, restore_terminal, resume, suspend, Term};
