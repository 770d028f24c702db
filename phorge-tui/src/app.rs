//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否退出
//!     if let Some(cmd) = app.pending_external.take() {
//!         suspend → cmd.run() → resume                // SSH / SFTP / 编辑器独占终端
//!         update(External(outcome))
//!     }
//!     while let Ok(event) = rx.try_recv() {           // 收取后台任务的结果
//!         update(Backend(event))
//!     }
//!     if let Some(event) = poll_event(100ms) {        // 轮询按键
//!         update(handle_event(event, &app))
//!     }
//!     notifications.expire(now)                       // 清理过期通知
//! }
//!
//! 后台任务只通过通道把结果送回来，模型始终只在这个线程上修改。

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;
use crate::update;
use crate::util::{self, Term};
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, mut rx: UnboundedReceiver<BackendEvent>) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 外部命令
        if let Some(command) = app.pending_external.take() {
            util::suspend(terminal)?;
            let outcome = command.run();
            util::resume(terminal)?;
            update::update(app, AppMessage::External(outcome));
            continue;
        }

        // 4. 后台结果
        while let Ok(event) = rx.try_recv() {
            update::update(app, AppMessage::Backend(event));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        app.notifications.expire(Instant::now());
    }

    Ok(())
}
