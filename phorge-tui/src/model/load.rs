//! 异步加载槽
//!
//! 每个可加载区域（整棵树、服务器选择器、某个站点分组、某个面板）持有一个 [`LoadSlot`]。
//! 发起请求时拿到一张 [`Ticket`]，结果回来时凭票核销：
//! 只有最新发出的那张票能被接受，旧票的结果一律丢弃（后发先至也不例外）。
//!
//! ```text
//! Idle ──begin()──▶ Loading ──finish(最新票)──▶ Idle
//!                     │  ▲
//!                     └──┘ begin()：旧票作废
//! ```

/// 加载票据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// 单飞加载槽
#[derive(Debug, Clone, Default)]
pub struct LoadSlot {
    /// 已发出的最后一张票
    issued: u64,
    /// 正在等待的票
    in_flight: Option<u64>,
}

impl LoadSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发起新请求，之前未完成的请求随之作废
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight = Some(self.issued);
        Ticket(self.issued)
    }

    /// 是否有请求在途
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 核销票据：只有在途的最新票返回 true，并回到 Idle
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket.0) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}
