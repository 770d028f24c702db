//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use phorge_api::ForgeClient;
use phorge_api::test_utils::MockTransport;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 基于 MockTransport 的测试上下文
pub struct MockContext {
    pub mock: Arc<MockTransport>,
    pub client: ForgeClient,
}

impl MockContext {
    pub fn new() -> Self {
        let mock = Arc::new(MockTransport::new());
        let client = ForgeClient::with_transport(mock.clone());
        Self { mock, client }
    }
}
