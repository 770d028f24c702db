//! 弹窗/对话框状态

use phorge_api::Server;

use crate::backend::Mutation;
use crate::model::detail::PanelInstance;

use super::form::FormState;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 破坏性操作确认
    Confirm {
        title: String,
        message: String,
        mutation: Box<Mutation>,
        instance: Option<PanelInstance>,
        /// 焦点在"确认"按钮上（默认在"取消"）
        confirm_focused: bool,
    },

    /// 多字段输入
    Form(Box<FormState>),

    /// 单服务器模式的服务器选择器
    ServerPicker { servers: Vec<Server>, selected: usize },

    /// 只读文本（日志、部署输出）
    Output {
        title: String,
        text: String,
        scroll: u16,
    },

    /// 错误弹窗
    Error { title: String, message: String },

    /// 帮助
    Help,

    /// 命令面板
    Palette { query: String, selected: usize },
}

/// 弹窗状态容器
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        mutation: Mutation,
        instance: Option<PanelInstance>,
    ) {
        self.active = Some(Modal::Confirm {
            title: title.into(),
            message: message.into(),
            mutation: Box::new(mutation),
            instance,
            confirm_focused: false,
        });
    }

    pub fn show_form(&mut self, form: FormState) {
        self.active = Some(Modal::Form(Box::new(form)));
    }

    pub fn show_picker(&mut self, servers: Vec<Server>, selected: usize) {
        self.active = Some(Modal::ServerPicker { servers, selected });
    }

    pub fn show_output(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.active = Some(Modal::Output {
            title: title.into(),
            text: text.into(),
            scroll: 0,
        });
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_palette(&mut self) {
        self.active = Some(Modal::Palette {
            query: String::new(),
            selected: 0,
        });
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.active {
            Some(Modal::Form(form)) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.active {
            Some(Modal::Form(form)) => Some(form),
            _ => None,
        }
    }
}
