use crate::error::DashError;
use crate::model::{Dashboard, DashboardSummary};
use serde_json::Value;
use std::path::PathBuf;

pub mod delete;
pub mod helpers;
pub mod new_file;
pub mod post;
pub mod pull;
pub mod pull_all;
pub mod push;
pub mod show;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One item of a batch that could not be processed.
#[derive(Debug)]
pub struct ItemFailure {
    /// Dashboard id (pull_all) or file path (push)
    pub item: String,
    pub error: DashError,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Response body of the service call, for display
    pub response: Option<Value>,
    pub dashboards: Vec<Dashboard>,
    pub summaries: Vec<DashboardSummary>,
    pub written_files: Vec<PathBuf>,
    pub failures: Vec<ItemFailure>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_response(mut self, body: Value) -> Self {
        self.response = Some(body);
        self
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub(crate) fn record_failure(&mut self, item: impl Into<String>, error: DashError) {
        let item = item.into();
        tracing::debug!(%item, %error, "batch item failed");
        self.add_message(CmdMessage::error(format!("{}: {}", item, error)));
        self.failures.push(ItemFailure { item, error });
    }
}
