use crate::config::QuillConfig;
use std::path::PathBuf;

pub mod config;
pub mod convert;
pub mod info;

pub use info::{NotebookSummary, PageSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written_files: Vec<PathBuf>,
    pub summary: Option<NotebookSummary>,
    pub config: Option<QuillConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written_files(mut self, files: Vec<PathBuf>) -> Self {
        self.written_files = files;
        self
    }

    pub fn with_summary(mut self, summary: NotebookSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: QuillConfig) -> Self {
        self.config = Some(config);
        self
    }
}
