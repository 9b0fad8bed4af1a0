use crate::config::PasteboxConfig;
use crate::model::Paste;
use crate::store::Persistence;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod reset;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct PasteboxPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A paste together with its 1-based position in the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPaste {
    pub position: usize,
    pub paste: Paste,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_pastes: Vec<Paste>,
    pub listed_pastes: Vec<ListedPaste>,
    pub config: Option<PasteboxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_pastes(mut self, pastes: Vec<ListedPaste>) -> Self {
        self.listed_pastes = pastes;
        self
    }

    pub fn with_config(mut self, config: PasteboxConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }

    /// Turn a failed write into a warning. The change itself is kept in memory.
    pub fn note_persistence(&mut self, persistence: &Persistence) {
        if let Some(e) = persistence.failure() {
            self.add_message(CmdMessage::warning(format!(
                "Change kept in memory but could not be saved: {}",
                e
            )));
        }
    }
}

pub(crate) fn listed(pastes: &[Paste]) -> Vec<ListedPaste> {
    pastes
        .iter()
        .enumerate()
        .map(|(i, paste)| ListedPaste {
            position: i + 1,
            paste: paste.clone(),
        })
        .collect()
}
