//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every pastebox operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs`, owns the [`PasteStore`], and returns
//! structured [`CmdResult`]s. It does no printing and holds no business
//! logic. A warning produced while the store was opened (an unreadable slot)
//! is attached to the first result handed out.
//!
//! `PasteApi<B: KvBackend>` is generic over the backend:
//! - Production: `PasteApi<FsBackend>`
//! - Testing: `PasteApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{PasteDraft, PasteUpdate};
use crate::store::{KvBackend, PasteStore, Persistence};
use std::path::PathBuf;

pub struct PasteApi<B: KvBackend> {
    store: PasteStore<B>,
    paths: commands::PasteboxPaths,
}

impl<B: KvBackend> PasteApi<B> {
    pub fn new(store: PasteStore<B>, paths: commands::PasteboxPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_paste(&mut self, draft: PasteDraft) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.store, draft)?;
        Ok(self.finish(result))
    }

    pub fn update_paste(&mut self, update: PasteUpdate) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.store, update)?;
        Ok(self.finish(result))
    }

    pub fn patch_paste(
        &mut self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::patch(&mut self.store, id, title, content)?;
        Ok(self.finish(result))
    }

    pub fn delete_pastes<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, ids)?;
        Ok(self.finish(result))
    }

    pub fn reset(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        let result = commands::reset::run(&mut self.store, confirmed)?;
        Ok(self.finish(result))
    }

    pub fn list_pastes(&mut self) -> Result<commands::CmdResult> {
        let result = commands::list::run(&self.store)?;
        Ok(self.finish(result))
    }

    pub fn search_pastes(&mut self, term: &str) -> Result<commands::CmdResult> {
        let result = commands::search::run(&self.store, term)?;
        Ok(self.finish(result))
    }

    pub fn view_pastes<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let result = commands::view::run(&self.store, ids)?;
        Ok(self.finish(result))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn flush(&mut self) -> Persistence {
        self.store.flush()
    }

    pub fn slot_path(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &PasteStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &commands::PasteboxPaths {
        &self.paths
    }

    fn finish(&mut self, mut result: commands::CmdResult) -> commands::CmdResult {
        if let Some(warning) = self.store.take_load_warning() {
            result
                .messages
                .insert(0, commands::CmdMessage::warning(warning));
        }
        result
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedPaste, MessageLevel, PasteboxPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::paste_store::DEFAULT_SLOT;

    fn api_over(backend: MemBackend) -> PasteApi<MemBackend> {
        let paths = PasteboxPaths {
            data_dir: PathBuf::from("/tmp/pastebox-api-test"),
        };
        PasteApi::new(PasteStore::open(backend), paths)
    }

    #[test]
    fn create_dispatches_and_returns_paste() {
        let mut api = api_over(MemBackend::new());
        let result = api.create_paste(PasteDraft::new("A", "hello")).unwrap();

        assert_eq!(result.affected_pastes[0].title, "A");
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn load_warning_is_reported_once() {
        let mut api = api_over(MemBackend::with_slot(DEFAULT_SLOT, "[oops"));

        let first = api.list_pastes().unwrap();
        assert_eq!(first.messages[0].level, MessageLevel::Warning);

        let second = api.list_pastes().unwrap();
        assert!(second.messages.is_empty());
    }

    #[test]
    fn patch_dispatches_to_update() {
        let mut api = api_over(MemBackend::new());
        let id = api
            .create_paste(PasteDraft::new("A", "hello"))
            .unwrap()
            .affected_pastes[0]
            .id
            .clone();

        api.patch_paste(&id, None, Some("bye".into())).unwrap();
        let viewed = api.view_pastes(&[id]).unwrap();
        assert_eq!(viewed.listed_pastes[0].paste.content, "bye");
        assert_eq!(viewed.listed_pastes[0].paste.title, "A");
    }

    #[test]
    fn slot_path_reports_backend_location() {
        let api = api_over(MemBackend::new());
        assert_eq!(api.slot_path(), PathBuf::from("memory://pastes"));
    }
}
