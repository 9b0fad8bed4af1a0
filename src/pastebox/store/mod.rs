//! # Storage Layer
//!
//! Pastes live in memory inside a [`PasteStore`], which is the only source of
//! truth. Every mutation is mirrored to a single named slot of a key-value
//! [`KvBackend`]. The slot is read once, when the store is opened, and is
//! otherwise only ever overwritten or removed.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, one JSON file per slot
//!   (`<root>/<slot>.json`), written atomically through a temp file.
//! - [`mem_backend::MemBackend`]: in-memory backend for tests, with write
//!   failure simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── pastes.json     # The slot: JSON array of pastes, insertion order
//! └── config.json     # PasteboxConfig
//! ```
//!
//! ## Cost
//!
//! Lookups scan the list and every mutation rewrites the whole slot, so each
//! mutation is O(n) in the number of pastes. That is fine for a personal
//! list of a few thousand entries and is the ceiling for anything larger.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs_backend;
pub mod mem_backend;
pub mod paste_store;

pub use paste_store::{Mutation, PasteStore, Persistence};

/// Synchronous key-value capability the store persists into.
pub trait KvBackend {
    /// Raw value of `key`, `None` if the key was never written or was removed.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite `key` with `value`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Where `key` lives, for display purposes.
    fn location(&self, key: &str) -> PathBuf;
}

/// Lets a store borrow a backend the caller keeps inspecting.
impl<B: KvBackend> KvBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn location(&self, key: &str) -> PathBuf {
        (**self).location(key)
    }
}
