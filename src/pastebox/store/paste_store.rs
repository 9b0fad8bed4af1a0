use super::KvBackend;
use crate::error::{PasteError, Result};
use crate::id::IdGenerator;
use crate::model::{Paste, PasteDraft, PasteUpdate};
use tracing::{debug, info, warn};

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "pastes";

/// What happened to the persisted mirror after a mutation.
#[derive(Debug)]
pub enum Persistence {
    /// The full collection was written to the slot.
    Flushed,
    /// The slot was removed.
    Removed,
    /// Nothing changed, so nothing was written.
    Unchanged,
    /// The write failed. The in-memory change stands and the store is dirty.
    Failed(PasteError),
}

impl Persistence {
    pub fn is_failed(&self) -> bool {
        matches!(self, Persistence::Failed(_))
    }

    pub fn failure(&self) -> Option<&PasteError> {
        match self {
            Persistence::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Result of a store mutation: the affected value plus the persistence outcome.
#[derive(Debug)]
#[must_use]
pub struct Mutation<T> {
    pub value: T,
    pub persistence: Persistence,
}

impl<T> Mutation<T> {
    fn unchanged(value: T) -> Self {
        Self {
            value,
            persistence: Persistence::Unchanged,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Write,
    Remove,
}

/// The authoritative, ordered collection of pastes.
///
/// Opening a store reads the slot once. From then on the in-memory list is
/// the truth and every mutation overwrites the slot with the full list.
/// Updates and deletes aimed at an unknown id are silent no-ops.
pub struct PasteStore<B: KvBackend> {
    backend: B,
    slot: String,
    pastes: Vec<Paste>,
    ids: IdGenerator,
    pending: Option<Pending>,
    load_warning: Option<String>,
}

impl<B: KvBackend> PasteStore<B> {
    pub fn open(backend: B) -> Self {
        Self::open_slot(backend, DEFAULT_SLOT)
    }

    /// Open the store over `slot`. Never fails: an unreadable or corrupt slot
    /// yields an empty collection and a warning kept for [`Self::take_load_warning`].
    pub fn open_slot(backend: B, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let (pastes, load_warning) = match load(&backend, &slot) {
            Ok(pastes) => (pastes, None),
            Err(e) => {
                warn!(slot = %slot, error = %e, "could not load pastes, starting empty");
                let message = format!(
                    "Stored pastes at {} could not be read ({}); starting with an empty list",
                    backend.location(&slot).display(),
                    e
                );
                (Vec::new(), Some(message))
            }
        };
        debug!(slot = %slot, count = pastes.len(), "paste store opened");

        Self {
            backend,
            slot,
            pastes,
            ids: IdGenerator::new(),
            pending: None,
            load_warning,
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> std::path::PathBuf {
        self.backend.location(&self.slot)
    }

    /// Warning produced while opening, handed out once.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    /// Ordered snapshot of every paste.
    pub fn list(&self) -> &[Paste] {
        &self.pastes
    }

    pub fn get(&self, id: &str) -> Option<&Paste> {
        self.pastes.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pastes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pastes.is_empty()
    }

    /// True while the slot is behind the in-memory collection.
    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Append a new paste.
    ///
    /// A caller-supplied id must not already exist; that is the only error.
    pub fn create(&mut self, draft: PasteDraft) -> Result<Mutation<Paste>> {
        let id = match draft.id {
            Some(id) => {
                if id.trim().is_empty() {
                    return Err(PasteError::Api("Paste id cannot be empty".to_string()));
                }
                if self.position(&id).is_some() {
                    return Err(PasteError::DuplicateId(id));
                }
                id
            }
            None => {
                let pastes = &self.pastes;
                self.ids
                    .next_unused(|candidate| pastes.iter().any(|p| p.id == candidate))
            }
        };

        let paste = Paste::new(id, draft.title, draft.content);
        self.pastes.push(paste.clone());
        debug!(id = %paste.id, "paste created");

        Ok(Mutation {
            value: paste,
            persistence: self.persist(),
        })
    }

    /// Replace title and content of the paste with the same id, in place.
    /// `created_at` is kept.
    pub fn update(&mut self, update: PasteUpdate) -> Mutation<Option<Paste>> {
        let Some(index) = self.position(&update.id) else {
            debug!(id = %update.id, "update ignored, no such paste");
            return Mutation::unchanged(None);
        };

        let paste = &mut self.pastes[index];
        paste.title = update.title;
        paste.content = update.content;
        let updated = paste.clone();
        debug!(id = %updated.id, index, "paste updated");

        Mutation {
            value: Some(updated),
            persistence: self.persist(),
        }
    }

    pub fn delete(&mut self, id: &str) -> Mutation<Option<Paste>> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "delete ignored, no such paste");
            return Mutation::unchanged(None);
        };

        let removed = self.pastes.remove(index);
        debug!(id = %removed.id, index, "paste deleted");

        Mutation {
            value: Some(removed),
            persistence: self.persist(),
        }
    }

    /// Drop every paste and remove the slot itself.
    pub fn reset(&mut self) -> Mutation<usize> {
        let count = self.pastes.len();
        self.pastes.clear();
        info!(slot = %self.slot, count, "paste store reset");

        Mutation {
            value: count,
            persistence: self.remove_slot(),
        }
    }

    /// Bring the slot up to date with the in-memory collection.
    pub fn flush(&mut self) -> Persistence {
        match self.pending {
            Some(Pending::Remove) => self.remove_slot(),
            Some(Pending::Write) | None => self.persist(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.pastes.iter().position(|p| p.id == id)
    }

    fn persist(&mut self) -> Persistence {
        let outcome = serde_json::to_string_pretty(&self.pastes)
            .map_err(PasteError::Serialization)
            .and_then(|raw| self.backend.write(&self.slot, &raw));

        match outcome {
            Ok(()) => {
                self.pending = None;
                debug!(slot = %self.slot, count = self.pastes.len(), "pastes persisted");
                Persistence::Flushed
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "failed to persist pastes");
                self.pending = Some(Pending::Write);
                Persistence::Failed(e)
            }
        }
    }

    fn remove_slot(&mut self) -> Persistence {
        match self.backend.remove(&self.slot) {
            Ok(()) => {
                self.pending = None;
                Persistence::Removed
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "failed to remove paste slot");
                self.pending = Some(Pending::Remove);
                Persistence::Failed(e)
            }
        }
    }
}

fn load<B: KvBackend>(backend: &B, slot: &str) -> Result<Vec<Paste>> {
    let Some(raw) = backend.read(slot)? else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let stored: Vec<Paste> = serde_json::from_str(&raw).map_err(PasteError::Serialization)?;

    // Keep the first record for any repeated id.
    let mut pastes: Vec<Paste> = Vec::with_capacity(stored.len());
    for paste in stored {
        if pastes.iter().any(|p| p.id == paste.id) {
            warn!(id = %paste.id, "dropping stored paste with duplicate id");
            continue;
        }
        pastes.push(paste);
    }
    Ok(pastes)
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    pub fn empty_store() -> PasteStore<MemBackend> {
        PasteStore::open(MemBackend::new())
    }

    /// Store holding `count` pastes titled `Paste 1..=count`.
    pub fn store_with(count: usize) -> PasteStore<MemBackend> {
        let mut store = empty_store();
        for i in 1..=count {
            let draft = PasteDraft::new(format!("Paste {}", i), format!("Content {}", i));
            let _ = store.create(draft).unwrap();
        }
        store
    }
}
