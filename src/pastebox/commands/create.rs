use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PasteDraft;
use crate::store::{KvBackend, PasteStore};

pub fn run<B: KvBackend>(store: &mut PasteStore<B>, draft: PasteDraft) -> Result<CmdResult> {
    let created = store.create(draft)?;
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::success(format!(
        "Paste created ({}): {}",
        created.value.id, created.value.title
    )));
    result.note_persistence(&created.persistence);
    result.affected_pastes.push(created.value);

    Ok(result)
}
