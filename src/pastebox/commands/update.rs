use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PasteUpdate;
use crate::store::{KvBackend, PasteStore};

pub fn run<B: KvBackend>(store: &mut PasteStore<B>, update: PasteUpdate) -> Result<CmdResult> {
    let id = update.id.clone();
    let updated = store.update(update);
    let mut result = CmdResult::default();

    match updated.value {
        Some(paste) => {
            result.add_message(CmdMessage::success(format!(
                "Paste updated ({}): {}",
                paste.id, paste.title
            )));
            result.note_persistence(&updated.persistence);
            result.affected_pastes.push(paste);
        }
        None => result.add_message(CmdMessage::info(format!("No paste with id {}", id))),
    }

    Ok(result)
}

/// Update only the given fields, keeping the current value of the others.
pub fn patch<B: KvBackend>(
    store: &mut PasteStore<B>,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<CmdResult> {
    let Some(current) = store.get(id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("No paste with id {}", id)));
        return Ok(result);
    };

    let update = PasteUpdate {
        id: current.id.clone(),
        title: title.unwrap_or_else(|| current.title.clone()),
        content: content.unwrap_or_else(|| current.content.clone()),
    };
    run(store, update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::paste_store::fixtures::store_with;

    #[test]
    fn updates_paste_content() {
        let mut store = store_with(1);
        let id = store.list()[0].id.clone();

        run(&mut store, PasteUpdate::new(&id, "Title", "New")).unwrap();
        assert_eq!(store.get(&id).unwrap().content, "New");
    }

    #[test]
    fn unknown_id_reports_info_only() {
        let mut store = store_with(1);
        let result = run(&mut store, PasteUpdate::new("ghost", "T", "C")).unwrap();

        assert!(result.affected_pastes.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.list()[0].title, "Paste 1");
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let mut store = store_with(1);
        let id = store.list()[0].id.clone();

        patch(&mut store, &id, Some("Renamed".into()), None).unwrap();
        let paste = store.get(&id).unwrap();
        assert_eq!(paste.title, "Renamed");
        assert_eq!(paste.content, "Content 1");
    }
}
