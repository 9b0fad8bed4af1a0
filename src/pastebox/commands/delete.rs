use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KvBackend, PasteStore};

pub fn run<B: KvBackend, I: AsRef<str>>(store: &mut PasteStore<B>, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let deleted = store.delete(id);
        match deleted.value {
            Some(paste) => {
                result.add_message(CmdMessage::success(format!(
                    "Paste deleted ({}): {}",
                    paste.id, paste.title
                )));
                result.note_persistence(&deleted.persistence);
                result.affected_pastes.push(paste);
            }
            None => result.add_message(CmdMessage::info(format!("No paste with id {}", id))),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::paste_store::fixtures::store_with;

    #[test]
    fn deletes_each_existing_id() {
        let mut store = store_with(3);
        let ids: Vec<String> = store.list()[..2].iter().map(|p| p.id.clone()).collect();

        let result = run(&mut store, ids.as_slice()).unwrap();
        assert_eq!(result.affected_pastes.len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "Paste 3");
    }

    #[test]
    fn missing_ids_are_skipped() {
        let mut store = store_with(2);
        let result = run(&mut store, &["nope"]).unwrap();

        assert!(result.affected_pastes.is_empty());
        assert_eq!(store.len(), 2);
    }
}
