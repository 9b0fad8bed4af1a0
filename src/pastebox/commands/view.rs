use crate::commands::{CmdMessage, CmdResult, ListedPaste};
use crate::error::Result;
use crate::store::{KvBackend, PasteStore};

pub fn run<B: KvBackend, I: AsRef<str>>(store: &PasteStore<B>, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let found = store
            .list()
            .iter()
            .enumerate()
            .find(|(_, p)| p.id == id);

        match found {
            Some((i, paste)) => result.listed_pastes.push(ListedPaste {
                position: i + 1,
                paste: paste.clone(),
            }),
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
    fn views_requested_pastes_in_request_order() {
        let store = store_with(3);
        let ids = [store.list()[2].id.clone(), store.list()[0].id.clone()];

        let result = run(&store, &ids).unwrap();
        assert_eq!(result.listed_pastes.len(), 2);
        assert_eq!(result.listed_pastes[0].paste.title, "Paste 3");
        assert_eq!(result.listed_pastes[0].position, 3);
        assert_eq!(result.listed_pastes[1].paste.title, "Paste 1");
    }

    #[test]
    fn unknown_ids_produce_messages() {
        let store = store_with(1);
        let result = run(&store, &["missing"]).unwrap();
        assert!(result.listed_pastes.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
