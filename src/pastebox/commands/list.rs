use crate::commands::{listed, CmdResult};
use crate::error::Result;
use crate::store::{KvBackend, PasteStore};

pub fn run<B: KvBackend>(store: &PasteStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_pastes(listed(store.list())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::paste_store::fixtures::{empty_store, store_with};

    #[test]
    fn lists_in_insertion_order() {
        let store = store_with(3);
        let result = run(&store).unwrap();

        let titles: Vec<_> = result
            .listed_pastes
            .iter()
            .map(|lp| lp.paste.title.as_str())
            .collect();
        assert_eq!(titles, ["Paste 1", "Paste 2", "Paste 3"]);
        assert_eq!(result.listed_pastes[2].position, 3);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let result = run(&empty_store()).unwrap();
        assert!(result.listed_pastes.is_empty());
    }
}
