use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PasteError, Result};
use crate::store::{KvBackend, PasteStore};

pub fn run<B: KvBackend>(store: &mut PasteStore<B>, confirmed: bool) -> Result<CmdResult> {
    if !confirmed {
        return Err(PasteError::Api(
            "Reset removes every paste; pass --yes to confirm".to_string(),
        ));
    }

    let reset = store.reset();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} paste(s)",
        reset.value
    )));
    result.note_persistence(&reset.persistence);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::paste_store::fixtures::store_with;

    #[test]
    fn requires_confirmation() {
        let mut store = store_with(2);
        assert!(run(&mut store, false).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clears_everything() {
        let mut store = store_with(2);
        let result = run(&mut store, true).unwrap();

        assert!(store.is_empty());
        assert_eq!(result.messages[0].content, "Removed 2 paste(s)");
    }
}
