use crate::commands::{listed, CmdResult, ListedPaste};
use crate::error::Result;
use crate::store::{KvBackend, PasteStore};

/// Case-insensitive search over titles and content.
///
/// Exact title matches rank first, then title substrings, then content
/// substrings. Within a rank pastes keep their list order. A blank term
/// matches everything.
pub fn run<B: KvBackend>(store: &PasteStore<B>, term: &str) -> Result<CmdResult> {
    let all = listed(store.list());
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return Ok(CmdResult::default().with_listed_pastes(all));
    }

    let mut matches: Vec<(ListedPaste, u8)> = all
        .into_iter()
        .filter_map(|lp| {
            let title_lower = lp.paste.title.to_lowercase();

            let score = if title_lower == term_lower {
                1
            } else if title_lower.contains(&term_lower) {
                2
            } else if lp.paste.content.to_lowercase().contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((lp, score))
        })
        .collect();

    // Stable sort keeps list order inside a rank.
    matches.sort_by_key(|(_, score)| *score);

    let listed = matches.into_iter().map(|(lp, _)| lp).collect();
    Ok(CmdResult::default().with_listed_pastes(listed))
}
