// History commands

use super::{AppState, CommandError};
use crate::song::parser::{self, ParsedSong};
use crate::song::HistoryItem;
use serde::Serialize;

/// A history item reopened for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoredSong {
    pub item: HistoryItem,
    pub song: ParsedSong,
}

/// All saved songs, newest first.
pub fn list_history(state: &AppState) -> Result<Vec<HistoryItem>, CommandError> {
    state.with_db(|db| db.list_history())
}

/// Reopen a saved song, parsed against the structure it was requested with.
pub fn restore_history(state: &AppState, id: i64) -> Result<Option<RestoredSong>, CommandError> {
    let item = state.with_db(|db| db.get_history(id))?;
    Ok(item.map(|item| {
        let song = parser::parse(&item.song_data, &item.request.song_structure);
        RestoredSong { item, song }
    }))
}

/// Returns false when no such item exists.
pub fn delete_history(state: &AppState, id: i64) -> Result<bool, CommandError> {
    let deleted = state.with_db(|db| db.delete_history(id))?;
    if deleted {
        tracing::debug!(id, "Deleted history item");
    }
    Ok(deleted)
}

pub fn clear_history(state: &AppState) -> Result<usize, CommandError> {
    let removed = state.with_db(|db| db.clear_history())?;
    tracing::info!(removed, "Cleared history");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state_for;
    use crate::song::SongRequest;

    fn add(state: &AppState, title: &str, structure: &[&str]) -> i64 {
        let request = SongRequest {
            song_structure: structure.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let item = HistoryItem::new(
            format!("Song Title: {}\n\nLyrics:\n[Chorus]\nla\n[Verse]\nda", title),
            request,
        );
        state
            .with_db(|db| db.insert_history(&item, state.config.history_capacity))
            .unwrap()
    }

    #[test]
    fn test_restore_reorders_by_saved_structure() {
        let state = state_for("http://127.0.0.1:9");
        let id = add(&state, "Echo", &["[Verse]", "[Chorus]"]);

        let restored = restore_history(&state, id).unwrap().unwrap();
        assert_eq!(restored.item.title, "Echo");
        let labels: Vec<&str> = restored.song.parts().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["[Verse]", "[Chorus]"]);

        assert!(restore_history(&state, id + 100).unwrap().is_none());
    }

    #[test]
    fn test_capacity_from_config() {
        let mut state = state_for("http://127.0.0.1:9");
        state.config.history_capacity = 2;
        for title in ["A", "B", "C"] {
            add(&state, title, &[]);
        }
        let titles: Vec<String> = list_history(&state)
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, vec!["C", "B"]);
    }

    #[test]
    fn test_delete_and_clear() {
        let state = state_for("http://127.0.0.1:9");
        let id = add(&state, "A", &[]);
        add(&state, "B", &[]);

        assert!(delete_history(&state, id).unwrap());
        assert!(!delete_history(&state, id).unwrap());
        assert_eq!(clear_history(&state).unwrap(), 1);
        assert!(list_history(&state).unwrap().is_empty());
    }
}
