// Database layer - SQLite connection, migrations, queries

use crate::song::{HistoryItem, SongRequest};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result, Row};
use std::path::Path;

/// Number of history items kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

// Settings keys
pub const SETTING_LANGUAGE: &str = "language";
pub const SETTING_MODEL: &str = "model";
pub const SETTING_FORM_SNAPSHOT: &str = "form_snapshot";
/// Fallback API key store when the OS keychain is unavailable.
pub const SETTING_API_KEY: &str = "api_key";

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

fn history_from_row(row: &Row) -> Result<HistoryItem> {
    let created_at: String = row.get(1)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);
    let request_json: String = row.get(5)?;
    let request: SongRequest = serde_json::from_str(&request_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(HistoryItem {
        id: row.get(0)?,
        created_at,
        title: row.get(2)?,
        style: row.get(3)?,
        song_data: row.get(4)?,
        request,
    })
}

impl Database {
    /// Create a new database connection
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Database { conn })
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Run migrations to set up the database schema
    pub fn run_migrations(&self) -> Result<()> {
        let migration_001 = include_str!("migrations/001_init.sql");
        self.conn.execute_batch(migration_001)?;
        Ok(())
    }

    // --- Settings operations ---

    /// Get a setting value by key. Returns None if the key doesn't exist.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM settings WHERE key = ?")?;
        let result = stmt.query_row([key], |row| row.get::<_, Option<String>>(0));

        match result {
            Ok(value) => Ok(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a setting value (upsert: insert or update if key exists).
    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a setting by key.
    pub fn delete_setting(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM settings WHERE key = ?", [key])?;
        Ok(())
    }

    // --- History operations ---

    /// Store a history item, then drop the oldest items beyond `capacity`.
    /// Returns the new item's ID.
    pub fn insert_history(&self, item: &HistoryItem, capacity: usize) -> Result<i64> {
        let request_json = serde_json::to_string(&item.request)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO history (created_at, title, style, song_data, request_json)
             VALUES (?, ?, ?, ?, ?)",
            params![
                item.created_at.to_rfc3339(),
                item.title,
                item.style,
                item.song_data,
                request_json,
            ],
        )?;
        let id = tx.last_insert_rowid();

        let keep = capacity.max(1) as i64;
        let evicted = tx.execute(
            "DELETE FROM history WHERE id NOT IN (
                SELECT id FROM history ORDER BY id DESC LIMIT ?
             )",
            [keep],
        )?;
        tx.commit()?;

        if evicted > 0 {
            tracing::debug!(evicted, capacity = keep, "Trimmed history");
        }
        Ok(id)
    }

    /// All history items, newest first.
    pub fn list_history(&self) -> Result<Vec<HistoryItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, created_at, title, style, song_data, request_json
             FROM history ORDER BY id DESC",
        )?;
        let items = stmt.query_map([], history_from_row)?;
        items.collect()
    }

    /// Read a history item by ID
    pub fn get_history(&self, id: i64) -> Result<Option<HistoryItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, created_at, title, style, song_data, request_json
             FROM history WHERE id = ?",
        )?;
        match stmt.query_row([id], history_from_row) {
            Ok(item) => Ok(Some(item)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete one history item. Returns false if it did not exist.
    pub fn delete_history(&self, id: i64) -> Result<bool> {
        let deleted = self.conn.execute("DELETE FROM history WHERE id = ?", [id])?;
        Ok(deleted > 0)
    }

    /// Delete every history item. Returns how many were removed.
    pub fn clear_history(&self) -> Result<usize> {
        self.conn.execute("DELETE FROM history", [])
    }

    pub fn count_history(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn test_db() -> Database {
        let db = Database::new_in_memory().unwrap();
        db.run_migrations().unwrap();
        db
    }

    fn create_test_item(title: &str) -> HistoryItem {
        let request = SongRequest {
            main_idea: format!("idea for {}", title),
            genres: vec!["Pop".to_string()],
            language: Language::Ja,
            ..Default::default()
        };
        HistoryItem::new(
            format!("Song Title: {}\nStyle: Pop\n\nLyrics:\n[Verse]\nla la", title),
            request,
        )
    }

    fn titles(db: &Database) -> Vec<String> {
        db.list_history()
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect()
    }

    #[test]
    fn test_database_creation() {
        let db = Database::new_in_memory().expect("Failed to create in-memory database");
        db.run_migrations().expect("Failed to run migrations");
        // Migrations are idempotent
        db.run_migrations().expect("Failed to re-run migrations");
    }

    #[test]
    fn test_get_setting_nonexistent() {
        let db = test_db();
        assert_eq!(db.get_setting("nonexistent_key").unwrap(), None);
    }

    #[test]
    fn test_set_setting_upsert() {
        let db = test_db();

        db.set_setting(SETTING_LANGUAGE, "th").unwrap();
        assert_eq!(db.get_setting(SETTING_LANGUAGE).unwrap(), Some("th".to_string()));

        db.set_setting(SETTING_LANGUAGE, "ko").unwrap();
        assert_eq!(db.get_setting(SETTING_LANGUAGE).unwrap(), Some("ko".to_string()));

        db.delete_setting(SETTING_LANGUAGE).unwrap();
        assert_eq!(db.get_setting(SETTING_LANGUAGE).unwrap(), None);
    }

    #[test]
    fn test_insert_and_read_history() {
        let db = test_db();
        let item = create_test_item("Paper Boats");

        let id = db.insert_history(&item, DEFAULT_HISTORY_CAPACITY).unwrap();
        assert!(id > 0, "History ID should be greater than 0");

        let stored = db.get_history(id).unwrap().expect("item should exist");
        assert_eq!(stored.title, "Paper Boats");
        assert_eq!(stored.style, "Pop");
        assert_eq!(stored.song_data, item.song_data);
        assert_eq!(stored.request, item.request);
        assert_eq!(stored.created_at.timestamp(), item.created_at.timestamp());
    }

    #[test]
    fn test_history_newest_first() {
        let db = test_db();
        for title in ["One", "Two", "Three"] {
            db.insert_history(&create_test_item(title), 10).unwrap();
        }
        assert_eq!(titles(&db), vec!["Three", "Two", "One"]);
    }

    #[test]
    fn test_history_capacity_evicts_oldest() {
        let db = test_db();
        let capacity = 3;
        for title in ["A", "B", "C"] {
            db.insert_history(&create_test_item(title), capacity).unwrap();
        }
        assert_eq!(titles(&db), vec!["C", "B", "A"]);

        db.insert_history(&create_test_item("D"), capacity).unwrap();
        assert_eq!(titles(&db), vec!["D", "C", "B"]);
        assert_eq!(db.count_history().unwrap(), 3);
    }

    #[test]
    fn test_delete_and_clear_history() {
        let db = test_db();
        let first = db.insert_history(&create_test_item("A"), 10).unwrap();
        db.insert_history(&create_test_item("B"), 10).unwrap();

        assert!(db.delete_history(first).unwrap());
        assert!(!db.delete_history(first).unwrap());
        assert_eq!(titles(&db), vec!["B"]);

        assert_eq!(db.clear_history().unwrap(), 1);
        assert!(db.list_history().unwrap().is_empty());
        assert_eq!(db.get_history(first).unwrap(), None);
    }

    #[test]
    fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songcraft.db");
        {
            let db = Database::new(&path).unwrap();
            db.run_migrations().unwrap();
            db.insert_history(&create_test_item("Kept"), 5).unwrap();
        }
        let db = Database::new(&path).unwrap();
        db.run_migrations().unwrap();
        assert_eq!(titles(&db), vec!["Kept"]);
    }
}
