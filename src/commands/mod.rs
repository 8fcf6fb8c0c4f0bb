// Application commands
//
// Each command is one user action: it validates input, takes the busy flag
// for its action kind, calls the backend and records results. The HTTP
// server and the CLI both call into these.

pub mod history;
pub mod media;
pub mod settings;
pub mod song;
pub mod suggest;

use crate::ai::{CredentialManager, GeminiClient, GenerationError};
use crate::audio::pcm::PcmError;
use crate::config::AppConfig;
use crate::db::{Database, SETTING_API_KEY, SETTING_LANGUAGE};
use crate::i18n::{self, Language};
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Busy(String),
    #[error("{0}")]
    MissingApiKey(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Audio error: {0}")]
    Audio(#[from] PcmError),
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Internal(String),
}

impl CommandError {
    /// Stable name sent to clients alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Generation(e) => e.kind.as_str(),
            CommandError::Validation(_) => "ValidationError",
            CommandError::Busy(_) => "BusyError",
            CommandError::MissingApiKey(_) => "MissingApiKeyError",
            CommandError::Database(_) => "DatabaseError",
            CommandError::Audio(_) => "AudioError",
            CommandError::Io(_) => "FileError",
            CommandError::Internal(_) => "InternalError",
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CommandError::Generation(e) if e.is_rate_limited())
    }
}

/// Independently tracked kinds of in-flight work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Song,
    Speech,
    Art,
    Suggest,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Song, Action::Speech, Action::Art, Action::Suggest];
}

/// One flag per action. A second request of the same kind fails fast
/// instead of queueing.
#[derive(Debug, Default)]
pub struct BusyFlags {
    song: AtomicBool,
    speech: AtomicBool,
    art: AtomicBool,
    suggest: AtomicBool,
}

/// Clears its flag when dropped, whatever the outcome of the action.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl BusyFlags {
    fn flag(&self, action: Action) -> &AtomicBool {
        match action {
            Action::Song => &self.song,
            Action::Speech => &self.speech,
            Action::Art => &self.art,
            Action::Suggest => &self.suggest,
        }
    }

    pub fn try_acquire(&self, action: Action) -> Option<BusyGuard<'_>> {
        let flag = self.flag(action);
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag })
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.flag(action).load(Ordering::Acquire)
    }
}

/// Shared state behind every command.
pub struct AppState {
    pub config: AppConfig,
    pub db: Mutex<Option<Database>>,
    pub busy: BusyFlags,
    /// Set by a rate-limit error, cleared when the user acknowledges it.
    rate_limited: AtomicBool,
    use_keychain: bool,
}

impl AppState {
    /// Open the configured database and run migrations.
    pub fn open(config: AppConfig) -> Result<Self, CommandError> {
        let path = config.db_path.clone();
        let db = init_database(&path)?;
        tracing::info!(path = %path.display(), "Database ready");
        Ok(Self::with_database(config, db, true))
    }

    /// State over an in-memory database that never touches the OS keychain.
    pub fn in_memory(config: AppConfig) -> Result<Self, CommandError> {
        let db = Database::new_in_memory()?;
        db.run_migrations()?;
        Ok(Self::with_database(config, db, false))
    }

    fn with_database(config: AppConfig, db: Database, use_keychain: bool) -> Self {
        AppState {
            config,
            db: Mutex::new(Some(db)),
            busy: BusyFlags::default(),
            rate_limited: AtomicBool::new(false),
            use_keychain,
        }
    }

    /// Run `f` against the database.
    pub fn with_db<T, F>(&self, f: F) -> Result<T, CommandError>
    where
        F: FnOnce(&Database) -> rusqlite::Result<T>,
    {
        let db_guard = self
            .db
            .lock()
            .map_err(|e| CommandError::Internal(format!("Failed to lock database: {}", e)))?;
        let db = db_guard
            .as_ref()
            .ok_or_else(|| CommandError::Internal("Database not initialized".to_string()))?;
        Ok(f(db)?)
    }

    /// Saved UI language, falling back to the configured default.
    pub fn language(&self) -> Language {
        self.with_db(|db| db.get_setting(SETTING_LANGUAGE))
            .ok()
            .flatten()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(self.config.language)
    }

    /// API key from config/env, then the OS keychain, then the settings table.
    pub fn api_key(&self) -> Option<String> {
        if let Some(key) = &self.config.api_key {
            return Some(key.clone());
        }
        if self.use_keychain {
            match CredentialManager::retrieve_api_key() {
                Ok(Some(key)) => return Some(key),
                Ok(None) => {}
                Err(e) => tracing::warn!("Keychain unavailable: {}", e),
            }
        }
        self.with_db(|db| db.get_setting(SETTING_API_KEY))
            .ok()
            .flatten()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn uses_keychain(&self) -> bool {
        self.use_keychain
    }

    pub fn client(&self) -> Result<GeminiClient, CommandError> {
        let api_key = self.api_key().ok_or_else(|| {
            CommandError::MissingApiKey(
                "No Gemini API key configured. Set one with `songcraft key set` or GEMINI_API_KEY."
                    .to_string(),
            )
        })?;
        GeminiClient::with_base_url(api_key, &self.config.api_base, self.config.request_timeout)
            .map_err(|e| CommandError::Internal(e.to_string()))
    }

    /// Take the busy flag for `action`, or fail with a localized message.
    pub fn begin(&self, action: Action, language: Language) -> Result<BusyGuard<'_>, CommandError> {
        if self.is_rate_limited() {
            return Err(CommandError::Generation(GenerationError::new(
                crate::ai::ErrorKind::RateLimit,
                i18n::catalog(language).ui.error_rate_limit,
            )));
        }
        self.busy.try_acquire(action).ok_or_else(|| {
            tracing::debug!(?action, "Rejected request, action already running");
            CommandError::Busy(i18n::catalog(language).ui.error_busy.to_string())
        })
    }

    /// Turn a classified error into a command error, blocking further
    /// generation if it was a rate limit.
    pub fn fail(&self, error: GenerationError) -> CommandError {
        if error.is_rate_limited() {
            self.rate_limited.store(true, Ordering::Release);
            tracing::warn!("Rate limited, blocking generation until acknowledged");
        }
        CommandError::Generation(error)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.rate_limited.load(Ordering::Acquire)
    }

    /// The user dismissed the rate-limit notice.
    pub fn acknowledge_rate_limit(&self) {
        self.rate_limited.store(false, Ordering::Release);
    }
}

/// Open (creating directories as needed) and migrate a database file.
pub fn init_database(path: &Path) -> Result<Database, CommandError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let db = Database::new(path)?;
    db.run_migrations()?;
    Ok(db)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::time::Duration;

    /// In-memory state pointed at a mock backend.
    pub fn state_for(base_url: &str) -> AppState {
        let config = AppConfig {
            api_key: Some("test-key".to_string()),
            api_base: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            ..AppConfig::default()
        };
        AppState::in_memory(config).unwrap()
    }

    pub fn text_reply(text: &str) -> wiremock::ResponseTemplate {
        wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }]
        }))
    }
}
