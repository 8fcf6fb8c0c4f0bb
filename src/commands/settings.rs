// Settings commands - language, model, saved form and API key
//
// Settings are stored in the SQLite `settings` table. The form snapshot is
// stored as JSON.

use super::{AppState, CommandError};
use crate::ai::CredentialManager;
use crate::db::{SETTING_API_KEY, SETTING_FORM_SNAPSHOT, SETTING_LANGUAGE, SETTING_MODEL};
use crate::i18n::Language;
use crate::song::{SongRequest, SUPPORTED_MODELS};
use serde::Serialize;

/// Where the active API key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeySource {
    Config,
    Keychain,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyStatus {
    pub configured: bool,
    pub source: Option<ApiKeySource>,
}

pub fn get_language(state: &AppState) -> Language {
    state.language()
}

pub fn set_language(state: &AppState, language: Language) -> Result<(), CommandError> {
    state.with_db(|db| db.set_setting(SETTING_LANGUAGE, language.code()))
}

/// Saved model tier, falling back to the configured default.
pub fn get_model(state: &AppState) -> Result<String, CommandError> {
    let saved = state.with_db(|db| db.get_setting(SETTING_MODEL))?;
    Ok(saved
        .filter(|model| SUPPORTED_MODELS.contains(&model.as_str()))
        .unwrap_or_else(|| state.config.model.clone()))
}

pub fn set_model(state: &AppState, model: &str) -> Result<(), CommandError> {
    if !SUPPORTED_MODELS.contains(&model) {
        return Err(CommandError::Validation(format!(
            "Unsupported model '{}'. Supported: {}",
            model,
            SUPPORTED_MODELS.join(", ")
        )));
    }
    state.with_db(|db| db.set_setting(SETTING_MODEL, model))
}

/// The last saved form, if any. A snapshot that no longer parses is ignored.
pub fn get_form_snapshot(state: &AppState) -> Result<Option<SongRequest>, CommandError> {
    let saved = state.with_db(|db| db.get_setting(SETTING_FORM_SNAPSHOT))?;
    Ok(saved.and_then(|json| match serde_json::from_str(&json) {
        Ok(request) => Some(request),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable form snapshot");
            None
        }
    }))
}

pub fn save_form_snapshot(state: &AppState, request: &SongRequest) -> Result<(), CommandError> {
    let json = serde_json::to_string(request)
        .map_err(|e| CommandError::Internal(format!("Failed to serialize form: {}", e)))?;
    state.with_db(|db| db.set_setting(SETTING_FORM_SNAPSHOT, &json))
}

pub fn api_key_status(state: &AppState) -> ApiKeyStatus {
    let source = if state.config.api_key.is_some() {
        Some(ApiKeySource::Config)
    } else if state.uses_keychain() && CredentialManager::has_api_key().unwrap_or(false) {
        Some(ApiKeySource::Keychain)
    } else if state
        .with_db(|db| db.get_setting(SETTING_API_KEY))
        .ok()
        .flatten()
        .is_some_and(|key| !key.trim().is_empty())
    {
        Some(ApiKeySource::Settings)
    } else {
        None
    };
    ApiKeyStatus {
        configured: source.is_some(),
        source,
    }
}

/// Store the key in the OS keychain, or in the settings table when the
/// keychain is unavailable.
pub fn set_api_key(state: &AppState, api_key: &str) -> Result<ApiKeySource, CommandError> {
    CredentialManager::validate_api_key(api_key).map_err(CommandError::Validation)?;

    if state.uses_keychain() {
        match CredentialManager::store_api_key(api_key) {
            Ok(()) => {
                // Drop any older plaintext copy
                state.with_db(|db| db.delete_setting(SETTING_API_KEY))?;
                return Ok(ApiKeySource::Keychain);
            }
            Err(e) => tracing::warn!("{}, storing API key in settings instead", e),
        }
    }
    state.with_db(|db| db.set_setting(SETTING_API_KEY, api_key.trim()))?;
    Ok(ApiKeySource::Settings)
}

pub fn delete_api_key(state: &AppState) -> Result<(), CommandError> {
    if state.uses_keychain() {
        CredentialManager::delete_api_key().map_err(CommandError::Internal)?;
    }
    state.with_db(|db| db.delete_setting(SETTING_API_KEY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state_for;
    use crate::song::GenerationMode;

    const KEY: &str = "AIzaSyA1234567890abcdefghijklmnopqrs";

    #[test]
    fn test_language_round_trip() {
        let state = state_for("http://127.0.0.1:9");
        set_language(&state, Language::Ko).unwrap();
        assert_eq!(get_language(&state), Language::Ko);
    }

    #[test]
    fn test_model_validation() {
        let state = state_for("http://127.0.0.1:9");
        assert_eq!(get_model(&state).unwrap(), "gemini-2.5-pro");
        set_model(&state, "gemini-2.5-flash").unwrap();
        assert_eq!(get_model(&state).unwrap(), "gemini-2.5-flash");
        assert!(matches!(set_model(&state, "gpt-4o"), Err(CommandError::Validation(_))));
    }

    #[test]
    fn test_form_snapshot() {
        let state = state_for("http://127.0.0.1:9");
        assert_eq!(get_form_snapshot(&state).unwrap(), None);

        let request = SongRequest {
            main_idea: "saved idea".to_string(),
            mode: GenerationMode::Manual,
            weirdness: 55,
            ..Default::default()
        };
        save_form_snapshot(&state, &request).unwrap();
        assert_eq!(get_form_snapshot(&state).unwrap(), Some(request));

        state
            .with_db(|db| db.set_setting(SETTING_FORM_SNAPSHOT, "{not json"))
            .unwrap();
        assert_eq!(get_form_snapshot(&state).unwrap(), None);
    }

    #[test]
    fn test_api_key_in_settings_without_keychain() {
        let mut state = state_for("http://127.0.0.1:9");
        assert_eq!(api_key_status(&state).source, Some(ApiKeySource::Config));

        state.config.api_key = None;
        assert!(!api_key_status(&state).configured);

        assert!(matches!(set_api_key(&state, "bad"), Err(CommandError::Validation(_))));
        assert_eq!(set_api_key(&state, KEY).unwrap(), ApiKeySource::Settings);
        assert_eq!(api_key_status(&state).source, Some(ApiKeySource::Settings));
        assert_eq!(state.api_key().as_deref(), Some(KEY));

        delete_api_key(&state).unwrap();
        assert!(!api_key_status(&state).configured);
    }
}
