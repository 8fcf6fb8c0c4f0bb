// Secure credential storage for the Gemini API key
//
// Uses OS-native secure storage:
// - macOS: Keychain
// - Windows: Credential Manager
// - Linux: Secret Service (GNOME/KDE)

use keyring::Entry;

const SERVICE_NAME: &str = "com.songcraft.app";
const API_KEY_NAME: &str = "gemini_api_key";
const MIN_KEY_LEN: usize = 30;

pub struct CredentialManager;

impl CredentialManager {
    /// Check the key format before it is stored.
    pub fn validate_api_key(key: &str) -> Result<(), String> {
        let key = key.trim();
        if key.is_empty() {
            return Err("API key is empty".to_string());
        }
        // Google AI Studio keys start with "AIza"
        if !key.starts_with("AIza") {
            return Err("Invalid API key format. Gemini API keys should start with 'AIza'".to_string());
        }
        if key.len() < MIN_KEY_LEN {
            return Err("API key appears too short. Please check and try again.".to_string());
        }
        if key.chars().any(char::is_whitespace) {
            return Err("API key must not contain whitespace".to_string());
        }
        Ok(())
    }

    /// Store the Gemini API key in the OS keychain
    pub fn store_api_key(key: &str) -> Result<(), String> {
        Self::validate_api_key(key)?;

        let entry = Entry::new(SERVICE_NAME, API_KEY_NAME)
            .map_err(|e| format!("Failed to access keychain: {}", e))?;

        entry
            .set_password(key.trim())
            .map_err(|e| format!("Failed to store API key: {}", e))?;

        tracing::info!("API key stored in keychain");
        Ok(())
    }

    /// Retrieve the Gemini API key from the OS keychain
    pub fn retrieve_api_key() -> Result<Option<String>, String> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_NAME)
            .map_err(|e| format!("Failed to access keychain: {}", e))?;

        match entry.get_password() {
            Ok(key) => {
                tracing::debug!(len = key.len(), "API key retrieved from keychain");
                Ok(Some(key))
            }
            Err(keyring::Error::NoEntry) => {
                tracing::debug!("No API key found in keychain");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to retrieve API key");
                Err(format!("Failed to retrieve API key: {}", e))
            }
        }
    }

    /// Delete the Gemini API key from the OS keychain. Deleting a missing key
    /// is not an error.
    pub fn delete_api_key() -> Result<(), String> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_NAME)
            .map_err(|e| format!("Failed to access keychain: {}", e))?;

        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(format!("Failed to delete API key: {}", e)),
        }
    }

    /// Check if an API key is stored (without returning it)
    pub fn has_api_key() -> Result<bool, String> {
        Self::retrieve_api_key().map(|key| key.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_validation() {
        // Valid key
        assert!(CredentialManager::validate_api_key("AIzaSyA1234567890abcdefghijklmnopqrs").is_ok());
        assert!(CredentialManager::validate_api_key("  AIzaSyA1234567890abcdefghijklmnopqrs\n").is_ok());

        // Invalid keys
        assert!(CredentialManager::validate_api_key("").is_err());
        assert!(CredentialManager::validate_api_key("sk-ant-api03-test123").is_err());
        assert!(CredentialManager::validate_api_key("AIzaShort").is_err());
        assert!(CredentialManager::validate_api_key("AIzaSyA12345 67890abcdefghijklmnopqrs").is_err());
    }
}
