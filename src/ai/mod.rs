// AI module for Gemini API integration and song generation
//
// This module provides:
// - Gemini API client for text, JSON, speech and image calls
// - Prompt assembly and style translation for song generation
// - Suggestions, speech and album art built on the client
// - Error classification into user-facing messages
// - Secure credential storage via OS keychain

pub mod credentials;
pub mod errors;
pub mod gemini_client;
pub mod media;
pub mod prompt;
pub mod style;
pub mod suggestions;

// Re-export commonly used types
pub use credentials::CredentialManager;
pub use errors::{classify, BackendFailure, Capability, ErrorKind, GenerationError};
pub use gemini_client::GeminiClient;
pub use prompt::compose_prompt;
pub use style::resolve_style;
