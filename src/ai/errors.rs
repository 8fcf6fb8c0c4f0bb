// Error taxonomy for generation calls
//
// Every failure coming back from the backend is turned into a
// GenerationError by `classify`, which picks a kind and a message in the
// user's language.

use crate::i18n::{self, Language, UiStrings};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "AuthError")]
    Auth,
    #[serde(rename = "OverloadError")]
    Overload,
    #[serde(rename = "NetworkError")]
    Network,
    /// Callers must not retry automatically and should block further
    /// generation until the user acknowledges it.
    #[serde(rename = "RateLimitError")]
    RateLimit,
    #[serde(rename = "BillingError")]
    Billing,
    #[serde(rename = "SafetyBlockedError")]
    SafetyBlocked,
    #[serde(rename = "EmptyResponseError")]
    EmptyResponse,
    #[serde(rename = "UnknownError")]
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Auth => "AuthError",
            ErrorKind::Overload => "OverloadError",
            ErrorKind::Network => "NetworkError",
            ErrorKind::RateLimit => "RateLimitError",
            ErrorKind::Billing => "BillingError",
            ErrorKind::SafetyBlocked => "SafetyBlockedError",
            ErrorKind::EmptyResponse => "EmptyResponseError",
            ErrorKind::Unknown => "UnknownError",
        }
    }
}

/// A classified, user-facing generation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl GenerationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        GenerationError {
            kind,
            message: message.into(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == ErrorKind::RateLimit
    }
}

/// Which kind of call failed. Billing problems are only recognised for
/// image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Text,
    Structured,
    Speech,
    Image,
}

/// A failure as seen by the HTTP client, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendFailure {
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("blocked by safety filter")]
    SafetyBlocked,
    #[error("generation stopped: {0}")]
    Stopped(String),
    #[error("empty response")]
    Empty,
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Turn a backend failure into a classified error in `language`.
pub fn classify(failure: &BackendFailure, capability: Capability, language: Language) -> GenerationError {
    let ui = &i18n::catalog(language).ui;
    let error = match failure {
        BackendFailure::SafetyBlocked => GenerationError::new(ErrorKind::SafetyBlocked, ui.error_safety),
        BackendFailure::Empty => GenerationError::new(ErrorKind::EmptyResponse, ui.error_empty_response),
        BackendFailure::Stopped(reason) => GenerationError::new(
            ErrorKind::Unknown,
            format!("{} ({})", ui.error_unknown, reason),
        ),
        other => classify_with(&other.to_string(), capability, ui),
    };
    tracing::warn!(kind = error.kind.as_str(), ?capability, "Generation failed: {}", failure);
    error
}

/// Classify a raw error message. Exposed for callers that only have text.
pub fn classify_message(message: &str, capability: Capability, language: Language) -> GenerationError {
    classify_with(message, capability, &i18n::catalog(language).ui)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// True if `word` appears with no identifier character or dot on either side,
/// so `rpc error` matches but `google.rpc.BadRequest` does not.
fn contains_token(haystack: &str, word: &str) -> bool {
    let is_joined = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '.' || c == '_');
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        !is_joined(before) && !is_joined(after)
    })
}

fn classify_with(message: &str, capability: Capability, ui: &UiStrings) -> GenerationError {
    let lower = message.to_lowercase();

    if contains_any(&lower, &["resource_exhausted", "quota", "429"]) {
        return GenerationError::new(ErrorKind::RateLimit, ui.error_rate_limit);
    }
    if capability == Capability::Image && contains_any(&lower, &["billing", "billed"]) {
        return GenerationError::new(ErrorKind::Billing, ui.error_billing);
    }
    if contains_any(&lower, &["api key", "apikey", "api_key", "unauthenticated"]) {
        return GenerationError::new(ErrorKind::Auth, ui.error_api_key_invalid);
    }
    if lower.contains("overloaded") {
        return GenerationError::new(ErrorKind::Overload, ui.error_model_overloaded);
    }
    if contains_any(&lower, &["network", "fetch"])
        || contains_token(&lower, "xhr")
        || contains_token(&lower, "rpc")
    {
        return GenerationError::new(ErrorKind::Network, ui.error_network);
    }

    if let Some(start) = message.find('{') {
        if let Ok(body) = serde_json::from_str::<serde_json::Value>(&message[start..]) {
            let nested = body.get("error").unwrap_or(&body);
            if nested.get("status").and_then(|s| s.as_str()) == Some("RESOURCE_EXHAUSTED") {
                return GenerationError::new(ErrorKind::RateLimit, ui.error_rate_limit);
            }
            if let Some(inner) = nested.get("message").and_then(|m| m.as_str()) {
                return GenerationError::new(ErrorKind::Unknown, inner);
            }
        }
    }

    if message.trim().is_empty() {
        GenerationError::new(ErrorKind::Unknown, ui.error_unknown)
    } else {
        GenerationError::new(ErrorKind::Unknown, message)
    }
}
