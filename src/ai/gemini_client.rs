// Gemini API client
//
// Single-shot generateContent calls for:
// - Plain text (songs, ideas, translations)
// - Schema-constrained JSON (narratives, styles, structures)
// - Speech audio and images returned as inline base64 data
//
// Failures are returned as BackendFailure; callers classify them.

use super::errors::BackendFailure;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// Model used for translations and suggestions.
pub const UTILITY_MODEL: &str = "gemini-2.5-flash";
pub const SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

/// Base64 payload returned for audio and image requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Voice settings for speech synthesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_config: Option<VoiceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multi_speaker_voice_config: Option<MultiSpeakerVoiceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct MultiSpeakerVoiceConfig {
    speaker_voice_configs: Vec<SpeakerVoiceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeakerVoiceConfig {
    speaker: String,
    voice_config: VoiceConfig,
}

impl VoiceConfig {
    fn prebuilt(voice: &str) -> Self {
        VoiceConfig {
            prebuilt_voice_config: PrebuiltVoiceConfig {
                voice_name: voice.to_string(),
            },
        }
    }
}

impl SpeechConfig {
    /// One prebuilt voice reads everything.
    pub fn single(voice: &str) -> Self {
        SpeechConfig {
            voice_config: Some(VoiceConfig::prebuilt(voice)),
            multi_speaker_voice_config: None,
        }
    }

    /// Named speakers in the text, each mapped to a prebuilt voice.
    pub fn multi_speaker(speakers: &[(&str, &str)]) -> Self {
        SpeechConfig {
            voice_config: None,
            multi_speaker_voice_config: Some(MultiSpeakerVoiceConfig {
                speaker_voice_configs: speakers
                    .iter()
                    .map(|(speaker, voice)| SpeakerVoiceConfig {
                        speaker: speaker.to_string(),
                        voice_config: VoiceConfig::prebuilt(voice),
                    })
                    .collect(),
            }),
        }
    }
}

impl GenerateResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    fn text(&self) -> String {
        self.first_candidate()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    fn inline_data(&self) -> Option<InlineData> {
        self.first_candidate()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.inline_data.as_ref())
                    .find(|inline| !inline.data.trim().is_empty())
                    .cloned()
            })
    }

    /// Why there is no payload.
    fn missing_payload(&self) -> BackendFailure {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(reason, "Prompt blocked by the backend");
            return BackendFailure::SafetyBlocked;
        }
        match self.first_candidate().and_then(|c| c.finish_reason.as_deref()) {
            Some("SAFETY") => {
                let ratings = self
                    .first_candidate()
                    .map(|c| c.safety_ratings.as_slice())
                    .unwrap_or_default();
                tracing::warn!(?ratings, "Response blocked by safety filter");
                BackendFailure::SafetyBlocked
            }
            Some(reason) if reason != "STOP" => BackendFailure::Stopped(reason.to_string()),
            _ => BackendFailure::Empty,
        }
    }
}

pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    /// Create a client for the public endpoint.
    pub fn new(api_key: String) -> Result<Self, BackendFailure> {
        Self::with_base_url(api_key, DEFAULT_API_BASE, DEFAULT_TIMEOUT)
    }

    /// Create a client for another endpoint (proxies, tests).
    pub fn with_base_url(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, BackendFailure> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendFailure::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: Option<GenerationConfig>,
    ) -> Result<GenerateResponse, BackendFailure> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: config,
        };
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        tracing::debug!(model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendFailure::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BackendFailure::Api { status, body });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| BackendFailure::Malformed(format!("Failed to parse response: {}", e)))
    }

    /// Plain text generation. Empty text is a failure.
    pub async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<String, BackendFailure> {
        let config = temperature.map(|t| GenerationConfig {
            temperature: Some(t),
            ..Default::default()
        });
        let response = self.generate(model, prompt, config).await?;
        let text = response.text();
        if text.trim().is_empty() {
            return Err(response.missing_payload());
        }
        Ok(text)
    }

    /// JSON generation constrained by `schema`, deserialized into `T`.
    /// A response that does not fit `T` is a failure, never coerced.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
        schema: serde_json::Value,
    ) -> Result<T, BackendFailure> {
        let config = GenerationConfig {
            temperature: Some(temperature),
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Default::default()
        };
        let response = self.generate(model, prompt, Some(config)).await?;
        let text = response.text();
        if text.trim().is_empty() {
            return Err(response.missing_payload());
        }
        let json_text = extract_json(&text).ok_or_else(|| {
            BackendFailure::Malformed("No JSON found in response".to_string())
        })?;
        serde_json::from_str::<T>(json_text)
            .map_err(|e| BackendFailure::Malformed(format!("Unexpected JSON shape: {}", e)))
    }

    /// Speech synthesis; returns base64 PCM audio.
    pub async fn generate_speech(
        &self,
        text: &str,
        speech: SpeechConfig,
    ) -> Result<InlineData, BackendFailure> {
        let config = GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(speech),
            ..Default::default()
        };
        let response = self.generate(SPEECH_MODEL, text, Some(config)).await?;
        response.inline_data().ok_or_else(|| response.missing_payload())
    }

    /// Image synthesis; returns base64 image bytes.
    pub async fn generate_image(&self, prompt: &str) -> Result<InlineData, BackendFailure> {
        let config = GenerationConfig {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            ..Default::default()
        };
        let response = self.generate(IMAGE_MODEL, prompt, Some(config)).await?;
        response.inline_data().ok_or_else(|| response.missing_payload())
    }
}

/// Pull the JSON payload out of a response (handles markdown code blocks).
fn extract_json(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(trimmed);
    }

    if let Some(start) = trimmed.find("```json") {
        let json_start = start + 7;
        if let Some(end) = trimmed[json_start..].find("```") {
            return Some(trimmed[json_start..json_start + end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let json_start = start + 3;
        if let Some(end) = trimmed[json_start..].find("```") {
            return Some(trimmed[json_start..json_start + end].trim());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn text_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    async fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::with_base_url("test-key".to_string(), &server.uri(), Duration::from_secs(5))
            .unwrap()
    }

    #[test]
    fn test_extract_json_from_markdown() {
        let text = "Here you go:\n```json\n[\"[Intro]\", \"[Chorus]\"]\n```\n";
        assert_eq!(extract_json(text), Some("[\"[Intro]\", \"[Chorus]\"]"));
    }

    #[test]
    fn test_extract_json_raw() {
        let text = r#"{"a": 1}"#;
        assert_eq!(extract_json(text), Some(text));
        assert_eq!(extract_json("no json here"), None);
    }

    #[test]
    fn test_speech_config_serialization() {
        let single = serde_json::to_value(SpeechConfig::single("Zephyr")).unwrap();
        assert_eq!(single, json!({"voiceConfig": {"prebuiltVoiceConfig": {"voiceName": "Zephyr"}}}));

        let multi =
            serde_json::to_value(SpeechConfig::multi_speaker(&[("Male", "Zephyr"), ("Female", "Puck")]))
                .unwrap();
        assert_eq!(
            multi["multiSpeakerVoiceConfig"]["speakerVoiceConfigs"][1]["voiceConfig"]["prebuiltVoiceConfig"]["voiceName"],
            "Puck"
        );
    }

    #[tokio::test]
    async fn test_generate_text_sends_key_and_temperature() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({"generationConfig": {"temperature": 0.0}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("Hello")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let text = client.generate_text(UTILITY_MODEL, "hi", Some(0.0)).await.unwrap();
        assert_eq!(text, "Hello");
    }

    #[tokio::test]
    async fn test_http_error_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.generate_text("gemini-2.5-pro", "hi", None).await.unwrap_err();
        assert_eq!(
            err,
            BackendFailure::Api {
                status: 429,
                body: "quota exceeded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_missing_text_reasons() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/safe:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "finishReason": "SAFETY", "safetyRatings": [] }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/long:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "finishReason": "MAX_TOKENS" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/empty:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/blocked:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "OTHER" }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(
            client.generate_text("safe", "x", None).await.unwrap_err(),
            BackendFailure::SafetyBlocked
        );
        assert_eq!(
            client.generate_text("long", "x", None).await.unwrap_err(),
            BackendFailure::Stopped("MAX_TOKENS".to_string())
        );
        assert_eq!(
            client.generate_text("empty", "x", None).await.unwrap_err(),
            BackendFailure::Empty
        );
        assert_eq!(
            client.generate_text("blocked", "x", None).await.unwrap_err(),
            BackendFailure::SafetyBlocked
        );
    }

    #[tokio::test]
    async fn test_generate_json_rejects_wrong_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"generationConfig": {"responseMimeType": "application/json"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body(r#"{"parts": ["[Intro]"]}"#)))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Vec<String>, _> = client
            .generate_json(UTILITY_MODEL, "x", 0.3, json!({"type": "ARRAY"}))
            .await;
        assert!(matches!(result, Err(BackendFailure::Malformed(_))));
    }

    #[tokio::test]
    async fn test_generate_image_returns_inline_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
            .and(body_partial_json(json!({"generationConfig": {"responseModalities": ["IMAGE"]}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [
                        { "text": "here is your art" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0K" } }
                    ]},
                    "finishReason": "STOP"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let image = client.generate_image("a cover").await.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0K");
    }

    #[tokio::test]
    async fn test_blank_inline_data_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "" } }] },
                    "finishReason": "STOP"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.generate_image("a boat").await.unwrap_err(), BackendFailure::Empty);
    }
}
