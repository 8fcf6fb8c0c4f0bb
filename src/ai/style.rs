// Style resolver
//
// The style line must be English whatever the UI language, so non-English
// tags are translated in one batch call before the prompt is composed.
// Translation is best effort: on any failure the original text is used.

use super::errors::BackendFailure;
use super::gemini_client::{GeminiClient, UTILITY_MODEL};
use crate::i18n::Language;

fn tag_translation_prompt(tags: &[String], language: Language) -> String {
    format!(
        "Translate the following music style tags from {} to English. Provide the closest, most common English equivalent for each tag. For culturally specific genres (like 'ลูกทุ่ง'), transliterate them phonetically (e.g., 'Luk Thung'). Return ONLY a comma-separated list of the translated English terms, with no extra text or explanations.\nTags: {}",
        language.english_name(),
        tags.join(", ")
    )
}

/// One batch translation call. Empty output counts as a failure.
pub async fn translate_tags_to_english(
    client: &GeminiClient,
    tags: &[String],
    language: Language,
) -> Result<Vec<String>, BackendFailure> {
    let prompt = tag_translation_prompt(tags, language);
    let text = client.generate_text(UTILITY_MODEL, &prompt, Some(0.0)).await?;
    let translated: Vec<String> = text
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();
    if translated.is_empty() {
        return Err(BackendFailure::Empty);
    }
    Ok(translated)
}

/// Translate tags to English. English input and an empty list are returned
/// as given without a network call; failures return the input unchanged.
pub async fn resolve_style(client: &GeminiClient, tags: &[String], language: Language) -> Vec<String> {
    if tags.is_empty() || language == Language::En {
        return tags.to_vec();
    }

    match translate_tags_to_english(client, tags, language).await {
        Ok(translated) => {
            tracing::debug!(from = %language, count = translated.len(), "Translated style tags");
            translated
        }
        Err(e) => {
            tracing::warn!(error = %e, "Tag translation failed, using original tags");
            tags.to_vec()
        }
    }
}

/// Translate free text to English, falling back to the original text.
pub async fn translate_text_to_english(client: &GeminiClient, text: &str, language: Language) -> String {
    if text.trim().is_empty() || language == Language::En {
        return text.to_string();
    }

    let prompt = format!(
        "Translate the following text from {} to English. Return ONLY the translated English text, with no extra formatting, labels, or explanations.\n\nText: \"{}\"",
        language.english_name(),
        text
    );
    match client.generate_text(UTILITY_MODEL, &prompt, Some(0.0)).await {
        Ok(translated) if !translated.trim().is_empty() => translated.trim().to_string(),
        Ok(_) => text.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Text translation failed, using original text");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::with_base_url("test-key".to_string(), &server.uri(), Duration::from_secs(5))
            .unwrap()
    }

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_english_and_empty_never_call_backend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let input = tags(&["Pop", "pop", "  Sad ", ""]);
        assert_eq!(resolve_style(&client, &input, Language::En).await, input);
        for lang in Language::ALL {
            assert!(resolve_style(&client, &[], lang).await.is_empty());
        }
        assert_eq!(translate_text_to_english(&client, "Neon city", Language::En).await, "Neon city");
    }

    #[tokio::test]
    async fn test_translates_in_one_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("from Thai to English"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Luk Thung, Sad ,, Khaen\n" }] },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let out = resolve_style(&client, &tags(&["ลูกทุ่ง", "เศร้า", "แคน"]), Language::Th).await;
        assert_eq!(out, tags(&["Luk Thung", "Sad", "Khaen"]));
    }

    #[tokio::test]
    async fn test_fails_open_on_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "message": "quota", "status": "RESOURCE_EXHAUSTED" }
            })))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let input = tags(&["ロック", "悲しい"]);
        assert_eq!(resolve_style(&client, &input, Language::Ja).await, input);
        assert_eq!(
            translate_text_to_english(&client, "雨の街", Language::Ja).await,
            "雨の街"
        );
    }

    #[tokio::test]
    async fn test_fails_open_on_empty_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": " , " }] }, "finishReason": "STOP" }]
            })))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let input = tags(&["록"]);
        assert_eq!(resolve_style(&client, &input, Language::Ko).await, input);
    }
}
