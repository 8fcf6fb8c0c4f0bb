// Suggestion calls - song ideas, narratives, styles and structures
//
// Narrative, style and structure calls ask for schema-constrained JSON; a
// reply of the wrong shape is an error.

use super::errors::{classify, Capability, GenerationError};
use super::gemini_client::{GeminiClient, UTILITY_MODEL};
use crate::i18n::{self, Language};
use crate::song::SongRequest;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// The four narrative fields of a song request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeConcept {
    pub core_theme: String,
    pub story: String,
    pub key_emotions: String,
    pub imagery: String,
}

/// Suggested style tags, in the UI language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSuggestion {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    /// Never more than one entry.
    pub tempos: Vec<String>,
    pub instruments: Vec<String>,
}

impl StyleSuggestion {
    fn normalized(mut self) -> Self {
        self.tempos.truncate(1);
        self
    }
}

fn narrative_schema(language: Language, from_idea: bool) -> serde_json::Value {
    let lang = language.english_name();
    let suffix = if from_idea { ", based on the user's idea" } else { "" };
    json!({
        "type": "OBJECT",
        "properties": {
            "coreTheme": { "type": "STRING", "description": format!("The central, universal human truth the song explores in {}{}.", lang, suffix) },
            "story": { "type": "STRING", "description": format!("A specific, cinematic scenario or moment in time that illustrates the theme in {}{}.", lang, suffix) },
            "keyEmotions": { "type": "STRING", "description": format!("A sophisticated blend of primary and secondary emotions the listener should feel, in {}{}.", lang, suffix) },
            "imagery": { "type": "STRING", "description": format!("A list of striking, symbolic visual metaphors that enhance the story and theme in {}{}.", lang, suffix) },
        },
        "required": ["coreTheme", "story", "keyEmotions", "imagery"],
    })
}

fn style_schema() -> serde_json::Value {
    let list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "genres": list,
            "moods": list,
            "tempos": list,
            "instruments": list,
        },
        "required": ["genres", "moods", "tempos", "instruments"],
    })
}

fn style_selection_rules(language: Language) -> String {
    let options = &i18n::catalog(language).options;
    format!(
        "- Select up to 3 genres from this list: {}.\n- Select up to 3 moods from this list: {}.\n- Select ONLY ONE tempo from this list: {}.\n- Select up to 4 relevant instruments from this list: {}.",
        options.genres.join(", "),
        options.moods.join(", "),
        options.tempos.join(", "),
        options.instruments.join(", "),
    )
}

/// A one-sentence song concept.
pub async fn random_idea(client: &GeminiClient, language: Language) -> Result<String, GenerationError> {
    let prompt = format!(
        "As an acclaimed A&R executive with a golden ear for hits, pitch a single, modern, and commercially viable song concept in {}. The idea must feel fresh, culturally relevant, and tap into a genuine human emotion. Present it as a high-concept, one-sentence pitch. Return ONLY the pitch, with no extra text, labels, or quotation marks.",
        language.english_name()
    );
    client
        .generate_text(UTILITY_MODEL, &prompt, Some(1.0))
        .await
        .map(|text| text.trim().to_string())
        .map_err(|e| classify(&e, Capability::Text, language))
}

/// A fresh narrative with no user input.
pub async fn random_narrative(
    client: &GeminiClient,
    language: Language,
) -> Result<NarrativeConcept, GenerationError> {
    let prompt = format!(
        "You are an elite narrative designer for a top-tier record label. Your task is to generate a complete, artistically profound, and commercially appealing narrative blueprint for a song in {}. The concept must be modern, emotionally intelligent, and contain a unique twist or perspective. Ensure all fields are filled with vivid, interconnected ideas.",
        language.english_name()
    );
    client
        .generate_json(UTILITY_MODEL, &prompt, 1.0, narrative_schema(language, false))
        .await
        .map_err(|e| classify(&e, Capability::Structured, language))
}

/// Expand the user's main idea into a narrative.
pub async fn narrative_from_idea(
    client: &GeminiClient,
    main_idea: &str,
    language: Language,
) -> Result<NarrativeConcept, GenerationError> {
    let prompt = format!(
        "As an elite narrative designer, take the following user-provided song idea and expand it into a complete, artistically profound, and commercially appealing narrative blueprint in {}. Ensure the generated blueprint is directly inspired by and consistent with the user's idea. Fill all fields with vivid, interconnected concepts.\nUser Idea: \"{}\"",
        language.english_name(),
        main_idea
    );
    client
        .generate_json(UTILITY_MODEL, &prompt, 0.7, narrative_schema(language, true))
        .await
        .map_err(|e| classify(&e, Capability::Structured, language))
}

/// Suggest style tags that fit the request's idea and narrative.
pub async fn style_from_idea(
    client: &GeminiClient,
    request: &SongRequest,
    language: Language,
) -> Result<StyleSuggestion, GenerationError> {
    let prompt = format!(
        "You are a visionary A&R executive. Based on the following song concept, suggest the most commercially viable and artistically fitting musical style. Provide your answer in {}.\n{}\n\nSong Concept:\n- Main Idea: {}\n- Core Theme: {}\n- Story: {}\n- Key Emotions: {}\n- Imagery: {}\n\nReturn ONLY a JSON object with the keys \"genres\", \"moods\", \"tempos\", and \"instruments\".",
        language.english_name(),
        style_selection_rules(language),
        request.main_idea,
        request.core_theme,
        request.story,
        request.key_emotions,
        request.imagery,
    );
    client
        .generate_json::<StyleSuggestion>(UTILITY_MODEL, &prompt, 0.5, style_schema())
        .await
        .map(StyleSuggestion::normalized)
        .map_err(|e| classify(&e, Capability::Structured, language))
}

/// Describe an artist's typical sound as style tags.
pub async fn style_from_artist(
    client: &GeminiClient,
    artist: &str,
    language: Language,
) -> Result<StyleSuggestion, GenerationError> {
    let lang = language.english_name();
    let prompt = format!(
        "You are a world-class musicologist. Analyze the musical style of the artist \"{}\".\nBased on their typical sound, provide a list of relevant genres, moods, tempos, and instruments in {}.\n{}\nReturn the result as a JSON object. Ensure all tags are in {}.",
        artist,
        lang,
        style_selection_rules(language),
        lang,
    );
    client
        .generate_json::<StyleSuggestion>(UTILITY_MODEL, &prompt, 0.2, style_schema())
        .await
        .map(StyleSuggestion::normalized)
        .map_err(|e| classify(&e, Capability::Structured, language))
}

/// Suggest an ordered list of section headers.
pub async fn song_structure(
    client: &GeminiClient,
    request: &SongRequest,
    language: Language,
) -> Result<Vec<String>, GenerationError> {
    let options = &i18n::catalog(language).options;
    let combined_style = request
        .genres
        .iter()
        .chain(request.moods.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let prompt = format!(
        "As a master songwriter, analyze the following song concept and musical style. Suggest the most effective and conventional song structure in {}.\n- Choose from these available parts: {}.\n- The structure should be logical and build emotional momentum.\n- Return ONLY a JSON array of strings representing the structure, e.g., [\"[Intro]\", \"[Verse 1]\", \"[Chorus]\"].\n\nSong Concept:\n- Main Idea: {}\n- Core Theme: {}\n- Musical Style: {}",
        language.english_name(),
        options.structure_parts.join(", "),
        request.main_idea,
        request.core_theme,
        combined_style,
    );
    let schema = json!({
        "type": "ARRAY",
        "items": { "type": "STRING", "description": "A song structure part, e.g., \"[Verse]\"" }
    });
    client
        .generate_json::<Vec<String>>(UTILITY_MODEL, &prompt, 0.3, schema)
        .await
        .map_err(|e| classify(&e, Capability::Structured, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::errors::ErrorKind;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }]
        }))
    }

    async fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::with_base_url("test-key".to_string(), &server.uri(), Duration::from_secs(5))
            .unwrap()
    }

    #[tokio::test]
    async fn test_random_idea_is_trimmed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"generationConfig": {"temperature": 1.0}})))
            .respond_with(reply("  A lighthouse keeper falls for a ship's radio voice.\n"))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let idea = random_idea(&client, Language::En).await.unwrap();
        assert_eq!(idea, "A lighthouse keeper falls for a ship's radio voice.");
    }

    #[tokio::test]
    async fn test_narrative_parses_camel_case() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(
                r#"{"coreTheme":"home","story":"a bus ride","keyEmotions":"longing","imagery":"rice fields"}"#,
            ))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let narrative = narrative_from_idea(&client, "going home", Language::En).await.unwrap();
        assert_eq!(narrative.core_theme, "home");
        assert_eq!(narrative.imagery, "rice fields");
    }

    #[tokio::test]
    async fn test_narrative_missing_field_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(r#"{"coreTheme":"home"}"#))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let err = random_narrative(&client, Language::En).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
    }

    #[tokio::test]
    async fn test_style_tempos_truncated_to_one() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"generationConfig": {"temperature": 0.2}})))
            .respond_with(reply(
                r#"{"genres":["Rock"],"moods":["Angry"],"tempos":["Fast","Upbeat"],"instruments":["Electric Guitar","Drums"]}"#,
            ))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let style = style_from_artist(&client, "Foo Fighters", Language::En).await.unwrap();
        assert_eq!(style.tempos, vec!["Fast"]);
        assert_eq!(style.instruments.len(), 2);
    }

    #[tokio::test]
    async fn test_structure_must_be_string_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(r#"["[Intro]", 2, "[Outro]"]"#))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let err = song_structure(&client, &SongRequest::default(), Language::En)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
    }

    #[tokio::test]
    async fn test_structure_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(r#"["[Intro]", "[Verse 1]", "[Chorus]"]"#))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let structure = song_structure(&client, &SongRequest::default(), Language::En)
            .await
            .unwrap();
        assert_eq!(structure, vec!["[Intro]", "[Verse 1]", "[Chorus]"]);
    }

    #[tokio::test]
    async fn test_rate_limit_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Resource has been exhausted"))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let err = random_idea(&client, Language::Th).await.unwrap_err();
        assert!(err.is_rate_limited());
    }
}
