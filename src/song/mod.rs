// Song data model - the request a user builds, the style string sent to the
// backend and the history records kept after a successful generation.

pub mod export;
pub mod parser;

use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Models a song request may be generated with.
pub const SUPPORTED_MODELS: [&str; 2] = ["gemini-2.5-pro", "gemini-2.5-flash"];
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Title recorded when the response has no title line.
pub const UNTITLED: &str = "Untitled";
/// Style recorded when the response has no style line.
pub const UNKNOWN_STYLE: &str = "Unknown Style";

/// Who sings the song. The catalog's `vocals` list uses the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocalMode {
    #[default]
    Male,
    Female,
    Duet,
}

impl VocalMode {
    pub fn index(&self) -> usize {
        match self {
            VocalMode::Male => 0,
            VocalMode::Female => 1,
            VocalMode::Duet => 2,
        }
    }
}

/// Whether the backend picks the Weirdness / Style Influence values itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Auto,
    Manual,
}

/// One of the two numeric generation parameters as it appears in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterValue {
    Auto,
    Manual(u8),
}

/// Everything the form collects for one generation.
///
/// Copied by value into [`HistoryItem`] so later edits never touch history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongRequest {
    pub main_idea: String,
    pub core_theme: String,
    pub story: String,
    pub key_emotions: String,
    pub imagery: String,
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    /// At most one tempo can be selected.
    pub tempo: Option<String>,
    pub instruments: Vec<String>,
    pub vocal: VocalMode,
    /// Only read when `vocal` is `Duet`.
    pub male_role: String,
    pub female_role: String,
    pub inspired_by_song: String,
    pub inspired_by_artist: String,
    pub song_structure: Vec<String>,
    pub mode: GenerationMode,
    pub weirdness: u8,
    pub style_influence: u8,
    pub model: String,
    pub watermark: String,
    pub language: Language,
}

impl Default for SongRequest {
    fn default() -> Self {
        SongRequest {
            main_idea: String::new(),
            core_theme: String::new(),
            story: String::new(),
            key_emotions: String::new(),
            imagery: String::new(),
            genres: Vec::new(),
            moods: Vec::new(),
            tempo: None,
            instruments: Vec::new(),
            vocal: VocalMode::Male,
            male_role: String::new(),
            female_role: String::new(),
            inspired_by_song: String::new(),
            inspired_by_artist: String::new(),
            song_structure: Vec::new(),
            mode: GenerationMode::Auto,
            weirdness: 0,
            style_influence: 100,
            model: DEFAULT_MODEL.to_string(),
            watermark: String::new(),
            language: Language::En,
        }
    }
}

impl SongRequest {
    /// True when the main idea or at least one narrative field has text.
    pub fn has_prompt(&self) -> bool {
        [
            &self.main_idea,
            &self.core_theme,
            &self.story,
            &self.key_emotions,
            &self.imagery,
        ]
        .iter()
        .any(|field| !field.trim().is_empty())
    }

    /// Genre, mood, tempo and instrument tags in that order, blanks removed.
    pub fn style_tags(&self) -> Vec<String> {
        self.genres
            .iter()
            .chain(self.moods.iter())
            .chain(self.tempo.iter())
            .chain(self.instruments.iter())
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_duet(&self) -> bool {
        self.vocal == VocalMode::Duet
    }

    pub fn weirdness_value(&self) -> ParameterValue {
        match self.mode {
            GenerationMode::Auto => ParameterValue::Auto,
            GenerationMode::Manual => ParameterValue::Manual(self.weirdness.min(100)),
        }
    }

    pub fn style_influence_value(&self) -> ParameterValue {
        match self.mode {
            GenerationMode::Auto => ParameterValue::Auto,
            GenerationMode::Manual => ParameterValue::Manual(self.style_influence.min(100)),
        }
    }

    pub fn uses_supported_model(&self) -> bool {
        SUPPORTED_MODELS.contains(&self.model.as_str())
    }
}

/// English, deduplicated, comma-joined style tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleString(String);

impl StyleString {
    /// Join tags with ", ", keeping the first occurrence of each.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let mut seen: Vec<&str> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        StyleString(seen.join(", "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for StyleString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A saved generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub style: String,
    /// The raw response text.
    pub song_data: String,
    pub request: SongRequest,
}

impl HistoryItem {
    /// Build an unsaved item; the id is assigned when it is stored.
    pub fn new(song_data: String, request: SongRequest) -> Self {
        let title = parser::extract_title(&song_data).unwrap_or_else(|| UNTITLED.to_string());
        let style = parser::extract_style(&song_data).unwrap_or_else(|| UNKNOWN_STYLE.to_string());
        HistoryItem {
            id: 0,
            created_at: Utc::now(),
            title,
            style,
            song_data,
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let req = SongRequest::default();
        assert_eq!(req.mode, GenerationMode::Auto);
        assert_eq!(req.weirdness, 0);
        assert_eq!(req.style_influence, 100);
        assert!(req.uses_supported_model());
        assert!(!req.has_prompt());
    }

    #[test]
    fn test_has_prompt_from_any_narrative_field() {
        let mut req = SongRequest::default();
        req.imagery = "neon rain".to_string();
        assert!(req.has_prompt());

        let mut req = SongRequest::default();
        req.main_idea = "   ".to_string();
        assert!(!req.has_prompt());
    }

    #[test]
    fn test_style_tags_order_and_blanks() {
        let req = SongRequest {
            genres: vec!["Pop".into(), " ".into()],
            moods: vec!["Sad".into()],
            tempo: Some("Slow".into()),
            instruments: vec!["Piano".into()],
            ..Default::default()
        };
        assert_eq!(req.style_tags(), vec!["Pop", "Sad", "Slow", "Piano"]);
    }

    #[test]
    fn test_parameter_values() {
        let mut req = SongRequest {
            weirdness: 70,
            style_influence: 40,
            ..Default::default()
        };
        assert_eq!(req.weirdness_value(), ParameterValue::Auto);
        req.mode = GenerationMode::Manual;
        assert_eq!(req.weirdness_value(), ParameterValue::Manual(70));
        assert_eq!(req.style_influence_value(), ParameterValue::Manual(40));
    }

    #[test]
    fn test_style_string_dedupes_in_order() {
        let style = StyleString::from_tags(&["Pop", "Rock", "Pop", "", "Sad"]);
        assert_eq!(style.as_str(), "Pop, Rock, Sad");
        assert!(StyleString::from_tags::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_request_json_uses_camel_case_and_defaults() {
        let req: SongRequest =
            serde_json::from_str(r#"{"mainIdea":"a storm","vocal":"duet","mode":"manual"}"#).unwrap();
        assert_eq!(req.main_idea, "a storm");
        assert!(req.is_duet());
        assert_eq!(req.style_influence, 100);
        assert_eq!(req.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_history_item_extracts_title_and_style() {
        let raw = "Song Title: Night Drive\nStyle: Synthwave, Dreamy\n\nLyrics:\n[Verse]\nla";
        let item = HistoryItem::new(raw.to_string(), SongRequest::default());
        assert_eq!(item.title, "Night Drive");
        assert_eq!(item.style, "Synthwave, Dreamy");
        assert_eq!(item.id, 0);

        let item = HistoryItem::new("just words".to_string(), SongRequest::default());
        assert_eq!(item.title, UNTITLED);
        assert_eq!(item.style, UNKNOWN_STYLE);
    }
}
