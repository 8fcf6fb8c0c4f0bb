// Song commands - generate, parse and export

use super::{Action, AppState, CommandError};
use crate::ai::{classify, compose_prompt, resolve_style, Capability};
use crate::i18n::{self, Language};
use crate::song::export::{self, CopyTarget};
use crate::song::parser::{self, ParsedSong};
use crate::song::{HistoryItem, SongRequest, StyleString, SUPPORTED_MODELS};
use serde::Serialize;

/// A generated song as returned to the front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSong {
    pub history_item: HistoryItem,
    /// English style line the prompt was built with.
    pub style: StyleString,
    pub song: ParsedSong,
}

/// Check a request before any backend call.
pub fn validate_request(request: &SongRequest) -> Result<(), CommandError> {
    let ui = &i18n::catalog(request.language).ui;
    if !request.has_prompt() {
        return Err(CommandError::Validation(ui.error_prompt_required.to_string()));
    }
    if !request.uses_supported_model() {
        return Err(CommandError::Validation(format!(
            "Unsupported model '{}'. Supported: {}",
            request.model,
            SUPPORTED_MODELS.join(", ")
        )));
    }
    Ok(())
}

/// Read a request from JSON. `default_language` applies only when the JSON
/// has no `language` field.
pub fn request_from_json(json: &str, default_language: Language) -> Result<SongRequest, CommandError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CommandError::Validation(format!("Invalid song request: {}", e)))?;
    let has_language = value.get("language").is_some();
    let mut request: SongRequest = serde_json::from_value(value)
        .map_err(|e| CommandError::Validation(format!("Invalid song request: {}", e)))?;
    if !has_language {
        request.language = default_language;
    }
    Ok(request)
}

/// Generate a song: translate the style, compose the prompt, call the
/// backend once and record the result in history.
pub async fn generate_song(state: &AppState, request: SongRequest) -> Result<GeneratedSong, CommandError> {
    validate_request(&request)?;
    let language = request.language;
    let _busy = state.begin(Action::Song, language)?;
    let client = state.client()?;

    // Translation finishes before the prompt is composed
    let tags = resolve_style(&client, &request.style_tags(), language).await;
    let style = StyleString::from_tags(&tags);
    let prompt = compose_prompt(&request, &style);

    tracing::info!(
        model = %request.model,
        %language,
        prompt_len = prompt.len(),
        "Generating song"
    );
    let raw = client
        .generate_text(&request.model, &prompt, None)
        .await
        .map_err(|e| state.fail(classify(&e, Capability::Text, language)))?;

    let mut item = HistoryItem::new(raw, request);
    match state.with_db(|db| db.insert_history(&item, state.config.history_capacity)) {
        Ok(id) => item.id = id,
        Err(e) => tracing::warn!(error = %e, "Failed to save song to history"),
    }

    let song = parser::parse(&item.song_data, &item.request.song_structure);
    tracing::info!(title = %item.title, sections = song.sections.len(), "Song generated");
    Ok(GeneratedSong {
        history_item: item,
        style,
        song,
    })
}

/// Parse raw song text, ordering sections by `structure` when given.
pub fn parse_song(raw: &str, structure: &[String]) -> ParsedSong {
    parser::parse(raw, structure)
}

/// Text to copy or share.
pub fn export_text(raw: &str, target: CopyTarget, watermark: &str) -> String {
    export::copy_text(raw, target, watermark)
}
