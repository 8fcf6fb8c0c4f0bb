// REST API routes
// Request and response bodies are camelCase JSON. Binary payloads (WAV,
// PNG) travel as base64 strings.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ApiError, ServerState};
use crate::ai::suggestions::{NarrativeConcept, StyleSuggestion};
use crate::commands::history::RestoredSong;
use crate::commands::settings::{ApiKeySource, ApiKeyStatus};
use crate::commands::song::GeneratedSong;
use crate::commands::{self, Action, CommandError};
use crate::i18n::Language;
use crate::song::export::CopyTarget;
use crate::song::parser::ParsedSong;
use crate::song::{HistoryItem, SongRequest, VocalMode};

type ApiResult<T> = Result<Json<T>, ApiError>;

// ---- Request/Response types ----

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub name: String,
    pub version: String,
    pub language: Language,
    pub model: String,
    pub api_key: ApiKeyStatus,
    pub busy: Vec<Action>,
    pub rate_limited: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    pub raw: String,
    #[serde(default)]
    pub structure: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub raw: String,
    #[serde(default)]
    pub target: CopyTarget,
    #[serde(default)]
    pub watermark: String,
}

#[derive(Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageOnly {
    pub language: Option<Language>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRequest {
    pub main_idea: String,
    pub language: Option<Language>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRequest {
    pub artist: String,
    pub language: Option<Language>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRequest {
    pub request: SongRequest,
    pub language: Option<Language>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub raw_song: String,
    #[serde(default)]
    pub vocal: VocalMode,
    pub language: Option<Language>,
    #[serde(default)]
    pub save: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    pub mime_type: &'static str,
    pub audio_base64: String,
    pub duration_ms: u64,
    pub path: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftArtRequest {
    pub raw_song: String,
    pub request: SongRequest,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumArtRequest {
    pub prompt: String,
    #[serde(default)]
    pub no_text: bool,
    #[serde(default)]
    pub raw_song: String,
    pub language: Option<Language>,
    #[serde(default)]
    pub save: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumArtResponse {
    pub mime_type: String,
    pub image_base64: String,
    pub file_name: String,
    pub path: Option<String>,
}

#[derive(Serialize)]
pub struct IdeaResponse {
    pub idea: String,
}

#[derive(Serialize)]
pub struct StructureResponse {
    pub structure: Vec<String>,
}

#[derive(Serialize)]
pub struct CountResponse {
    pub removed: usize,
}

#[derive(Deserialize, Serialize)]
pub struct LanguageBody {
    pub language: Language,
}

#[derive(Deserialize, Serialize)]
pub struct ModelBody {
    pub model: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyBody {
    pub api_key: String,
}

#[derive(Serialize)]
pub struct ApiKeySaved {
    pub source: ApiKeySource,
}

// ---- Route registration ----

pub fn api_routes() -> Router<Arc<ServerState>> {
    Router::new()
        .route("/api/health", get(|| async { "ok" }))
        .route("/api/status", get(get_status))
        .route("/api/songs/generate", post(generate_song))
        .route("/api/songs/parse", post(parse_song))
        .route("/api/songs/export", post(export_song))
        .route("/api/suggest/idea", post(suggest_idea))
        .route("/api/suggest/narrative", post(suggest_narrative))
        .route("/api/suggest/narrative-from-idea", post(suggest_narrative_from_idea))
        .route("/api/suggest/style-from-idea", post(suggest_style_from_idea))
        .route("/api/suggest/style-from-artist", post(suggest_style_from_artist))
        .route("/api/suggest/structure", post(suggest_structure))
        .route("/api/speech", post(speak_song))
        .route("/api/album-art/draft", post(draft_album_art))
        .route("/api/album-art", post(generate_album_art))
        .route("/api/history", get(list_history).delete(clear_history))
        .route("/api/history/{id}", get(get_history).delete(delete_history))
        .route("/api/settings/language", get(get_language).put(set_language))
        .route("/api/settings/model", get(get_model).put(set_model))
        .route("/api/settings/form", get(get_form).put(save_form))
        .route(
            "/api/settings/api-key",
            get(get_api_key_status).put(set_api_key).delete(delete_api_key),
        )
        .route("/api/rate-limit/acknowledge", post(acknowledge_rate_limit))
}

// ---- Handlers ----

fn language_or_default(state: &ServerState, language: Option<Language>) -> Language {
    language.unwrap_or_else(|| state.app.language())
}

async fn get_status(State(state): State<Arc<ServerState>>) -> ApiResult<StatusResponse> {
    let app = &state.app;
    Ok(Json(StatusResponse {
        name: "Songcraft".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        language: app.language(),
        model: commands::settings::get_model(app)?,
        api_key: commands::settings::api_key_status(app),
        busy: Action::ALL
            .into_iter()
            .filter(|action| app.busy.is_busy(*action))
            .collect(),
        rate_limited: app.is_rate_limited(),
    }))
}

async fn generate_song(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SongRequest>,
) -> ApiResult<GeneratedSong> {
    Ok(Json(commands::song::generate_song(&state.app, request).await?))
}

async fn parse_song(Json(body): Json<ParseRequest>) -> Json<ParsedSong> {
    Json(commands::song::parse_song(&body.raw, &body.structure))
}

async fn export_song(Json(body): Json<ExportRequest>) -> Json<TextResponse> {
    Json(TextResponse {
        text: commands::song::export_text(&body.raw, body.target, &body.watermark),
    })
}

async fn suggest_idea(
    State(state): State<Arc<ServerState>>,
    body: Option<Json<LanguageOnly>>,
) -> ApiResult<IdeaResponse> {
    let language = language_or_default(&state, body.and_then(|Json(b)| b.language));
    let idea = commands::suggest::random_idea(&state.app, language).await?;
    Ok(Json(IdeaResponse { idea }))
}

async fn suggest_narrative(
    State(state): State<Arc<ServerState>>,
    body: Option<Json<LanguageOnly>>,
) -> ApiResult<NarrativeConcept> {
    let language = language_or_default(&state, body.and_then(|Json(b)| b.language));
    Ok(Json(commands::suggest::random_narrative(&state.app, language).await?))
}

async fn suggest_narrative_from_idea(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<IdeaRequest>,
) -> ApiResult<NarrativeConcept> {
    let language = language_or_default(&state, body.language);
    Ok(Json(
        commands::suggest::narrative_from_idea(&state.app, &body.main_idea, language).await?,
    ))
}

async fn suggest_style_from_idea(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<FormRequest>,
) -> ApiResult<StyleSuggestion> {
    let language = language_or_default(&state, body.language);
    Ok(Json(
        commands::suggest::style_from_idea(&state.app, &body.request, language).await?,
    ))
}

async fn suggest_style_from_artist(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<ArtistRequest>,
) -> ApiResult<StyleSuggestion> {
    let language = language_or_default(&state, body.language);
    Ok(Json(
        commands::suggest::style_from_artist(&state.app, &body.artist, language).await?,
    ))
}

async fn suggest_structure(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<FormRequest>,
) -> ApiResult<StructureResponse> {
    let language = language_or_default(&state, body.language);
    let structure = commands::suggest::song_structure(&state.app, &body.request, language).await?;
    Ok(Json(StructureResponse { structure }))
}

async fn speak_song(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<SpeechRequest>,
) -> ApiResult<SpeechResponse> {
    let language = language_or_default(&state, body.language);
    let output =
        commands::media::speak_song(&state.app, &body.raw_song, body.vocal, language, body.save)
            .await?;
    Ok(Json(SpeechResponse {
        mime_type: "audio/wav",
        audio_base64: STANDARD.encode(&output.wav),
        duration_ms: output.duration_ms,
        path: output.path.map(|p| p.display().to_string()),
    }))
}

async fn draft_album_art(Json(body): Json<DraftArtRequest>) -> Json<TextResponse> {
    Json(TextResponse {
        text: commands::media::draft_album_art_prompt(&body.raw_song, &body.request),
    })
}

async fn generate_album_art(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<AlbumArtRequest>,
) -> ApiResult<AlbumArtResponse> {
    let language = language_or_default(&state, body.language);
    let art = commands::media::generate_album_art(
        &state.app,
        &body.prompt,
        body.no_text,
        &body.raw_song,
        language,
        body.save,
    )
    .await?;
    Ok(Json(AlbumArtResponse {
        mime_type: art.mime_type,
        image_base64: STANDARD.encode(&art.bytes),
        file_name: art.file_name,
        path: art.path.map(|p| p.display().to_string()),
    }))
}

async fn list_history(State(state): State<Arc<ServerState>>) -> ApiResult<Vec<HistoryItem>> {
    Ok(Json(commands::history::list_history(&state.app)?))
}

async fn get_history(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<i64>,
) -> ApiResult<RestoredSong> {
    commands::history::restore_history(&state.app, id)?
        .map(Json)
        .ok_or_else(|| ApiError(CommandError::Validation(format!("No history item {}", id))))
}

async fn delete_history(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<i64>,
) -> ApiResult<CountResponse> {
    let removed = usize::from(commands::history::delete_history(&state.app, id)?);
    Ok(Json(CountResponse { removed }))
}

async fn clear_history(State(state): State<Arc<ServerState>>) -> ApiResult<CountResponse> {
    let removed = commands::history::clear_history(&state.app)?;
    Ok(Json(CountResponse { removed }))
}

async fn get_language(State(state): State<Arc<ServerState>>) -> Json<LanguageBody> {
    Json(LanguageBody {
        language: commands::settings::get_language(&state.app),
    })
}

async fn set_language(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<LanguageBody>,
) -> ApiResult<LanguageBody> {
    commands::settings::set_language(&state.app, body.language)?;
    Ok(Json(body))
}

async fn get_model(State(state): State<Arc<ServerState>>) -> ApiResult<ModelBody> {
    Ok(Json(ModelBody {
        model: commands::settings::get_model(&state.app)?,
    }))
}

async fn set_model(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<ModelBody>,
) -> ApiResult<ModelBody> {
    commands::settings::set_model(&state.app, &body.model)?;
    Ok(Json(body))
}

async fn get_form(State(state): State<Arc<ServerState>>) -> ApiResult<Option<SongRequest>> {
    Ok(Json(commands::settings::get_form_snapshot(&state.app)?))
}

async fn save_form(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SongRequest>,
) -> ApiResult<SongRequest> {
    commands::settings::save_form_snapshot(&state.app, &request)?;
    Ok(Json(request))
}

async fn get_api_key_status(State(state): State<Arc<ServerState>>) -> Json<ApiKeyStatus> {
    Json(commands::settings::api_key_status(&state.app))
}

async fn set_api_key(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<ApiKeyBody>,
) -> ApiResult<ApiKeySaved> {
    let source = commands::settings::set_api_key(&state.app, &body.api_key)?;
    Ok(Json(ApiKeySaved { source }))
}

async fn delete_api_key(State(state): State<Arc<ServerState>>) -> ApiResult<ApiKeyStatus> {
    commands::settings::delete_api_key(&state.app)?;
    Ok(Json(commands::settings::api_key_status(&state.app)))
}

async fn acknowledge_rate_limit(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    state.app.acknowledge_rate_limit();
    tracing::info!("Rate limit acknowledged");
    let app = &state.app;
    Json(StatusResponse {
        name: "Songcraft".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        language: app.language(),
        model: app.config.model.clone(),
        api_key: commands::settings::api_key_status(app),
        busy: Vec::new(),
        rate_limited: app.is_rate_limited(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::{start_server, RunningServer};
    use super::*;
    use crate::commands::test_support::{state_for, text_reply};
    use serde_json::{json, Value};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn spawn(backend: &MockServer, token: Option<&str>) -> (RunningServer, String) {
        let state = Arc::new(ServerState {
            app: state_for(&backend.uri()),
            token: token.map(str::to_string),
        });
        let server = start_server(state, "127.0.0.1", 0).await.unwrap();
        let base = format!("http://{}", server.addr);
        (server, base)
    }

    #[tokio::test]
    async fn test_bearer_token_required() {
        let backend = MockServer::start().await;
        let (server, base) = spawn(&backend, Some("secret")).await;
        let http = reqwest::Client::new();

        let health = http.get(format!("{}/api/health", base)).send().await.unwrap();
        assert_eq!(health.status(), 200);

        let denied = http.get(format!("{}/api/history", base)).send().await.unwrap();
        assert_eq!(denied.status(), 401);

        let allowed = http
            .get(format!("{}/api/history", base))
            .bearer_auth("secret")
            .send()
            .await
            .unwrap();
        assert_eq!(allowed.status(), 200);
        assert_eq!(allowed.json::<Value>().await.unwrap(), json!([]));

        server.stop().await;
    }

    #[tokio::test]
    async fn test_rate_limit_response_is_blocking() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&backend)
            .await;
        let (server, base) = spawn(&backend, None).await;
        let http = reqwest::Client::new();

        let response = http
            .post(format!("{}/api/suggest/idea", base))
            .json(&json!({ "language": "ja" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 429);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["kind"], "RateLimitError");
        assert_eq!(body["blocking"], true);

        let status: Value = http
            .post(format!("{}/api/rate-limit/acknowledge", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(status["rateLimited"], false);

        server.stop().await;
    }

    #[tokio::test]
    async fn test_validation_error_is_400() {
        let backend = MockServer::start().await;
        let (server, base) = spawn(&backend, None).await;
        let http = reqwest::Client::new();

        let response = http
            .post(format!("{}/api/songs/generate", base))
            .json(&json!({ "genres": ["Pop"] }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["kind"], "ValidationError");
        assert_eq!(body["blocking"], false);

        server.stop().await;
    }

    #[tokio::test]
    async fn test_generate_then_history() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(text_reply("Song Title: Tidal\nStyle: Pop\n\nLyrics:\n[Verse]\nWaves"))
            .mount(&backend)
            .await;
        let (server, base) = spawn(&backend, None).await;
        let http = reqwest::Client::new();

        let generated: Value = http
            .post(format!("{}/api/songs/generate", base))
            .json(&json!({ "mainIdea": "the sea", "genres": ["Pop"] }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(generated["historyItem"]["title"], "Tidal");
        let id = generated["historyItem"]["id"].as_i64().unwrap();

        let restored: Value = http
            .get(format!("{}/api/history/{}", base, id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(restored["song"]["sections"][1]["label"], "[Verse]");

        let removed: Value = http
            .delete(format!("{}/api/history/{}", base, id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(removed["removed"], 1);

        server.stop().await;
    }

    #[tokio::test]
    async fn test_parse_endpoint() {
        let backend = MockServer::start().await;
        let (server, base) = spawn(&backend, None).await;
        let http = reqwest::Client::new();

        let parsed: Value = http
            .post(format!("{}/api/songs/parse", base))
            .json(&json!({
                "raw": "Song Title: X\n\nLyrics:\n[A]\na\n[B]\nb\n[C]\nc",
                "structure": ["[C]", "[A]"]
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let labels: Vec<&str> = parsed["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Lyrics:", "[C]", "[A]", "[B]"]);

        server.stop().await;
    }
}
