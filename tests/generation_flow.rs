// Generate, parse and reopen a song through the command layer against a
// mocked Gemini backend, with the history stored in a file-backed database.

use songcraft_lib::commands::{self, AppState};
use songcraft_lib::config::AppConfig;
use songcraft_lib::song::parser::SectionKind;
use songcraft_lib::song::SongRequest;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SONG: &str = "Song Title: Harbor Lights
Style: Folk, Warm

Lyrics:
[Chorus]
Harbor lights are calling
[Verse 1]
Salt on the window
Rope on the pier";

fn reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }]
    }))
}

fn config(base: &str, dir: &std::path::Path) -> AppConfig {
    AppConfig {
        api_key: Some("test-key".to_string()),
        api_base: base.to_string(),
        request_timeout: Duration::from_secs(5),
        db_path: dir.join("songcraft.db"),
        output_dir: dir.join("output"),
        ..AppConfig::default()
    }
}

fn request() -> SongRequest {
    SongRequest {
        main_idea: "a fishing town waiting for the boats".to_string(),
        genres: vec!["Folk".to_string()],
        song_structure: vec!["[Verse 1]".to_string(), "[Chorus]".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_generate_parse_and_restore() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-pro:generateContent"))
        .and(body_string_contains("a fishing town waiting for the boats"))
        .respond_with(reply(SONG))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let state = AppState::open(config(&server.uri(), dir.path())).unwrap();
        let generated = commands::song::generate_song(&state, request()).await.unwrap();
        assert_eq!(generated.history_item.title, "Harbor Lights");

        let labels: Vec<&str> = generated.song.parts().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["[Verse 1]", "[Chorus]"]);
        generated.history_item.id
    };

    // Reopen from disk
    let state = AppState::open(config(&server.uri(), dir.path())).unwrap();
    let history = commands::history::list_history(&state).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].style, "Folk, Warm");

    let restored = commands::history::restore_history(&state, id).unwrap().unwrap();
    assert_eq!(restored.item.request, request());
    let verse = restored
        .song
        .sections
        .iter()
        .find(|s| s.kind == SectionKind::Part && s.label == "[Verse 1]")
        .unwrap();
    assert_eq!(verse.lines, vec!["Salt on the window", "Rope on the pier"]);

    assert!(commands::history::delete_history(&state, id).unwrap());
    assert!(commands::history::list_history(&state).unwrap().is_empty());
}

#[tokio::test]
async fn test_backend_failure_leaves_history_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::open(config(&server.uri(), dir.path())).unwrap();

    let err = commands::song::generate_song(&state, request()).await.unwrap_err();
    assert!(!err.is_rate_limited());
    assert!(commands::history::list_history(&state).unwrap().is_empty());
}
