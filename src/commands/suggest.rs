// Suggestion commands
//
// All suggestion kinds share one busy flag: the form only ever waits on one
// suggestion at a time.

use super::{Action, AppState, CommandError};
use crate::ai::suggestions::{self, NarrativeConcept, StyleSuggestion};
use crate::i18n::{self, Language};
use crate::song::SongRequest;

fn require_text(value: &str, language: Language) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::Validation(
            i18n::catalog(language).ui.error_prompt_required.to_string(),
        ));
    }
    Ok(())
}

pub async fn random_idea(state: &AppState, language: Language) -> Result<String, CommandError> {
    let _busy = state.begin(Action::Suggest, language)?;
    let client = state.client()?;
    suggestions::random_idea(&client, language)
        .await
        .map_err(|e| state.fail(e))
}

pub async fn random_narrative(state: &AppState, language: Language) -> Result<NarrativeConcept, CommandError> {
    let _busy = state.begin(Action::Suggest, language)?;
    let client = state.client()?;
    suggestions::random_narrative(&client, language)
        .await
        .map_err(|e| state.fail(e))
}

pub async fn narrative_from_idea(
    state: &AppState,
    main_idea: &str,
    language: Language,
) -> Result<NarrativeConcept, CommandError> {
    require_text(main_idea, language)?;
    let _busy = state.begin(Action::Suggest, language)?;
    let client = state.client()?;
    suggestions::narrative_from_idea(&client, main_idea, language)
        .await
        .map_err(|e| state.fail(e))
}

pub async fn style_from_idea(
    state: &AppState,
    request: &SongRequest,
    language: Language,
) -> Result<StyleSuggestion, CommandError> {
    if !request.has_prompt() {
        return Err(CommandError::Validation(
            i18n::catalog(language).ui.error_prompt_required.to_string(),
        ));
    }
    let _busy = state.begin(Action::Suggest, language)?;
    let client = state.client()?;
    suggestions::style_from_idea(&client, request, language)
        .await
        .map_err(|e| state.fail(e))
}

pub async fn style_from_artist(
    state: &AppState,
    artist: &str,
    language: Language,
) -> Result<StyleSuggestion, CommandError> {
    require_text(artist, language)?;
    let _busy = state.begin(Action::Suggest, language)?;
    let client = state.client()?;
    suggestions::style_from_artist(&client, artist.trim(), language)
        .await
        .map_err(|e| state.fail(e))
}

pub async fn song_structure(
    state: &AppState,
    request: &SongRequest,
    language: Language,
) -> Result<Vec<String>, CommandError> {
    let _busy = state.begin(Action::Suggest, language)?;
    let client = state.client()?;
    suggestions::song_structure(&client, request, language)
        .await
        .map_err(|e| state.fail(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{state_for, text_reply};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn test_blank_input_never_calls_backend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(text_reply("unused"))
            .expect(0)
            .mount(&server)
            .await;
        let state = state_for(&server.uri());

        assert!(matches!(
            narrative_from_idea(&state, "  ", Language::En).await,
            Err(CommandError::Validation(_))
        ));
        assert!(matches!(
            style_from_artist(&state, "", Language::Ja).await,
            Err(CommandError::Validation(_))
        ));
        assert!(matches!(
            style_from_idea(&state, &SongRequest::default(), Language::En).await,
            Err(CommandError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_structure_suggestion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(text_reply(r#"["[Intro]", "[Verse 1]", "[Chorus]", "[Outro]"]"#))
            .mount(&server)
            .await;
        let state = state_for(&server.uri());

        let parts = song_structure(&state, &SongRequest::default(), Language::En)
            .await
            .unwrap();
        assert_eq!(parts.len(), 4);
        assert!(!state.busy.is_busy(Action::Suggest));
    }

    #[tokio::test]
    async fn test_random_idea() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(text_reply("A barista writes songs on coffee cups."))
            .mount(&server)
            .await;
        let state = state_for(&server.uri());

        let idea = random_idea(&state, Language::En).await.unwrap();
        assert_eq!(idea, "A barista writes songs on coffee cups.");
    }
}
