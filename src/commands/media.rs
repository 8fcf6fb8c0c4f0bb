// Speech and album art commands

use super::{Action, AppState, CommandError};
use crate::ai::media::{self, speech_script};
use crate::i18n::{self, Language};
use crate::song::export::album_art_file_name;
use crate::song::{SongRequest, VocalMode};
use chrono::Utc;
use std::path::PathBuf;

/// Synthesized speech as a WAV file.
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    pub wav: Vec<u8>,
    pub duration_ms: u64,
    /// Set when the WAV was also written to the output directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AlbumArtOutput {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub path: Option<PathBuf>,
}

fn output_path(state: &AppState, file_name: &str) -> Result<PathBuf, CommandError> {
    let dir = &state.config.output_dir;
    std::fs::create_dir_all(dir)?;
    Ok(dir.join(file_name))
}

/// Read the song's lyrics aloud with the voice(s) for `vocal`.
pub async fn speak_song(
    state: &AppState,
    raw_song: &str,
    vocal: VocalMode,
    language: Language,
    save: bool,
) -> Result<SpeechOutput, CommandError> {
    let script = speech_script(raw_song, vocal).ok_or_else(|| {
        CommandError::Validation(i18n::catalog(language).ui.error_no_lyrics.to_string())
    })?;
    let _busy = state.begin(Action::Speech, language)?;
    let client = state.client()?;

    let audio = media::synthesize_speech(&client, script, language)
        .await
        .map_err(|e| state.fail(e))?;
    let wav = audio.to_wav_bytes()?;

    let path = if save {
        let file_name = format!("speech_{}.wav", Utc::now().format("%Y%m%d_%H%M%S"));
        let path = output_path(state, &file_name)?;
        audio.write_wav(&path)?;
        tracing::info!(path = %path.display(), "Saved speech");
        Some(path)
    } else {
        None
    };

    Ok(SpeechOutput {
        wav,
        duration_ms: audio.duration_ms(),
        path,
    })
}

/// The editable starting prompt for album art.
pub fn draft_album_art_prompt(raw_song: &str, request: &SongRequest) -> String {
    media::draft_album_art_prompt(raw_song, request, request.language)
}

/// Generate album art from a (possibly edited) prompt. `raw_song` names the
/// file after the song title.
pub async fn generate_album_art(
    state: &AppState,
    prompt: &str,
    no_text: bool,
    raw_song: &str,
    language: Language,
    save: bool,
) -> Result<AlbumArtOutput, CommandError> {
    if prompt.trim().is_empty() {
        return Err(CommandError::Validation(
            i18n::catalog(language).ui.error_prompt_required.to_string(),
        ));
    }
    let _busy = state.begin(Action::Art, language)?;
    let client = state.client()?;

    let art = media::generate_album_art(&client, prompt, no_text, language)
        .await
        .map_err(|e| state.fail(e))?;
    let stamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let file_name = album_art_file_name(raw_song, &art.mime_type, &stamp);

    let path = if save {
        let path = output_path(state, &file_name)?;
        std::fs::write(&path, &art.bytes)?;
        tracing::info!(path = %path.display(), "Saved album art");
        Some(path)
    } else {
        None
    };

    Ok(AlbumArtOutput {
        mime_type: art.mime_type,
        bytes: art.bytes,
        file_name,
        path,
    })
}
