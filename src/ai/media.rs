// Speech and album art
//
// Speech reads the lyrics of a generated song with one or two prebuilt
// voices. Album art starts from an editable prompt drafted from the song and
// the request, translated to English before the image call.

use super::errors::{classify, BackendFailure, Capability, GenerationError};
use super::gemini_client::{GeminiClient, SpeechConfig};
use super::style::translate_text_to_english;
use crate::audio::pcm::{sample_rate_from_mime, PcmAudio, PcmError, SPEECH_CHANNELS, SPEECH_SAMPLE_RATE};
use crate::i18n::Language;
use crate::song::parser::{extract_style, extract_title, lyrics_text, strip_duet_markers};
use crate::song::{SongRequest, VocalMode, UNKNOWN_STYLE, UNTITLED};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const MALE_VOICE: &str = "Zephyr";
pub const FEMALE_VOICE: &str = "Puck";

const COMPOSITION_GUIDANCE: &str = ", professional album cover art, realistic photo, high detail, plausible composition that a human would create, avoids overcrowding too many elements into one image.";
const THAI_NATIONALITY: &str = " Human characters MUST be clearly identifiable as being of Thai nationality.";
const NO_TEXT: &str = " (A purely visual image with no text, words, letters, or typography).";
const THAI_APPEARANCE: &str = " The human characters in the image should have a distinct Thai appearance and nationality.";

/// Text and voice settings for one speech request.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechScript {
    pub text: String,
    pub config: SpeechConfig,
}

/// Decoded album art.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumArt {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Build the speech request for a song, or `None` when it has no lyrics.
///
/// A duet is read by two speakers named after the `Male`/`Female` markers in
/// the lyrics. A single voice gets the lyrics with the markers removed.
pub fn speech_script(raw_song: &str, vocal: VocalMode) -> Option<SpeechScript> {
    let lyrics = lyrics_text(raw_song)?;
    match vocal {
        VocalMode::Duet => Some(SpeechScript {
            text: format!(
                "Read the following song lyrics, which are a duet between a Male and a Female singer:\n\n{}",
                lyrics
            ),
            config: SpeechConfig::multi_speaker(&[("Male", MALE_VOICE), ("Female", FEMALE_VOICE)]),
        }),
        VocalMode::Male | VocalMode::Female => {
            let text = strip_duet_markers(&lyrics);
            if text.is_empty() {
                return None;
            }
            let voice = if vocal == VocalMode::Male { MALE_VOICE } else { FEMALE_VOICE };
            Some(SpeechScript {
                text,
                config: SpeechConfig::single(voice),
            })
        }
    }
}

/// No samples is an empty response; anything else undecodable is malformed.
fn audio_failure(error: PcmError) -> BackendFailure {
    match error {
        PcmError::Empty => BackendFailure::Empty,
        other => BackendFailure::Malformed(other.to_string()),
    }
}

/// Synthesize speech and decode the returned PCM.
pub async fn synthesize_speech(
    client: &GeminiClient,
    script: SpeechScript,
    language: Language,
) -> Result<PcmAudio, GenerationError> {
    let inline = client
        .generate_speech(&script.text, script.config)
        .await
        .map_err(|e| classify(&e, Capability::Speech, language))?;

    let sample_rate = sample_rate_from_mime(&inline.mime_type).unwrap_or(SPEECH_SAMPLE_RATE);
    let audio = PcmAudio::from_base64(&inline.data, sample_rate, SPEECH_CHANNELS)
        .map_err(|e| classify(&audio_failure(e), Capability::Speech, language))?;
    tracing::info!(
        mime_type = %inline.mime_type,
        duration_ms = audio.duration_ms(),
        "Synthesized speech"
    );
    Ok(audio)
}

fn non_empty_clause(prefix: &str, value: &str, suffix: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{}{}{}", prefix, value.trim(), suffix)
    }
}

/// The starting album art prompt shown to the user for editing.
pub fn draft_album_art_prompt(raw_song: &str, request: &SongRequest, language: Language) -> String {
    let title = extract_title(raw_song).unwrap_or_else(|| UNTITLED.to_string());
    let style = extract_style(raw_song).unwrap_or_else(|| UNKNOWN_STYLE.to_string());
    let concept = if request.core_theme.trim().is_empty() {
        request.main_idea.as_str()
    } else {
        request.core_theme.as_str()
    };

    let mut prompt = format!(
        "Epic, atmospheric, cinematic, high detail, photographic album cover art for a song titled \"{}\". The style of music is {}. {} {} The core concept is about: {}. {}",
        title,
        style,
        non_empty_clause("The mood is ", &request.moods.join(", "), "."),
        non_empty_clause("Featuring instruments like ", &request.instruments.join(", "), "."),
        concept.trim(),
        non_empty_clause("Incorporate themes of ", &request.imagery, "."),
    );
    if language == Language::Th {
        prompt.push_str(THAI_APPEARANCE);
    }
    prompt.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The prompt actually sent to the image model.
pub fn finalize_album_art_prompt(english_prompt: &str, no_text: bool, language: Language) -> String {
    let mut prompt = format!("{}{}", english_prompt.trim(), COMPOSITION_GUIDANCE);
    if language == Language::Th {
        prompt.push_str(THAI_NATIONALITY);
    }
    if no_text {
        prompt.push_str(NO_TEXT);
    }
    prompt
}

/// Generate album art from a user-edited prompt.
pub async fn generate_album_art(
    client: &GeminiClient,
    prompt: &str,
    no_text: bool,
    language: Language,
) -> Result<AlbumArt, GenerationError> {
    let english = translate_text_to_english(client, prompt, language).await;
    let full_prompt = finalize_album_art_prompt(&english, no_text, language);

    let inline = client
        .generate_image(&full_prompt)
        .await
        .map_err(|e| classify(&e, Capability::Image, language))?;
    let bytes = STANDARD.decode(inline.data.trim()).map_err(|e| {
        classify(
            &BackendFailure::Malformed(format!("invalid image data: {}", e)),
            Capability::Image,
            language,
        )
    })?;
    if bytes.is_empty() {
        return Err(classify(&BackendFailure::Empty, Capability::Image, language));
    }
    tracing::info!(mime_type = %inline.mime_type, size = bytes.len(), "Generated album art");
    Ok(AlbumArt {
        mime_type: inline.mime_type,
        bytes,
    })
}
