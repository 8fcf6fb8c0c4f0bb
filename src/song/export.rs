// Export helpers - watermark expansion, copy/share text and album-art file names

use super::parser;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Part of a song to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyTarget {
    Title,
    Style,
    Lyrics,
    #[default]
    All,
}

impl std::str::FromStr for CopyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(CopyTarget::Title),
            "style" => Ok(CopyTarget::Style),
            "lyrics" => Ok(CopyTarget::Lyrics),
            "all" => Ok(CopyTarget::All),
            other => Err(format!("Unknown copy target '{}'", other)),
        }
    }
}

/// Replace `{title}` and `{style}` in a watermark with values from the song.
/// Placeholders whose value is missing are left as typed.
pub fn expand_watermark(watermark: &str, raw_song: &str) -> String {
    if watermark.trim().is_empty() {
        return watermark.to_string();
    }
    let mut expanded = watermark.to_string();
    if let Some(title) = parser::extract_title(raw_song) {
        expanded = expanded.replace("{title}", &title);
    }
    if let Some(style) = parser::extract_style(raw_song) {
        expanded = expanded.replace("{style}", &style);
    }
    expanded
}

fn with_watermark(text: &str, watermark: &str) -> String {
    if watermark.trim().is_empty() {
        text.to_string()
    } else {
        format!("{}\n\n---\n{}", text, watermark)
    }
}

fn first_bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]\n]*\]").expect("bracket regex should compile"))
}

/// Text placed on the clipboard for `target`. Lyrics and full-song copies
/// carry the expanded watermark after a `---` separator. Empty when the
/// requested part is missing.
pub fn copy_text(raw_song: &str, target: CopyTarget, watermark: &str) -> String {
    let watermark = expand_watermark(watermark, raw_song);
    let text = match target {
        CopyTarget::Title => parser::extract_title(raw_song).unwrap_or_default(),
        CopyTarget::Style => parser::extract_style(raw_song).unwrap_or_default(),
        CopyTarget::Lyrics => match first_bracket_regex().find(raw_song) {
            Some(m) => with_watermark(raw_song[m.start()..].trim(), &watermark),
            None => String::new(),
        },
        CopyTarget::All => with_watermark(raw_song, &watermark),
    };
    text.trim().to_string()
}

/// File extension for an image mime type, `png` when unrecognised.
pub fn image_extension(mime_type: &str) -> &'static str {
    let essence = mime_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "png",
    }
}

/// `"Neon Rain!"` -> `"neon_rain__{stamp}.png"`. Untitled songs and titles
/// without any ASCII letter or digit use `album_art`. An empty `stamp` is
/// left out.
pub fn album_art_file_name(raw_song: &str, mime_type: &str, stamp: &str) -> String {
    let stem: String = parser::extract_title(raw_song)
        .map(|title| {
            title
                .to_lowercase()
                .chars()
                .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
                .collect()
        })
        .filter(|stem: &String| stem.chars().any(|c| c != '_'))
        .unwrap_or_else(|| "album_art".to_string());
    let extension = image_extension(mime_type);
    if stamp.is_empty() {
        format!("{}.{}", stem, extension)
    } else {
        format!("{}_{}.{}", stem, stamp, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG: &str = "Song Title: Neon Rain\nStyle: Synthwave\n\nLyrics:\n[Verse]\nCity lights";

    #[test]
    fn test_expand_watermark() {
        assert_eq!(
            expand_watermark("{title} ({style}) by me", SONG),
            "Neon Rain (Synthwave) by me"
        );
        assert_eq!(expand_watermark("{title}", "no labels"), "{title}");
        assert_eq!(expand_watermark("  ", SONG), "  ");
    }

    #[test]
    fn test_copy_targets() {
        assert_eq!(copy_text(SONG, CopyTarget::Title, ""), "Neon Rain");
        assert_eq!(copy_text(SONG, CopyTarget::Style, ""), "Synthwave");
        assert_eq!(copy_text(SONG, CopyTarget::Lyrics, ""), "[Verse]\nCity lights");
        assert_eq!(
            copy_text(SONG, CopyTarget::Lyrics, "made by {title}"),
            "[Verse]\nCity lights\n\n---\nmade by Neon Rain"
        );
        assert_eq!(copy_text(SONG, CopyTarget::All, ""), SONG);
        assert!(copy_text("plain", CopyTarget::Lyrics, "wm").is_empty());
    }

    #[test]
    fn test_copy_target_from_str() {
        assert_eq!("Lyrics".parse::<CopyTarget>().unwrap(), CopyTarget::Lyrics);
        assert!("chorus".parse::<CopyTarget>().is_err());
    }

    #[test]
    fn test_album_art_file_name() {
        assert_eq!(album_art_file_name(SONG, "image/png", ""), "neon_rain.png");
        assert_eq!(
            album_art_file_name("Song Title: Rain, Again!", "image/png", ""),
            "rain__again_.png"
        );
        assert_eq!(album_art_file_name("Lyrics:\n[Verse]", "image/png", ""), "album_art.png");
        assert_eq!(
            album_art_file_name("ชื่อเพลง: ฝน", "image/jpeg", "20260101_120000"),
            "album_art_20260101_120000.jpg"
        );
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension("image/png"), "png");
        assert_eq!(image_extension("IMAGE/JPEG"), "jpg");
        assert_eq!(image_extension("image/webp; q=1"), "webp");
        assert_eq!(image_extension("application/octet-stream"), "png");
    }
}
