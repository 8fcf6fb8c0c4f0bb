// Response parser - turns the free-text song the backend returns back into
// metadata lines and ordered lyric sections.
//
// Labels are matched against every language's catalog because a history item
// may have been generated under a different language than the current one.

use crate::i18n::{self, PromptStrings};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// What a section holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// The "Lyrics:" line that opens the lyrics block.
    LyricsHeader,
    /// A `[Name]` section.
    Part,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// The header line, trimmed ("[Verse 1]" or "Lyrics:").
    pub label: String,
    /// Non-blank content lines, exactly as they appear in the response.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParsedSong {
    pub metadata: Vec<String>,
    pub sections: Vec<Section>,
}

impl ParsedSong {
    /// Only the `[Name]` sections, in output order.
    pub fn parts(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.kind == SectionKind::Part)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Male,
    Female,
    Duet,
}

/// Display classification of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    Metadata,
    Duet { speaker: Speaker, text: String },
    SectionHeader,
    LyricsHeader,
    Lyric,
}

/// Alternation of one label across all catalogs, colon removed and escaped.
fn label_alternation(pick: fn(&PromptStrings) -> &'static str) -> String {
    let mut stems: Vec<String> = Vec::new();
    for cat in i18n::all_catalogs() {
        let stem = regex::escape(i18n::label_stem(pick(&cat.prompts)));
        if !stems.contains(&stem) {
            stems.push(stem);
        }
    }
    stems.join("|")
}

fn label_line_regex(pick: fn(&PromptStrings) -> &'static str) -> Regex {
    let pattern = format!(r"(?m)^[ \t]*(?:{})[ \t]*:[ \t]*(.*)$", label_alternation(pick));
    Regex::new(&pattern).expect("label regex should compile")
}

fn title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| label_line_regex(|p| p.label_song_title))
}

fn style_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| label_line_regex(|p| p.label_style))
}

fn lyrics_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| label_line_regex(|p| p.label_lyrics))
}

fn chord_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| label_line_regex(|p| p.label_chord_progression))
}

fn metadata_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = [
            label_alternation(|p| p.label_song_title),
            label_alternation(|p| p.label_style),
            label_alternation(|p| p.label_vocal_gender),
            label_alternation(|p| p.label_weirdness),
            label_alternation(|p| p.label_style_influence),
        ]
        .join("|");
        Regex::new(&format!(r"^(?:{})[ \t]*:", alternation))
            .expect("metadata regex should compile")
    })
}

fn duet_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let mut markers: Vec<String> = vec!["Male".into(), "Female".into(), "Duet".into()];
        for cat in i18n::all_catalogs() {
            let p = &cat.prompts;
            for marker in p
                .duet_marker_male
                .iter()
                .chain(p.duet_marker_female)
                .chain(p.duet_marker_duet)
            {
                let escaped = regex::escape(marker);
                if !markers.contains(&escaped) {
                    markers.push(escaped);
                }
            }
        }
        Regex::new(&format!(r"(?i)^\(({})\)[ \t]*:[ \t]*(.*)$", markers.join("|")))
            .expect("duet regex should compile")
    })
}

fn section_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*\[[^\n]*\]").expect("section regex should compile"))
}

fn speaker_for(marker: &str) -> Speaker {
    if marker.eq_ignore_ascii_case("male") {
        return Speaker::Male;
    }
    if marker.eq_ignore_ascii_case("female") {
        return Speaker::Female;
    }
    for cat in i18n::all_catalogs() {
        let p = &cat.prompts;
        if p.duet_marker_male.contains(&marker) {
            return Speaker::Male;
        }
        if p.duet_marker_female.contains(&marker) {
            return Speaker::Female;
        }
    }
    Speaker::Duet
}

fn is_section_header(trimmed: &str) -> bool {
    trimmed.starts_with('[') && trimmed.contains(']')
}

fn is_lyrics_header(line: &str) -> bool {
    lyrics_header_regex().is_match(line)
}

fn capture_value(re: &Regex, raw: &str) -> Option<String> {
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Value of the first title line, in any language.
pub fn extract_title(raw: &str) -> Option<String> {
    capture_value(title_regex(), raw)
}

/// Value of the first style line, in any language.
pub fn extract_style(raw: &str) -> Option<String> {
    capture_value(style_regex(), raw)
}

/// Parse a raw response.
///
/// The text is split at the first lyrics-header line (any language), or at
/// the first `[Section]` line when there is no header. When
/// `requested_structure` is non-empty the sections are reordered to follow it.
pub fn parse(raw: &str, requested_structure: &[String]) -> ParsedSong {
    let lines: Vec<&str> = raw.lines().collect();
    let start = lines
        .iter()
        .position(|line| is_lyrics_header(line))
        // Headerless replies still yield sections instead of one metadata block
        .or_else(|| lines.iter().position(|line| is_section_header(line.trim())))
        .unwrap_or(lines.len());

    let metadata = lines[..start]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !chord_line_regex().is_match(line))
        .map(|line| line.to_string())
        .collect();

    let mut sections: Vec<Section> = Vec::new();
    for line in &lines[start..] {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_section_header(trimmed) {
            sections.push(Section {
                kind: SectionKind::Part,
                label: trimmed.to_string(),
                lines: Vec::new(),
            });
        } else if is_lyrics_header(trimmed) {
            sections.push(Section {
                kind: SectionKind::LyricsHeader,
                label: trimmed.to_string(),
                lines: Vec::new(),
            });
        } else if let Some(current) = sections.last_mut() {
            current.lines.push(line.to_string());
        }
    }

    if !requested_structure.is_empty() {
        sections = reorder_sections(sections, requested_structure);
    }

    ParsedSong { metadata, sections }
}

/// "[Verse 2]" -> "verse 2"
fn normalize_label(label: &str) -> String {
    label
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim()
        .to_lowercase()
}

/// "[Verse 2]" -> "verse"
fn base_label(label: &str) -> String {
    normalize_label(label)
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .trim_end()
        .to_string()
}

/// Reorder sections to follow a requested structure.
///
/// The first lyrics header stays first. Each requested label claims one
/// unused section: exact label matches are assigned before any base-name
/// ("Verse 2" ~ "Verse") match. Sections nobody claimed follow in their
/// original order.
pub fn reorder_sections(sections: Vec<Section>, requested: &[String]) -> Vec<Section> {
    let mut pool: Vec<Option<Section>> = sections.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(pool.len());

    if let Some(index) = pool
        .iter()
        .position(|s| matches!(s, Some(s) if s.kind == SectionKind::LyricsHeader))
    {
        if let Some(header) = pool[index].take() {
            ordered.push(header);
        }
    }

    let mut claimed: Vec<Option<usize>> = vec![None; requested.len()];
    let mut used = vec![false; pool.len()];

    for (slot, label) in requested.iter().enumerate() {
        let wanted = normalize_label(label);
        let hit = pool.iter().enumerate().position(|(i, s)| {
            !used[i] && matches!(s, Some(s) if s.kind == SectionKind::Part && normalize_label(&s.label) == wanted)
        });
        if let Some(i) = hit {
            used[i] = true;
            claimed[slot] = Some(i);
        }
    }

    for (slot, label) in requested.iter().enumerate() {
        if claimed[slot].is_some() {
            continue;
        }
        let wanted = base_label(label);
        let hit = pool.iter().enumerate().position(|(i, s)| {
            !used[i] && matches!(s, Some(s) if s.kind == SectionKind::Part && base_label(&s.label) == wanted)
        });
        if let Some(i) = hit {
            used[i] = true;
            claimed[slot] = Some(i);
        }
    }

    for index in claimed.into_iter().flatten() {
        if let Some(section) = pool[index].take() {
            ordered.push(section);
        }
    }
    ordered.extend(pool.into_iter().flatten());
    ordered
}

/// Classify a line for display.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if metadata_line_regex().is_match(trimmed) {
        return LineKind::Metadata;
    }
    if let Some(caps) = duet_regex().captures(trimmed) {
        let marker = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let text = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        return LineKind::Duet {
            speaker: speaker_for(marker),
            text: text.to_string(),
        };
    }
    if is_section_header(trimmed) {
        return LineKind::SectionHeader;
    }
    if is_lyrics_header(trimmed) {
        return LineKind::LyricsHeader;
    }
    LineKind::Lyric
}

/// The lyrics to read aloud: everything after the first lyrics header, or
/// from the first `[Section]` line when there is no header.
pub fn lyrics_text(raw: &str) -> Option<String> {
    if let Some(m) = lyrics_header_regex().find(raw) {
        let text = raw[m.end()..].trim();
        return (!text.is_empty()).then(|| text.to_string());
    }
    let start = section_start_regex().find(raw)?.start();
    let text = raw[start..].trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Drop leading `(Male):`-style markers from every line.
pub fn strip_duet_markers(text: &str) -> String {
    text.lines()
        .map(|line| match duet_regex().captures(line.trim()) {
            Some(caps) => caps.get(2).map(|m| m.as_str()).unwrap_or_default(),
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
