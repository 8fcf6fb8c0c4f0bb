// Translation tables
//
// Per-language string catalogs: labels the backend is told to emit, prompt
// fragments, user-facing error messages and the option lists offered to the
// user. All data is 'static and built into the binary.

mod en;
mod ja;
mod ko;
mod th;
mod zh;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI / prompt language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
    Zh,
    Ja,
    Ko,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Th,
        Language::Zh,
        Language::Ja,
        Language::Ko,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
        }
    }

    /// English name of the language, used inside backend instructions
    /// ("translate from Thai to English").
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Th => "Thai",
            Language::Zh => "Chinese",
            Language::Ja => "Japanese",
            Language::Ko => "Korean",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "th" => Some(Language::Th),
            "zh" => Some(Language::Zh),
            "ja" => Some(Language::Ja),
            "ko" => Some(Language::Ko),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| {
            format!("Unsupported language '{}'. Supported: en, th, zh, ja, ko", s)
        })
    }
}

/// Strings that end up inside the composed prompt, plus the labels the
/// backend echoes back in its response.
#[derive(Debug)]
pub struct PromptStrings {
    pub label_song_title: &'static str,
    pub label_style: &'static str,
    pub label_vocal_gender: &'static str,
    pub label_weirdness: &'static str,
    pub label_style_influence: &'static str,
    pub label_lyrics: &'static str,
    /// Legacy metadata line emitted by older prompt versions; filtered on parse.
    pub label_chord_progression: &'static str,

    pub placeholder_song_title: &'static str,
    pub final_goal: &'static str,
    pub golden_rules_title: &'static str,
    pub golden_rules: &'static [&'static str],

    pub rap_guidelines_title: &'static str,
    pub rap_guidelines_content: &'static str,
    pub regional_guidelines_title: &'static str,
    pub regional_guidelines_content: &'static str,

    pub auto_rules_title: &'static str,
    pub auto_rules_content: &'static str,
    pub auto_weirdness_placeholder: &'static str,
    pub auto_style_influence_placeholder: &'static str,

    /// Contains `{instrument_list}`.
    pub instrument_focus_title: &'static str,
    pub instrument_focus_content: &'static str,
    pub instrument_lyric_constraint: &'static str,

    /// Contains `{male_role}` and `{female_role}`.
    pub duet_instructions_title: &'static str,
    pub duet_instructions_content: &'static str,
    pub duet_default_male: &'static str,
    pub duet_default_female: &'static str,

    pub inspiration_guidelines_title: &'static str,
    /// Contains `{song}`.
    pub inspiration_song: &'static str,
    /// Contains `{artist}`.
    pub inspiration_artist: &'static str,

    pub structure_rule_title: &'static str,
    /// Contains `{structure}`.
    pub structure_rule_content: &'static str,

    pub placeholder_intro: &'static str,
    pub placeholder_solo: &'static str,
    pub placeholder_outro: &'static str,
    pub placeholder_instrumental: &'static str,
    pub placeholder_lyrics: &'static str,
    /// Body used when no structure sequence is given. Contains
    /// `{placeholder_intro}`, `{placeholder_lyrics}`, `{placeholder_solo}`
    /// and `{placeholder_outro}`.
    pub default_structure: &'static str,

    pub analysis_guide_title: &'static str,
    pub analysis_guide_content: &'static str,
    pub command_instruction: &'static str,
    pub user_request_header: &'static str,

    /// Localized aliases of the `(Male):` / `(Female):` / `(Duet):` markers.
    pub duet_marker_male: &'static [&'static str],
    pub duet_marker_female: &'static [&'static str],
    pub duet_marker_duet: &'static [&'static str],
}

/// User-facing messages.
#[derive(Debug)]
pub struct UiStrings {
    pub error_api_key_invalid: &'static str,
    pub error_model_overloaded: &'static str,
    pub error_network: &'static str,
    pub error_rate_limit_title: &'static str,
    pub error_rate_limit: &'static str,
    pub error_billing: &'static str,
    pub error_safety: &'static str,
    pub error_empty_response: &'static str,
    pub error_unknown: &'static str,
    pub error_prompt_required: &'static str,
    pub error_no_lyrics: &'static str,
    pub error_busy: &'static str,
}

/// Structure keywords that mark a section as instrumental, grouped by the
/// placeholder they select.
#[derive(Debug)]
pub struct InstrumentalKeywords {
    pub intro: &'static [&'static str],
    pub solo: &'static [&'static str],
    pub outro: &'static [&'static str],
    pub other: &'static [&'static str],
}

#[derive(Debug)]
pub struct StructureTemplate {
    pub name: &'static str,
    pub parts: &'static [&'static str],
}

#[derive(Debug)]
pub struct OptionLists {
    /// Always male, female, duet, in that order.
    pub vocals: [&'static str; 3],
    pub genres: &'static [&'static str],
    pub moods: &'static [&'static str],
    pub tempos: &'static [&'static str],
    pub instruments: &'static [&'static str],
    pub structure_parts: &'static [&'static str],
    pub structure_templates: &'static [StructureTemplate],
    pub instrumental_keywords: InstrumentalKeywords,
}

#[derive(Debug)]
pub struct Catalog {
    pub language: Language,
    /// Native display name of the language.
    pub language_name: &'static str,
    pub prompts: PromptStrings,
    pub ui: UiStrings,
    pub options: OptionLists,
}

/// Shared layout of the master prompt. Every `{name}` is substituted exactly
/// once by the prompt assembler.
pub const MASTER_TEMPLATE: &str = "{final_goal}

{label_song_title} {placeholder_song_title}
{label_style} {style}
{label_vocal_gender} {vocal_gender}
{weirdness_line}
{style_influence_line}

{label_lyrics}
{structure_body}

---
{golden_rules_title}
{golden_rules}
{instrument_lyric_constraint}{rap_instruction}{regional_instruction}{auto_param_instruction}

{analysis_guide_title}
{analysis_guide_content}{instrument_instruction}{duet_instruction}{inspiration_instruction}{structure_rule}

{command_instruction}

{user_request_header}
{user_prompt}";

/// Catalog for one language.
pub fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::En => &en::CATALOG,
        Language::Th => &th::CATALOG,
        Language::Zh => &zh::CATALOG,
        Language::Ja => &ja::CATALOG,
        Language::Ko => &ko::CATALOG,
    }
}

/// Every catalog, in `Language::ALL` order.
pub fn all_catalogs() -> impl Iterator<Item = &'static Catalog> {
    Language::ALL.iter().map(|lang| catalog(*lang))
}

/// Strip the trailing colon from a label ("Song Title:" -> "Song Title").
pub fn label_stem(label: &str) -> &str {
    label.trim_end().trim_end_matches(':').trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_catalog_language_matches_key() {
        for lang in Language::ALL {
            assert_eq!(catalog(lang).language, lang);
        }
    }

    #[test]
    fn test_labels_end_with_colon() {
        for cat in all_catalogs() {
            let p = &cat.prompts;
            for label in [
                p.label_song_title,
                p.label_style,
                p.label_vocal_gender,
                p.label_weirdness,
                p.label_style_influence,
                p.label_lyrics,
                p.label_chord_progression,
            ] {
                assert!(label.ends_with(':'), "{:?} label {:?}", cat.language, label);
                assert!(!label_stem(label).is_empty());
            }
        }
    }

    #[test]
    fn test_fragment_placeholders_present() {
        for cat in all_catalogs() {
            let p = &cat.prompts;
            assert!(p.instrument_focus_content.contains("{instrument_list}"));
            assert!(p.instrument_lyric_constraint.contains("{instrument_list}"));
            assert!(p.duet_instructions_content.contains("{male_role}"));
            assert!(p.duet_instructions_content.contains("{female_role}"));
            assert!(p.inspiration_song.contains("{song}"));
            assert!(p.inspiration_artist.contains("{artist}"));
            assert!(p.structure_rule_content.contains("{structure}"));
            assert!(p.default_structure.contains("{placeholder_intro}"));
            assert!(p.default_structure.contains("{placeholder_outro}"));
        }
    }

    #[test]
    fn test_option_lists_populated() {
        for cat in all_catalogs() {
            let o = &cat.options;
            assert!(!o.genres.is_empty());
            assert!(!o.moods.is_empty());
            assert!(!o.tempos.is_empty());
            assert!(!o.instruments.is_empty());
            assert!(!o.structure_parts.is_empty());
            assert!(!o.structure_templates.is_empty());
            assert!(!o.instrumental_keywords.intro.is_empty());
        }
    }

    #[test]
    fn test_label_stem() {
        assert_eq!(label_stem("Song Title:"), "Song Title");
        assert_eq!(label_stem("歌名:"), "歌名");
        assert_eq!(label_stem("Lyrics"), "Lyrics");
    }
}
