// Prompt assembler
//
// Builds the single natural-language prompt sent for song generation from a
// SongRequest and its resolved English style string. Pure and deterministic.

use crate::i18n::{self, Catalog, Language, PromptStrings, MASTER_TEMPLATE};
use crate::song::{ParameterValue, SongRequest, StyleString};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Style keywords that switch on the rap guidelines.
const RAP_KEYWORDS: &[&str] = &["rap", "hip-hop", "hip hop"];
/// Style keywords that switch on the Thai country (luk thung / mor lam) guidelines.
const REGIONAL_KEYWORDS: &[&str] = &["ลูกทุ่ง", "หมอลำ", "luk thung", "mor lam"];

const NOT_PROVIDED: &str = "Not provided";

/// Placeholder line written under a structure header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPlaceholder {
    Intro,
    Solo,
    Outro,
    Instrumental,
    Lyrics,
}

impl SectionPlaceholder {
    pub fn is_instrumental(&self) -> bool {
        *self != SectionPlaceholder::Lyrics
    }

    pub fn text(&self, prompts: &PromptStrings) -> &'static str {
        match self {
            SectionPlaceholder::Intro => prompts.placeholder_intro,
            SectionPlaceholder::Solo => prompts.placeholder_solo,
            SectionPlaceholder::Outro => prompts.placeholder_outro,
            SectionPlaceholder::Instrumental => prompts.placeholder_instrumental,
            SectionPlaceholder::Lyrics => prompts.placeholder_lyrics,
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder regex should compile"))
}

/// Substitute `{name}` placeholders in one pass. Substituted text is never
/// rescanned, so user input containing braces is left alone. Names without
/// a value are kept verbatim.
pub fn fill_template(template: &str, values: &HashMap<&str, String>) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names used in `template`, in order of appearance.
pub fn placeholder_names(template: &str) -> Vec<String> {
    placeholder_regex()
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn block(title: &str, content: &str) -> String {
    format!("\n\n{}\n{}", title, content)
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value.trim()
    }
}

/// Decide which placeholder goes under a structure header. English keywords
/// always count, plus those of `language`.
pub fn section_placeholder(part: &str, language: Language) -> SectionPlaceholder {
    let lower = part.to_lowercase();
    let english = &i18n::catalog(Language::En).options.instrumental_keywords;
    let local = &i18n::catalog(language).options.instrumental_keywords;
    let hit = |en: &[&str], loc: &[&str]| contains_any(&lower, en) || contains_any(&lower, loc);

    if hit(english.intro, local.intro) {
        SectionPlaceholder::Intro
    } else if hit(english.solo, local.solo) {
        SectionPlaceholder::Solo
    } else if hit(english.outro, local.outro) {
        SectionPlaceholder::Outro
    } else if hit(english.other, local.other) {
        SectionPlaceholder::Instrumental
    } else {
        SectionPlaceholder::Lyrics
    }
}

/// The "Main Idea / Core Theme / ..." block describing what the user wants.
pub fn build_user_prompt(request: &SongRequest) -> String {
    [
        ("Main Idea", &request.main_idea),
        ("Core Theme", &request.core_theme),
        ("Story", &request.story),
        ("Key Emotions", &request.key_emotions),
        ("Imagery", &request.imagery),
    ]
    .iter()
    .map(|(label, value)| format!("{}: {}.", label, or_default(value, NOT_PROVIDED)))
    .collect::<Vec<_>>()
    .join("\n")
}

fn structure_body(request: &SongRequest, catalog: &Catalog) -> String {
    let p = &catalog.prompts;
    if request.song_structure.is_empty() {
        let values = HashMap::from([
            ("placeholder_intro", p.placeholder_intro.to_string()),
            ("placeholder_solo", p.placeholder_solo.to_string()),
            ("placeholder_outro", p.placeholder_outro.to_string()),
            ("placeholder_instrumental", p.placeholder_instrumental.to_string()),
            ("placeholder_lyrics", p.placeholder_lyrics.to_string()),
        ]);
        return fill_template(p.default_structure, &values);
    }

    request
        .song_structure
        .iter()
        .map(|part| {
            let placeholder = section_placeholder(part, catalog.language);
            format!("{}\n{}", part, placeholder.text(p))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn parameter_line(label: &str, value: ParameterValue, auto_placeholder: &str) -> String {
    match value {
        ParameterValue::Manual(n) => format!("{} {}", label, n),
        ParameterValue::Auto => format!("{} {}", label, auto_placeholder),
    }
}

/// Compose the song-generation prompt.
///
/// Optional instruction blocks (rap, regional, instruments, duet,
/// inspiration, structure, auto parameters) are empty unless the request
/// or style calls for them.
pub fn compose_prompt(request: &SongRequest, style: &StyleString) -> String {
    let catalog = i18n::catalog(request.language);
    let p = &catalog.prompts;
    let style_lower = style.as_str().to_lowercase();

    let rap_instruction = if contains_any(&style_lower, RAP_KEYWORDS) {
        block(p.rap_guidelines_title, p.rap_guidelines_content)
    } else {
        String::new()
    };

    let regional_instruction = if contains_any(&style_lower, REGIONAL_KEYWORDS) {
        block(p.regional_guidelines_title, p.regional_guidelines_content)
    } else {
        String::new()
    };

    let auto_param_instruction = match request.weirdness_value() {
        ParameterValue::Auto => block(p.auto_rules_title, p.auto_rules_content),
        ParameterValue::Manual(_) => String::new(),
    };

    let instruments: Vec<&str> = request
        .instruments
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect();
    let (instrument_instruction, instrument_lyric_constraint) = if instruments.is_empty() {
        (String::new(), String::new())
    } else {
        let values = HashMap::from([("instrument_list", instruments.join(", "))]);
        (
            block(p.instrument_focus_title, &fill_template(p.instrument_focus_content, &values)),
            fill_template(p.instrument_lyric_constraint, &values),
        )
    };

    let duet_instruction = if request.is_duet() {
        let values = HashMap::from([
            ("male_role", or_default(&request.male_role, p.duet_default_male).to_string()),
            ("female_role", or_default(&request.female_role, p.duet_default_female).to_string()),
        ]);
        block(p.duet_instructions_title, &fill_template(p.duet_instructions_content, &values))
    } else {
        String::new()
    };

    let song = request.inspired_by_song.trim();
    let artist = request.inspired_by_artist.trim();
    let inspiration_instruction = if song.is_empty() && artist.is_empty() {
        String::new()
    } else {
        let mut lines = Vec::new();
        if !song.is_empty() {
            lines.push(fill_template(p.inspiration_song, &HashMap::from([("song", song.to_string())])));
        }
        if !artist.is_empty() {
            lines.push(fill_template(
                p.inspiration_artist,
                &HashMap::from([("artist", artist.to_string())]),
            ));
        }
        block(p.inspiration_guidelines_title, &lines.join("\n"))
    };

    let structure_rule = if request.song_structure.is_empty() {
        String::new()
    } else {
        let values = HashMap::from([("structure", request.song_structure.join(" -> "))]);
        block(p.structure_rule_title, &fill_template(p.structure_rule_content, &values))
    };

    let vocal_gender = catalog.options.vocals[request.vocal.index()];

    let values: HashMap<&str, String> = HashMap::from([
        ("final_goal", p.final_goal.to_string()),
        ("label_song_title", p.label_song_title.to_string()),
        ("placeholder_song_title", p.placeholder_song_title.to_string()),
        ("label_style", p.label_style.to_string()),
        ("style", style.as_str().to_string()),
        ("label_vocal_gender", p.label_vocal_gender.to_string()),
        ("vocal_gender", vocal_gender.to_string()),
        (
            "weirdness_line",
            parameter_line(p.label_weirdness, request.weirdness_value(), p.auto_weirdness_placeholder),
        ),
        (
            "style_influence_line",
            parameter_line(
                p.label_style_influence,
                request.style_influence_value(),
                p.auto_style_influence_placeholder,
            ),
        ),
        ("label_lyrics", p.label_lyrics.to_string()),
        ("structure_body", structure_body(request, catalog)),
        ("golden_rules_title", p.golden_rules_title.to_string()),
        ("golden_rules", p.golden_rules.join("\n")),
        ("instrument_lyric_constraint", instrument_lyric_constraint),
        ("rap_instruction", rap_instruction),
        ("regional_instruction", regional_instruction),
        ("auto_param_instruction", auto_param_instruction),
        ("analysis_guide_title", p.analysis_guide_title.to_string()),
        ("analysis_guide_content", p.analysis_guide_content.to_string()),
        ("instrument_instruction", instrument_instruction),
        ("duet_instruction", duet_instruction),
        ("inspiration_instruction", inspiration_instruction),
        ("structure_rule", structure_rule),
        ("command_instruction", p.command_instruction.to_string()),
        ("user_request_header", p.user_request_header.to_string()),
        ("user_prompt", build_user_prompt(request)),
    ]);

    fill_template(MASTER_TEMPLATE, &values)
}
