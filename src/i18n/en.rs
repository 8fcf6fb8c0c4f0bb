use super::{
    Catalog, InstrumentalKeywords, Language, OptionLists, PromptStrings, StructureTemplate,
    UiStrings,
};

pub static CATALOG: Catalog = Catalog {
    language: Language::En,
    language_name: "English",
    prompts: PromptStrings {
        label_song_title: "Song Title:",
        label_style: "Style:",
        label_vocal_gender: "Vocal Gender:",
        label_weirdness: "Weirdness:",
        label_style_influence: "Style Influence:",
        label_lyrics: "Lyrics:",
        label_chord_progression: "Chord Progression:",

        placeholder_song_title: "[A short, memorable title that captures the heart of the song]",
        final_goal: "You are a world-class songwriter and lyricist. Write one complete, original song in English that is ready to be pasted into Suno AI. Follow the exact output format below and nothing else.",
        golden_rules_title: "**GOLDEN RULES OF SONGWRITING:**",
        golden_rules: &[
            "1. Emotional core: every line must serve one clear, honest emotion.",
            "2. Narrative flow: verses move the story forward, the chorus states its meaning.",
            "3. Lyrical craft: prefer concrete images and fresh metaphors over cliches.",
            "4. Authentic voice: write the way a real person in this story would speak.",
            "5. Language: write the lyrics in English.",
            "6. Rhythm: keep syllable counts singable and consistent between matching sections.",
            "7. Repetition: the chorus hook repeats; verses never repeat word for word.",
            "8. Descriptions: keep the Style line and every bracketed section header in English.",
        ],

        rap_guidelines_title: "**RAP WRITING GUIDELINES:**",
        rap_guidelines_content: "Use dense internal rhymes and multisyllabic rhyme chains. Vary the flow between verses, ride the beat with clear cadence, and keep punchlines for the end of a bar. Verses may be longer than in a sung song.",
        regional_guidelines_title: "**LUK THUNG / MOR LAM GUIDELINES:**",
        regional_guidelines_content: "Write in the storytelling tradition of Thai country music: rural imagery, everyday hardship and devotion, plain heartfelt wording, and vowel endings that suit long melismatic phrases.",

        auto_rules_title: "**SUNO PARAMETER RULES:**",
        auto_rules_content: "Choose Weirdness and Style Influence yourself as whole numbers from 0 to 100 that best fit the requested style, and write only the numbers on those lines.",
        auto_weirdness_placeholder: "[Choose a value from 0-100 that fits the song]",
        auto_style_influence_placeholder: "[Choose a value from 0-100 that fits the song]",

        instrument_focus_title: "**INSTRUMENT FOCUS:**",
        instrument_focus_content: "The arrangement is built around: {instrument_list}. Mention these instruments in the Style line and let instrumental sections feature them.",
        instrument_lyric_constraint: "9. Do not name the instruments ({instrument_list}) inside the sung lyrics.",

        duet_instructions_title: "**DUET INSTRUCTIONS:**",
        duet_instructions_content: "This song is a duet. The male singer plays \"{male_role}\" and the female singer plays \"{female_role}\". Prefix every lyric line with (Male):, (Female): or (Duet): so it is clear who sings it, and let the two voices answer each other.",
        duet_default_male: "the man",
        duet_default_female: "the woman",

        inspiration_guidelines_title: "**INSPIRATION:**",
        inspiration_song: "- Capture the feeling and structure of the song \"{song}\" without copying any of its lyrics.",
        inspiration_artist: "- Write in the style and voice of {artist} without copying any existing lyrics.",

        structure_rule_title: "**STRUCTURE RULE:**",
        structure_rule_content: "Follow this exact section order and use these exact section headers: {structure}.",

        placeholder_intro: "(Instrumental intro)",
        placeholder_solo: "(Instrumental solo)",
        placeholder_outro: "(Instrumental outro)",
        placeholder_instrumental: "(Instrumental)",
        placeholder_lyrics: "[Lyrics for this section]",
        default_structure: "[Intro]
{placeholder_intro}

[Verse 1]
{placeholder_lyrics}

[Chorus]
{placeholder_lyrics}

[Verse 2]
{placeholder_lyrics}

[Chorus]
{placeholder_lyrics}

[Solo]
{placeholder_solo}

[Bridge]
{placeholder_lyrics}

[Chorus]
{placeholder_lyrics}

[Outro]
{placeholder_outro}",

        analysis_guide_title: "**HOW TO READ THE REQUEST:**",
        analysis_guide_content: "Read the main idea first, then the theme, story, emotions and imagery. Treat missing fields as creative freedom, never as instructions.",
        command_instruction: "Now write the song. Output only the formatted song, starting with the Song Title line.",
        user_request_header: "**USER REQUEST:**",

        duet_marker_male: &["Male"],
        duet_marker_female: &["Female"],
        duet_marker_duet: &["Duet"],
    },
    ui: UiStrings {
        error_api_key_invalid: "The API key is invalid or missing. Please check your key and try again.",
        error_model_overloaded: "The AI model is currently overloaded. Please try again in a moment.",
        error_network: "A network error occurred. Please check your connection and try again.",
        error_rate_limit_title: "Usage limit reached",
        error_rate_limit: "You have reached the request limit for now. Please wait a while before generating again.",
        error_billing: "Image generation requires a billing-enabled account. Please enable billing for your API key to create album art.",
        error_safety: "The response was blocked for safety reasons. This can happen if the prompt contains sensitive topics. Please adjust your prompt and try again.",
        error_empty_response: "The AI model returned an empty response. This might be a temporary issue, please try again.",
        error_unknown: "An unknown error occurred. Please try again.",
        error_prompt_required: "Please enter a main idea or at least one narrative field.",
        error_no_lyrics: "No lyrics found in the song to generate audio.",
        error_busy: "This action is already in progress.",
    },
    options: OptionLists {
        vocals: ["Male", "Female", "Duet"],
        genres: &[
            "Pop", "Rock", "Hip-Hop", "Rap", "R&B", "Jazz", "Blues", "Country", "Folk",
            "Electronic", "EDM", "Lo-fi", "Indie", "Metal", "Reggae", "Soul", "Funk",
            "Luk Thung", "Mor Lam", "City Pop", "K-Pop", "J-Pop", "C-Pop", "Ballad",
        ],
        moods: &[
            "Happy", "Sad", "Romantic", "Energetic", "Calm", "Melancholic", "Nostalgic",
            "Dark", "Hopeful", "Angry", "Dreamy", "Playful",
        ],
        tempos: &["Slow", "Mid-tempo", "Upbeat", "Fast"],
        instruments: &[
            "Piano", "Acoustic Guitar", "Electric Guitar", "Bass", "Drums", "Strings",
            "Synthesizer", "Saxophone", "Trumpet", "Violin", "Flute", "Khaen", "Phin",
        ],
        structure_parts: &[
            "[Intro]", "[Verse]", "[Pre-Chorus]", "[Chorus]", "[Post-Chorus]", "[Bridge]",
            "[Solo]", "[Interlude]", "[Hook]", "[Break]", "[Outro]",
        ],
        structure_templates: &[
            StructureTemplate {
                name: "Standard pop",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Chorus]", "[Verse 2]", "[Chorus]", "[Bridge]",
                    "[Chorus]", "[Outro]",
                ],
            },
            StructureTemplate {
                name: "Ballad",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Verse 2]", "[Chorus]", "[Solo]", "[Chorus]",
                    "[Outro]",
                ],
            },
            StructureTemplate {
                name: "Rap",
                parts: &["[Intro]", "[Hook]", "[Verse 1]", "[Hook]", "[Verse 2]", "[Hook]", "[Outro]"],
            },
        ],
        instrumental_keywords: InstrumentalKeywords {
            intro: &["intro"],
            solo: &["solo"],
            outro: &["outro"],
            other: &["instrumental", "interlude", "break"],
        },
    },
};
