use super::{
    Catalog, InstrumentalKeywords, Language, OptionLists, PromptStrings, StructureTemplate,
    UiStrings,
};

pub static CATALOG: Catalog = Catalog {
    language: Language::Zh,
    language_name: "中文",
    prompts: PromptStrings {
        label_song_title: "歌名:",
        label_style: "风格:",
        label_vocal_gender: "演唱性别:",
        label_weirdness: "怪异度:",
        label_style_influence: "风格影响:",
        label_lyrics: "歌词:",
        label_chord_progression: "和弦进行:",

        placeholder_song_title: "[一个简短好记、点出歌曲核心的歌名]",
        final_goal: "你是世界级的词曲作者。请用中文创作一首完整的原创歌曲，可直接粘贴到 Suno AI 使用。严格按照下面的输出格式，不要输出其他内容。",
        golden_rules_title: "**歌曲创作黄金法则:**",
        golden_rules: &[
            "1. 情感核心：每一句都要服务于一种清晰真挚的情感。",
            "2. 叙事推进：主歌推动故事，副歌点明主题。",
            "3. 歌词技巧：用具体的画面和新鲜的比喻，避免陈词滥调。",
            "4. 真实口吻：像故事里真实的人那样说话。",
            "5. 语言：歌词使用中文。",
            "6. 节奏：字数便于演唱，对应段落保持一致。",
            "7. 重复：副歌的钩子可以重复，主歌不可逐字重复。",
            "8. 描述：风格行和所有方括号段落标题一律使用英文。",
        ],

        rap_guidelines_title: "**说唱写作指南:**",
        rap_guidelines_content: "使用密集的内韵和多音节押韵链。段落之间变换 flow，咬住节拍，把金句放在小节末尾。主歌可以比普通歌曲更长。",
        regional_guidelines_title: "**泰国乡村音乐 (Luk Thung / Mor Lam) 指南:**",
        regional_guidelines_content: "采用泰国乡村音乐的叙事传统：乡野画面、日常的艰辛与深情、朴实真挚的措辞，以及适合长拖腔的韵尾。",

        auto_rules_title: "**Suno 参数规则:**",
        auto_rules_content: "请自行为 Weirdness 和 Style Influence 选择 0 到 100 之间最贴合所需风格的整数，该行只写数字。",
        auto_weirdness_placeholder: "[选择一个适合歌曲的 0-100 数值]",
        auto_style_influence_placeholder: "[选择一个适合歌曲的 0-100 数值]",

        instrument_focus_title: "**乐器重点:**",
        instrument_focus_content: "编曲围绕以下乐器展开：{instrument_list}。请在风格行中写出这些乐器，并让器乐段落突出它们。",
        instrument_lyric_constraint: "9. 演唱的歌词中不要出现乐器名称（{instrument_list}）。",

        duet_instructions_title: "**对唱说明:**",
        duet_instructions_content: "这是一首对唱歌曲。男歌手扮演「{male_role}」，女歌手扮演「{female_role}」。每一行歌词前加上 (Male):、(Female): 或 (Duet): 标明演唱者，并让两个声音相互呼应。",
        duet_default_male: "男方",
        duet_default_female: "女方",

        inspiration_guidelines_title: "**灵感来源:**",
        inspiration_song: "- 捕捉歌曲「{song}」的感觉和结构，但不要抄袭任何歌词。",
        inspiration_artist: "- 以 {artist} 的风格和口吻创作，但不要抄袭现有歌词。",

        structure_rule_title: "**结构规则:**",
        structure_rule_content: "严格按照以下段落顺序并使用这些段落标题：{structure}。",

        placeholder_intro: "(器乐前奏)",
        placeholder_solo: "(器乐独奏)",
        placeholder_outro: "(器乐尾奏)",
        placeholder_instrumental: "(器乐)",
        placeholder_lyrics: "[本段歌词]",
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

[Bridge]
{placeholder_lyrics}

[Chorus]
{placeholder_lyrics}

[Outro]
{placeholder_outro}",

        analysis_guide_title: "**如何理解请求:**",
        analysis_guide_content: "先读核心想法，再读主题、故事、情感和意象。未填写的内容代表创作自由，而不是指令。",
        command_instruction: "现在开始写歌。只输出格式化后的歌曲，从歌名行开始。",
        user_request_header: "**用户请求:**",

        duet_marker_male: &["男", "男声"],
        duet_marker_female: &["女", "女声"],
        duet_marker_duet: &["合唱", "对唱"],
    },
    ui: UiStrings {
        error_api_key_invalid: "API 密钥无效或未设置，请检查后重试。",
        error_model_overloaded: "AI 模型当前负载过高，请稍后再试。",
        error_network: "发生网络错误，请检查网络连接后重试。",
        error_rate_limit_title: "已达到使用上限",
        error_rate_limit: "您已达到当前的请求上限，请稍等一段时间再生成。",
        error_billing: "生成图片需要开通结算的账户。请为您的 API 密钥开通结算后再生成专辑封面。",
        error_safety: "出于安全原因，响应已被拦截。这可能是因为提示中包含敏感话题，请调整后重试。",
        error_empty_response: "AI 模型返回了空响应，可能是暂时性问题，请重试。",
        error_unknown: "发生未知错误，请重试。",
        error_prompt_required: "请输入核心想法或至少填写一项叙事内容。",
        error_no_lyrics: "歌曲中没有可用于生成音频的歌词。",
        error_busy: "该操作正在进行中。",
    },
    options: OptionLists {
        vocals: ["男声", "女声", "对唱"],
        genres: &[
            "流行", "摇滚", "嘻哈", "说唱", "节奏布鲁斯", "爵士", "蓝调", "乡村", "民谣",
            "电子", "电子舞曲", "Lo-fi", "独立", "金属", "雷鬼", "中国风", "华语流行", "抒情",
        ],
        moods: &[
            "快乐", "悲伤", "浪漫", "激昂", "平静", "忧郁", "怀旧", "黑暗", "充满希望",
            "愤怒", "梦幻",
        ],
        tempos: &["慢速", "中速", "轻快", "快速"],
        instruments: &[
            "钢琴", "木吉他", "电吉他", "贝斯", "鼓", "弦乐", "合成器", "萨克斯", "小提琴",
            "笛子", "古筝", "二胡", "琵琶",
        ],
        structure_parts: &[
            "[Intro]", "[Verse]", "[Pre-Chorus]", "[Chorus]", "[Bridge]", "[Solo]",
            "[Interlude]", "[Hook]", "[Outro]",
        ],
        structure_templates: &[
            StructureTemplate {
                name: "标准流行",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Chorus]", "[Verse 2]", "[Chorus]", "[Bridge]",
                    "[Chorus]", "[Outro]",
                ],
            },
            StructureTemplate {
                name: "抒情",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Pre-Chorus]", "[Chorus]", "[Verse 2]",
                    "[Pre-Chorus]", "[Chorus]", "[Outro]",
                ],
            },
        ],
        instrumental_keywords: InstrumentalKeywords {
            intro: &["前奏"],
            solo: &["独奏", "间奏独奏"],
            outro: &["尾奏"],
            other: &["间奏", "器乐"],
        },
    },
};
