use super::{
    Catalog, InstrumentalKeywords, Language, OptionLists, PromptStrings, StructureTemplate,
    UiStrings,
};

pub static CATALOG: Catalog = Catalog {
    language: Language::Ko,
    language_name: "한국어",
    prompts: PromptStrings {
        label_song_title: "노래 제목:",
        label_style: "스타일:",
        label_vocal_gender: "보컬 성별:",
        label_weirdness: "독특함:",
        label_style_influence: "스타일 영향력:",
        label_lyrics: "가사:",
        label_chord_progression: "코드 진행:",

        placeholder_song_title: "[노래의 핵심을 담은 짧고 기억하기 쉬운 제목]",
        final_goal: "당신은 세계 최고 수준의 작사가이자 작곡가입니다. Suno AI에 바로 붙여 넣을 수 있는 완성된 오리지널 곡 한 곡을 한국어로 작성하세요. 아래 출력 형식을 정확히 따르고 그 외에는 아무것도 출력하지 마세요.",
        golden_rules_title: "**작사의 황금 규칙:**",
        golden_rules: &[
            "1. 감정의 핵심: 모든 줄은 하나의 분명하고 진솔한 감정을 위해 존재해야 합니다.",
            "2. 서사의 흐름: 벌스는 이야기를 이끌고, 코러스는 그 의미를 말합니다.",
            "3. 작사 기술: 상투적인 표현 대신 구체적인 이미지와 신선한 비유를 사용합니다.",
            "4. 진짜 목소리: 이야기 속 실제 인물이 말하듯 씁니다.",
            "5. 언어: 가사는 한국어로 씁니다.",
            "6. 리듬: 부르기 쉬운 음절 수를 지키고 대응하는 섹션끼리 맞춥니다.",
            "7. 반복: 코러스 훅은 반복해도 되지만 벌스는 그대로 반복하지 않습니다.",
            "8. 표기: 스타일 줄과 대괄호 섹션 제목은 반드시 영어로 씁니다.",
        ],

        rap_guidelines_title: "**랩 작사 가이드라인:**",
        rap_guidelines_content: "내부 라임과 다음절 라임을 촘촘하게 사용하세요. 벌스마다 플로우를 바꾸고 비트에 확실히 올라타며 펀치라인은 마디 끝에 두세요. 벌스는 일반 노래보다 길어도 됩니다.",
        regional_guidelines_title: "**룩퉁 / 머람 가이드라인:**",
        regional_guidelines_content: "태국 시골 음악의 이야기 전통으로 쓰세요. 농촌 풍경, 일상의 고단함과 헌신, 꾸밈없는 진심의 말, 긴 꺾기에 어울리는 모음 끝맺음을 사용하세요.",

        auto_rules_title: "**Suno 파라미터 규칙:**",
        auto_rules_content: "Weirdness와 Style Influence는 요청된 스타일에 가장 잘 맞는 0에서 100 사이의 정수를 직접 고르고, 해당 줄에는 숫자만 쓰세요.",
        auto_weirdness_placeholder: "[곡에 맞는 0-100 값을 선택]",
        auto_style_influence_placeholder: "[곡에 맞는 0-100 값을 선택]",

        instrument_focus_title: "**악기 중심:**",
        instrument_focus_content: "편곡의 중심 악기: {instrument_list}. 스타일 줄에 이 악기들을 적고 연주 섹션에서 돋보이게 하세요.",
        instrument_lyric_constraint: "9. 부르는 가사 안에 악기 이름({instrument_list})을 넣지 마세요.",

        duet_instructions_title: "**듀엣 지침:**",
        duet_instructions_content: "이 곡은 듀엣입니다. 남성 가수는 \"{male_role}\", 여성 가수는 \"{female_role}\" 역할을 맡습니다. 가사의 모든 줄 앞에 (Male):, (Female): 또는 (Duet):를 붙여 누가 부르는지 표시하고 두 목소리가 서로 주고받게 하세요.",
        duet_default_male: "남자",
        duet_default_female: "여자",

        inspiration_guidelines_title: "**영감:**",
        inspiration_song: "- 노래 \"{song}\"의 느낌과 구성을 담되 가사는 절대 베끼지 마세요.",
        inspiration_artist: "- {artist}의 스타일과 말투로 쓰되 기존 가사는 베끼지 마세요.",

        structure_rule_title: "**구성 규칙:**",
        structure_rule_content: "다음 섹션 순서와 섹션 제목을 정확히 사용하세요: {structure}.",

        placeholder_intro: "(연주 인트로)",
        placeholder_solo: "(연주 솔로)",
        placeholder_outro: "(연주 아웃트로)",
        placeholder_instrumental: "(연주)",
        placeholder_lyrics: "[이 섹션의 가사]",
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

[Solo]
{placeholder_solo}

[Chorus]
{placeholder_lyrics}

[Outro]
{placeholder_outro}",

        analysis_guide_title: "**요청을 읽는 방법:**",
        analysis_guide_content: "먼저 메인 아이디어를 읽고, 그다음 주제, 이야기, 감정, 이미지를 읽으세요. 비어 있는 항목은 지시가 아니라 창작의 자유입니다.",
        command_instruction: "이제 노래를 쓰세요. 노래 제목 줄부터 시작해 형식에 맞춘 노래만 출력하세요.",
        user_request_header: "**사용자 요청:**",

        duet_marker_male: &["남성", "남자"],
        duet_marker_female: &["여성", "여자"],
        duet_marker_duet: &["듀엣", "함께"],
    },
    ui: UiStrings {
        error_api_key_invalid: "API 키가 유효하지 않거나 설정되지 않았습니다. 키를 확인하고 다시 시도하세요.",
        error_model_overloaded: "AI 모델이 현재 과부하 상태입니다. 잠시 후 다시 시도하세요.",
        error_network: "네트워크 오류가 발생했습니다. 연결을 확인하고 다시 시도하세요.",
        error_rate_limit_title: "사용 한도 도달",
        error_rate_limit: "현재 요청 한도에 도달했습니다. 잠시 기다린 후 다시 생성하세요.",
        error_billing: "이미지 생성에는 결제가 활성화된 계정이 필요합니다. 앨범 아트를 만들려면 API 키의 결제를 활성화하세요.",
        error_safety: "안전상의 이유로 응답이 차단되었습니다. 프롬프트에 민감한 주제가 포함되었을 수 있습니다. 내용을 조정한 후 다시 시도하세요.",
        error_empty_response: "AI 모델이 빈 응답을 반환했습니다. 일시적인 문제일 수 있으니 다시 시도하세요.",
        error_unknown: "알 수 없는 오류가 발생했습니다. 다시 시도하세요.",
        error_prompt_required: "메인 아이디어나 이야기 항목을 하나 이상 입력하세요.",
        error_no_lyrics: "오디오를 생성할 가사를 찾을 수 없습니다.",
        error_busy: "이 작업이 이미 진행 중입니다.",
    },
    options: OptionLists {
        vocals: ["남성", "여성", "듀엣"],
        genres: &[
            "팝", "록", "힙합", "랩", "R&B", "재즈", "블루스", "컨트리", "포크", "일렉트로닉",
            "EDM", "로파이", "인디", "메탈", "레게", "K-팝", "트로트", "발라드",
        ],
        moods: &[
            "행복한", "슬픈", "로맨틱한", "에너지 넘치는", "차분한", "우울한", "그리운",
            "어두운", "희망찬", "분노한", "몽환적인",
        ],
        tempos: &["느린", "미디엄", "경쾌한", "빠른"],
        instruments: &[
            "피아노", "어쿠스틱 기타", "일렉트릭 기타", "베이스", "드럼", "현악기", "신시사이저",
            "색소폰", "바이올린", "플루트", "가야금", "해금", "대금",
        ],
        structure_parts: &[
            "[Intro]", "[Verse]", "[Pre-Chorus]", "[Chorus]", "[Bridge]", "[Solo]",
            "[Interlude]", "[Hook]", "[Outro]",
        ],
        structure_templates: &[
            StructureTemplate {
                name: "K-팝 표준",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Pre-Chorus]", "[Chorus]", "[Verse 2]",
                    "[Pre-Chorus]", "[Chorus]", "[Bridge]", "[Chorus]", "[Outro]",
                ],
            },
            StructureTemplate {
                name: "발라드",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Chorus]", "[Verse 2]", "[Chorus]", "[Bridge]",
                    "[Chorus]", "[Outro]",
                ],
            },
        ],
        instrumental_keywords: InstrumentalKeywords {
            intro: &["인트로"],
            solo: &["솔로"],
            outro: &["아웃트로", "아웃로"],
            other: &["간주", "연주"],
        },
    },
};
