use super::{
    Catalog, InstrumentalKeywords, Language, OptionLists, PromptStrings, StructureTemplate,
    UiStrings,
};

pub static CATALOG: Catalog = Catalog {
    language: Language::Ja,
    language_name: "日本語",
    prompts: PromptStrings {
        label_song_title: "曲名:",
        label_style: "スタイル:",
        label_vocal_gender: "ボーカル性別:",
        label_weirdness: "奇抜さ:",
        label_style_influence: "スタイルの影響度:",
        label_lyrics: "歌詞:",
        label_chord_progression: "コード進行:",

        placeholder_song_title: "[曲の核心を表す、短く覚えやすいタイトル]",
        final_goal: "あなたは世界トップクラスの作詞作曲家です。Suno AI にそのまま貼り付けられる、完成したオリジナル曲を日本語で一曲書いてください。以下の出力形式に厳密に従い、それ以外は出力しないでください。",
        golden_rules_title: "**作詞のゴールデンルール:**",
        golden_rules: &[
            "1. 感情の核: すべての行が一つの明確で誠実な感情に仕えること。",
            "2. 物語の流れ: Aメロは物語を進め、サビはその意味を伝える。",
            "3. 作詞の技巧: 決まり文句より具体的な情景と新鮮な比喩を使う。",
            "4. 本物の声: 物語の中の実在の人物が話すように書く。",
            "5. 言語: 歌詞は日本語で書く。",
            "6. リズム: 歌いやすい音数にし、対応するセクション同士で揃える。",
            "7. 反復: サビのフックは繰り返してよいが、Aメロを一字一句繰り返さない。",
            "8. 記述: スタイル行と角括弧のセクション見出しは必ず英語で書く。",
        ],

        rap_guidelines_title: "**ラップ作詞ガイドライン:**",
        rap_guidelines_content: "内部韻と多音節の韻を密に使う。バースごとにフローを変え、ビートにしっかり乗り、パンチラインは小節の終わりに置く。バースは通常の歌より長くてよい。",
        regional_guidelines_title: "**ルークトゥン / モーラム ガイドライン:**",
        regional_guidelines_content: "タイの田舎の歌の語りの伝統で書く。農村の情景、日々の苦労と献身、飾らない真心のこもった言葉、長いこぶしに合う母音の語尾を使う。",

        auto_rules_title: "**Suno パラメータのルール:**",
        auto_rules_content: "Weirdness と Style Influence は、求められたスタイルに最も合う 0 から 100 の整数を自分で選び、その行には数字だけを書くこと。",
        auto_weirdness_placeholder: "[曲に合う 0-100 の値を選ぶ]",
        auto_style_influence_placeholder: "[曲に合う 0-100 の値を選ぶ]",

        instrument_focus_title: "**楽器の重点:**",
        instrument_focus_content: "アレンジの中心となる楽器: {instrument_list}。スタイル行にこれらの楽器を書き、インストのセクションで際立たせること。",
        instrument_lyric_constraint: "9. 歌詞の中で楽器名（{instrument_list}）を歌わないこと。",

        duet_instructions_title: "**デュエットの指示:**",
        duet_instructions_content: "この曲はデュエットです。男性歌手は「{male_role}」、女性歌手は「{female_role}」を演じます。歌詞の各行の先頭に (Male):、(Female):、(Duet): を付けて誰が歌うかを示し、二人の声が呼応するようにしてください。",
        duet_default_male: "彼",
        duet_default_female: "彼女",

        inspiration_guidelines_title: "**インスピレーション:**",
        inspiration_song: "- 曲「{song}」の雰囲気と構成を取り入れ、歌詞は一切コピーしないこと。",
        inspiration_artist: "- {artist} のスタイルと語り口で書き、既存の歌詞はコピーしないこと。",

        structure_rule_title: "**構成のルール:**",
        structure_rule_content: "次のセクション順と見出しを正確に使うこと: {structure}。",

        placeholder_intro: "(インストのイントロ)",
        placeholder_solo: "(インストのソロ)",
        placeholder_outro: "(インストのアウトロ)",
        placeholder_instrumental: "(インスト)",
        placeholder_lyrics: "[このセクションの歌詞]",
        default_structure: "[Intro]
{placeholder_intro}

[Verse 1]
{placeholder_lyrics}

[Pre-Chorus]
{placeholder_lyrics}

[Chorus]
{placeholder_lyrics}

[Verse 2]
{placeholder_lyrics}

[Chorus]
{placeholder_lyrics}

[Solo]
{placeholder_solo}

[Chorus]
{placeholder_lyrics}

[Outro]
{placeholder_outro}",

        analysis_guide_title: "**リクエストの読み方:**",
        analysis_guide_content: "まずメインアイデアを読み、次にテーマ、ストーリー、感情、イメージを読む。未記入の項目は指示ではなく創作の自由と考えること。",
        command_instruction: "では曲を書いてください。曲名の行から始め、整形された曲だけを出力してください。",
        user_request_header: "**ユーザーのリクエスト:**",

        duet_marker_male: &["男性", "男"],
        duet_marker_female: &["女性", "女"],
        duet_marker_duet: &["デュエット", "二人"],
    },
    ui: UiStrings {
        error_api_key_invalid: "API キーが無効か設定されていません。キーを確認してもう一度お試しください。",
        error_model_overloaded: "AI モデルが混み合っています。しばらくしてからもう一度お試しください。",
        error_network: "ネットワークエラーが発生しました。接続を確認してもう一度お試しください。",
        error_rate_limit_title: "利用上限に達しました",
        error_rate_limit: "現在のリクエスト上限に達しました。しばらく待ってから再度生成してください。",
        error_billing: "画像生成には課金が有効なアカウントが必要です。アルバムアートを作成するには API キーの課金を有効にしてください。",
        error_safety: "安全上の理由で応答がブロックされました。プロンプトにセンシティブな話題が含まれている可能性があります。内容を調整してもう一度お試しください。",
        error_empty_response: "AI モデルから空の応答が返されました。一時的な問題の可能性があります。もう一度お試しください。",
        error_unknown: "不明なエラーが発生しました。もう一度お試しください。",
        error_prompt_required: "メインアイデアか、物語の項目を少なくとも一つ入力してください。",
        error_no_lyrics: "音声を生成するための歌詞が見つかりません。",
        error_busy: "この操作は実行中です。",
    },
    options: OptionLists {
        vocals: ["男性", "女性", "デュエット"],
        genres: &[
            "ポップ", "ロック", "ヒップホップ", "ラップ", "R&B", "ジャズ", "ブルース",
            "カントリー", "フォーク", "エレクトロニック", "EDM", "ローファイ", "インディー",
            "メタル", "レゲエ", "シティポップ", "J-POP", "アニソン", "演歌", "バラード",
        ],
        moods: &[
            "ハッピー", "悲しい", "ロマンチック", "エネルギッシュ", "穏やか", "切ない",
            "ノスタルジック", "ダーク", "希望に満ちた", "怒り", "夢見心地",
        ],
        tempos: &["スロー", "ミディアム", "アップテンポ", "速い"],
        instruments: &[
            "ピアノ", "アコースティックギター", "エレキギター", "ベース", "ドラム",
            "ストリングス", "シンセサイザー", "サックス", "バイオリン", "フルート", "三味線",
            "琴", "尺八",
        ],
        structure_parts: &[
            "[Intro]", "[Verse]", "[Pre-Chorus]", "[Chorus]", "[Bridge]", "[Solo]",
            "[Interlude]", "[Hook]", "[Outro]",
        ],
        structure_templates: &[
            StructureTemplate {
                name: "J-POP 標準",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Pre-Chorus]", "[Chorus]", "[Verse 2]",
                    "[Pre-Chorus]", "[Chorus]", "[Bridge]", "[Chorus]", "[Outro]",
                ],
            },
            StructureTemplate {
                name: "バラード",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Chorus]", "[Verse 2]", "[Chorus]", "[Solo]",
                    "[Chorus]", "[Outro]",
                ],
            },
        ],
        instrumental_keywords: InstrumentalKeywords {
            intro: &["イントロ"],
            solo: &["ソロ"],
            outro: &["アウトロ"],
            other: &["間奏", "インスト"],
        },
    },
};
