use super::{
    Catalog, InstrumentalKeywords, Language, OptionLists, PromptStrings, StructureTemplate,
    UiStrings,
};

pub static CATALOG: Catalog = Catalog {
    language: Language::Th,
    language_name: "ไทย",
    prompts: PromptStrings {
        label_song_title: "ชื่อเพลง:",
        label_style: "สไตล์:",
        label_vocal_gender: "เพศนักร้อง:",
        label_weirdness: "ความแปลก:",
        label_style_influence: "อิทธิพลของสไตล์:",
        label_lyrics: "เนื้อเพลง:",
        label_chord_progression: "คอร์ดโปรเกรสชั่น:",

        placeholder_song_title: "[ชื่อเพลงสั้นๆ ที่จดจำง่ายและสื่อถึงหัวใจของเพลง]",
        final_goal: "คุณคือนักแต่งเพลงและนักเขียนเนื้อเพลงระดับโลก จงแต่งเพลงต้นฉบับที่สมบูรณ์หนึ่งเพลงเป็นภาษาไทย พร้อมนำไปวางใน Suno AI ได้ทันที โดยใช้รูปแบบผลลัพธ์ด้านล่างนี้เท่านั้น",
        golden_rules_title: "**กฎทองของการแต่งเพลง:**",
        golden_rules: &[
            "1. แก่นอารมณ์: ทุกบรรทัดต้องรับใช้อารมณ์ที่ชัดเจนและจริงใจเพียงหนึ่งเดียว",
            "2. การเล่าเรื่อง: ท่อนเวิร์สพาเรื่องไปข้างหน้า ท่อนฮุกบอกความหมายของเรื่อง",
            "3. ฝีมือการเขียน: ใช้ภาพที่จับต้องได้และอุปมาที่สดใหม่แทนคำซ้ำซาก",
            "4. น้ำเสียงที่จริงแท้: เขียนเหมือนคนจริงในเรื่องนี้กำลังพูด",
            "5. ภาษา: เขียนเนื้อเพลงเป็นภาษาไทย",
            "6. จังหวะ: จำนวนพยางค์ต้องร้องได้และสม่ำเสมอในท่อนที่คู่กัน",
            "7. การซ้ำ: ฮุกของท่อนคอรัสซ้ำได้ แต่ท่อนเวิร์สห้ามซ้ำคำต่อคำ",
            "8. คำอธิบาย: บรรทัดสไตล์และหัวข้อท่อนในวงเล็บเหลี่ยมต้องเป็นภาษาอังกฤษเสมอ",
        ],

        rap_guidelines_title: "**แนวทางการเขียนแร็พ:**",
        rap_guidelines_content: "ใช้สัมผัสในและสัมผัสหลายพยางค์อย่างหนาแน่น เปลี่ยนโฟลว์ระหว่างท่อน เกาะจังหวะให้ชัด และเก็บพันช์ไลน์ไว้ท้ายบาร์ ท่อนเวิร์สยาวกว่าเพลงร้องทั่วไปได้",
        regional_guidelines_title: "**แนวทางเพลงลูกทุ่ง / หมอลำ:**",
        regional_guidelines_content: "เขียนแบบเล่าเรื่องตามขนบเพลงลูกทุ่งไทย ใช้ภาพชนบท ความลำบากและความรักในชีวิตประจำวัน ภาษาเรียบง่ายจากใจ และคำลงท้ายที่เอื้อต่อการเอื้อนเสียงยาว",

        auto_rules_title: "**กฎพารามิเตอร์ของ Suno:**",
        auto_rules_content: "เลือกค่า Weirdness และ Style Influence เองเป็นจำนวนเต็มตั้งแต่ 0 ถึง 100 ให้เหมาะกับสไตล์ที่ขอ และเขียนเฉพาะตัวเลขในบรรทัดนั้น",
        auto_weirdness_placeholder: "[เลือกค่า 0-100 ที่เหมาะกับเพลง]",
        auto_style_influence_placeholder: "[เลือกค่า 0-100 ที่เหมาะกับเพลง]",

        instrument_focus_title: "**เครื่องดนตรีหลัก:**",
        instrument_focus_content: "การเรียบเรียงสร้างขึ้นรอบ: {instrument_list} ให้ระบุเครื่องดนตรีเหล่านี้ในบรรทัดสไตล์ และให้ท่อนดนตรีโชว์เครื่องดนตรีเหล่านี้",
        instrument_lyric_constraint: "9. ห้ามเอ่ยชื่อเครื่องดนตรี ({instrument_list}) ในเนื้อร้อง",

        duet_instructions_title: "**คำแนะนำสำหรับเพลงคู่:**",
        duet_instructions_content: "เพลงนี้เป็นเพลงคู่ นักร้องชายรับบท \"{male_role}\" และนักร้องหญิงรับบท \"{female_role}\" ให้ขึ้นต้นทุกบรรทัดเนื้อร้องด้วย (Male):, (Female): หรือ (Duet): เพื่อบอกว่าใครร้อง และให้สองเสียงโต้ตอบกัน",
        duet_default_male: "ฝ่ายชาย",
        duet_default_female: "ฝ่ายหญิง",

        inspiration_guidelines_title: "**แรงบันดาลใจ:**",
        inspiration_song: "- ถ่ายทอดความรู้สึกและโครงสร้างของเพลง \"{song}\" โดยไม่คัดลอกเนื้อเพลงใดๆ",
        inspiration_artist: "- เขียนในสไตล์และน้ำเสียงของ {artist} โดยไม่คัดลอกเนื้อเพลงที่มีอยู่",

        structure_rule_title: "**กฎโครงสร้างเพลง:**",
        structure_rule_content: "ให้ใช้ลำดับท่อนและหัวข้อท่อนตามนี้ทุกประการ: {structure}",

        placeholder_intro: "(ดนตรีอินโทร)",
        placeholder_solo: "(โซโล่ดนตรี)",
        placeholder_outro: "(ดนตรีเอาท์โทร)",
        placeholder_instrumental: "(ดนตรีบรรเลง)",
        placeholder_lyrics: "[เนื้อร้องของท่อนนี้]",
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

[Chorus]
{placeholder_lyrics}

[Outro]
{placeholder_outro}",

        analysis_guide_title: "**วิธีอ่านคำขอ:**",
        analysis_guide_content: "อ่านไอเดียหลักก่อน แล้วจึงอ่านแก่นเรื่อง เรื่องราว อารมณ์ และภาพ ช่องที่ไม่ได้กรอกคืออิสระในการสร้างสรรค์ ไม่ใช่คำสั่ง",
        command_instruction: "แต่งเพลงได้เลย ตอบเฉพาะเพลงตามรูปแบบ โดยเริ่มจากบรรทัดชื่อเพลง",
        user_request_header: "**คำขอของผู้ใช้:**",

        duet_marker_male: &["ชาย"],
        duet_marker_female: &["หญิง"],
        duet_marker_duet: &["คู่"],
    },
    ui: UiStrings {
        error_api_key_invalid: "API key ไม่ถูกต้องหรือไม่ได้ตั้งค่า กรุณาตรวจสอบแล้วลองอีกครั้ง",
        error_model_overloaded: "โมเดล AI มีผู้ใช้งานมากเกินไปในขณะนี้ กรุณาลองใหม่อีกครั้งในอีกสักครู่",
        error_network: "เกิดข้อผิดพลาดของเครือข่าย กรุณาตรวจสอบการเชื่อมต่อแล้วลองอีกครั้ง",
        error_rate_limit_title: "ใช้งานครบโควต้าแล้ว",
        error_rate_limit: "คุณส่งคำขอครบจำนวนที่กำหนดแล้ว กรุณารอสักพักก่อนสร้างใหม่",
        error_billing: "การสร้างภาพต้องใช้บัญชีที่เปิดการเรียกเก็บเงิน กรุณาเปิดการเรียกเก็บเงินสำหรับ API key เพื่อสร้างปกอัลบั้ม",
        error_safety: "คำตอบถูกบล็อกด้วยเหตุผลด้านความปลอดภัย อาจเป็นเพราะคำขอมีหัวข้อที่ละเอียดอ่อน กรุณาปรับคำขอแล้วลองอีกครั้ง",
        error_empty_response: "โมเดล AI ส่งคำตอบว่างเปล่ากลับมา อาจเป็นปัญหาชั่วคราว กรุณาลองอีกครั้ง",
        error_unknown: "เกิดข้อผิดพลาดที่ไม่ทราบสาเหตุ กรุณาลองอีกครั้ง",
        error_prompt_required: "กรุณากรอกไอเดียหลักหรือช่องเรื่องราวอย่างน้อยหนึ่งช่อง",
        error_no_lyrics: "ไม่พบเนื้อเพลงสำหรับสร้างเสียง",
        error_busy: "กำลังดำเนินการนี้อยู่",
    },
    options: OptionLists {
        vocals: ["ชาย", "หญิง", "คู่"],
        genres: &[
            "ป๊อป", "ร็อก", "ฮิปฮอป", "แร็พ", "อาร์แอนด์บี", "แจ๊ส", "บลูส์", "คันทรี",
            "โฟล์ค", "อิเล็กทรอนิกส์", "อีดีเอ็ม", "โลไฟ", "อินดี้", "เมทัล", "เร็กเก้",
            "ลูกทุ่ง", "หมอลำ", "เพื่อชีวิต", "ทีป๊อป", "บัลลาด",
        ],
        moods: &[
            "สนุกสนาน", "เศร้า", "โรแมนติก", "มีพลัง", "สงบ", "เหงา", "คิดถึง",
            "มืดหม่น", "มีความหวัง", "โกรธ", "เพ้อฝัน",
        ],
        tempos: &["ช้า", "ปานกลาง", "สนุก", "เร็ว"],
        instruments: &[
            "เปียโน", "กีตาร์โปร่ง", "กีตาร์ไฟฟ้า", "เบส", "กลอง", "เครื่องสาย",
            "ซินธิไซเซอร์", "แซกโซโฟน", "ไวโอลิน", "ขลุ่ย", "แคน", "พิณ", "ระนาด",
        ],
        structure_parts: &[
            "[Intro]", "[Verse]", "[Pre-Chorus]", "[Chorus]", "[Bridge]", "[Solo]",
            "[Interlude]", "[Hook]", "[Outro]",
        ],
        structure_templates: &[
            StructureTemplate {
                name: "ป๊อปมาตรฐาน",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Chorus]", "[Verse 2]", "[Chorus]", "[Bridge]",
                    "[Chorus]", "[Outro]",
                ],
            },
            StructureTemplate {
                name: "ลูกทุ่ง",
                parts: &[
                    "[Intro]", "[Verse 1]", "[Verse 2]", "[Chorus]", "[Solo]", "[Verse 3]",
                    "[Chorus]", "[Outro]",
                ],
            },
        ],
        instrumental_keywords: InstrumentalKeywords {
            intro: &["อินโทร"],
            solo: &["โซโล่", "โซโล"],
            outro: &["เอาท์โทร", "เอ้าท์โทร"],
            other: &["ดนตรี", "บรรเลง"],
        },
    },
};
