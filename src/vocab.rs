//! Vocabulary Module
//!
//! 抽出ヒューリスティックを構成する不変の語彙テーブルを定義するモジュール。
//! これらのテーブルは実行時設定ではなくヒューリスティックそのものであり、
//! 変更はテーブルバージョンの更新を伴う。

/// 語彙テーブルのバージョン
///
/// テーブルの内容を変更した場合はインクリメントする。
#[allow(dead_code)]
pub(crate) const VOCAB_VERSION: u32 = 1;

/// ノイズキーワード
///
/// セル値がこれらの語を含む場合（大文字小文字を区別しない部分一致）、
/// 品目として扱わない。フィードバック・連絡先の定型文、出典マーカー、
/// および"sunday"を含む。"sunday"はヘッダーでは有効な曜日名であり、
/// セル値では常にノイズとして扱われる（既知の衝突、意図的に保持）。
pub(crate) const JUNK_WORDS: &[&str] = &[
    "suggestion",
    "feedback",
    "contact",
    "bchfood",
    "hi-tea",
    "timing",
    "sunday",
];

/// 時刻・スケジュール関連の語彙
pub(crate) const TIME_WORDS: &[&str] =
    &["timing", "time", "schedule", "duration", "minutes", "hours"];

/// 食品語彙（カテゴリー別、単語境界一致で使用する）
///
/// 1列目のセルがいずれかの語に一致すれば確実に品目として扱う。
/// カテゴリー: 主食・カレー類 / 南インドの朝食 / 野菜料理 / 飲料 / 菓子。
pub(crate) const FOOD_WORD_GROUPS: &[&[&str]] = &[
    &[
        "dal", "rice", "chapati", "roti", "sabji", "curry", "masala", "fry", "bhaji", "pakora",
        "chutney", "raita", "biryani", "pulao",
    ],
    &[
        "idli", "dosa", "sambhar", "vada", "upma", "poha", "paratha", "puri", "bhatura",
    ],
    &[
        "paneer", "aloo", "gobi", "palak", "matar", "baingan", "bhindi", "lauki", "karela",
    ],
    &["tea", "coffee", "juice", "water", "milk", "curd", "lassi"],
    &[
        "laddu", "halwa", "kheer", "gulab jamun", "rasgulla", "jalebi", "barfi",
    ],
];

/// 管理用ラベルの接頭辞（大文字小文字を区別しない前方一致）
pub(crate) const ADMIN_PREFIXES: &[&str] = &["TOTAL", "SUBTOTAL", "REMARKS", "NOTES"];
