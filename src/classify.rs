//! Classification Module
//!
//! 単一セルのテキストに対する2つの純粋な判定関数を提供するモジュール。
//! `is_junk`はすべてのセルに適用する保守的なノイズフィルタ、
//! `is_food_item`は1列目専用で、管理用ラベルを除外しつつ未知の料理名は
//! 受け入れる。手書きのオフィス文書が入力であるため、厳密なスキーマ
//! 検証ではなくノイズ耐性を優先する。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::MealType;
use crate::vocab;

/// 整数または小数1つの純粋な数値（例: "5", "12.5"）
static PURE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

/// 時刻パターン（例: "12:30", "1:30 PM"）
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}\s*(?i:AM|PM)?$").unwrap());

/// 単語として現れるAM/PMトークン
static MERIDIEM_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(am|pm)\b").unwrap());

/// 数字の後に0〜2文字の英字が続くもの（例: "2", "100ml"）
static NUMERIC_WITH_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[A-Za-z]{0,2}$").unwrap());

/// "NOTE:" のような大文字2文字以上＋コロンのラベル
static CAPS_COLON_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2,}\s*:").unwrap());

/// 純粋な小数（例: "1.5"）
static PURE_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+$").unwrap());

/// コロンで終わる全大文字行（例: "MORNING SHIFT :"）
static ALL_CAPS_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]+\s*:$").unwrap());

/// 大文字と空白のみで構成された残余ラベル
static ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]+$").unwrap());

/// カテゴリーごとの食品語彙パターン（単語境界一致、大文字小文字を区別しない）
static FOOD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vocab::FOOD_WORD_GROUPS
        .iter()
        .map(|group| {
            let alternation = group.join("|");
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
        })
        .collect()
});

/// セル値がノイズかどうかを判定する
///
/// すべての曜日セルに適用されるノイズフィルタ。以下のいずれかに該当する
/// 場合にtrueを返す:
///
/// - トリム後に空
/// - ノイズキーワードを含む（部分一致、大文字小文字を区別しない）
/// - 純粋な数値
/// - 時刻パターン（"12:30"、"1:30 PM"など）
/// - AM/PMトークンと数字を同時に含む
/// - 時刻・スケジュール関連の語彙を含む
/// - トリム後の長さが2文字未満
/// - 数字＋0〜2文字の英字
pub(crate) fn is_junk(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }

    let lower = text.to_lowercase();
    if vocab::JUNK_WORDS.iter().any(|word| lower.contains(word)) {
        return true;
    }

    if PURE_NUMBER.is_match(text) {
        return true;
    }

    if CLOCK_TIME.is_match(text) {
        return true;
    }

    if MERIDIEM_WORD.is_match(text) && text.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }

    if vocab::TIME_WORDS.iter().any(|word| lower.contains(word)) {
        return true;
    }

    if text.chars().count() < 2 {
        return true;
    }

    NUMERIC_WITH_SUFFIX.is_match(text)
}

/// 1列目のセル値が全曜日共通の品目かどうかを判定する
///
/// ノイズ、食事区分マーカー、管理用ラベル（"NOTE:"、"TOTAL"など）を
/// 除外したうえで、食品語彙に一致すれば確実に品目として受け入れる。
/// 語彙に一致しない場合も既定では品目として受け入れるが、大文字と空白
/// のみで構成されたテキストは残余ラベルとして拒否する。
pub(crate) fn is_food_item(text: &str) -> bool {
    if is_junk(text) {
        return false;
    }

    let text = text.trim();

    if MealType::from_label(text).is_some() {
        return false;
    }

    if CAPS_COLON_LABEL.is_match(text)
        || PURE_DECIMAL.is_match(text)
        || ALL_CAPS_COLON.is_match(text)
        || has_admin_prefix(text)
    {
        return false;
    }

    if text.chars().count() < 3 {
        return false;
    }

    if FOOD_PATTERNS.iter().any(|pattern| pattern.is_match(text)) {
        return true;
    }

    !ALL_CAPS.is_match(text)
}

fn has_admin_prefix(text: &str) -> bool {
    let upper = text.to_uppercase();
    vocab::ADMIN_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}
