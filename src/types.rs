//! Types Module
//!
//! 抽出結果を構成する共通データ型を定義するモジュール。
//! `WeeklyMenu`は一度構築された後は変更されない読み取り専用の値です。

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::MenuExtractError;

/// 曜日ラベル
///
/// ヘッダー行の英語曜日名（大文字小文字を区別しない完全一致）から
/// 検出され、出力のキーとして使用されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// 全曜日（月曜始まり）
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// ヘッダーセルのテキストから曜日を判定
    ///
    /// トリム・大文字化した結果が英語曜日名と完全一致する場合のみ
    /// `Some`を返します。部分一致は受け付けません。
    pub fn from_header_cell(text: &str) -> Option<Weekday> {
        let upper = text.trim().to_uppercase();
        Weekday::ALL
            .iter()
            .copied()
            .find(|day| day.as_upper() == upper)
    }

    /// 出力キーとして使用する大文字の曜日名
    pub fn as_upper(&self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        }
    }
}

/// 食事区分
///
/// 1日のうち追跡する4つの食事カテゴリー。シート上では1列目の
/// セクションマーカー行として現れます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealType {
    /// 全食事区分（シート上の典型的な出現順）
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Snacks,
        MealType::Dinner,
    ];

    /// 1列目のラベルから食事区分を判定
    ///
    /// トリム・大文字化した結果が食事区分名と完全一致する場合のみ
    /// `Some`を返します。
    pub fn from_label(text: &str) -> Option<MealType> {
        let upper = text.trim().to_uppercase();
        MealType::ALL
            .iter()
            .copied()
            .find(|meal| meal.as_marker() == upper)
    }

    /// セクションマーカーとして一致させる大文字名
    pub fn as_marker(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Snacks => "SNACKS",
            MealType::Dinner => "DINNER",
        }
    }

    /// 出力キーとして使用する小文字名
    pub fn as_key(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Snacks => "snacks",
            MealType::Dinner => "dinner",
        }
    }
}

/// 1日分の食事リスト
///
/// 各食事区分ごとに、挿入順を保持した重複なしの品目リストを保持します。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayMenu {
    breakfast: Vec<String>,
    lunch: Vec<String>,
    snacks: Vec<String>,
    dinner: Vec<String>,
}

impl DayMenu {
    /// 指定した食事区分の品目リスト
    pub fn items(&self, meal: MealType) -> &[String] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Snacks => &self.snacks,
            MealType::Dinner => &self.dinner,
        }
    }

    /// すべての食事リストが空かどうか
    pub fn is_empty(&self) -> bool {
        MealType::ALL.iter().all(|meal| self.items(*meal).is_empty())
    }

    /// 品目を追加する（セット追加）
    ///
    /// 空白のみの品目は無視し、既に存在する品目は追加しない。
    /// 追加した場合にtrueを返す。
    pub(crate) fn add(&mut self, meal: MealType, item: &str) -> bool {
        let item = item.trim();
        if item.is_empty() {
            return false;
        }
        let list = match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Snacks => &mut self.snacks,
            MealType::Dinner => &mut self.dinner,
        };
        if list.iter().any(|existing| existing == item) {
            return false;
        }
        list.push(item.to_string());
        true
    }
}

/// 週間メニュー
///
/// ヘッダー行で検出された曜日から、食事区分ごとの品目リストへの
/// マッピングです。曜日の並びはヘッダー行の出現順を保持します。
/// 構築後は読み取り専用で、アクセサ経由でのみ参照できます。
///
/// # シリアライズ形式
///
/// `serde::Serialize`の実装は、大文字の曜日名をキーとする
/// JSONオブジェクトを生成します:
///
/// ```json
/// {
///   "MONDAY": {
///     "breakfast": ["Idli", "Sambhar"],
///     "lunch": [],
///     "snacks": [],
///     "dinner": ["Dal Fry"]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyMenu {
    days: Vec<(Weekday, DayMenu)>,
}

impl WeeklyMenu {
    pub(crate) fn from_parts(days: Vec<(Weekday, DayMenu)>) -> Self {
        Self { days }
    }

    /// 指定した曜日のメニュー
    ///
    /// ヘッダー行で検出されなかった曜日に対しては`None`を返します。
    pub fn day(&self, day: Weekday) -> Option<&DayMenu> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, menu)| menu)
    }

    /// 曜日とメニューのペアをヘッダー行の出現順に走査
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayMenu)> {
        self.days.iter().map(|(day, menu)| (*day, menu))
    }

    /// 検出された曜日の数
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// 曜日が1つも検出されなかったかどうか
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// `serde_json::Value`としての表現
    pub fn to_json_value(&self) -> Result<serde_json::Value, MenuExtractError> {
        Ok(serde_json::to_value(self)?)
    }

    /// 整形済みJSON文字列としての表現
    pub fn to_json_string(&self) -> Result<String, MenuExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for WeeklyMenu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, menu) in &self.days {
            map.serialize_entry(day.as_upper(), menu)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_from_header_cell() {
        assert_eq!(Weekday::from_header_cell("MONDAY"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_header_cell("monday"), Some(Weekday::Monday));
        assert_eq!(
            Weekday::from_header_cell("  Wednesday  "),
            Some(Weekday::Wednesday)
        );
        assert_eq!(Weekday::from_header_cell("SUNDAY"), Some(Weekday::Sunday));
    }

    #[test]
    fn test_weekday_from_header_cell_rejects_partial() {
        assert_eq!(Weekday::from_header_cell("MON"), None);
        assert_eq!(Weekday::from_header_cell("MONDAY MENU"), None);
        assert_eq!(Weekday::from_header_cell(""), None);
        assert_eq!(Weekday::from_header_cell("Funday"), None);
    }

    #[test]
    fn test_meal_type_from_label() {
        assert_eq!(MealType::from_label("BREAKFAST"), Some(MealType::Breakfast));
        assert_eq!(MealType::from_label("lunch"), Some(MealType::Lunch));
        assert_eq!(MealType::from_label(" Snacks "), Some(MealType::Snacks));
        assert_eq!(MealType::from_label("DINNER"), Some(MealType::Dinner));
        assert_eq!(MealType::from_label("HI-TEA"), None);
        assert_eq!(MealType::from_label(""), None);
    }

    #[test]
    fn test_meal_type_keys() {
        assert_eq!(MealType::Breakfast.as_key(), "breakfast");
        assert_eq!(MealType::Dinner.as_marker(), "DINNER");
    }

    #[test]
    fn test_day_menu_add_deduplicates() {
        let mut menu = DayMenu::default();
        assert!(menu.add(MealType::Breakfast, "Idli"));
        assert!(!menu.add(MealType::Breakfast, "Idli"));
        assert!(menu.add(MealType::Breakfast, "Dosa"));

        assert_eq!(menu.items(MealType::Breakfast), ["Idli", "Dosa"]);
    }

    #[test]
    fn test_day_menu_add_rejects_blank() {
        let mut menu = DayMenu::default();
        assert!(!menu.add(MealType::Lunch, ""));
        assert!(!menu.add(MealType::Lunch, "   "));
        assert!(menu.items(MealType::Lunch).is_empty());
        assert!(menu.is_empty());
    }

    #[test]
    fn test_day_menu_add_trims() {
        let mut menu = DayMenu::default();
        assert!(menu.add(MealType::Dinner, "  Dal Fry  "));
        assert!(!menu.add(MealType::Dinner, "Dal Fry"));
        assert_eq!(menu.items(MealType::Dinner), ["Dal Fry"]);
    }

    #[test]
    fn test_weekly_menu_day_lookup() {
        let mut monday = DayMenu::default();
        monday.add(MealType::Breakfast, "Poha");
        let menu = WeeklyMenu::from_parts(vec![
            (Weekday::Monday, monday),
            (Weekday::Tuesday, DayMenu::default()),
        ]);

        assert_eq!(menu.len(), 2);
        assert_eq!(
            menu.day(Weekday::Monday).unwrap().items(MealType::Breakfast),
            ["Poha"]
        );
        assert!(menu.day(Weekday::Tuesday).unwrap().is_empty());
        assert!(menu.day(Weekday::Friday).is_none());
    }

    #[test]
    fn test_weekly_menu_serialization_shape() {
        let mut monday = DayMenu::default();
        monday.add(MealType::Breakfast, "Idli");
        monday.add(MealType::Dinner, "Dal Fry");
        let menu = WeeklyMenu::from_parts(vec![
            (Weekday::Monday, monday),
            (Weekday::Tuesday, DayMenu::default()),
        ]);

        let value = menu.to_json_value().unwrap();
        assert_eq!(value["MONDAY"]["breakfast"][0], "Idli");
        assert_eq!(value["MONDAY"]["dinner"][0], "Dal Fry");
        assert_eq!(value["MONDAY"]["lunch"], serde_json::json!([]));
        assert_eq!(value["TUESDAY"]["breakfast"], serde_json::json!([]));
    }

    #[test]
    fn test_weekly_menu_serialization_preserves_day_order() {
        // ヘッダーの出現順がそのままキー順になる
        let menu = WeeklyMenu::from_parts(vec![
            (Weekday::Wednesday, DayMenu::default()),
            (Weekday::Monday, DayMenu::default()),
        ]);

        let json = serde_json::to_string(&menu).unwrap();
        let wed = json.find("WEDNESDAY").unwrap();
        let mon = json.find("MONDAY").unwrap();
        assert!(wed < mon);
    }
}
