//! Extraction Module
//!
//! グリッドから週間メニューを組み立てる抽出エンジン本体。
//! 曜日ヘッダー行の特定と、その下の行を1回だけ左から右へ畳み込む
//! 食事セクションの状態機械を実装する。状態はすべて呼び出しローカルで、
//! 同時実行される抽出同士が共有するのは不変の語彙テーブルのみ。

use tracing::debug;

use crate::classify::{is_food_item, is_junk};
use crate::error::MenuExtractError;
use crate::grid::RawGrid;
use crate::types::{DayMenu, MealType, WeeklyMenu, Weekday};

/// 曜日ヘッダー行の位置と曜日列のマッピング
///
/// `day_columns`は1列目以降で曜日名に一致した列を左から右の順に保持する。
/// 同じ曜日が2列に現れた場合も両方の列を保持する（抽出時に同じ
/// バケットへ集約される）。
#[derive(Debug)]
pub(crate) struct MenuHeader {
    /// ヘッダー行のインデックス
    pub row: usize,
    /// (列インデックス, 曜日) のペア
    pub day_columns: Vec<(usize, Weekday)>,
}

/// 曜日ヘッダー行を特定する
///
/// トリム・大文字化後に"MONDAY"と一致するセルを含む最初の行を
/// ヘッダー行とする。見つからなければ`HeaderNotFound`。
pub(crate) fn locate_header(grid: &RawGrid) -> Result<MenuHeader, MenuExtractError> {
    let row = grid
        .rows()
        .iter()
        .position(|row| {
            row.iter()
                .any(|cell| cell.trim().to_uppercase() == Weekday::Monday.as_upper())
        })
        .ok_or(MenuExtractError::HeaderNotFound)?;

    // 1列目は食事マーカー・共通品目用に予約されているため除外する
    let day_columns: Vec<(usize, Weekday)> = grid.rows()[row]
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(col, cell)| Weekday::from_header_cell(cell).map(|day| (col, day)))
        .collect();

    debug!(
        "located day header at row {} with {} day columns",
        row,
        day_columns.len()
    );

    Ok(MenuHeader { row, day_columns })
}

/// ヘッダー行より下の行を走査して週間メニューを組み立てる
///
/// 各行について:
/// 1列目が食事区分名ならアクティブな食事を切り替える（蓄積済みの品目は
/// 維持したまま）。食事がアクティブでない行は読み飛ばす。アクティブなら
/// 1列目を共通品目として全曜日に、各曜日列のセルをその曜日の品目として
/// セット追加する。マーカー行の曜日列も新しい食事の下で評価される。
/// 行が曜日列より短い場合、その列には値がないものとして扱う。
pub(crate) fn extract_menu(grid: &RawGrid, header: &MenuHeader) -> WeeklyMenu {
    // ヘッダーで検出された曜日ごとにバケットを初期化する。
    // 重複した曜日列は最初の出現位置の単一バケットへ集約する。
    let mut days: Vec<(Weekday, DayMenu)> = Vec::new();
    for (_, day) in &header.day_columns {
        if !days.iter().any(|(existing, _)| existing == day) {
            days.push((*day, DayMenu::default()));
        }
    }

    let mut current_meal: Option<MealType> = None;

    for (row_idx, row) in grid.rows().iter().enumerate().skip(header.row + 1) {
        let first = row.first().map(String::as_str).unwrap_or("");

        if let Some(marker) = MealType::from_label(first) {
            current_meal = Some(marker);
        }

        let Some(meal) = current_meal else {
            continue;
        };

        // 共通品目: 1列目の料理名は全曜日に入る。
        // 食事区分名そのものはis_food_itemが除外する。
        if is_food_item(first) {
            for (_, menu) in days.iter_mut() {
                menu.add(meal, first);
            }
        }

        // 曜日別品目: 各曜日列のセルをノイズフィルタにかけてから追加する
        for (col, day) in &header.day_columns {
            let cell = grid.cell(row_idx, *col);
            if !is_junk(cell) {
                if let Some((_, menu)) = days.iter_mut().find(|(existing, _)| existing == day) {
                    menu.add(meal, cell);
                }
            }
        }
    }

    for (day, menu) in &days {
        debug!(
            "{}: breakfast({}) lunch({}) snacks({}) dinner({})",
            day.as_upper(),
            menu.items(MealType::Breakfast).len(),
            menu.items(MealType::Lunch).len(),
            menu.items(MealType::Snacks).len(),
            menu.items(MealType::Dinner).len()
        );
    }

    WeeklyMenu::from_parts(days)
}
