//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックレベルの操作を提供する。
//! 入力バイト列のデコード、シート名の列挙、シート選択、および選択した
//! シートのグリッド化を担当する。

use calamine::{open_workbook_auto_from_rs, Reader, Sheets};
use std::io::{Cursor, Read, Seek};

use crate::api::SheetSelector;
use crate::error::MenuExtractError;
use crate::grid::RawGrid;

/// ワークブックパーサー
pub(crate) struct WorkbookParser {
    workbook: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// 入力全体をメモリに読み込んだうえで、サイズ上限を検証してから
    /// calamineの自動形式判定でデコードする。デコードに失敗した場合は
    /// `MenuExtractError::Malformed`になる。
    pub fn open<R: Read + Seek>(
        mut reader: R,
        max_input_size: u64,
    ) -> Result<Self, MenuExtractError> {
        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)? as u64;

        if bytes_read > max_input_size {
            return Err(MenuExtractError::InputTooLarge {
                size: bytes_read,
                max: max_input_size,
            });
        }

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        Ok(Self { workbook })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシートを1枚選択
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, MenuExtractError> {
        select_sheet_name(&self.sheet_names(), selector)
    }

    /// 選択したシートをトリム済みテキストのグリッドとして取得
    pub fn worksheet_grid(&mut self, sheet_name: &str) -> Result<RawGrid, MenuExtractError> {
        let range = self.workbook.worksheet_range(sheet_name)?;
        Ok(RawGrid::from_range(&range))
    }
}

/// シート名のリストから抽出対象のシートを選択する
///
/// `Auto`はシート名に"menu"を含む最初のシート、なければ先頭のシートを
/// 選択する。シートが1枚もなければ`NoSheets`、明示指定が解決できなければ
/// `Config`エラーになる。
pub(crate) fn select_sheet_name(
    names: &[String],
    selector: &SheetSelector,
) -> Result<String, MenuExtractError> {
    if names.is_empty() {
        return Err(MenuExtractError::NoSheets);
    }

    match selector {
        SheetSelector::Auto => {
            let candidate = names
                .iter()
                .find(|name| name.to_lowercase().contains("menu"))
                .unwrap_or(&names[0]);
            Ok(candidate.clone())
        }

        SheetSelector::Index(index) => names.get(*index).cloned().ok_or_else(|| {
            MenuExtractError::Config(format!(
                "Sheet index {} is out of range (total: {})",
                index,
                names.len()
            ))
        }),

        SheetSelector::Name(name) => {
            if names.contains(name) {
                Ok(name.clone())
            } else {
                Err(MenuExtractError::Config(format!(
                    "Sheet '{}' not found",
                    name
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_prefers_menu_sheet_regardless_of_position() {
        let sheets = names(&["Info", "Weekly Menu", "Feedback"]);
        let selected = select_sheet_name(&sheets, &SheetSelector::Auto).unwrap();
        assert_eq!(selected, "Weekly Menu");
    }

    #[test]
    fn test_auto_match_is_case_insensitive() {
        let sheets = names(&["Sheet1", "MENU 2025"]);
        let selected = select_sheet_name(&sheets, &SheetSelector::Auto).unwrap();
        assert_eq!(selected, "MENU 2025");
    }

    #[test]
    fn test_auto_falls_back_to_first_sheet() {
        let sheets = names(&["Sheet1", "Sheet2"]);
        let selected = select_sheet_name(&sheets, &SheetSelector::Auto).unwrap();
        assert_eq!(selected, "Sheet1");
    }

    #[test]
    fn test_empty_workbook_is_no_sheets() {
        let err = select_sheet_name(&[], &SheetSelector::Auto).unwrap_err();
        assert!(matches!(err, MenuExtractError::NoSheets));

        let err = select_sheet_name(&[], &SheetSelector::Index(0)).unwrap_err();
        assert!(matches!(err, MenuExtractError::NoSheets));
    }

    #[test]
    fn test_index_selection() {
        let sheets = names(&["Info", "Menu"]);
        assert_eq!(
            select_sheet_name(&sheets, &SheetSelector::Index(1)).unwrap(),
            "Menu"
        );

        let err = select_sheet_name(&sheets, &SheetSelector::Index(2)).unwrap_err();
        assert!(matches!(err, MenuExtractError::Config(_)));
    }

    #[test]
    fn test_name_selection() {
        let sheets = names(&["Info", "Menu"]);
        assert_eq!(
            select_sheet_name(&sheets, &SheetSelector::Name("Info".to_string())).unwrap(),
            "Info"
        );

        let err =
            select_sheet_name(&sheets, &SheetSelector::Name("Missing".to_string())).unwrap_err();
        assert!(matches!(err, MenuExtractError::Config(_)));
    }
}
