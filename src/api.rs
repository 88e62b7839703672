//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// 抽出対象のシートを選択する方法を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// メニューシートの自動検出（デフォルト）
    ///
    /// シート名に"menu"を含む最初のシートを選択します（大文字小文字を
    /// 区別しません）。該当するシートがない場合は先頭のシートを選択します。
    ///
    /// # 例
    ///
    /// シート名が `["Info", "Weekly Menu", "Feedback"]` の場合、
    /// 位置に関係なく "Weekly Menu" が選択されます。
    Auto,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Menu".to_string())`
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Auto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(SheetSelector::default(), SheetSelector::Auto);
    }
}
