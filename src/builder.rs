//! Builder Module
//!
//! Fluent Builder APIを提供し、`MenuExtractor`インスタンスを段階的に構築する。

use std::io::{Cursor, Read, Seek};

use tracing::debug;

use crate::api::SheetSelector;
use crate::error::MenuExtractError;
use crate::extract;
use crate::parser::WorkbookParser;
use crate::types::WeeklyMenu;

/// 入力サイズ上限のデフォルト値（16 MiB）
///
/// アップロードサービスが受け付けるメニューファイルは高々数百KBであり、
/// この上限は異常な入力からの保護として機能する。
const DEFAULT_MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024;

/// 抽出処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ExtractorConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 入力サイズの上限（バイト）
    pub max_input_size: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::Auto,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `MenuExtractor`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use weekmenu::{MenuExtractorBuilder, SheetSelector};
///
/// # fn main() -> Result<(), weekmenu::MenuExtractError> {
/// let extractor = MenuExtractorBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Menu".to_string()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MenuExtractorBuilder {
    config: ExtractorConfig,
}

impl MenuExtractorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 自動検出（シート名に"menu"を含む最初のシート、
    ///   なければ先頭のシート）
    /// - 入力サイズ上限: 16 MiB
    pub fn new() -> Self {
        Self::default()
    }

    /// 抽出対象のシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use weekmenu::{MenuExtractorBuilder, SheetSelector};
    ///
    /// // 先頭のシートを明示指定
    /// let builder = MenuExtractorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(0));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 入力サイズの上限をバイト単位で指定する
    ///
    /// 上限を超える入力はデコード前に`InputTooLarge`で拒否される。
    pub fn with_max_input_size(mut self, max: u64) -> Self {
        self.config.max_input_size = max;
        self
    }

    /// 設定を検証し、`MenuExtractor`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `MenuExtractError::Config`: 入力サイズ上限が0の場合
    pub fn build(self) -> Result<MenuExtractor, MenuExtractError> {
        if self.config.max_input_size == 0 {
            return Err(MenuExtractError::Config(
                "max_input_size must be greater than zero".to_string(),
            ));
        }

        Ok(MenuExtractor::new(self.config))
    }
}

/// 抽出処理のファサード
///
/// メニュースプレッドシートのバイト列から`WeeklyMenu`を抽出するための
/// メインエントリーポイントです。`MenuExtractorBuilder`を使用して構築
/// された設定に基づいて抽出処理を実行します。
///
/// 抽出は完全にデコード済みのインメモリグリッドに対する単一の同期的な
/// 走査であり、呼び出しごとの状態は呼び出しの外に漏れません。同じ
/// インスタンスを複数スレッドから並行して使用できます。
///
/// # 使用例
///
/// ```rust,no_run
/// use weekmenu::MenuExtractorBuilder;
///
/// # fn main() -> Result<(), weekmenu::MenuExtractError> {
/// let extractor = MenuExtractorBuilder::new().build()?;
/// let bytes = std::fs::read("menu.xlsx")?;
/// let menu = extractor.parse_bytes(&bytes)?;
/// println!("{}", menu.to_json_string()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MenuExtractor {
    config: ExtractorConfig,
}

impl MenuExtractor {
    pub(crate) fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// リーダーから週間メニューを抽出する
    ///
    /// # 処理フロー
    ///
    /// 1. 入力をメモリに読み込み、サイズ上限を検証してデコードする
    /// 2. シートを1枚選択する
    /// 3. 選択したシートをトリム済みテキストのグリッドに正規化する
    /// 4. 曜日ヘッダー行を特定する
    /// 5. ヘッダーより下の行を走査してメニューを組み立てる
    ///
    /// # 発生し得るエラー
    ///
    /// * `Io` - 入力の読み込みに失敗した場合
    /// * `InputTooLarge` - 入力がサイズ上限を超えた場合
    /// * `Malformed` - バイト列がスプレッドシートとしてデコードできない場合
    /// * `NoSheets` - ワークブックにシートが存在しない場合
    /// * `Config` - 明示指定されたシートが解決できない場合
    /// * `HeaderNotFound` - 曜日ヘッダー行が見つからない場合
    pub fn parse<R: Read + Seek>(&self, input: R) -> Result<WeeklyMenu, MenuExtractError> {
        let mut parser = WorkbookParser::open(input, self.config.max_input_size)?;

        let sheet_name = parser.select_sheet(&self.config.sheet_selector)?;
        debug!("processing sheet: {}", sheet_name);

        let grid = parser.worksheet_grid(&sheet_name)?;
        debug!("normalized grid with {} rows", grid.row_count());

        let header = extract::locate_header(&grid)?;

        Ok(extract::extract_menu(&grid, &header))
    }

    /// バイト列から週間メニューを抽出する
    ///
    /// `parse`のバイトスライス版。アップロードサービスから受け取った
    /// バッファをそのまま渡すための便宜メソッドです。
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<WeeklyMenu, MenuExtractError> {
        self.parse(Cursor::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = MenuExtractorBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::Auto);
        assert_eq!(builder.config.max_input_size, DEFAULT_MAX_INPUT_SIZE);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = MenuExtractorBuilder::new()
            .with_sheet_selector(SheetSelector::Index(2))
            .with_max_input_size(1024);

        assert_eq!(builder.config.sheet_selector, SheetSelector::Index(2));
        assert_eq!(builder.config.max_input_size, 1024);
    }

    #[test]
    fn test_build_rejects_zero_size_limit() {
        let result = MenuExtractorBuilder::new().with_max_input_size(0).build();
        assert!(matches!(result, Err(MenuExtractError::Config(_))));
    }

    #[test]
    fn test_parse_bytes_rejects_garbage() {
        let extractor = MenuExtractorBuilder::new().build().unwrap();
        let result = extractor.parse_bytes(b"this is not a spreadsheet");
        assert!(matches!(result, Err(MenuExtractError::Malformed(_))));
    }
}
