//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// weekmenuクレート全体で使用するエラー型
///
/// メニューファイルの読み込み、デコード、抽出処理中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
/// いずれのエラーも呼び出しに対して終端的であり、内部リトライは行いません。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（入力読み込み失敗など）
/// - `Malformed`: バイト列がサポートされたスプレッドシート形式として
///   デコードできなかったエラー（calamine由来）
/// - `NoSheets`: ワークブックにシートが1枚も存在しないエラー
/// - `HeaderNotFound`: 曜日ヘッダー行（"MONDAY"アンカー）が見つからないエラー
/// - `Config`: 設定の検証に失敗したエラー（不正なシート指定など）
/// - `InputTooLarge`: 入力サイズが設定上限を超えたエラー
/// - `Json`: 抽出結果のJSONシリアライズに失敗したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use weekmenu::{parse_menu, MenuExtractError};
///
/// fn load(bytes: &[u8]) -> Result<(), MenuExtractError> {
///     match parse_menu(bytes) {
///         Ok(menu) => println!("{}", menu.to_json_string()?),
///         Err(MenuExtractError::HeaderNotFound) => {
///             eprintln!("シートに曜日ヘッダー行がありません");
///         }
///         Err(e) => return Err(e),
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum MenuExtractError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// バイト列がスプレッドシートとしてデコードできなかったエラー
    ///
    /// calamineがワークブックを開く際に発生したエラーです。破損した
    /// ファイルや、サポートされていない形式が原因となります。
    #[error("Failed to decode spreadsheet: {0}")]
    Malformed(#[from] calamine::Error),

    /// ワークブックにシートが1枚も存在しないエラー
    #[error("Workbook contains no sheets")]
    NoSheets,

    /// 曜日ヘッダー行が見つからないエラー
    ///
    /// どの行にも、トリム・大文字化後に"MONDAY"と一致するセルが
    /// 存在しない場合に発生します。
    #[error("Could not find a header row containing 'MONDAY'")]
    HeaderNotFound,

    /// 設定の検証に失敗したエラー
    ///
    /// `MenuExtractorBuilder::build()`時の検証、およびシート選択で
    /// 指定されたシートが存在しない場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// 入力サイズが設定上限を超えたエラー
    ///
    /// アップロードされたファイルをデコードする前に検出されます。
    #[error("Input size {size} bytes exceeds maximum of {max} bytes")]
    InputTooLarge {
        /// 実際の入力サイズ（バイト）
        size: u64,
        /// 設定された上限（バイト）
        max: u64,
    },

    /// JSONシリアライズに失敗したエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
