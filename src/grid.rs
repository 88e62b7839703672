//! Grid Module
//!
//! calamineのセルデータから、トリム済みテキストセルの矩形グリッドへの
//! 変換を提供するモジュール。抽出エンジンはこのグリッドのみを入力とし、
//! 元のワークブックには依存しない。

use calamine::{Data, Range};

/// トリム済みテキストセルのグリッド
///
/// 入力バイト列から呼び出しごとに一度だけ構築され、以後変更されない。
/// 行の長さは揃っているとは限らず、範囲外のセル参照は空文字列として
/// 扱われる。
#[derive(Debug, Clone)]
pub(crate) struct RawGrid {
    rows: Vec<Vec<String>>,
}

impl RawGrid {
    /// calamineのセル範囲からグリッドを構築
    ///
    /// calamineの範囲は使用領域の左上を起点とするが、列インデックスは
    /// シートのA1を基準に解釈する必要があるため、絶対座標で稠密化する。
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self { rows: Vec::new() };
        };

        let rows = (0..=end_row)
            .map(|row| {
                (0..=end_col)
                    .map(|col| {
                        range
                            .get_value((row, col))
                            .map(cell_text)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// テキスト行からグリッドを構築（テスト用）
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<&str>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.trim().to_string()).collect())
                .collect(),
        }
    }

    /// すべての行
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// 行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 指定位置のセルテキスト
    ///
    /// 行が短い場合や範囲外の場合は空文字列を返す。短い行はエラーではない。
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// セル値をトリム済みテキストに変換
///
/// 数値は表示表現をそのまま使う（5.0は"5"になる）。エラーセルは
/// エラーコードの文字列になり、後段のノイズフィルタに委ねる。
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
