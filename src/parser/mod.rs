//! Parser Module
//!
//! calamineを使用したワークブック読み込みとシート選択を提供するモジュール。

mod workbook;

pub(crate) use workbook::WorkbookParser;
