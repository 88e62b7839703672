//! weekmenu - Heuristic weekly-menu extractor for hand-maintained Excel sheets
//!
//! This crate parses a loosely structured weekly menu spreadsheet (a
//! day-labeled header row, meal-name section markers in the first column,
//! per-day food cells) and normalizes it into a `WeeklyMenu`: an ordered
//! mapping from weekday to per-meal item lists, with noise cells (timings,
//! totals, feedback boilerplate) filtered out by a heuristic classifier.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use weekmenu::parse_menu;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("menu.xlsx")?;
//!     let menu = parse_menu(&bytes)?;
//!
//!     println!("{}", menu.to_json_string()?);
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use weekmenu::{MenuExtractorBuilder, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Pick an explicit sheet instead of the "menu" name heuristic
//!     let extractor = MenuExtractorBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Week 32".to_string()))
//!         .with_max_input_size(4 * 1024 * 1024)
//!         .build()?;
//!
//!     let bytes = std::fs::read("menu.xlsx")?;
//!     let menu = extractor.parse_bytes(&bytes)?;
//!
//!     for (day, day_menu) in menu.days() {
//!         for meal in weekmenu::MealType::ALL {
//!             println!("{} {}: {:?}", day.as_upper(), meal.as_key(), day_menu.items(meal));
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Robustness model
//!
//! Source documents are informally authored office files. Row-level
//! anomalies (short rows, blank cells, stray formatting, timing columns)
//! are absorbed by the classification heuristics and never become errors;
//! only unreadable input, an empty workbook, or a missing day header row
//! terminate a call with an error.

mod api;
mod builder;
mod classify;
mod error;
mod extract;
mod grid;
mod parser;
mod types;
mod vocab;

pub use api::SheetSelector;
pub use builder::{MenuExtractor, MenuExtractorBuilder};
pub use error::MenuExtractError;
pub use types::{DayMenu, MealType, WeeklyMenu, Weekday};

/// バイト列から週間メニューを抽出する（デフォルト設定）
///
/// `MenuExtractorBuilder`のデフォルト設定で抽出を行う便宜関数です。
/// シート選択を変えたい場合やサイズ上限を調整したい場合はビルダーを
/// 使用してください。
///
/// # 使用例
///
/// ```rust,no_run
/// # fn main() -> Result<(), weekmenu::MenuExtractError> {
/// let bytes = std::fs::read("menu.xlsx")?;
/// let menu = weekmenu::parse_menu(&bytes)?;
/// # Ok(())
/// # }
/// ```
pub fn parse_menu(bytes: &[u8]) -> Result<WeeklyMenu, MenuExtractError> {
    MenuExtractorBuilder::new().build()?.parse_bytes(bytes)
}
