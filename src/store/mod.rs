//! Row-oriented sheet store abstraction.
//!
//! The workbook is a named collection of sheets, each a header row followed
//! by data rows of uniform field count. The workflows only ever need the
//! four operations below, so any backend with the same shape (a hosted
//! spreadsheet service, for instance) could sit behind this trait.

pub mod workbook;

pub use workbook::CsvWorkbook;

use crate::errors::AppResult;
use std::collections::BTreeMap;

/// One data row keyed by the header's field names.
pub type FieldMap = BTreeMap<String, String>;

pub trait SheetStore {
    /// All values of one column, data rows only, in table order.
    /// `column` is 1-based to match the sheet layout.
    fn column_values(&self, sheet: &str, column: usize) -> AppResult<Vec<String>>;

    /// Every data row as a header-keyed map, in table order.
    /// Rows shorter than the header are padded with empty fields.
    fn all_records(&self, sheet: &str) -> AppResult<Vec<FieldMap>>;

    /// Append one data row after the last existing row.
    fn append_row(&mut self, sheet: &str, values: &[String]) -> AppResult<()>;

    /// Remove a single row by its 1-based position, header row included
    /// (the first data row is position 2). Later rows shift up.
    fn delete_row(&mut self, sheet: &str, position: usize) -> AppResult<()>;
}
