//! CSV-backed workbook: one `<sheet>.csv` file per sheet inside a
//! workbook directory.

use crate::errors::{AppError, AppResult};
use crate::store::{FieldMap, SheetStore};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    /// Open an existing workbook directory.
    pub fn open(dir: &Path) -> AppResult<Self> {
        if !dir.is_dir() {
            return Err(AppError::SheetNotFound(dir.to_string_lossy().to_string()));
        }
        Ok(Self { dir: dir.to_path_buf() })
    }

    /// Create the workbook directory and every listed sheet.
    /// Existing sheets are left untouched so `init` can be re-run safely.
    pub fn create(dir: &Path, sheets: &[(&str, [&str; 5])]) -> AppResult<Self> {
        std::fs::create_dir_all(dir)?;
        let wb = Self { dir: dir.to_path_buf() };

        for (name, header) in sheets {
            let path = wb.sheet_path(name);
            if path.exists() {
                continue;
            }
            let mut wtr = WriterBuilder::new().from_path(&path)?;
            wtr.write_record(header)?;
            wtr.flush()?;
        }

        Ok(wb)
    }

    fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", sheet))
    }

    /// Read a whole sheet: header row plus data rows, in file order.
    fn read_sheet(&self, sheet: &str) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Err(AppError::SheetNotFound(sheet.to_string()));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let rec = result?;
            rows.push(rec.iter().map(str::to_string).collect::<Vec<String>>());
        }

        if rows.is_empty() {
            return Err(AppError::SheetNotFound(sheet.to_string()));
        }

        let header = rows.remove(0);
        Ok((header, rows))
    }

    /// Rewrite a sheet from scratch (used by delete_row).
    fn write_sheet(&self, sheet: &str, header: &[String], rows: &[Vec<String>]) -> AppResult<()> {
        let mut wtr = WriterBuilder::new()
            .flexible(true)
            .from_path(self.sheet_path(sheet))?;
        wtr.write_record(header)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl SheetStore for CsvWorkbook {
    fn column_values(&self, sheet: &str, column: usize) -> AppResult<Vec<String>> {
        let (_, rows) = self.read_sheet(sheet)?;
        Ok(rows
            .iter()
            .map(|row| row.get(column - 1).cloned().unwrap_or_default())
            .collect())
    }

    fn all_records(&self, sheet: &str) -> AppResult<Vec<FieldMap>> {
        let (header, rows) = self.read_sheet(sheet)?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let mut fields = FieldMap::new();
            for (i, name) in header.iter().enumerate() {
                fields.insert(name.clone(), row.get(i).cloned().unwrap_or_default());
            }
            out.push(fields);
        }
        Ok(out)
    }

    fn append_row(&mut self, sheet: &str, values: &[String]) -> AppResult<()> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Err(AppError::SheetNotFound(sheet.to_string()));
        }

        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| AppError::Append(e.to_string()))?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(values)
            .map_err(|e| AppError::Append(e.to_string()))?;
        wtr.flush().map_err(|e| AppError::Append(e.to_string()))?;
        Ok(())
    }

    fn delete_row(&mut self, sheet: &str, position: usize) -> AppResult<()> {
        let (header, mut rows) = self.read_sheet(sheet)?;

        // position 1 is the header; data rows start at 2
        if position < 2 || position > rows.len() + 1 {
            return Err(AppError::Delete(format!(
                "row {} is out of range for sheet '{}'",
                position, sheet
            )));
        }

        rows.remove(position - 2);
        self.write_sheet(sheet, &header, &rows)
            .map_err(|e| AppError::Delete(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityKind;
    use std::env;

    fn setup_workbook(name: &str) -> CsvWorkbook {
        let mut dir = env::temp_dir();
        dir.push(format!("{}_promptbank_wb", name));
        std::fs::remove_dir_all(&dir).ok();

        let sheets: Vec<(&str, [&str; 5])> = ActivityKind::ALL
            .iter()
            .map(|k| (k.sheet_name(), k.header()))
            .collect();
        CsvWorkbook::create(&dir, &sheets).unwrap()
    }

    fn row(ts: &str, code: &str, payload: &str, email: &str, pw: &str) -> Vec<String> {
        vec![ts.into(), code.into(), payload.into(), email.into(), pw.into()]
    }

    #[test]
    fn append_then_read_back() {
        let mut wb = setup_workbook("append_read");

        wb.append_row("text", &row("2024-01-01 10:00:00", "abc", "hello", "", "pw1"))
            .unwrap();

        let records = wb.all_records("text").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["activity_code"], "abc");
        assert_eq!(records[0]["prompt"], "hello");
        assert_eq!(records[0]["password"], "pw1");

        let codes = wb.column_values("text", 2).unwrap();
        assert_eq!(codes, vec!["abc".to_string()]);
    }

    #[test]
    fn empty_sheet_has_no_records() {
        let wb = setup_workbook("empty");
        assert!(wb.all_records("vision").unwrap().is_empty());
        assert!(wb.column_values("vision", 2).unwrap().is_empty());
    }

    #[test]
    fn missing_sheet_is_an_error() {
        let wb = setup_workbook("missing");
        assert!(matches!(
            wb.all_records("nope"),
            Err(AppError::SheetNotFound(_))
        ));
    }

    #[test]
    fn delete_row_removes_exactly_one() {
        let mut wb = setup_workbook("delete_one");
        wb.append_row("text", &row("2024-01-01 10:00:00", "alpha", "a", "", "pw"))
            .unwrap();
        wb.append_row("text", &row("2024-01-01 10:01:00", "beta", "b", "", "pw"))
            .unwrap();

        // first data row sits at position 2
        wb.delete_row("text", 2).unwrap();

        let records = wb.all_records("text").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["activity_code"], "beta");
    }

    #[test]
    fn delete_row_out_of_range() {
        let mut wb = setup_workbook("delete_range");
        assert!(matches!(wb.delete_row("text", 1), Err(AppError::Delete(_))));
        assert!(matches!(wb.delete_row("text", 2), Err(AppError::Delete(_))));
    }

    #[test]
    fn create_is_idempotent() {
        let mut wb = setup_workbook("reinit");
        wb.append_row("text", &row("2024-01-01 10:00:00", "abc", "hi", "", ""))
            .unwrap();

        let sheets: Vec<(&str, [&str; 5])> = ActivityKind::ALL
            .iter()
            .map(|k| (k.sheet_name(), k.header()))
            .collect();
        let wb2 = CsvWorkbook::create(&wb.dir, &sheets).unwrap();

        assert_eq!(wb2.all_records("text").unwrap().len(), 1);
    }
}
