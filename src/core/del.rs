use crate::errors::{AppError, AppResult};
use crate::models::{ActivityKind, PromptRecord};
use crate::store::SheetStore;

/// Number of header rows above the data in every sheet.
const HEADER_ROWS: usize = 1;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the first password-matching record whose activity code
    /// equals `code`. The whole sheet is re-fetched here rather than
    /// trusting positions from an earlier lookup, so a row offset is never
    /// resolved against a stale snapshot.
    pub fn apply<S: SheetStore>(
        store: &mut S,
        kind: ActivityKind,
        password: &str,
        code: &str,
    ) -> AppResult<PromptRecord> {
        let sheet = kind.sheet_name();
        let records = store.all_records(sheet)?;

        let target = records
            .iter()
            .enumerate()
            .filter(|(_, fields)| fields.get("password").is_some_and(|p| p == password))
            .find(|(_, fields)| fields.get("activity_code").is_some_and(|c| c == code));

        let (index, fields) = target.ok_or_else(|| AppError::RecordNotFound(code.to_string()))?;
        let record = PromptRecord::from_fields(kind, fields);

        // 1-based sheet position, header row included
        store.delete_row(sheet, index + HEADER_ROWS + 1)?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::core::lookup::LookupLogic;
    use crate::store::CsvWorkbook;
    use std::env;

    fn setup_workbook(name: &str) -> CsvWorkbook {
        let mut dir = env::temp_dir();
        dir.push(format!("{}_promptbank_del", name));
        std::fs::remove_dir_all(&dir).ok();

        let sheets: Vec<(&str, [&str; 5])> = ActivityKind::ALL
            .iter()
            .map(|k| (k.sheet_name(), k.header()))
            .collect();
        CsvWorkbook::create(&dir, &sheets).unwrap()
    }

    #[test]
    fn deletes_exactly_one_row() {
        let mut wb = setup_workbook("one_row");
        let kind = ActivityKind::TextGeneration;

        AddLogic::apply(&mut wb, kind, "alpha", "a", "", "pw").unwrap();
        AddLogic::apply(&mut wb, kind, "beta", "b", "", "pw").unwrap();

        let gone = DeleteLogic::apply(&mut wb, kind, "pw", "alpha").unwrap();
        assert_eq!(gone.activity_code, "alpha");

        let left = wb.all_records(kind.sheet_name()).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0]["activity_code"], "beta");
    }

    #[test]
    fn position_resolves_against_the_full_table() {
        let mut wb = setup_workbook("offset");
        let kind = ActivityKind::TextGeneration;

        // two rows owned by someone else sit above the target, so the
        // target's filtered index (0) differs from its table index (2)
        AddLogic::apply(&mut wb, kind, "first", "x", "", "other").unwrap();
        AddLogic::apply(&mut wb, kind, "second", "y", "", "other").unwrap();
        AddLogic::apply(&mut wb, kind, "mine", "z", "", "pw").unwrap();

        DeleteLogic::apply(&mut wb, kind, "pw", "mine").unwrap();

        let left = wb.all_records(kind.sheet_name()).unwrap();
        let codes: Vec<&str> = left.iter().map(|f| f["activity_code"].as_str()).collect();
        assert_eq!(codes, vec!["first", "second"]);
    }

    #[test]
    fn wrong_password_cannot_delete() {
        let mut wb = setup_workbook("wrong_pw");
        let kind = ActivityKind::TextGeneration;
        AddLogic::apply(&mut wb, kind, "alpha", "a", "", "pw").unwrap();

        let err = DeleteLogic::apply(&mut wb, kind, "other", "alpha").unwrap_err();
        assert!(matches!(err, AppError::RecordNotFound(_)));

        // still there under the right password
        assert_eq!(LookupLogic::find_by_password(&wb, kind, "pw").unwrap().len(), 1);
    }

    #[test]
    fn unknown_code_is_record_not_found() {
        let mut wb = setup_workbook("unknown");
        let kind = ActivityKind::TextGeneration;
        AddLogic::apply(&mut wb, kind, "alpha", "a", "", "pw").unwrap();

        assert!(matches!(
            DeleteLogic::apply(&mut wb, kind, "pw", "ghost"),
            Err(AppError::RecordNotFound(_))
        ));
    }
}
