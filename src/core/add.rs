use crate::core::validate::validate_submission;
use crate::errors::AppResult;
use crate::models::record::CODE_COLUMN;
use crate::models::{ActivityKind, PromptRecord};
use crate::store::SheetStore;
use crate::utils::now_stamp;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate a submission and append it to the sheet of the given kind.
    ///
    /// The code column is read immediately before the append, so the
    /// uniqueness check is best-effort only: two writers racing on the
    /// same code can both get through. At this tool's scale that is an
    /// accepted limitation.
    pub fn apply<S: SheetStore>(
        store: &mut S,
        kind: ActivityKind,
        code: &str,
        payload: &str,
        email: &str,
        password: &str,
    ) -> AppResult<PromptRecord> {
        let sheet = kind.sheet_name();

        let existing_codes = store.column_values(sheet, CODE_COLUMN)?;
        validate_submission(code, payload, password, &existing_codes)?;

        let record = PromptRecord::new(now_stamp(), code.trim(), payload, email, password);
        store.append_row(sheet, &record.to_row())?;

        Ok(record)
    }
}
