use crate::errors::AppResult;
use crate::models::{ActivityKind, PromptRecord};
use crate::store::SheetStore;

/// Password-scoped lookup over one sheet.
pub struct LookupLogic;

impl LookupLogic {
    /// Every record whose password field equals `password` exactly
    /// (case-sensitive, no trimming), in table order. An empty result is
    /// a normal outcome, not an error.
    pub fn find_by_password<S: SheetStore>(
        store: &S,
        kind: ActivityKind,
        password: &str,
    ) -> AppResult<Vec<PromptRecord>> {
        let records = store.all_records(kind.sheet_name())?;

        Ok(records
            .iter()
            .filter(|fields| fields.get("password").is_some_and(|p| p == password))
            .map(|fields| PromptRecord::from_fields(kind, fields))
            .collect())
    }
}
